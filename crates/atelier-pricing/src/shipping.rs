//! Shipping zones, rate configuration, and shipping quotes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logistics tier determining shipping cost and free-shipping threshold.
///
/// Distinct from (but correlated with) the pricing region. The default is
/// `Eu`, which is also the fallback for locales without a routing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingZone {
    /// Same-country delivery.
    Domestic,
    /// Cross-border Western Balkans.
    Balkans,
    /// Turkey.
    Turkey,
    /// European Union.
    #[default]
    Eu,
    /// Rest of world.
    International,
}

impl ShippingZone {
    /// All zones, in table order.
    pub const ALL: [ShippingZone; 5] = [
        ShippingZone::Domestic,
        ShippingZone::Balkans,
        ShippingZone::Turkey,
        ShippingZone::Eu,
        ShippingZone::International,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingZone::Domestic => "domestic",
            ShippingZone::Balkans => "balkans",
            ShippingZone::Turkey => "turkey",
            ShippingZone::Eu => "eu",
            ShippingZone::International => "international",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "domestic" => Some(ShippingZone::Domestic),
            "balkans" => Some(ShippingZone::Balkans),
            "turkey" => Some(ShippingZone::Turkey),
            "eu" => Some(ShippingZone::Eu),
            "international" => Some(ShippingZone::International),
            _ => None,
        }
    }
}

impl fmt::Display for ShippingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rate configuration for one shipping zone.
///
/// All amounts are reference-currency EUR. The first kilogram is covered by
/// `base_cost`; only weight beyond 1kg is charged at `per_kg_cost`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingRate {
    /// The zone this entry configures.
    pub zone: ShippingZone,
    /// Display label (e.g. "European Union").
    pub label: String,
    /// Flat cost covering the first kilogram. EUR, non-negative.
    pub base_cost: f64,
    /// Cost per kilogram beyond the first. EUR, non-negative.
    pub per_kg_cost: f64,
    /// Order total at or above which shipping is free. `None` means the
    /// zone never ships free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_above: Option<f64>,
    /// Customer-facing delivery estimate (e.g. "5-10 business days").
    pub estimated_days: String,
}

/// Result of a shipping cost computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShippingQuote {
    /// Shipping cost in EUR. Zero when `is_free`.
    pub cost: f64,
    /// Whether the order cleared the zone's free-shipping threshold.
    pub is_free: bool,
    /// The zone's threshold, echoed for display ("free above X").
    pub free_above: Option<f64>,
}
