//! Pricing regions and their multiplier configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer-facing pricing tier.
///
/// Each region applies a multiplier to the artisan's base price. The
/// default is `WesternEurope`, which is also the fallback for locales
/// without a routing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PricingRegion {
    /// Western Balkans local pricing.
    Balkans,
    /// Turkish market pricing.
    Turkey,
    /// Standard EU / UK / Switzerland pricing.
    #[default]
    WesternEurope,
    /// Worldwide pricing with additional handling.
    International,
}

impl PricingRegion {
    /// All regions, in table order.
    pub const ALL: [PricingRegion; 4] = [
        PricingRegion::Balkans,
        PricingRegion::Turkey,
        PricingRegion::WesternEurope,
        PricingRegion::International,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PricingRegion::Balkans => "balkans",
            PricingRegion::Turkey => "turkey",
            PricingRegion::WesternEurope => "western_europe",
            PricingRegion::International => "international",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "balkans" => Some(PricingRegion::Balkans),
            "turkey" => Some(PricingRegion::Turkey),
            "western_europe" => Some(PricingRegion::WesternEurope),
            "international" => Some(PricingRegion::International),
            _ => None,
        }
    }
}

impl fmt::Display for PricingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Multiplier configuration for one pricing region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionConfig {
    /// The region this entry configures.
    pub region: PricingRegion,
    /// Factor applied to the base price. Must be positive.
    pub price_multiplier: f64,
    /// Display label (e.g. "Western Balkans").
    pub label: String,
    /// Operator-facing description of the tier.
    pub description: String,
}
