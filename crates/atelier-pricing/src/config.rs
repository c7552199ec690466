//! Pricing configuration tables.
//!
//! The engine reads three tables: regional price multipliers, shipping
//! zone rates, and locale routing. They are loaded once (built-in
//! reference tables, or a TOML file for a tuned deployment) and validated
//! at engine construction. Nothing mutates them afterwards.

use crate::error::PricingError;
use crate::locale::Locale;
use crate::region::{PricingRegion, RegionConfig};
use crate::shipping::{ShippingRate, ShippingZone};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Routing entry mapping one locale to its pricing region and shipping
/// zone. One row per locale; locales without a row fall back to
/// `western_europe` / `eu`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LocaleRoute {
    pub locale: Locale,
    pub region: PricingRegion,
    pub zone: ShippingZone,
}

/// The full pricing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// One multiplier entry per pricing region, in display order.
    pub regions: Vec<RegionConfig>,
    /// One rate entry per shipping zone, in display order.
    pub shipping_rates: Vec<ShippingRate>,
    /// Locale routing table.
    #[serde(default)]
    pub locale_routes: Vec<LocaleRoute>,
}

impl PricingConfig {
    /// The built-in reference tables.
    ///
    /// Region and zone entries are in enum order, one entry each.
    pub fn reference() -> Self {
        Self {
            regions: vec![
                RegionConfig {
                    region: PricingRegion::Balkans,
                    price_multiplier: 0.75,
                    label: "Western Balkans".to_string(),
                    description: "Lower prices for local customers in Albania, Serbia, Kosovo, Bosnia, North Macedonia, Montenegro".to_string(),
                },
                RegionConfig {
                    region: PricingRegion::Turkey,
                    price_multiplier: 0.80,
                    label: "Turkey".to_string(),
                    description: "Adjusted pricing for the Turkish market".to_string(),
                },
                RegionConfig {
                    region: PricingRegion::WesternEurope,
                    price_multiplier: 1.0,
                    label: "Western Europe".to_string(),
                    description: "Standard pricing for EU / UK / Switzerland customers".to_string(),
                },
                RegionConfig {
                    region: PricingRegion::International,
                    price_multiplier: 1.05,
                    label: "International".to_string(),
                    description: "Worldwide pricing with additional handling".to_string(),
                },
            ],
            shipping_rates: vec![
                ShippingRate {
                    zone: ShippingZone::Domestic,
                    label: "Domestic (same country)".to_string(),
                    base_cost: 3.00,
                    per_kg_cost: 0.50,
                    free_above: Some(40.0),
                    estimated_days: "2-4 business days".to_string(),
                },
                ShippingRate {
                    zone: ShippingZone::Balkans,
                    label: "Western Balkans (cross-border)".to_string(),
                    base_cost: 5.00,
                    per_kg_cost: 1.00,
                    free_above: Some(60.0),
                    estimated_days: "3-7 business days".to_string(),
                },
                ShippingRate {
                    zone: ShippingZone::Turkey,
                    label: "Turkey".to_string(),
                    base_cost: 8.00,
                    per_kg_cost: 1.50,
                    free_above: Some(80.0),
                    estimated_days: "5-10 business days".to_string(),
                },
                ShippingRate {
                    zone: ShippingZone::Eu,
                    label: "European Union".to_string(),
                    base_cost: 10.00,
                    per_kg_cost: 2.00,
                    free_above: Some(100.0),
                    estimated_days: "5-10 business days".to_string(),
                },
                ShippingRate {
                    zone: ShippingZone::International,
                    label: "Rest of World".to_string(),
                    base_cost: 18.00,
                    per_kg_cost: 3.50,
                    free_above: None,
                    estimated_days: "10-21 business days".to_string(),
                },
            ],
            locale_routes: vec![
                route(Locale::En, PricingRegion::WesternEurope, ShippingZone::Eu),
                route(Locale::Sr, PricingRegion::Balkans, ShippingZone::Balkans),
                route(Locale::Sq, PricingRegion::Balkans, ShippingZone::Balkans),
                route(Locale::Bs, PricingRegion::Balkans, ShippingZone::Balkans),
                route(Locale::Mk, PricingRegion::Balkans, ShippingZone::Balkans),
                route(Locale::Cnr, PricingRegion::Balkans, ShippingZone::Balkans),
                route(Locale::Tr, PricingRegion::Turkey, ShippingZone::Turkey),
            ],
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, PricingError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize the config to TOML text.
    pub fn to_toml_string(&self) -> Result<String, PricingError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::reference()
    }
}

fn route(locale: Locale, region: PricingRegion, zone: ShippingZone) -> LocaleRoute {
    LocaleRoute {
        locale,
        region,
        zone,
    }
}
