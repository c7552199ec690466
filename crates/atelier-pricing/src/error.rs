//! Pricing error types.

use crate::locale::Locale;
use crate::region::PricingRegion;
use crate::shipping::ShippingZone;
use thiserror::Error;

/// Errors from the pricing engine and its configuration.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Base price below zero.
    #[error("Base price cannot be negative: {0}")]
    NegativeBasePrice(f64),

    /// Order total below zero.
    #[error("Order total cannot be negative: {0}")]
    NegativeOrderTotal(f64),

    /// Weight below zero.
    #[error("Weight cannot be negative: {0} kg")]
    NegativeWeight(f64),

    /// A region has no configuration entry.
    #[error("Missing configuration for region: {0}")]
    MissingRegion(PricingRegion),

    /// A region has more than one configuration entry.
    #[error("Duplicate configuration for region: {0}")]
    DuplicateRegion(PricingRegion),

    /// A shipping zone has no rate entry.
    #[error("Missing rate for shipping zone: {0}")]
    MissingZone(ShippingZone),

    /// A shipping zone has more than one rate entry.
    #[error("Duplicate rate for shipping zone: {0}")]
    DuplicateZone(ShippingZone),

    /// Non-positive price multiplier.
    #[error("Price multiplier for region {region} must be positive, got {multiplier}")]
    InvalidMultiplier {
        region: PricingRegion,
        multiplier: f64,
    },

    /// Negative base or per-kg shipping cost.
    #[error("Negative {field} for shipping zone {zone}: {value}")]
    NegativeRate {
        zone: ShippingZone,
        field: &'static str,
        value: f64,
    },

    /// Non-positive free-shipping threshold.
    #[error("Free-shipping threshold for zone {zone} must be positive, got {value}")]
    InvalidFreeThreshold { zone: ShippingZone, value: f64 },

    /// A locale appears in more than one routing entry.
    #[error("Duplicate locale route: {0}")]
    DuplicateLocaleRoute(Locale),

    /// Config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(String),

    /// Config file could not be parsed or serialized.
    #[error("Config format error: {0}")]
    Format(String),
}

impl From<std::io::Error> for PricingError {
    fn from(e: std::io::Error) -> Self {
        PricingError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for PricingError {
    fn from(e: toml::de::Error) -> Self {
        PricingError::Format(e.to_string())
    }
}

impl From<toml::ser::Error> for PricingError {
    fn from(e: toml::ser::Error) -> Self {
        PricingError::Format(e.to_string())
    }
}
