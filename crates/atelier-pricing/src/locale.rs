//! Storefront locales.
//!
//! The storefront ships with a small closed set of UI locales. Pricing
//! region and shipping zone are resolved from the locale via the routing
//! table in [`crate::config::PricingConfig`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported UI locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Serbian.
    Sr,
    /// Albanian.
    Sq,
    /// Bosnian.
    Bs,
    /// Macedonian.
    Mk,
    /// Montenegrin.
    Cnr,
    /// Turkish.
    Tr,
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Locale; 7] = [
        Locale::En,
        Locale::Sr,
        Locale::Sq,
        Locale::Bs,
        Locale::Mk,
        Locale::Cnr,
        Locale::Tr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sr => "sr",
            Locale::Sq => "sq",
            Locale::Bs => "bs",
            Locale::Mk => "mk",
            Locale::Cnr => "cnr",
            Locale::Tr => "tr",
        }
    }

    /// Parse a locale tag (e.g. "sr"). Returns `None` for unknown tags;
    /// callers that want the fallback behavior resolve through the engine
    /// with an explicit default instead.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "sr" => Some(Locale::Sr),
            "sq" => Some(Locale::Sq),
            "bs" => Some(Locale::Bs),
            "mk" => Some(Locale::Mk),
            "cnr" => Some(Locale::Cnr),
            "tr" => Some(Locale::Tr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
