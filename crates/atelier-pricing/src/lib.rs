//! Regional pricing and shipping engine for the Atelier marketplace.
//!
//! Maps a customer's locale to a pricing region and shipping zone, applies
//! the region's price multiplier, computes tiered free-threshold shipping,
//! and derives the platform-fee / artisan-payout split:
//!
//! - **Regions**: price multiplier tiers ([`PricingRegion`], [`RegionConfig`])
//! - **Shipping**: zone rates and quotes ([`ShippingZone`], [`ShippingRate`])
//! - **Margins**: commission breakdowns ([`MarginBreakdown`])
//! - **Config**: injectable, TOML-loadable tables ([`PricingConfig`])
//!
//! # Example
//!
//! ```
//! use atelier_pricing::prelude::*;
//!
//! let engine = PricingEngine::reference();
//! let region = engine.region_for_locale(Locale::Sr);
//! let zone = engine.zone_for_locale(Locale::Sr);
//!
//! let selling_price = engine.regional_price(45.0, region)?;
//! let shipping = engine.shipping_cost(selling_price, zone, 1.0)?;
//! assert!(!shipping.is_free);
//! # Ok::<(), atelier_pricing::PricingError>(())
//! ```
//!
//! All amounts are reference-currency EUR; display-currency conversion is
//! a concern of the layers above.

pub mod config;
pub mod engine;
pub mod error;
pub mod locale;
pub mod margin;
pub mod region;
pub mod shipping;

pub use config::{LocaleRoute, PricingConfig};
pub use engine::{PricingEngine, RegionalPrice};
pub use error::PricingError;
pub use locale::Locale;
pub use margin::{MarginBreakdown, PLATFORM_FEE_RATE};
pub use region::{PricingRegion, RegionConfig};
pub use shipping::{ShippingQuote, ShippingRate, ShippingZone};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{LocaleRoute, PricingConfig};
    pub use crate::engine::{PricingEngine, RegionalPrice};
    pub use crate::error::PricingError;
    pub use crate::locale::Locale;
    pub use crate::margin::{MarginBreakdown, PLATFORM_FEE_RATE};
    pub use crate::region::{PricingRegion, RegionConfig};
    pub use crate::shipping::{ShippingQuote, ShippingRate, ShippingZone};
}
