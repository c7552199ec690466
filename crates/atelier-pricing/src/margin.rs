//! Margin and payout breakdowns.

use serde::{Deserialize, Serialize};

/// Platform commission retained on every sale, as a fraction of the
/// selling price.
pub const PLATFORM_FEE_RATE: f64 = 0.08;

/// Internal margin breakdown for a single priced item.
///
/// Derived per query, never persisted. All amounts are reference-currency
/// EUR; `margin_pct` is a percentage of the selling price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarginBreakdown {
    /// Base price after the regional multiplier.
    pub selling_price: f64,
    /// Shipping cost computed from the selling price.
    pub shipping_cost: f64,
    /// Commission retained by the marketplace.
    pub platform_fee: f64,
    /// Selling price minus the platform fee.
    pub artisan_payout: f64,
    /// Marketplace margin (equals the platform fee).
    pub margin: f64,
    /// Margin as a percentage of the selling price. Zero when the selling
    /// price is zero.
    pub margin_pct: f64,
}
