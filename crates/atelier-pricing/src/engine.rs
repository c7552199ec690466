//! The pricing engine.
//!
//! Pure, stateless computations over validated configuration tables:
//! locale routing, regional prices, shipping quotes, and margin
//! breakdowns. An engine is cheap to share (`&PricingEngine`) across any
//! number of threads; nothing in it mutates after construction.

use crate::config::PricingConfig;
use crate::error::PricingError;
use crate::locale::Locale;
use crate::margin::{MarginBreakdown, PLATFORM_FEE_RATE};
use crate::region::{PricingRegion, RegionConfig};
use crate::shipping::{ShippingQuote, ShippingRate, ShippingZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row of a per-region price comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RegionalPrice {
    pub region: PricingRegion,
    pub multiplier: f64,
    pub price: f64,
}

/// Regional pricing and shipping calculator.
///
/// Construction validates the configuration once; every region and zone is
/// guaranteed exactly one table entry afterwards, so lookups are total.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
    region_idx: [usize; PricingRegion::ALL.len()],
    zone_idx: [usize; ShippingZone::ALL.len()],
}

impl PricingEngine {
    /// Build an engine over the given configuration.
    ///
    /// Returns an error if any region or zone is missing an entry or has
    /// more than one, a multiplier is not positive, a shipping cost is
    /// negative, a free-shipping threshold is not positive, or a locale
    /// appears in more than one routing entry.
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        let mut region_idx = [0usize; PricingRegion::ALL.len()];
        for region in PricingRegion::ALL {
            let mut entries = config
                .regions
                .iter()
                .enumerate()
                .filter(|(_, c)| c.region == region);
            let (idx, entry) = entries.next().ok_or(PricingError::MissingRegion(region))?;
            if entries.next().is_some() {
                return Err(PricingError::DuplicateRegion(region));
            }
            if !(entry.price_multiplier > 0.0) {
                return Err(PricingError::InvalidMultiplier {
                    region,
                    multiplier: entry.price_multiplier,
                });
            }
            region_idx[region as usize] = idx;
        }

        let mut zone_idx = [0usize; ShippingZone::ALL.len()];
        for zone in ShippingZone::ALL {
            let mut entries = config
                .shipping_rates
                .iter()
                .enumerate()
                .filter(|(_, r)| r.zone == zone);
            let (idx, rate) = entries.next().ok_or(PricingError::MissingZone(zone))?;
            if entries.next().is_some() {
                return Err(PricingError::DuplicateZone(zone));
            }
            if rate.base_cost < 0.0 {
                return Err(PricingError::NegativeRate {
                    zone,
                    field: "base_cost",
                    value: rate.base_cost,
                });
            }
            if rate.per_kg_cost < 0.0 {
                return Err(PricingError::NegativeRate {
                    zone,
                    field: "per_kg_cost",
                    value: rate.per_kg_cost,
                });
            }
            if let Some(threshold) = rate.free_above {
                if !(threshold > 0.0) {
                    return Err(PricingError::InvalidFreeThreshold {
                        zone,
                        value: threshold,
                    });
                }
            }
            zone_idx[zone as usize] = idx;
        }

        for (i, route) in config.locale_routes.iter().enumerate() {
            if config.locale_routes[..i].iter().any(|r| r.locale == route.locale) {
                return Err(PricingError::DuplicateLocaleRoute(route.locale));
            }
        }

        Ok(Self {
            config,
            region_idx,
            zone_idx,
        })
    }

    /// Engine over the built-in reference tables.
    pub fn reference() -> Self {
        // The reference tables are in enum order, one entry each, so the
        // lookup indices are the identity mapping.
        Self {
            config: PricingConfig::reference(),
            region_idx: [0, 1, 2, 3],
            zone_idx: [0, 1, 2, 3, 4],
        }
    }

    /// The configuration the engine was built over.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Region multiplier table, in display order.
    pub fn regions(&self) -> &[RegionConfig] {
        &self.config.regions
    }

    /// Shipping rate table, in display order.
    pub fn shipping_rates(&self) -> &[ShippingRate] {
        &self.config.shipping_rates
    }

    /// The multiplier entry for a region.
    pub fn region_config(&self, region: PricingRegion) -> &RegionConfig {
        &self.config.regions[self.region_idx[region as usize]]
    }

    /// The rate entry for a shipping zone.
    pub fn shipping_rate(&self, zone: ShippingZone) -> &ShippingRate {
        &self.config.shipping_rates[self.zone_idx[zone as usize]]
    }

    /// Resolve the pricing region for a locale.
    ///
    /// Total: locales without a routing entry resolve to the default
    /// region (`western_europe`), not an error.
    pub fn region_for_locale(&self, locale: Locale) -> PricingRegion {
        self.config
            .locale_routes
            .iter()
            .find(|r| r.locale == locale)
            .map(|r| r.region)
            .unwrap_or_default()
    }

    /// Resolve the shipping zone for a locale.
    ///
    /// Total: locales without a routing entry resolve to the default zone
    /// (`eu`), not an error.
    pub fn zone_for_locale(&self, locale: Locale) -> ShippingZone {
        self.config
            .locale_routes
            .iter()
            .find(|r| r.locale == locale)
            .map(|r| r.zone)
            .unwrap_or_default()
    }

    /// Customer-facing price for a base price in a region.
    ///
    /// `base_price * multiplier`, unrounded; display layers round to two
    /// decimals. Rejects negative base prices.
    pub fn regional_price(
        &self,
        base_price: f64,
        region: PricingRegion,
    ) -> Result<f64, PricingError> {
        if base_price < 0.0 {
            return Err(PricingError::NegativeBasePrice(base_price));
        }
        Ok(base_price * self.region_config(region).price_multiplier)
    }

    /// Shipping quote for an order total in a zone.
    ///
    /// `order_total` is the regionally adjusted amount: compute
    /// [`Self::regional_price`] first and pass its result here. The
    /// free-shipping threshold is denominated in the customer's effective
    /// price, so comparing the base price instead would misquote orders
    /// near the threshold.
    ///
    /// The first kilogram is covered by the zone's base cost; only weight
    /// beyond 1kg is charged per-kg. Rejects negative totals and weights.
    pub fn shipping_cost(
        &self,
        order_total: f64,
        zone: ShippingZone,
        weight_kg: f64,
    ) -> Result<ShippingQuote, PricingError> {
        if order_total < 0.0 {
            return Err(PricingError::NegativeOrderTotal(order_total));
        }
        if weight_kg < 0.0 {
            return Err(PricingError::NegativeWeight(weight_kg));
        }
        let rate = self.shipping_rate(zone);
        if let Some(threshold) = rate.free_above {
            if order_total >= threshold {
                debug!(zone = zone.as_str(), order_total, "order ships free");
                return Ok(ShippingQuote {
                    cost: 0.0,
                    is_free: true,
                    free_above: Some(threshold),
                });
            }
        }
        let cost = rate.base_cost + (weight_kg - 1.0).max(0.0) * rate.per_kg_cost;
        debug!(zone = zone.as_str(), order_total, weight_kg, cost, "computed shipping");
        Ok(ShippingQuote {
            cost,
            is_free: false,
            free_above: rate.free_above,
        })
    }

    /// Margin breakdown for a base price sold into a region/zone.
    ///
    /// Selling price first, then shipping from the selling price, then the
    /// platform commission split. The margin percentage is defined as zero
    /// for a zero selling price.
    pub fn margin(
        &self,
        base_price: f64,
        region: PricingRegion,
        zone: ShippingZone,
        weight_kg: f64,
    ) -> Result<MarginBreakdown, PricingError> {
        let selling_price = self.regional_price(base_price, region)?;
        let shipping = self.shipping_cost(selling_price, zone, weight_kg)?;
        let platform_fee = selling_price * PLATFORM_FEE_RATE;
        let artisan_payout = selling_price - platform_fee;
        let margin_pct = if selling_price == 0.0 {
            0.0
        } else {
            platform_fee / selling_price * 100.0
        };
        debug!(
            region = region.as_str(),
            zone = zone.as_str(),
            selling_price,
            platform_fee,
            "computed margin breakdown"
        );
        Ok(MarginBreakdown {
            selling_price,
            shipping_cost: shipping.cost,
            platform_fee,
            artisan_payout,
            margin: platform_fee,
            margin_pct,
        })
    }

    /// Price of one base price across every region, in table order.
    pub fn region_comparison(&self, base_price: f64) -> Result<Vec<RegionalPrice>, PricingError> {
        if base_price < 0.0 {
            return Err(PricingError::NegativeBasePrice(base_price));
        }
        Ok(self
            .config
            .regions
            .iter()
            .map(|c| RegionalPrice {
                region: c.region,
                multiplier: c.price_multiplier,
                price: base_price * c.price_multiplier,
            })
            .collect())
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_regional_price_multipliers() {
        let engine = PricingEngine::reference();
        assert!(approx(
            engine.regional_price(100.0, PricingRegion::Balkans).unwrap(),
            75.0
        ));
        assert!(approx(
            engine.regional_price(100.0, PricingRegion::Turkey).unwrap(),
            80.0
        ));
        assert!(approx(
            engine
                .regional_price(100.0, PricingRegion::WesternEurope)
                .unwrap(),
            100.0
        ));
        assert!(approx(
            engine
                .regional_price(100.0, PricingRegion::International)
                .unwrap(),
            105.0
        ));
    }

    #[test]
    fn test_regional_price_zero_base() {
        let engine = PricingEngine::reference();
        for region in PricingRegion::ALL {
            assert_eq!(engine.regional_price(0.0, region).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_regional_price_monotonic() {
        let engine = PricingEngine::reference();
        for region in PricingRegion::ALL {
            let mut last = 0.0;
            for base in [0.0, 1.0, 9.99, 45.0, 100.0, 1234.56] {
                let price = engine.regional_price(base, region).unwrap();
                assert!(price >= last);
                last = price;
            }
        }
    }

    #[test]
    fn test_negative_base_price_rejected() {
        let engine = PricingEngine::reference();
        let err = engine
            .regional_price(-1.0, PricingRegion::Balkans)
            .unwrap_err();
        assert!(matches!(err, PricingError::NegativeBasePrice(_)));
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let engine = PricingEngine::reference();
        for zone in ShippingZone::ALL {
            let Some(threshold) = engine.shipping_rate(zone).free_above else {
                continue;
            };
            let at = engine.shipping_cost(threshold, zone, 1.0).unwrap();
            assert!(at.is_free);
            assert_eq!(at.cost, 0.0);

            let below = engine.shipping_cost(threshold - 0.01, zone, 1.0).unwrap();
            assert!(!below.is_free);
            assert!(below.cost > 0.0);
        }
    }

    #[test]
    fn test_international_never_free() {
        let engine = PricingEngine::reference();
        for total in [0.0, 100.0, 10_000.0] {
            let quote = engine
                .shipping_cost(total, ShippingZone::International, 5.0)
                .unwrap();
            assert!(!quote.is_free);
            assert_eq!(quote.free_above, None);
        }
    }

    #[test]
    fn test_first_kilogram_included() {
        let engine = PricingEngine::reference();
        for zone in ShippingZone::ALL {
            let rate = engine.shipping_rate(zone).clone();
            let quote = engine.shipping_cost(1.0, zone, 1.0).unwrap();
            assert!(approx(quote.cost, rate.base_cost));

            // Sub-kilogram parcels are not discounted below the base cost.
            let light = engine.shipping_cost(1.0, zone, 0.2).unwrap();
            assert!(approx(light.cost, rate.base_cost));
        }
    }

    #[test]
    fn test_weight_surcharge_beyond_first_kg() {
        let engine = PricingEngine::reference();
        let rate = engine.shipping_rate(ShippingZone::Eu).clone();
        let quote = engine.shipping_cost(50.0, ShippingZone::Eu, 3.0).unwrap();
        assert!(approx(quote.cost, rate.base_cost + 2.0 * rate.per_kg_cost));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let engine = PricingEngine::reference();
        let err = engine
            .shipping_cost(50.0, ShippingZone::Eu, -0.5)
            .unwrap_err();
        assert!(matches!(err, PricingError::NegativeWeight(_)));
    }

    #[test]
    fn test_negative_order_total_rejected() {
        let engine = PricingEngine::reference();
        let err = engine
            .shipping_cost(-10.0, ShippingZone::Eu, 1.0)
            .unwrap_err();
        assert!(matches!(err, PricingError::NegativeOrderTotal(_)));
    }

    #[test]
    fn test_margin_western_europe_eu() {
        let engine = PricingEngine::reference();
        let breakdown = engine
            .margin(100.0, PricingRegion::WesternEurope, ShippingZone::Eu, 1.0)
            .unwrap();
        assert!(approx(breakdown.selling_price, 100.0));
        assert!(approx(breakdown.platform_fee, 8.0));
        assert!(approx(breakdown.artisan_payout, 92.0));
        assert!(approx(breakdown.margin, 8.0));
        assert!(approx(breakdown.margin_pct, 8.0));
        // 100 >= the EU threshold of 100, so the order ships free.
        assert_eq!(breakdown.shipping_cost, 0.0);
    }

    #[test]
    fn test_margin_balkans_domestic() {
        let engine = PricingEngine::reference();
        let breakdown = engine
            .margin(45.0, PricingRegion::Balkans, ShippingZone::Domestic, 1.0)
            .unwrap();
        assert!(approx(breakdown.selling_price, 33.75));
        assert!(approx(breakdown.platform_fee, 2.70));
        assert!(approx(breakdown.artisan_payout, 31.05));
        // 33.75 is below the domestic threshold of 40: base cost applies.
        assert!(approx(breakdown.shipping_cost, 3.00));
    }

    #[test]
    fn test_margin_pct_zero_selling_price() {
        let engine = PricingEngine::reference();
        let breakdown = engine
            .margin(0.0, PricingRegion::Balkans, ShippingZone::Domestic, 1.0)
            .unwrap();
        assert_eq!(breakdown.margin_pct, 0.0);
        assert_eq!(breakdown.platform_fee, 0.0);
    }

    #[test]
    fn test_threshold_compares_adjusted_total() {
        // A 50 EUR base price sold into the Balkans adjusts to 37.50,
        // below the domestic threshold of 40 even though the base price
        // clears it. The threshold must see the adjusted amount.
        let engine = PricingEngine::reference();
        let breakdown = engine
            .margin(50.0, PricingRegion::Balkans, ShippingZone::Domestic, 1.0)
            .unwrap();
        assert!(approx(breakdown.selling_price, 37.50));
        assert!(breakdown.shipping_cost > 0.0);
    }

    #[test]
    fn test_locale_resolution() {
        let engine = PricingEngine::reference();
        assert_eq!(engine.region_for_locale(Locale::Sr), PricingRegion::Balkans);
        assert_eq!(engine.zone_for_locale(Locale::Sr), ShippingZone::Balkans);
        assert_eq!(engine.region_for_locale(Locale::Tr), PricingRegion::Turkey);
        assert_eq!(engine.zone_for_locale(Locale::Tr), ShippingZone::Turkey);
        assert_eq!(
            engine.region_for_locale(Locale::En),
            PricingRegion::WesternEurope
        );
        assert_eq!(engine.zone_for_locale(Locale::En), ShippingZone::Eu);
    }

    #[test]
    fn test_unrouted_locale_falls_back() {
        let mut config = PricingConfig::reference();
        config.locale_routes.clear();
        let engine = PricingEngine::new(config).unwrap();
        assert_eq!(
            engine.region_for_locale(Locale::Sr),
            PricingRegion::WesternEurope
        );
        assert_eq!(engine.zone_for_locale(Locale::Sr), ShippingZone::Eu);
    }

    #[test]
    fn test_idempotence() {
        let engine = PricingEngine::reference();
        let a = engine
            .margin(45.0, PricingRegion::Turkey, ShippingZone::Turkey, 2.5)
            .unwrap();
        let b = engine
            .margin(45.0, PricingRegion::Turkey, ShippingZone::Turkey, 2.5)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_region_comparison_rows() {
        let engine = PricingEngine::reference();
        let rows = engine.region_comparison(45.0).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].region, PricingRegion::Balkans);
        assert!(approx(rows[0].price, 33.75));
        assert!(approx(rows[3].price, 47.25));
    }

    #[test]
    fn test_rejects_duplicate_region() {
        let mut config = PricingConfig::reference();
        let dup = config.regions[0].clone();
        config.regions.push(dup);
        let err = PricingEngine::new(config).unwrap_err();
        assert!(matches!(err, PricingError::DuplicateRegion(_)));
    }

    #[test]
    fn test_rejects_missing_zone() {
        let mut config = PricingConfig::reference();
        config.shipping_rates.pop();
        let err = PricingEngine::new(config).unwrap_err();
        assert!(matches!(
            err,
            PricingError::MissingZone(ShippingZone::International)
        ));
    }

    #[test]
    fn test_rejects_zero_multiplier() {
        let mut config = PricingConfig::reference();
        config.regions[0].price_multiplier = 0.0;
        let err = PricingEngine::new(config).unwrap_err();
        assert!(matches!(err, PricingError::InvalidMultiplier { .. }));
    }

    #[test]
    fn test_rejects_duplicate_locale_route() {
        let mut config = PricingConfig::reference();
        let dup = config.locale_routes[0];
        config.locale_routes.push(dup);
        let err = PricingEngine::new(config).unwrap_err();
        assert!(matches!(err, PricingError::DuplicateLocaleRoute(_)));
    }

    #[test]
    fn test_reference_matches_validated_construction() {
        let built = PricingEngine::new(PricingConfig::reference()).unwrap();
        let shortcut = PricingEngine::reference();
        assert_eq!(built.config(), shortcut.config());
    }
}
