//! Checkout quotes.
//!
//! A quote is the priced view of a cart for one customer: every line's
//! unit price is regionally adjusted first, the adjusted subtotal is
//! summed, and shipping is computed ONCE from that adjusted subtotal.
//! The free-shipping threshold must see the customer's effective prices,
//! so the ordering here is load-bearing.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::eur_to_minor_units;
use atelier_pricing::{Locale, PricingEngine, PricingRegion, ShippingQuote, ShippingZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A priced cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineQuote {
    pub product_id: ProductId,
    pub name: String,
    pub artisan: String,
    pub country: String,
    pub quantity: i64,
    /// Base unit price, EUR, before regional adjustment.
    pub base_unit_price: f64,
    /// Regionally adjusted unit price, EUR.
    pub unit_price: f64,
    /// `unit_price * quantity`, EUR.
    pub line_total: f64,
}

/// The priced view of a cart for one region/zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutQuote {
    /// Region whose multiplier was applied.
    pub region: PricingRegion,
    /// Zone whose shipping rate was applied.
    pub zone: ShippingZone,
    /// Priced lines, in cart order.
    pub lines: Vec<LineQuote>,
    /// Regionally adjusted subtotal, EUR.
    pub subtotal: f64,
    /// Shipping quote computed from the adjusted subtotal.
    pub shipping: ShippingQuote,
    /// `subtotal + shipping.cost`, EUR.
    pub total: f64,
    /// Total parcel weight the shipping quote was computed for.
    pub weight_kg: f64,
}

impl CheckoutQuote {
    /// Price a cart for a locale, resolving region and zone through the
    /// engine's routing table.
    pub fn build(
        engine: &PricingEngine,
        cart: &Cart,
        locale: Locale,
    ) -> Result<Self, CommerceError> {
        let region = engine.region_for_locale(locale);
        let zone = engine.zone_for_locale(locale);
        Self::build_for(engine, cart, region, zone)
    }

    /// Price a cart for an explicit region and zone.
    pub fn build_for(
        engine: &PricingEngine,
        cart: &Cart,
        region: PricingRegion,
        zone: ShippingZone,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let mut lines = Vec::with_capacity(cart.items.len());
        let mut subtotal = 0.0;
        for item in &cart.items {
            let unit_price = engine.regional_price(item.base_unit_price, region)?;
            let line_total = unit_price * item.quantity as f64;
            subtotal += line_total;
            lines.push(LineQuote {
                product_id: item.product_id.clone(),
                name: item.name.clone(),
                artisan: item.artisan.clone(),
                country: item.country.clone(),
                quantity: item.quantity,
                base_unit_price: item.base_unit_price,
                unit_price,
                line_total,
            });
        }

        // Shipping sees the adjusted subtotal, never the base subtotal.
        let weight_kg = cart.total_weight_kg();
        let shipping = engine.shipping_cost(subtotal, zone, weight_kg)?;
        let total = subtotal + shipping.cost;

        debug!(
            region = region.as_str(),
            zone = zone.as_str(),
            subtotal,
            shipping_cost = shipping.cost,
            total,
            "built checkout quote"
        );

        Ok(Self {
            region,
            zone,
            lines,
            subtotal,
            shipping,
            total,
            weight_kg,
        })
    }

    /// The amount to charge, in minor currency units, as the payment
    /// collaborator expects it.
    pub fn payment_amount_minor(&self) -> i64 {
        eur_to_minor_units(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};

    fn engine() -> PricingEngine {
        PricingEngine::reference()
    }

    fn bowl() -> Product {
        Product::new(
            "hand-thrown-clay-bowl",
            "Hand-Thrown Clay Bowl",
            45.0,
            Category::PotteryCeramics,
        )
        .with_artisan("Dragan M.", "Serbia")
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = CheckoutQuote::build(&engine(), &Cart::new(), Locale::En).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_quote_resolves_locale() {
        let mut cart = Cart::new();
        cart.add_product(&bowl(), 1).unwrap();
        let quote = CheckoutQuote::build(&engine(), &cart, Locale::Sr).unwrap();
        assert_eq!(quote.region, PricingRegion::Balkans);
        assert_eq!(quote.zone, ShippingZone::Balkans);
        assert!((quote.lines[0].unit_price - 33.75).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_uses_adjusted_subtotal() {
        // Base subtotal 50.0 clears the domestic threshold of 40, but the
        // Balkans-adjusted subtotal 37.50 does not. Shipping must charge.
        let product = Product::new("p", "P", 50.0, Category::LeatherGoods);
        let mut cart = Cart::new();
        cart.add_product(&product, 1).unwrap();
        let quote = CheckoutQuote::build_for(
            &engine(),
            &cart,
            PricingRegion::Balkans,
            ShippingZone::Domestic,
        )
        .unwrap();
        assert!((quote.subtotal - 37.50).abs() < 1e-9);
        assert!(!quote.shipping.is_free);
        assert!((quote.total - 40.50).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_cleared_by_markup() {
        // Base subtotal 96.0 is below the EU threshold of 100, but the
        // international markup lifts it to 100.80. Shipping goes free.
        let product = Product::new("p", "P", 48.0, Category::WoodworkCarving);
        let mut cart = Cart::new();
        cart.add_product(&product, 2).unwrap();
        let quote = CheckoutQuote::build_for(
            &engine(),
            &cart,
            PricingRegion::International,
            ShippingZone::Eu,
        )
        .unwrap();
        assert!((quote.subtotal - 100.80).abs() < 1e-9);
        assert!(quote.shipping.is_free);
        assert_eq!(quote.total, quote.subtotal);
    }

    #[test]
    fn test_weight_accumulates_across_lines() {
        let heavy = Product::new("h", "Heavy", 10.0, Category::WoodworkCarving).with_weight(2.0);
        let mut cart = Cart::new();
        cart.add_product(&heavy, 2).unwrap();
        let quote = CheckoutQuote::build_for(
            &engine(),
            &cart,
            PricingRegion::WesternEurope,
            ShippingZone::Eu,
        )
        .unwrap();
        // 4kg parcel: base 10.00 plus 3 extra kg at 2.00
        assert!((quote.shipping.cost - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_payment_amount_minor_units() {
        let mut cart = Cart::new();
        cart.add_product(&bowl(), 1).unwrap();
        let quote = CheckoutQuote::build_for(
            &engine(),
            &cart,
            PricingRegion::Balkans,
            ShippingZone::Domestic,
        )
        .unwrap();
        // 33.75 subtotal + 3.00 domestic shipping
        assert_eq!(quote.payment_amount_minor(), 3675);
    }
}
