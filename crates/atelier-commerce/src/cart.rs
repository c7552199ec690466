//! Shopping cart and line items.
//!
//! Line items hold base (unadjusted) unit prices; regional adjustment
//! happens when a quote is built from the cart.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Artisan display name.
    pub artisan: String,
    /// Country of origin.
    pub country: String,
    /// Quantity.
    pub quantity: i64,
    /// Base unit price, EUR, before regional adjustment.
    pub base_unit_price: f64,
    /// Parcel weight per unit, kilograms.
    pub weight_kg: f64,
}

/// A shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalog product to the cart.
    ///
    /// Adding a product already in the cart merges quantities. Returns an
    /// error for non-positive quantities or when the merged quantity would
    /// exceed [`MAX_QUANTITY_PER_ITEM`].
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            let new_quantity = existing.quantity + quantity;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            artisan: product.artisan.clone(),
            country: product.country.clone(),
            quantity,
            base_unit_price: product.base_price,
            weight_kg: product.weight_kg,
        });
        Ok(())
    }

    /// Set the quantity of a line. A quantity of zero or less removes it.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(product_id));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subtotal at base prices, EUR, before regional adjustment.
    pub fn base_subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.base_unit_price * i.quantity as f64)
            .sum()
    }

    /// Total parcel weight, kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.weight_kg * i.quantity as f64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn bowl() -> Product {
        Product::new(
            "hand-thrown-clay-bowl",
            "Hand-Thrown Clay Bowl",
            45.0,
            Category::PotteryCeramics,
        )
        .with_artisan("Dragan M.", "Serbia")
    }

    fn scarf() -> Product {
        Product::new(
            "woven-wool-scarf",
            "Woven Wool Scarf",
            28.0,
            Category::TextilesWeaving,
        )
        .with_weight(0.4)
    }

    #[test]
    fn test_add_product() {
        let mut cart = Cart::new();
        cart.add_product(&bowl(), 2).unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        cart.add_product(&bowl(), 1).unwrap();
        cart.add_product(&bowl(), 2).unwrap();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new();
        assert!(cart.add_product(&bowl(), 0).is_err());
        assert!(cart.add_product(&bowl(), -1).is_err());
    }

    #[test]
    fn test_quantity_cap() {
        let mut cart = Cart::new();
        cart.add_product(&bowl(), MAX_QUANTITY_PER_ITEM).unwrap();
        let err = cart.add_product(&bowl(), 1).unwrap_err();
        assert!(matches!(err, CommerceError::QuantityExceedsLimit(..)));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let product = bowl();
        cart.add_product(&product, 2).unwrap();
        assert!(cart.update_quantity(&product.id, 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_base_subtotal_and_weight() {
        let mut cart = Cart::new();
        cart.add_product(&bowl(), 2).unwrap();
        cart.add_product(&scarf(), 1).unwrap();
        assert!((cart.base_subtotal() - 118.0).abs() < 1e-9);
        assert!((cart.total_weight_kg() - 2.4).abs() < 1e-9);
    }
}
