//! Product catalog types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Craft category a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PotteryCeramics,
    TextilesWeaving,
    JewelryMetalwork,
    WoodworkCarving,
    LeatherGoods,
    FoodSpices,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::PotteryCeramics,
        Category::TextilesWeaving,
        Category::JewelryMetalwork,
        Category::WoodworkCarving,
        Category::LeatherGoods,
        Category::FoodSpices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PotteryCeramics => "pottery_ceramics",
            Category::TextilesWeaving => "textiles_weaving",
            Category::JewelryMetalwork => "jewelry_metalwork",
            Category::WoodworkCarving => "woodwork_carving",
            Category::LeatherGoods => "leather_goods",
            Category::FoodSpices => "food_spices",
        }
    }

    /// Customer-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::PotteryCeramics => "Pottery & Ceramics",
            Category::TextilesWeaving => "Textiles & Weaving",
            Category::JewelryMetalwork => "Jewelry & Metalwork",
            Category::WoodworkCarving => "Woodwork & Carving",
            Category::LeatherGoods => "Leather Goods",
            Category::FoodSpices => "Food & Spices",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pottery_ceramics" => Some(Category::PotteryCeramics),
            "textiles_weaving" => Some(Category::TextilesWeaving),
            "jewelry_metalwork" => Some(Category::JewelryMetalwork),
            "woodwork_carving" => Some(Category::WoodworkCarving),
            "leather_goods" => Some(Category::LeatherGoods),
            "food_spices" => Some(Category::FoodSpices),
            _ => None,
        }
    }
}

/// A catalog product.
///
/// `base_price` is the artisan-set reference price in EUR, before any
/// regional multiplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog slug.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Artisan-set reference price, EUR.
    pub base_price: f64,
    /// Craft category.
    pub category: Category,
    /// Artisan display name.
    pub artisan: String,
    /// Country of origin.
    pub country: String,
    /// Parcel weight in kilograms.
    pub weight_kg: f64,
    /// Tags for filtering.
    pub tags: Vec<String>,
    /// Whether the product is currently purchasable.
    pub in_stock: bool,
}

impl Product {
    /// Create a product with a 1kg default parcel weight, in stock.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        base_price: f64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            base_price,
            category,
            artisan: String::new(),
            country: String::new(),
            weight_kg: 1.0,
            tags: Vec::new(),
            in_stock: true,
        }
    }

    pub fn with_artisan(mut self, artisan: impl Into<String>, country: impl Into<String>) -> Self {
        self.artisan = artisan.into();
        self.country = country.into();
        self
    }

    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::PotteryCeramics.label(), "Pottery & Ceramics");
        assert_eq!(Category::FoodSpices.label(), "Food & Spices");
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new(
            "hand-thrown-clay-bowl",
            "Hand-Thrown Clay Bowl",
            45.0,
            Category::PotteryCeramics,
        )
        .with_artisan("Dragan M.", "Serbia")
        .with_weight(1.2);

        assert_eq!(product.base_price, 45.0);
        assert_eq!(product.weight_kg, 1.2);
        assert_eq!(product.country, "Serbia");
        assert!(product.in_stock);
    }
}
