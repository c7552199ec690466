//! Storefront domain types for the Atelier marketplace.
//!
//! Builds the storefront's commerce domain on top of the
//! [`atelier_pricing`] engine:
//!
//! - **Catalog**: products and craft categories
//! - **Cart**: line items at base prices
//! - **Checkout**: regionally priced quotes and payment amounts
//! - **Orders**: placed-order records and back-office aggregates
//! - **Money**: display-currency conversion and minor-unit amounts
//!
//! # Example
//!
//! ```
//! use atelier_commerce::prelude::*;
//! use atelier_pricing::{Locale, PricingEngine};
//!
//! let engine = PricingEngine::reference();
//! let bowl = Product::new("clay-bowl", "Clay Bowl", 45.0, Category::PotteryCeramics);
//!
//! let mut cart = Cart::new();
//! cart.add_product(&bowl, 2)?;
//!
//! let quote = CheckoutQuote::build(&engine, &cart, Locale::Sr)?;
//! let charge = quote.payment_amount_minor();
//! assert!(charge > 0);
//! # Ok::<(), atelier_commerce::CommerceError>(())
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use catalog::{Category, Product};
pub use checkout::{CheckoutQuote, LineQuote};
pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::{eur_to_minor_units, format_eur_in, DisplayCurrency};
pub use order::{
    Customer, Order, OrderLine, OrderStats, OrderStatus, PaymentMethod, PaymentStatus,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
    pub use crate::catalog::{Category, Product};
    pub use crate::checkout::{CheckoutQuote, LineQuote};
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::{eur_to_minor_units, format_eur_in, DisplayCurrency};
    pub use crate::order::{
        Customer, Order, OrderLine, OrderStats, OrderStatus, PaymentMethod, PaymentStatus,
    };
}
