//! Order records and back-office aggregates.
//!
//! Orders are the structured records handed to the notification
//! collaborator and listed in the back office. They snapshot a quote at
//! placement time; persistence is a collaborator concern.

use crate::checkout::CheckoutQuote;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use atelier_pricing::{PricingRegion, ShippingZone};
use serde::{Deserialize, Serialize};

/// Order fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed.
    Confirmed,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Processing
        )
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Online card payment at checkout.
    #[default]
    Online,
    /// Deferred payment: cash on delivery or bank transfer.
    Later,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Online => "online",
            PaymentMethod::Later => "later",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Online => "Online (card)",
            PaymentMethod::Later => "Pay later (cash / bank transfer)",
        }
    }
}

/// Payment capture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

/// Customer contact and delivery details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub notes: String,
}

/// A line snapshotted from the quote at placement time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub artisan: String,
    pub country: String,
    pub quantity: i64,
    /// Regionally adjusted unit price, EUR.
    pub unit_price: f64,
    /// `unit_price * quantity`, EUR.
    pub line_total: f64,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
    /// Regionally adjusted subtotal, EUR.
    pub subtotal: f64,
    /// Shipping charged, EUR.
    pub shipping_cost: f64,
    /// Amount due, EUR.
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    /// Region the quote was priced for.
    pub region: PricingRegion,
    /// Zone the quote was shipped for.
    pub zone: ShippingZone,
    /// Unix timestamp (seconds) of placement.
    pub created_at: i64,
}

impl Order {
    /// Snapshot a quote into an order record.
    pub fn from_quote(
        quote: &CheckoutQuote,
        customer: Customer,
        payment_method: PaymentMethod,
        created_at: i64,
    ) -> Self {
        let lines = quote
            .lines
            .iter()
            .map(|l| OrderLine {
                product_id: l.product_id.clone(),
                name: l.name.clone(),
                artisan: l.artisan.clone(),
                country: l.country.clone(),
                quantity: l.quantity,
                unit_price: l.unit_price,
                line_total: l.line_total,
            })
            .collect();
        Self {
            id: OrderId::generate(created_at),
            customer,
            lines,
            subtotal: quote.subtotal,
            shipping_cost: quote.shipping.cost,
            total: quote.total,
            payment_method,
            payment_status: PaymentStatus::Pending,
            status: OrderStatus::Pending,
            region: quote.region,
            zone: quote.zone,
            created_at,
        }
    }

    /// Record a captured payment.
    pub fn mark_paid(&mut self) {
        self.payment_status = PaymentStatus::Paid;
    }

    /// Cancel the order. A captured payment is marked refunded.
    ///
    /// Returns false without changing anything if the order is already in
    /// a state that cannot be cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        if self.payment_status == PaymentStatus::Paid {
            self.payment_status = PaymentStatus::Refunded;
        }
        true
    }

    /// Serialize the record for the notification collaborator.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Back-office aggregate over a set of orders.
///
/// Cancelled orders are excluded from revenue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderStats {
    pub total_orders: usize,
    /// Revenue over non-cancelled orders, EUR.
    pub revenue: f64,
    /// Average order value over non-cancelled orders, EUR.
    pub average_order_value: f64,
    /// Order counts per status, in lifecycle order.
    pub status_counts: Vec<(OrderStatus, usize)>,
    /// Orders with captured payment.
    pub paid_count: usize,
    /// Non-cancelled orders still awaiting payment.
    pub outstanding_count: usize,
    pub online_count: usize,
    pub later_count: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let active = || orders.iter().filter(|o| o.status != OrderStatus::Cancelled);
        let revenue: f64 = active().map(|o| o.total).sum();
        let active_count = active().count();
        let average_order_value = if active_count == 0 {
            0.0
        } else {
            revenue / active_count as f64
        };
        let status_counts = OrderStatus::ALL
            .iter()
            .map(|&status| (status, orders.iter().filter(|o| o.status == status).count()))
            .collect();
        Self {
            total_orders: orders.len(),
            revenue,
            average_order_value,
            status_counts,
            paid_count: orders
                .iter()
                .filter(|o| o.payment_status == PaymentStatus::Paid)
                .count(),
            outstanding_count: active()
                .filter(|o| o.payment_status == PaymentStatus::Pending)
                .count(),
            online_count: orders
                .iter()
                .filter(|o| o.payment_method == PaymentMethod::Online)
                .count(),
            later_count: orders
                .iter()
                .filter(|o| o.payment_method == PaymentMethod::Later)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::{Category, Product};
    use atelier_pricing::{Locale, PricingEngine};

    fn placed_order(payment_method: PaymentMethod) -> Order {
        let engine = PricingEngine::reference();
        let product = Product::new("p", "Bowl", 45.0, Category::PotteryCeramics)
            .with_artisan("Dragan M.", "Serbia");
        let mut cart = Cart::new();
        cart.add_product(&product, 1).unwrap();
        let quote = CheckoutQuote::build(&engine, &cart, Locale::Sr).unwrap();
        Order::from_quote(&quote, Customer::default(), payment_method, 1_754_000_000)
    }

    #[test]
    fn test_order_snapshots_quote() {
        let order = placed_order(PaymentMethod::Online);
        assert_eq!(order.lines.len(), 1);
        assert!((order.subtotal - 33.75).abs() < 1e-9);
        // 33.75 is below the cross-border Balkans threshold of 60
        assert!((order.shipping_cost - 5.0).abs() < 1e-9);
        assert!((order.total - 38.75).abs() < 1e-9);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_cancel_refunds_captured_payment() {
        let mut order = placed_order(PaymentMethod::Online);
        order.mark_paid();
        assert!(order.cancel());
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.payment_status, PaymentStatus::Refunded);
    }

    #[test]
    fn test_cancel_pending_payment_stays_pending() {
        let mut order = placed_order(PaymentMethod::Later);
        assert!(order.cancel());
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_cannot_cancel_delivered() {
        let mut order = placed_order(PaymentMethod::Online);
        order.status = OrderStatus::Delivered;
        assert!(!order.cancel());
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_stats_exclude_cancelled_revenue() {
        let mut cancelled = placed_order(PaymentMethod::Online);
        cancelled.cancel();
        let mut paid = placed_order(PaymentMethod::Online);
        paid.mark_paid();
        let later = placed_order(PaymentMethod::Later);
        let orders = vec![cancelled, paid.clone(), later];

        let stats = OrderStats::from_orders(&orders);
        assert_eq!(stats.total_orders, 3);
        assert!((stats.revenue - 2.0 * paid.total).abs() < 1e-9);
        assert!((stats.average_order_value - paid.total).abs() < 1e-9);
        assert_eq!(stats.paid_count, 1);
        assert_eq!(stats.outstanding_count, 1);
        assert_eq!(stats.online_count, 2);
        assert_eq!(stats.later_count, 1);
    }

    #[test]
    fn test_order_serializes() {
        let order = placed_order(PaymentMethod::Online);
        let json = order.to_json().unwrap();
        assert!(json.contains("\"region\":\"balkans\""));
        assert!(json.contains(order.id.as_str()));
    }
}
