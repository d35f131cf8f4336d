//! Storefront data carried by slot props.
//!
//! These are plain records produced by the host from backend responses.
//! Themes only read them.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Amount in minor units (cents) with an ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money {
    pub amount_minor: i64,
    pub currency: String,
}

impl Money {
    pub fn new(amount_minor: i64, currency: impl Into<String>) -> Self {
        Self {
            amount_minor,
            currency: currency.into(),
        }
    }

    /// Saturates at the `i64` bounds instead of wrapping.
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(
            self.amount_minor.saturating_mul(i64::from(quantity)),
            self.currency.clone(),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        write!(f, "{}{}.{:02} {}", sign, abs / 100, abs % 100, self.currency)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub compare_at_price: Option<Money>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub category_ids: Vec<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub rating: Option<f32>,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    pub fn is_discounted(&self) -> bool {
        self.compare_at_price
            .as_ref()
            .is_some_and(|was| was.amount_minor > self.price.amount_minor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub subtotal: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub discount: Option<Money>,
    pub total: Money,
}

impl Cart {
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderStatus {
    Pending,
    Paid,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    /// Orders can be cancelled until they leave the warehouse.
    pub fn is_cancellable(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Paid | OrderStatus::Processing
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Address {
    pub full_name: String,
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,
    pub number: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub total: Money,
    /// RFC 3339 creation time as reported by the backend.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub shipping_address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pagination {
    /// One-based page index.
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
}

impl Pagination {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        let pages = self.total_items.div_ceil(u64::from(self.per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 24,
            total_items: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortOption {
    #[default]
    Featured,
    Newest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Featured,
        SortOption::Newest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::Rating,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::Newest => "newest",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::Rating => "rating",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(1250, "USD").to_string(), "12.50 USD");
        assert_eq!(Money::new(-5, "EUR").to_string(), "-0.05 EUR");
        assert_eq!(Money::new(300, "UAH").times(3).to_string(), "9.00 UAH");
    }

    #[test]
    fn test_large_amounts_saturate() {
        let price = Money::new(i64::MAX / 2, "EUR");
        assert_eq!(price.times(3).amount_minor, i64::MAX);
        assert_eq!(Money::new(i64::MIN / 2, "EUR").times(3).amount_minor, i64::MIN);
        assert_eq!(price.times(2).amount_minor, i64::MAX - 1);
    }

    #[test]
    fn test_item_count_saturates() {
        let item = |quantity| CartItem {
            product: Product {
                id: "p-1".into(),
                slug: "p-1".into(),
                name: "Bulk".into(),
                description: String::new(),
                price: Money::new(i64::MAX / 2, "EUR"),
                compare_at_price: None,
                images: Vec::new(),
                category_ids: Vec::new(),
                in_stock: true,
                rating: None,
            },
            quantity,
        };
        let cart = Cart {
            items: vec![item(u32::MAX - 1), item(3)],
            subtotal: Money::new(i64::MAX, "EUR"),
            discount: None,
            total: Money::new(i64::MAX, "EUR"),
        };
        assert_eq!(cart.item_count(), u32::MAX);
        assert_eq!(cart.items[1].line_total().amount_minor, i64::MAX);
    }

    #[test]
    fn test_pagination_bounds() {
        let p = Pagination {
            page: 1,
            per_page: 10,
            total_items: 21,
        };
        assert_eq!(p.total_pages(), 3);
        assert!(p.has_next());
        assert!(!p.has_previous());

        let empty = Pagination {
            page: 1,
            per_page: 0,
            total_items: 5,
        };
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn test_order_cancellable_states() {
        assert!(OrderStatus::Paid.is_cancellable());
        assert!(!OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Refunded.is_cancellable());
    }
}
