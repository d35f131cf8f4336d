//! Sample storefront data for previews, the `render` command and tests.

use vitrine_core::models::{
    Address, Cart, CartItem, Category, Money, Order, OrderItem, OrderStatus, Pagination, Product,
    ProductImage, UserProfile,
};
use vitrine_core::SlotName;

use crate::props::*;

const CURRENCY: &str = "EUR";

fn product(id: &str, name: &str, price: i64, compare_at: Option<i64>, in_stock: bool) -> Product {
    let slug = name.to_lowercase().replace(' ', "-");
    Product {
        id: id.to_string(),
        images: vec![ProductImage {
            url: format!("https://cdn.example.com/products/{}.jpg", slug),
            alt: name.to_string(),
        }],
        slug,
        name: name.to_string(),
        description: format!("{} with free delivery and a 30 day return window.", name),
        price: Money::new(price, CURRENCY),
        compare_at_price: compare_at.map(|amount| Money::new(amount, CURRENCY)),
        category_ids: vec!["c-gear".to_string()],
        in_stock,
        rating: Some(4.6),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("p-1", "Canvas Backpack", 7900, Some(9900), true),
        product("p-2", "Travel Adapter", 2450, None, true),
        product("p-3", "Europe Data Pass", 1900, None, true),
        product("p-4", "Packing Cubes", 3200, None, false),
    ]
}

pub fn categories() -> Vec<Category> {
    [("c-gear", "gear", "Gear"), ("c-esim", "esim", "eSIM"), ("c-books", "books", "Guides")]
        .into_iter()
        .map(|(id, slug, name)| Category {
            id: id.to_string(),
            slug: slug.to_string(),
            name: name.to_string(),
            parent_id: None,
        })
        .collect()
}

pub fn cart() -> Cart {
    let items: Vec<CartItem> = products()
        .into_iter()
        .take(2)
        .zip([1, 2])
        .map(|(product, quantity)| CartItem { product, quantity })
        .collect();
    let subtotal: i64 = items.iter().map(|item| item.line_total().amount_minor).sum();
    let discount = 500;
    Cart {
        items,
        subtotal: Money::new(subtotal, CURRENCY),
        discount: Some(Money::new(discount, CURRENCY)),
        total: Money::new(subtotal - discount, CURRENCY),
    }
}

pub fn address() -> Address {
    Address {
        full_name: "Olena Kovalenko".to_string(),
        line1: "12 Harbour Street".to_string(),
        line2: None,
        city: "Lviv".to_string(),
        postal_code: "79000".to_string(),
        country: "UA".to_string(),
        phone: Some("+380 32 000 0000".to_string()),
    }
}

pub fn user() -> UserProfile {
    UserProfile {
        id: "u-1".to_string(),
        email: "olena@example.com".to_string(),
        display_name: "Olena".to_string(),
        avatar_url: None,
        addresses: vec![address()],
    }
}

pub fn orders() -> Vec<Order> {
    let backpack = products().remove(0);
    vec![
        Order {
            id: "o-1001".to_string(),
            number: "1001".to_string(),
            status: OrderStatus::Processing,
            items: vec![OrderItem {
                product_id: backpack.id.clone(),
                name: backpack.name.clone(),
                quantity: 1,
                unit_price: backpack.price.clone(),
            }],
            total: backpack.price,
            created_at: "2026-09-30T10:15:00Z".to_string(),
            shipping_address: Some(address()),
        },
        Order {
            id: "o-0998".to_string(),
            number: "0998".to_string(),
            status: OrderStatus::Delivered,
            items: Vec::new(),
            total: Money::new(1900, CURRENCY),
            created_at: "2026-08-02T08:00:00Z".to_string(),
            shipping_address: None,
        },
    ]
}

fn paragraphs() -> Vec<String> {
    vec![
        "We build gear for people who travel light.".to_string(),
        "Every order ships from our own warehouse.".to_string(),
    ]
}

fn pagination(total_items: u64) -> Pagination {
    Pagination {
        page: 1,
        per_page: 2,
        total_items,
    }
}

/// Props for `slot` filled with sample data and no-op callbacks.
pub fn sample_props(slot: SlotName) -> SlotProps {
    match slot {
        SlotName::Header => HeaderProps {
            cart_item_count: cart().item_count(),
            user: Some(user()),
            categories: categories(),
            ..Default::default()
        }
        .into(),
        SlotName::Footer => FooterProps {
            categories: categories(),
            ..Default::default()
        }
        .into(),
        SlotName::ProductCard => ProductCardProps::new(products().remove(0)).into(),
        SlotName::CartDrawer => CartDrawerProps {
            is_open: true,
            cart: Some(cart()),
            ..Default::default()
        }
        .into(),
        SlotName::HomePage => HomePageProps {
            featured_products: products(),
            new_arrivals: products().into_iter().rev().take(2).collect(),
            categories: categories(),
            ..Default::default()
        }
        .into(),
        SlotName::ProductsPage => ProductsPageProps {
            products: products(),
            pagination: pagination(4),
            categories: categories(),
            ..Default::default()
        }
        .into(),
        SlotName::ProductDetailPage => ProductDetailPageProps {
            product: Some(products().remove(0)),
            related_products: products().into_iter().skip(1).collect(),
            ..Default::default()
        }
        .into(),
        SlotName::CategoryPage => CategoryPageProps {
            category: categories().into_iter().next(),
            products: products(),
            pagination: pagination(4),
            ..Default::default()
        }
        .into(),
        SlotName::SearchPage => SearchPageProps {
            query: "travel".to_string(),
            results: products().into_iter().skip(1).take(2).collect(),
            pagination: pagination(2),
            ..Default::default()
        }
        .into(),
        SlotName::CartPage => CartPageProps {
            cart: Some(cart()),
            coupon_code: "WELCOME5".to_string(),
            ..Default::default()
        }
        .into(),
        SlotName::CheckoutPage => CheckoutPageProps {
            cart: Some(cart()),
            shipping_address: Some(address()),
            payment_methods: vec!["card".to_string(), "paypal".to_string()],
            selected_payment_method: Some("card".to_string()),
            ..Default::default()
        }
        .into(),
        SlotName::CheckoutSuccessPage => CheckoutSuccessPageProps {
            order: orders().into_iter().next(),
            ..Default::default()
        }
        .into(),
        SlotName::OrdersPage => OrdersPageProps {
            orders: orders(),
            pagination: pagination(2),
            ..Default::default()
        }
        .into(),
        SlotName::OrderDetailPage => OrderDetailPageProps {
            order: orders().into_iter().next(),
            ..Default::default()
        }
        .into(),
        SlotName::ProfilePage => ProfilePageProps {
            user: Some(user()),
            ..Default::default()
        }
        .into(),
        SlotName::LoginPage => LoginPageProps::default().into(),
        SlotName::RegisterPage => RegisterPageProps::default().into(),
        SlotName::ForgotPasswordPage => ForgotPasswordPageProps::default().into(),
        SlotName::ResetPasswordPage => ResetPasswordPageProps {
            token: "sample-reset-token".to_string(),
            ..Default::default()
        }
        .into(),
        SlotName::WishlistPage => WishlistPageProps {
            products: products().into_iter().take(2).collect(),
            ..Default::default()
        }
        .into(),
        SlotName::NotFoundPage => NotFoundPageProps {
            path: "/missing-page".to_string(),
            ..Default::default()
        }
        .into(),
        SlotName::AboutPage => AboutPageProps {
            paragraphs: paragraphs(),
            ..Default::default()
        }
        .into(),
        SlotName::ContactPage => ContactPageProps {
            support_email: Some("help@example.com".to_string()),
            ..Default::default()
        }
        .into(),
        SlotName::FaqPage => FaqPageProps {
            entries: vec![
                FaqEntry {
                    question: "How fast is delivery?".to_string(),
                    answer: "Two to four working days within the EU.".to_string(),
                },
                FaqEntry {
                    question: "When does a data pass start?".to_string(),
                    answer: "On first connection at your destination.".to_string(),
                },
            ],
            expanded: Some(0),
            ..Default::default()
        }
        .into(),
        SlotName::TermsPage => TermsPageProps {
            paragraphs: paragraphs(),
            last_updated: Some("2026-01-15".to_string()),
        }
        .into(),
        SlotName::PrivacyPage => PrivacyPageProps {
            paragraphs: paragraphs(),
            last_updated: Some("2026-01-15".to_string()),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_props_match_requested_slot() {
        for slot in SlotName::ALL {
            assert_eq!(sample_props(slot).slot(), slot);
        }
    }

    #[test]
    fn test_sample_cart_totals_add_up() {
        let cart = cart();
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal.amount_minor, 7900 + 2 * 2450);
        assert_eq!(cart.total.amount_minor, cart.subtotal.amount_minor - 500);
    }
}
