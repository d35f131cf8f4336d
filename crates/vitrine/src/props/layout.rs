//! Props of the layout slots embedded into every page.

use vitrine_core::models::{Cart, Category, Product, UserProfile};

use super::{AddToCart, Callback, Dispatch, QuantityChange, ThemeAction};

#[derive(Debug, Clone, Default)]
pub struct HeaderProps {
    pub cart_item_count: u32,
    pub user: Option<UserProfile>,
    pub categories: Vec<Category>,
    pub search_query: String,
    pub on_search: Callback<String>,
    pub on_cart_click: Callback<()>,
    pub on_logo_click: Callback<()>,
    pub on_login_click: Callback<()>,
    pub on_logout: Callback<()>,
    pub on_category_click: Callback<String>,
    pub on_locale_change: Callback<String>,
}

impl Dispatch for HeaderProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::Search(query) => self.on_search.call(query),
            ThemeAction::OpenCart => self.on_cart_click.call(()),
            ThemeAction::GoHome => self.on_logo_click.call(()),
            ThemeAction::OpenLogin => self.on_login_click.call(()),
            ThemeAction::Logout => self.on_logout.call(()),
            ThemeAction::SelectCategory(Some(id)) => self.on_category_click.call(id),
            ThemeAction::ChangeLocale(locale) => self.on_locale_change.call(locale),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FooterProps {
    pub categories: Vec<Category>,
    pub on_newsletter_subscribe: Callback<String>,
    /// Called with an internal path such as `/about`.
    pub on_navigate: Callback<String>,
}

impl Dispatch for FooterProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::SubscribeNewsletter(email) => self.on_newsletter_subscribe.call(email),
            ThemeAction::Navigate(path) => self.on_navigate.call(path),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ProductCardProps {
    pub product: Product,
    pub is_in_wishlist: bool,
    pub on_add_to_cart: Callback<AddToCart>,
    pub on_product_click: Callback<String>,
    pub on_toggle_wishlist: Callback<String>,
}

impl ProductCardProps {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            is_in_wishlist: false,
            on_add_to_cart: Callback::noop(),
            on_product_click: Callback::noop(),
            on_toggle_wishlist: Callback::noop(),
        }
    }
}

impl Dispatch for ProductCardProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::AddToCart(item) => self.on_add_to_cart.call(item),
            ThemeAction::SelectProduct(id) => self.on_product_click.call(id),
            ThemeAction::ToggleWishlist(id) => self.on_toggle_wishlist.call(id),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CartDrawerProps {
    pub is_open: bool,
    pub cart: Option<Cart>,
    pub on_close: Callback<()>,
    pub on_checkout: Callback<()>,
    pub on_update_quantity: Callback<QuantityChange>,
    pub on_remove_item: Callback<String>,
}

impl Dispatch for CartDrawerProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::CloseCart => self.on_close.call(()),
            ThemeAction::Checkout => self.on_checkout.call(()),
            ThemeAction::UpdateCartQuantity(change) => self.on_update_quantity.call(change),
            ThemeAction::RemoveCartItem(id) => self.on_remove_item.call(id),
            other => return Err(other),
        }
        Ok(())
    }
}
