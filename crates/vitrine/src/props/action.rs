//! User actions routed from rendered markup back to host callbacks.
//!
//! Themes tag interactive elements with `data-action="<name>"`. The host turns
//! the browser event into a [`ThemeAction`] (the JSON shape is
//! `{"action": "<name>", "payload": ...}`) and hands it to
//! [`SlotProps::dispatch`](super::SlotProps::dispatch).

use std::fmt;

use serde::{Deserialize, Serialize};
use vitrine_core::models::{Address, SortOption, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    pub product_id: String,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChange {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub email: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    pub token: String,
    pub new_password: String,
}

impl fmt::Debug for PasswordReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordReset")
            .field("token", &self.token)
            .field("new_password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum ThemeAction {
    Search(String),
    OpenCart,
    CloseCart,
    GoHome,
    OpenLogin,
    OpenRegister,
    OpenForgotPassword,
    Logout,
    Navigate(String),
    ChangeLocale(String),
    SubscribeNewsletter(String),
    SelectCategory(Option<String>),
    SelectProduct(String),
    AddToCart(AddToCart),
    ToggleWishlist(String),
    ChangeSort(SortOption),
    ChangeViewMode(ViewMode),
    ChangePage(u32),
    ChangeQuantity(u32),
    UpdateCartQuantity(QuantityChange),
    RemoveCartItem(String),
    ApplyCoupon(String),
    Checkout,
    ContinueShopping,
    UpdateAddress(Address),
    SelectPaymentMethod(String),
    PlaceOrder,
    Back,
    SelectOrder(String),
    CancelOrder(String),
    Reorder(String),
    OpenOrders,
    SaveProfile(ProfileUpdate),
    SubmitLogin(Credentials),
    SubmitRegistration(Registration),
    RequestPasswordReset(String),
    ResetPassword(PasswordReset),
    SubmitContact(ContactMessage),
    ToggleFaq(usize),
}

impl ThemeAction {
    /// Wire name used in `data-action` attributes.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeAction::Search(_) => "search",
            ThemeAction::OpenCart => "open_cart",
            ThemeAction::CloseCart => "close_cart",
            ThemeAction::GoHome => "go_home",
            ThemeAction::OpenLogin => "open_login",
            ThemeAction::OpenRegister => "open_register",
            ThemeAction::OpenForgotPassword => "open_forgot_password",
            ThemeAction::Logout => "logout",
            ThemeAction::Navigate(_) => "navigate",
            ThemeAction::ChangeLocale(_) => "change_locale",
            ThemeAction::SubscribeNewsletter(_) => "subscribe_newsletter",
            ThemeAction::SelectCategory(_) => "select_category",
            ThemeAction::SelectProduct(_) => "select_product",
            ThemeAction::AddToCart(_) => "add_to_cart",
            ThemeAction::ToggleWishlist(_) => "toggle_wishlist",
            ThemeAction::ChangeSort(_) => "change_sort",
            ThemeAction::ChangeViewMode(_) => "change_view_mode",
            ThemeAction::ChangePage(_) => "change_page",
            ThemeAction::ChangeQuantity(_) => "change_quantity",
            ThemeAction::UpdateCartQuantity(_) => "update_cart_quantity",
            ThemeAction::RemoveCartItem(_) => "remove_cart_item",
            ThemeAction::ApplyCoupon(_) => "apply_coupon",
            ThemeAction::Checkout => "checkout",
            ThemeAction::ContinueShopping => "continue_shopping",
            ThemeAction::UpdateAddress(_) => "update_address",
            ThemeAction::SelectPaymentMethod(_) => "select_payment_method",
            ThemeAction::PlaceOrder => "place_order",
            ThemeAction::Back => "back",
            ThemeAction::SelectOrder(_) => "select_order",
            ThemeAction::CancelOrder(_) => "cancel_order",
            ThemeAction::Reorder(_) => "reorder",
            ThemeAction::OpenOrders => "open_orders",
            ThemeAction::SaveProfile(_) => "save_profile",
            ThemeAction::SubmitLogin(_) => "submit_login",
            ThemeAction::SubmitRegistration(_) => "submit_registration",
            ThemeAction::RequestPasswordReset(_) => "request_password_reset",
            ThemeAction::ResetPassword(_) => "reset_password",
            ThemeAction::SubmitContact(_) => "submit_contact",
            ThemeAction::ToggleFaq(_) => "toggle_faq",
        }
    }
}
