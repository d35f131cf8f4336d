//! Props of the cart, checkout and order pages.

use vitrine_core::models::{Address, Cart, Order, Pagination};

use super::{Callback, Dispatch, QuantityChange, ThemeAction};

#[derive(Debug, Clone, Default)]
pub struct CartPageProps {
    pub cart: Option<Cart>,
    pub is_loading: bool,
    pub coupon_code: String,
    pub coupon_error: Option<String>,
    pub on_update_quantity: Callback<QuantityChange>,
    pub on_remove_item: Callback<String>,
    pub on_apply_coupon: Callback<String>,
    pub on_checkout: Callback<()>,
    pub on_continue_shopping: Callback<()>,
}

impl Dispatch for CartPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::UpdateCartQuantity(change) => self.on_update_quantity.call(change),
            ThemeAction::RemoveCartItem(id) => self.on_remove_item.call(id),
            ThemeAction::ApplyCoupon(code) => self.on_apply_coupon.call(code),
            ThemeAction::Checkout => self.on_checkout.call(()),
            ThemeAction::ContinueShopping => self.on_continue_shopping.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

/// Validation message for one checkout form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutPageProps {
    pub cart: Option<Cart>,
    pub shipping_address: Option<Address>,
    pub payment_methods: Vec<String>,
    pub selected_payment_method: Option<String>,
    pub is_submitting: bool,
    pub errors: Vec<FieldError>,
    pub on_address_change: Callback<Address>,
    pub on_payment_method_change: Callback<String>,
    pub on_place_order: Callback<()>,
    pub on_back_to_cart: Callback<()>,
}

impl CheckoutPageProps {
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }
}

impl Dispatch for CheckoutPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::UpdateAddress(address) => self.on_address_change.call(address),
            ThemeAction::SelectPaymentMethod(method) => self.on_payment_method_change.call(method),
            ThemeAction::PlaceOrder if !self.is_submitting => self.on_place_order.call(()),
            ThemeAction::Back => self.on_back_to_cart.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutSuccessPageProps {
    pub order: Option<Order>,
    pub on_view_order: Callback<String>,
    pub on_continue_shopping: Callback<()>,
}

impl Dispatch for CheckoutSuccessPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::SelectOrder(id) => self.on_view_order.call(id),
            ThemeAction::ContinueShopping => self.on_continue_shopping.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrdersPageProps {
    pub orders: Vec<Order>,
    pub is_loading: bool,
    pub pagination: Pagination,
    pub on_order_click: Callback<String>,
    pub on_page_change: Callback<u32>,
}

impl Dispatch for OrdersPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::SelectOrder(id) => self.on_order_click.call(id),
            ThemeAction::ChangePage(page) => self.on_page_change.call(page),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderDetailPageProps {
    pub order: Option<Order>,
    pub is_loading: bool,
    pub on_back: Callback<()>,
    pub on_cancel_order: Callback<String>,
    pub on_reorder: Callback<String>,
}

impl Dispatch for OrderDetailPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::Back => self.on_back.call(()),
            ThemeAction::CancelOrder(id) => self.on_cancel_order.call(id),
            ThemeAction::Reorder(id) => self.on_reorder.call(id),
            other => return Err(other),
        }
        Ok(())
    }
}
