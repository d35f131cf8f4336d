//! The props contract of every theme slot.
//!
//! Each slot has one props struct. [`SlotProps`] wraps them so a host can hand
//! any of them to a [`SlotComponent`](crate::theme::SlotComponent), and so a
//! component can check it received the props it was written for.

mod account;
mod action;
mod callback;
mod catalog;
mod checkout;
mod content;
mod layout;

pub use account::*;
pub use action::*;
pub use callback::Callback;
pub use catalog::*;
pub use checkout::*;
pub use content::*;
pub use layout::*;

use vitrine_core::SlotName;

/// Routes a [`ThemeAction`] to the host callback that handles it.
pub trait Dispatch {
    /// Invoke the matching callback, or hand the action back when this slot
    /// has no handler for it.
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction>;
}

/// Returned when an action reaches a slot that has no handler for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{slot} has no handler for action {action}")]
pub struct UnhandledAction {
    pub slot: SlotName,
    pub action: &'static str,
}

macro_rules! slot_props {
    ($($slot:ident => $props:ident),+ $(,)?) => {
        /// Props for one slot, tagged with the slot they belong to.
        #[derive(Debug, Clone)]
        pub enum SlotProps {
            $($slot($props),)+
        }

        impl SlotProps {
            pub fn slot(&self) -> SlotName {
                match self {
                    $(SlotProps::$slot(_) => SlotName::$slot,)+
                }
            }

            pub fn dispatch(&self, action: ThemeAction) -> Result<(), UnhandledAction> {
                let outcome = match self {
                    $(SlotProps::$slot(props) => props.dispatch(action),)+
                };
                outcome.map_err(|action| UnhandledAction {
                    slot: self.slot(),
                    action: action.name(),
                })
            }
        }

        $(
            impl From<$props> for SlotProps {
                fn from(props: $props) -> Self {
                    SlotProps::$slot(props)
                }
            }
        )+
    };
}

slot_props! {
    Header => HeaderProps,
    Footer => FooterProps,
    ProductCard => ProductCardProps,
    CartDrawer => CartDrawerProps,
    HomePage => HomePageProps,
    ProductsPage => ProductsPageProps,
    ProductDetailPage => ProductDetailPageProps,
    CategoryPage => CategoryPageProps,
    SearchPage => SearchPageProps,
    CartPage => CartPageProps,
    CheckoutPage => CheckoutPageProps,
    CheckoutSuccessPage => CheckoutSuccessPageProps,
    OrdersPage => OrdersPageProps,
    OrderDetailPage => OrderDetailPageProps,
    ProfilePage => ProfilePageProps,
    LoginPage => LoginPageProps,
    RegisterPage => RegisterPageProps,
    ForgotPasswordPage => ForgotPasswordPageProps,
    ResetPasswordPage => ResetPasswordPageProps,
    WishlistPage => WishlistPageProps,
    NotFoundPage => NotFoundPageProps,
    AboutPage => AboutPageProps,
    ContactPage => ContactPageProps,
    FaqPage => FaqPageProps,
    TermsPage => TermsPageProps,
    PrivacyPage => PrivacyPageProps,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use vitrine_core::models::SortOption;

    #[test]
    fn test_dispatch_reaches_host_callback() {
        let sorts = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&sorts);
        let props: SlotProps = ProductsPageProps {
            on_sort_change: Callback::new(move |sort| sink.lock().unwrap().push(sort)),
            ..Default::default()
        }
        .into();

        props
            .dispatch(ThemeAction::ChangeSort(SortOption::PriceAsc))
            .unwrap();

        assert_eq!(props.slot(), SlotName::ProductsPage);
        assert_eq!(*sorts.lock().unwrap(), vec![SortOption::PriceAsc]);
    }

    #[test]
    fn test_unhandled_action_names_slot_and_action() {
        let props = SlotProps::from(TermsPageProps::default());
        let err = props.dispatch(ThemeAction::PlaceOrder).unwrap_err();
        assert_eq!(
            err,
            UnhandledAction {
                slot: SlotName::TermsPage,
                action: "place_order"
            }
        );
    }

    #[test]
    fn test_place_order_ignored_while_submitting() {
        let placed = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&placed);
        let props = SlotProps::from(CheckoutPageProps {
            is_submitting: true,
            on_place_order: Callback::new(move |()| *sink.lock().unwrap() += 1),
            ..Default::default()
        });

        assert!(props.dispatch(ThemeAction::PlaceOrder).is_err());
        assert_eq!(*placed.lock().unwrap(), 0);
    }
}
