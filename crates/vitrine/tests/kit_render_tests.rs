//! Rendering every slot of every built-in kit with sample data.

use vitrine::i18n::ThemeI18n;
use vitrine::kits::{self, BUILTIN_KITS};
use vitrine::props::{CartDrawerProps, CartPageProps, CheckoutPageProps, FieldError, SlotProps};
use vitrine::sample::{cart, sample_props};
use vitrine::theme::*;
use vitrine::SlotName;

fn render_with(kit: &str, props: &SlotProps, config: &ThemeConfig, locale: &str) -> String {
    let kit = kits::find(kit).unwrap();
    let i18n = ThemeI18n::new(locale);
    let cx = RenderContext::new(config, &i18n);
    kit.component(props.slot())
        .render(props, &cx)
        .unwrap()
        .into_string()
}

#[test]
fn test_every_kit_renders_every_slot() {
    for kit in BUILTIN_KITS {
        let config = kit.default_config();
        for slot in SlotName::ALL {
            let html = render_with(kit.name, &sample_props(slot), &config, "en");
            assert!(!html.is_empty(), "{}/{} is empty", kit.name, slot);
            assert!(
                !html.contains("<script"),
                "{}/{} emitted a script tag",
                kit.name,
                slot
            );
        }
    }
}

#[test]
fn test_translated_strings_follow_locale() {
    let config = ThemeConfig::default();
    let props: SlotProps = CartDrawerProps {
        is_open: true,
        ..Default::default()
    }
    .into();

    let en = render_with("default", &props, &config, "en");
    let uk = render_with("default", &props, &config, "uk");

    assert!(en.contains("Your cart is empty"));
    assert!(uk.contains("Ваш кошик порожній"));
}

#[test]
fn test_host_translator_takes_precedence() {
    let config = ThemeConfig::default();
    let i18n = ThemeI18n::new("en").with_translator(std::sync::Arc::new(
        |_: &str, key: &str| (key == "cart.title").then(|| "Basket".to_string()),
    ));
    let cx = RenderContext::new(&config, &i18n);
    let props: SlotProps = CartDrawerProps::default().into();

    let html = kits::find("default")
        .unwrap()
        .component(SlotName::CartDrawer)
        .render(&props, &cx)
        .unwrap();

    assert!(html.as_str().contains(">Basket<"));
    assert!(html.as_str().contains("Your cart is empty"));
}

#[test]
fn test_feature_flags_hide_controls() {
    let mut config = kits::find("default").unwrap().default_config();
    let props = sample_props(SlotName::ProductCard);
    assert!(render_with("default", &props, &config, "en").contains("toggle_wishlist"));

    config.features.wishlist = Some(false);
    assert!(!render_with("default", &props, &config, "en").contains("toggle_wishlist"));
}

#[test]
fn test_brand_config_reaches_header() {
    let mut config = ThemeConfig::default();
    config.brand.name = Some("Tom & Jerry's".to_string());
    config.brand.logo_url = Some("https://cdn.example.com/logo.svg".to_string());

    let html = render_with("travelpass", &sample_props(SlotName::Header), &config, "en");

    assert!(html.contains(r#"src="https://cdn.example.com/logo.svg""#));
    assert!(html.contains(r#"alt="Tom &amp; Jerry&#39;s""#));
}

#[test]
fn test_checkout_shows_field_errors_and_busy_state() {
    let props: SlotProps = CheckoutPageProps {
        cart: Some(cart()),
        is_submitting: true,
        errors: vec![FieldError {
            field: "postal_code".to_string(),
            message: "Postal code is required".to_string(),
        }],
        ..Default::default()
    }
    .into();

    let html = render_with("default", &props, &ThemeConfig::default(), "en");

    assert!(html.contains("Postal code is required"));
    assert!(html.contains(r#"data-action="place_order" disabled="disabled""#));
    assert!(html.contains("Placing order"));
}

#[test]
fn test_empty_checkout_points_back_to_cart() {
    let props: SlotProps = CheckoutPageProps::default().into();
    let html = render_with("default", &props, &ThemeConfig::default(), "en");
    assert!(html.contains("Your cart is empty"));
    assert!(!html.contains("place_order"));
}

#[test]
fn test_huge_line_totals_render_without_fallback() {
    let mut cart = cart();
    cart.items[0].product.price.amount_minor = i64::MAX / 2;
    cart.items[0].quantity = 3;
    let props: SlotProps = CartPageProps {
        cart: Some(cart),
        ..Default::default()
    }
    .into();
    let package = kits::find("default").unwrap().package();
    let config = package.default_config().clone();
    let i18n = ThemeI18n::default();
    let cx = RenderContext::new(&config, &i18n);

    let output = render_slot(&package, &props, &cx);

    assert!(output.error().is_none(), "{:?}", output.error());
    assert!(output
        .markup()
        .as_str()
        .contains("92233720368547758.07 EUR"));
}
