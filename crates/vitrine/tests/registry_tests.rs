//! Registry and contract tests against the built-in kits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vitrine::i18n::ThemeI18n;
use vitrine::kits;
use vitrine::props::{AddToCart, Callback, ProductCardProps, SlotProps, ThemeAction};
use vitrine::sample::{products, sample_props};
use vitrine::theme::*;
use vitrine::{Platform, SlotName, ThemeMeta, ThemeSlug};

fn builtin_registry() -> ThemeRegistryBuilder {
    let mut builder = ThemeRegistry::builder();
    kits::register_builtin_themes(&mut builder).unwrap();
    builder
}

fn meta(slug: &str) -> ThemeMeta {
    ThemeMeta::new(ThemeSlug::new(slug).unwrap(), slug, "0.1.0")
}

#[tokio::test]
async fn test_default_theme_has_all_slots_callable() {
    let registry = builtin_registry().build();
    let package = registry.resolve("default").await.unwrap();
    let config = package.default_config().clone();
    let i18n = ThemeI18n::default();
    let cx = RenderContext::new(&config, &i18n);

    assert_eq!(package.slots().count(), 26);
    for slot in SlotName::ALL {
        let component = package.component(slot).unwrap();
        let markup = component.render(&sample_props(slot), &cx).unwrap();
        assert!(!markup.is_empty(), "{} rendered nothing", slot);
    }
}

#[tokio::test]
async fn test_every_registered_theme_is_complete() {
    let registry = builtin_registry().build();
    for slug in registry.names() {
        let package = registry.resolve(&slug).await.unwrap();
        assert!(package.missing_slots().is_empty(), "{} incomplete", slug);
    }
}

#[tokio::test]
async fn test_partial_theme_reports_missing_checkout() {
    let mut builder = builtin_registry();
    let kit = kits::find("default").unwrap();
    let partial = ThemePackage::builder()
        .all_slots(|slot| kit.component(slot))
        .without(SlotName::CheckoutPage)
        .build();
    builder
        .register(meta("partial"), PackageLoader::new(partial))
        .unwrap();
    let registry = builder.build();

    let err = registry.resolve("partial").await.unwrap_err();

    assert_eq!(err.missing_slots(), &[SlotName::CheckoutPage]);
    assert_eq!(
        err.to_string(),
        "theme partial is missing required slots: CheckoutPage"
    );
}

#[tokio::test]
async fn test_unknown_slug_never_invokes_a_loader() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut builder = ThemeRegistry::builder();
    builder
        .register(
            meta("counted"),
            loader_fn(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(ThemePackage::default())
                }
            }),
        )
        .unwrap();
    let registry = builder.build();

    let err = registry.resolve("missing").await.unwrap_err();
    assert_eq!(err, ThemeError::UnknownTheme("missing".into()));
    let err = registry.resolve("not a/slug!").await.unwrap_err();
    assert_eq!(err, ThemeError::UnknownTheme("not a/slug!".into()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_loader_failure_is_wrapped_with_slug() {
    let mut builder = ThemeRegistry::builder();
    builder
        .register(
            meta("offline"),
            loader_fn(|| async {
                Err(anyhow::anyhow!("503 from CDN").context("fetching bundle"))
            }),
        )
        .unwrap();
    let registry = builder.build();

    let err = registry.resolve("offline").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to load theme offline: fetching bundle: 503 from CDN"
    );
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let mut builder = builtin_registry();
    let duplicate = ThemeMeta::new(ThemeSlug::new("Default").unwrap(), "Impostor", "9.9.9");

    let err = builder
        .register(duplicate, PackageLoader::new(ThemePackage::default()))
        .unwrap_err();

    assert!(matches!(err, ThemeError::DuplicateTheme(ref slug) if slug.as_str() == "default"));
    let registry = builder.build();
    assert_eq!(registry.get("default").unwrap().name, "Default");
}

#[test]
fn test_lookup_queries() {
    let mut builder = builtin_registry();
    builder
        .register(
            meta("back-office").with_platform(Platform::Admin),
            PackageLoader::new(ThemePackage::default()),
        )
        .unwrap();
    let registry = builder.build();

    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    assert!(registry.contains("TravelPass"));
    assert!(registry.contains("back_office"));
    assert_eq!(registry.names(), vec!["default", "travelpass", "back-office"]);
    let shop: Vec<&str> = registry
        .list_for(Platform::Shop)
        .into_iter()
        .map(|meta| meta.slug.as_str())
        .collect();
    assert_eq!(shop, vec!["default", "travelpass"]);
    assert_eq!(registry.list_for(Platform::Admin).len(), 1);
}

#[tokio::test]
async fn test_rendered_action_reaches_host_callback() {
    let registry = Arc::new(builtin_registry().build());
    let context = ThemeContext::new(registry);
    context.set_theme("travelpass").await.unwrap();

    let added = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&added);
    let product = products().remove(0);
    let props: SlotProps = ProductCardProps {
        on_add_to_cart: Callback::new(move |item: AddToCart| sink.lock().unwrap().push(item)),
        ..ProductCardProps::new(product.clone())
    }
    .into();

    let output = context.render(&props, &ThemeI18n::default()).unwrap();
    let html = output.markup().as_str();
    assert!(html.contains(r#"data-action="add_to_cart""#));
    assert!(html.contains(&format!(r#"data-product-id="{}""#, product.id)));

    // The host turns the click on that button into an action.
    props
        .dispatch(ThemeAction::AddToCart(AddToCart {
            product_id: product.id.clone(),
            quantity: 1,
        }))
        .unwrap();
    assert_eq!(added.lock().unwrap().len(), 1);
    assert_eq!(added.lock().unwrap()[0].product_id, product.id);
}
