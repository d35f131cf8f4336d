//! Manifest theme discovery against real directories.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;
use vitrine::i18n::ThemeI18n;
use vitrine::kits;
use vitrine::sample::sample_props;
use vitrine::tenant::{TenantDirectory, TenantSettings};
use vitrine::theme::*;
use vitrine::SlotName;

fn write_theme(root: &Path, dir: &str, manifest: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
}

/// A themes directory with one good manifest and every kind of bad one.
fn themes_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write_theme(
        root,
        "harbor",
        r#"{
            "slug": "harbor",
            "name": "Harbor",
            "version": "0.2.0",
            "extends": "default",
            "components": {"HomePage": "travelpass", "ProductCard": "travelpass"},
            "css": "tokens.css",
            "config": {"brand": {"name": "Harbor Supply"}, "layout": {"productColumns": 2}}
        }"#,
    );
    fs::write(root.join("harbor").join("tokens.css"), ":root { --x: 1; }").unwrap();

    write_theme(
        root,
        "sketch",
        r#"{"slug": "sketch", "name": "Sketch", "version": "0.0.1",
            "components": {"Header": "default", "Footer": "default"}}"#,
    );
    write_theme(root, "broken", "{ this is not json");
    write_theme(
        root,
        "impostor",
        r#"{"slug": "default", "name": "Impostor", "version": "6.6.6", "extends": "travelpass"}"#,
    );
    write_theme(
        root,
        ".cache",
        r#"{"slug": "hidden", "name": "Hidden", "version": "1.0.0", "extends": "default"}"#,
    );
    // Plain files and directories without a manifest are ignored.
    fs::write(root.join("README.md"), "themes").unwrap();
    fs::create_dir_all(root.join("assets")).unwrap();

    temp
}

async fn registry_with_discovery(dir: &Path) -> (ThemeRegistry, DiscoveryReport) {
    let mut builder = ThemeRegistry::builder();
    kits::register_builtin_themes(&mut builder).unwrap();
    let report = discover_themes(&mut builder, dir).await;
    (builder.build(), report)
}

#[tokio::test]
async fn test_discovery_report() {
    let temp = themes_dir();
    let (registry, report) = registry_with_discovery(temp.path()).await;

    let registered: Vec<&str> = report.registered.iter().map(|slug| slug.as_str()).collect();
    assert_eq!(registered, vec!["harbor", "sketch"]);

    let skipped: Vec<String> = report
        .skipped
        .iter()
        .map(|skipped| {
            skipped
                .path
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(skipped, vec!["broken", "impostor"]);
    assert!(report.skipped[1].reason.contains("already registered"));

    assert!(!registry.contains("hidden"));
    // Built-in theme kept priority over the impostor manifest.
    assert_eq!(registry.get("default").unwrap().name, "Default");
}

#[tokio::test]
async fn test_manifest_theme_mixes_kits() {
    let temp = themes_dir();
    let (registry, _) = registry_with_discovery(temp.path()).await;

    let package = registry.resolve("harbor").await.unwrap();

    assert_eq!(package.css(), Some(":root { --x: 1; }"));
    assert_eq!(package.default_config().brand_name(), "Harbor Supply");
    assert_eq!(package.default_config().product_columns(), 2);
    // Kit defaults the manifest did not override survive.
    assert_eq!(
        package.default_config().brand.accent_color.as_deref(),
        Some("#2563eb")
    );

    let config = package.default_config().clone();
    let i18n = ThemeI18n::default();
    let cx = RenderContext::new(&config, &i18n);
    let render = |slot: SlotName| {
        package
            .component(slot)
            .unwrap()
            .render(&sample_props(slot), &cx)
            .unwrap()
            .into_string()
    };
    assert!(render(SlotName::Header).contains(r#"class="vt-header""#));
    assert!(render(SlotName::HomePage).contains(r#"data-variant="destination""#));
    assert!(render(SlotName::ProductCard).contains(r#"data-layout="compact""#));
}

#[tokio::test]
async fn test_incomplete_manifest_fails_contract_on_resolve() {
    let temp = themes_dir();
    let (registry, _) = registry_with_discovery(temp.path()).await;

    let err = registry.resolve("sketch").await.unwrap_err();

    let missing = err.missing_slots();
    assert_eq!(missing.len(), 24);
    assert!(!missing.contains(&SlotName::Header));
    assert!(missing.contains(&SlotName::CheckoutPage));
}

#[tokio::test]
async fn test_manifest_is_reread_on_reload() {
    let temp = themes_dir();
    let (registry, _) = registry_with_discovery(temp.path()).await;
    let context = ThemeContext::new(Arc::new(registry));
    context.set_theme("harbor").await.unwrap();
    assert_eq!(context.config().brand_name(), "Harbor Supply");

    write_theme(
        temp.path(),
        "harbor",
        r#"{"slug": "harbor", "name": "Harbor", "version": "0.3.0", "extends": "default",
            "config": {"brand": {"name": "Harbor Outfitters"}}}"#,
    );
    context.reload().await.unwrap();

    assert_eq!(context.config().brand_name(), "Harbor Outfitters");
}

#[tokio::test]
async fn test_deleted_manifest_is_a_load_error() {
    let temp = themes_dir();
    let (registry, _) = registry_with_discovery(temp.path()).await;
    fs::remove_dir_all(temp.path().join("harbor")).unwrap();

    let err = registry.resolve("harbor").await.unwrap_err();
    assert!(matches!(err, ThemeError::Load { .. }));
}

#[tokio::test]
async fn test_missing_themes_dir_registers_nothing() {
    let temp = TempDir::new().unwrap();
    let (registry, report) = registry_with_discovery(&temp.path().join("nope")).await;
    assert_eq!(report, DiscoveryReport::default());
    assert_eq!(registry.len(), kits::BUILTIN_KITS.len());
}

#[tokio::test]
async fn test_tenant_context_uses_tenant_theme_and_overrides() {
    let temp = themes_dir();
    let (registry, _) = registry_with_discovery(temp.path()).await;
    let registry = Arc::new(registry);
    let mut overrides = ThemeConfig::default();
    overrides.brand.name = Some("Roam".to_string());
    let directory = TenantDirectory::new("default")
        .with_tenant(
            "roam",
            TenantSettings {
                theme: Some("travelpass".to_string()),
                locale: None,
                config: overrides,
            },
        )
        .with_tenant(
            "lost",
            TenantSettings {
                theme: Some("retired-theme".to_string()),
                ..Default::default()
            },
        );

    let roam = directory.context_for("roam", Arc::clone(&registry)).await;
    let snapshot = roam.snapshot();
    assert!(snapshot.is_ready());
    assert_eq!(snapshot.active_slug().unwrap().as_str(), "travelpass");
    assert_eq!(snapshot.config.brand_name(), "Roam");
    assert_eq!(snapshot.config.product_columns(), 3);

    let lost = directory.context_for("lost", Arc::clone(&registry)).await;
    assert!(lost.snapshot().is_ready());
    assert_eq!(lost.snapshot().active_slug().unwrap().as_str(), "default");

    let stranger = directory.context_for("stranger", registry).await;
    assert_eq!(stranger.snapshot().active_slug().unwrap().as_str(), "default");
}

#[tokio::test]
async fn test_tenant_context_with_explicit_theme_keeps_overrides() {
    let temp = themes_dir();
    let (registry, _) = registry_with_discovery(temp.path()).await;
    let registry = Arc::new(registry);
    let mut overrides = ThemeConfig::default();
    overrides.brand.name = Some("Roam".to_string());
    let directory = TenantDirectory::new("default").with_tenant(
        "roam",
        TenantSettings {
            theme: Some("travelpass".to_string()),
            locale: None,
            config: overrides,
        },
    );

    let preview = directory
        .context_with_theme("roam", "harbor", Arc::clone(&registry))
        .await
        .unwrap();
    let snapshot = preview.snapshot();
    assert_eq!(snapshot.active_slug().unwrap().as_str(), "harbor");
    // Tenant overrides win over the manifest's own brand name.
    assert_eq!(snapshot.config.brand_name(), "Roam");
    assert_eq!(snapshot.config.product_columns(), 2);

    // No silent fallback when the requested theme is unusable.
    let err = directory
        .context_with_theme("roam", "sketch", registry)
        .await
        .unwrap_err();
    assert_eq!(err.missing_slots().len(), 24);
}
