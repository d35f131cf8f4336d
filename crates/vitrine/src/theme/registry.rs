//! Theme registry.
//!
//! This module provides:
//! - `ThemeRegistryBuilder`: the one-time write phase where themes are registered
//! - `ThemeRegistry`: the frozen, read-only catalog that resolves packages

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use vitrine_core::{Platform, ThemeMeta, ThemeSlug};

use super::contract::validate_package;
use super::error::ThemeError;
use super::loader::ThemeLoader;
use super::types::ThemePackage;

/// Metadata plus the loader that produces the theme on demand.
#[derive(Clone)]
pub struct ThemeRegistryEntry {
    meta: ThemeMeta,
    loader: Arc<dyn ThemeLoader>,
}

impl std::fmt::Debug for ThemeRegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistryEntry")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

impl ThemeRegistryEntry {
    pub fn meta(&self) -> &ThemeMeta {
        &self.meta
    }
}

/// Collects theme registrations before the registry is frozen.
#[derive(Debug, Default)]
pub struct ThemeRegistryBuilder {
    entries: Vec<ThemeRegistryEntry>,
    index: HashMap<ThemeSlug, usize>,
}

impl ThemeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme. A slug that is already taken is rejected; the
    /// first registration stays in place.
    pub fn register(
        &mut self,
        meta: ThemeMeta,
        loader: Arc<dyn ThemeLoader>,
    ) -> Result<&mut Self, ThemeError> {
        if self.index.contains_key(&meta.slug) {
            return Err(ThemeError::DuplicateTheme(meta.slug));
        }
        tracing::debug!("Registered theme {} ({})", meta.slug, meta.name);
        self.index.insert(meta.slug.clone(), self.entries.len());
        self.entries.push(ThemeRegistryEntry { meta, loader });
        Ok(self)
    }

    pub fn contains(&self, slug: &ThemeSlug) -> bool {
        self.index.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the registry. No writes are possible afterwards.
    pub fn build(self) -> ThemeRegistry {
        tracing::info!("Theme registry built with {} themes", self.entries.len());
        ThemeRegistry {
            entries: self.entries,
            index: self.index,
        }
    }
}

/// Read-only catalog of available themes.
///
/// Lookups accept any spelling that normalizes to the slug, so `"Travel_Pass"`
/// finds `travel-pass`.
pub struct ThemeRegistry {
    entries: Vec<ThemeRegistryEntry>,
    index: HashMap<ThemeSlug, usize>,
}

impl ThemeRegistry {
    pub fn builder() -> ThemeRegistryBuilder {
        ThemeRegistryBuilder::new()
    }

    fn entry(&self, slug: &str) -> Option<&ThemeRegistryEntry> {
        let slug = ThemeSlug::new(slug).ok()?;
        self.index.get(&slug).map(|&i| &self.entries[i])
    }

    /// Get a theme's metadata by slug.
    pub fn get(&self, slug: &str) -> Option<&ThemeMeta> {
        self.entry(slug).map(ThemeRegistryEntry::meta)
    }

    /// Check if a theme exists.
    pub fn contains(&self, slug: &str) -> bool {
        self.entry(slug).is_some()
    }

    /// All themes in registration order.
    pub fn list(&self) -> Vec<&ThemeMeta> {
        self.entries.iter().map(ThemeRegistryEntry::meta).collect()
    }

    /// Themes targeting one platform.
    pub fn list_for(&self, platform: Platform) -> Vec<&ThemeMeta> {
        self.entries
            .iter()
            .map(ThemeRegistryEntry::meta)
            .filter(|meta| meta.platform == platform)
            .collect()
    }

    /// Get all theme slugs.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.meta.slug.to_string())
            .collect()
    }

    /// Number of themes in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a theme and check it against the slot contract.
    ///
    /// Unknown slugs fail without touching any loader. Loader failures are
    /// reported as [`ThemeError::Load`], incomplete packages as
    /// [`ThemeError::ContractViolation`].
    pub async fn resolve(&self, slug: &str) -> Result<ThemePackage, ThemeError> {
        let entry = self
            .entry(slug)
            .ok_or_else(|| ThemeError::UnknownTheme(slug.to_string()))?;
        let slug = &entry.meta.slug;

        let started = Instant::now();
        tracing::debug!("Resolving theme {}", slug);
        let package = entry
            .loader
            .load()
            .await
            .map_err(|e| ThemeError::Load {
                slug: slug.clone(),
                message: format!("{:#}", e),
            })?;
        validate_package(slug, &package)?;

        tracing::info!(
            "Resolved theme {} with {} slots in {:?}",
            slug,
            package.slots().count(),
            started.elapsed()
        );
        Ok(package)
    }
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{component_fn, loader_fn, Markup, PackageLoader};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vitrine_core::SlotName;

    fn meta(slug: &str) -> ThemeMeta {
        ThemeMeta::new(ThemeSlug::new(slug).unwrap(), slug, "1.0.0")
    }

    fn complete_package() -> ThemePackage {
        ThemePackage::builder()
            .all_slots(|_| component_fn(|_, _| Ok(Markup::new("<div></div>"))))
            .build()
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut builder = ThemeRegistry::builder();
        builder
            .register(meta("default"), PackageLoader::new(complete_package()))
            .unwrap();
        let err = builder
            .register(meta("Default"), PackageLoader::new(complete_package()))
            .err()
            .unwrap();

        assert_eq!(err, ThemeError::DuplicateTheme(ThemeSlug::new("default").unwrap()));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_lookup_normalizes_slug() {
        let mut builder = ThemeRegistry::builder();
        builder
            .register(meta("travel-pass"), PackageLoader::new(complete_package()))
            .unwrap();
        let registry = builder.build();

        assert!(registry.contains("Travel_Pass"));
        assert!(registry.get("TRAVEL-PASS").is_some());
        assert!(!registry.contains("travel"));
        assert!(!registry.contains("not a/slug"));
    }

    #[test]
    fn test_list_keeps_registration_order_and_filters_platform() {
        let mut builder = ThemeRegistry::builder();
        builder
            .register(meta("zeta"), PackageLoader::new(complete_package()))
            .unwrap()
            .register(
                meta("alpha").with_platform(Platform::Admin),
                PackageLoader::new(complete_package()),
            )
            .unwrap();
        let registry = builder.build();

        assert_eq!(registry.names(), vec!["zeta", "alpha"]);
        let admin: Vec<_> = registry
            .list_for(Platform::Admin)
            .into_iter()
            .map(|m| m.slug.as_str())
            .collect();
        assert_eq!(admin, vec!["alpha"]);
    }

    #[tokio::test]
    async fn test_unknown_slug_never_loads() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut builder = ThemeRegistry::builder();
        builder
            .register(
                meta("default"),
                loader_fn(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async { Ok(complete_package()) }
                }),
            )
            .unwrap();
        let registry = builder.build();

        let err = registry.resolve("nonexistent").await.unwrap_err();
        assert_eq!(err, ThemeError::UnknownTheme("nonexistent".into()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_loader_error_is_wrapped_with_slug() {
        let mut builder = ThemeRegistry::builder();
        builder
            .register(
                meta("broken"),
                loader_fn(|| async {
                    Err(anyhow::anyhow!("chunk 42 missing").context("fetching bundle"))
                }),
            )
            .unwrap();
        let registry = builder.build();

        let err = registry.resolve("broken").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to load theme broken: fetching bundle: chunk 42 missing"
        );
    }

    #[tokio::test]
    async fn test_incomplete_package_is_rejected() {
        let mut builder = ThemeRegistry::builder();
        builder
            .register(
                meta("partial"),
                PackageLoader::new(
                    ThemePackage::builder()
                        .all_slots(|_| component_fn(|_, _| Ok(Markup::default())))
                        .without(SlotName::CheckoutPage)
                        .build(),
                ),
            )
            .unwrap();
        let registry = builder.build();

        let err = registry.resolve("partial").await.unwrap_err();
        assert_eq!(err.missing_slots(), &[SlotName::CheckoutPage]);
    }
}
