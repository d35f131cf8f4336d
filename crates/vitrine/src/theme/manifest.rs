//! Themes described by a `theme.json` manifest on disk.
//!
//! Layout of a themes directory:
//!
//! ```text
//! themes/
//!   harbor/
//!     theme.json     # metadata, kit selection, config defaults
//!     tokens.css     # optional, referenced by "css"
//! ```
//!
//! A manifest picks its slot components from the built-in kits: `extends`
//! fills every slot from one kit, `components` overrides single slots.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use serde::Deserialize;
use vitrine_core::{SlotName, ThemeMeta, ThemeSlug};

use super::config::ThemeConfig;
use super::loader::ThemeLoader;
use super::registry::ThemeRegistryBuilder;
use super::types::ThemePackage;
use crate::kits;

pub const MANIFEST_FILE: &str = "theme.json";

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeManifest {
    #[serde(flatten)]
    pub meta: ThemeMeta,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub components: BTreeMap<SlotName, String>,
    /// CSS file relative to the manifest.
    #[serde(default)]
    pub css: Option<String>,
    #[serde(default)]
    pub config: ThemeConfig,
}

impl ThemeManifest {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("invalid theme manifest")
    }

    pub async fn read(path: &Path) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Assemble the package. Slots neither `extends` nor `components` cover
    /// stay empty and are caught by contract validation.
    pub async fn into_package(self, base_dir: &Path) -> anyhow::Result<ThemePackage> {
        let mut builder = ThemePackage::builder();
        let mut config = ThemeConfig::default();
        let mut css = None;

        if let Some(name) = &self.extends {
            let kit = kits::find(name).ok_or_else(|| anyhow!("unknown component kit {:?}", name))?;
            builder = builder.all_slots(|slot| kit.component(slot));
            config = kit.default_config();
            css = Some(kit.css.to_string());
        }

        for (slot, name) in &self.components {
            let kit = kits::find(name)
                .ok_or_else(|| anyhow!("unknown component kit {:?} for {}", name, slot))?;
            builder = builder.slot(*slot, kit.component(*slot));
        }

        if let Some(file) = &self.css {
            let relative = Path::new(file);
            if !relative
                .components()
                .all(|part| matches!(part, Component::Normal(_)))
            {
                bail!("css path {:?} must stay inside the theme directory", file);
            }
            let path = base_dir.join(relative);
            css = Some(
                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?,
            );
        }

        if let Some(css) = css {
            builder = builder.css(css);
        }
        Ok(builder.default_config(config.merged(&self.config)).build())
    }
}

/// Reads and assembles a manifest theme each time it is resolved.
pub struct ManifestLoader {
    path: PathBuf,
    slug: ThemeSlug,
}

impl ManifestLoader {
    pub fn new(path: PathBuf, slug: ThemeSlug) -> Self {
        Self { path, slug }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ThemeLoader for ManifestLoader {
    async fn load(&self) -> anyhow::Result<ThemePackage> {
        let manifest = ThemeManifest::read(&self.path).await?;
        if manifest.meta.slug != self.slug {
            tracing::warn!(
                "Manifest {} now declares slug {}, still serving it as {}",
                self.path.display(),
                manifest.meta.slug,
                self.slug
            );
        }
        let base_dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        manifest.into_package(base_dir).await
    }
}

/// A manifest discovery did not register, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedManifest {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub registered: Vec<ThemeSlug>,
    pub skipped: Vec<SkippedManifest>,
}

/// Register every `<dir>/*/theme.json` found under `dir`.
///
/// Hidden directories are ignored. Broken manifests and slugs that are
/// already registered (built-in themes take priority) are skipped with a
/// warning instead of failing the whole scan.
pub async fn discover_themes(builder: &mut ThemeRegistryBuilder, dir: &Path) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to read themes directory {}: {}", dir.display(), e);
            return report;
        }
    };

    let mut manifests = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden || !entry.file_type().await.is_ok_and(|ty| ty.is_dir()) {
            continue;
        }
        let manifest_path = path.join(MANIFEST_FILE);
        if tokio::fs::try_exists(&manifest_path).await.unwrap_or(false) {
            manifests.push(manifest_path);
        }
    }
    manifests.sort();

    for path in manifests {
        let manifest = match ThemeManifest::read(&path).await {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::warn!("Skipping theme manifest {}: {:#}", path.display(), e);
                report.skipped.push(SkippedManifest {
                    path,
                    reason: format!("{:#}", e),
                });
                continue;
            }
        };

        let slug = manifest.meta.slug.clone();
        let loader = Arc::new(ManifestLoader::new(path.clone(), slug.clone()));
        match builder.register(manifest.meta, loader) {
            Ok(_) => report.registered.push(slug),
            Err(e) => {
                tracing::warn!("Skipping theme manifest {}: {}", path.display(), e);
                report.skipped.push(SkippedManifest {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Discovered {} manifest themes in {} ({} skipped)",
        report.registered.len(),
        dir.display(),
        report.skipped.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_parses_components_by_slot_name() {
        let manifest = ThemeManifest::parse(
            r#"{
                "slug": "harbor",
                "name": "Harbor",
                "version": "0.2.0",
                "extends": "default",
                "components": {"HomePage": "travelpass", "ProductCard": "travelpass"},
                "config": {"brand": {"name": "Harbor Supply"}}
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.meta.slug.as_str(), "harbor");
        assert_eq!(manifest.extends.as_deref(), Some("default"));
        assert_eq!(
            manifest.components.get(&SlotName::HomePage).map(String::as_str),
            Some("travelpass")
        );
        assert_eq!(manifest.config.brand_name(), "Harbor Supply");
    }

    #[test]
    fn test_manifest_rejects_unknown_slot() {
        let err = ThemeManifest::parse(
            r#"{"slug": "x", "name": "X", "version": "1", "components": {"Sidebar": "default"}}"#,
        );
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn test_css_path_cannot_escape_theme_dir() {
        let manifest = ThemeManifest::parse(
            r#"{"slug": "x", "name": "X", "version": "1", "extends": "default",
                "css": "../secrets.css"}"#,
        )
        .unwrap();
        let err = manifest.into_package(Path::new("/tmp")).await.unwrap_err();
        assert!(err.to_string().contains("must stay inside"));
    }

    #[tokio::test]
    async fn test_unknown_kit_is_a_load_error() {
        let manifest = ThemeManifest::parse(
            r#"{"slug": "x", "name": "X", "version": "1", "extends": "brutalist"}"#,
        )
        .unwrap();
        let err = manifest.into_package(Path::new(".")).await.unwrap_err();
        assert_eq!(err.to_string(), "unknown component kit \"brutalist\"");
    }
}
