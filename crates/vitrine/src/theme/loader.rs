//! Lazy theme loaders.
//!
//! A registry entry does not hold a package, only a way to produce one.
//! This abstraction allows:
//! - built-in kits assembled in memory
//! - manifest themes read from disk on demand
//! - hosts plugging in their own sources (remote bundles, tests)

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use super::types::ThemePackage;

/// Produces a [`ThemePackage`] when a theme is resolved.
#[async_trait]
pub trait ThemeLoader: Send + Sync {
    async fn load(&self) -> anyhow::Result<ThemePackage>;
}

/// Loader backed by an async closure.
pub struct FnLoader<F> {
    load: F,
}

#[async_trait]
impl<F, Fut> ThemeLoader for FnLoader<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<ThemePackage>> + Send + 'static,
{
    async fn load(&self) -> anyhow::Result<ThemePackage> {
        (self.load)().await
    }
}

/// Wrap an async closure as a shareable loader.
pub fn loader_fn<F, Fut>(load: F) -> Arc<dyn ThemeLoader>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<ThemePackage>> + Send + 'static,
{
    Arc::new(FnLoader { load })
}

/// Loader that hands out clones of an already assembled package.
pub struct PackageLoader {
    package: ThemePackage,
}

impl PackageLoader {
    pub fn new(package: ThemePackage) -> Arc<dyn ThemeLoader> {
        Arc::new(Self { package })
    }
}

#[async_trait]
impl ThemeLoader for PackageLoader {
    async fn load(&self) -> anyhow::Result<ThemePackage> {
        Ok(self.package.clone())
    }
}
