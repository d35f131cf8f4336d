//! Per-session theme state.
//!
//! A [`ThemeContext`] resolves the selected theme through the registry, keeps
//! the resolved package and the merged configuration, and publishes every
//! state change to subscribers.
//!
//! States: `idle → loading → ready | error`.
//!
//! - Requests are tagged with a generation number. Only the latest request may
//!   change the state, so a slow resolve finishing after a newer one is
//!   discarded.
//! - A failed switch keeps the previously active package (stale but usable).
//! - Config overrides survive theme switches and are layered over each
//!   package's defaults.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use vitrine_core::{normalize_slug, ThemeMeta, ThemeSlug};

use super::boundary::{render_slot, SlotOutput};
use super::config::ThemeConfig;
use super::error::ThemeError;
use super::registry::ThemeRegistry;
use super::types::{RenderContext, ThemePackage};
use crate::i18n::ThemeI18n;
use crate::props::SlotProps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

impl ThemeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeStatus::Idle => "idle",
            ThemeStatus::Loading => "loading",
            ThemeStatus::Ready => "ready",
            ThemeStatus::Error => "error",
        }
    }
}

/// The theme currently used for rendering.
#[derive(Debug, Clone)]
pub struct ActiveTheme {
    pub meta: ThemeMeta,
    pub package: Arc<ThemePackage>,
}

/// Point-in-time view of a [`ThemeContext`].
#[derive(Debug, Clone)]
pub struct ThemeSnapshot {
    pub status: ThemeStatus,
    /// Normalized slug of the latest request.
    pub requested: Option<String>,
    /// Last successfully resolved theme. Kept while a newer request loads or
    /// after it fails.
    pub active: Option<ActiveTheme>,
    /// Effective config: package defaults, then base, then runtime overrides.
    pub config: ThemeConfig,
    pub error: Option<ThemeError>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl ThemeSnapshot {
    fn idle(config: ThemeConfig) -> Self {
        Self {
            status: ThemeStatus::Idle,
            requested: None,
            active: None,
            config,
            error: None,
            resolved_at: None,
        }
    }

    pub fn active_slug(&self) -> Option<&ThemeSlug> {
        self.active.as_ref().map(|active| &active.meta.slug)
    }

    pub fn package(&self) -> Option<&Arc<ThemePackage>> {
        self.active.as_ref().map(|active| &active.package)
    }

    pub fn is_ready(&self) -> bool {
        self.status == ThemeStatus::Ready
    }
}

/// What a switch request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The requested theme is now active.
    Applied,
    /// The theme was already active; nothing was reloaded.
    AlreadyActive,
    /// A newer request was made while this one was resolving; its result
    /// was dropped.
    Superseded,
}

struct ContextState {
    snapshot: ThemeSnapshot,
    /// Generation of the latest request.
    latest: u64,
    base: ThemeConfig,
    overrides: ThemeConfig,
    cache: HashMap<ThemeSlug, Arc<ThemePackage>>,
}

impl ContextState {
    fn effective_config(&self) -> ThemeConfig {
        let defaults = self
            .snapshot
            .package()
            .map(|package| package.default_config().clone())
            .unwrap_or_default();
        defaults.merged(&self.base).merged(&self.overrides)
    }
}

pub struct ThemeContext {
    registry: Arc<ThemeRegistry>,
    state: Mutex<ContextState>,
    updates: watch::Sender<ThemeSnapshot>,
    cache_packages: bool,
}

impl ThemeContext {
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        Self::with_base_config(registry, ThemeConfig::default())
    }

    /// Context whose packages are layered with `base` (usually the tenant's
    /// branding) before runtime overrides.
    pub fn with_base_config(registry: Arc<ThemeRegistry>, base: ThemeConfig) -> Self {
        let snapshot = ThemeSnapshot::idle(base.clone());
        let (updates, _) = watch::channel(snapshot.clone());
        Self {
            registry,
            state: Mutex::new(ContextState {
                snapshot,
                latest: 0,
                base,
                overrides: ThemeConfig::default(),
                cache: HashMap::new(),
            }),
            updates,
            cache_packages: false,
        }
    }

    /// Reuse packages this context already resolved when switching back.
    pub fn with_package_cache(mut self, enabled: bool) -> Self {
        self.cache_packages = enabled;
        self
    }

    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    fn lock(&self) -> MutexGuard<'_, ContextState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn publish(&self, state: &ContextState) {
        self.updates.send_replace(state.snapshot.clone());
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        self.lock().snapshot.clone()
    }

    pub fn status(&self) -> ThemeStatus {
        self.lock().snapshot.status
    }

    pub fn config(&self) -> ThemeConfig {
        self.lock().snapshot.config.clone()
    }

    /// Receive every future snapshot. The current one is marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.updates.subscribe()
    }

    /// Switch to `slug`.
    ///
    /// A no-op when that theme is already active and ready. Errors are also
    /// recorded in the snapshot; the previous theme stays active.
    pub async fn set_theme(&self, slug: &str) -> Result<SwitchOutcome, ThemeError> {
        self.switch(slug, false).await
    }

    /// Resolve the active (or last requested) theme again, bypassing the
    /// package cache.
    pub async fn reload(&self) -> Result<SwitchOutcome, ThemeError> {
        let slug = {
            let state = self.lock();
            state
                .snapshot
                .requested
                .clone()
                .ok_or(ThemeError::NotReady(state.snapshot.status.as_str()))?
        };
        self.switch(&slug, true).await
    }

    /// Retry the last request after a failure.
    pub async fn retry(&self) -> Result<SwitchOutcome, ThemeError> {
        let status = self.status();
        if status != ThemeStatus::Error {
            return Err(ThemeError::NotReady(status.as_str()));
        }
        self.reload().await
    }

    async fn switch(&self, slug: &str, force: bool) -> Result<SwitchOutcome, ThemeError> {
        let requested = normalize_slug(slug);

        let (generation, cached) = {
            let mut state = self.lock();
            let already_active = state.snapshot.is_ready()
                && state
                    .snapshot
                    .active_slug()
                    .is_some_and(|active| active.as_str() == requested);
            if already_active && !force {
                tracing::debug!("Theme {} already active", requested);
                return Ok(SwitchOutcome::AlreadyActive);
            }

            state.latest += 1;
            let generation = state.latest;
            state.snapshot.status = ThemeStatus::Loading;
            state.snapshot.requested = Some(requested.clone());
            state.snapshot.error = None;
            self.publish(&state);

            let cached = if self.cache_packages && !force {
                ThemeSlug::new(&requested)
                    .ok()
                    .and_then(|slug| state.cache.get(&slug).cloned())
            } else {
                None
            };
            (generation, cached)
        };
        let mut pending = PendingSwitch {
            context: self,
            generation,
            settled: false,
        };

        let resolved = match cached {
            Some(package) => Ok(package),
            None => self.registry.resolve(&requested).await.map(Arc::new),
        };
        let resolved = resolved.and_then(|package| {
            let meta = self
                .registry
                .get(&requested)
                .cloned()
                .ok_or_else(|| ThemeError::UnknownTheme(requested.clone()))?;
            Ok(ActiveTheme { meta, package })
        });

        pending.settled = true;
        let mut state = self.lock();
        if state.latest != generation {
            tracing::debug!(
                "Discarding result for theme {} (request {} superseded by {})",
                requested,
                generation,
                state.latest
            );
            return Ok(SwitchOutcome::Superseded);
        }

        match resolved {
            Ok(active) => {
                if self.cache_packages {
                    state
                        .cache
                        .insert(active.meta.slug.clone(), Arc::clone(&active.package));
                }
                tracing::info!("Theme {} active", active.meta.slug);
                state.snapshot.active = Some(active);
                state.snapshot.status = ThemeStatus::Ready;
                state.snapshot.resolved_at = Some(Utc::now());
                state.snapshot.config = state.effective_config();
                self.publish(&state);
                Ok(SwitchOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!("Failed to switch to theme {}: {}", requested, err);
                state.snapshot.status = ThemeStatus::Error;
                state.snapshot.error = Some(err.clone());
                self.publish(&state);
                Err(err)
            }
        }
    }

    /// Deep-merge `patch` into the runtime overrides and return the new
    /// effective config. Only allowed while ready.
    pub fn update_config(&self, patch: &ThemeConfig) -> Result<ThemeConfig, ThemeError> {
        let mut state = self.lock();
        if !state.snapshot.is_ready() {
            return Err(ThemeError::NotReady(state.snapshot.status.as_str()));
        }
        state.overrides.merge(patch);
        state.snapshot.config = state.effective_config();
        self.publish(&state);
        Ok(state.snapshot.config.clone())
    }

    /// Render one slot of the active theme through its error boundary.
    ///
    /// Works in the error state too, using the previous theme.
    pub fn render(&self, props: &SlotProps, i18n: &ThemeI18n) -> Result<SlotOutput, ThemeError> {
        let snapshot = self.snapshot();
        let package = snapshot
            .package()
            .ok_or(ThemeError::NotReady(snapshot.status.as_str()))?;
        let cx = RenderContext::new(&snapshot.config, i18n);
        Ok(render_slot(package, props, &cx))
    }
}

/// Puts a context back out of `loading` when a switch future is dropped
/// before its resolve finishes.
struct PendingSwitch<'a> {
    context: &'a ThemeContext,
    generation: u64,
    settled: bool,
}

impl Drop for PendingSwitch<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.context.lock();
        if state.latest != self.generation {
            return;
        }
        tracing::debug!(
            "Theme switch to {:?} cancelled",
            state.snapshot.requested.as_deref().unwrap_or_default()
        );
        let active = state
            .snapshot
            .active_slug()
            .map(|slug| slug.as_str().to_string());
        state.snapshot.status = if active.is_some() {
            ThemeStatus::Ready
        } else {
            ThemeStatus::Idle
        };
        state.snapshot.requested = active;
        state.snapshot.error = None;
        self.context.publish(&state);
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("ThemeContext")
            .field("status", &snapshot.status)
            .field("requested", &snapshot.requested)
            .field("active", &snapshot.active_slug())
            .finish_non_exhaustive()
    }
}
