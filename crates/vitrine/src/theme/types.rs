//! Theme package and slot component types (no I/O).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use vitrine_core::SlotName;

use super::config::ThemeConfig;
use super::error::RenderError;
use crate::i18n::ThemeI18n;
use crate::props::SlotProps;

/// Rendered HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared inputs every slot receives alongside its props.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a ThemeConfig,
    pub i18n: &'a ThemeI18n,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a ThemeConfig, i18n: &'a ThemeI18n) -> Self {
        Self { config, i18n }
    }

    pub fn t(&self, key: &str) -> String {
        self.i18n.t(key)
    }
}

/// A component filling one slot of a theme.
///
/// Given props, render markup. Components never fetch data; all
/// interactivity goes through the callbacks inside the props.
pub trait SlotComponent: Send + Sync {
    fn render(&self, props: &SlotProps, cx: &RenderContext<'_>) -> Result<Markup, RenderError>;
}

struct FnComponent<F>(F);

impl<F> SlotComponent for FnComponent<F>
where
    F: Fn(&SlotProps, &RenderContext<'_>) -> Result<Markup, RenderError> + Send + Sync,
{
    fn render(&self, props: &SlotProps, cx: &RenderContext<'_>) -> Result<Markup, RenderError> {
        (self.0)(props, cx)
    }
}

/// Wrap a plain function or closure as a slot component.
pub fn component_fn<F>(f: F) -> Arc<dyn SlotComponent>
where
    F: Fn(&SlotProps, &RenderContext<'_>) -> Result<Markup, RenderError> + Send + Sync + 'static,
{
    Arc::new(FnComponent(f))
}

/// A resolved theme: one component per slot plus styling defaults.
#[derive(Clone, Default)]
pub struct ThemePackage {
    components: BTreeMap<SlotName, Arc<dyn SlotComponent>>,
    css: Option<String>,
    default_config: ThemeConfig,
}

impl ThemePackage {
    pub fn builder() -> ThemePackageBuilder {
        ThemePackageBuilder::default()
    }

    pub fn component(&self, slot: SlotName) -> Option<&Arc<dyn SlotComponent>> {
        self.components.get(&slot)
    }

    pub fn has_slot(&self, slot: SlotName) -> bool {
        self.components.contains_key(&slot)
    }

    /// Filled slots, in contract order.
    pub fn slots(&self) -> impl Iterator<Item = SlotName> + '_ {
        self.components.keys().copied()
    }

    /// Slots the contract requires that this package leaves empty.
    pub fn missing_slots(&self) -> Vec<SlotName> {
        SlotName::ALL
            .iter()
            .copied()
            .filter(|slot| !self.has_slot(*slot))
            .collect()
    }

    /// CSS custom property tokens shipped with the theme.
    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    pub fn default_config(&self) -> &ThemeConfig {
        &self.default_config
    }
}

impl fmt::Debug for ThemePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePackage")
            .field("slots", &self.components.keys().collect::<Vec<_>>())
            .field("css", &self.css.as_ref().map(|css| css.len()))
            .field("default_config", &self.default_config)
            .finish()
    }
}

/// Assembles a [`ThemePackage`]. Completeness is checked later, when the
/// registry resolves the package.
#[derive(Default)]
pub struct ThemePackageBuilder {
    components: BTreeMap<SlotName, Arc<dyn SlotComponent>>,
    css: Option<String>,
    default_config: ThemeConfig,
}

impl ThemePackageBuilder {
    pub fn slot(mut self, slot: SlotName, component: Arc<dyn SlotComponent>) -> Self {
        self.components.insert(slot, component);
        self
    }

    /// Fill every slot from `make`, replacing what was set before.
    pub fn all_slots(mut self, make: impl Fn(SlotName) -> Arc<dyn SlotComponent>) -> Self {
        for slot in SlotName::ALL {
            self.components.insert(slot, make(slot));
        }
        self
    }

    pub fn without(mut self, slot: SlotName) -> Self {
        self.components.remove(&slot);
        self
    }

    pub fn css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    pub fn default_config(mut self, config: ThemeConfig) -> Self {
        self.default_config = config;
        self
    }

    pub fn build(self) -> ThemePackage {
        ThemePackage {
            components: self.components,
            css: self.css,
            default_config: self.default_config,
        }
    }
}
