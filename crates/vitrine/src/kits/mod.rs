//! Built-in component kits.
//!
//! A kit is a complete set of slot components plus its default config and
//! stylesheet. Each kit is registered as a theme of the same slug, and
//! manifest themes reuse kits through `extends` and `components`.

pub mod markup;
mod default;
mod storefront;
mod travelpass;

use std::sync::Arc;

use async_trait::async_trait;
use vitrine_core::{SlotName, ThemeMeta};

use crate::props::SlotProps;
use crate::theme::{
    Markup, RenderContext, RenderError, SlotComponent, ThemeConfig, ThemeError, ThemeLoader,
    ThemePackage, ThemeRegistryBuilder,
};

pub use storefront::{CardLayout, Style};

type RenderFn = fn(&SlotProps, &RenderContext<'_>) -> Result<Markup, RenderError>;

pub struct Kit {
    pub name: &'static str,
    pub css: &'static str,
    meta: fn() -> ThemeMeta,
    config: fn() -> ThemeConfig,
    render: RenderFn,
}

impl Kit {
    pub fn meta(&self) -> ThemeMeta {
        (self.meta)()
    }

    pub fn default_config(&self) -> ThemeConfig {
        (self.config)()
    }

    /// The component serving `slot`. It rejects props of any other slot.
    pub fn component(&'static self, slot: SlotName) -> Arc<dyn SlotComponent> {
        Arc::new(KitComponent { kit: self, slot })
    }

    /// Full package with every slot filled.
    pub fn package(&'static self) -> ThemePackage {
        ThemePackage::builder()
            .all_slots(|slot| self.component(slot))
            .css(self.css)
            .default_config(self.default_config())
            .build()
    }
}

impl std::fmt::Debug for Kit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kit").field("name", &self.name).finish()
    }
}

struct KitComponent {
    kit: &'static Kit,
    slot: SlotName,
}

impl SlotComponent for KitComponent {
    fn render(&self, props: &SlotProps, cx: &RenderContext<'_>) -> Result<Markup, RenderError> {
        if props.slot() != self.slot {
            return Err(RenderError::PropsMismatch {
                slot: self.slot,
                got: props.slot(),
            });
        }
        (self.kit.render)(props, cx)
    }
}

pub static BUILTIN_KITS: &[Kit] = &[
    Kit {
        name: "default",
        css: default::CSS,
        meta: default::meta,
        config: default::config,
        render: default::render,
    },
    Kit {
        name: "travelpass",
        css: travelpass::CSS,
        meta: travelpass::meta,
        config: travelpass::config,
        render: travelpass::render,
    },
];

pub fn find(name: &str) -> Option<&'static Kit> {
    let name = vitrine_core::normalize_slug(name);
    BUILTIN_KITS.iter().find(|kit| kit.name == name)
}

/// Loads a built-in kit. Assembly is in-memory but goes through the same
/// async path as disk themes.
pub struct KitLoader {
    kit: &'static Kit,
}

impl KitLoader {
    pub fn new(kit: &'static Kit) -> Self {
        Self { kit }
    }
}

#[async_trait]
impl ThemeLoader for KitLoader {
    async fn load(&self) -> anyhow::Result<ThemePackage> {
        Ok(self.kit.package())
    }
}

/// Register one theme per built-in kit.
pub fn register_builtin_themes(builder: &mut ThemeRegistryBuilder) -> Result<(), ThemeError> {
    for kit in BUILTIN_KITS {
        builder.register(kit.meta(), Arc::new(KitLoader::new(kit)))?;
    }
    tracing::debug!("Registered {} built-in themes", BUILTIN_KITS.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ThemeI18n;
    use crate::props::{FooterProps, HeaderProps};

    #[test]
    fn test_find_normalizes_name() {
        assert_eq!(find("TravelPass").map(|kit| kit.name), Some("travelpass"));
        assert_eq!(find(" default ").map(|kit| kit.name), Some("default"));
        assert!(find("brutalist").is_none());
    }

    #[test]
    fn test_kit_meta_slug_matches_name() {
        for kit in BUILTIN_KITS {
            assert_eq!(kit.meta().slug.as_str(), kit.name);
        }
    }

    #[test]
    fn test_kit_package_is_complete() {
        for kit in BUILTIN_KITS {
            let package = kit.package();
            assert!(package.missing_slots().is_empty(), "{} incomplete", kit.name);
            assert!(package.css().is_some_and(|css| !css.is_empty()));
        }
    }

    #[test]
    fn test_component_rejects_foreign_props() {
        let kit = find("default").unwrap();
        let config = kit.default_config();
        let i18n = ThemeI18n::default();
        let cx = RenderContext::new(&config, &i18n);

        let err = kit
            .component(SlotName::Header)
            .render(&FooterProps::default().into(), &cx)
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::PropsMismatch {
                slot: SlotName::Header,
                got: SlotName::Footer
            }
        );
        assert!(kit
            .component(SlotName::Header)
            .render(&HeaderProps::default().into(), &cx)
            .is_ok());
    }

    #[test]
    fn test_register_builtin_themes() {
        let mut builder = crate::theme::ThemeRegistry::builder();
        register_builtin_themes(&mut builder).unwrap();
        assert_eq!(builder.len(), BUILTIN_KITS.len());
        assert!(register_builtin_themes(&mut builder).is_err());
    }
}
