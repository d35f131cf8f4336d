// Bundled translations for the built-in kits.
rust_i18n::i18n!("locales", fallback = "en");

pub mod config;
pub mod i18n;
pub mod kits;
pub mod props;
pub mod sample;
pub mod tenant;
pub mod theme;

#[cfg(feature = "runtime")]
pub mod services;

pub use vitrine_core::{models, normalize_slug, Platform, SlotName, ThemeMeta, ThemeSlug};
