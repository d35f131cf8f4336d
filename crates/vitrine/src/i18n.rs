//! Translation lookup handed to every slot.

use std::fmt;
use std::sync::Arc;

/// Host-provided lookup from a translation key to display text.
pub type Translator = Arc<dyn Fn(&str, &str) -> Option<String> + Send + Sync>;

/// Locale plus translation lookup for one render pass.
///
/// Lookups go to the host translator first and fall back to the strings
/// bundled with the built-in themes.
#[derive(Clone)]
pub struct ThemeI18n {
    locale: String,
    translator: Option<Translator>,
}

impl ThemeI18n {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            translator: None,
        }
    }

    /// Use `translator(locale, key)` before the bundled strings.
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn t(&self, key: &str) -> String {
        if let Some(translator) = &self.translator {
            if let Some(text) = translator(&self.locale, key) {
                return text;
            }
        }
        rust_i18n::t!(key, locale = self.locale.as_str()).to_string()
    }
}

impl Default for ThemeI18n {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Debug for ThemeI18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeI18n")
            .field("locale", &self.locale)
            .field("translator", &self.translator.is_some())
            .finish()
    }
}

/// Locales the bundled strings are available in.
pub fn bundled_locales() -> Vec<String> {
    rust_i18n::available_locales!()
        .into_iter()
        .map(|locale| locale.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_strings_per_locale() {
        assert_eq!(ThemeI18n::new("en").t("cart.title"), "Your cart");
        assert_eq!(ThemeI18n::new("uk").t("cart.title"), "Ваш кошик");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(ThemeI18n::new("xx").t("cart.title"), "Your cart");
    }

    #[test]
    fn test_host_translator_wins() {
        let i18n = ThemeI18n::new("en").with_translator(Arc::new(|_: &str, key: &str| {
            (key == "cart.title").then(|| "Basket".to_string())
        }));
        assert_eq!(i18n.t("cart.title"), "Basket");
        assert_eq!(i18n.t("cart.empty"), "Your cart is empty");
    }

    #[test]
    fn test_bundled_locales_listed() {
        let locales = bundled_locales();
        assert!(locales.iter().any(|l| l == "en"));
        assert!(locales.iter().any(|l| l == "uk"));
    }
}
