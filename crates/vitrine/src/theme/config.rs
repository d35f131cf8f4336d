//! Theme configuration with partial-update semantics.
//!
//! Every field is optional. A config is layered over a theme's defaults with
//! [`ThemeConfig::merge`]: fields set in the patch win, unset fields keep the
//! current value. Nothing is ever replaced wholesale.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Copy every `Some` field of `$src` into `$dst`.
macro_rules! overlay {
    ($dst:expr, $src:expr; $($field:ident),+ $(,)?) => {
        $(
            if $src.$field.is_some() {
                $dst.$field = $src.$field.clone();
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "BrandConfig::is_empty")]
    pub brand: BrandConfig,
    #[serde(default, skip_serializing_if = "LayoutConfig::is_empty")]
    pub layout: LayoutConfig,
    #[serde(default, skip_serializing_if = "FeatureFlags::is_empty")]
    pub features: FeatureFlags,
    #[serde(default, skip_serializing_if = "I18nConfig::is_empty")]
    pub i18n: I18nConfig,
    /// Theme-specific settings the shared schema does not know about.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    Classic,
    Centered,
    Minimal,
}

impl HeaderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderStyle::Classic => "classic",
            HeaderStyle::Centered => "centered",
            HeaderStyle::Minimal => "minimal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_style: Option<HeaderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_columns: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_breadcrumbs: Option<bool>,
}

/// Storefront features a theme may show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Wishlist,
    Reviews,
    Search,
    GuestCheckout,
    Compare,
    QuickView,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_checkout: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_view: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_locales: Option<Vec<String>>,
}

impl BrandConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn merge(&mut self, patch: &Self) {
        overlay!(
            self, patch;
            name, logo_url, favicon_url, primary_color, secondary_color, accent_color,
        );
    }
}

impl LayoutConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn merge(&mut self, patch: &Self) {
        overlay!(
            self, patch;
            max_width, header_style, sticky_header, product_columns, show_breadcrumbs,
        );
    }
}

impl FeatureFlags {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn merge(&mut self, patch: &Self) {
        overlay!(self, patch; wishlist, reviews, search, guest_checkout, compare, quick_view);
    }

    /// Whether a feature is on, falling back to the platform default when unset.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Wishlist => self.wishlist.unwrap_or(true),
            Feature::Reviews => self.reviews.unwrap_or(true),
            Feature::Search => self.search.unwrap_or(true),
            Feature::GuestCheckout => self.guest_checkout.unwrap_or(true),
            Feature::Compare => self.compare.unwrap_or(false),
            Feature::QuickView => self.quick_view.unwrap_or(false),
        }
    }
}

impl I18nConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn merge(&mut self, patch: &Self) {
        overlay!(self, patch; locale, currency, available_locales);
    }
}

impl ThemeConfig {
    /// Deep-merge `patch` into this config.
    pub fn merge(&mut self, patch: &ThemeConfig) {
        self.brand.merge(&patch.brand);
        self.layout.merge(&patch.layout);
        self.features.merge(&patch.features);
        self.i18n.merge(&patch.i18n);
        merge_json_maps(&mut self.extra, &patch.extra);
    }

    /// Owned variant of [`merge`](Self::merge), handy for layering.
    pub fn merged(mut self, patch: &ThemeConfig) -> Self {
        self.merge(patch);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn brand_name(&self) -> &str {
        self.brand.name.as_deref().unwrap_or("Store")
    }

    pub fn locale(&self) -> &str {
        self.i18n.locale.as_deref().unwrap_or("en")
    }

    pub fn max_width(&self) -> &str {
        self.layout.max_width.as_deref().unwrap_or("1280px")
    }

    pub fn product_columns(&self) -> u8 {
        self.layout.product_columns.unwrap_or(4).clamp(1, 6)
    }

    pub fn header_style(&self) -> HeaderStyle {
        self.layout.header_style.unwrap_or(HeaderStyle::Classic)
    }

    pub fn feature(&self, feature: Feature) -> bool {
        self.features.is_enabled(feature)
    }
}

/// Recursively merge JSON objects. Non-object values in `patch` replace the
/// target value, and `null` removes the key.
pub fn merge_json(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target_map), Value::Object(patch_map)) => {
            merge_json_maps(target_map, patch_map);
        }
        (target, patch) => {
            *target = patch.clone();
        }
    }
}

fn merge_json_maps(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        if value.is_null() {
            target.remove(key);
            continue;
        }
        match target.get_mut(key) {
            Some(existing) => merge_json(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from_json(value: Value) -> ThemeConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_merge_keeps_unrelated_sections() {
        let mut config = from_json(json!({"brand": {"name": "X"}}));
        config.merge(&from_json(json!({"layout": {"maxWidth": "1200px"}})));

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"brand": {"name": "X"}, "layout": {"maxWidth": "1200px"}})
        );
    }

    #[test]
    fn test_merge_overrides_only_set_fields() {
        let mut config = from_json(json!({
            "brand": {"name": "Acme", "primaryColor": "#111111"},
            "features": {"wishlist": false}
        }));
        config.merge(&from_json(json!({
            "brand": {"primaryColor": "#ff0000"},
            "features": {"compare": true}
        })));

        assert_eq!(config.brand.name.as_deref(), Some("Acme"));
        assert_eq!(config.brand.primary_color.as_deref(), Some("#ff0000"));
        assert!(!config.feature(Feature::Wishlist));
        assert!(config.feature(Feature::Compare));
    }

    #[test]
    fn test_extra_merges_recursively() {
        let mut config = from_json(json!({"extra": {"hero": {"title": "Hi", "image": "a.png"}}}));
        config.merge(&from_json(json!({"extra": {"hero": {"title": "Hello"}, "badge": "new"}})));

        assert_eq!(
            Value::Object(config.extra.clone()),
            json!({"hero": {"title": "Hello", "image": "a.png"}, "badge": "new"})
        );
    }

    #[test]
    fn test_null_in_patch_removes_extra_key() {
        let mut target = json!({"a": 1, "b": {"c": 2}});
        merge_json(&mut target, &json!({"b": null}));
        assert_eq!(target, json!({"a": 1}));
    }

    #[test]
    fn test_accessor_fallbacks() {
        let config = ThemeConfig::default();
        assert_eq!(config.brand_name(), "Store");
        assert_eq!(config.locale(), "en");
        assert_eq!(config.max_width(), "1280px");
        assert_eq!(config.product_columns(), 4);
        assert_eq!(config.header_style(), HeaderStyle::Classic);
        assert!(config.feature(Feature::Search));
        assert!(!config.feature(Feature::QuickView));
    }

    #[test]
    fn test_product_columns_clamped() {
        let config = from_json(json!({"layout": {"productColumns": 12}}));
        assert_eq!(config.product_columns(), 6);
    }
}
