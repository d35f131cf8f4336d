use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use ts_rs::TS;

pub mod models;

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("slug pattern is valid"));

/// Error returned when a string cannot be turned into a [`ThemeSlug`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme slug {0:?}: expected lowercase letters, digits and dashes")]
pub struct InvalidSlug(pub String);

/// Unique key of a theme in the registry.
///
/// Slugs are normalized on construction: lowercased, with `_` and spaces
/// turned into `-`. So `"Travel_Pass"` and `"travel-pass"` name the same theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "String", into = "String")]
#[ts(export)]
pub struct ThemeSlug(String);

impl ThemeSlug {
    pub fn new(raw: &str) -> Result<Self, InvalidSlug> {
        let normalized = normalize_slug(raw);
        if SLUG_PATTERN.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(InvalidSlug(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalize a theme name for lookup.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['_', ' '], "-")
}

impl fmt::Display for ThemeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ThemeSlug {
    type Err = InvalidSlug;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ThemeSlug {
    type Error = InvalidSlug;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ThemeSlug> for String {
    fn from(slug: ThemeSlug) -> Self {
        slug.0
    }
}

impl AsRef<str> for ThemeSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Surface a theme targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Platform {
    #[default]
    Shop,
    Admin,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Shop => f.write_str("shop"),
            Platform::Admin => f.write_str("admin"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shop" => Ok(Platform::Shop),
            "admin" => Ok(Platform::Admin),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

/// Descriptive metadata of a registered theme. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThemeMeta {
    pub slug: ThemeSlug,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ThemeMeta {
    pub fn new(slug: ThemeSlug, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            slug,
            name: name.into(),
            version: version.into(),
            description: String::new(),
            platform: Platform::Shop,
            author: None,
            thumbnail: None,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Named position in a theme package. Every theme must fill all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SlotName {
    Header,
    Footer,
    ProductCard,
    CartDrawer,
    HomePage,
    ProductsPage,
    ProductDetailPage,
    CategoryPage,
    SearchPage,
    CartPage,
    CheckoutPage,
    CheckoutSuccessPage,
    OrdersPage,
    OrderDetailPage,
    ProfilePage,
    LoginPage,
    RegisterPage,
    ForgotPasswordPage,
    ResetPasswordPage,
    WishlistPage,
    NotFoundPage,
    AboutPage,
    ContactPage,
    FaqPage,
    TermsPage,
    PrivacyPage,
}

impl SlotName {
    /// Every slot of the contract, in declaration order.
    pub const ALL: [SlotName; 26] = [
        SlotName::Header,
        SlotName::Footer,
        SlotName::ProductCard,
        SlotName::CartDrawer,
        SlotName::HomePage,
        SlotName::ProductsPage,
        SlotName::ProductDetailPage,
        SlotName::CategoryPage,
        SlotName::SearchPage,
        SlotName::CartPage,
        SlotName::CheckoutPage,
        SlotName::CheckoutSuccessPage,
        SlotName::OrdersPage,
        SlotName::OrderDetailPage,
        SlotName::ProfilePage,
        SlotName::LoginPage,
        SlotName::RegisterPage,
        SlotName::ForgotPasswordPage,
        SlotName::ResetPasswordPage,
        SlotName::WishlistPage,
        SlotName::NotFoundPage,
        SlotName::AboutPage,
        SlotName::ContactPage,
        SlotName::FaqPage,
        SlotName::TermsPage,
        SlotName::PrivacyPage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SlotName::Header => "Header",
            SlotName::Footer => "Footer",
            SlotName::ProductCard => "ProductCard",
            SlotName::CartDrawer => "CartDrawer",
            SlotName::HomePage => "HomePage",
            SlotName::ProductsPage => "ProductsPage",
            SlotName::ProductDetailPage => "ProductDetailPage",
            SlotName::CategoryPage => "CategoryPage",
            SlotName::SearchPage => "SearchPage",
            SlotName::CartPage => "CartPage",
            SlotName::CheckoutPage => "CheckoutPage",
            SlotName::CheckoutSuccessPage => "CheckoutSuccessPage",
            SlotName::OrdersPage => "OrdersPage",
            SlotName::OrderDetailPage => "OrderDetailPage",
            SlotName::ProfilePage => "ProfilePage",
            SlotName::LoginPage => "LoginPage",
            SlotName::RegisterPage => "RegisterPage",
            SlotName::ForgotPasswordPage => "ForgotPasswordPage",
            SlotName::ResetPasswordPage => "ResetPasswordPage",
            SlotName::WishlistPage => "WishlistPage",
            SlotName::NotFoundPage => "NotFoundPage",
            SlotName::AboutPage => "AboutPage",
            SlotName::ContactPage => "ContactPage",
            SlotName::FaqPage => "FaqPage",
            SlotName::TermsPage => "TermsPage",
            SlotName::PrivacyPage => "PrivacyPage",
        }
    }

    /// Layout pieces are embedded into pages rather than routed to.
    pub fn is_page(self) -> bool {
        !matches!(
            self,
            SlotName::Header | SlotName::Footer | SlotName::ProductCard | SlotName::CartDrawer
        )
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotName::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown slot: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_normalization() {
        assert_eq!(ThemeSlug::new("Default").unwrap().as_str(), "default");
        assert_eq!(ThemeSlug::new("travel_pass").unwrap().as_str(), "travel-pass");
        assert_eq!(ThemeSlug::new(" Travel Pass ").unwrap().as_str(), "travel-pass");
    }

    #[test]
    fn test_slug_rejects_garbage() {
        assert!(ThemeSlug::new("").is_err());
        assert!(ThemeSlug::new("-leading").is_err());
        assert!(ThemeSlug::new("dots.are.bad").is_err());
        assert!(ThemeSlug::new("../escape").is_err());
    }

    #[test]
    fn test_slug_serde_validates() {
        let slug: ThemeSlug = serde_json::from_str("\"Yevbi\"").unwrap();
        assert_eq!(slug.as_str(), "yevbi");
        assert!(serde_json::from_str::<ThemeSlug>("\"a/b\"").is_err());
    }

    #[test]
    fn test_slot_names_round_trip_through_str() {
        for slot in SlotName::ALL {
            assert_eq!(slot.as_str().parse::<SlotName>().unwrap(), slot);
        }
        assert_eq!("checkoutpage".parse::<SlotName>().unwrap(), SlotName::CheckoutPage);
        assert!("Sidebar".parse::<SlotName>().is_err());
    }

    #[test]
    fn test_slot_list_is_complete_and_unique() {
        let mut sorted = SlotName::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 26);
        assert_eq!(SlotName::ALL.iter().filter(|s| !s.is_page()).count(), 4);
    }

    #[test]
    fn test_meta_deserializes_with_defaults() {
        let meta: ThemeMeta = serde_json::from_str(
            r#"{"slug": "yevbi", "name": "TravelPass", "version": "1.0.0"}"#,
        )
        .unwrap();
        assert_eq!(meta.platform, Platform::Shop);
        assert!(meta.tags.is_empty());
        assert!(meta.author.is_none());
    }
}
