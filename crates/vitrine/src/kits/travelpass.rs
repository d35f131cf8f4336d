//! The `travelpass` kit: travel-pass storefront with a destination-led home
//! page, compact product cards and a centered header.

use vitrine_core::models::ViewMode;
use vitrine_core::{Platform, ThemeMeta, ThemeSlug};

use super::markup::Html;
use super::storefront::{self, CardLayout, Style};
use crate::props::{HomePageProps, SlotProps};
use crate::theme::{
    BrandConfig, Feature, FeatureFlags, HeaderStyle, LayoutConfig, Markup, RenderContext,
    RenderError, ThemeConfig,
};

pub const CSS: &str = include_str!("../../styles/travelpass.css");

const STYLE: Style = Style {
    prefix: "tp",
    hero_title_key: "travel.hero_title",
    hero_subtitle_key: "travel.hero_subtitle",
    card: CardLayout::Compact,
};

pub fn meta() -> ThemeMeta {
    let slug = ThemeSlug::new("travelpass").expect("built-in slug is valid");
    ThemeMeta::new(slug, "TravelPass", env!("CARGO_PKG_VERSION"))
        .with_description("Destination-first layout for travel passes and e-SIM bundles")
        .with_platform(Platform::Shop)
        .with_tags(["travel", "bold"])
}

pub fn config() -> ThemeConfig {
    ThemeConfig {
        brand: BrandConfig {
            primary_color: Some("#0f766e".into()),
            secondary_color: Some("#ecfeff".into()),
            accent_color: Some("#f97316".into()),
            ..Default::default()
        },
        layout: LayoutConfig {
            max_width: Some("1440px".into()),
            header_style: Some(HeaderStyle::Centered),
            sticky_header: Some(true),
            product_columns: Some(3),
            show_breadcrumbs: Some(false),
        },
        features: FeatureFlags {
            reviews: Some(false),
            quick_view: Some(true),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn render(props: &SlotProps, cx: &RenderContext<'_>) -> Result<Markup, RenderError> {
    match props {
        SlotProps::HomePage(p) => {
            let mut html = Html::new(STYLE.prefix);
            home_page(&mut html, p, cx);
            Ok(html.finish())
        }
        _ => storefront::render(&STYLE, props, cx),
    }
}

/// Destinations first, then the featured passes.
fn home_page(html: &mut Html, p: &HomePageProps, cx: &RenderContext<'_>) {
    storefront::page_open(html, "home", None, cx);
    html.open_with("section", "hero", &[("data-variant", "destination")])
        .element("p", "hero-eyebrow", cx.config.brand_name())
        .element("h1", "hero-title", &cx.t(STYLE.hero_title_key))
        .element("p", "hero-subtitle", &cx.t(STYLE.hero_subtitle_key));
    if cx.config.feature(Feature::Search) {
        let placeholder = cx.t("travel.search_placeholder");
        html.open_with("form", "hero-search", &[("role", "search"), ("data-action", "search")])
            .open_with(
                "input",
                "search-input",
                &[("name", "q"), ("type", "search"), ("placeholder", placeholder.as_str())],
            )
            .close("form");
    }
    html.close("section");

    if p.is_loading {
        storefront::loading(html, cx);
        storefront::page_close(html);
        return;
    }

    if !p.categories.is_empty() {
        html.open("section", "destinations")
            .element("h2", "section-title", &cx.t("travel.destinations"));
        for category in &p.categories {
            html.action(
                "destination",
                "select_category",
                &[("data-category-id", category.id.as_str())],
                &category.name,
            );
        }
        html.close("section");
    }

    if !p.featured_products.is_empty() {
        html.open("section", "passes")
            .element("h2", "section-title", &cx.t("travel.popular_passes"));
        storefront::product_grid(html, &STYLE, &p.featured_products, ViewMode::List, false, cx);
        html.close("section");
    }

    if !p.new_arrivals.is_empty() {
        html.open("section", "passes")
            .element("h2", "section-title", &cx.t("home.new_arrivals"));
        storefront::product_grid(html, &STYLE, &p.new_arrivals, ViewMode::Grid, false, cx);
        html.close("section");
    }

    html.action("cta", "continue_shopping", &[], &cx.t("travel.browse_all"));
    storefront::page_close(html);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ThemeI18n;
    use vitrine_core::models::Category;

    #[test]
    fn test_home_page_leads_with_destinations() {
        let config = config();
        let i18n = ThemeI18n::default();
        let cx = RenderContext::new(&config, &i18n);
        let props = HomePageProps {
            categories: vec![Category {
                id: "c-jp".into(),
                slug: "japan".into(),
                name: "Japan".into(),
                parent_id: None,
            }],
            ..Default::default()
        };

        let html = render(&props.into(), &cx).unwrap();
        let html = html.as_str();
        assert!(html.contains(r#"data-variant="destination""#));
        assert!(html.contains(r#"class="tp-destination""#));
        assert!(html.contains(r#"data-category-id="c-jp""#));
        assert!(!html.contains("vt-"));
    }

    #[test]
    fn test_config_disables_reviews() {
        assert!(!config().feature(Feature::Reviews));
        assert!(config().feature(Feature::Wishlist));
        assert_eq!(config().product_columns(), 3);
    }
}
