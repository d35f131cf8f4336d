//! The `default` kit: neutral storefront, every slot from the shared renderers.

use vitrine_core::{Platform, ThemeMeta, ThemeSlug};

use super::storefront::{self, CardLayout, Style};
use crate::props::SlotProps;
use crate::theme::{
    BrandConfig, HeaderStyle, LayoutConfig, Markup, RenderContext, RenderError, ThemeConfig,
};

pub const CSS: &str = include_str!("../../styles/default.css");

const STYLE: Style = Style {
    prefix: "vt",
    hero_title_key: "home.hero_title",
    hero_subtitle_key: "home.hero_subtitle",
    card: CardLayout::Stacked,
};

pub fn meta() -> ThemeMeta {
    let slug = ThemeSlug::new("default").expect("built-in slug is valid");
    ThemeMeta::new(slug, "Default", env!("CARGO_PKG_VERSION"))
        .with_description("Neutral storefront with a classic header and a four column grid")
        .with_platform(Platform::Shop)
        .with_tags(["minimal", "general"])
}

pub fn config() -> ThemeConfig {
    ThemeConfig {
        brand: BrandConfig {
            primary_color: Some("#1f2937".into()),
            secondary_color: Some("#f3f4f6".into()),
            accent_color: Some("#2563eb".into()),
            ..Default::default()
        },
        layout: LayoutConfig {
            max_width: Some("1280px".into()),
            header_style: Some(HeaderStyle::Classic),
            sticky_header: Some(true),
            product_columns: Some(4),
            show_breadcrumbs: Some(true),
        },
        ..Default::default()
    }
}

pub fn render(props: &SlotProps, cx: &RenderContext<'_>) -> Result<Markup, RenderError> {
    storefront::render(&STYLE, props, cx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ThemeI18n;
    use crate::props::HeaderProps;

    #[test]
    fn test_header_uses_brand_and_prefix() {
        let mut config = config();
        config.brand.name = Some("Acme & Co".into());
        let i18n = ThemeI18n::default();
        let cx = RenderContext::new(&config, &i18n);

        let props = HeaderProps {
            cart_item_count: 3,
            ..Default::default()
        };
        let html = render(&props.into(), &cx).unwrap();
        assert!(html.as_str().starts_with(r#"<header class="vt-header""#));
        assert!(html.as_str().contains("Acme &amp; Co"));
        assert!(html.as_str().contains(r#"data-count="3""#));
        assert!(html.as_str().contains(r#"data-action="open_login""#));
    }
}
