//! Slot renderers shared by the built-in kits.
//!
//! Kits differ in class prefix, hero copy and card layout; the markup
//! structure is common. A kit can replace any single renderer and fall back
//! to [`render`] for the rest.

use vitrine_core::models::{Address, Cart, Pagination, Product, SortOption, ViewMode};

use super::markup::Html;
use crate::props::*;
use crate::theme::{Feature, Markup, RenderContext, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    /// Image above text.
    Stacked,
    /// Small thumbnail beside text.
    Compact,
}

impl CardLayout {
    fn as_str(self) -> &'static str {
        match self {
            CardLayout::Stacked => "stacked",
            CardLayout::Compact => "compact",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub prefix: &'static str,
    pub hero_title_key: &'static str,
    pub hero_subtitle_key: &'static str,
    pub card: CardLayout,
}

/// Render any slot with the shared markup.
pub fn render(
    style: &Style,
    props: &SlotProps,
    cx: &RenderContext<'_>,
) -> Result<Markup, RenderError> {
    let mut html = Html::new(style.prefix);
    let h = &mut html;
    match props {
        SlotProps::Header(p) => header(h, p, cx),
        SlotProps::Footer(p) => footer(h, p, cx),
        SlotProps::ProductCard(p) => product_card(h, style, &p.product, p.is_in_wishlist, cx),
        SlotProps::CartDrawer(p) => cart_drawer(h, p, cx),
        SlotProps::HomePage(p) => home_page(h, style, p, cx),
        SlotProps::ProductsPage(p) => products_page(h, style, p, cx),
        SlotProps::ProductDetailPage(p) => product_detail_page(h, style, p, cx),
        SlotProps::CategoryPage(p) => category_page(h, style, p, cx),
        SlotProps::SearchPage(p) => search_page(h, style, p, cx),
        SlotProps::CartPage(p) => cart_page(h, p, cx),
        SlotProps::CheckoutPage(p) => checkout_page(h, p, cx),
        SlotProps::CheckoutSuccessPage(p) => checkout_success_page(h, p, cx),
        SlotProps::OrdersPage(p) => orders_page(h, p, cx),
        SlotProps::OrderDetailPage(p) => order_detail_page(h, p, cx),
        SlotProps::ProfilePage(p) => profile_page(h, p, cx),
        SlotProps::LoginPage(p) => login_page(h, p, cx),
        SlotProps::RegisterPage(p) => register_page(h, p, cx),
        SlotProps::ForgotPasswordPage(p) => forgot_password_page(h, p, cx),
        SlotProps::ResetPasswordPage(p) => reset_password_page(h, p, cx),
        SlotProps::WishlistPage(p) => wishlist_page(h, style, p, cx),
        SlotProps::NotFoundPage(p) => not_found_page(h, p, cx),
        SlotProps::AboutPage(p) => about_page(h, p, cx),
        SlotProps::ContactPage(p) => contact_page(h, p, cx),
        SlotProps::FaqPage(p) => faq_page(h, p, cx),
        SlotProps::TermsPage(p) => legal_page(
            h,
            "terms",
            "terms.title",
            &p.paragraphs,
            p.last_updated.as_deref(),
            cx,
        ),
        SlotProps::PrivacyPage(p) => legal_page(
            h,
            "privacy",
            "privacy.title",
            &p.paragraphs,
            p.last_updated.as_deref(),
            cx,
        ),
    }
    Ok(html.finish())
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

pub fn page_open(html: &mut Html, page: &str, title: Option<&str>, cx: &RenderContext<'_>) {
    let width = format!("max-width:{}", cx.config.max_width());
    html.open_with("main", "page", &[("data-page", page), ("style", width.as_str())]);
    if let Some(title) = title {
        html.element("h1", "page-title", title);
    }
}

pub fn page_close(html: &mut Html) {
    html.close("main");
}

pub fn loading(html: &mut Html, cx: &RenderContext<'_>) {
    html.open_with("div", "loading", &[("aria-busy", "true")])
        .text(&cx.t("common.loading"))
        .close("div");
}

fn alert(html: &mut Html, message: Option<&str>) {
    if let Some(message) = message {
        html.open_with("p", "alert", &[("role", "alert")])
            .text(message)
            .close("p");
    }
}

pub fn price(html: &mut Html, product: &Product, cx: &RenderContext<'_>) {
    html.open("div", "price");
    if product.is_discounted() {
        if let Some(was) = &product.compare_at_price {
            html.element("s", "price-was", &was.to_string());
        }
        html.element("span", "badge-sale", &cx.t("product.sale"));
    }
    html.element("span", "price-now", &product.price.to_string());
    html.close("div");
}

pub fn product_card(
    html: &mut Html,
    style: &Style,
    product: &Product,
    in_wishlist: bool,
    cx: &RenderContext<'_>,
) {
    let id = product.id.as_str();
    let href = format!("/products/{}", product.slug);
    html.open_with(
        "article",
        "product-card",
        &[("data-product-id", id), ("data-layout", style.card.as_str())],
    );
    html.open_with(
        "a",
        "product-link",
        &[
            ("href", href.as_str()),
            ("data-action", "select_product"),
            ("data-product-id", id),
        ],
    );
    if let Some(image) = product.primary_image() {
        let alt = if image.alt.is_empty() {
            &product.name
        } else {
            &image.alt
        };
        let class = match style.card {
            CardLayout::Stacked => "product-image",
            CardLayout::Compact => "product-thumb",
        };
        html.image(class, &image.url, alt);
    }
    html.element("h3", "product-name", &product.name);
    html.close("a");
    price(html, product, cx);
    if product.in_stock {
        html.action(
            "add-to-cart",
            "add_to_cart",
            &[("data-product-id", id), ("data-quantity", "1")],
            &cx.t("product.add_to_cart"),
        );
    } else {
        html.element("span", "out-of-stock", &cx.t("product.out_of_stock"));
    }
    if cx.config.feature(Feature::Wishlist) {
        let key = if in_wishlist {
            "product.wishlist_remove"
        } else {
            "product.wishlist_add"
        };
        html.action("wishlist", "toggle_wishlist", &[("data-product-id", id)], &cx.t(key));
    }
    html.close("article");
}

pub fn product_grid(
    html: &mut Html,
    style: &Style,
    products: &[Product],
    view_mode: ViewMode,
    in_wishlist: bool,
    cx: &RenderContext<'_>,
) {
    let columns = cx.config.product_columns().to_string();
    let view = match view_mode {
        ViewMode::Grid => "grid",
        ViewMode::List => "list",
    };
    html.open_with(
        "div",
        "product-grid",
        &[("data-view", view), ("data-columns", columns.as_str())],
    );
    for product in products {
        product_card(html, style, product, in_wishlist, cx);
    }
    html.close("div");
}

pub fn pagination(html: &mut Html, pagination: &Pagination, cx: &RenderContext<'_>) {
    let total = pagination.total_pages();
    if total <= 1 {
        return;
    }
    html.open_with("nav", "pagination", &[("aria-label", "pagination")]);
    if pagination.has_previous() {
        let previous = (pagination.page - 1).to_string();
        html.action("page-prev", "change_page", &[("data-page", previous.as_str())], "‹");
    }
    let status = cx
        .t("catalog.page_of")
        .replace("%{page}", &pagination.page.to_string())
        .replace("%{total}", &total.to_string());
    html.element("span", "page-status", &status);
    if pagination.has_next() {
        let next = (pagination.page + 1).to_string();
        html.action("page-next", "change_page", &[("data-page", next.as_str())], "›");
    }
    html.close("nav");
}

fn sort_select(html: &mut Html, current: SortOption, cx: &RenderContext<'_>) {
    html.open_with("select", "sort", &[("name", "sort"), ("data-action", "change_sort")]);
    for option in SortOption::ALL {
        let value = option.as_str();
        let label = cx.t(&format!("sort.{}", value));
        if option == current {
            html.open_with("option", "", &[("value", value), ("selected", "selected")]);
        } else {
            html.open_with("option", "", &[("value", value)]);
        }
        html.text(&label).close("option");
    }
    html.close("select");
}

fn breadcrumbs(html: &mut Html, trail: &[(&str, &str)], cx: &RenderContext<'_>) {
    if !cx.config.layout.show_breadcrumbs.unwrap_or(true) {
        return;
    }
    html.open_with("nav", "breadcrumbs", &[("aria-label", "breadcrumbs")]);
    html.link("crumb", "/", cx.config.brand_name());
    for (href, label) in trail {
        html.text(" / ").link("crumb", href, label);
    }
    html.close("nav");
}

fn cart_lines(html: &mut Html, cart: &Cart, cx: &RenderContext<'_>) {
    html.open("ul", "cart-lines");
    for item in &cart.items {
        let id = item.product.id.as_str();
        let quantity = item.quantity.to_string();
        let fewer = item.quantity.saturating_sub(1).to_string();
        let more = item.quantity.saturating_add(1).to_string();
        html.open_with("li", "cart-line", &[("data-product-id", id)])
            .element("span", "cart-line-name", &item.product.name)
            .action(
                "qty-dec",
                "update_cart_quantity",
                &[("data-product-id", id), ("data-quantity", fewer.as_str())],
                "−",
            )
            .element("span", "cart-line-qty", &quantity)
            .action(
                "qty-inc",
                "update_cart_quantity",
                &[("data-product-id", id), ("data-quantity", more.as_str())],
                "+",
            )
            .element("span", "cart-line-total", &item.line_total().to_string())
            .action(
                "remove",
                "remove_cart_item",
                &[("data-product-id", id)],
                &cx.t("cart.remove"),
            )
            .close("li");
    }
    html.close("ul");
}

fn cart_totals(html: &mut Html, cart: &Cart, cx: &RenderContext<'_>) {
    html.open("dl", "totals")
        .element("dt", "", &cx.t("cart.subtotal"))
        .element("dd", "subtotal", &cart.subtotal.to_string());
    if let Some(discount) = &cart.discount {
        html.element("dt", "", &cx.t("cart.discount"))
            .element("dd", "discount", &format!("−{}", discount));
    }
    html.element("dt", "", &cx.t("cart.total"))
        .element("dd", "total", &cart.total.to_string())
        .close("dl");
}

fn address_form(
    html: &mut Html,
    address: &Address,
    props: &CheckoutPageProps,
    cx: &RenderContext<'_>,
) {
    html.open_with("fieldset", "address", &[("data-action", "update_address")])
        .element("legend", "", &cx.t("checkout.shipping"));
    let fields = [
        ("full_name", "address.full_name", address.full_name.as_str()),
        ("line1", "address.line1", address.line1.as_str()),
        ("line2", "address.line2", address.line2.as_deref().unwrap_or("")),
        ("city", "address.city", address.city.as_str()),
        ("postal_code", "address.postal_code", address.postal_code.as_str()),
        ("country", "address.country", address.country.as_str()),
        ("phone", "address.phone", address.phone.as_deref().unwrap_or("")),
    ];
    for (name, label, value) in fields {
        html.input(name, "text", &cx.t(label), value);
        if let Some(message) = props.error_for(name) {
            html.element("span", "field-error", message);
        }
    }
    html.close("fieldset");
}

// ---------------------------------------------------------------------------
// Layout slots
// ---------------------------------------------------------------------------

pub fn header(html: &mut Html, p: &HeaderProps, cx: &RenderContext<'_>) {
    let sticky = if cx.config.layout.sticky_header.unwrap_or(false) {
        "true"
    } else {
        "false"
    };
    html.open_with(
        "header",
        "header",
        &[("data-style", cx.config.header_style().as_str()), ("data-sticky", sticky)],
    );
    html.open_with("a", "logo", &[("href", "/"), ("data-action", "go_home")]);
    match &cx.config.brand.logo_url {
        Some(url) => {
            html.image("logo-image", url, cx.config.brand_name());
        }
        None => {
            html.text(cx.config.brand_name());
        }
    }
    html.close("a");

    if !p.categories.is_empty() {
        html.open("nav", "categories");
        for category in &p.categories {
            html.action(
                "category-link",
                "select_category",
                &[("data-category-id", category.id.as_str())],
                &category.name,
            );
        }
        html.close("nav");
    }

    if cx.config.feature(Feature::Search) {
        let placeholder = cx.t("header.search_placeholder");
        html.open_with("form", "search", &[("role", "search"), ("data-action", "search")])
            .open_with(
                "input",
                "search-input",
                &[
                    ("name", "q"),
                    ("type", "search"),
                    ("value", p.search_query.as_str()),
                    ("placeholder", placeholder.as_str()),
                ],
            )
            .close("form");
    }

    let count = p.cart_item_count.to_string();
    html.action(
        "cart-button",
        "open_cart",
        &[("data-count", count.as_str())],
        &format!("{} ({})", cx.t("header.cart"), count),
    );
    match &p.user {
        Some(user) => {
            html.element("span", "user", &user.display_name)
                .action("logout", "logout", &[], &cx.t("header.logout"));
        }
        None => {
            html.action("login", "open_login", &[], &cx.t("header.login"));
        }
    }
    html.close("header");
}

pub fn footer(html: &mut Html, p: &FooterProps, cx: &RenderContext<'_>) {
    html.open("footer", "footer");
    if !p.categories.is_empty() {
        html.open("nav", "footer-categories");
        for category in &p.categories {
            let path = format!("/categories/{}", category.slug);
            html.open_with(
                "a",
                "footer-link",
                &[
                    ("href", path.as_str()),
                    ("data-action", "navigate"),
                    ("data-path", path.as_str()),
                ],
            )
            .text(&category.name)
            .close("a");
        }
        html.close("nav");
    }

    html.open("nav", "footer-links");
    for (path, key) in [
        ("/about", "footer.about"),
        ("/contact", "footer.contact"),
        ("/faq", "footer.faq"),
        ("/terms", "footer.terms"),
        ("/privacy", "footer.privacy"),
    ] {
        html.open_with(
            "a",
            "footer-link",
            &[("href", path), ("data-action", "navigate"), ("data-path", path)],
        )
        .text(&cx.t(key))
        .close("a");
    }
    html.close("nav");

    html.open_with("form", "newsletter", &[("data-action", "subscribe_newsletter")])
        .element("span", "newsletter-title", &cx.t("footer.newsletter"))
        .open_with("input", "input", &[("name", "email"), ("type", "email")])
        .action("subscribe", "subscribe_newsletter", &[], &cx.t("footer.subscribe"))
        .close("form");
    html.element(
        "p",
        "copyright",
        &format!("© {} · {}", cx.config.brand_name(), cx.t("footer.rights")),
    );
    html.close("footer");
}

pub fn cart_drawer(html: &mut Html, p: &CartDrawerProps, cx: &RenderContext<'_>) {
    let (state, hidden) = if p.is_open {
        ("open", "false")
    } else {
        ("closed", "true")
    };
    html.open_with("aside", "cart-drawer", &[("data-state", state), ("aria-hidden", hidden)])
        .element("h2", "cart-title", &cx.t("cart.title"))
        .action("close", "close_cart", &[], "×");
    match &p.cart {
        Some(cart) if !cart.is_empty() => {
            cart_lines(html, cart, cx);
            cart_totals(html, cart, cx);
            html.action("checkout", "checkout", &[], &cx.t("cart.checkout"));
        }
        _ => {
            html.element("p", "cart-empty", &cx.t("cart.empty"));
        }
    }
    html.close("aside");
}

// ---------------------------------------------------------------------------
// Catalog pages
// ---------------------------------------------------------------------------

pub fn home_page(html: &mut Html, style: &Style, p: &HomePageProps, cx: &RenderContext<'_>) {
    page_open(html, "home", None, cx);
    html.open("section", "hero")
        .element("h1", "hero-title", &cx.t(style.hero_title_key))
        .element("p", "hero-subtitle", &cx.t(style.hero_subtitle_key))
        .action("cta", "continue_shopping", &[], &cx.t("home.shop_now"))
        .close("section");

    if p.is_loading {
        loading(html, cx);
    } else {
        if !p.categories.is_empty() {
            html.open("section", "home-categories")
                .element("h2", "section-title", &cx.t("home.categories"));
            for category in &p.categories {
                html.action(
                    "category-tile",
                    "select_category",
                    &[("data-category-id", category.id.as_str())],
                    &category.name,
                );
            }
            html.close("section");
        }
        for (key, products) in [
            ("home.featured", &p.featured_products),
            ("home.new_arrivals", &p.new_arrivals),
        ] {
            if products.is_empty() {
                continue;
            }
            html.open("section", "home-products")
                .element("h2", "section-title", &cx.t(key));
            product_grid(html, style, products, ViewMode::Grid, false, cx);
            html.close("section");
        }
    }
    page_close(html);
}

pub fn products_page(
    html: &mut Html,
    style: &Style,
    p: &ProductsPageProps,
    cx: &RenderContext<'_>,
) {
    page_open(html, "products", Some(&cx.t("catalog.title")), cx);

    html.open("div", "toolbar");
    sort_select(html, p.sort, cx);
    for (mode, value, key) in [
        (ViewMode::Grid, "grid", "catalog.grid"),
        (ViewMode::List, "list", "catalog.list"),
    ] {
        let pressed = if p.view_mode == mode { "true" } else { "false" };
        html.action(
            "view-mode",
            "change_view_mode",
            &[("data-view-mode", value), ("aria-pressed", pressed)],
            &cx.t(key),
        );
    }
    if !p.categories.is_empty() {
        html.open_with(
            "select",
            "category-filter",
            &[("name", "category"), ("data-action", "select_category")],
        );
        html.open_with("option", "", &[("value", "")])
            .text(&cx.t("catalog.all_categories"))
            .close("option");
        for category in &p.categories {
            let selected = p.selected_category.as_deref() == Some(category.id.as_str());
            if selected {
                html.open_with(
                    "option",
                    "",
                    &[("value", category.id.as_str()), ("selected", "selected")],
                );
            } else {
                html.open_with("option", "", &[("value", category.id.as_str())]);
            }
            html.text(&category.name).close("option");
        }
        html.close("select");
    }
    html.close("div");

    if p.is_loading {
        loading(html, cx);
    } else if p.products.is_empty() {
        html.element("p", "empty", &cx.t("catalog.no_products"));
    } else {
        product_grid(html, style, &p.products, p.view_mode, false, cx);
        pagination(html, &p.pagination, cx);
    }
    page_close(html);
}

pub fn product_detail_page(
    html: &mut Html,
    style: &Style,
    p: &ProductDetailPageProps,
    cx: &RenderContext<'_>,
) {
    page_open(html, "product-detail", None, cx);
    if p.is_loading {
        loading(html, cx);
        page_close(html);
        return;
    }
    let Some(product) = &p.product else {
        html.element("p", "empty", &cx.t("product.not_found"))
            .action("back", "back", &[], &cx.t("common.back"));
        page_close(html);
        return;
    };

    let href = format!("/products/{}", product.slug);
    breadcrumbs(html, &[(href.as_str(), product.name.as_str())], cx);
    html.action("back", "back", &[], &cx.t("common.back"));

    let id = product.id.as_str();
    html.open_with("article", "product-detail", &[("data-product-id", id)]);
    html.open("div", "gallery");
    for image in &product.images {
        html.image("gallery-image", &image.url, &image.alt);
    }
    html.close("div");
    html.element("h1", "product-title", &product.name);
    price(html, product, cx);
    if !product.description.is_empty() {
        html.element("p", "description", &product.description);
    }
    if cx.config.feature(Feature::Reviews) {
        if let Some(rating) = product.rating {
            html.element("span", "rating", &format!("★ {:.1}", rating));
        }
    }

    let quantity = p.quantity.max(1);
    let fewer = quantity.saturating_sub(1).max(1).to_string();
    let more = quantity.saturating_add(1).to_string();
    let current = quantity.to_string();
    html.open("div", "quantity")
        .action("qty-dec", "change_quantity", &[("data-quantity", fewer.as_str())], "−")
        .element("span", "qty", &current)
        .action("qty-inc", "change_quantity", &[("data-quantity", more.as_str())], "+")
        .close("div");

    if product.in_stock {
        html.action(
            "add-to-cart",
            "add_to_cart",
            &[("data-product-id", id), ("data-quantity", current.as_str())],
            &cx.t("product.add_to_cart"),
        );
    } else {
        html.element("span", "out-of-stock", &cx.t("product.out_of_stock"));
    }
    if cx.config.feature(Feature::Wishlist) {
        let key = if p.is_in_wishlist {
            "product.wishlist_remove"
        } else {
            "product.wishlist_add"
        };
        html.action("wishlist", "toggle_wishlist", &[("data-product-id", id)], &cx.t(key));
    }
    html.close("article");

    if !p.related_products.is_empty() {
        html.open("section", "related")
            .element("h2", "section-title", &cx.t("product.related"));
        product_grid(html, style, &p.related_products, ViewMode::Grid, false, cx);
        html.close("section");
    }
    page_close(html);
}

pub fn category_page(
    html: &mut Html,
    style: &Style,
    p: &CategoryPageProps,
    cx: &RenderContext<'_>,
) {
    let fallback = cx.t("catalog.title");
    let title = p
        .category
        .as_ref()
        .map(|category| category.name.as_str())
        .unwrap_or(fallback.as_str());
    page_open(html, "category", Some(title), cx);
    if let Some(category) = &p.category {
        let href = format!("/categories/{}", category.slug);
        breadcrumbs(html, &[(href.as_str(), category.name.as_str())], cx);
    }
    html.open("div", "toolbar");
    sort_select(html, p.sort, cx);
    html.close("div");

    if p.is_loading {
        loading(html, cx);
    } else if p.products.is_empty() {
        html.element("p", "empty", &cx.t("catalog.no_products"));
    } else {
        product_grid(html, style, &p.products, ViewMode::Grid, false, cx);
        pagination(html, &p.pagination, cx);
    }
    page_close(html);
}

pub fn search_page(html: &mut Html, style: &Style, p: &SearchPageProps, cx: &RenderContext<'_>) {
    page_open(html, "search", Some(&cx.t("search.title")), cx);
    let placeholder = cx.t("header.search_placeholder");
    html.open_with("form", "search", &[("role", "search"), ("data-action", "search")])
        .open_with(
            "input",
            "search-input",
            &[
                ("name", "q"),
                ("type", "search"),
                ("value", p.query.as_str()),
                ("placeholder", placeholder.as_str()),
            ],
        )
        .close("form");

    if p.is_loading {
        loading(html, cx);
    } else if !p.query.is_empty() {
        let heading = cx.t("search.results_for").replace("%{query}", &p.query);
        html.element("h2", "section-title", &heading);
        if p.results.is_empty() {
            html.element("p", "empty", &cx.t("search.no_results"));
        } else {
            product_grid(html, style, &p.results, ViewMode::Grid, false, cx);
            pagination(html, &p.pagination, cx);
        }
    }
    page_close(html);
}

pub fn wishlist_page(
    html: &mut Html,
    style: &Style,
    p: &WishlistPageProps,
    cx: &RenderContext<'_>,
) {
    page_open(html, "wishlist", Some(&cx.t("wishlist.title")), cx);
    if p.is_loading {
        loading(html, cx);
    } else if p.products.is_empty() {
        html.element("p", "empty", &cx.t("wishlist.empty"));
    } else {
        product_grid(html, style, &p.products, ViewMode::Grid, true, cx);
    }
    page_close(html);
}

// ---------------------------------------------------------------------------
// Cart, checkout and orders
// ---------------------------------------------------------------------------

pub fn cart_page(html: &mut Html, p: &CartPageProps, cx: &RenderContext<'_>) {
    page_open(html, "cart", Some(&cx.t("cart.title")), cx);
    if p.is_loading {
        loading(html, cx);
        page_close(html);
        return;
    }
    match &p.cart {
        Some(cart) if !cart.is_empty() => {
            cart_lines(html, cart, cx);
            html.open_with("form", "coupon", &[("data-action", "apply_coupon")]);
            html.input("coupon", "text", &cx.t("cart.coupon"), &p.coupon_code);
            html.action("apply", "apply_coupon", &[], &cx.t("cart.apply_coupon"))
                .close("form");
            alert(html, p.coupon_error.as_deref());
            cart_totals(html, cart, cx);
            html.action("checkout", "checkout", &[], &cx.t("cart.checkout"))
                .action(
                    "continue",
                    "continue_shopping",
                    &[],
                    &cx.t("common.continue_shopping"),
                );
        }
        _ => {
            html.element("p", "empty", &cx.t("cart.empty")).action(
                "continue",
                "continue_shopping",
                &[],
                &cx.t("common.continue_shopping"),
            );
        }
    }
    page_close(html);
}

pub fn checkout_page(html: &mut Html, p: &CheckoutPageProps, cx: &RenderContext<'_>) {
    page_open(html, "checkout", Some(&cx.t("checkout.title")), cx);
    let cart = match &p.cart {
        Some(cart) if !cart.is_empty() => cart,
        _ => {
            html.element("p", "empty", &cx.t("cart.empty"))
                .action("back", "back", &[], &cx.t("checkout.back_to_cart"));
            page_close(html);
            return;
        }
    };

    let address = p.shipping_address.clone().unwrap_or_default();
    address_form(html, &address, p, cx);

    html.open("fieldset", "payment")
        .element("legend", "", &cx.t("checkout.payment"));
    for method in &p.payment_methods {
        let pressed = if p.selected_payment_method.as_deref() == Some(method.as_str()) {
            "true"
        } else {
            "false"
        };
        html.action(
            "payment-method",
            "select_payment_method",
            &[("data-method", method.as_str()), ("aria-pressed", pressed)],
            method,
        );
    }
    if let Some(message) = p.error_for("payment_method") {
        html.element("span", "field-error", message);
    }
    html.close("fieldset");

    html.open("section", "summary");
    cart_totals(html, cart, cx);
    html.close("section");

    if p.is_submitting {
        html.action(
            "place-order",
            "place_order",
            &[("disabled", "disabled"), ("aria-busy", "true")],
            &cx.t("checkout.placing"),
        );
    } else {
        html.action("place-order", "place_order", &[], &cx.t("checkout.place_order"));
    }
    html.action("back", "back", &[], &cx.t("checkout.back_to_cart"));
    page_close(html);
}

pub fn checkout_success_page(
    html: &mut Html,
    p: &CheckoutSuccessPageProps,
    cx: &RenderContext<'_>,
) {
    page_open(html, "checkout-success", Some(&cx.t("checkout.success_title")), cx);
    if let Some(order) = &p.order {
        let number = cx.t("checkout.order_number").replace("%{number}", &order.number);
        html.element("p", "order-number", &number)
            .element("p", "order-total", &order.total.to_string())
            .action(
                "view-order",
                "select_order",
                &[("data-order-id", order.id.as_str())],
                &cx.t("checkout.view_order"),
            );
    }
    html.action(
        "continue",
        "continue_shopping",
        &[],
        &cx.t("common.continue_shopping"),
    );
    page_close(html);
}

pub fn orders_page(html: &mut Html, p: &OrdersPageProps, cx: &RenderContext<'_>) {
    page_open(html, "orders", Some(&cx.t("orders.title")), cx);
    if p.is_loading {
        loading(html, cx);
    } else if p.orders.is_empty() {
        html.element("p", "empty", &cx.t("orders.empty"));
    } else {
        html.open("table", "orders");
        for order in &p.orders {
            let status = cx.t(&format!("status.{}", order.status.as_str()));
            html.open_with("tr", "order-row", &[("data-order-id", order.id.as_str())])
                .element("td", "order-number", &order.number)
                .element("td", "order-date", &order.created_at)
                .element("td", "order-status", &status)
                .element("td", "order-total", &order.total.to_string());
            html.open("td", "order-actions")
                .action(
                    "view-order",
                    "select_order",
                    &[("data-order-id", order.id.as_str())],
                    &order.number,
                )
                .close("td")
                .close("tr");
        }
        html.close("table");
        pagination(html, &p.pagination, cx);
    }
    page_close(html);
}

pub fn order_detail_page(html: &mut Html, p: &OrderDetailPageProps, cx: &RenderContext<'_>) {
    page_open(html, "order-detail", None, cx);
    html.action("back", "back", &[], &cx.t("common.back"));
    if p.is_loading {
        loading(html, cx);
        page_close(html);
        return;
    }
    let Some(order) = &p.order else {
        html.element("p", "empty", &cx.t("orders.not_found"));
        page_close(html);
        return;
    };

    let id = order.id.as_str();
    html.element("h1", "page-title", &order.number);
    let status = cx.t(&format!("status.{}", order.status.as_str()));
    html.open_with("p", "order-status", &[("data-status", order.status.as_str())])
        .text(&status)
        .close("p");
    html.open("ul", "order-items");
    for item in &order.items {
        html.open_with("li", "order-item", &[("data-product-id", item.product_id.as_str())])
            .element("span", "item-name", &item.name)
            .element("span", "item-qty", &format!("× {}", item.quantity))
            .element("span", "item-price", &item.unit_price.to_string())
            .close("li");
    }
    html.close("ul");
    html.element(
        "p",
        "order-total",
        &format!("{}: {}", cx.t("orders.total"), order.total),
    );
    if let Some(address) = &order.shipping_address {
        html.open("address", "shipping")
            .element("span", "line", &address.full_name)
            .element("span", "line", &address.line1)
            .element(
                "span",
                "line",
                &format!("{} {}, {}", address.postal_code, address.city, address.country),
            )
            .close("address");
    }
    if order.status.is_cancellable() {
        html.action("cancel", "cancel_order", &[("data-order-id", id)], &cx.t("orders.cancel"));
    }
    html.action("reorder", "reorder", &[("data-order-id", id)], &cx.t("orders.reorder"));
    page_close(html);
}

// ---------------------------------------------------------------------------
// Account pages
// ---------------------------------------------------------------------------

pub fn profile_page(html: &mut Html, p: &ProfilePageProps, cx: &RenderContext<'_>) {
    page_open(html, "profile", Some(&cx.t("profile.title")), cx);
    let Some(user) = &p.user else {
        html.element("p", "empty", &cx.t("profile.sign_in_required"));
        page_close(html);
        return;
    };

    if let Some(avatar) = &user.avatar_url {
        html.image("avatar", avatar, &user.display_name);
    }
    html.open_with("form", "profile-form", &[("data-action", "save_profile")]);
    html.input("display_name", "text", &cx.t("profile.display_name"), &user.display_name)
        .input("email", "email", &cx.t("common.email"), &user.email);
    if p.is_saving {
        html.action(
            "save",
            "save_profile",
            &[("disabled", "disabled")],
            &cx.t("profile.saving"),
        );
    } else {
        html.action("save", "save_profile", &[], &cx.t("profile.save"));
    }
    html.close("form");
    html.action("orders", "open_orders", &[], &cx.t("profile.orders"))
        .action("logout", "logout", &[], &cx.t("header.logout"));
    page_close(html);
}

pub fn login_page(html: &mut Html, p: &LoginPageProps, cx: &RenderContext<'_>) {
    page_open(html, "login", Some(&cx.t("auth.login_title")), cx);
    alert(html, p.error.as_deref());
    html.open_with("form", "auth-form", &[("data-action", "submit_login")]);
    html.input("email", "email", &cx.t("common.email"), "")
        .input("password", "password", &cx.t("common.password"), "");
    let attrs: &[(&str, &str)] = if p.is_submitting {
        &[("disabled", "disabled")]
    } else {
        &[]
    };
    html.action("submit", "submit_login", attrs, &cx.t("auth.submit_login"))
        .close("form");
    html.action("link", "open_forgot_password", &[], &cx.t("auth.forgot_link"))
        .action("link", "open_register", &[], &cx.t("auth.register_link"));
    page_close(html);
}

pub fn register_page(html: &mut Html, p: &RegisterPageProps, cx: &RenderContext<'_>) {
    page_open(html, "register", Some(&cx.t("auth.register_title")), cx);
    alert(html, p.error.as_deref());
    html.open_with("form", "auth-form", &[("data-action", "submit_registration")]);
    html.input("display_name", "text", &cx.t("common.name"), "")
        .input("email", "email", &cx.t("common.email"), "")
        .input("password", "password", &cx.t("common.password"), "");
    let attrs: &[(&str, &str)] = if p.is_submitting {
        &[("disabled", "disabled")]
    } else {
        &[]
    };
    html.action(
        "submit",
        "submit_registration",
        attrs,
        &cx.t("auth.submit_register"),
    )
    .close("form");
    html.action("link", "open_login", &[], &cx.t("auth.login_link"));
    page_close(html);
}

pub fn forgot_password_page(html: &mut Html, p: &ForgotPasswordPageProps, cx: &RenderContext<'_>) {
    page_open(html, "forgot-password", Some(&cx.t("auth.forgot_title")), cx);
    if p.submitted {
        html.element("p", "notice", &cx.t("auth.reset_sent"));
    } else {
        alert(html, p.error.as_deref());
        html.open_with("form", "auth-form", &[("data-action", "request_password_reset")]);
        html.input("email", "email", &cx.t("common.email"), "");
        let attrs: &[(&str, &str)] = if p.is_submitting {
            &[("disabled", "disabled")]
        } else {
            &[]
        };
        html.action(
            "submit",
            "request_password_reset",
            attrs,
            &cx.t("auth.send_reset"),
        )
        .close("form");
    }
    html.action("link", "open_login", &[], &cx.t("auth.login_link"));
    page_close(html);
}

pub fn reset_password_page(html: &mut Html, p: &ResetPasswordPageProps, cx: &RenderContext<'_>) {
    page_open(html, "reset-password", Some(&cx.t("auth.reset_title")), cx);
    alert(html, p.error.as_deref());
    html.open_with("form", "auth-form", &[("data-action", "reset_password")])
        .open_with(
            "input",
            "",
            &[("name", "token"), ("type", "hidden"), ("value", p.token.as_str())],
        );
    html.input("new_password", "password", &cx.t("auth.new_password"), "");
    let attrs: &[(&str, &str)] = if p.is_submitting {
        &[("disabled", "disabled")]
    } else {
        &[]
    };
    html.action("submit", "reset_password", attrs, &cx.t("common.submit"))
        .close("form");
    html.action("link", "open_login", &[], &cx.t("auth.login_link"));
    page_close(html);
}

// ---------------------------------------------------------------------------
// Content pages
// ---------------------------------------------------------------------------

pub fn not_found_page(html: &mut Html, p: &NotFoundPageProps, cx: &RenderContext<'_>) {
    page_open(html, "not-found", Some(&cx.t("notfound.title")), cx);
    html.element("p", "message", &cx.t("notfound.message"));
    if !p.path.is_empty() {
        html.element("code", "path", &p.path);
    }
    html.action("home", "go_home", &[], &cx.t("notfound.go_home"));
    page_close(html);
}

pub fn about_page(html: &mut Html, p: &AboutPageProps, cx: &RenderContext<'_>) {
    let fallback = cx.t("about.title");
    page_open(html, "about", Some(p.title.as_deref().unwrap_or(&fallback)), cx);
    for paragraph in &p.paragraphs {
        html.element("p", "paragraph", paragraph);
    }
    html.open_with(
        "a",
        "contact-link",
        &[("href", "/contact"), ("data-action", "navigate"), ("data-path", "/contact")],
    )
    .text(&cx.t("footer.contact"))
    .close("a");
    page_close(html);
}

pub fn contact_page(html: &mut Html, p: &ContactPageProps, cx: &RenderContext<'_>) {
    page_open(html, "contact", Some(&cx.t("contact.title")), cx);
    if let Some(email) = &p.support_email {
        html.link("support-email", &format!("mailto:{}", email), email);
    }
    if p.submitted {
        html.element("p", "notice", &cx.t("contact.sent"));
        page_close(html);
        return;
    }
    alert(html, p.error.as_deref());
    html.open_with("form", "contact-form", &[("data-action", "submit_contact")]);
    html.input("name", "text", &cx.t("common.name"), "")
        .input("email", "email", &cx.t("common.email"), "");
    html.open("label", "field")
        .element("span", "field-label", &cx.t("contact.message"))
        .open_with("textarea", "input", &[("name", "message")])
        .close("textarea")
        .close("label");
    let attrs: &[(&str, &str)] = if p.is_submitting {
        &[("disabled", "disabled")]
    } else {
        &[]
    };
    html.action("submit", "submit_contact", attrs, &cx.t("contact.send"))
        .close("form");
    page_close(html);
}

pub fn faq_page(html: &mut Html, p: &FaqPageProps, cx: &RenderContext<'_>) {
    page_open(html, "faq", Some(&cx.t("faq.title")), cx);
    html.open("dl", "faq");
    for (index, entry) in p.entries.iter().enumerate() {
        let expanded = p.expanded == Some(index);
        let index = index.to_string();
        html.open("dt", "faq-question").action(
            "faq-toggle",
            "toggle_faq",
            &[
                ("data-index", index.as_str()),
                ("aria-expanded", if expanded { "true" } else { "false" }),
            ],
            &entry.question,
        );
        html.close("dt");
        if expanded {
            html.element("dd", "faq-answer", &entry.answer);
        }
    }
    html.close("dl");
    page_close(html);
}

pub fn legal_page(
    html: &mut Html,
    page: &str,
    title_key: &str,
    paragraphs: &[String],
    last_updated: Option<&str>,
    cx: &RenderContext<'_>,
) {
    page_open(html, page, Some(&cx.t(title_key)), cx);
    if let Some(date) = last_updated {
        html.element(
            "p",
            "last-updated",
            &cx.t("legal.last_updated").replace("%{date}", date),
        );
    }
    for paragraph in paragraphs {
        html.element("p", "paragraph", paragraph);
    }
    page_close(html);
}
