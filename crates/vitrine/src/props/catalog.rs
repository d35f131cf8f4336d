//! Props of the browsing pages.

use vitrine_core::models::{Category, Pagination, Product, SortOption, ViewMode};

use super::{AddToCart, Callback, Dispatch, ThemeAction};

#[derive(Debug, Clone, Default)]
pub struct HomePageProps {
    pub featured_products: Vec<Product>,
    pub new_arrivals: Vec<Product>,
    pub categories: Vec<Category>,
    pub is_loading: bool,
    pub on_product_click: Callback<String>,
    pub on_add_to_cart: Callback<AddToCart>,
    pub on_category_click: Callback<String>,
    pub on_shop_now: Callback<()>,
}

impl Dispatch for HomePageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::SelectProduct(id) => self.on_product_click.call(id),
            ThemeAction::AddToCart(item) => self.on_add_to_cart.call(item),
            ThemeAction::SelectCategory(Some(id)) => self.on_category_click.call(id),
            ThemeAction::ContinueShopping => self.on_shop_now.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductsPageProps {
    pub products: Vec<Product>,
    pub is_loading: bool,
    pub pagination: Pagination,
    pub sort: SortOption,
    pub view_mode: ViewMode,
    pub categories: Vec<Category>,
    pub selected_category: Option<String>,
    pub on_sort_change: Callback<SortOption>,
    pub on_view_mode_change: Callback<ViewMode>,
    pub on_page_change: Callback<u32>,
    pub on_category_change: Callback<Option<String>>,
    pub on_add_to_cart: Callback<AddToCart>,
    pub on_product_click: Callback<String>,
}

impl Dispatch for ProductsPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::ChangeSort(sort) => self.on_sort_change.call(sort),
            ThemeAction::ChangeViewMode(mode) => self.on_view_mode_change.call(mode),
            ThemeAction::ChangePage(page) => self.on_page_change.call(page),
            ThemeAction::SelectCategory(category) => self.on_category_change.call(category),
            ThemeAction::AddToCart(item) => self.on_add_to_cart.call(item),
            ThemeAction::SelectProduct(id) => self.on_product_click.call(id),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ProductDetailPageProps {
    /// `None` while loading or when the product does not exist.
    pub product: Option<Product>,
    pub related_products: Vec<Product>,
    pub is_loading: bool,
    pub quantity: u32,
    pub is_in_wishlist: bool,
    pub on_quantity_change: Callback<u32>,
    pub on_add_to_cart: Callback<AddToCart>,
    pub on_toggle_wishlist: Callback<String>,
    pub on_product_click: Callback<String>,
    pub on_back: Callback<()>,
}

impl Default for ProductDetailPageProps {
    fn default() -> Self {
        Self {
            product: None,
            related_products: Vec::new(),
            is_loading: false,
            quantity: 1,
            is_in_wishlist: false,
            on_quantity_change: Callback::noop(),
            on_add_to_cart: Callback::noop(),
            on_toggle_wishlist: Callback::noop(),
            on_product_click: Callback::noop(),
            on_back: Callback::noop(),
        }
    }
}

impl Dispatch for ProductDetailPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::ChangeQuantity(quantity) => self.on_quantity_change.call(quantity),
            ThemeAction::AddToCart(item) => self.on_add_to_cart.call(item),
            ThemeAction::ToggleWishlist(id) => self.on_toggle_wishlist.call(id),
            ThemeAction::SelectProduct(id) => self.on_product_click.call(id),
            ThemeAction::Back => self.on_back.call(()),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPageProps {
    pub category: Option<Category>,
    pub products: Vec<Product>,
    pub is_loading: bool,
    pub pagination: Pagination,
    pub sort: SortOption,
    pub on_sort_change: Callback<SortOption>,
    pub on_page_change: Callback<u32>,
    pub on_product_click: Callback<String>,
    pub on_add_to_cart: Callback<AddToCart>,
}

impl Dispatch for CategoryPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::ChangeSort(sort) => self.on_sort_change.call(sort),
            ThemeAction::ChangePage(page) => self.on_page_change.call(page),
            ThemeAction::SelectProduct(id) => self.on_product_click.call(id),
            ThemeAction::AddToCart(item) => self.on_add_to_cart.call(item),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchPageProps {
    pub query: String,
    pub results: Vec<Product>,
    pub is_loading: bool,
    pub pagination: Pagination,
    pub on_search: Callback<String>,
    pub on_page_change: Callback<u32>,
    pub on_product_click: Callback<String>,
    pub on_add_to_cart: Callback<AddToCart>,
}

impl Dispatch for SearchPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::Search(query) => self.on_search.call(query),
            ThemeAction::ChangePage(page) => self.on_page_change.call(page),
            ThemeAction::SelectProduct(id) => self.on_product_click.call(id),
            ThemeAction::AddToCart(item) => self.on_add_to_cart.call(item),
            other => return Err(other),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct WishlistPageProps {
    pub products: Vec<Product>,
    pub is_loading: bool,
    pub on_remove: Callback<String>,
    pub on_add_to_cart: Callback<AddToCart>,
    pub on_product_click: Callback<String>,
}

impl Dispatch for WishlistPageProps {
    fn dispatch(&self, action: ThemeAction) -> Result<(), ThemeAction> {
        match action {
            ThemeAction::ToggleWishlist(id) => self.on_remove.call(id),
            ThemeAction::AddToCart(item) => self.on_add_to_cart.call(item),
            ThemeAction::SelectProduct(id) => self.on_product_click.call(id),
            other => return Err(other),
        }
        Ok(())
    }
}
