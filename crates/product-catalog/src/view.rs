//! View model handed to renderers.
//!
//! The view carries everything a renderer needs: the visible rows and the
//! state of each filter control. Renderers stay free of filtering logic.

use crate::filter::FilterState;
use crate::model::{CategoryId, EnrichedCategory, EnrichedProduct, ProductId, Sex, User, UserId};
use crate::sort::SortOrder;

/// Message shown when no product passes the filters.
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Label of the tab that clears the owner filter.
pub const ALL_USERS_LABEL: &str = "All";

/// Highlight applied to the owner column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserHighlight {
    /// Owner is male.
    Male,
    /// Owner is female.
    Female,
    /// No owner resolved.
    None,
}

impl From<Option<&User>> for UserHighlight {
    fn from(user: Option<&User>) -> Self {
        match user.map(|u| u.sex) {
            Some(Sex::Male) => Self::Male,
            Some(Sex::Female) => Self::Female,
            None => Self::None,
        }
    }
}

/// One owner tab; `user_id` is `None` for the "All" tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTab {
    /// User the tab selects, or `None` for "All".
    pub user_id: Option<UserId>,
    /// Tab label.
    pub label: String,
    /// Whether the tab reflects the current owner filter.
    pub is_active: bool,
}

/// State of the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    /// Current search text.
    pub query: String,
    /// Whether the clear button is offered.
    pub show_clear: bool,
}

/// One category toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    /// Category the chip toggles.
    pub category_id: CategoryId,
    /// Category title.
    pub title: String,
    /// Whether the category is selected.
    pub is_selected: bool,
}

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// Product id.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// `"{icon} - {title}"`, or empty when the category is absent.
    pub category_label: String,
    /// Owner name, or empty when the owner is absent.
    pub user_name: String,
    /// Highlight derived from the owner's sex.
    pub user_highlight: UserHighlight,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        let category_label = product
            .category
            .as_ref()
            .map(|category| format!("{} - {}", category.icon, category.title))
            .unwrap_or_default();
        Self {
            id: product.id,
            name: product.name.clone(),
            category_label,
            user_name: product.owner_name().unwrap_or_default().to_owned(),
            user_highlight: UserHighlight::from(product.owner()),
        }
    }
}

/// Everything needed to render a catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    /// "All" followed by one tab per user.
    pub user_tabs: Vec<UserTab>,
    /// Search box state.
    pub search: SearchBox,
    /// One chip per category, in dataset order.
    pub category_chips: Vec<CategoryChip>,
    /// Whether the reset button is drawn outlined.
    ///
    /// Tracks category selection only; a selected user or search text does
    /// not change the outline even though reset clears them too.
    pub reset_all_outlined: bool,
    /// Active sort order, if any.
    pub sort: Option<SortOrder>,
    /// Visible products.
    pub rows: Vec<ProductRow>,
    /// Whether [`NO_MATCHING_MESSAGE`] should be shown.
    pub no_matching: bool,
}

impl CatalogView {
    /// Builds a view from the visible products and the filter state.
    #[must_use]
    pub fn build(
        visible: &[EnrichedProduct],
        filters: &FilterState,
        sort: Option<SortOrder>,
        users: &[User],
        categories: &[EnrichedCategory],
    ) -> Self {
        let selected_user = filters.selected_user_id();
        let user_tabs = std::iter::once(UserTab {
            user_id: None,
            label: ALL_USERS_LABEL.to_owned(),
            is_active: selected_user.is_none(),
        })
        .chain(users.iter().map(|user| UserTab {
            user_id: Some(user.id),
            label: user.name.clone(),
            is_active: selected_user == Some(user.id),
        }))
        .collect();

        let category_chips = categories
            .iter()
            .map(|category| CategoryChip {
                category_id: category.id,
                title: category.title.clone(),
                is_selected: filters.is_category_selected(category.id),
            })
            .collect();

        let rows: Vec<ProductRow> = visible.iter().map(ProductRow::from).collect();

        Self {
            user_tabs,
            search: SearchBox {
                query: filters.search_query().to_owned(),
                show_clear: !filters.search_query().is_empty(),
            },
            category_chips,
            reset_all_outlined: filters.selected_category_ids().is_empty(),
            sort,
            no_matching: rows.is_empty(),
            rows,
        }
    }
}
