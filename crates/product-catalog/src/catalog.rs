//! Catalog session: the enriched universe plus the live filter state.
//!
//! The universe is built once in [`Catalog::new`]. Every [`FilterEvent`]
//! updates the filter state and recomputes the visible list from scratch.

use tracing::debug;

use crate::dataset::Dataset;
use crate::enrichment::enrich;
use crate::filter::{FilterState, apply_filters};
use crate::model::{CategoryId, EnrichedCategory, EnrichedProduct, User, UserId};
use crate::sort::{SortOrder, sort_products};
use crate::view::CatalogView;

/// An interaction emitted by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Show only products owned by this user.
    SelectUser(UserId),
    /// Show products of every owner.
    ClearUser,
    /// Replace the search text.
    SetSearchQuery(String),
    /// Clear the search text.
    ClearSearchQuery,
    /// Select or deselect a category.
    ToggleCategory(CategoryId),
    /// Deselect every category.
    ResetCategories,
    /// Clear every filter criterion. The sort order is kept.
    ResetAll,
    /// Sort the visible products.
    SortBy(SortOrder),
    /// Return to universe order.
    ClearSort,
}

/// A browsable catalog.
///
/// # Example
///
/// ```
/// use product_catalog::{Catalog, Dataset, FilterEvent, UserId};
///
/// let dataset = Dataset::embedded().expect("embedded dataset");
/// let mut catalog = Catalog::new(&dataset);
///
/// catalog.apply(FilterEvent::SelectUser(UserId::new(1)));
///
/// assert!(
///     catalog
///         .visible()
///         .iter()
///         .all(|p| p.owner().map(|u| u.id) == Some(UserId::new(1)))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<EnrichedCategory>,
    universe: Vec<EnrichedProduct>,
    filters: FilterState,
    sort: Option<SortOrder>,
    visible: Vec<EnrichedProduct>,
}

impl Catalog {
    /// Enriches `dataset` and starts with no active filter.
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        let (categories, universe) = enrich(dataset);
        let visible = universe.clone();
        Self {
            users: dataset.users().to_vec(),
            categories,
            universe,
            filters: FilterState::default(),
            sort: None,
            visible,
        }
    }

    /// Applies one interaction and recomputes the visible products.
    pub fn apply(&mut self, event: FilterEvent) -> &[EnrichedProduct] {
        match &event {
            FilterEvent::SelectUser(user_id) => self.filters.select_user(*user_id),
            FilterEvent::ClearUser => self.filters.clear_user(),
            FilterEvent::SetSearchQuery(query) => self.filters.set_search_query(query.as_str()),
            FilterEvent::ClearSearchQuery => self.filters.clear_search_query(),
            FilterEvent::ToggleCategory(id) => self.filters.toggle_category(*id),
            FilterEvent::ResetCategories => self.filters.reset_categories(),
            FilterEvent::ResetAll => self.filters.reset_all(),
            FilterEvent::SortBy(order) => self.sort = Some(*order),
            FilterEvent::ClearSort => self.sort = None,
        }
        self.recompute();
        debug!(
            ?event,
            visible = self.visible.len(),
            universe = self.universe.len(),
            "catalog filters applied"
        );
        &self.visible
    }

    /// Applies each interaction in order.
    pub fn apply_all<I>(&mut self, events: I) -> &[EnrichedProduct]
    where
        I: IntoIterator<Item = FilterEvent>,
    {
        for event in events {
            self.apply(event);
        }
        &self.visible
    }

    fn recompute(&mut self) {
        let mut visible = apply_filters(&self.universe, &self.filters);
        if let Some(order) = self.sort {
            sort_products(&mut visible, order);
        }
        self.visible = visible;
    }

    /// Returns the products that pass the current filters, sorted if a sort
    /// order is set.
    #[must_use]
    pub fn visible(&self) -> &[EnrichedProduct] {
        &self.visible
    }

    /// Returns every enriched product in dataset order.
    #[must_use]
    pub fn universe(&self) -> &[EnrichedProduct] {
        &self.universe
    }

    /// Returns the current filter state.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Returns the current sort order, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Returns the users offered as owner filters.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the enriched categories offered as category filters.
    #[must_use]
    pub fn categories(&self) -> &[EnrichedCategory] {
        &self.categories
    }

    /// Builds the view model for the current state.
    #[must_use]
    pub fn view(&self) -> CatalogView {
        CatalogView::build(
            &self.visible,
            &self.filters,
            self.sort,
            &self.users,
            &self.categories,
        )
    }
}
