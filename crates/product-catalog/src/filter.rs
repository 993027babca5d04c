//! Combinable product filters.
//!
//! A [`FilterState`] holds three independent criteria: selected owner, free
//! text search and a set of selected categories. [`apply_filters`] keeps the
//! products that satisfy every active criterion, in universe order. An unset
//! criterion accepts everything.

use std::collections::BTreeSet;

use crate::model::{CategoryId, EnrichedProduct, UserId};

/// The live filter criteria of a catalog view.
///
/// The default state has every criterion unset.
///
/// # Example
///
/// ```
/// use product_catalog::{CategoryId, FilterState, UserId};
///
/// let mut filters = FilterState::default();
/// filters.select_user(UserId::new(1));
/// filters.toggle_category(CategoryId::new(2));
/// filters.set_search_query("milk");
///
/// assert_eq!(filters.selected_user_id(), Some(UserId::new(1)));
/// assert!(filters.is_category_selected(CategoryId::new(2)));
/// assert!(!filters.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected_user_id: Option<UserId>,
    search_query: String,
    selected_category_ids: BTreeSet<CategoryId>,
}

impl FilterState {
    /// Returns the selected owner, if any.
    #[must_use]
    pub const fn selected_user_id(&self) -> Option<UserId> {
        self.selected_user_id
    }

    /// Returns the search text exactly as entered.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the selected categories in ascending id order.
    #[must_use]
    pub const fn selected_category_ids(&self) -> &BTreeSet<CategoryId> {
        &self.selected_category_ids
    }

    /// Returns `true` if `id` is among the selected categories.
    #[must_use]
    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.selected_category_ids.contains(&id)
    }

    /// Returns `true` when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_user_id.is_none()
            && self.search_query.is_empty()
            && self.selected_category_ids.is_empty()
    }

    /// Restricts results to products whose category is owned by `user_id`.
    ///
    /// Search text and selected categories stay in effect.
    pub const fn select_user(&mut self, user_id: UserId) {
        self.selected_user_id = Some(user_id);
    }

    /// Removes the owner restriction.
    pub const fn clear_user(&mut self) {
        self.selected_user_id = None;
    }

    /// Replaces the search text.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Clears the search text.
    pub fn clear_search_query(&mut self) {
        self.search_query.clear();
    }

    /// Selects `id` if it is not selected, otherwise deselects it.
    pub fn toggle_category(&mut self, id: CategoryId) {
        if !self.selected_category_ids.remove(&id) {
            self.selected_category_ids.insert(id);
        }
    }

    /// Deselects every category.
    pub fn reset_categories(&mut self) {
        self.selected_category_ids.clear();
    }

    /// Clears every criterion.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

/// Returns the products of `universe` that satisfy every active criterion.
///
/// The universe is never modified; the result is a new list in the same
/// relative order.
///
/// # Example
///
/// ```
/// use product_catalog::{Dataset, FilterState, apply_filters, enrich};
///
/// let dataset = Dataset::embedded().expect("embedded dataset");
/// let (_, universe) = enrich(&dataset);
///
/// let mut filters = FilterState::default();
/// filters.set_search_query("tv");
///
/// let visible = apply_filters(&universe, &filters);
/// assert!(visible.iter().all(|p| p.name == "TV"));
/// ```
#[must_use]
pub fn apply_filters(universe: &[EnrichedProduct], filters: &FilterState) -> Vec<EnrichedProduct> {
    let matcher = Matcher::new(filters);
    universe
        .iter()
        .filter(|product| matcher.matches(product))
        .cloned()
        .collect()
}

/// Returns `true` if `product` satisfies every active criterion.
#[must_use]
pub fn matches(product: &EnrichedProduct, filters: &FilterState) -> bool {
    Matcher::new(filters).matches(product)
}

/// Filter criteria with the search needle lower-cased once.
struct Matcher<'a> {
    filters: &'a FilterState,
    needle: Option<String>,
}

impl<'a> Matcher<'a> {
    fn new(filters: &'a FilterState) -> Self {
        let needle = if filters.search_query.is_empty() {
            None
        } else {
            Some(filters.search_query.to_lowercase())
        };
        Self { filters, needle }
    }

    fn matches(&self, product: &EnrichedProduct) -> bool {
        self.matches_user(product) && self.matches_category(product) && self.matches_search(product)
    }

    fn matches_user(&self, product: &EnrichedProduct) -> bool {
        self.filters
            .selected_user_id
            .is_none_or(|user_id| product.owner().is_some_and(|owner| owner.id == user_id))
    }

    fn matches_category(&self, product: &EnrichedProduct) -> bool {
        let selected = &self.filters.selected_category_ids;
        selected.is_empty() || selected.contains(&product.category_id)
    }

    fn matches_search(&self, product: &EnrichedProduct) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        [
            Some(product.name.as_str()),
            product.category_title(),
            product.owner_name(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::model::{EnrichedCategory, ProductId, Sex, User};

    fn roma() -> User {
        User {
            id: UserId::new(1),
            name: "Roma".to_owned(),
            sex: Sex::Male,
        }
    }

    fn anna() -> User {
        User {
            id: UserId::new(2),
            name: "Anna".to_owned(),
            sex: Sex::Female,
        }
    }

    fn category(id: u32, title: &str, user: Option<User>) -> EnrichedCategory {
        EnrichedCategory {
            id: CategoryId::new(id),
            title: title.to_owned(),
            icon: "*".to_owned(),
            owner_id: user.as_ref().map_or(UserId::new(99), |u| u.id),
            user,
        }
    }

    fn product(
        id: u32,
        name: &str,
        category_id: u32,
        category: Option<EnrichedCategory>,
    ) -> EnrichedProduct {
        EnrichedProduct {
            id: ProductId::new(id),
            name: name.to_owned(),
            category_id: CategoryId::new(category_id),
            category,
        }
    }

    #[fixture]
    fn universe() -> Vec<EnrichedProduct> {
        let grocery = category(1, "Grocery", Some(anna()));
        let drinks = category(2, "Drinks", Some(roma()));
        let electronics = category(3, "Electronics", Some(roma()));
        let furniture = category(4, "Furniture", None);
        vec![
            product(1, "Milk", 2, Some(drinks.clone())),
            product(2, "Bread", 1, Some(grocery)),
            product(3, "TV", 3, Some(electronics)),
            product(4, "Table", 4, Some(furniture.clone())),
            product(5, "Sofa", 4, Some(furniture)),
            product(6, "Gift card", 7, None),
            product(7, "Ice cream", 2, Some(drinks)),
        ]
    }

    fn names(products: &[EnrichedProduct]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[rstest]
    fn empty_state_returns_whole_universe(universe: Vec<EnrichedProduct>) {
        let visible = apply_filters(&universe, &FilterState::default());

        assert_eq!(visible, universe);
    }

    #[rstest]
    fn user_filter_keeps_only_owned_products(universe: Vec<EnrichedProduct>) {
        let mut filters = FilterState::default();
        filters.select_user(UserId::new(1));

        let visible = apply_filters(&universe, &filters);

        assert_eq!(names(&visible), vec!["Milk", "TV", "Ice cream"]);
        assert!(
            visible
                .iter()
                .all(|p| p.owner().map(|u| u.id) == Some(UserId::new(1)))
        );
    }

    #[rstest]
    fn user_filter_excludes_uncategorised_and_ownerless(universe: Vec<EnrichedProduct>) {
        let mut filters = FilterState::default();
        filters.select_user(UserId::new(99));

        let visible = apply_filters(&universe, &filters);

        assert!(visible.is_empty());
    }

    #[rstest]
    fn category_filter_is_a_union(universe: Vec<EnrichedProduct>) {
        let mut filters = FilterState::default();
        filters.toggle_category(CategoryId::new(1));
        filters.toggle_category(CategoryId::new(4));

        let visible = apply_filters(&universe, &filters);

        assert_eq!(names(&visible), vec!["Bread", "Table", "Sofa"]);
    }

    #[rstest]
    fn category_filter_matches_dangling_category_ids(universe: Vec<EnrichedProduct>) {
        let mut filters = FilterState::default();
        filters.toggle_category(CategoryId::new(7));

        let visible = apply_filters(&universe, &filters);

        assert_eq!(names(&visible), vec!["Gift card"]);
    }

    #[rstest]
    #[case::literal_substring("tv", vec!["TV"])]
    #[case::upper_case_query("MILK", vec!["Milk"])]
    #[case::category_title("drin", vec!["Milk", "Ice cream"])]
    #[case::owner_name("anna", vec!["Bread"])]
    #[case::inner_space("e c", vec!["Ice cream"])]
    #[case::no_match("zzz", vec![])]
    fn search_matches_any_field(
        universe: Vec<EnrichedProduct>,
        #[case] query: &str,
        #[case] expected: Vec<&str>,
    ) {
        let mut filters = FilterState::default();
        filters.set_search_query(query);

        let visible = apply_filters(&universe, &filters);

        assert_eq!(names(&visible), expected);
    }

    #[rstest]
    fn search_is_not_trimmed(universe: Vec<EnrichedProduct>) {
        let mut filters = FilterState::default();
        filters.set_search_query(" tv");

        assert!(apply_filters(&universe, &filters).is_empty());
    }

    #[rstest]
    fn criteria_combine_conjunctively(universe: Vec<EnrichedProduct>) {
        let mut filters = FilterState::default();
        filters.select_user(UserId::new(1));
        filters.toggle_category(CategoryId::new(2));
        filters.set_search_query("ice");

        let visible = apply_filters(&universe, &filters);

        assert_eq!(names(&visible), vec!["Ice cream"]);
    }

    #[rstest]
    fn single_product_check_agrees_with_apply_filters(universe: Vec<EnrichedProduct>) {
        let mut filters = FilterState::default();
        filters.select_user(UserId::new(1));
        filters.set_search_query("i");

        let by_predicate: Vec<_> = universe
            .iter()
            .filter(|product| matches(product, &filters))
            .cloned()
            .collect();

        assert_eq!(by_predicate, apply_filters(&universe, &filters));
        assert!(!matches(&universe[1], &filters));
    }

    #[rstest]
    fn applying_twice_is_idempotent(universe: Vec<EnrichedProduct>) {
        let mut filters = FilterState::default();
        filters.set_search_query("a");
        filters.toggle_category(CategoryId::new(4));

        let first = apply_filters(&universe, &filters);
        let second = apply_filters(&universe, &filters);

        assert_eq!(first, second);
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut filters = FilterState::default();
        filters.toggle_category(CategoryId::new(3));
        let before = filters.clone();

        filters.toggle_category(CategoryId::new(5));
        filters.toggle_category(CategoryId::new(5));

        assert_eq!(filters, before);
    }

    #[test]
    fn clearing_transitions_leave_other_criteria_alone() {
        let mut filters = FilterState::default();
        filters.select_user(UserId::new(1));
        filters.set_search_query("milk");
        filters.toggle_category(CategoryId::new(2));

        filters.clear_user();
        assert_eq!(filters.search_query(), "milk");
        assert!(filters.is_category_selected(CategoryId::new(2)));

        filters.clear_search_query();
        filters.reset_categories();
        assert!(filters.is_empty());
    }

    #[test]
    fn reset_all_clears_every_criterion() {
        let mut filters = FilterState::default();
        filters.select_user(UserId::new(2));
        filters.set_search_query("x");
        filters.toggle_category(CategoryId::new(1));

        filters.reset_all();

        assert_eq!(filters, FilterState::default());
    }
}
