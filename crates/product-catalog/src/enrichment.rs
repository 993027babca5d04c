//! One-time join of the flat collections into denormalized records.
//!
//! Both stages are pure and order-preserving: output order follows the
//! driving collection. Lookups go through a hash index in which the first
//! record with a given id wins, matching a linear `find`.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::info;

use crate::dataset::Dataset;
use crate::model::{Category, EnrichedCategory, EnrichedProduct, Product, User};

/// Attaches each category's owning user.
///
/// Categories whose `owner_id` matches no user get `user: None`.
///
/// # Example
///
/// ```
/// use product_catalog::{Category, CategoryId, Sex, User, UserId, enrich_categories};
///
/// let users = vec![User { id: UserId::new(1), name: "Roma".to_owned(), sex: Sex::Male }];
/// let categories = vec![Category {
///     id: CategoryId::new(2),
///     title: "Drinks".to_owned(),
///     icon: "🍺".to_owned(),
///     owner_id: UserId::new(1),
/// }];
///
/// let enriched = enrich_categories(&categories, &users);
/// assert_eq!(enriched[0].user.as_ref().map(|u| u.name.as_str()), Some("Roma"));
/// ```
#[must_use]
pub fn enrich_categories(categories: &[Category], users: &[User]) -> Vec<EnrichedCategory> {
    let users_by_id = index_by(users, |user| user.id);

    categories
        .iter()
        .map(|category| {
            let user = users_by_id.get(&category.owner_id).map(|user| (*user).clone());
            EnrichedCategory::new(category, user)
        })
        .collect()
}

/// Attaches each product's enriched category.
///
/// Products whose `category_id` matches no category get `category: None`.
#[must_use]
pub fn enrich_products(
    products: &[Product],
    categories: &[EnrichedCategory],
) -> Vec<EnrichedProduct> {
    let categories_by_id = index_by(categories, |category| category.id);

    products
        .iter()
        .map(|product| {
            let category = categories_by_id
                .get(&product.category_id)
                .map(|category| (*category).clone());
            EnrichedProduct::new(product, category)
        })
        .collect()
}

/// Runs both enrichment stages over a dataset.
///
/// Returns the enriched categories alongside the universe of enriched
/// products.
#[must_use]
pub fn enrich(dataset: &Dataset) -> (Vec<EnrichedCategory>, Vec<EnrichedProduct>) {
    let categories = enrich_categories(dataset.categories(), dataset.users());
    let universe = enrich_products(dataset.products(), &categories);

    info!(
        products = universe.len(),
        uncategorised = universe.iter().filter(|p| p.category.is_none()).count(),
        ownerless = universe.iter().filter(|p| p.owner().is_none()).count(),
        "catalog enriched"
    );

    (categories, universe)
}

fn index_by<T, K, F>(items: &[T], key: F) -> HashMap<K, &T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(key(item)).or_insert(item);
    }
    index
}
