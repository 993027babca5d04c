//! Product catalog browsing over a fixed in-memory dataset.
//!
//! The crate joins three flat collections (users, categories, products)
//! into enriched product records once, then narrows that universe with
//! combinable filters every time the filter state changes.
//!
//! # Overview
//!
//! - [`Dataset`] loads the collections from a versioned JSON document or
//!   from the embedded default dataset
//! - [`enrich_categories`] and [`enrich_products`] resolve owners and
//!   categories; missing relationships become `None`
//! - [`apply_filters`] keeps products matching every active criterion of a
//!   [`FilterState`]
//! - [`sort_products`] optionally orders the visible products by a column
//! - [`Catalog`] ties these together and produces a [`CatalogView`] for
//!   renderers such as [`render_table`]
//!
//! # Example
//!
//! ```
//! use product_catalog::{Catalog, CategoryId, Dataset, FilterEvent};
//!
//! let dataset = Dataset::embedded().expect("embedded dataset");
//! let mut catalog = Catalog::new(&dataset);
//!
//! catalog.apply(FilterEvent::ToggleCategory(CategoryId::new(2)));
//! catalog.apply(FilterEvent::SetSearchQuery("milk".to_owned()));
//!
//! let names: Vec<_> = catalog.visible().iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, vec!["Milk"]);
//! ```

pub mod browse_cli;
mod catalog;
mod config;
mod dataset;
mod enrichment;
mod error;
mod filter;
mod model;
mod render;
mod sort;
mod view;

pub use catalog::{Catalog, FilterEvent};
pub use config::CatalogSettings;
pub use dataset::Dataset;
pub use enrichment::{enrich, enrich_categories, enrich_products};
pub use error::{DatasetError, SortParseError};
pub use filter::{FilterState, apply_filters, matches};
pub use model::{
    Category, CategoryId, EnrichedCategory, EnrichedProduct, Product, ProductId, Sex, User,
    UserId,
};
pub use render::render_table;
pub use sort::{SortColumn, SortDirection, SortOrder, sort_products};
pub use view::{
    ALL_USERS_LABEL, CatalogView, CategoryChip, NO_MATCHING_MESSAGE, ProductRow, SearchBox,
    UserHighlight, UserTab,
};
