//! Catalog records and their enriched views.
//!
//! Raw records ([`User`], [`Category`], [`Product`]) mirror the dataset
//! document. Enriched records carry the resolved relationships. A missing
//! relationship is `None`, never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw integer identifier.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw integer identifier.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of a [`User`].
    UserId
);
record_id!(
    /// Identifier of a [`Category`].
    CategoryId
);
record_id!(
    /// Identifier of a [`Product`].
    ProductId
);

/// Sex recorded for a user, serialized as `"m"` or `"f"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialized as `"m"`.
    #[serde(rename = "m")]
    Male,
    /// Serialized as `"f"`.
    #[serde(rename = "f")]
    Female,
}

/// A catalog user who may own categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name shown in the owner column and the user tabs.
    pub name: String,
    /// Sex used to pick the owner highlight.
    pub sex: Sex,
}

/// A product category as stored in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Human readable title.
    pub title: String,
    /// Short icon, usually a single emoji.
    pub icon: String,
    /// Identifier of the owning user. May not match any user.
    pub owner_id: UserId,
}

/// A product as stored in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Identifier of the product's category. May not match any category.
    pub category_id: CategoryId,
}

/// A category joined with its owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCategory {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Human readable title.
    pub title: String,
    /// Short icon, usually a single emoji.
    pub icon: String,
    /// Identifier of the owning user as stored in the dataset.
    pub owner_id: UserId,
    /// The owning user, or `None` when `owner_id` matched no user.
    pub user: Option<User>,
}

impl EnrichedCategory {
    /// Joins a raw category with its resolved owner.
    #[must_use]
    pub fn new(category: &Category, user: Option<User>) -> Self {
        Self {
            id: category.id,
            title: category.title.clone(),
            icon: category.icon.clone(),
            owner_id: category.owner_id,
            user,
        }
    }
}

/// A product joined with its enriched category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Identifier of the category as stored in the dataset.
    pub category_id: CategoryId,
    /// The category, or `None` when `category_id` matched no category.
    pub category: Option<EnrichedCategory>,
}

impl EnrichedProduct {
    /// Joins a raw product with its resolved category.
    #[must_use]
    pub fn new(product: &Product, category: Option<EnrichedCategory>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category_id: product.category_id,
            category,
        }
    }

    /// Returns the owner of the product's category, if both resolved.
    #[must_use]
    pub fn owner(&self) -> Option<&User> {
        self.category.as_ref().and_then(|category| category.user.as_ref())
    }

    /// Returns the category title, if the category resolved.
    #[must_use]
    pub fn category_title(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|category| category.title.as_str())
    }

    /// Returns the owner's name, if the category and its owner resolved.
    #[must_use]
    pub fn owner_name(&self) -> Option<&str> {
        self.owner().map(|user| user.name.as_str())
    }
}
