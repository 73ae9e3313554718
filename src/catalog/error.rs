//! Catalog validation errors

use thiserror::Error;

/// Reasons a set of categories cannot form a catalog
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Category #{index} has an empty title")]
    EmptyCategoryTitle { index: usize },

    #[error("Group #{index} in category {category:?} has an empty title")]
    EmptyGroupTitle { category: String, index: usize },

    #[error("Link #{index} in {category:?} / {group:?} has an empty title")]
    EmptyLinkTitle {
        category: String,
        group: String,
        index: usize,
    },

    #[error("Duplicate category title: {0:?}")]
    DuplicateCategory(String),

    #[error("Invalid color {color:?} for category {category:?}")]
    InvalidColor { category: String, color: String },
}
