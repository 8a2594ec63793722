use crate::model::product::ResultItem;
use crate::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// A marketplace category as configured on the backend.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Category {
    /// Display label, usually Thai.
    #[serde(default)]
    pub label: String,
    /// Search keywords; the backend queries with the first one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

/// Per-category ranking computed by `/api/top-by-category`.
///
/// `items` is already filtered and sorted by the backend. `top` is the first
/// item of that ranking, or `None` when nothing in the category passed the
/// filters.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CategoryGroup {
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub top: Option<ResultItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ResultItem>,
}
