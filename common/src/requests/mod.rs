use crate::model::category::CategoryGroup;
use crate::model::product::ResultItem;
use crate::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

pub const SEARCH_PATH: &str = "/api/search";
pub const TOP_BY_CATEGORY_PATH: &str = "/api/top-by-category";
pub const COMMISSION_UPLOAD_PATH: &str = "/api/commission/upload";
pub const CONFIG_PATH: &str = "/api/config";

/// Multipart field name the upload endpoint reads the CSV from.
pub const UPLOAD_FIELD: &str = "file";

/// Ordering applied by the backend before returning results.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest cumulative sales first.
    #[default]
    Sold,
    /// Highest `commission_rate * historical_sold` first.
    Score,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Sold => "sold",
            SortKey::Score => "score",
        }
    }
}

/// JSON body of `POST /api/search`.
///
/// `sort` carries the form value as-is; the backend knows the [`SortKey`]
/// values and decides what to do with anything else.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub keyword: String,
    pub limit: i64,
    pub min_rating: f64,
    pub min_sold: i64,
    pub sort: String,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            limit: 120,
            min_rating: 4.5,
            min_sold: 100,
            sort: SortKey::Sold.as_str().to_string(),
        }
    }
}

/// Response of `POST /api/search`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ResultItem>,
}

/// Query parameters of `POST /api/top-by-category`.
///
/// The endpoint takes its inputs from the query string and expects an empty
/// body.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TopByCategoryQuery {
    pub limit_per_cat: i64,
    pub min_rating: f64,
    pub min_sold: i64,
    pub use_score: bool,
}

impl TopByCategoryQuery {
    /// Renders the parameters in the order the backend documents them.
    pub fn to_query_string(&self) -> String {
        format!(
            "limit_per_cat={}&min_rating={}&min_sold={}&use_score={}",
            self.limit_per_cat, self.min_rating, self.min_sold, self.use_score
        )
    }

    /// Full request path including the query string.
    pub fn path(&self) -> String {
        format!("{}?{}", TOP_BY_CATEGORY_PATH, self.to_query_string())
    }
}

impl Default for TopByCategoryQuery {
    fn default() -> Self {
        Self {
            limit_per_cat: 20,
            min_rating: 4.5,
            min_sold: 100,
            use_score: true,
        }
    }
}

/// Response of `POST /api/top-by-category`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct TopByCategoryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<CategoryGroup>,
}

/// Response of `POST /api/commission/upload`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct UploadResponse {
    #[serde(default)]
    pub ok: bool,
    /// Number of CSV rows the backend accepted.
    #[serde(default)]
    pub ingested: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_request_body_shape() {
        let request = SearchRequest {
            keyword: "หูฟัง".to_string(),
            sort: SortKey::Score.as_str().to_string(),
            ..SearchRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "keyword": "หูฟัง", "limit": 120, "min_rating": 4.5, "min_sold": 100, "sort": "score" })
        );
    }

    #[test]
    fn category_query_string() {
        let query = TopByCategoryQuery {
            limit_per_cat: 5,
            min_rating: 4.0,
            min_sold: 10,
            use_score: false,
        };
        assert_eq!(
            query.path(),
            "/api/top-by-category?limit_per_cat=5&min_rating=4&min_sold=10&use_score=false"
        );
        assert_eq!(
            TopByCategoryQuery::default().to_query_string(),
            "limit_per_cat=20&min_rating=4.5&min_sold=100&use_score=true"
        );
    }

    #[test]
    fn unknown_sort_value_is_sent_unchanged() {
        assert_eq!(SearchRequest::default().sort, "sold");

        let request = SearchRequest {
            sort: "price".to_string(),
            ..SearchRequest::default()
        };
        assert_eq!(serde_json::to_value(&request).unwrap()["sort"], json!("price"));
    }

    #[test]
    fn search_response_with_null_items() {
        let response: SearchResponse =
            serde_json::from_value(json!({ "count": 0, "items": null })).unwrap();
        assert!(response.items.is_empty());
    }
}
