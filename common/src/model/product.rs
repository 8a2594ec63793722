use serde::{Deserialize, Serialize};

/// One product record as returned by the backend's search and category
/// endpoints.
///
/// The backend builds these from the marketplace search API and enriches them
/// with a commission rate and a score. Every field is optional: the console
/// renders a missing value as a placeholder and never treats absence as an
/// error. Items are display-only; the console never mutates or stores them.
///
/// Only the displayed fields are decoded. The backend also sends identifiers
/// and shop metadata (`itemid`, `shopid`, `catid`, ...); those are skipped so
/// an unexpected value there cannot fail a whole response.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ResultItem {
    /// Product title.
    #[serde(default)]
    pub name: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Unit price in baht.
    #[serde(default)]
    pub price: Option<Metric>,
    /// Cumulative units sold.
    #[serde(default)]
    pub historical_sold: Option<Metric>,
    /// Average rating between 0 and 5.
    #[serde(default)]
    pub rating_star: Option<Metric>,
    /// Commission percentage resolved by the backend (manual CSV or affiliate API).
    #[serde(default)]
    pub commission_rate: Option<Metric>,
    /// Ranking score, `commission_rate * historical_sold` on the backend.
    #[serde(default)]
    pub score: Option<Metric>,
    /// Product page URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// A numeric value the backend does not always send as a number.
///
/// Prices, counts, ratings and commissions come from third-party sources and
/// occasionally arrive as strings or floats where an integer was expected.
/// Decoding keeps whatever was sent so the renderer can fall back to the raw
/// value instead of failing the whole response.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Metric {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Metric {
    /// Returns the value when it was sent as a JSON number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Metric::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Metric::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_item_with_every_field_missing() {
        let item: ResultItem = serde_json::from_value(json!({})).unwrap();
        assert_eq!(item, ResultItem::default());
    }

    #[test]
    fn keeps_non_numeric_metrics() {
        let item: ResultItem = serde_json::from_value(json!({
            "name": "เสื้อยืด",
            "rating_star": "4.8",
            "commission_rate": 7.5,
            "historical_sold": 1200,
            "unknown_field": true
        }))
        .unwrap();

        assert_eq!(item.rating_star, Some(Metric::Text("4.8".to_string())));
        assert_eq!(item.commission_rate.as_ref().and_then(Metric::as_f64), Some(7.5));
        assert_eq!(item.historical_sold, Some(Metric::Number(1200.0)));
    }

    #[test]
    fn unexpected_types_do_not_fail_decoding() {
        let item: ResultItem = serde_json::from_value(json!({
            "name": "a",
            "itemid": "123",
            "shopid": -1,
            "ctime": "yesterday",
            "historical_sold": 1200.0,
            "score": "12",
            "price": { "min": 10 }
        }))
        .unwrap();

        assert_eq!(item.name.as_deref(), Some("a"));
        assert_eq!(item.historical_sold, Some(Metric::Number(1200.0)));
        assert_eq!(item.score, Some(Metric::Text("12".to_string())));
        assert_eq!(item.price, Some(Metric::Other(json!({ "min": 10 }))));
    }

    #[test]
    fn null_metric_is_absent() {
        let item: ResultItem =
            serde_json::from_value(json!({ "commission_rate": null, "score": null })).unwrap();
        assert!(item.commission_rate.is_none());
        assert!(item.score.is_none());
    }
}
