use common::model::category::CategoryGroup;
use common::model::product::ResultItem;
use common::requests::{TopByCategoryQuery, TopByCategoryResponse};
use log::debug;

use super::{ConsoleView, Panel};
use crate::api::{api, ApiRequest, RequestError, Transport};
use crate::format::{fmt_number, fmt_percent, PLACEHOLDER};
use crate::table::{non_empty, ResultTable};

pub const IN_FLIGHT: &str = "กำลังดึงต่อหมวด...";
pub const FAILURE_PREFIX: &str = "ล้มเหลว: ";

/// One category section of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub label: String,
    /// Number of ranked items, shown as a badge.
    pub count: usize,
    /// `None` when the category has no item passing the filters.
    pub top: Option<TopSummary>,
    pub table: ResultTable,
}

/// One-line summary of the best item in a category.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSummary {
    pub name: String,
    pub sold: String,
    pub commission: String,
    pub url: Option<String>,
}

impl CategoryCard {
    pub fn from_group(group: &CategoryGroup) -> Self {
        Self {
            label: group.category.label.clone(),
            count: group.items.len(),
            top: group.top.as_ref().map(TopSummary::from_item),
            table: ResultTable::from_items(&group.items),
        }
    }

    pub fn badge(&self) -> String {
        format!("{} รายการ", self.count)
    }
}

impl TopSummary {
    pub fn from_item(item: &ResultItem) -> Self {
        Self {
            name: non_empty(item.name.as_deref()).unwrap_or_else(|| PLACEHOLDER.to_string()),
            sold: fmt_number(item.historical_sold.as_ref()),
            commission: fmt_percent(item.commission_rate.as_ref()),
            url: non_empty(item.url.as_deref()),
        }
    }
}

/// Fetches the per-category ranking and renders one card per category, in
/// the order the backend returned them.
pub async fn run<T, V>(
    transport: &T,
    view: &V,
    query: TopByCategoryQuery,
) -> Result<TopByCategoryResponse, RequestError>
where
    T: Transport + ?Sized,
    V: ConsoleView + ?Sized,
{
    view.clear_output(Panel::Category);
    view.set_status(Panel::Category, IN_FLIGHT.to_string());

    let result = api::<TopByCategoryResponse, _>(transport, ApiRequest::post(query.path())).await;

    match &result {
        Ok(response) => {
            debug!("top-by-category: {} categories", response.categories.len());
            view.set_status(Panel::Category, String::new());
            view.render_categories(response.categories.iter().map(CategoryCard::from_group).collect());
        }
        Err(err) => view.set_status(Panel::Category, format!("{}{}", FAILURE_PREFIX, err)),
    }
    result
}
