use common::requests::{SearchRequest, SearchResponse, SEARCH_PATH};
use log::debug;

use super::{ConsoleView, Panel};
use crate::api::{api, ApiRequest, RequestError, Transport};
use crate::table::ResultTable;

pub const IN_FLIGHT: &str = "กำลังดึงข้อมูล...";
pub const FAILURE_PREFIX: &str = "ดึงข้อมูลล้มเหลว: ";

pub fn found_status(count: u64) -> String {
    format!("พบ {} รายการ", count)
}

/// Runs a keyword search and renders the result table.
pub async fn run<T, V>(
    transport: &T,
    view: &V,
    request: SearchRequest,
) -> Result<SearchResponse, RequestError>
where
    T: Transport + ?Sized,
    V: ConsoleView + ?Sized,
{
    view.clear_output(Panel::Search);
    view.set_status(Panel::Search, IN_FLIGHT.to_string());

    let result = match ApiRequest::post_json(SEARCH_PATH, &request) {
        Ok(call) => api::<SearchResponse, _>(transport, call).await,
        Err(err) => Err(err),
    };

    match &result {
        Ok(response) => {
            debug!("search {:?}: {} items", request.keyword, response.items.len());
            view.set_status(Panel::Search, found_status(response.count));
            view.render_table(ResultTable::from_items(&response.items));
        }
        Err(err) => view.set_status(Panel::Search, format!("{}{}", FAILURE_PREFIX, err)),
    }
    result
}
