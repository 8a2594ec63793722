//! DOM access for the console form.
//!
//! - Reading inputs into request payloads when a panel's button is pressed.
//! - Writing defaults and loaded configuration back into the inputs.
//! - Reading the selected CSV file into memory for the upload flow.
//!
//! Numeric inputs are coerced leniently and never rejected here: the backend
//! validates what it receives.

use async_trait::async_trait;
use common::model::config::AffiliateSettings;
use common::requests::{SearchRequest, TopByCategoryQuery};
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::NodeRef;

use super::state::AdminConsole;
use crate::api::{RequestError, UploadFile};
use crate::flows::upload::UploadSource;

/// Empty or unparsable input counts as zero.
pub fn to_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Like [`to_number`], truncated toward zero.
pub fn to_integer(raw: &str) -> i64 {
    to_number(raw).trunc() as i64
}

pub fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

pub fn is_checked(node: &NodeRef) -> bool {
    node.cast::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}

fn set_input_value(node: &NodeRef, value: &str) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.set_value(value);
    }
}

fn set_checked(node: &NodeRef, checked: bool) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.set_checked(checked);
    }
}

pub fn collect_search_request(component: &AdminConsole) -> SearchRequest {
    let inputs = &component.search;
    SearchRequest {
        keyword: input_value(&inputs.keyword).trim().to_string(),
        limit: to_integer(&input_value(&inputs.limit)),
        min_rating: to_number(&input_value(&inputs.min_rating)),
        min_sold: to_integer(&input_value(&inputs.min_sold)),
        sort: select_value(&inputs.sort),
    }
}

pub fn collect_category_query(component: &AdminConsole) -> TopByCategoryQuery {
    let inputs = &component.category;
    TopByCategoryQuery {
        limit_per_cat: to_integer(&input_value(&inputs.limit_per_cat)),
        min_rating: to_number(&input_value(&inputs.min_rating)),
        min_sold: to_integer(&input_value(&inputs.min_sold)),
        use_score: is_checked(&inputs.use_score),
    }
}

pub fn collect_affiliate_settings(component: &AdminConsole) -> AffiliateSettings {
    let inputs = &component.config;
    AffiliateSettings {
        endpoint: input_value(&inputs.endpoint).trim().to_string(),
        app_id: input_value(&inputs.app_id).trim().to_string(),
        secret: input_value(&inputs.secret).trim().to_string(),
        enabled: is_checked(&inputs.enabled),
    }
}

pub fn populate_config_form(component: &AdminConsole, settings: &AffiliateSettings) {
    let inputs = &component.config;
    set_input_value(&inputs.endpoint, &settings.endpoint);
    set_input_value(&inputs.app_id, &settings.app_id);
    set_input_value(&inputs.secret, &settings.secret);
    set_checked(&inputs.enabled, settings.enabled);
}

/// Fills the search and report inputs with the backend's default filters.
pub fn apply_form_defaults(component: &AdminConsole) {
    let search = SearchRequest::default();
    set_input_value(&component.search.limit, &search.limit.to_string());
    set_input_value(&component.search.min_rating, &search.min_rating.to_string());
    set_input_value(&component.search.min_sold, &search.min_sold.to_string());
    if let Some(select) = component.search.sort.cast::<HtmlSelectElement>() {
        select.set_value(search.sort.as_str());
    }

    let query = TopByCategoryQuery::default();
    let inputs = &component.category;
    set_input_value(&inputs.limit_per_cat, &query.limit_per_cat.to_string());
    set_input_value(&inputs.min_rating, &query.min_rating.to_string());
    set_input_value(&inputs.min_sold, &query.min_sold.to_string());
    set_checked(&inputs.use_score, query.use_score);
}

pub fn selected_file(node: &NodeRef) -> Option<web_sys::File> {
    node.cast::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Reads the picked file fully into memory.
#[async_trait(?Send)]
impl UploadSource for web_sys::File {
    async fn read(self) -> Result<UploadFile, RequestError> {
        let name = self.name();
        let bytes = read_as_bytes(&Blob::from(self))
            .await
            .map_err(|e| RequestError::Encode(e.to_string()))?;
        Ok(UploadFile { name, bytes })
    }
}
