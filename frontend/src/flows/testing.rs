use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use common::model::config::AffiliateSettings;

use super::{CategoryCard, ConsoleView, Panel};
use crate::api::{ApiRequest, RequestError, Transport};
use crate::table::ResultTable;

/// Transport answering from a script and recording every request.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<serde_json::Value, RequestError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_ok(&self, body: serde_json::Value) {
        self.responses.borrow_mut().push_back(Ok(body));
    }

    pub fn respond_status(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Err(RequestError::Status {
            status,
            body: body.to_string(),
        }));
    }

    pub fn respond_err(&self, err: RequestError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, RequestError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Network("no scripted response".to_string())))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Status(Panel, String),
    Cleared(Panel),
    Table(ResultTable),
    Categories(Vec<CategoryCard>),
    Form(AffiliateSettings),
}

/// View recording every call in order.
#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Last status written to `panel`.
    pub fn status(&self, panel: Panel) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ViewEvent::Status(p, text) if *p == panel => Some(text.clone()),
            _ => None,
        })
    }
}

impl ConsoleView for RecordingView {
    fn set_status(&self, panel: Panel, text: String) {
        self.events.borrow_mut().push(ViewEvent::Status(panel, text));
    }

    fn clear_output(&self, panel: Panel) {
        self.events.borrow_mut().push(ViewEvent::Cleared(panel));
    }

    fn render_table(&self, table: ResultTable) {
        self.events.borrow_mut().push(ViewEvent::Table(table));
    }

    fn render_categories(&self, cards: Vec<CategoryCard>) {
        self.events.borrow_mut().push(ViewEvent::Categories(cards));
    }

    fn populate_form(&self, settings: AffiliateSettings) {
        self.events.borrow_mut().push(ViewEvent::Form(settings));
    }
}
