//! Request/render flows behind the console's four panels.
//!
//! Each flow is a plain `async fn` that takes a [`Transport`](crate::api::Transport)
//! and a [`ConsoleView`]. It collects nothing from the DOM itself: the caller
//! passes the already-collected inputs, the flow performs one backend call,
//! writes the outcome to the view, and returns the result so a harness can
//! inspect it. Failures never escape as panics; every flow turns them into
//! its panel's status line.

use common::model::config::AffiliateSettings;

use crate::table::ResultTable;

pub mod category;
pub mod config;
pub mod search;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use category::{CategoryCard, TopSummary};

/// Panels of the console; each owns one status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Search,
    Category,
    Upload,
    Config,
}

/// Rendering surface the flows write to.
///
/// The Yew component implements it by turning each call into a message; tests
/// implement it by recording the calls.
pub trait ConsoleView {
    fn set_status(&self, panel: Panel, text: String);
    fn clear_output(&self, panel: Panel);
    fn render_table(&self, table: ResultTable);
    fn render_categories(&self, cards: Vec<CategoryCard>);
    fn populate_form(&self, settings: AffiliateSettings);
}
