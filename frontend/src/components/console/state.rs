//! Component state for the admin console.
//!
//! Form inputs are uncontrolled: each one is reached through a `NodeRef` and
//! read when its panel's button is pressed. The state itself only keeps what
//! the flows produced (status lines and rendered output).

use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use crate::api::GlooTransport;
use crate::flows::{CategoryCard, Panel};
use crate::table::ResultTable;

#[derive(Default)]
pub struct SearchInputs {
    pub keyword: NodeRef,
    pub limit: NodeRef,
    pub min_rating: NodeRef,
    pub min_sold: NodeRef,
    pub sort: NodeRef,
}

#[derive(Default)]
pub struct CategoryInputs {
    pub limit_per_cat: NodeRef,
    pub min_rating: NodeRef,
    pub min_sold: NodeRef,
    pub use_score: NodeRef,
}

#[derive(Default)]
pub struct ConfigInputs {
    pub endpoint: NodeRef,
    pub app_id: NodeRef,
    pub secret: NodeRef,
    pub enabled: NodeRef,
}

pub struct AdminConsole {
    /// Shared with every spawned flow.
    pub transport: Rc<GlooTransport>,

    pub search: SearchInputs,
    pub category: CategoryInputs,
    pub csv_file: NodeRef,
    pub config: ConfigInputs,

    /// Current status line per panel; a missing entry renders empty.
    pub statuses: HashMap<Panel, String>,

    /// Output of the last successful search, cleared when a new one starts.
    pub search_table: Option<ResultTable>,

    /// Output of the last per-category report, cleared when a new one starts.
    pub category_cards: Vec<CategoryCard>,

    /// Guard so form defaults and the config load run once.
    pub loaded: bool,
}

impl AdminConsole {
    pub fn new(api_base: &str) -> Self {
        Self {
            transport: Rc::new(GlooTransport::new(api_base)),
            search: SearchInputs::default(),
            category: CategoryInputs::default(),
            csv_file: NodeRef::default(),
            config: ConfigInputs::default(),
            statuses: HashMap::new(),
            search_table: None,
            category_cards: Vec::new(),
            loaded: false,
        }
    }

    pub fn status(&self, panel: Panel) -> &str {
        self.statuses.get(&panel).map(String::as_str).unwrap_or("")
    }
}
