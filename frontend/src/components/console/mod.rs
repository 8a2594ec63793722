//! Admin console: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and form helpers.
//!
//! Responsibilities
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, fill the filter inputs with their defaults and load the
//!   backend configuration into the config form.
//! - Act as the flows' `ConsoleView` by turning each call into a `Msg`.

use common::model::config::AffiliateSettings;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::flows::{self, CategoryCard, ConsoleView, Panel};
use crate::table::ResultTable;

pub use messages::Msg;
pub use props::AdminConsoleProps;
pub use state::AdminConsole;

impl Component for AdminConsole {
    type Message = Msg;
    type Properties = AdminConsoleProps;

    fn create(ctx: &Context<Self>) -> Self {
        AdminConsole::new(&ctx.props().api_base)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            helpers::apply_form_defaults(self);

            let transport = self.transport.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let _ = flows::config::load(&*transport, &link).await;
            });
        }
    }
}

impl ConsoleView for Scope<AdminConsole> {
    fn set_status(&self, panel: Panel, text: String) {
        self.send_message(Msg::SetStatus(panel, text));
    }

    fn clear_output(&self, panel: Panel) {
        self.send_message(Msg::ClearOutput(panel));
    }

    fn render_table(&self, table: ResultTable) {
        self.send_message(Msg::ShowTable(table));
    }

    fn render_categories(&self, cards: Vec<CategoryCard>) {
        self.send_message(Msg::ShowCategories(cards));
    }

    fn populate_form(&self, settings: AffiliateSettings) {
        self.send_message(Msg::PopulateConfig(settings));
    }
}
