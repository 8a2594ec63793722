//! Update function for the admin console.
//!
//! Button messages collect the panel's inputs and spawn the matching flow with
//! the component's `Scope` as its view. The flow reports back through the
//! remaining messages, which only touch component state. Nothing serializes
//! the spawned flows: when two requests for the same panel overlap, the one
//! resolving last is what stays on screen.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::flows::{category, config, search, upload, Panel};

use super::helpers::{
    collect_affiliate_settings, collect_category_query, collect_search_request,
    populate_config_form, selected_file,
};
use super::messages::Msg;
use super::state::AdminConsole;

pub fn update(component: &mut AdminConsole, ctx: &Context<AdminConsole>, msg: Msg) -> bool {
    match msg {
        Msg::Search => {
            let request = collect_search_request(component);
            let transport = component.transport.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let _ = search::run(&*transport, &link, request).await;
            });
            false
        }
        Msg::ReportByCategory => {
            let query = collect_category_query(component);
            let transport = component.transport.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let _ = category::run(&*transport, &link, query).await;
            });
            false
        }
        Msg::Upload => {
            let file = selected_file(&component.csv_file);
            let transport = component.transport.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let _ = upload::run(&*transport, &link, file).await;
            });
            false
        }
        Msg::SaveConfig => {
            let settings = collect_affiliate_settings(component);
            let transport = component.transport.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let _ = config::save(&*transport, &link, settings).await;
            });
            false
        }
        Msg::SetStatus(panel, text) => {
            component.statuses.insert(panel, text);
            true
        }
        Msg::ClearOutput(Panel::Search) => {
            component.search_table = None;
            true
        }
        Msg::ClearOutput(Panel::Category) => {
            component.category_cards.clear();
            true
        }
        Msg::ClearOutput(_) => false,
        Msg::ShowTable(table) => {
            component.search_table = Some(table);
            true
        }
        Msg::ShowCategories(cards) => {
            component.category_cards = cards;
            true
        }
        Msg::PopulateConfig(settings) => {
            populate_config_form(component, &settings);
            false
        }
    }
}
