use crate::app::App;
use crate::config::ConsoleConfig;

mod api;
mod app;
mod components;
mod config;
mod flows;
mod format;
mod logging;
mod panel_grid;
mod table;

fn main() {
    let config = ConsoleConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("admin console starting, api base {:?}", config.api_base);

    yew::Renderer::<App>::with_props(app::AppProps {
        api_base: config.api_base.into(),
    })
    .render();
}
