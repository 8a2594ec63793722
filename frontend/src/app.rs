use crate::components::console::AdminConsole;
use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub api_base: AttrValue,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <h1>{"Shopee Affiliate Console"}</h1>
                <AdminConsole api_base={ctx.props().api_base.clone()} />
            </div>
        }
    }
}
