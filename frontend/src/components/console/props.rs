//! Properties of the `AdminConsole` component.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminConsoleProps {
    /// Origin of the backend API. Empty (the default) sends every request to
    /// the origin that served the console.
    #[prop_or_default]
    pub api_base: AttrValue,
}
