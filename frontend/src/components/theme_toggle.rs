use yew::html::Scope;
use yew::prelude::*;

use super::super::{Model, Msg};

pub fn render_theme_toggle(theme: &str, link: &Scope<Model>) -> Html {
    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            title={ if theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
        >
            { if theme == "light" {
                html! { <i class="fa-solid fa-sun toggle-icon"></i> }
            } else {
                html! { <i class="fa-solid fa-moon toggle-icon"></i> }
            }}
        </button>
    }
}
