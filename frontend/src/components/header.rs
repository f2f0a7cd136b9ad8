use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-ribbon"></i> {" Breast Imaging Screening"}</h1>
            <p class="subtitle">{"Upload medical images and get an AI-based analysis"}</p>
        </header>
    }
}
