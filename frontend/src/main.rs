mod api;
mod components;

use std::collections::HashMap;

use gloo_file::File as GlooFile;
use shared::{Category, IntoEnumIterator, PredictionResponse};
use yew::prelude::*;

use components::{handlers, header, results, theme_toggle, upload_section, utils};

// Yew msg components
pub enum Msg {
    // Upload form
    FilesChosen(Category, Vec<GlooFile>),
    ToggleCategory(Category),
    Submit,
    Reset,

    // Inference round trip
    PredictionReceived(PredictionResponse),
    SubmissionFailed(String),

    // Result modal
    ToggleEntry(Category),
    CloseResults,

    // UI states
    SetError(Option<String>),
    ToggleTheme,
}

/// Main component. Owns the per-category file selections, the ordered
/// selection set and the prediction result for the current session.
pub struct Model {
    pub files: HashMap<Category, Vec<GlooFile>>,
    pub selected: Vec<Category>,
    pub loading: bool,
    pub result: Option<PredictionResponse>,
    pub open_entry: Option<Category>,
    pub error: Option<String>,
    pub theme: String,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            files: Category::iter()
                .map(|category| (category, Vec::new()))
                .collect(),
            selected: Vec::new(),
            loading: false,
            result: None,
            open_entry: None,
            error: None,
            theme: "light".to_string(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Upload form
            Msg::FilesChosen(category, files) => {
                handlers::handle_files_chosen(self, category, files)
            }
            Msg::ToggleCategory(category) => handlers::handle_toggle_category(self, category),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Reset => handlers::handle_reset(self),

            // Inference round trip
            Msg::PredictionReceived(response) => {
                handlers::handle_prediction_received(self, response)
            }
            Msg::SubmissionFailed(message) => handlers::handle_submission_failed(self, message),

            // Result modal
            Msg::ToggleEntry(category) => handlers::handle_toggle_entry(self, category),
            Msg::CloseResults => handlers::handle_close_results(self),

            // UI states
            Msg::SetError(error) => handlers::handle_set_error(self, error),
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    { upload_section::render_upload_section(self, ctx) }
                    { utils::render_error_message(self) }
                    { results::render_results(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Breast Imaging Screening | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
