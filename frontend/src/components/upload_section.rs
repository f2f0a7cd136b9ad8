use shared::{Category, IntoEnumIterator};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::super::{Model, Msg};
use super::utils::{debounce, extract_image_files};

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            <h2 class="upload-title">{"Select the type of image you are uploading"}</h2>
            <div class="category-grid">
                { for Category::iter().map(|category| render_category_card(model, ctx, category)) }
            </div>
            { render_form_controls(model, ctx) }
        </div>
    }
}

fn render_category_card(model: &Model, ctx: &Context<Model>, category: Category) -> Html {
    let link = ctx.link();
    let input_id = format!("file-input-{}", category.part_key());
    let checkbox_id = format!("checkbox-{}", category.part_key());
    let is_selected = model.selected.contains(&category);

    let handle_change = link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input
            .files()
            .as_ref()
            .map(extract_image_files)
            .unwrap_or_default();

        input.set_value("");

        if files.is_empty() {
            Msg::SetError(Some("No valid image files selected.".into()))
        } else {
            Msg::FilesChosen(category, files)
        }
    });

    html! {
        <div class={classes!("category-card", is_selected.then_some("selected"))}>
            <label for={input_id.clone()} class="file-drop-label">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <span class="file-names">{ render_chosen_files(model, category) }</span>
                <span class="file-hint">
                    { format!("Max {} MB files are allowed", Category::MAX_FILE_SIZE_MB) }
                </span>
            </label>
            <input
                type="file"
                id={input_id}
                multiple=true
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />
            <div class="category-toggle">
                <input
                    type="checkbox"
                    id={checkbox_id.clone()}
                    checked={is_selected}
                    onchange={link.callback(move |_: Event| Msg::ToggleCategory(category))}
                />
                <label for={checkbox_id}>{ category.to_string() }</label>
            </div>
        </div>
    }
}

fn render_chosen_files(model: &Model, category: Category) -> String {
    let files = model
        .files
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if files.is_empty() {
        "Drag your file(s) or browse".to_string()
    } else {
        files
            .iter()
            .map(|file| file.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn render_form_controls(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div class="button-container">
            <button
                class="analyze-btn"
                style="background-color: var(--danger-color);"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Reset)
                })}
            >
                <i class="fa-solid fa-trash"></i>{" Reset"}
            </button>
            <button
                class="analyze-btn"
                disabled={model.loading || model.selected.is_empty()}
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Submit)
                })}
            >
                { if model.loading {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze"}</> }
                } }
            </button>
        </div>
    }
}
