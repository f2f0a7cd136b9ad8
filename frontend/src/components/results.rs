use shared::{Category, CategoryPrediction, IntoEnumIterator, format_confidence};
use yew::prelude::*;

use super::super::{Model, Msg};

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };

    html! {
        <div class="modal-overlay">
            <div class="results-container">
                <div class="result-header">
                    <h2>{"Analysis Results"}</h2>
                    <button
                        class="close-btn"
                        title="Close results"
                        onclick={ctx.link().callback(|_| Msg::CloseResults)}
                    >
                        <i class="fa-solid fa-times"></i>
                    </button>
                </div>
                <div class="accordion">
                    { for Category::iter()
                        .filter_map(|category| {
                            result
                                .predictions
                                .get(category.part_key())
                                .map(|prediction| (category, prediction))
                        })
                        .map(|(category, prediction)| {
                            render_entry(model, ctx, category, prediction)
                        }) }
                </div>
            </div>
        </div>
    }
}

fn render_entry(
    model: &Model,
    ctx: &Context<Model>,
    category: Category,
    prediction: &CategoryPrediction,
) -> Html {
    let is_open = model.open_entry == Some(category);
    let link = ctx.link();

    html! {
        <div class={classes!("accordion-entry", is_open.then_some("open"))} key={category.part_key()}>
            <button
                class="accordion-header"
                onclick={link.callback(move |_| Msg::ToggleEntry(category))}
            >
                <span>{ category.to_string() }</span>
                <i class={ if is_open { "fa-solid fa-chevron-up" } else { "fa-solid fa-chevron-down" } }></i>
            </button>
            { if is_open {
                html! {
                    <div class="accordion-body">
                        <p>{ format!(
                            "The {} analysis indicates a {} finding with {} confidence.",
                            category,
                            prediction.class_prediction,
                            format_confidence(prediction.confidence),
                        ) }</p>
                    </div>
                }
            } else {
                html! {}
            } }
        </div>
    }
}
