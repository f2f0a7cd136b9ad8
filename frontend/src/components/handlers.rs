use std::collections::HashMap;

use gloo_console::error;
use gloo_file::File as GlooFile;
use shared::{Category, IntoEnumIterator, PredictionResponse, SubmissionPlan};
use wasm_bindgen_futures::spawn_local;
use web_sys::FormData;
use yew::prelude::*;

use super::super::{Model, Msg};
use crate::api;

pub fn handle_files_chosen(model: &mut Model, category: Category, files: Vec<GlooFile>) -> bool {
    // Wholesale replacement, no merging with the previous pick.
    model.files.insert(category, files);
    model.error = None;
    true
}

pub fn handle_toggle_category(model: &mut Model, category: Category) -> bool {
    if let Some(position) = model.selected.iter().position(|&c| c == category) {
        model.selected.remove(position);
    } else {
        model.selected.push(category);
    }
    model.error = None;
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.loading {
        return false;
    }

    let file_counts: HashMap<Category, usize> = model
        .files
        .iter()
        .map(|(&category, files)| (category, files.len()))
        .collect();

    // Fail closed: an empty selection or a selected category without files
    // is warned about here, before any network traffic.
    let plan = match SubmissionPlan::build(&model.selected, &file_counts) {
        Ok(plan) => plan,
        Err(rejection) => {
            model.error = Some(rejection.to_string());
            return true;
        }
    };

    let form_data = match build_form_data(model, &plan) {
        Ok(form_data) => form_data,
        Err(message) => {
            model.error = Some(message);
            return true;
        }
    };

    model.loading = true;
    model.error = None;
    send_prediction_request(ctx, form_data);
    true
}

fn build_form_data(model: &Model, plan: &SubmissionPlan) -> Result<FormData, String> {
    let form_data =
        FormData::new().map_err(|_| "Failed to assemble the upload form.".to_string())?;

    for part in &plan.parts {
        let file = model
            .files
            .get(&part.category)
            .and_then(|files| files.get(part.file_index))
            .ok_or_else(|| "Selected files changed during submission.".to_string())?;

        form_data
            .append_with_blob_and_filename(part.part_name, file.as_ref(), &file.name())
            .map_err(|_| "Failed to attach a file to the upload form.".to_string())?;
    }

    Ok(form_data)
}

pub fn send_prediction_request(ctx: &Context<Model>, form_data: FormData) {
    let link = ctx.link().clone();

    spawn_local(async move {
        match api::predict(form_data).await {
            Ok(response) => link.send_message(Msg::PredictionReceived(response)),
            Err(failure) => {
                error!(format!("Prediction request failed: {}", failure));
                link.send_message(Msg::SubmissionFailed(failure.to_string()));
            }
        }
    });
}

pub fn handle_prediction_received(model: &mut Model, response: PredictionResponse) -> bool {
    // Accordion starts with the first category that has a verdict open.
    model.open_entry = Category::iter()
        .find(|category| response.predictions.contains_key(category.part_key()));
    model.result = Some(response);
    model.loading = false;
    true
}

pub fn handle_submission_failed(model: &mut Model, message: String) -> bool {
    model.loading = false;
    model.result = None;
    model.error = Some(message);
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    for files in model.files.values_mut() {
        files.clear();
    }
    model.selected.clear();
    model.result = None;
    model.open_entry = None;
    model.error = None;
    true
}

pub fn handle_toggle_entry(model: &mut Model, category: Category) -> bool {
    // One entry open at a time; selecting another collapses the first.
    model.open_entry = if model.open_entry == Some(category) {
        None
    } else {
        Some(category)
    };
    true
}

pub fn handle_close_results(model: &mut Model) -> bool {
    model.result = None;
    model.open_entry = None;
    true
}

pub fn handle_set_error(model: &mut Model, error: Option<String>) -> bool {
    model.error = error;
    model.loading = false;
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode").unwrap();
    }

    true
}
