//! Wire contract shared by the backend proxy and the Yew frontend: the
//! category set, the prediction payload, and the submission plan that pins
//! down multipart part naming and ordering.

mod category;
mod prediction;
mod submission;

pub use category::Category;
pub use prediction::{CategoryPrediction, PredictionResponse, format_confidence};
pub use submission::{PlannedPart, SubmissionPlan, SubmissionPlanError};

pub use strum::IntoEnumIterator;
