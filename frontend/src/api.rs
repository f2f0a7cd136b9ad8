use gloo_net::http::Request;
use shared::PredictionResponse;
use web_sys::FormData;

/// Failures of one prediction round trip, as surfaced to the user. A
/// submission either yields a fully parsed verdict or one of these; a
/// half-parsed body is never handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// The request never completed.
    Network(String),
    /// The proxy answered with a non-success status.
    Server { status: u16, body: String },
    /// The proxy answered 200 with a body that is not a prediction payload.
    Malformed(String),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::Network(message) => write!(f, "Network error: {}", message),
            PredictError::Server { status, body } => {
                write!(f, "Server error: {} - {}", status, body)
            }
            PredictError::Malformed(message) => {
                write!(f, "Failed to parse response: {}", message)
            }
        }
    }
}

/// Posts the assembled multipart body to the proxy and returns the parsed
/// verdict.
pub async fn predict(form_data: FormData) -> Result<PredictionResponse, PredictError> {
    let request = Request::post("/api/predict")
        .body(form_data)
        .map_err(|e| PredictError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| PredictError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(PredictError::Server { status, body });
    }

    response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| PredictError::Malformed(e.to_string()))
}
