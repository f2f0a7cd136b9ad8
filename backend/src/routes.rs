use actix_files::Files;
use actix_web::{Error, HttpRequest, HttpResponse, http::header, web};
use log::{error, info};
use serde::Serialize;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::ProxyError;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    cfg.service(web::resource("/api/predict").route(web::post().to(handle_predict)))
        .service(web::resource("/healthz").route(web::get().to(health)))
        .service(Files::new("/static", frontend_dir).index_file("index.html"));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Relays the browser's multipart payload to the inference service and the
/// service's JSON verdict back, byte for byte. One outbound call, no retry.
async fn handle_predict(
    req: HttpRequest,
    body: web::Bytes,
    config: web::Data<AppConfig>,
    client: web::Data<reqwest::Client>,
) -> Result<HttpResponse, Error> {
    let request_id = Uuid::new_v4();

    // The boundary lives in the content type; without it the relayed body is
    // meaningless to the inference service.
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| value.starts_with("multipart/form-data"))
        .ok_or(ProxyError::NotMultipart)?
        .to_string();

    info!(
        "[{}] relaying {} byte payload to {}",
        request_id,
        body.len(),
        config.inference_url
    );

    let upstream = client
        .post(config.inference_url.as_str())
        .header(reqwest::header::CONTENT_TYPE, content_type)
        .body(body.to_vec())
        .send()
        .await
        .map_err(|e| {
            error!("[{}] upstream request failed: {}", request_id, e);
            ProxyError::Request(e)
        })?;

    let status = upstream.status();
    if !status.is_success() {
        error!("[{}] inference service answered {}", request_id, status);
        return Err(ProxyError::UpstreamStatus(status).into());
    }

    let verdict = upstream.bytes().await.map_err(ProxyError::Request)?;
    // Relayed unchanged, but never forward something that is not JSON.
    serde_json::from_slice::<serde_json::Value>(&verdict).map_err(ProxyError::Json)?;

    info!(
        "[{}] inference service answered {} with {} bytes",
        request_id,
        status,
        verdict.len()
    );

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(verdict))
}
