mod config;
mod error;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};

use config::AppConfig;
use routes::configure_routes;

/// Upload payloads are multi-file; the per-file 10 MB figure shown in the UI
/// is advisory, so the transport limit only needs to be comfortably above it.
const PAYLOAD_LIMIT_BYTES: usize = 64 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Configuration error: {e}"),
        )
    })?;

    log::info!("Relaying predictions to {}", config.inference_url);
    log::info!("Serving frontend from {}", config.frontend_dir);

    let bind_address = format!("0.0.0.0:{}", config.port);
    log::info!("Starting server on {}", bind_address);

    let http_client = reqwest::Client::new();
    let frontend_dir = config.frontend_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::PayloadConfig::new(PAYLOAD_LIMIT_BYTES))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(http_client.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
