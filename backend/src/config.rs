use std::env;

use thiserror::Error;
use url::Url;

/// Upstream address used when INFERENCE_URL is not set. Matches the port the
/// inference service binds in development.
const DEFAULT_INFERENCE_URL: &str = "http://127.0.0.1:8070/predict";

/// Environment-derived server configuration, collected once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub inference_url: Url,
    pub frontend_dir: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("INFERENCE_URL is not a valid URL: {0}")]
    InvalidInferenceUrl(#[from] url::ParseError),
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse()?;

        let inference_url = env::var("INFERENCE_URL")
            .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string())
            .parse::<Url>()?;

        let frontend_dir = env::var("FRONTEND_DIST").unwrap_or_else(|_| {
            if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
                format!("{}/../frontend/dist", manifest_dir)
            } else {
                "/usr/src/app/frontend/dist".to_string()
            }
        });

        Ok(Self {
            port,
            inference_url,
            frontend_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inference_url_is_valid() {
        let url: Url = DEFAULT_INFERENCE_URL.parse().unwrap();
        assert_eq!(url.path(), "/predict");
    }
}
