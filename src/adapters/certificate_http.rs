//! Root certificate download using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::CertificateSource;

/// Single-request HTTP download; no retries.
#[derive(Debug, Clone)]
pub struct HttpCertificateSource {
    client: Client,
}

impl HttpCertificateSource {
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("appboot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl CertificateSource for HttpCertificateSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        let fetch_error =
            |details: String| AppError::CertificateFetch { url: url.to_string(), details };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| fetch_error(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP status {}", status.as_u16())));
        }

        let body =
            response.bytes().map_err(|e| fetch_error(format!("Failed to read body: {}", e)))?;
        if body.is_empty() {
            return Err(fetch_error("empty response body".to_string()));
        }

        Ok(body.to_vec())
    }
}
