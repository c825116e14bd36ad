use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::CertificateSource;

pub struct FakeCertificateSource {
    body: Option<Vec<u8>>,
    pub requests: Mutex<Vec<Url>>,
}

impl FakeCertificateSource {
    pub fn serving(body: &str) -> Self {
        Self { body: Some(body.as_bytes().to_vec()), requests: Mutex::new(Vec::new()) }
    }

    pub fn offline() -> Self {
        Self { body: None, requests: Mutex::new(Vec::new()) }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl CertificateSource for FakeCertificateSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        self.requests.lock().unwrap().push(url.clone());
        self.body.clone().ok_or_else(|| AppError::CertificateFetch {
            url: url.to_string(),
            details: "network unreachable".to_string(),
        })
    }
}
