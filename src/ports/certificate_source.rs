use url::Url;

use crate::domain::AppError;

/// Port for downloading the database root certificate.
pub trait CertificateSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError>;
}
