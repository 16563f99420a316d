use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::errors::ServiceError;
use business::domain::product::value_objects::ProductCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientConfigError {
    #[error("product_api.invalid_base_url: {0}")]
    InvalidBaseUrl(String),
    #[error("product_api.http_client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared HTTP client for the product catalogue API.
pub struct ProductApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ProductApiClient {
    /// Every request is bounded by `timeout`, so a workflow never stays loading forever.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientConfigError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// `GET {base}/api/products/qr/{code}`; the code is encoded as a single path segment.
    ///
    /// URL parsing collapses `.` and `..` segments (even as `%2E`), so such codes
    /// cannot be addressed and are refused instead of hitting another route.
    pub fn product_by_code_url(&self, code: &ProductCode) -> Result<Url, ServiceError> {
        if matches!(code.as_str(), "." | "..") {
            return Err(ServiceError::invalid_request(format!(
                "code {:?} cannot be used in a URL path",
                code.as_str()
            )));
        }
        Ok(self.endpoint(&["api", "products", "qr", code.as_str()]))
    }

    /// `POST {base}/api/products`
    pub fn products_url(&self) -> Url {
        self.endpoint(&["api", "products"])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
