use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::errors::ServiceError;
use business::domain::product::model::Product;
use business::domain::product::services::ProductService;
use business::domain::product::value_objects::ProductCode;

use crate::client::ProductApiClient;
use crate::dto::ProductDto;

pub struct ProductServiceRest {
    client: ProductApiClient,
}

impl ProductServiceRest {
    pub fn new(client: ProductApiClient) -> Self {
        Self { client }
    }

    fn transport_error(error: reqwest::Error) -> ServiceError {
        if error.is_timeout() {
            ServiceError::network("request timed out")
        } else if error.is_connect() {
            ServiceError::network(format!("connection failed: {}", error))
        } else {
            ServiceError::network(error.to_string())
        }
    }

    /// A 404 or an empty body is a miss; any other non-2xx status is a server error.
    fn parse_lookup(status: StatusCode, body: &[u8]) -> Result<Option<Product>, ServiceError> {
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ServiceError::server(status.as_u16()));
        }
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let dto: Option<ProductDto> = serde_json::from_slice(body)
            .map_err(|e| ServiceError::network(format!("malformed response: {}", e)))?;

        dto.map(Product::try_from).transpose()
    }

    fn parse_created(status: StatusCode, body: &[u8]) -> Result<Product, ServiceError> {
        if !status.is_success() {
            return Err(ServiceError::server(status.as_u16()));
        }

        let dto: ProductDto = serde_json::from_slice(body)
            .map_err(|e| ServiceError::network(format!("malformed response: {}", e)))?;

        Product::try_from(dto)
    }
}

#[async_trait]
impl ProductService for ProductServiceRest {
    async fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, ServiceError> {
        let response = self
            .client
            .client
            .get(self.client.product_by_code_url(code)?)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Self::transport_error)?;

        Self::parse_lookup(status, &body)
    }

    async fn create(&self, draft: &Product) -> Result<Product, ServiceError> {
        let response = self
            .client
            .client
            .post(self.client.products_url())
            .header("Accept", "application/json")
            .json(&ProductDto::from(draft))
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Self::transport_error)?;

        Self::parse_created(status, &body)
    }
}
