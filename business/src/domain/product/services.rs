use async_trait::async_trait;

use crate::domain::errors::ServiceError;

use super::model::Product;
use super::value_objects::ProductCode;

/// Service port for the remote product catalogue.
///
/// A missing product is a successful lookup (`Ok(None)`), never an error.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, ServiceError>;

    /// Submits a draft and returns the stored record with its identifier assigned.
    async fn create(&self, draft: &Product) -> Result<Product, ServiceError>;
}
