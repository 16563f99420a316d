use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::services::ProductService;
use crate::domain::product::use_cases::lookup::{
    LookupProductByCodeParams, LookupProductByCodeUseCase,
};

pub struct LookupProductByCodeUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LookupProductByCodeUseCase for LookupProductByCodeUseCaseImpl {
    async fn execute(
        &self,
        params: LookupProductByCodeParams,
    ) -> Result<Option<Product>, ProductError> {
        self.logger
            .info(&format!("Looking up product by code: {}", params.code));

        let found = self
            .service
            .find_by_code(&params.code)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Lookup for code {} failed: {}", params.code, e))
            })?;

        let Some(product) = found else {
            self.logger
                .info(&format!("No product registered for code: {}", params.code));
            return Ok(None);
        };

        if !product.is_persisted() {
            return Err(ServiceError::invalid_response("product without identifier").into());
        }
        if product.code != params.code {
            return Err(ServiceError::invalid_response(format!(
                "requested code {} but received {}",
                params.code, product.code
            ))
            .into());
        }

        self.logger.info(&format!(
            "Product found for code {}: {}",
            params.code, product.name
        ));
        Ok(Some(product))
    }
}
