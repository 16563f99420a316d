use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::services::ProductService;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let draft = params.draft;
        self.logger
            .info(&format!("Creating product for code: {}", draft.code));

        if draft.is_persisted() {
            return Err(ProductError::DraftAlreadyPersisted);
        }
        if draft.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let created = self.service.create(&draft).await.inspect_err(|e| {
            self.logger
                .error(&format!("Creating product {} failed: {}", draft.code, e))
        })?;

        let Some(id) = created.id else {
            return Err(ServiceError::invalid_response("created product without identifier").into());
        };
        if created.code != draft.code {
            return Err(ServiceError::invalid_response(format!(
                "created product for code {} instead of {}",
                created.code, draft.code
            ))
            .into());
        }

        self.logger
            .info(&format!("Product created with id: {}", id));
        Ok(created)
    }
}
