use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductCode;

pub struct LookupProductByCodeParams {
    pub code: ProductCode,
}

#[async_trait]
pub trait LookupProductByCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: LookupProductByCodeParams,
    ) -> Result<Option<Product>, ProductError>;
}
