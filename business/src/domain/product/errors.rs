use crate::domain::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.code_empty")]
    CodeEmpty,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.draft_already_persisted")]
    DraftAlreadyPersisted,
    #[error("{0}")]
    Service(#[from] ServiceError),
}
