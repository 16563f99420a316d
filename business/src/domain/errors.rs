/// Errors reported by the remote product service.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("product_service.network_error: {0}")]
    Network(String),
    #[error("product_service.server_error: HTTP {status}")]
    Server { status: u16 },
    #[error("product_service.invalid_response: {0}")]
    InvalidResponse(String),
    #[error("product_service.invalid_request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    pub fn network(message: impl Into<String>) -> Self {
        ServiceError::Network(message.into())
    }
    pub fn server(status: u16) -> Self {
        ServiceError::Server { status }
    }
    pub fn invalid_response(message: impl Into<String>) -> Self {
        ServiceError::InvalidResponse(message.into())
    }
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ServiceError::InvalidRequest(message.into())
    }
}
