use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductCode;

use super::state::RequestId;

/// Inputs to the workflow: user commands and completions of remote calls.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEvent {
    ScanCompleted(String),
    LookupSucceeded {
        request: RequestId,
        product: Option<Product>,
    },
    LookupFailed {
        request: RequestId,
        error: ProductError,
    },
    CreateRequested,
    CreateSucceeded {
        request: RequestId,
        product: Product,
    },
    CreateFailed {
        request: RequestId,
        error: ProductError,
    },
    RetryRequested,
    Reset,
}

impl WorkflowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowEvent::ScanCompleted(_) => "scan_completed",
            WorkflowEvent::LookupSucceeded { .. } => "lookup_succeeded",
            WorkflowEvent::LookupFailed { .. } => "lookup_failed",
            WorkflowEvent::CreateRequested => "create_requested",
            WorkflowEvent::CreateSucceeded { .. } => "create_succeeded",
            WorkflowEvent::CreateFailed { .. } => "create_failed",
            WorkflowEvent::RetryRequested => "retry_requested",
            WorkflowEvent::Reset => "reset",
        }
    }
}

/// Side effect requested by a transition. The caller runs it and feeds the
/// completion back as an event carrying the same request id.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Lookup {
        request: RequestId,
        code: ProductCode,
    },
    Create {
        request: RequestId,
        draft: Product,
    },
}

impl Effect {
    pub fn request(&self) -> RequestId {
        match self {
            Effect::Lookup { request, .. } | Effect::Create { request, .. } => *request,
        }
    }
}
