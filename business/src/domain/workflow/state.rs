use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowPhase {
    /// No code scanned yet.
    #[default]
    Idle,
    /// Looking up the scanned code.
    Resolving,
    Found,
    /// The lookup completed without a match.
    NotFound,
    /// Submitting a draft for the scanned code.
    Creating,
    Error,
}

impl std::fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowPhase::Idle => write!(f, "idle"),
            WorkflowPhase::Resolving => write!(f, "resolving"),
            WorkflowPhase::Found => write!(f, "found"),
            WorkflowPhase::NotFound => write!(f, "not_found"),
            WorkflowPhase::Creating => write!(f, "creating"),
            WorkflowPhase::Error => write!(f, "error"),
        }
    }
}

/// Tags one call to the remote service so its completion can be matched to the
/// request that is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The remote call that drove the workflow into the error phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Lookup,
    Create,
}

/// View state of one scan-to-resolution cycle.
///
/// Only the transition function builds new values, so the fields always agree
/// with the phase: a loading phase has a request in flight, `Found` holds a
/// persisted product, and `Error` holds a message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowState {
    pub(super) phase: WorkflowPhase,
    pub(super) scanned_code: Option<ProductCode>,
    pub(super) product: Option<Product>,
    pub(super) last_error: Option<String>,
    pub(super) in_flight: Option<RequestId>,
    pub(super) failed_operation: Option<Operation>,
    pub(super) issued_requests: u64,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    pub fn scanned_code(&self) -> Option<&ProductCode> {
        self.scanned_code.as_ref()
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn failed_operation(&self) -> Option<Operation> {
        self.failed_operation
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            WorkflowPhase::Resolving | WorkflowPhase::Creating
        )
    }

    pub fn show_create_option(&self) -> bool {
        self.phase == WorkflowPhase::NotFound
    }

    pub fn show_error(&self) -> bool {
        self.phase == WorkflowPhase::Error
    }

    /// Reserves the id for the next remote call.
    pub(super) fn next_request(&self) -> (RequestId, u64) {
        let issued = self.issued_requests + 1;
        (RequestId(issued), issued)
    }
}
