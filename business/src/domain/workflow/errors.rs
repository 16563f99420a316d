/// Reasons a workflow event was rejected. A rejected event leaves the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("workflow.empty_code")]
    EmptyCode,
    #[error("workflow.busy")]
    Busy,
    #[error("workflow.create_unavailable")]
    CreateUnavailable,
    #[error("workflow.nothing_to_retry")]
    NothingToRetry,
    #[error("workflow.stale_completion")]
    StaleCompletion,
    #[error("workflow.unexpected_completion")]
    UnexpectedCompletion,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("workflow.session_closed")]
    Closed,
}
