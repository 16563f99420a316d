use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductCode;

use super::errors::WorkflowError;
use super::events::{Effect, WorkflowEvent};
use super::state::{Operation, RequestId, WorkflowPhase, WorkflowState};

/// Result of an accepted event: the next state and, when entering a loading
/// phase, the remote call to issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: WorkflowState,
    pub effect: Option<Effect>,
}

impl Step {
    fn pure(state: WorkflowState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Applies one event to the workflow.
///
/// Pure: no I/O happens here. `Err` means the event was rejected and the
/// current state still holds.
pub fn transition(state: &WorkflowState, event: WorkflowEvent) -> Result<Step, WorkflowError> {
    match event {
        WorkflowEvent::ScanCompleted(raw) => scan_completed(state, raw),
        WorkflowEvent::LookupSucceeded { request, product } => {
            expect_completion(state, request, WorkflowPhase::Resolving)?;
            Ok(Step::pure(lookup_succeeded(state, product)))
        }
        WorkflowEvent::LookupFailed { request, error } => {
            expect_completion(state, request, WorkflowPhase::Resolving)?;
            Ok(Step::pure(failed(state, Operation::Lookup, &error)))
        }
        WorkflowEvent::CreateRequested => create_requested(state),
        WorkflowEvent::CreateSucceeded { request, product } => {
            expect_completion(state, request, WorkflowPhase::Creating)?;
            Ok(Step::pure(found(state, product)))
        }
        WorkflowEvent::CreateFailed { request, error } => {
            expect_completion(state, request, WorkflowPhase::Creating)?;
            Ok(Step::pure(failed(state, Operation::Create, &error)))
        }
        WorkflowEvent::RetryRequested => retry_requested(state),
        WorkflowEvent::Reset => Ok(Step::pure(reset(state))),
    }
}

fn scan_completed(state: &WorkflowState, raw: String) -> Result<Step, WorkflowError> {
    let code = ProductCode::new(raw).map_err(|_| WorkflowError::EmptyCode)?;
    if state.is_loading() {
        return Err(WorkflowError::Busy);
    }
    Ok(resolve(state, code))
}

fn resolve(state: &WorkflowState, code: ProductCode) -> Step {
    let (request, issued_requests) = state.next_request();
    let next = WorkflowState {
        phase: WorkflowPhase::Resolving,
        scanned_code: Some(code.clone()),
        product: None,
        last_error: None,
        in_flight: Some(request),
        failed_operation: None,
        issued_requests,
    };
    Step {
        state: next,
        effect: Some(Effect::Lookup { request, code }),
    }
}

fn create_requested(state: &WorkflowState) -> Result<Step, WorkflowError> {
    if state.phase != WorkflowPhase::NotFound {
        return Err(WorkflowError::CreateUnavailable);
    }
    let code = state
        .scanned_code
        .clone()
        .ok_or(WorkflowError::CreateUnavailable)?;
    Ok(create(state, code))
}

fn create(state: &WorkflowState, code: ProductCode) -> Step {
    let (request, issued_requests) = state.next_request();
    let draft = Product::draft(code.clone());
    let next = WorkflowState {
        phase: WorkflowPhase::Creating,
        scanned_code: Some(code),
        product: None,
        last_error: None,
        in_flight: Some(request),
        failed_operation: None,
        issued_requests,
    };
    Step {
        state: next,
        effect: Some(Effect::Create { request, draft }),
    }
}

fn retry_requested(state: &WorkflowState) -> Result<Step, WorkflowError> {
    if state.phase != WorkflowPhase::Error {
        return Err(WorkflowError::NothingToRetry);
    }
    let code = state
        .scanned_code
        .clone()
        .ok_or(WorkflowError::NothingToRetry)?;
    match state.failed_operation {
        Some(Operation::Lookup) => Ok(resolve(state, code)),
        Some(Operation::Create) => Ok(create(state, code)),
        None => Err(WorkflowError::NothingToRetry),
    }
}

fn expect_completion(
    state: &WorkflowState,
    request: RequestId,
    phase: WorkflowPhase,
) -> Result<(), WorkflowError> {
    if state.in_flight != Some(request) {
        return Err(WorkflowError::StaleCompletion);
    }
    if state.phase != phase {
        return Err(WorkflowError::UnexpectedCompletion);
    }
    Ok(())
}

fn lookup_succeeded(state: &WorkflowState, product: Option<Product>) -> WorkflowState {
    match product {
        Some(product) => found(state, product),
        None => WorkflowState {
            phase: WorkflowPhase::NotFound,
            scanned_code: state.scanned_code.clone(),
            product: None,
            last_error: None,
            in_flight: None,
            failed_operation: None,
            issued_requests: state.issued_requests,
        },
    }
}

fn found(state: &WorkflowState, product: Product) -> WorkflowState {
    WorkflowState {
        phase: WorkflowPhase::Found,
        scanned_code: state.scanned_code.clone(),
        product: Some(product),
        last_error: None,
        in_flight: None,
        failed_operation: None,
        issued_requests: state.issued_requests,
    }
}

fn failed(state: &WorkflowState, operation: Operation, error: &ProductError) -> WorkflowState {
    WorkflowState {
        phase: WorkflowPhase::Error,
        scanned_code: state.scanned_code.clone(),
        product: None,
        last_error: Some(error.to_string()),
        in_flight: None,
        failed_operation: Some(operation),
        issued_requests: state.issued_requests,
    }
}

// The request counter survives a reset so completions issued before it stay stale.
fn reset(state: &WorkflowState) -> WorkflowState {
    WorkflowState {
        issued_requests: state.issued_requests,
        ..WorkflowState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ServiceError;
    use bigdecimal::BigDecimal;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn apply(state: &WorkflowState, event: WorkflowEvent) -> Step {
        transition(state, event).unwrap()
    }

    fn widget() -> Product {
        Product::from_remote(
            Some(7),
            ProductCode::new("ABC123").unwrap(),
            "Widget".to_string(),
            None,
            BigDecimal::from_str("12.50").unwrap(),
            3,
            0,
        )
    }

    fn network_error() -> ProductError {
        ProductError::Service(ServiceError::network("operation timed out"))
    }

    fn resolving(code: &str) -> (WorkflowState, RequestId) {
        let step = apply(
            &WorkflowState::new(),
            WorkflowEvent::ScanCompleted(code.to_string()),
        );
        let request = step.effect.as_ref().map(Effect::request).unwrap();
        (step.state, request)
    }

    fn not_found(code: &str) -> WorkflowState {
        let (state, request) = resolving(code);
        apply(
            &state,
            WorkflowEvent::LookupSucceeded {
                request,
                product: None,
            },
        )
        .state
    }

    fn found_state(code: &str) -> WorkflowState {
        let (state, request) = resolving(code);
        let product = Product {
            id: Some(7),
            ..Product::draft(ProductCode::new(code).unwrap())
        };
        apply(
            &state,
            WorkflowEvent::LookupSucceeded {
                request,
                product: Some(product),
            },
        )
        .state
    }

    fn errored(code: &str) -> WorkflowState {
        let (state, request) = resolving(code);
        apply(
            &state,
            WorkflowEvent::LookupFailed {
                request,
                error: network_error(),
            },
        )
        .state
    }

    fn creating(code: &str) -> (WorkflowState, RequestId, Product) {
        let step = apply(&not_found(code), WorkflowEvent::CreateRequested);
        match step.effect {
            Some(Effect::Create { request, draft }) => (step.state, request, draft),
            other => panic!("expected create effect, got {:?}", other),
        }
    }

    #[test]
    fn should_start_idle() {
        let state = WorkflowState::new();
        assert_eq!(state.phase(), WorkflowPhase::Idle);
        assert!(state.scanned_code().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn should_enter_resolving_and_request_lookup_when_scan_completes() {
        let step = apply(
            &WorkflowState::new(),
            WorkflowEvent::ScanCompleted("ABC123".to_string()),
        );

        assert_eq!(step.state.phase(), WorkflowPhase::Resolving);
        assert!(step.state.is_loading());
        assert_eq!(step.state.scanned_code().unwrap().as_str(), "ABC123");
        assert!(step.state.product().is_none());
        assert!(step.state.last_error().is_none());
        assert!(matches!(
            step.effect,
            Some(Effect::Lookup { ref code, .. }) if code.as_str() == "ABC123"
        ));
    }

    #[test]
    fn should_ignore_empty_scan() {
        let state = WorkflowState::new();
        let result = transition(&state, WorkflowEvent::ScanCompleted(String::new()));
        assert_eq!(result, Err(WorkflowError::EmptyCode));
    }

    #[test]
    fn should_reject_scan_while_loading() {
        let (state, _) = resolving("ABC123");
        let result = transition(&state, WorkflowEvent::ScanCompleted("OTHER".to_string()));
        assert_eq!(result, Err(WorkflowError::Busy));
    }

    #[test]
    fn should_become_found_when_lookup_returns_product() {
        let (state, request) = resolving("ABC123");

        let step = apply(
            &state,
            WorkflowEvent::LookupSucceeded {
                request,
                product: Some(widget()),
            },
        );

        let product = step.state.product().unwrap();
        assert_eq!(step.state.phase(), WorkflowPhase::Found);
        assert!(!step.state.is_loading());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, BigDecimal::from_str("12.50").unwrap());
        assert_eq!(product.stock_count, 3);
        assert!(step.effect.is_none());
    }

    #[test]
    fn should_become_not_found_when_lookup_misses() {
        let state = not_found("ZZZ999");

        assert_eq!(state.phase(), WorkflowPhase::NotFound);
        assert!(!state.is_loading());
        assert!(state.last_error().is_none());
        assert!(state.show_create_option());
        assert!(!state.show_error());
        assert_eq!(state.scanned_code().unwrap().as_str(), "ZZZ999");
    }

    #[test]
    fn should_become_error_when_lookup_fails() {
        let (state, request) = resolving("NET-FAIL");

        let step = apply(
            &state,
            WorkflowEvent::LookupFailed {
                request,
                error: network_error(),
            },
        );

        assert_eq!(step.state.phase(), WorkflowPhase::Error);
        assert!(!step.state.is_loading());
        assert!(step.state.show_error());
        assert!(!step.state.last_error().unwrap().is_empty());
        assert_eq!(step.state.failed_operation(), Some(Operation::Lookup));
    }

    #[test]
    fn should_allow_rescan_after_error() {
        let (state, request) = resolving("NET-FAIL");
        let errored = apply(
            &state,
            WorkflowEvent::LookupFailed {
                request,
                error: network_error(),
            },
        )
        .state;

        let step = apply(&errored, WorkflowEvent::ScanCompleted("NET-FAIL".to_string()));

        assert_eq!(step.state.phase(), WorkflowPhase::Resolving);
        assert!(step.state.last_error().is_none());
        assert_ne!(step.state.in_flight(), Some(request));
    }

    #[test]
    fn should_request_creation_of_draft_from_not_found() {
        let (state, _, draft) = creating("ZZZ999");

        assert_eq!(state.phase(), WorkflowPhase::Creating);
        assert!(state.is_loading());
        assert_eq!(draft.code.as_str(), "ZZZ999");
        assert_eq!(draft.id, None);
        assert_eq!(draft.stock_count, 0);
        assert_eq!(draft.ordered_count, 0);
    }

    #[test]
    fn should_reject_create_outside_not_found() {
        let (resolving_state, _) = resolving("ABC123");
        let (creating_state, _, _) = creating("ZZZ999");
        let states = [
            WorkflowState::new(),
            resolving_state,
            found_state("ABC123"),
            errored("NET-FAIL"),
            creating_state,
        ];

        for state in states {
            let was_loading = state.is_loading();

            let result = transition(&state, WorkflowEvent::CreateRequested);

            assert_eq!(result, Err(WorkflowError::CreateUnavailable));
            assert_eq!(state.is_loading(), was_loading);
        }
    }

    #[test]
    fn should_keep_scanned_code_verbatim() {
        let step = apply(
            &WorkflowState::new(),
            WorkflowEvent::ScanCompleted(" ABC123 ".to_string()),
        );

        assert_eq!(step.state.scanned_code().unwrap().as_str(), " ABC123 ");
    }

    #[test]
    fn should_ignore_empty_scan_in_every_settled_state() {
        let states = [
            WorkflowState::new(),
            found_state("ABC123"),
            not_found("ZZZ999"),
            errored("NET-FAIL"),
        ];

        for state in states {
            let result = transition(&state, WorkflowEvent::ScanCompleted(String::new()));
            assert_eq!(result, Err(WorkflowError::EmptyCode));
        }
    }

    #[test]
    fn should_become_found_when_create_succeeds() {
        let (state, request, draft) = creating("ZZZ999");
        let created = Product {
            id: Some(42),
            ..draft
        };

        let step = apply(
            &state,
            WorkflowEvent::CreateSucceeded {
                request,
                product: created,
            },
        );

        assert_eq!(step.state.phase(), WorkflowPhase::Found);
        assert_eq!(step.state.product().unwrap().id, Some(42));
        assert!(!step.state.is_loading());
    }

    #[test]
    fn should_keep_code_and_retry_creation_when_create_fails() {
        let (state, request, _) = creating("ZZZ999");
        let errored = apply(
            &state,
            WorkflowEvent::CreateFailed {
                request,
                error: ProductError::Service(ServiceError::server(500)),
            },
        )
        .state;

        assert_eq!(errored.phase(), WorkflowPhase::Error);
        assert_eq!(errored.scanned_code().unwrap().as_str(), "ZZZ999");
        assert_eq!(errored.failed_operation(), Some(Operation::Create));

        let retry = apply(&errored, WorkflowEvent::RetryRequested);
        assert_eq!(retry.state.phase(), WorkflowPhase::Creating);
        assert!(matches!(
            retry.effect,
            Some(Effect::Create { ref draft, .. }) if draft.code.as_str() == "ZZZ999"
        ));
    }

    #[test]
    fn should_retry_lookup_after_lookup_failure() {
        let (state, request) = resolving("NET-FAIL");
        let errored = apply(
            &state,
            WorkflowEvent::LookupFailed {
                request,
                error: network_error(),
            },
        )
        .state;

        let retry = apply(&errored, WorkflowEvent::RetryRequested);

        assert_eq!(retry.state.phase(), WorkflowPhase::Resolving);
        assert!(matches!(retry.effect, Some(Effect::Lookup { .. })));
    }

    #[test]
    fn should_reject_retry_outside_error() {
        let result = transition(&not_found("ZZZ999"), WorkflowEvent::RetryRequested);
        assert_eq!(result, Err(WorkflowError::NothingToRetry));
    }

    #[test]
    fn should_discard_completion_superseded_by_reset() {
        let (state, old_request) = resolving("ABC123");
        let idle = apply(&state, WorkflowEvent::Reset).state;
        let (rescanned, new_request) = {
            let step = apply(&idle, WorkflowEvent::ScanCompleted("ABC123".to_string()));
            let request = step.effect.as_ref().map(Effect::request).unwrap();
            (step.state, request)
        };

        let stale = transition(
            &rescanned,
            WorkflowEvent::LookupSucceeded {
                request: old_request,
                product: Some(widget()),
            },
        );

        assert_ne!(old_request, new_request);
        assert_eq!(stale, Err(WorkflowError::StaleCompletion));
    }

    #[test]
    fn should_reject_completion_for_other_phase() {
        let (state, request) = resolving("ABC123");
        let result = transition(
            &state,
            WorkflowEvent::CreateSucceeded {
                request,
                product: widget(),
            },
        );
        assert_eq!(result, Err(WorkflowError::UnexpectedCompletion));
    }

    #[test]
    fn should_reset_from_any_state_to_idle() {
        let (resolving_state, _) = resolving("ABC123");
        let (creating_state, _, _) = creating("ZZZ999");

        for state in [resolving_state, not_found("X1"), creating_state] {
            let step = apply(&state, WorkflowEvent::Reset);
            assert_eq!(step.state.phase(), WorkflowPhase::Idle);
            assert!(step.state.scanned_code().is_none());
            assert!(step.state.in_flight().is_none());
            assert!(!step.state.is_loading());
            assert!(step.effect.is_none());
        }
    }

    #[test]
    fn should_be_idempotent_when_reset_twice() {
        let once = apply(&not_found("ZZZ999"), WorkflowEvent::Reset).state;
        let twice = apply(&once, WorkflowEvent::Reset).state;
        assert_eq!(once, twice);
        assert_eq!(twice.phase(), WorkflowPhase::Idle);
    }

    proptest! {
        #[test]
        fn scan_from_idle_always_resolves_the_scanned_code(
            code in any::<String>().prop_filter("non-empty", |c| !c.is_empty())
        ) {
            let step = transition(&WorkflowState::new(), WorkflowEvent::ScanCompleted(code.clone())).unwrap();
            prop_assert_eq!(step.state.phase(), WorkflowPhase::Resolving);
            prop_assert_eq!(step.state.scanned_code().map(|c| c.as_str()), Some(code.as_str()));
            prop_assert!(step.effect.is_some());
        }

        #[test]
        fn settled_calls_never_leave_loading(found in any::<bool>(), fail in any::<bool>()) {
            let (state, request) = resolving("ABC123");
            let event = if fail {
                WorkflowEvent::LookupFailed { request, error: network_error() }
            } else {
                WorkflowEvent::LookupSucceeded { request, product: found.then(widget) }
            };
            let step = transition(&state, event).unwrap();
            prop_assert!(!step.state.is_loading());
            prop_assert!(step.state.in_flight().is_none());
        }
    }
}
