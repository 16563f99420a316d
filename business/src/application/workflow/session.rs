use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::lookup::{
    LookupProductByCodeParams, LookupProductByCodeUseCase,
};
use crate::domain::scan::model::ScanResult;
use crate::domain::workflow::errors::SessionError;
use crate::domain::workflow::events::{Effect, WorkflowEvent};
use crate::domain::workflow::machine::transition;
use crate::domain::workflow::state::WorkflowState;

const COMMAND_BUFFER: usize = 16;

enum SessionMessage {
    Event(WorkflowEvent),
    Shutdown,
}

/// One running lookup/create workflow, scoped to the screen that started it.
///
/// A background task owns the [`WorkflowState`]. User commands and the
/// completions of remote calls reach it through the same channel, so
/// transitions apply one at a time. Every accepted transition is published
/// to subscribers.
pub struct WorkflowSession {
    commands: mpsc::Sender<SessionMessage>,
    state: watch::Receiver<WorkflowState>,
    task: Option<JoinHandle<()>>,
}

impl WorkflowSession {
    /// Spawns the session task. Must be called inside a Tokio runtime.
    pub fn start(
        lookup: Arc<dyn LookupProductByCodeUseCase>,
        create: Arc<dyn CreateProductUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let id = Uuid::new_v4();
        let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
        let (publisher, state) = watch::channel(WorkflowState::new());

        let runner = SessionRunner {
            id,
            state: WorkflowState::new(),
            receiver,
            completions: commands.clone(),
            publisher,
            lookup,
            create,
            logger: logger.clone(),
            in_flight: None,
        };

        logger.info(&format!("Workflow session {} started", id));
        let task = tokio::spawn(runner.run());

        Self {
            commands,
            state,
            task: Some(task),
        }
    }

    pub async fn scan_completed(&self, code: impl Into<String>) -> Result<(), SessionError> {
        self.send(WorkflowEvent::ScanCompleted(code.into())).await
    }

    /// Feeds the scanner's answer into the workflow. A cancelled scan changes nothing.
    pub async fn apply_scan(&self, result: ScanResult) -> Result<(), SessionError> {
        match result {
            ScanResult::Code(code) => self.scan_completed(code).await,
            ScanResult::Cancelled => Ok(()),
        }
    }

    pub async fn request_create(&self) -> Result<(), SessionError> {
        self.send(WorkflowEvent::CreateRequested).await
    }

    pub async fn retry(&self) -> Result<(), SessionError> {
        self.send(WorkflowEvent::RetryRequested).await
    }

    pub async fn reset(&self) -> Result<(), SessionError> {
        self.send(WorkflowEvent::Reset).await
    }

    /// Snapshot of the latest published state.
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.clone()
    }

    /// Stops the session. A call still in flight is aborted and its result dropped.
    pub async fn dispose(mut self) {
        let _ = self.commands.send(SessionMessage::Shutdown).await;
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    async fn send(&self, event: WorkflowEvent) -> Result<(), SessionError> {
        self.commands
            .send(SessionMessage::Event(event))
            .await
            .map_err(|_| SessionError::Closed)
    }
}

impl Drop for WorkflowSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct SessionRunner {
    id: Uuid,
    state: WorkflowState,
    receiver: mpsc::Receiver<SessionMessage>,
    completions: mpsc::Sender<SessionMessage>,
    publisher: watch::Sender<WorkflowState>,
    lookup: Arc<dyn LookupProductByCodeUseCase>,
    create: Arc<dyn CreateProductUseCase>,
    logger: Arc<dyn Logger>,
    in_flight: Option<JoinHandle<()>>,
}

impl SessionRunner {
    async fn run(mut self) {
        while let Some(message) = self.receiver.recv().await {
            match message {
                SessionMessage::Event(event) => self.apply(event),
                SessionMessage::Shutdown => break,
            }
        }
        self.logger
            .info(&format!("Workflow session {} disposed", self.id));
    }

    fn apply(&mut self, event: WorkflowEvent) {
        let name = event.name();
        let step = match transition(&self.state, event) {
            Ok(step) => step,
            Err(reason) => {
                self.logger.debug(&format!(
                    "Session {} ignored {} in {}: {}",
                    self.id,
                    name,
                    self.state.phase(),
                    reason
                ));
                return;
            }
        };

        self.logger.info(&format!(
            "Session {}: {} -> {} ({})",
            self.id,
            self.state.phase(),
            step.state.phase(),
            name
        ));
        if let Some(error) = step.state.last_error() {
            self.logger
                .warn(&format!("Session {} failed: {}", self.id, error));
        }

        if step.state.in_flight().is_none() {
            self.abort_in_flight();
        }
        self.state = step.state;
        self.publisher.send_replace(self.state.clone());

        if let Some(effect) = step.effect {
            self.spawn_effect(effect);
        }
    }

    fn spawn_effect(&mut self, effect: Effect) {
        self.abort_in_flight();
        let completions = self.completions.clone();

        let handle = match effect {
            Effect::Lookup { request, code } => {
                let use_case = self.lookup.clone();
                tokio::spawn(async move {
                    let event = match use_case.execute(LookupProductByCodeParams { code }).await {
                        Ok(product) => WorkflowEvent::LookupSucceeded { request, product },
                        Err(error) => WorkflowEvent::LookupFailed { request, error },
                    };
                    let _ = completions.send(SessionMessage::Event(event)).await;
                })
            }
            Effect::Create { request, draft } => {
                let use_case = self.create.clone();
                tokio::spawn(async move {
                    let event = match use_case.execute(CreateProductParams { draft }).await {
                        Ok(product) => WorkflowEvent::CreateSucceeded { request, product },
                        Err(error) => WorkflowEvent::CreateFailed { request, error },
                    };
                    let _ = completions.send(SessionMessage::Event(event)).await;
                })
            }
        };

        self.in_flight = Some(handle);
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for SessionRunner {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
