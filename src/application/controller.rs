use crate::application::workflow::PredictionWorkflow;
use crate::domain::coin::Coin;
use crate::domain::errors::{DirectoryError, FormError, PredictionError};
use crate::domain::form::FormField;
use crate::domain::ports::{CoinDirectoryProvider, PredictionService};
use crate::domain::prediction::PredictionResult;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};

/// Completions produced on the runtime, applied on the UI thread.
#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    DirectoryLoaded(Result<Vec<Coin>, DirectoryError>),
    PredictionSettled {
        generation: u64,
        outcome: Result<PredictionResult, PredictionError>,
    },
}

/// Called from the runtime after an event is queued (e.g. to request a repaint).
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Drives a `PredictionWorkflow` from a synchronous UI.
///
/// Network calls are spawned on the given tokio runtime; their results come
/// back over a channel and only touch the workflow inside `pump`.
pub struct WorkflowController {
    workflow: PredictionWorkflow,
    directory: Arc<dyn CoinDirectoryProvider>,
    prediction: Arc<dyn PredictionService>,
    runtime: Handle,
    event_tx: Sender<WorkflowEvent>,
    event_rx: Receiver<WorkflowEvent>,
    notifier: Option<Notifier>,
}

impl WorkflowController {
    pub fn new(
        directory: Arc<dyn CoinDirectoryProvider>,
        prediction: Arc<dyn PredictionService>,
        runtime: Handle,
    ) -> Self {
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        Self {
            workflow: PredictionWorkflow::new(),
            directory,
            prediction,
            runtime,
            event_tx,
            event_rx,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn workflow(&self) -> &PredictionWorkflow {
        &self.workflow
    }

    /// Fetches trending coins. Only the first call per controller does anything.
    pub fn load_coin_directory(&mut self) {
        if !self.workflow.begin_directory_load() {
            return;
        }

        info!("Loading trending coins...");
        let directory = Arc::clone(&self.directory);
        let tx = self.event_tx.clone();
        let notifier = self.notifier.clone();
        self.runtime.spawn(async move {
            let outcome = directory.fetch_trending().await;
            deliver(&tx, notifier.as_ref(), WorkflowEvent::DirectoryLoaded(outcome));
        });
    }

    pub fn select_coin(&mut self, id: &str) {
        self.workflow.select_coin(id);
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.workflow.update_field(field, value);
    }

    pub fn dismiss_error(&mut self) {
        self.workflow.dismiss_error();
    }

    /// Validates the form and sends one prediction request. Returns the
    /// generation the eventual result will be tagged with.
    pub fn submit(&mut self) -> Result<u64, FormError> {
        let ticket = self.workflow.begin_submit()?;

        let prediction = Arc::clone(&self.prediction);
        let tx = self.event_tx.clone();
        let notifier = self.notifier.clone();
        self.runtime.spawn(async move {
            let outcome = prediction.predict(&ticket.request).await;
            deliver(
                &tx,
                notifier.as_ref(),
                WorkflowEvent::PredictionSettled {
                    generation: ticket.generation,
                    outcome,
                },
            );
        });

        Ok(ticket.generation)
    }

    /// Applies every queued completion. Call once per frame.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Blocks up to `timeout` for the next completion, then drains the rest.
    /// For headless callers; never call this from inside the runtime.
    pub fn pump_blocking(&mut self, timeout: Duration) -> usize {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply(event);
                1 + self.pump()
            }
            Err(_) => 0,
        }
    }

    fn apply(&mut self, event: WorkflowEvent) {
        match event {
            WorkflowEvent::DirectoryLoaded(outcome) => {
                self.workflow.complete_directory_load(outcome);
            }
            WorkflowEvent::PredictionSettled {
                generation,
                outcome,
            } => {
                self.workflow.complete_submit(generation, outcome);
            }
        }
    }
}

fn deliver(tx: &Sender<WorkflowEvent>, notifier: Option<&Notifier>, event: WorkflowEvent) {
    if tx.send(event).is_err() {
        debug!("Workflow controller dropped, discarding completion");
        return;
    }
    if let Some(notify) = notifier {
        notify();
    }
}
