//! Copy gesture handling: copy, notify, and optionally undo.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use docdesk_core::config::notification::NotificationConfig;
use docdesk_core::error::AppError;
use docdesk_core::traits::{Notifier, SnackAction, Translator};
use docdesk_core::types::{CopiedItem, NodeRef};

use super::classifier::classify;
use super::messages;
use super::service::NodeActionsService;
use super::undo::{UndoHandler, UndoReport};

/// Progress of a copy gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    /// No copy in flight.
    Idle,
    /// Copy requested, waiting for the content service.
    Requested,
    /// Copy succeeded and the success message was presented.
    Succeeded,
    /// Copy failed and the error message was presented.
    Failed,
}

/// What a single gesture did.
#[derive(Debug, Clone)]
pub struct CopyReport {
    /// [`CopyState::Succeeded`] or [`CopyState::Failed`].
    pub outcome: CopyState,
    /// Key of the message presented for the copy.
    pub message_key: &'static str,
    /// Items created by the copy (empty on failure).
    pub created: Vec<CopiedItem>,
    /// Undo result, when the user picked the Undo action.
    pub undo: Option<UndoReport>,
    /// Key of the message presented for a failed undo.
    pub undo_message_key: Option<&'static str>,
}

/// Turns a copy gesture into a copy, a notification, and an optional undo.
///
/// Copy and delete failures never escape [`CopyNodeAction::trigger`]; they
/// are classified and presented. Only presenter failures are returned.
pub struct CopyNodeAction {
    /// Copy orchestrator.
    service: NodeActionsService,
    /// Undo of created nodes.
    undo: UndoHandler,
    /// Snack-bar presenter.
    notifier: Arc<dyn Notifier>,
    /// Message key translation.
    translator: Arc<dyn Translator>,
    /// Durations and action label.
    config: NotificationConfig,
    /// Current gesture state.
    state: watch::Sender<CopyState>,
    /// Gestures between `Requested` and their final transition.
    in_flight: AtomicUsize,
}

impl CopyNodeAction {
    /// Creates a new copy action.
    pub fn new(
        service: NodeActionsService,
        undo: UndoHandler,
        notifier: Arc<dyn Notifier>,
        translator: Arc<dyn Translator>,
        config: NotificationConfig,
    ) -> Self {
        let (state, _) = watch::channel(CopyState::Idle);
        Self {
            service,
            undo,
            notifier,
            translator,
            config,
            state,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Current gesture state.
    ///
    /// Overlapping gestures share this state: it shows the latest transition
    /// of any of them, and returns to [`CopyState::Idle`] only once every
    /// gesture has finished.
    pub fn state(&self) -> CopyState {
        *self.state.borrow()
    }

    /// Watch state transitions.
    pub fn watch_state(&self) -> watch::Receiver<CopyState> {
        self.state.subscribe()
    }

    /// Copy `selection` and report the outcome.
    ///
    /// On success the message carries the Undo action; this call resolves
    /// once the presenter reports whether the action was picked, and runs
    /// the undo first when it was.
    pub async fn trigger(&self, selection: &[NodeRef]) -> Result<CopyReport, AppError> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(CopyState::Requested);

        let copied = match self.service.copy_nodes(selection).await {
            Ok(outcome) if outcome.is_success() => Ok(outcome.items),
            Ok(_) => Err(AppError::internal("Copy finished without a success message")),
            Err(e) => Err(e),
        };

        let report = match copied {
            Ok(items) => self.on_copied(selection.len(), items).await,
            Err(err) => self.on_copy_failed(&err).await,
        };

        if self.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.state.send_replace(CopyState::Idle);
        }
        report
    }

    async fn on_copied(
        &self,
        selected: usize,
        items: Vec<CopiedItem>,
    ) -> Result<CopyReport, AppError> {
        let message_key = messages::node_copy_key(selected);
        let action = self
            .present(
                message_key,
                selected,
                &self.config.undo_label,
                self.config.success_duration(),
            )
            .await?;
        self.state.send_replace(CopyState::Succeeded);

        let mut report = CopyReport {
            outcome: CopyState::Succeeded,
            message_key,
            created: items,
            undo: None,
            undo_message_key: None,
        };

        if !action.on_action().await {
            debug!("Undo window closed without action");
            return Ok(report);
        }

        let undo = self.undo.undo(&report.created).await;
        if let Some(err) = undo.first_error() {
            let key = classify(err).message_key();
            self.present(key, 0, "", self.config.error_duration()).await?;
            report.undo_message_key = Some(key);
        }
        report.undo = Some(undo);

        Ok(report)
    }

    async fn on_copy_failed(&self, err: &AppError) -> Result<CopyReport, AppError> {
        let message_key = classify(err).message_key();
        warn!(error = %err, message_key, "Copy failed");

        self.present(message_key, 0, "", self.config.error_duration()).await?;
        self.state.send_replace(CopyState::Failed);

        Ok(CopyReport {
            outcome: CopyState::Failed,
            message_key,
            created: Vec::new(),
            undo: None,
            undo_message_key: None,
        })
    }

    async fn present(
        &self,
        key: &str,
        count: usize,
        action: &str,
        duration: Duration,
    ) -> Result<SnackAction, AppError> {
        let message = self.translator.translate(key, count);
        info!(key, action, duration_ms = duration.as_millis() as u64, "Presenting message");
        self.notifier
            .open_snack_message_action(&message, action, duration)
            .await
    }
}
