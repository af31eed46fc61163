//! Shared in-memory collaborators for copy workflow tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use docdesk_core::config::notification::NotificationConfig;
use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_core::traits::{ContentApi, DestinationPicker, Notifier, SnackAction};
use docdesk_core::types::{DeleteOptions, NodeRef};
use docdesk_service::{CopyNodeAction, IdentityTranslator, NodeActionsService, UndoHandler};

/// Destination folder used by [`StaticPicker::destination`].
pub const DESTINATION: &str = "destination-folder";

/// Content service fake that records every call.
#[derive(Default)]
pub struct FakeContentApi {
    /// `(node_id, target_parent_id)` per copy call.
    pub copies: Mutex<Vec<(String, String)>>,
    /// `(node_id, options)` per delete call.
    pub deletes: Mutex<Vec<(String, DeleteOptions)>>,
    copy_errors: HashMap<String, AppError>,
    delete_errors: HashMap<String, AppError>,
    children: HashMap<String, Vec<NodeRef>>,
}

impl FakeContentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make copies of `node_id` fail with `err`.
    pub fn fail_copy(mut self, node_id: &str, err: AppError) -> Self {
        self.copy_errors.insert(node_id.to_string(), err);
        self
    }

    /// Make deletes of `node_id` fail with `err`.
    pub fn fail_delete(mut self, node_id: &str, err: AppError) -> Self {
        self.delete_errors.insert(node_id.to_string(), err);
        self
    }

    /// Register the children of a folder.
    pub fn with_children(mut self, folder_id: &str, children: Vec<NodeRef>) -> Self {
        self.children.insert(folder_id.to_string(), children);
        self
    }

    pub async fn copy_calls(&self) -> Vec<(String, String)> {
        self.copies.lock().await.clone()
    }

    pub async fn delete_calls(&self) -> Vec<(String, DeleteOptions)> {
        self.deletes.lock().await.clone()
    }
}

#[async_trait]
impl ContentApi for FakeContentApi {
    async fn get_node(&self, node_id: &str) -> AppResult<NodeRef> {
        Ok(NodeRef::new(node_id, node_id))
    }

    async fn copy_node(&self, node_id: &str, target_parent_id: &str) -> AppResult<NodeRef> {
        self.copies
            .lock()
            .await
            .push((node_id.to_string(), target_parent_id.to_string()));

        if let Some(err) = self.copy_errors.get(node_id) {
            return Err(err.clone());
        }

        let id = format!("copy-of-{node_id}");
        Ok(NodeRef::new(id.clone(), id).with_parent(target_parent_id))
    }

    async fn delete_node(&self, node_id: &str, options: DeleteOptions) -> AppResult<()> {
        self.deletes
            .lock()
            .await
            .push((node_id.to_string(), options));

        match self.delete_errors.get(node_id) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn list_children(&self, folder_id: &str) -> AppResult<Vec<NodeRef>> {
        Ok(self.children.get(folder_id).cloned().unwrap_or_default())
    }
}

/// Picker answering with a fixed result.
pub struct StaticPicker(pub Option<String>);

impl StaticPicker {
    pub fn destination() -> Self {
        Self(Some(DESTINATION.to_string()))
    }

    pub fn cancelled() -> Self {
        Self(None)
    }
}

#[async_trait]
impl DestinationPicker for StaticPicker {
    async fn pick_destination(&self, _selection: &[NodeRef]) -> AppResult<Option<String>> {
        Ok(self.0.clone())
    }
}

/// Picker that holds back selections starting with `held_id` until the
/// gate is opened.
pub struct GatedPicker {
    pub held_id: String,
    pub gate: Arc<Notify>,
}

#[async_trait]
impl DestinationPicker for GatedPicker {
    async fn pick_destination(&self, selection: &[NodeRef]) -> AppResult<Option<String>> {
        if selection.first().is_some_and(|n| n.id == self.held_id) {
            self.gate.notified().await;
        }
        Ok(Some(DESTINATION.to_string()))
    }
}

/// What the user does with every presented message.
#[derive(Debug, Clone, Copy)]
pub enum UserResponse {
    /// Let the message time out.
    Ignore,
    /// Click the action.
    ClickAction,
}

/// Notifier recording `(message, action, duration_ms)` per call.
pub struct RecordingNotifier {
    pub calls: Mutex<Vec<(String, String, u64)>>,
    response: UserResponse,
}

impl RecordingNotifier {
    pub fn new(response: UserResponse) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    pub async fn all_args(&self) -> Vec<(String, String, u64)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn open_snack_message_action(
        &self,
        message: &str,
        action: &str,
        duration: Duration,
    ) -> AppResult<SnackAction> {
        self.calls.lock().await.push((
            message.to_string(),
            action.to_string(),
            duration.as_millis() as u64,
        ));

        Ok(match self.response {
            UserResponse::Ignore => SnackAction::dismissed(),
            UserResponse::ClickAction => SnackAction::invoked(),
        })
    }
}

/// A wired copy action plus handles on its fakes.
pub struct Harness {
    pub action: CopyNodeAction,
    pub service: NodeActionsService,
    pub content: Arc<FakeContentApi>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(
        content: FakeContentApi,
        picker: impl DestinationPicker,
        response: UserResponse,
    ) -> Self {
        Self::with_config(content, picker, response, NotificationConfig::default())
    }

    pub fn with_config(
        content: FakeContentApi,
        picker: impl DestinationPicker,
        response: UserResponse,
        config: NotificationConfig,
    ) -> Self {
        let content = Arc::new(content);
        let notifier = Arc::new(RecordingNotifier::new(response));

        let service =
            NodeActionsService::new(content.clone(), Arc::new(picker), config.event_buffer);
        let undo = UndoHandler::new(content.clone());
        let action = CopyNodeAction::new(
            service.clone(),
            undo,
            notifier.clone(),
            Arc::new(IdentityTranslator),
            config,
        );

        Self {
            action,
            service,
            content,
            notifier,
        }
    }
}

/// Shorthand for an expected notifier call.
pub fn call(message: &str, action: &str, duration_ms: u64) -> (String, String, u64) {
    (message.to_string(), action.to_string(), duration_ms)
}

/// A content service error body carrying `status`.
pub fn status_body(status: u16) -> AppError {
    AppError::external_service(format!(r#"{{"error":{{"statusCode":{status}}}}}"#))
}
