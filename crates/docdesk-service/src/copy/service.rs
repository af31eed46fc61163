//! Copy orchestration against the content service.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{info, warn};
use uuid::Uuid;

use docdesk_core::error::AppError;
use docdesk_core::events::ContentCopied;
use docdesk_core::traits::{ContentApi, DestinationPicker};
use docdesk_core::types::{CopiedItem, NodeRef};

use super::messages;

/// Result of a [`NodeActionsService::copy_nodes`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    /// [`messages::COPY_SUCCESS`] on success, empty when the user cancelled
    /// the destination pick.
    pub message_key: String,
    /// Batch identifier; matches the published [`ContentCopied::batch_id`].
    pub batch_id: Uuid,
    /// Created items, the same list published in [`ContentCopied::items`].
    pub items: Vec<CopiedItem>,
}

impl CopyOutcome {
    /// Returns `true` if the batch was copied.
    pub fn is_success(&self) -> bool {
        !self.message_key.is_empty()
    }
}

/// Copies nodes and publishes what was created.
#[derive(Clone)]
pub struct NodeActionsService {
    /// Content service.
    content: Arc<dyn ContentApi>,
    /// Destination folder selection.
    picker: Arc<dyn DestinationPicker>,
    /// Content-copied broadcast, one event per successful batch.
    content_copied: broadcast::Sender<ContentCopied>,
}

impl NodeActionsService {
    /// Creates a new node actions service. `event_buffer` is the capacity of
    /// the content-copied channel.
    pub fn new(
        content: Arc<dyn ContentApi>,
        picker: Arc<dyn DestinationPicker>,
        event_buffer: usize,
    ) -> Self {
        let (content_copied, _) = broadcast::channel(event_buffer.max(1));
        Self {
            content,
            picker,
            content_copied,
        }
    }

    /// Subscribe to content-copied events.
    pub fn subscribe(&self) -> broadcast::Receiver<ContentCopied> {
        self.content_copied.subscribe()
    }

    /// Copy `selection` into a folder chosen by the destination picker.
    ///
    /// Nodes are copied one after another in selection order. The first
    /// failure aborts the batch and nothing is published for it; copies that
    /// already succeeded stay in place.
    pub async fn copy_nodes(&self, selection: &[NodeRef]) -> Result<CopyOutcome, AppError> {
        if selection.is_empty() {
            return Err(AppError::validation("Nothing selected to copy"));
        }

        let batch_id = Uuid::new_v4();

        let Some(target) = self.picker.pick_destination(selection).await? else {
            info!(batch_id = %batch_id, "Copy cancelled, no destination picked");
            return Ok(CopyOutcome {
                message_key: String::new(),
                batch_id,
                items: Vec::new(),
            });
        };

        let mut items = Vec::with_capacity(selection.len());
        for node in selection {
            let item = self.copy_one(node, &target).await.inspect_err(|e| {
                warn!(
                    batch_id = %batch_id,
                    node_id = %node.id,
                    target = %target,
                    error = %e,
                    "Node copy failed"
                );
            })?;
            items.push(item);
        }

        let created: usize = items.iter().map(CopiedItem::len).sum();
        let receivers = self
            .content_copied
            .send(ContentCopied::new(batch_id, items.clone()))
            .unwrap_or(0);

        info!(
            batch_id = %batch_id,
            target = %target,
            selected = selection.len(),
            created,
            receivers,
            "Nodes copied"
        );

        Ok(CopyOutcome {
            message_key: messages::COPY_SUCCESS.to_string(),
            batch_id,
            items,
        })
    }

    /// Copy a single node. A folder whose name is already taken at the
    /// destination has its children copied into the existing folder.
    async fn copy_one(&self, node: &NodeRef, target: &str) -> Result<CopiedItem, AppError> {
        match self.content.copy_node(&node.id, target).await {
            Ok(created) => Ok(CopiedItem::Single(created)),
            Err(conflict) if conflict.is_conflict() && node.is_folder => self
                .copy_into_existing(node, target, conflict)
                .await
                .map(CopiedItem::Nested),
            Err(e) => Err(e),
        }
    }

    async fn copy_into_existing(
        &self,
        folder: &NodeRef,
        target: &str,
        conflict: AppError,
    ) -> Result<Vec<NodeRef>, AppError> {
        let Some(existing) = self.content.find_child_by_name(target, &folder.name).await? else {
            return Err(conflict);
        };

        let children = self.content.list_children(&folder.id).await?;
        let mut created = Vec::with_capacity(children.len());
        for child in &children {
            created.push(self.content.copy_node(&child.id, &existing.id).await?);
        }

        info!(
            folder_id = %folder.id,
            existing_id = %existing.id,
            children = created.len(),
            "Copied folder contents into existing destination folder"
        );

        Ok(created)
    }
}
