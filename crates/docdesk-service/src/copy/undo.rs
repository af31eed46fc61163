//! Undo of a copy batch.

use std::sync::Arc;

use tracing::{info, warn};

use docdesk_core::error::AppError;
use docdesk_core::traits::ContentApi;
use docdesk_core::types::{CopiedItem, DeleteOptions};

/// Outcome of an undo pass.
#[derive(Debug, Clone, Default)]
pub struct UndoReport {
    /// Ids of the nodes that were deleted, in deletion order.
    pub deleted: Vec<String>,
    /// Nodes whose deletion failed, with the failure.
    pub failures: Vec<(String, AppError)>,
}

impl UndoReport {
    /// The first failure of the pass, if any.
    pub fn first_error(&self) -> Option<&AppError> {
        self.failures.first().map(|(_, err)| err)
    }

    /// Returns `true` if every node was deleted.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Permanently deletes the nodes created by a copy batch.
#[derive(Clone)]
pub struct UndoHandler {
    /// Content service.
    content: Arc<dyn ContentApi>,
}

impl UndoHandler {
    /// Creates a new undo handler.
    pub fn new(content: Arc<dyn ContentApi>) -> Self {
        Self { content }
    }

    /// Delete every node in `items`, flattening one level of nesting.
    ///
    /// Each delete is independent: a failure is recorded and the remaining
    /// nodes are still attempted. Nothing is restored on failure.
    pub async fn undo(&self, items: &[CopiedItem]) -> UndoReport {
        let mut report = UndoReport::default();

        for node in CopiedItem::flatten(items) {
            match self
                .content
                .delete_node(&node.id, DeleteOptions::permanent())
                .await
            {
                Ok(()) => report.deleted.push(node.id.clone()),
                Err(e) => {
                    warn!(node_id = %node.id, error = %e, "Undo delete failed");
                    report.failures.push((node.id.clone(), e));
                }
            }
        }

        info!(
            deleted = report.deleted.len(),
            failed = report.failures.len(),
            "Copy undone"
        );

        report
    }
}
