//! Content service trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{DeleteOptions, NodeRef};

/// Node operations offered by the content service.
///
/// The REST implementation lives in `docdesk-client`. Failures carry the
/// HTTP status in [`crate::AppError::status`] when the service answered.
#[async_trait]
pub trait ContentApi: Send + Sync + 'static {
    /// Fetch a node by id.
    async fn get_node(&self, node_id: &str) -> AppResult<NodeRef>;

    /// Copy `node_id` into `target_parent_id`, returning the created node.
    ///
    /// Fails with a conflict error when a node with the same name already
    /// exists in the target folder.
    async fn copy_node(&self, node_id: &str, target_parent_id: &str) -> AppResult<NodeRef>;

    /// Delete a node.
    async fn delete_node(&self, node_id: &str, options: DeleteOptions) -> AppResult<()>;

    /// List the direct children of a folder.
    async fn list_children(&self, folder_id: &str) -> AppResult<Vec<NodeRef>>;

    /// Find a direct child of `folder_id` by exact name.
    async fn find_child_by_name(&self, folder_id: &str, name: &str) -> AppResult<Option<NodeRef>> {
        Ok(self
            .list_children(folder_id)
            .await?
            .into_iter()
            .find(|child| child.name == name))
    }
}
