//! Copy destination selection.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::NodeRef;

/// Chooses the folder a selection gets copied into.
#[async_trait]
pub trait DestinationPicker: Send + Sync + 'static {
    /// Returns the target folder id, or `None` when the user cancelled.
    async fn pick_destination(&self, selection: &[NodeRef]) -> AppResult<Option<String>>;
}

/// A picker that always answers with the same folder.
#[derive(Debug, Clone)]
pub struct FixedDestination(pub String);

#[async_trait]
impl DestinationPicker for FixedDestination {
    async fn pick_destination(&self, _selection: &[NodeRef]) -> AppResult<Option<String>> {
        Ok(Some(self.0.clone()))
    }
}
