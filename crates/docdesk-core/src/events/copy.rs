//! Content-copied event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::CopiedItem;

/// Published once per successful copy batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCopied {
    /// Identifies the `copy_nodes` call that produced this event.
    pub batch_id: Uuid,
    /// Created items, one entry per selected node, in selection order.
    pub items: Vec<CopiedItem>,
    /// When the batch completed.
    pub timestamp: DateTime<Utc>,
}

impl ContentCopied {
    /// Create a new event stamped with the current time.
    pub fn new(batch_id: Uuid, items: Vec<CopiedItem>) -> Self {
        Self {
            batch_id,
            items,
            timestamp: Utc::now(),
        }
    }
}
