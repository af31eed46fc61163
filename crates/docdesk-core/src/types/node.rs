//! Content node references and copy results.

use serde::{Deserialize, Serialize};

/// A reference to a content node (file or folder) as returned by the
/// content service. Identity is [`NodeRef::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRef {
    /// Node identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Identifier of the containing folder, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Whether the node is a folder.
    #[serde(default)]
    pub is_folder: bool,
}

impl NodeRef {
    /// Create a file reference with no known parent.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            is_folder: false,
        }
    }

    /// Create a folder reference with no known parent.
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_folder: true,
            ..Self::new(id, name)
        }
    }

    /// Set the parent folder.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// One entry of a copy batch.
///
/// A copy of a node normally creates a single node. When a folder with the
/// same name already exists at the destination, its children are copied into
/// that folder instead and the entry lists every created child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CopiedItem {
    /// A single newly created node.
    Single(NodeRef),
    /// Children copied into an already existing destination folder.
    Nested(Vec<NodeRef>),
}

impl CopiedItem {
    /// Flatten one level of nesting, preserving order.
    pub fn flatten(items: &[CopiedItem]) -> Vec<&NodeRef> {
        items
            .iter()
            .flat_map(|item| match item {
                CopiedItem::Single(node) => std::slice::from_ref(node).iter(),
                CopiedItem::Nested(nodes) => nodes.iter(),
            })
            .collect()
    }

    /// Number of nodes this entry created.
    pub fn len(&self) -> usize {
        match self {
            CopiedItem::Single(_) => 1,
            CopiedItem::Nested(nodes) => nodes.len(),
        }
    }

    /// Returns `true` for a nested entry with no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Options for a node deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOptions {
    /// Skip the trash can and delete the node for good.
    pub permanent: bool,
}

impl DeleteOptions {
    /// Options for a permanent delete.
    pub fn permanent() -> Self {
        Self { permanent: true }
    }
}
