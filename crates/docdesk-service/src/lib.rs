//! # docdesk-service
//!
//! Client-side workflows for DocDesk. The copy workflow copies a selection
//! of nodes, reports the outcome through a [`docdesk_core::traits::Notifier`],
//! and offers an Undo that permanently deletes the copies.
//!
//! Services follow constructor injection: all collaborators are provided
//! at construction time via `Arc` references.

pub mod copy;
pub mod translation;
pub mod viewer;

pub use copy::{
    CopyNodeAction, CopyOutcome, CopyReport, CopyState, ErrorClass, NodeActionsService,
    UndoHandler, UndoReport,
};
pub use translation::{CatalogTranslator, IdentityTranslator};
pub use viewer::build_viewer_url;
