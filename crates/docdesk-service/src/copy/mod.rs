//! Node copy with undo.
//!
//! [`NodeActionsService`] performs the copy and publishes the created items,
//! [`CopyNodeAction`] turns a gesture into a copy plus notifications, and
//! [`UndoHandler`] removes the copies again.

pub mod action;
pub mod classifier;
pub mod messages;
pub mod service;
pub mod undo;

pub use action::{CopyNodeAction, CopyReport, CopyState};
pub use classifier::{ErrorClass, classify};
pub use service::{CopyOutcome, NodeActionsService};
pub use undo::{UndoHandler, UndoReport};
