//! Shared domain types used across all DocDesk crates.

pub mod node;

pub use node::{CopiedItem, DeleteOptions, NodeRef};
