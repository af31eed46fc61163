//! # docdesk-core
//!
//! Core crate for DocDesk. Contains the collaborator traits (content API,
//! notifier, translator, destination picker), configuration schemas,
//! node reference types, the content-copied event, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other DocDesk crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
