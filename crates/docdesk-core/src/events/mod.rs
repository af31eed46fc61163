//! Domain events emitted by DocDesk operations.
//!
//! Events are published on broadcast channels owned by the service that
//! produces them and consumed by any number of subscribers.

pub mod copy;

pub use copy::ContentCopied;
