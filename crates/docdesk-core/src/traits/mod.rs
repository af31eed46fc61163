//! Collaborator traits defined in `docdesk-core` and implemented by other
//! crates (or by test fakes).

pub mod content;
pub mod destination;
pub mod notifier;
pub mod translator;

pub use content::ContentApi;
pub use destination::{DestinationPicker, FixedDestination};
pub use notifier::{Notifier, SnackAction, SnackActionHandle};
pub use translator::Translator;
