//! Transient notification presenter.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::result::AppResult;

/// Shows short-lived messages ("snack bars") with an optional action.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// Show `message` for `duration`. An empty `action` means no action
    /// button is offered.
    async fn open_snack_message_action(
        &self,
        message: &str,
        action: &str,
        duration: Duration,
    ) -> AppResult<SnackAction>;
}

/// Resolves when the user picks the action attached to a message, or when
/// the message goes away without it.
#[derive(Debug)]
pub struct SnackAction {
    rx: Option<oneshot::Receiver<()>>,
}

/// Presenter side of a [`SnackAction`]. Dropping it without calling
/// [`SnackActionHandle::invoke`] dismisses the message.
#[derive(Debug)]
pub struct SnackActionHandle {
    tx: oneshot::Sender<()>,
}

impl SnackAction {
    /// Create a connected action/handle pair.
    pub fn channel() -> (SnackActionHandle, SnackAction) {
        let (tx, rx) = oneshot::channel();
        (SnackActionHandle { tx }, SnackAction { rx: Some(rx) })
    }

    /// An action that has already been picked.
    pub fn invoked() -> Self {
        let (handle, action) = Self::channel();
        handle.invoke();
        action
    }

    /// A message without an action; never resolves to `true`.
    pub fn dismissed() -> Self {
        Self { rx: None }
    }

    /// Wait for the outcome. Returns `true` if the action was picked.
    pub async fn on_action(self) -> bool {
        match self.rx {
            Some(rx) => rx.await.is_ok(),
            None => false,
        }
    }
}

impl SnackActionHandle {
    /// Report that the user picked the action.
    pub fn invoke(self) {
        let _ = self.tx.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invoked_resolves_true() {
        assert!(SnackAction::invoked().on_action().await);
    }

    #[tokio::test]
    async fn test_dropped_handle_resolves_false() {
        let (handle, action) = SnackAction::channel();
        drop(handle);
        assert!(!action.on_action().await);
        assert!(!SnackAction::dismissed().on_action().await);
    }
}
