//! Terminal presenter for copy workflow messages.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dialoguer::Confirm;
use tokio::sync::oneshot;
use tracing::warn;

use docdesk_core::result::AppResult;
use docdesk_core::traits::{Notifier, SnackAction};

use crate::output;

/// Asks a yes/no question on the terminal. Blocks until answered.
type Prompt = Arc<dyn Fn(String) -> dialoguer::Result<bool> + Send + Sync>;

/// Prints messages and, when an action is offered, asks for it on the
/// terminal until the message duration runs out.
#[derive(Clone)]
pub struct ConsoleNotifier {
    /// Whether offered actions are prompted for at all.
    interactive: bool,
    /// Question asked for an offered action.
    prompt: Prompt,
}

impl ConsoleNotifier {
    /// Creates a console notifier.
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            prompt: Arc::new(confirm),
        }
    }

    #[cfg(test)]
    fn with_prompt(prompt: Prompt) -> Self {
        Self {
            interactive: true,
            prompt,
        }
    }
}

fn confirm(prompt: String) -> dialoguer::Result<bool> {
    Confirm::new().with_prompt(prompt).default(false).interact()
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn open_snack_message_action(
        &self,
        message: &str,
        action: &str,
        duration: Duration,
    ) -> AppResult<SnackAction> {
        if action.is_empty() {
            output::print_error(message);
            return Ok(SnackAction::dismissed());
        }

        output::print_success(message);
        if !self.interactive {
            return Ok(SnackAction::dismissed());
        }

        let (handle, snack) = SnackAction::channel();
        let question = format!("{action}? ({}s)", duration.as_secs());

        // Detached thread: a prompt left unanswered past the window must not
        // keep the runtime alive on shutdown.
        let (answer_tx, answer_rx) = oneshot::channel();
        let prompt = self.prompt.clone();
        std::thread::spawn(move || {
            let _ = answer_tx.send(prompt(question));
        });

        tokio::spawn(async move {
            match tokio::time::timeout(duration, answer_rx).await {
                Ok(Ok(Ok(true))) => handle.invoke(),
                Ok(Ok(Ok(false))) => {}
                Ok(Ok(Err(e))) => warn!(error = %e, "Action prompt failed"),
                Ok(Err(_)) => warn!("Action prompt ended without an answer"),
                Err(_) => output::print_warning("Action window closed"),
            }
        });

        Ok(snack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_interactive_never_acts() {
        let notifier = ConsoleNotifier::new(false);
        let action = notifier
            .open_snack_message_action("Copied 1 item", "Undo", Duration::from_secs(10))
            .await
            .unwrap();
        assert!(!action.on_action().await);
    }

    #[tokio::test]
    async fn test_error_messages_offer_no_action() {
        let notifier = ConsoleNotifier::new(true);
        let action = notifier
            .open_snack_message_action("Something went wrong", "", Duration::from_secs(3))
            .await
            .unwrap();
        assert!(!action.on_action().await);
    }

    #[tokio::test]
    async fn test_confirmed_prompt_invokes_action() {
        let notifier = ConsoleNotifier::with_prompt(Arc::new(|_| Ok(true)));
        let action = notifier
            .open_snack_message_action("Copied 1 item", "Undo", Duration::from_secs(10))
            .await
            .unwrap();
        assert!(action.on_action().await);
    }

    #[tokio::test]
    async fn test_unanswered_prompt_closes_after_window() {
        let notifier = ConsoleNotifier::with_prompt(Arc::new(|_| {
            std::thread::sleep(Duration::from_secs(3600));
            Ok(true)
        }));
        let action = notifier
            .open_snack_message_action("Copied 1 item", "Undo", Duration::from_millis(50))
            .await
            .unwrap();

        let picked = tokio::time::timeout(Duration::from_secs(5), action.on_action())
            .await
            .expect("action window did not close");
        assert!(!picked);
    }
}
