//! Failure classification for user-facing messages.

use docdesk_core::error::AppError;
use serde_json::Value;
use tracing::debug;

use super::messages;

/// HTTP status the content service uses for denied operations.
const FORBIDDEN: u16 = 403;

/// How a failure is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The user lacks permission for the operation.
    Permission,
    /// Anything else, including unreadable errors.
    Generic,
}

impl ErrorClass {
    /// Message key presented for this class.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Permission => messages::ERRORS_PERMISSION,
            Self::Generic => messages::ERRORS_GENERIC,
        }
    }
}

/// Classify a failure.
///
/// The typed status wins. Without one, the message is read as a content
/// service error body (`{"error":{"statusCode":403}}`); a message that is not
/// such a body classifies as [`ErrorClass::Generic`].
pub fn classify(err: &AppError) -> ErrorClass {
    let status = err.status.or_else(|| embedded_status(&err.message));
    match status {
        Some(FORBIDDEN) => ErrorClass::Permission,
        _ => ErrorClass::Generic,
    }
}

fn embedded_status(message: &str) -> Option<u16> {
    let body: Value = match serde_json::from_str(message) {
        Ok(body) => body,
        Err(e) => {
            debug!(error = %e, "Error message is not a JSON error body");
            return None;
        }
    };

    body.get("error")?
        .get("statusCode")?
        .as_u64()
        .and_then(|code| u16::try_from(code).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_forbidden_is_permission() {
        let err = AppError::from_status(403, "denied");
        assert_eq!(classify(&err), ErrorClass::Permission);
    }

    #[test]
    fn test_embedded_status_codes() {
        let forbidden = AppError::external_service(r#"{"error":{"statusCode":403}}"#);
        let missing = AppError::external_service(r#"{"error":{"statusCode":404}}"#);
        assert_eq!(classify(&forbidden), ErrorClass::Permission);
        assert_eq!(classify(&missing), ErrorClass::Generic);
    }

    #[test]
    fn test_unparseable_message_is_generic() {
        assert_eq!(classify(&AppError::internal("oops!")), ErrorClass::Generic);
        assert_eq!(classify(&AppError::internal("")), ErrorClass::Generic);
        assert_eq!(
            classify(&AppError::internal(r#"{"error":{"statusCode":"403"}}"#)),
            ErrorClass::Generic
        );
    }

    #[test]
    fn test_typed_status_takes_precedence() {
        let err = AppError::from_status(500, r#"{"error":{"statusCode":403}}"#);
        assert_eq!(classify(&err), ErrorClass::Generic);
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(
            ErrorClass::Permission.message_key(),
            "APP.MESSAGES.ERRORS.PERMISSION"
        );
        assert_eq!(ErrorClass::Generic.message_key(), "APP.MESSAGES.ERRORS.GENERIC");
    }
}
