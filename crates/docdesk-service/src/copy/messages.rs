//! Message keys presented by the copy workflow.

/// Key returned by the orchestrator when a copy batch succeeded.
pub const COPY_SUCCESS: &str = "OPERATION.SUCCES.CONTENT.COPY";

/// One node was copied.
pub const NODE_COPY_SINGULAR: &str = "APP.MESSAGES.INFO.NODE_COPY.SINGULAR";

/// Several nodes were copied.
pub const NODE_COPY_PLURAL: &str = "APP.MESSAGES.INFO.NODE_COPY.PLURAL";

/// Any failure that is not a permission problem.
pub const ERRORS_GENERIC: &str = "APP.MESSAGES.ERRORS.GENERIC";

/// The content service refused the operation (HTTP 403).
pub const ERRORS_PERMISSION: &str = "APP.MESSAGES.ERRORS.PERMISSION";

/// Success key for a selection of `count` nodes.
pub fn node_copy_key(count: usize) -> &'static str {
    if count == 1 {
        NODE_COPY_SINGULAR
    } else {
        NODE_COPY_PLURAL
    }
}
