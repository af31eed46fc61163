//! Message key translation.

/// Resolves message keys to display text.
///
/// `count` is the number of affected nodes, available for pluralized
/// templates.
pub trait Translator: Send + Sync + 'static {
    /// Translate `key`. Implementations fall back to the key itself when no
    /// translation is known.
    fn translate(&self, key: &str, count: usize) -> String;
}
