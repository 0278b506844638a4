//! Sanitisation port for untrusted text.

/// Strips unsafe markup from user-supplied text.
///
/// Implementations must be pure and thread-safe: the same input always
/// yields the same output.
pub trait TextSanitizer: Send + Sync {
    /// Returns a copy of `input` that is safe to embed in rendered markup.
    fn sanitize(&self, input: &str) -> String;
}
