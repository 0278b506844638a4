//! `ammonia`-backed text sanitiser.

use crate::todo::ports::TextSanitizer;

/// Sanitiser applying `ammonia`'s default user-generated-content policy.
///
/// Script and style elements are dropped along with their content, unsafe
/// attributes are removed, and text is HTML-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSanitizer;

impl HtmlSanitizer {
    /// Creates a sanitiser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TextSanitizer for HtmlSanitizer {
    fn sanitize(&self, input: &str) -> String {
        ammonia::clean(input)
    }
}
