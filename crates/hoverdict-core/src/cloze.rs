//! Cloze rewriting — collapses `{{cN::answer}}` / `{{cN::answer::hint}}`
//! markers down to their answer text.
//!
//! Matching is non-greedy so adjacent markers in one field resolve
//! independently. Unterminated markup never matches and is left verbatim.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static CLOZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // `(?s)` so answers spanning a <br> + newline still collapse.
    Regex::new(r"(?s)\{\{c\d+::(.*?)(?:::.*?)?\}\}").expect("cloze pattern is a valid regex")
});

/// Replace every cloze marker in `text` with its answer, discarding the index
/// and hint. Borrows when nothing matched.
pub fn rewrite(text: &str) -> Cow<'_, str> {
    CLOZE_RE.replace_all(text, "$1")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
