//! Search-term pattern language.
//!
//! Terms are matched case-insensitively. `*` matches any run of characters,
//! `_` matches exactly one, and `\` makes the next character literal. All
//! other characters (including regex metacharacters) are literal. A lone
//! trailing `\` is rejected.

use hoverdict_core::StoreError;
use regex::{Regex, RegexBuilder};

/// Whether the pattern may match anywhere in the text or must cover all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Substring,
    Whole,
}

/// A compiled search term.
#[derive(Debug, Clone)]
pub struct TermPattern {
    re: Regex,
}

impl TermPattern {
    pub fn compile(term: &str, anchor: Anchor) -> Result<Self, StoreError> {
        let mut body = String::with_capacity(term.len() + 8);
        let mut chars = term.chars();
        while let Some(c) = chars.next() {
            match c {
                '*' => body.push_str(".*"),
                '_' => body.push('.'),
                '\\' => match chars.next() {
                    Some(lit) => body.push_str(&regex::escape(lit.encode_utf8(&mut [0; 4]))),
                    None => {
                        return Err(StoreError::MalformedQuery(format!(
                            "trailing escape in term {term:?}"
                        )))
                    }
                },
                other => body.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
            }
        }

        let source = match anchor {
            Anchor::Substring => body,
            Anchor::Whole => format!("^(?:{body})$"),
        };
        let re = RegexBuilder::new(&source)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| StoreError::MalformedQuery(e.to_string()))?;
        Ok(Self { re })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }
}
