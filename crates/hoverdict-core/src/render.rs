//! Snippet renderer — wraps field contents into the tooltip fragment.
//!
//! ```text
//! <div class="tt-reslist">
//!   <div class="tt-res"> <div class="tt-fld">…</div> … </div>
//!   …
//! </div>
//! ```
//!
//! Output is emitted without whitespace between tags. Field content is
//! already markup and is inserted as-is.

const RESLIST_OPEN: &str = r#"<div class="tt-reslist">"#;
const RES_OPEN: &str = r#"<div class="tt-res">"#;
const FLD_OPEN: &str = r#"<div class="tt-fld">"#;
const CLOSE: &str = "</div>";

/// Render one record's (already filtered and rewritten) fields as a snippet.
pub fn snippet<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from(RES_OPEN);
    for field in fields {
        out.push_str(FLD_OPEN);
        out.push_str(field.as_ref());
        out.push_str(CLOSE);
    }
    out.push_str(CLOSE);
    out
}

/// Wrap rendered snippets, in order, into the outer result list.
pub fn fragment<I, S>(snippets: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from(RESLIST_OPEN);
    for s in snippets {
        out.push_str(s.as_ref());
    }
    out.push_str(CLOSE);
    out
}
