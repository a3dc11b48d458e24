//! First post and script extraction from a parsed thread page.
//!
//! Both lookups are positional and depend on the forum's current markup:
//! the first post is the first cell of the first row of the post list table,
//! and scripts are kept by skipping a fixed number from the start of the page.

use crate::dom::{self, Document};
use crate::error::IsolationError;

/// The forum's post list. The class attribute must match exactly.
pub const POST_TABLE_SELECTOR: &str = r#"table[class="forumTable forumPostListTable"]"#;

/// Scripts considered for re-embedding.
pub const SCRIPT_SELECTOR: &str = r#"script[type="text/javascript"]"#;

/// Outer HTML of the page's `<head>`, or an empty string if there is none.
#[must_use]
pub fn find_head(doc: &Document) -> String {
    dom::find_first(doc, "head")
        .map(|head| dom::outer_html(&head))
        .unwrap_or_default()
}

/// Outer HTML of the first post's body cell.
///
/// Takes the post list table, its first `tr` and that row's first `td`. The
/// sidebar cell that follows is dropped.
pub fn find_first_post(doc: &Document) -> Result<String, IsolationError> {
    let table = dom::find_first(doc, POST_TABLE_SELECTOR).ok_or(IsolationError::PostTableNotFound)?;
    let row = dom::find_first_within(&table, "tr").ok_or(IsolationError::FirstRowNotFound)?;
    let cell = dom::find_first_within(&row, "td").ok_or(IsolationError::FirstCellNotFound)?;
    Ok(dom::outer_html(&cell))
}

/// Concatenated outer HTML of the `text/javascript` scripts after the first
/// `skip`, in document order and without separators.
///
/// A page with `skip` or fewer such scripts yields an empty string.
#[must_use]
pub fn find_javascript(doc: &Document, skip: usize) -> String {
    dom::outer_html_all(doc, SCRIPT_SELECTOR)
        .into_iter()
        .skip(skip)
        .collect()
}
