//! DOM Operations Adapter
//!
//! The handful of `dom_query` operations the isolator needs: parsing,
//! first-match lookup that reports absence as `None`, and serialization of
//! matched elements back to HTML.

pub use dom_query::{Document, Selection};

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First element in the document matching `selector`, in document order.
#[must_use]
pub fn find_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    non_empty(doc.select(selector).first())
}

/// First descendant of `scope` matching `selector`, in document order.
#[must_use]
pub fn find_first_within<'a>(scope: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    non_empty(scope.select(selector).first())
}

fn non_empty(sel: Selection<'_>) -> Option<Selection<'_>> {
    if sel.is_empty() {
        None
    } else {
        Some(sel)
    }
}

/// Outer HTML of the first element in the selection.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> String {
    sel.html().to_string()
}

/// Outer HTML of every element matching `selector`, in document order.
#[must_use]
pub fn outer_html_all(doc: &Document, selector: &str) -> Vec<String> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| outer_html(&Selection::from(*node)))
        .collect()
}
