//! Page templates.
//!
//! `post.html` wraps the extracted fragments in a standalone page; it also
//! carries three script includes of its own, which is why
//! [`DEFAULT_SCRIPT_SKIP`](crate::options::DEFAULT_SCRIPT_SKIP) counts them.
//! `invalid.html` is the degraded page built from the head alone.
//!
//! Fragments are inserted unescaped: they are serialized markup from the
//! forum page.

use askama::Template;

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate<'a> {
    /// Host of the template's own script includes.
    pub site_origin: &'a str,
    pub head_tag: &'a str,
    pub first_post: &'a str,
    pub javascript: &'a str,
}

#[derive(Template)]
#[template(path = "invalid.html")]
pub struct InvalidTemplate<'a> {
    pub head_tag: &'a str,
}

/// Render `post.html`.
pub fn render_post(
    site_origin: &str,
    head_tag: &str,
    first_post: &str,
    javascript: &str,
) -> askama::Result<String> {
    PostTemplate {
        site_origin,
        head_tag,
        first_post,
        javascript,
    }
    .render()
}

/// Render `invalid.html`.
pub fn render_invalid(head_tag: &str) -> askama::Result<String> {
    InvalidTemplate { head_tag }.render()
}
