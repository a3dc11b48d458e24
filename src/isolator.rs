//! First-post isolation.
//!
//! A [`PostIsolator`] does all of its work when constructed: fetch the thread
//! page, parse it, pull out the head, first post and trailing scripts, and
//! render them into a standalone page. If anything after the fetch fails the
//! failure is logged and the head-only fallback page is rendered instead, so
//! a constructed isolator always holds some HTML.

use tracing::{debug, error, info_span};

use crate::dom::{self, Document};
use crate::error::{IsolationError, Result};
use crate::extract;
use crate::fetch::{self, HttpFetcher, PageSource};
use crate::options::Options;
use crate::render;
use crate::result::{Outcome, PostFragments, ThreadId};

/// A thread page reduced to its first post.
///
/// # Example
///
/// ```rust
/// use forum_post_isolator::{Options, PostIsolator};
///
/// let page = r#"<html><head><title>Shop</title></head><body>
///     <table class="forumTable forumPostListTable">
///         <tr><td>Selling: 6-link chest</td><td>seller</td></tr>
///     </table></body></html>"#;
///
/// let isolator = PostIsolator::from_html("123", page.to_string(), &Options::default());
/// assert!(!isolator.is_fallback());
/// assert!(isolator.html().contains("Selling: 6-link chest"));
/// assert!(!isolator.html().contains("seller"));
/// ```
pub struct PostIsolator {
    thread_id: ThreadId,
    thread_html: String,
    document: Document,
    head_tag: String,
    fragments: Option<PostFragments>,
    outcome: Outcome,
}

impl PostIsolator {
    /// Fetch and isolate a thread from the default forum site.
    pub fn new(thread_id: impl Into<ThreadId>) -> Result<Self> {
        Self::with_options(thread_id, &Options::default())
    }

    /// Fetch over HTTP with custom options and isolate the thread.
    pub fn with_options(thread_id: impl Into<ThreadId>, options: &Options) -> Result<Self> {
        let fetcher = HttpFetcher::new(options)?;
        Self::from_source(thread_id, &fetcher, options)
    }

    /// Fetch the thread page from `source` and isolate it.
    ///
    /// Only fetch errors are returned; extraction and rendering failures
    /// produce a fallback outcome.
    pub fn from_source(
        thread_id: impl Into<ThreadId>,
        source: &dyn PageSource,
        options: &Options,
    ) -> Result<Self> {
        let thread_id = thread_id.into();
        let thread_html = fetch::get_html(source, &thread_id, options)?;
        Ok(Self::isolate(thread_id, thread_html, options))
    }

    /// Isolate an already fetched thread page. Never fails.
    #[must_use]
    pub fn from_html(thread_id: impl Into<ThreadId>, thread_html: String, options: &Options) -> Self {
        Self::isolate(thread_id.into(), thread_html, options)
    }

    fn isolate(thread_id: ThreadId, thread_html: String, options: &Options) -> Self {
        let span = info_span!("isolate_post", thread_id = %thread_id);
        let _entered = span.enter();

        let document = dom::parse(&thread_html);
        let head_tag = extract::find_head(&document);

        let (fragments, outcome) = match render_first_post(&document, &head_tag, options) {
            Ok((fragments, html)) => {
                debug!(
                    first_post_len = fragments.first_post.len(),
                    javascript_len = fragments.javascript.len(),
                    "isolated first post"
                );
                (Some(fragments), Outcome::Success(html))
            }
            Err(err) => {
                error!(error = %err, details = ?err, "could not isolate first post, rendering fallback");
                (None, Outcome::Fallback(render_fallback(&head_tag)))
            }
        };

        Self {
            thread_id,
            thread_html,
            document,
            head_tag,
            fragments,
            outcome,
        }
    }

    #[must_use]
    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    /// The fetched page after asset path rewriting.
    #[must_use]
    pub fn thread_html(&self) -> &str {
        &self.thread_html
    }

    /// The parsed thread page.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Outer HTML of the page's `<head>`, used by both templates.
    #[must_use]
    pub fn head_tag(&self) -> &str {
        &self.head_tag
    }

    /// First post cell, if extraction succeeded.
    #[must_use]
    pub fn first_post(&self) -> Option<&str> {
        self.fragments.as_ref().map(|f| f.first_post.as_str())
    }

    /// Re-embedded scripts, if extraction succeeded.
    #[must_use]
    pub fn javascript(&self) -> Option<&str> {
        self.fragments.as_ref().map(|f| f.javascript.as_str())
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The rendered page.
    #[must_use]
    pub fn html(&self) -> &str {
        self.outcome.html()
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.outcome.is_fallback()
    }

    #[must_use]
    pub fn into_html(self) -> String {
        self.outcome.into_html()
    }
}

impl std::fmt::Debug for PostIsolator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostIsolator")
            .field("thread_id", &self.thread_id)
            .field("thread_html_len", &self.thread_html.len())
            .field("fragments", &self.fragments)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

fn render_first_post(
    document: &Document,
    head_tag: &str,
    options: &Options,
) -> std::result::Result<(PostFragments, String), IsolationError> {
    let first_post = extract::find_first_post(document)?;
    let javascript = extract::find_javascript(document, options.script_skip);
    let html = render::render_post(options.origin(), head_tag, &first_post, &javascript)?;
    Ok((PostFragments { first_post, javascript }, html))
}

fn render_fallback(head_tag: &str) -> String {
    render::render_invalid(head_tag).unwrap_or_else(|err| {
        error!(error = %err, "fallback template failed, returning bare head");
        head_tag.to_string()
    })
}
