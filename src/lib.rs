//! # forum-post-isolator
//!
//! Fetches a forum thread page and re-renders only its first post as a
//! standalone HTML page, keeping the page's `<head>` (stylesheets, meta
//! tags) and the scripts the post relies on. The result is meant to be
//! served into an iframe, e.g. to show a shop thread's listing without the
//! replies around it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forum_post_isolator::PostIsolator;
//!
//! let isolator = PostIsolator::new(1_234_567_u32)?;
//! println!("{}", isolator.html());
//! # Ok::<(), forum_post_isolator::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetch**: one blocking GET of `<origin>/forum/view-thread/<id>`, with
//!    `/favicon.ico` and `/js/lib/modernizr` rewritten to absolute URLs.
//! 2. **Extract**: the `<head>`, the first cell of the first row of the post
//!    list table, and the page's `text/javascript` scripts minus a fixed
//!    number of leading ones.
//! 3. **Render**: `post.html` with the three fragments, or `invalid.html`
//!    with the head alone when extraction or rendering fails.
//!
//! Fetch errors are returned to the caller. Everything after the fetch is
//! infallible from the caller's side: failures are logged through `tracing`
//! and produce [`Outcome::Fallback`].

mod error;
mod isolator;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection for fetched pages.
pub mod encoding;

/// First post and script extraction.
pub mod extract;

/// Thread page fetching and asset path rewriting.
pub mod fetch;

/// One-time `tracing` setup for hosting applications.
pub mod logging;

/// `askama` page templates.
pub mod render;

// Public API - re-exports
pub use error::{Error, IsolationError, Result};
pub use fetch::{FetchedPage, HttpFetcher, PageSource, StaticPage};
pub use isolator::PostIsolator;
pub use options::{Options, DEFAULT_ASSET_PATHS, DEFAULT_SCRIPT_SKIP, DEFAULT_SITE_ORIGIN};
pub use result::{Outcome, PostFragments, ThreadId};

/// Fetches a thread from the default forum site and returns the rendered
/// first-post page.
pub fn isolate(thread_id: impl Into<ThreadId>) -> Result<String> {
    isolate_with_options(thread_id, &Options::default())
}

/// Fetches a thread with custom options and returns the rendered page.
///
/// # Example
///
/// ```rust,no_run
/// use forum_post_isolator::{isolate_with_options, Options};
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(15)),
///     ..Options::default()
/// };
/// let html = isolate_with_options("1234567", &options)?;
/// # Ok::<(), forum_post_isolator::Error>(())
/// ```
pub fn isolate_with_options(thread_id: impl Into<ThreadId>, options: &Options) -> Result<String> {
    PostIsolator::with_options(thread_id, options).map(PostIsolator::into_html)
}
