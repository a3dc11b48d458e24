//! Configuration options for post isolation.
//!
//! The `Options` struct controls where thread pages are fetched from, which
//! asset paths are made absolute, and how many scripts are dropped before the
//! remaining ones are re-embedded.

use std::time::Duration;

/// Forum site that thread pages are fetched from by default.
pub const DEFAULT_SITE_ORIGIN: &str = "http://www.pathofexile.com";

/// Root-relative asset paths rewritten to absolute URLs by default.
pub const DEFAULT_ASSET_PATHS: &[&str] = &["/favicon.ico", "/js/lib/modernizr"];

/// Number of leading `<script type="text/javascript">` elements dropped from
/// the page before the rest are appended to the rendered post.
///
/// Positional coupling: 2 of these scripts sit inside the page `<head>`
/// (already re-emitted through `head_tag`) and 3 are hardcoded in
/// `templates/post.html`. Changing the script includes in that template or
/// upstream changes to the forum `<head>` require updating this value.
/// Scripts with only a `src` attribute still count towards it.
pub const DEFAULT_SCRIPT_SKIP: usize = 5;

/// Configuration options for fetching and isolating a thread's first post.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use forum_post_isolator::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(10)),
///     ..Options::default()
/// };
/// assert_eq!(options.script_skip, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Scheme and host of the forum, e.g. `http://www.pathofexile.com`.
    ///
    /// Thread pages are fetched from `<site_origin>/forum/view-thread/<id>`,
    /// rewritten asset paths are prefixed with it, and `post.html` loads its
    /// own scripts from it. A trailing slash is ignored.
    ///
    /// Default: [`DEFAULT_SITE_ORIGIN`]
    pub site_origin: String,

    /// Substrings of the fetched page that are replaced by
    /// `<site_origin><path>` wherever they occur.
    ///
    /// Default: [`DEFAULT_ASSET_PATHS`]
    pub asset_paths: Vec<String>,

    /// Leading `text/javascript` scripts to drop. See [`DEFAULT_SCRIPT_SKIP`].
    ///
    /// Default: `5`
    pub script_skip: usize,

    /// Total timeout for the thread page request.
    ///
    /// `None` blocks until the server answers or the connection fails.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            asset_paths: DEFAULT_ASSET_PATHS.iter().map(|p| (*p).to_string()).collect(),
            script_skip: DEFAULT_SCRIPT_SKIP,
            timeout: None,
        }
    }
}

impl Options {
    /// Site origin with any trailing slashes removed.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.site_origin.trim_end_matches('/')
    }
}
