//! Error types for forum-post-isolator.
//!
//! Failures come in two tiers. [`Error`] covers fetching the thread page and
//! process setup; it is returned to whoever builds a
//! [`PostIsolator`](crate::PostIsolator). [`IsolationError`] covers locating
//! the first post and rendering it; it never leaves the isolator, which logs
//! it and renders the fallback page instead.

/// Error type for fetch and setup operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The thread URL built from the origin and thread id did not parse.
    #[error("invalid thread URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request failed or returned a non-success status.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The global log subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),

    /// Reading input or preparing the log directory failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for fetch and setup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while isolating the first post from a parsed thread page.
#[derive(Debug, thiserror::Error)]
pub enum IsolationError {
    /// No `table.forumTable.forumPostListTable` in the page.
    #[error("post list table not found")]
    PostTableNotFound,

    /// The post list table has no rows.
    #[error("post list table has no rows")]
    FirstRowNotFound,

    /// The first row of the post list table has no cells.
    #[error("first post row has no cells")]
    FirstCellNotFound,

    /// The post template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}
