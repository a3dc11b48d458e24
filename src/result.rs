//! Result types for post isolation.
//!
//! This module defines the thread identifier handed in by callers and the
//! fragments and rendered page handed back.

use std::fmt;

/// Identifier of a forum thread.
///
/// Used verbatim as the last path segment of the thread URL; no validation
/// is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadId(String);

impl ThreadId {
    /// The identifier as it will appear in the URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ThreadId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for ThreadId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ThreadId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Serialized pieces of the thread page that make up the rendered post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFragments {
    /// Outer HTML of the first post's body cell.
    pub first_post: String,

    /// Concatenated outer HTML of the scripts kept after skipping.
    pub javascript: String,
}

/// Rendered page produced by a [`PostIsolator`](crate::PostIsolator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `post.html` rendered with the head, first post and scripts.
    Success(String),

    /// `invalid.html` rendered with the head only.
    Fallback(String),
}

impl Outcome {
    /// The rendered HTML, whichever template produced it.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Success(html) | Self::Fallback(html) => html,
        }
    }

    /// Consumes the outcome, returning the rendered HTML.
    #[must_use]
    pub fn into_html(self) -> String {
        match self {
            Self::Success(html) | Self::Fallback(html) => html,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
