//! Thread page fetching.
//!
//! One blocking GET per thread, followed by rewriting a few root-relative
//! asset paths to absolute URLs so the page still loads them when embedded on
//! another origin. Errors from the HTTP layer are passed through untouched.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::encoding::decode_page;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::ThreadId;

/// Raw response of a page fetch.
#[derive(Debug, Clone, Default)]
pub struct FetchedPage {
    /// Response body exactly as received.
    pub body: Vec<u8>,

    /// Value of the `Content-Type` response header, if any.
    pub content_type: Option<String>,
}

/// Something that can produce the page at a URL.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

/// Fetches pages over HTTP with a blocking `reqwest` client.
///
/// No custom headers, no retries, default redirect policy. The request has
/// no timeout unless [`Options::timeout`] is set.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(options: &Options) -> Result<Self> {
        Self::with_timeout(options.timeout)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client, e.g. one with proxies disabled.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?.to_vec();

        Ok(FetchedPage { body, content_type })
    }
}

/// A page held in memory, served for every URL.
///
/// Used for HTML read from stdin and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    page: FetchedPage,
}

impl StaticPage {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self::from_bytes(html.into().into_bytes(), Some("text/html; charset=utf-8".to_string()))
    }

    #[must_use]
    pub fn from_bytes(body: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            page: FetchedPage { body, content_type },
        }
    }
}

impl PageSource for StaticPage {
    fn fetch(&self, _url: &Url) -> Result<FetchedPage> {
        Ok(self.page.clone())
    }
}

/// Build `<origin>/forum/view-thread/<id>`.
///
/// The id is interpolated as-is; anything the URL parser rejects is an
/// [`Error::InvalidUrl`].
pub fn thread_url(origin: &str, thread_id: &ThreadId) -> Result<Url> {
    let raw = format!("{}/forum/view-thread/{thread_id}", origin.trim_end_matches('/'));
    Url::parse(&raw).map_err(|source| Error::InvalidUrl { url: raw, source })
}

/// Replace every occurrence of each path with `<origin><path>`.
///
/// Matching is by plain substring, so `/favicon.ico` inside a longer path is
/// rewritten too.
///
/// ```
/// use forum_post_isolator::fetch::rewrite_asset_paths;
///
/// let html = r#"<link rel="icon" href="/favicon.ico">"#;
/// let rewritten = rewrite_asset_paths(html, "http://forum.example", &["/favicon.ico"]);
/// assert_eq!(rewritten, r#"<link rel="icon" href="http://forum.example/favicon.ico">"#);
/// ```
#[must_use]
pub fn rewrite_asset_paths<S: AsRef<str>>(html: &str, origin: &str, paths: &[S]) -> String {
    let origin = origin.trim_end_matches('/');
    paths.iter().fold(html.to_string(), |page, path| {
        let path = path.as_ref();
        if path.is_empty() {
            return page;
        }
        page.replace(path, &format!("{origin}{path}"))
    })
}

/// Fetch a thread page and return it as text with asset paths rewritten.
pub fn get_html(source: &dyn PageSource, thread_id: &ThreadId, options: &Options) -> Result<String> {
    let url = thread_url(options.origin(), thread_id)?;
    let page = source.fetch(&url)?;
    let html = decode_page(&page.body, page.content_type.as_deref());
    Ok(rewrite_asset_paths(&html, options.origin(), &options.asset_paths))
}
