//! Character encoding detection for fetched thread pages.
//!
//! The forum serves raw bytes; this module picks the charset from the byte
//! order mark, the `Content-Type` response header or the page's own meta
//! tags, and decodes the body to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the page examined for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `charset=...` inside a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("valid regex")
});

/// Pick the encoding of a page body.
///
/// Checked in order: byte order mark, `charset` in the `Content-Type` header,
/// `<meta charset>` or `<meta http-equiv="Content-Type">` within the first
/// 1024 bytes. Falls back to UTF-8.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(body) {
        return encoding;
    }

    content_type
        .and_then(|value| capture_label(&HEADER_CHARSET_RE, value))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| {
            let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_LEN)]);
            capture_label(&META_CHARSET_RE, &head)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or(UTF_8)
}

fn capture_label(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode a page body to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than errors; a leading BOM is
/// stripped.
///
/// # Examples
///
/// ```
/// use forum_post_isolator::encoding::decode_page;
///
/// let body = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_page(body, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_page(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
