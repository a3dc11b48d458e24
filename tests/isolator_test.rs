use forum_post_isolator::fetch::FetchedPage;
use forum_post_isolator::render::render_invalid;
use forum_post_isolator::{Error, Options, Outcome, PageSource, PostIsolator, StaticPage};
use url::Url;

const TWO_SCRIPT_THREAD: &str = r#"<html><head><script type="text/javascript">A</script><script type="text/javascript">B</script></head><body><table class="forumTable forumPostListTable"><tr><td>First post text</td></tr><tr><td>Reply</td></tr></table></body></html>"#;

const NO_TABLE_THREAD: &str = "<html><head></head><body>no table here</body></html>";

fn thread_with_scripts(count: usize) -> String {
    let head_scripts: String = (0..count.min(2))
        .map(|i| format!(r#"<script type="text/javascript">head{i}</script>"#))
        .collect();
    let body_scripts: String = (2..count.max(2))
        .map(|i| format!(r#"<script type="text/javascript">body{i}</script>"#))
        .collect();
    format!(
        r#"<html><head><link rel="stylesheet" href="/css/forum.css">{head_scripts}</head><body>
        <table class="forumTable forumPostListTable">
            <tr><td class="content-container">WTS: Kaom's Heart</td><td class="post_info">seller</td></tr>
        </table>{body_scripts}</body></html>"#
    )
}

struct FailingSource;

impl PageSource for FailingSource {
    fn fetch(&self, _url: &Url) -> forum_post_isolator::Result<FetchedPage> {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

#[test]
fn end_to_end_two_scripts_renders_first_post_without_extra_javascript() {
    let isolator = PostIsolator::from_source(
        "1234",
        &StaticPage::new(TWO_SCRIPT_THREAD),
        &Options::default(),
    );
    match isolator {
        Ok(isolator) => {
            assert!(matches!(isolator.outcome(), Outcome::Success(_)));
            assert_eq!(isolator.javascript(), Some(""));
            let first_post = isolator.first_post().unwrap_or_default();
            assert!(first_post.contains("First post text"));
            assert!(isolator.html().contains("<td>First post text</td>"));
            assert!(!isolator.html().contains("Reply"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn end_to_end_missing_table_renders_fallback_with_head() {
    let isolator = PostIsolator::from_source(
        "1234",
        &StaticPage::new(NO_TABLE_THREAD),
        &Options::default(),
    )
    .expect("fetch from a static page cannot fail");

    assert!(isolator.is_fallback());
    assert_eq!(isolator.head_tag(), "<head></head>");
    let expected = render_invalid("<head></head>").expect("fallback template renders");
    assert_eq!(isolator.html(), expected);
}

#[test]
fn fallback_for_empty_page() {
    let isolator = PostIsolator::from_html("1", String::new(), &Options::default());
    assert!(isolator.is_fallback());
    assert!(isolator.html().contains("<head></head>"));
}

#[test]
fn fallback_for_table_without_rows_or_cells() {
    for page in [
        r#"<html><body><table class="forumTable forumPostListTable"></table></body></html>"#,
        r#"<html><body><table class="forumTable forumPostListTable"><tr><th>h</th></tr></table></body></html>"#,
    ] {
        let isolator = PostIsolator::from_html("1", page.to_string(), &Options::default());
        assert!(isolator.is_fallback(), "expected fallback for {page}");
    }
}

#[test]
fn fallback_keeps_stylesheets_from_head() {
    let page = r#"<html><head><link rel="stylesheet" href="/css/forum.css"></head><body></body></html>"#;
    let isolator = PostIsolator::from_html("1", page.to_string(), &Options::default());

    assert!(isolator.is_fallback());
    assert!(isolator.html().contains(r#"<link rel="stylesheet" href="/css/forum.css">"#));
}

#[test]
fn six_scripts_keep_only_the_sixth() {
    let isolator = PostIsolator::from_html("1", thread_with_scripts(6), &Options::default());
    assert_eq!(
        isolator.javascript(),
        Some(r#"<script type="text/javascript">body5</script>"#)
    );
}

#[test]
fn scripts_after_the_fifth_are_kept_in_document_order() {
    let isolator = PostIsolator::from_html("1", thread_with_scripts(8), &Options::default());
    assert_eq!(
        isolator.javascript(),
        Some(concat!(
            r#"<script type="text/javascript">body5</script>"#,
            r#"<script type="text/javascript">body6</script>"#,
            r#"<script type="text/javascript">body7</script>"#,
        ))
    );
    let html = isolator.html();
    assert!(html.contains("body7"));
    assert!(!html.contains("body4"));
}

#[test]
fn exactly_five_scripts_yield_empty_javascript() {
    let isolator = PostIsolator::from_html("1", thread_with_scripts(5), &Options::default());
    assert!(!isolator.is_fallback());
    assert_eq!(isolator.javascript(), Some(""));
}

#[test]
fn sidebar_cell_is_not_rendered() {
    let isolator = PostIsolator::from_html("1", thread_with_scripts(2), &Options::default());
    let html = isolator.html();
    assert!(html.contains("WTS: Kaom's Heart"));
    assert!(!html.contains("post_info"));
}

#[test]
fn construction_is_deterministic() {
    let source = StaticPage::new(thread_with_scripts(7));
    let first = PostIsolator::from_source("99", &source, &Options::default()).map(PostIsolator::into_html);
    let second = PostIsolator::from_source("99", &source, &Options::default()).map(PostIsolator::into_html);

    let (first, second) = (first.expect("first render"), second.expect("second render"));
    assert_eq!(first, second);

    let fallback_a = PostIsolator::from_html("99", NO_TABLE_THREAD.to_string(), &Options::default());
    let fallback_b = PostIsolator::from_html("99", NO_TABLE_THREAD.to_string(), &Options::default());
    assert_eq!(fallback_a.html(), fallback_b.html());
}

#[test]
fn fetched_page_has_asset_paths_rewritten_before_parsing() {
    let page = r#"<html><head><link rel="shortcut icon" href="/favicon.ico"><script type="text/javascript" src="/js/lib/modernizr.custom.js"></script></head><body></body></html>"#;
    let isolator = PostIsolator::from_source("5", &StaticPage::new(page), &Options::default())
        .expect("static page");

    assert!(isolator
        .head_tag()
        .contains(r#"href="http://www.pathofexile.com/favicon.ico""#));
    assert!(isolator
        .head_tag()
        .contains(r#"src="http://www.pathofexile.com/js/lib/modernizr.custom.js""#));
    assert!(isolator.thread_html().contains("http://www.pathofexile.com/favicon.ico"));
}

#[test]
fn fetch_errors_propagate_to_caller() {
    let result = PostIsolator::from_source("1", &FailingSource, &Options::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn unparseable_thread_url_is_a_fetch_tier_error() {
    let options = Options {
        site_origin: "not a url".to_string(),
        ..Options::default()
    };
    let result = PostIsolator::from_source("1", &StaticPage::new(TWO_SCRIPT_THREAD), &options);
    assert!(matches!(result, Err(Error::InvalidUrl { .. })));
}

#[test]
fn custom_origin_is_used_for_template_scripts_and_assets() {
    let options = Options {
        site_origin: "https://forum.example/".to_string(),
        ..Options::default()
    };
    let page = format!(
        r#"<html><head><link rel="icon" href="/favicon.ico"></head><body>{}</body></html>"#,
        r#"<table class="forumTable forumPostListTable"><tr><td>Post</td></tr></table>"#
    );
    let isolator = PostIsolator::from_source("3", &StaticPage::new(page), &options).expect("static page");

    let html = isolator.html();
    assert!(html.contains(r#"href="https://forum.example/favicon.ico""#));
    assert!(html.contains(r#"src="https://forum.example/js/main.js""#));
    assert!(!html.contains("pathofexile.com"));
}
