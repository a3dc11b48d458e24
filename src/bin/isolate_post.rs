//! Command-line host: print a thread's isolated first post.
//!
//! Fetches from the forum by default; `--stdin` reads a saved thread page
//! instead.

use clap::Parser;
use forum_post_isolator::logging::{init_logging, LogConfig};
use forum_post_isolator::{Options, PostIsolator, StaticPage, DEFAULT_SCRIPT_SKIP, DEFAULT_SITE_ORIGIN};
use serde::Serialize;
use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "isolate_post", version, about = "Render the first post of a forum thread")]
struct Args {
    /// Forum thread id
    thread_id: String,

    /// Scheme and host of the forum
    #[arg(long, default_value = DEFAULT_SITE_ORIGIN)]
    origin: String,

    /// Leading text/javascript scripts to drop
    #[arg(long, default_value_t = DEFAULT_SCRIPT_SKIP)]
    skip_scripts: usize,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Read the thread page from stdin instead of fetching it
    #[arg(long)]
    stdin: bool,

    /// Print a JSON object instead of raw HTML
    #[arg(long)]
    json: bool,

    /// Log file
    #[arg(long, default_value = forum_post_isolator::logging::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Do not echo log events to stderr
    #[arg(long)]
    quiet: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    thread_id: &'a str,
    fallback: bool,
    html: &'a str,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let _log_guard = init_logging(&LogConfig {
        log_file: Some(args.log_file.clone()),
        emit_stderr: !args.quiet,
        ..LogConfig::default()
    })?;

    let options = Options {
        site_origin: args.origin.clone(),
        script_skip: args.skip_scripts,
        timeout: args.timeout_secs.map(Duration::from_secs),
        ..Options::default()
    };

    let isolator = if args.stdin {
        let mut page = Vec::new();
        io::stdin().read_to_end(&mut page)?;
        PostIsolator::from_source(args.thread_id.as_str(), &StaticPage::from_bytes(page, None), &options)?
    } else {
        PostIsolator::with_options(args.thread_id.as_str(), &options)?
    };

    if args.json {
        let output = Output {
            thread_id: isolator.thread_id().as_str(),
            fallback: isolator.is_fallback(),
            html: isolator.html(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", isolator.html());
    }

    Ok(())
}
