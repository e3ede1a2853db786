//! Reads one HTML page from stdin and prints the extracted paragraphs as JSON.
//!
//! Pass `-v` for debug logs or `-vv` for trace logs. Logs go to stderr so
//! stdout stays valid JSON.

use snippet_extract::{extract_main_content_with_options, ExtractResult, Options};
use std::io::{self, Read};
use tracing::Level;

fn main() {
    let verbosity: usize = std::env::args().skip(1).map(|a| verbosity_flag(&a)).sum();
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!(error = %err, "failed to read stdin");
        std::process::exit(1);
    }

    // Parse failures still print a well-formed, empty result.
    let output = extract_main_content_with_options(&html, &Options::default()).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "extraction failed");
        ExtractResult::default()
    });

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}

/// Number of `v`s in a `-v`, `-vv`, ... flag; zero for any other argument.
fn verbosity_flag(arg: &str) -> usize {
    match arg.strip_prefix('-') {
        Some(vs) if !vs.is_empty() && vs.chars().all(|c| c == 'v') => vs.len(),
        _ => 0,
    }
}
