use pluck_extract::synthesize;

use crate::cli::{AnchorArgs, ColorChoice, SourceArgs};
use crate::util::{load_source, resolve_anchor};

pub fn run(source: &SourceArgs, anchor: &AnchorArgs, color: ColorChoice) {
    let html = load_source(source);
    let doc = pluck_html::parse_document(&html);
    let node = resolve_anchor(&doc, &anchor.at, color.should_colorize());

    let config = synthesize(&doc, node);
    let json = serde_json::to_string_pretty(&config).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}
