use pluck_extract::minimize;

use crate::cli::{AnchorArgs, ColorChoice, SourceArgs};
use crate::util::{load_source, resolve_anchor};

pub fn run(source: &SourceArgs, anchor: &AnchorArgs, color: ColorChoice) {
    let html = load_source(source);
    let doc = pluck_html::parse_document(&html);
    let node = resolve_anchor(&doc, &anchor.at, color.should_colorize());

    println!("{}", minimize(&doc, node));
}
