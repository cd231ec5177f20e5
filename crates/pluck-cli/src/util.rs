use std::fs;
use std::io::{self, Read};

use pluck_dom::{Document, NodeId};
use pluck_path::diagnostics::SyntaxErrorPrinter;
use pluck_path::{PathValue, Selector};

use crate::cli::SourceArgs;

pub fn load_source(args: &SourceArgs) -> String {
    if let Some(text) = &args.source_text {
        return text.clone();
    }
    if let Some(path) = &args.source_file {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: cannot read stdin: {e}");
                std::process::exit(1);
            }
            return buf;
        }
        return fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error: cannot read {}: {}", path.display(), e);
            std::process::exit(1);
        });
    }
    unreachable!("clap enforces one source input")
}

/// Parses a selector or reports it as a diagnostic and exits.
pub fn parse_selector(input: &str, origin: &str, colored: bool) -> Selector {
    Selector::parse(input).unwrap_or_else(|e| {
        eprintln!(
            "{}",
            SyntaxErrorPrinter::new(&e, input)
                .path(origin)
                .colored(colored)
                .render()
        );
        std::process::exit(1);
    })
}

/// First element matched by `--at`, the pick-an-anchor entry path.
pub fn resolve_anchor(doc: &Document, at: &str, colored: bool) -> NodeId {
    let selector = parse_selector(at, "--at", colored);
    let element = selector
        .evaluate(doc)
        .into_iter()
        .find_map(|v| match v {
            PathValue::Element(id) => Some(id),
            _ => None,
        });
    element.unwrap_or_else(|| {
        eprintln!("error: --at matched no element");
        std::process::exit(1);
    })
}
