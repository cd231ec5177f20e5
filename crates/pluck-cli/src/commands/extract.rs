use std::fs;

use pluck_extract::{ColumnDef, Error, ScrapeConfig, ScrapeResult, extract};
use pluck_path::diagnostics::SyntaxErrorPrinter;

use crate::cli::{ColorChoice, OutputFormat, RuleArgs, SourceArgs};
use crate::util::load_source;

pub fn run(source: &SourceArgs, rule: &RuleArgs, format: OutputFormat, color: ColorChoice) {
    let html = load_source(source);
    let doc = pluck_html::parse_document(&html);
    let config = load_config(rule);

    let result = match extract(&doc, &config) {
        Ok(result) => result,
        Err(Error::SelectorSyntax(e)) => {
            eprintln!(
                "{}",
                SyntaxErrorPrinter::new(&e, &config.main_selector)
                    .path("mainSelector")
                    .colored(color.should_colorize())
                    .render()
            );
            std::process::exit(1);
        }
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
                eprintln!("error: {e}");
                std::process::exit(1);
            });
            println!("{json}");
        }
        OutputFormat::Tsv => print_tsv(&result),
    }

    eprintln!(
        "{} rows found, {} empty",
        result.data.len(),
        result.empty_row_count()
    );
}

fn load_config(rule: &RuleArgs) -> ScrapeConfig {
    if let Some(path) = &rule.config_file {
        let raw = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error: cannot read {}: {}", path.display(), e);
            std::process::exit(1);
        });
        return serde_json::from_str(&raw).unwrap_or_else(|e| {
            eprintln!("error: invalid config {}: {}", path.display(), e);
            std::process::exit(1);
        });
    }

    let Some(main_selector) = rule.selector.clone() else {
        eprintln!("error: either --config or --selector is required");
        std::process::exit(1);
    };
    if rule.columns.is_empty() {
        eprintln!("error: at least one --column NAME=SELECTOR is required");
        std::process::exit(1);
    }

    let columns = rule
        .columns
        .iter()
        .map(|spec| match spec.split_once('=') {
            Some((name, selector)) => ColumnDef::new(name, selector),
            None => {
                eprintln!("error: malformed --column {spec:?}, expected NAME=SELECTOR");
                std::process::exit(1);
            }
        })
        .collect();

    ScrapeConfig {
        main_selector,
        columns,
    }
}

/// Tab-separated rows with a header line; tabs and newlines in cell values
/// are escaped so the output stays line-per-row.
fn print_tsv(result: &ScrapeResult) {
    println!("{}", result.column_order.join("\t"));
    for row in &result.data {
        let line: Vec<String> = result
            .column_order
            .iter()
            .map(|name| escape_cell(row.data.get(name).map(String::as_str).unwrap_or("")))
            .collect();
        println!("{}", line.join("\t"));
    }
}

fn escape_cell(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
