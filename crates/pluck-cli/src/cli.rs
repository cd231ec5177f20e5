use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Tsv,
}

#[derive(Parser)]
#[command(name = "pluck", bin_name = "pluck")]
#[command(about = "Derive and run structured-extraction rules over HTML documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an extraction rule and print the rows
    #[command(after_help = r#"EXAMPLES:
  pluck extract -s page.html -c rule.json
  pluck extract -s page.html --selector '//tr[td]' --column 'Name=td[1]' --column 'Age=td[2]'
  pluck extract -s page.html -c rule.json --format tsv"#)]
    Extract {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        rule: RuleArgs,

        /// Output format for rows on stdout
        #[arg(long, default_value = "json", value_name = "FORMAT")]
        format: OutputFormat,

        /// Colorize diagnostics (auto-detected by default)
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,
    },

    /// Synthesize a rule from one picked element and print it as JSON
    #[command(after_help = r#"EXAMPLES:
  pluck suggest -s page.html --at '//table/tr[2]/td[1]'
  pluck suggest --source '<ul><li><a href=/x>x</a></li></ul>' --at '//a'"#)]
    Suggest {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        anchor: AnchorArgs,

        /// Colorize diagnostics (auto-detected by default)
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,
    },

    /// Print the shortest selector that still matches a picked element
    #[command(after_help = r#"EXAMPLES:
  pluck minimize -s page.html --at '/html/body/div[2]/table/tr[3]'"#)]
    Minimize {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        anchor: AnchorArgs,

        /// Colorize diagnostics (auto-detected by default)
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,
    },
}

#[derive(Args)]
#[group(id = "source_input", required = true, multiple = false)]
pub struct SourceArgs {
    /// HTML as inline text
    #[arg(long = "source", value_name = "HTML")]
    pub source_text: Option<String>,

    /// HTML from file (use "-" for stdin)
    #[arg(short = 's', long = "source-file", value_name = "FILE")]
    pub source_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct RuleArgs {
    /// Rule as a JSON config file ({"mainSelector": ..., "columns": [...]})
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Main selector (alternative to --config)
    #[arg(long, value_name = "SELECTOR", conflicts_with = "config_file")]
    pub selector: Option<String>,

    /// Column as NAME=SELECTOR, repeatable, order preserved
    #[arg(
        long = "column",
        value_name = "NAME=SELECTOR",
        conflicts_with = "config_file"
    )]
    pub columns: Vec<String>,
}

#[derive(Args)]
pub struct AnchorArgs {
    /// Selector picking the anchor element (first match is used)
    #[arg(long = "at", value_name = "SELECTOR")]
    pub at: String,
}
