mod cli;
mod commands;
mod util;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let args = Cli::parse();

    match args.command {
        Command::Extract {
            source,
            rule,
            format,
            color,
        } => commands::extract::run(&source, &rule, format, color),
        Command::Suggest {
            source,
            anchor,
            color,
        } => commands::suggest::run(&source, &anchor, color),
        Command::Minimize {
            source,
            anchor,
            color,
        } => commands::minimize::run(&source, &anchor, color),
    }
}
