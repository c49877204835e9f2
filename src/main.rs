mod cli;
mod commands;
#[cfg(feature = "gui")]
mod gui;
mod io;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use commands::CommandHandler;
use passforge::recommend::SymbolPolicy;
use passforge::{types, Context};

fn main() -> ExitCode {
    // No arguments at all opens the form instead of the command line.
    let handler: Box<dyn CommandHandler> = if std::env::args_os().len() <= 1 {
        init_logging(false);
        Box::new(commands::FormCommand)
    } else {
        let cli = Cli::parse();
        init_logging(cli.verbose);
        generate_command(cli)
    };

    match handler.execute(&Context::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn generate_command(cli: Cli) -> Box<dyn CommandHandler> {
    let request = types::Request {
        input: cli.input,
        limit: cli.limit,
        symbol: cli.symbol,
        mode: cli.mode,
        policy: if cli.single_symbol {
            SymbolPolicy::Once
        } else {
            SymbolPolicy::Repeat
        },
    };
    Box::new(commands::GenerateCommand {
        request,
        output: types::OutputDest::from_path(cli.output),
        copy: cli.copy,
        json: cli.json,
        no_color: cli.no_color,
    })
}
