//! Speakophone CLI - Command-line interface for allophone speech synthesis
//!
//! This binary provides commands for speaking text, narrating dice rolls and
//! preparing phrase recordings.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use speakophone_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Say {
            voice,
            text,
            out,
            out_dir,
        } => commands::say::run(&voice, text.as_deref(), out.as_deref(), &out_dir),
        Commands::Roll {
            config,
            dice,
            size,
            count,
            seed,
            out,
        } => commands::roll::run(&config, dice, size, count, seed, &out),
        Commands::Bake { voice, out_dir } => commands::bake::run(&voice, &out_dir),
        Commands::Dump { voice, out_dir } => commands::dump::run(&voice, &out_dir),
        Commands::Number { value } => commands::number::run(value),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
