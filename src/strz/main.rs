use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::Write;
use strz::commands;
use strz::error::Result;
use strz::operands;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests arrive as "errors" too; only real
            // parse failures get a failing exit status.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let lines = dispatch(command)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn dispatch(command: Commands) -> Result<Vec<String>> {
    match command {
        Commands::Length { operands: ops } => commands::length::run(&operands::gather(ops)?),
        Commands::Upper { operands: ops } => commands::case::upper(&operands::gather(ops)?),
        Commands::Lower { operands: ops } => commands::case::lower(&operands::gather(ops)?),
        Commands::Trim { operands: ops } => commands::trim::run(&operands::gather(ops)?),
        Commands::Escape { operands: ops } => commands::quote::escape(&operands::gather(ops)?),
        Commands::Unescape { operands: ops } => commands::quote::unescape(&operands::gather(ops)?),
        Commands::Join {
            separator,
            operands: ops,
        } => commands::join::run(&separator, &operands::gather(ops)?),
        Commands::Join0 { operands: ops } => commands::join::run_null(&operands::gather(ops)?),
        Commands::Split {
            separator,
            operands: ops,
        } => commands::split::run(&separator, &operands::gather(ops)?),
        Commands::Split0 { operands: ops } => commands::split::run_null(&operands::gather(ops)?),
        Commands::Sub {
            start,
            end,
            operands: ops,
        } => commands::sub::run(start, end, &operands::gather(ops)?),
        Commands::Sub0 {
            offset,
            length,
            operands: ops,
        } => commands::sub::run_offset(offset, length, &operands::gather(ops)?),
        Commands::Pad {
            right,
            fill,
            width,
            operands: ops,
        } => {
            let opts = commands::pad::PadOptions { fill, width, right };
            commands::pad::run(&operands::gather(ops)?, &opts)
        }
    }
}
