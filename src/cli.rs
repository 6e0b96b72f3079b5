// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod commands;

fn build_cli() -> Command {
    Command::new("suite-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render and summarize recorded test-suite reports")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Re-encode a JSON suite report as JSON or XML")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Path to a JSON suite report")
                        .value_name("INPUT")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Report configuration file (TOML)")
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format: JSON or XML (overrides the config file)")
                        .value_name("FORMAT")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help("Base name of the output file, without extension")
                        .value_name("NAME")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Print a per-test summary of a JSON suite report")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Path to a JSON suite report")
                        .value_name("INPUT")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}

pub fn process_command(matches: ArgMatches) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let options = commands::render::RenderOptions {
                input: render_matches
                    .get_one::<PathBuf>("input")
                    .cloned()
                    .unwrap_or_default(), // required
                config: render_matches.get_one::<PathBuf>("config").cloned(),
                format: render_matches.get_one::<String>("format").cloned(),
                name: render_matches.get_one::<String>("name").cloned(),
            };
            commands::render::execute(&options)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(("summary", summary_matches)) => {
            let input = summary_matches
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_default(); // required
            commands::summary::execute(&input)
        }
        // `subcommand_required` means clap has already exited for anything else.
        _ => Ok(ExitCode::SUCCESS),
    }
}
