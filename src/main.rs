//! fieldtags CLI entry point

use clap::Parser;
use fieldtags::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use fieldtags::cli::{Command, args::Cli, logging};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit_code = match cli.command {
        Command::Init { force } => match fieldtags::cli::init::run_init(force) {
            Ok(result) => {
                fieldtags::cli::init::print_summary(&result);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
        Command::Check {
            records,
            schema,
            format,
        } => fieldtags::cli::check::run_check(&records, &schema, format, cli.color),
        Command::Explain {
            tag,
            strict,
            format,
        } => fieldtags::cli::explain::run_explain(&tag, strict, format),
        Command::Demo => fieldtags::cli::demo::run_demo(),
    };

    process::exit(exit_code);
}
