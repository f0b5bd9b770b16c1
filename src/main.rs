use clap::Parser;
use std::process::ExitCode;
use stig_report::{
    handlers::{handle_dashboard, handle_workbook},
    Cli, Command,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Dashboard {
            paths,
            output,
            format,
            title,
        } => handle_dashboard(paths, output, *format, title),
        Command::Workbook { paths, output } => handle_workbook(paths, output),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "stig_report=debug"
    } else {
        "stig_report=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
