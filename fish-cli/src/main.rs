//! fish: read long text files a paragraph at a time

use clap::Parser;
use fish_cli::commands::{Commands, GlobalArgs};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "fish", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cli
        .command
        .execute(&cli.global, &mut out)
        .and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(global: &GlobalArgs) {
    if global.quiet {
        return;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(global.log_level()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fish", "next", "-n", "3", "--data-dir", "/tmp/x", "-vv"])
            .unwrap();

        assert!(matches!(cli.command, Commands::Next(ref args) if args.count == 3));
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(
            cli.global.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/x"))
        );
    }

    #[test]
    fn test_paginate_requires_input() {
        assert!(Cli::try_parse_from(["fish", "paginate"]).is_err());
    }
}
