//! acr - Artifactory Cache Remover CLI

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use acr_cli::cmd;
use acr_cli::{Action, Cli, LogLevel};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            e.print()?;
            return Ok(code);
        }
    };

    init_logging(cli.log_level);

    let action = match cli.command.validate() {
        Ok(action) => action,
        Err(e) => {
            tracing::error!("ERROR: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match action {
        Action::List {
            remote,
            repository,
            json,
            token,
        } => cmd::list::list(&remote, &repository, json.as_deref(), token).await?,
        Action::Remove {
            json,
            dry_run,
            token,
        } => cmd::remove::remove(&json, dry_run, token).await?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Log to stderr as `LEVEL message`; `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: LogLevel) {
    let own = level.directive();
    // HTTP internals stay quiet unless asked for through RUST_LOG.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,acr={own},acr_cli={own},acr_core={own}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
