//! acr - Artifactory Cache Remover
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Command-line front end for `acr-core`.
//!
//! `list` and `remove` are separate commands on purpose: removal only ever
//! works from a JSON file written by an earlier `list --json`, so what gets
//! deleted is exactly what was reviewed.
//!
//! ```text
//! acr list --remote bincrafters --repository bintray-conan-cache --json empty.json
//! acr remove --json empty.json --token $ACR_TOKEN
//! ```

pub mod cmd;
pub mod ui;

pub use acr_core::RemoteConfig;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "acr")]
#[command(author, version, about = "Remove empty cache storages from Artifactory")]
pub struct Cli {
    /// Set the logging level
    #[arg(long, short = 'l', global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List empty storages of a cache repository
    List {
        /// Artifactory remote name, e.g. bincrafters
        #[arg(long, short = 'e')]
        remote: Option<String>,
        /// Repository to be searched, e.g. bintray-conan-cache
        #[arg(long, short = 'r')]
        repository: Option<String>,
        /// Save listed packages into a JSON file
        #[arg(long, short = 'j')]
        json: Option<PathBuf>,
        /// Override the JSON file if it already exists
        #[arg(long, short = 'f')]
        force: bool,
        /// Artifactory token; public repositories can be listed without one
        #[arg(long, short = 't', env = "ACR_TOKEN", hide_env_values = true)]
        token: Option<String>,
        /// Artifactory API base URL, replacing the one derived from --remote
        #[arg(long, env = "ACR_API_URL")]
        api_url: Option<String>,
    },
    /// Remove the storages listed in a JSON file
    Remove {
        /// JSON file written by `acr list --json`
        #[arg(long, short = 'j')]
        json: Option<PathBuf>,
        /// Do not execute real deletions
        #[arg(long, short = 'd')]
        dry_run: bool,
        /// Artifactory admin token
        #[arg(long, short = 't', env = "ACR_TOKEN", hide_env_values = true)]
        token: Option<String>,
        /// Ignored: the remote comes from the JSON file
        #[arg(long, short = 'e', hide = true)]
        remote: Option<String>,
        /// Ignored: the repository comes from the JSON file
        #[arg(long, short = 'r', hide = true)]
        repository: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for acr's own crates.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("`list` needs --remote or --api-url.")]
    MissingRemote,

    #[error("`list` needs --repository.")]
    MissingRepository,

    #[error("The path indicated by `--json` already exists: {}. Use `--force` to override.", .0.display())]
    SnapshotExists(PathBuf),

    #[error("A json file is required to remove packages. Pass --json=<path>.")]
    MissingSnapshot,

    #[error("Remove action requires Artifactory token. Pass --token with your admin token.")]
    MissingToken,
}

/// A command whose arguments passed validation.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    List {
        remote: RemoteConfig,
        repository: String,
        json: Option<PathBuf>,
        token: Option<String>,
    },
    Remove {
        json: PathBuf,
        dry_run: bool,
        token: String,
    },
}

impl Commands {
    /// Check argument rules before anything touches the network.
    ///
    /// Flags `remove` ignores are reported as a warning rather than rejected.
    pub fn validate(self) -> Result<Action, ArgsError> {
        match self {
            Self::List {
                remote,
                repository,
                json,
                force,
                token,
                api_url,
            } => {
                let remote = match (api_url, remote) {
                    (Some(url), _) => RemoteConfig::with_api_base(&url),
                    (None, Some(name)) => RemoteConfig::from_remote(&name),
                    (None, None) => return Err(ArgsError::MissingRemote),
                };
                let repository = repository.ok_or(ArgsError::MissingRepository)?;
                if let Some(path) = &json {
                    if path.exists() && !force {
                        return Err(ArgsError::SnapshotExists(path.clone()));
                    }
                }
                Ok(Action::List {
                    remote,
                    repository,
                    json,
                    token,
                })
            }
            Self::Remove {
                json,
                dry_run,
                token,
                remote,
                repository,
            } => {
                let json = json.ok_or(ArgsError::MissingSnapshot)?;
                let token = token.ok_or(ArgsError::MissingToken)?;
                if remote.is_some() || repository.is_some() {
                    tracing::warn!(
                        "Remove command consumes Remote and Repository directly from JSON file only."
                    );
                }
                Ok(Action::Remove {
                    json,
                    dry_run,
                    token,
                })
            }
        }
    }
}
