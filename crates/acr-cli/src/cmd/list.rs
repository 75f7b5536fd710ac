//! List command

use std::path::Path;

use acr_core::discovery::list_packages;
use acr_core::{ArtifactoryClient, RemoteConfig, Reporter, TracingReporter};
use anyhow::{Context, Result};

/// Find empty storages in `repository` and optionally save them to `json`.
pub async fn list(
    remote: &RemoteConfig,
    repository: &str,
    json: Option<&Path>,
    token: Option<String>,
) -> Result<()> {
    let reporter = TracingReporter;
    reporter.info(&format!(
        "Executing list command ...\n    Remote: {remote}\n    Storage: {repository}"
    ));

    let client = ArtifactoryClient::new(token);
    let snapshot = list_packages(&client, &reporter, remote, repository, json)
        .await
        .with_context(|| format!("Failed to list empty storages of {repository}"))?;

    for child in &snapshot.children {
        reporter.info(&format!("Empty: {}", child.uri));
    }
    if json.is_none() && !snapshot.children.is_empty() {
        reporter.warning("Nothing saved. Pass --json=<path> to keep this list for `acr remove`.");
    }

    Ok(())
}
