//! Remove command

use std::path::Path;

use acr_core::removal::{RemovalOutcome, remove_packages};
use acr_core::{ArtifactoryClient, TracingReporter};
use anyhow::{Context, Result};

use crate::ui::StdinConfirm;

/// Delete the storages recorded in `json` after interactive confirmation.
///
/// A refused confirmation or individual failed deletes are reported, not
/// returned as errors.
pub async fn remove(json: &Path, dry_run: bool, token: String) -> Result<()> {
    let client = ArtifactoryClient::new(Some(token));

    let outcome = remove_packages(&client, &StdinConfirm, &TracingReporter, json, dry_run)
        .await
        .with_context(|| format!("Failed to remove packages listed in {}", json.display()))?;

    if let RemovalOutcome::Completed(summary) = outcome {
        if !summary.failed.is_empty() {
            tracing::warn!("{} packages could not be deleted.", summary.failed.len());
        }
    }

    Ok(())
}
