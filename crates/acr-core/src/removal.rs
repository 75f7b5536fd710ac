//! `remove`: delete the storages recorded in a snapshot.
//!
//! Nothing is deleted unless the user types `YES`. After that every recorded
//! storage is attempted once; a failed delete is reported and the run goes on
//! with the next one.

use std::path::Path;

use crate::client::{DeleteStatus, StorageApi};
use crate::confirm::Confirm;
use crate::error::RemoveError;
use crate::reporter::Reporter;
use crate::snapshot::Snapshot;

/// Path segment present in listing URLs but not in delete URLs.
pub const API_STORAGE_INFIX: &str = "/api/storage";

/// The only answer that lets a removal proceed.
pub const CONFIRMATION: &str = "YES";

/// Per-storage result of a confirmed removal, each list in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    /// Delete URLs the server accepted.
    pub deleted: Vec<String>,
    /// Delete URLs that were refused or never reached the server.
    pub failed: Vec<String>,
    /// Delete URLs only logged because of dry-run mode.
    pub skipped: Vec<String>,
}

/// How a removal run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The confirmation was refused; nothing was touched.
    Cancelled,
    /// The confirmation was accepted and every storage was handled.
    Completed(RemovalSummary),
}

/// Delete URL for a storage listed under `base`.
///
/// Listing URLs look like `{host}/artifactory/api/storage/{repo}`, delete
/// URLs like `{host}/artifactory/{repo}`. Only the first `/api/storage` is
/// removed; the mapping holds for Artifactory's URL layout and nothing checks
/// it beyond that.
///
/// ```
/// use acr_core::removal::delete_url;
///
/// assert_eq!(
///     delete_url("https://bincrafters.jfrog.io/artifactory/api/storage/bintray-conan-cache", "/zlib"),
///     "https://bincrafters.jfrog.io/artifactory/bintray-conan-cache/zlib"
/// );
/// ```
pub fn delete_url(base: &str, storage_uri: &str) -> String {
    format!("{base}{storage_uri}").replacen(API_STORAGE_INFIX, "", 1)
}

/// The question put to the user before anything is deleted.
pub fn confirmation_prompt(count: usize, repository: &str) -> String {
    format!(
        "!!!WARNING!!! Are you sure? This operation CAN NOT BE UNDONE!\n\
         This action will DELETE {count} packages from {repository}.\n\
         Type '{CONFIRMATION}' if you are sure: "
    )
}

/// Load the snapshot at `snapshot_path` and remove what it records.
pub async fn remove_packages<A, C, R>(
    api: &A,
    confirm: &C,
    reporter: &R,
    snapshot_path: &Path,
    dry_run: bool,
) -> Result<RemovalOutcome, RemoveError>
where
    A: StorageApi + ?Sized,
    C: Confirm + ?Sized,
    R: Reporter + ?Sized,
{
    let snapshot = Snapshot::load(snapshot_path)?;
    remove_snapshot(api, confirm, reporter, &snapshot, dry_run).await
}

/// Remove the storages recorded in `snapshot` after confirmation.
pub async fn remove_snapshot<A, C, R>(
    api: &A,
    confirm: &C,
    reporter: &R,
    snapshot: &Snapshot,
    dry_run: bool,
) -> Result<RemovalOutcome, RemoveError>
where
    A: StorageApi + ?Sized,
    C: Confirm + ?Sized,
    R: Reporter + ?Sized,
{
    let prompt = confirmation_prompt(snapshot.children.len(), &snapshot.repo);
    let answer = confirm.ask(&prompt)?;
    if answer.trim() != CONFIRMATION {
        reporter.error(&format!(
            "Invalid answer, only '{CONFIRMATION}' will be accepted. Good bye."
        ));
        return Ok(RemovalOutcome::Cancelled);
    }

    if dry_run {
        reporter.warning("Running Dry-run mode. No real deletion will be executed.");
    }

    let mut summary = RemovalSummary::default();
    for child in &snapshot.children {
        let url = delete_url(&snapshot.uri, &child.uri);
        reporter.debug(&format!("Delete: {url}"));

        if dry_run {
            reporter.info(&format!("Would delete: {url}"));
            summary.skipped.push(url);
            continue;
        }

        match api.delete(&url).await {
            Ok(DeleteStatus::Ok) => {
                reporter.success(&format!("Deleted with success: {url}"));
                summary.deleted.push(url);
            }
            Ok(DeleteStatus::Failed { status, message }) => {
                reporter.error(&format!(
                    "Could not delete Storage {url} (HTTP {status}): {message}"
                ));
                summary.failed.push(url);
            }
            Err(e) => {
                reporter.error(&format!("Could not delete Storage {url}: {e}"));
                summary.failed.push(url);
            }
        }
    }

    if !dry_run {
        reporter.info(&format!(
            "Removed {} of {} packages from {}.",
            summary.deleted.len(),
            snapshot.children.len(),
            snapshot.repo
        ));
    }

    Ok(RemovalOutcome::Completed(summary))
}
