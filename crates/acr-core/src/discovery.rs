//! `list`: find the empty storages of a repository.

use std::path::Path;

use crate::client::{RemoteConfig, StorageApi};
use crate::error::ListError;
use crate::evaluator::is_empty;
use crate::listing::FolderListing;
use crate::reporter::Reporter;
use crate::snapshot::Snapshot;

/// Check every top-level storage of `repository` and record the empty ones.
///
/// The returned snapshot is the repository root listing with `children`
/// replaced by the empty storages; every other field is kept as listed. When
/// `snapshot_path` is given the snapshot is also written there, overwriting
/// whatever is at that path.
///
/// Any listing failure aborts the whole run.
pub async fn list_packages<A, R>(
    api: &A,
    reporter: &R,
    remote: &RemoteConfig,
    repository: &str,
    snapshot_path: Option<&Path>,
) -> Result<Snapshot, ListError>
where
    A: StorageApi + ?Sized,
    R: Reporter + ?Sized,
{
    let storage_url = remote.storage_url(repository);
    reporter.debug(&format!("Storage URL: {storage_url}"));

    let FolderListing {
        repo,
        uri,
        children,
        extra,
    } = api.folder(&storage_url, "").await?;
    reporter.debug(&format!("Storage count: {}", children.len()));

    let mut to_be_removed = Vec::new();
    for child in children {
        reporter.info(&format!("Checking storage: {}", child.uri));
        let empty = is_empty(api, reporter, &storage_url, &child.uri).await?;
        reporter.debug(&format!("Storage {} is empty: {empty}", child.uri));
        if empty {
            to_be_removed.push(child);
        }
    }
    reporter.info(&format!("Found {} empty packages.", to_be_removed.len()));

    let snapshot = Snapshot {
        repo: repo.unwrap_or_else(|| repository.to_string()),
        uri: uri.unwrap_or(storage_url),
        children: to_be_removed,
        extra,
    };

    if let Some(path) = snapshot_path {
        snapshot.save(path)?;
        reporter.success(&format!("Saved empty packages to {}", path.display()));
    }

    Ok(snapshot)
}
