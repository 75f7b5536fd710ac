//! In-memory fakes shared by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{ApiError, DeleteStatus, StorageApi};
use crate::listing::{FolderListing, ListingChild};
use crate::reporter::Reporter;

/// A repository tree served from memory, recording every call.
pub(crate) struct FakeApi {
    storage_url: String,
    folders: HashMap<String, FolderListing>,
    rejected: HashSet<String>,
    unreachable: HashSet<String>,
    listed: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn new(storage_url: &str) -> Self {
        Self {
            storage_url: storage_url.to_string(),
            folders: HashMap::new(),
            rejected: HashSet::new(),
            unreachable: HashSet::new(),
            listed: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_folder(self, path: &str, children: Vec<ListingChild>) -> Self {
        self.with_listing(path, FolderListing::new(children))
    }

    pub(crate) fn with_listing(mut self, path: &str, listing: FolderListing) -> Self {
        self.folders.insert(path.to_string(), listing);
        self
    }

    /// The server answers deletes of `url` with HTTP 500.
    pub(crate) fn rejecting(mut self, url: &str) -> Self {
        self.rejected.insert(url.to_string());
        self
    }

    /// Deletes of `url` fail before reaching the server.
    pub(crate) fn unreachable(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_string());
        self
    }

    pub(crate) fn listed(&self) -> Vec<String> {
        self.listed.lock().unwrap().clone()
    }

    pub(crate) fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageApi for FakeApi {
    async fn folder(&self, storage_url: &str, path: &str) -> Result<FolderListing, ApiError> {
        assert_eq!(storage_url, self.storage_url, "listing outside the fake repository");
        self.listed.lock().unwrap().push(path.to_string());
        self.folders
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                url: format!("{storage_url}{path}"),
                status: 404,
            })
    }

    async fn delete(&self, url: &str) -> Result<DeleteStatus, ApiError> {
        self.deleted.lock().unwrap().push(url.to_string());
        if self.unreachable.contains(url) {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: 502,
            });
        }
        if self.rejected.contains(url) {
            return Ok(DeleteStatus::Failed {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(DeleteStatus::Ok)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

/// Captures reported messages in order.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    messages: Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub(crate) fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, msg: &str) {
        self.messages.lock().unwrap().push((level, msg.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn debug(&self, msg: &str) {
        self.push(Level::Debug, msg);
    }
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }
    fn success(&self, msg: &str) {
        self.push(Level::Success, msg);
    }
    fn warning(&self, msg: &str) {
        self.push(Level::Warning, msg);
    }
    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }
}
