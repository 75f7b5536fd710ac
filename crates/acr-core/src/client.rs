//! Artifactory storage API client.
//!
//! Listing goes through the REST API (`{api}/storage/{repo}{path}`); deletion
//! targets the plain repository path and takes a fully built URL.
//!
//! See the "Folder Info", "Delete Item" and "Authentication" sections of the
//! Artifactory REST API reference.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use std::fmt;
use thiserror::Error;

use crate::listing::FolderListing;

/// Failure talking to the storage API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never got a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A listing was answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// A listing body is not a folder listing.
    #[error("Malformed listing from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result of a delete request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStatus {
    /// The server accepted the delete.
    Ok,
    /// The server refused the delete.
    Failed {
        /// HTTP status code.
        status: u16,
        /// Response body, empty when unreadable.
        message: String,
    },
}

/// Read and delete access to a hierarchical storage API.
#[async_trait]
pub trait StorageApi: Send + Sync {
    /// List the folder at `{storage_url}{path}`.
    async fn folder(&self, storage_url: &str, path: &str) -> Result<FolderListing, ApiError>;

    /// Delete the node at `url`.
    ///
    /// A response from the server is never an `Err`, only a transport failure is.
    async fn delete(&self, url: &str) -> Result<DeleteStatus, ApiError>;
}

/// Where the Artifactory REST API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    api_base: String,
}

impl RemoteConfig {
    /// Cloud instance URL for a remote name, e.g. `bincrafters` →
    /// `https://bincrafters.jfrog.io/artifactory/api`.
    ///
    /// ```
    /// use acr_core::RemoteConfig;
    ///
    /// let remote = RemoteConfig::from_remote("bincrafters");
    /// assert_eq!(
    ///     remote.storage_url("bintray-conan-cache"),
    ///     "https://bincrafters.jfrog.io/artifactory/api/storage/bintray-conan-cache"
    /// );
    /// ```
    pub fn from_remote(remote: &str) -> Self {
        Self {
            api_base: format!("https://{remote}.jfrog.io/artifactory/api"),
        }
    }

    /// Explicit API base URL (self-hosted instances, tests).
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Listing URL of a repository's root.
    pub fn storage_url(&self, repository: &str) -> String {
        format!("{}/storage/{repository}", self.api_base)
    }
}

impl fmt::Display for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_base)
    }
}

/// [`StorageApi`] over HTTP.
#[derive(Clone)]
pub struct ArtifactoryClient {
    client: Client,
    token: Option<String>,
}

impl fmt::Debug for ArtifactoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactoryClient")
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl ArtifactoryClient {
    /// Anonymous when `token` is `None`, which is enough to list public repositories.
    pub fn new(token: Option<String>) -> Self {
        Self::with_client(Client::new(), token)
    }

    /// Reuse a configured `reqwest` client (timeouts, proxies).
    pub fn with_client(client: Client, token: Option<String>) -> Self {
        Self { client, token }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, crate::USER_AGENT);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[async_trait]
impl StorageApi for ArtifactoryClient {
    async fn folder(&self, storage_url: &str, path: &str) -> Result<FolderListing, ApiError> {
        let url = format!("{storage_url}{path}");
        tracing::debug!("GET: {url}");

        let resp = self.request(Method::GET, &url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let listing: FolderListing =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode {
                url: url.clone(),
                source,
            })?;
        tracing::debug!("CHILDREN of {url}: {}", listing.children.len());
        Ok(listing)
    }

    async fn delete(&self, url: &str) -> Result<DeleteStatus, ApiError> {
        tracing::debug!("DELETE: {url}");

        let resp = self.request(Method::DELETE, url).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(DeleteStatus::Ok);
        }

        // An unreadable body still reports the status.
        let message = resp.text().await.unwrap_or_default();
        Ok(DeleteStatus::Failed {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const LISTING: &str = r#"{
        "repo": "bintray-conan-cache",
        "path": "/zlib",
        "children": [ { "uri": "/index.json", "folder": false } ]
    }"#;

    #[test]
    fn test_remote_config_urls() {
        let remote = RemoteConfig::with_api_base("http://localhost:8081/artifactory/api/");
        assert_eq!(remote.api_base(), "http://localhost:8081/artifactory/api");
        assert_eq!(
            remote.storage_url("conan-cache"),
            "http://localhost:8081/artifactory/api/storage/conan-cache"
        );
    }

    #[tokio::test]
    async fn test_folder_sends_bearer_token() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/api/storage/bintray-conan-cache/zlib")
            .match_header("authorization", "Bearer s3cr3t")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(LISTING)
            .create_async()
            .await;

        let remote = RemoteConfig::with_api_base(&format!("{}/api", server.url()));
        let client = ArtifactoryClient::new(Some("s3cr3t".to_string()));
        let listing = client
            .folder(&remote.storage_url("bintray-conan-cache"), "/zlib")
            .await
            .unwrap();

        m.assert_async().await;
        assert_eq!(listing.children, vec![crate::ListingChild::file("/index.json")]);
    }

    #[tokio::test]
    async fn test_folder_without_token_omits_authorization() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/api/storage/public")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{ "children": [] }"#)
            .create_async()
            .await;

        let remote = RemoteConfig::with_api_base(&format!("{}/api", server.url()));
        let client = ArtifactoryClient::new(None);
        let listing = client.folder(&remote.storage_url("public"), "").await.unwrap();

        m.assert_async().await;
        assert!(listing.children.is_empty());
    }

    #[tokio::test]
    async fn test_folder_error_status_is_fatal() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/storage/missing")
            .with_status(404)
            .with_body(r#"{ "errors": [ { "status": 404, "message": "Not Found" } ] }"#)
            .create_async()
            .await;

        let client = ArtifactoryClient::new(None);
        let err = client
            .folder(&format!("{}/api/storage/missing", server.url()), "")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_folder_malformed_body_is_fatal() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/storage/repo/file.txt")
            .with_status(200)
            .with_body(r#"{ "repo": "repo", "path": "/file.txt", "size": "3" }"#)
            .create_async()
            .await;

        let client = ArtifactoryClient::new(None);
        let err = client
            .folder(&format!("{}/api/storage/repo", server.url()), "/file.txt")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_delete_reports_server_message() {
        let mut server = Server::new_async().await;
        let ok = server
            .mock("DELETE", "/bintray-conan-cache/zlib")
            .match_header("authorization", "Bearer admin")
            .with_status(204)
            .create_async()
            .await;
        let denied = server
            .mock("DELETE", "/bintray-conan-cache/boost")
            .with_status(403)
            .with_body("Not enough permissions to delete/overwrite artifact")
            .create_async()
            .await;

        let client = ArtifactoryClient::new(Some("admin".to_string()));
        let first = client
            .delete(&format!("{}/bintray-conan-cache/zlib", server.url()))
            .await
            .unwrap();
        let second = client
            .delete(&format!("{}/bintray-conan-cache/boost", server.url()))
            .await
            .unwrap();

        ok.assert_async().await;
        denied.assert_async().await;
        assert_eq!(first, DeleteStatus::Ok);
        assert_eq!(
            second,
            DeleteStatus::Failed {
                status: 403,
                message: "Not enough permissions to delete/overwrite artifact".to_string(),
            }
        );
    }
}
