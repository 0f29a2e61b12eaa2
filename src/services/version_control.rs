use async_trait::async_trait;

use crate::error::AppResult;

/// Queries the version-control tool runs against the workspace root.
#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Probes for the underlying tool, returning its version banner.
    async fn tool_version(&self) -> AppResult<String>;

    /// Whether the workspace root sits inside a managed working tree.
    async fn is_work_tree(&self) -> AppResult<bool>;

    /// Paths with uncommitted modifications, relative to the workspace root,
    /// in the order the tool reports them.
    async fn changed_paths(&self) -> AppResult<Vec<String>>;

    /// The uncommitted diff text for one path. Empty when the file carries
    /// no textual change despite being listed.
    async fn file_diff(&self, path: &str) -> AppResult<String>;
}
