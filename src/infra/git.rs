use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    async fn run_git(&self, args: &[&str]) -> AppResult<String> {
        debug!(?args, root = %self.workspace_root.display(), "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to launch git: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn tool_version(&self) -> AppResult<String> {
        let banner = self.run_git(&["--version"]).await?;
        Ok(banner.trim().to_string())
    }

    async fn is_work_tree(&self) -> AppResult<bool> {
        let answer = self.run_git(&["rev-parse", "--is-inside-work-tree"]).await?;
        Ok(answer.trim() == "true")
    }

    async fn changed_paths(&self) -> AppResult<Vec<String>> {
        let listing = self.run_git(&["diff", "--name-only", "HEAD"]).await?;
        Ok(listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn file_diff(&self, path: &str) -> AppResult<String> {
        self.run_git(&["diff", "HEAD", "--", path]).await
    }
}
