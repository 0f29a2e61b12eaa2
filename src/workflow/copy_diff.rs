use tracing::debug;

use crate::context::AppContext;
use crate::domain::change::{self, ChangedFile};
use crate::domain::report::{FileDiffRecord, Report};
use crate::services::Severity;

/// How one invocation of the copy command ended. Every variant other than
/// `Delivered` has already been surfaced to the user as a notification; no
/// error value crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Delivered { bytes: usize, truncated: bool },
    NoWorkspace,
    ToolUnavailable,
    NotARepository,
    NoFilesToday,
    NoRealChanges,
    ClipboardWriteFailed,
}

/// Gathers today's uncommitted changes and places the assembled diff report
/// on the clipboard. The steps run strictly in sequence; each external query
/// is awaited before the next begins.
pub async fn copy_today_diff(ctx: &AppContext) -> CopyOutcome {
    let Some(workspace_root) = ctx.working_dir.as_deref() else {
        ctx.notifier
            .notify(Severity::Error, "Open a folder before copying today's diff.");
        return CopyOutcome::NoWorkspace;
    };

    if let Err(err) = ctx.version_control.tool_version().await {
        debug!(%err, "tool probe failed");
        ctx.notifier.notify(
            Severity::Error,
            "Git does not appear to be installed or runnable.",
        );
        return CopyOutcome::ToolUnavailable;
    }

    match ctx.version_control.is_work_tree().await {
        Ok(true) => {}
        Ok(false) | Err(_) => {
            ctx.notifier.notify(
                Severity::Error,
                "This folder is not inside a Git repository.",
            );
            return CopyOutcome::NotARepository;
        }
    }

    // A failed listing degrades to "no changes" rather than a hard stop; a
    // repository without any commit yet lands here too.
    let listed = ctx.version_control.changed_paths().await.unwrap_or_default();
    debug!(listed = listed.len(), "changed paths enumerated");

    let threshold = change::local_midnight();
    let eligible: Vec<ChangedFile> = listed
        .iter()
        .map(|relative| ChangedFile::resolve(workspace_root, relative))
        .filter(|file| change::modified_since(&file.absolute, threshold))
        .collect();

    if eligible.is_empty() {
        ctx.notifier
            .notify(Severity::Info, "No files were modified today.");
        return CopyOutcome::NoFilesToday;
    }

    let mut records = Vec::with_capacity(eligible.len());
    for file in &eligible {
        // One failing diff becomes an empty record; the batch continues.
        let diff = ctx
            .version_control
            .file_diff(&file.relative)
            .await
            .unwrap_or_default();
        records.push(FileDiffRecord {
            path: file.relative.clone(),
            diff,
        });
    }

    let report = Report::assemble(&records);
    if !report.has_content() {
        ctx.notifier.notify(
            Severity::Info,
            "Today's files carry no uncommitted changes.",
        );
        return CopyOutcome::NoRealChanges;
    }

    let (text, truncated) = report.delivery_text();
    if truncated {
        ctx.notifier.notify(
            Severity::Warning,
            "The diff report exceeded 500 KiB and was truncated.",
        );
    }

    match ctx.clipboard.write_text(&text).await {
        Ok(()) => {
            let noun = if eligible.len() == 1 { "file" } else { "files" };
            ctx.notifier.notify(
                Severity::Info,
                &format!(
                    "Copied today's diff for {} {noun} to the clipboard.",
                    eligible.len()
                ),
            );
            CopyOutcome::Delivered {
                bytes: text.len(),
                truncated,
            }
        }
        Err(err) => {
            ctx.notifier.notify(
                Severity::Error,
                &format!("Could not write to the clipboard: {err}"),
            );
            CopyOutcome::ClipboardWriteFailed
        }
    }
}
