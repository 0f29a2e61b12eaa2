use std::fmt::Write as _;

/// Byte budget for the delivered report, measured in UTF-8.
pub const MAX_REPORT_BYTES: usize = 500 * 1024;

/// A relative path paired with its raw uncommitted diff text.
#[derive(Debug, Clone)]
pub struct FileDiffRecord {
    pub path: String,
    pub diff: String,
}

/// The assembled diff report: a summary header listing every eligible file,
/// then one bordered block per file whose diff has real content.
#[derive(Debug)]
pub struct Report {
    text: String,
    files_with_content: usize,
}

impl Report {
    pub fn assemble(records: &[FileDiffRecord]) -> Self {
        let noun = if records.len() == 1 { "file" } else { "files" };
        let mut text = String::new();
        let _ = writeln!(
            text,
            "Uncommitted changes from today ({} {noun}):",
            records.len()
        );
        for record in records {
            let _ = writeln!(text, "{}", record.path);
        }

        let mut files_with_content = 0;
        for record in records {
            if record.diff.trim().is_empty() {
                continue;
            }
            files_with_content += 1;
            let _ = writeln!(text);
            let _ = writeln!(text, "===== BEGIN DIFF: {} =====", record.path);
            text.push_str(&record.diff);
            if !record.diff.ends_with('\n') {
                text.push('\n');
            }
            let _ = writeln!(text, "===== END DIFF: {} =====", record.path);
        }

        Self {
            text,
            files_with_content,
        }
    }

    /// Whether at least one file contributed a non-empty diff block.
    pub fn has_content(&self) -> bool {
        self.files_with_content > 0
    }

    /// The text to deliver: capped at [`MAX_REPORT_BYTES`], then trimmed of
    /// surrounding whitespace. The flag reports whether the cap cut anything.
    pub fn delivery_text(&self) -> (String, bool) {
        let truncated = self.text.len() > MAX_REPORT_BYTES;
        let capped = truncate_utf8(&self.text, MAX_REPORT_BYTES);
        (capped.trim().to_string(), truncated)
    }
}

/// Cuts to at most `max` bytes without splitting a UTF-8 sequence. The cut
/// is a raw prefix cut, not diff-aware.
fn truncate_utf8(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
