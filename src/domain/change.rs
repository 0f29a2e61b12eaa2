use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use time::{OffsetDateTime, Time};

/// A changed file as listed by the version-control tool.
#[derive(Debug, Clone)]
pub struct ChangedFile {
    pub relative: String,
    pub absolute: PathBuf,
}

impl ChangedFile {
    pub fn resolve(workspace_root: &Path, relative: &str) -> Self {
        Self {
            relative: relative.to_string(),
            absolute: workspace_root.join(relative),
        }
    }
}

/// Local midnight of the invocation moment. Falls back to UTC midnight when
/// the local offset cannot be determined.
pub fn local_midnight() -> SystemTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.replace_time(Time::MIDNIGHT).into()
}

/// Whether the file's on-disk modification instant is at or after the
/// threshold. A failed stat (file deleted after listing) counts as not
/// modified.
pub fn modified_since(path: &Path, threshold: SystemTime) -> bool {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(|mtime| mtime >= threshold)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    #[test]
    fn counts_fresh_files_as_modified() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("touched.txt");
        fs::write(&file, "contents").expect("write");

        let one_hour_ago = SystemTime::now() - Duration::from_secs(3600);
        assert!(modified_since(&file, one_hour_ago));
    }

    #[test]
    fn rejects_files_older_than_the_threshold() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("stale.txt");
        fs::write(&file, "contents").expect("write");

        let one_hour_ahead = SystemTime::now() + Duration::from_secs(3600);
        assert!(!modified_since(&file, one_hour_ahead));
    }

    #[test]
    fn missing_files_are_excluded_not_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let gone = dir.path().join("deleted-after-listing.txt");
        assert!(!modified_since(&gone, SystemTime::now()));
    }

    #[test]
    fn midnight_is_never_in_the_future() {
        let midnight = local_midnight();
        let now = SystemTime::now();
        assert!(midnight <= now);
        let age = now.duration_since(midnight).expect("midnight precedes now");
        // A DST-shifted day can run to 25 hours.
        assert!(age <= Duration::from_secs(25 * 3600));
    }

    #[test]
    fn resolves_relative_paths_under_the_root() {
        let file = ChangedFile::resolve(Path::new("/work/project"), "src/lib.rs");
        assert_eq!(file.relative, "src/lib.rs");
        assert_eq!(file.absolute, Path::new("/work/project/src/lib.rs"));
    }
}
