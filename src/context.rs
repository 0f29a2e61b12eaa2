use std::path::PathBuf;
use std::sync::Arc;

use crate::services::{ClipboardSink, Notifier, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub working_dir: Option<PathBuf>,
    pub version_control: Arc<dyn VersionControlService>,
    pub notifier: Arc<Notifier>,
    pub clipboard: Arc<dyn ClipboardSink>,
}

impl AppContext {
    pub fn new(
        working_dir: Option<PathBuf>,
        version_control: Arc<dyn VersionControlService>,
        notifier: Arc<Notifier>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        Self {
            working_dir,
            version_control,
            notifier,
            clipboard,
        }
    }
}
