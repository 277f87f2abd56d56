//! Runtime configuration for the showcase.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::notice::NOTICE_DURATION;

/// Number of decorative particles on the page background
pub const PARTICLE_COUNT: usize = 50;

/// Delay before the loading indicator is dismissed
pub const LOADING_DELAY: Duration = Duration::from_secs(1);

/// Settings resolved at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    /// Directory holding the persistent store and logs
    pub data_dir: PathBuf,
    /// Instance name, used for the window title and the log file name
    pub instance: String,
    pub particle_count: usize,
    pub loading_delay: Duration,
    pub notice_duration: Duration,
    /// Also write JSONL logs under `<data_dir>/logs`
    pub log_to_file: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            instance: "showcase".to_string(),
            particle_count: PARTICLE_COUNT,
            loading_delay: LOADING_DELAY,
            notice_duration: NOTICE_DURATION,
            log_to_file: false,
        }
    }
}

impl ShowcaseConfig {
    /// Config rooted at `data_dir`, defaults elsewhere
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// `<platform data dir>/showcase`, or `./showcase` when the platform has none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showcase")
}
