use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "wordfall")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("wordfall_config.json"))
    }

    /// Where the diagnostic log goes while the terminal is taken over
    pub fn log_dir() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("wordfall")
        } else {
            ProjectDirs::from("", "", "wordfall")
                .map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
                .unwrap_or_else(std::env::temp_dir)
        }
    }
}
