//! Path resolution for history and settings files

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "TOKENMETER_HOME";

/// Resolves standard paths for persisted files
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// `$TOKENMETER_HOME`, or `~/.tokenmeter`
    pub fn new() -> std::io::Result<Self> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(root));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_root(home.join(".tokenmeter")))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get history.json path
    pub fn history_file(&self) -> PathBuf {
        self.root.join("history.json")
    }

    /// Get settings.json path
    pub fn settings_file(&self) -> PathBuf {
        self.root.join("settings.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root() {
        let paths = Paths::with_root("/tmp/tm");
        assert_eq!(paths.root(), Path::new("/tmp/tm"));
    }

    #[test]
    fn test_history_file() {
        let paths = Paths::with_root("/tmp/tm");
        assert!(paths.history_file().ends_with("history.json"));
        assert!(paths.history_file().starts_with("/tmp/tm"));
    }

    #[test]
    fn test_settings_file() {
        let paths = Paths::with_root("/tmp/tm");
        assert!(paths.settings_file().ends_with("settings.json"));
    }
}
