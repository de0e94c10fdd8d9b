//! CLI-specific configuration for the terminal shell.
use std::env;
use std::path::PathBuf;

/// Terminal shell configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory receiving the daily rolling log files.
    pub log_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_LOG_DIR` - Log directory (default: platform cache dir + `logs`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("DUNGEON_LOG_DIR") {
            config.log_dir = dir;
        }

        config
    }
}

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/dungeon/logs`
/// - Linux: `~/.cache/dungeon/logs` (or `$XDG_CACHE_HOME/dungeon/logs`)
/// - Windows: `%LOCALAPPDATA%\dungeon\logs`
/// - Fallback: `/tmp/dungeon/logs`
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/dungeon"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
