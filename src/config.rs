use std::path::PathBuf;

use crate::cli::Args;

/// Process-wide scan configuration, built once at startup and never mutated.
/// Handlers receive it behind an Arc rather than reading globals, so the
/// scanner and translator stay independently testable.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// Filesystem root under which .mp4 discovery happens.
    pub root: PathBuf,
    /// URL path prefix that replaces `root` in emitted playlist URLs.
    pub prefix: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("scan root does not exist: {}", .0.display())]
    RootMissing(PathBuf),
    #[error("scan root is not a directory: {}", .0.display())]
    RootNotADirectory(PathBuf),
    #[error("public prefix must start with '/': {0:?}")]
    PrefixNotAbsolute(String),
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Config {
            port: args.port,
            root: args.root.clone(),
            prefix: args.prefix.clone(),
        }
    }

    /// Startup sanity checks, run before the listener binds. Failures here
    /// are fatal; a broken root discovered later (e.g. unmounted mid-run) is
    /// handled at scan time instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.exists() {
            return Err(ConfigError::RootMissing(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::RootNotADirectory(self.root.clone()));
        }
        if !self.prefix.starts_with('/') {
            return Err(ConfigError::PrefixNotAbsolute(self.prefix.clone()));
        }
        Ok(())
    }
}
