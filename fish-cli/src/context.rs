//! Per-invocation state: data directory, configuration, bookshelf

use crate::config::{CliConfig, CONFIG_FILE};
use crate::error::CliError;
use anyhow::{Context, Result};
use fish_core::{Bookshelf, ContentPipeline, ReadingSession, BOOKSHELF_FILE};
use std::path::{Path, PathBuf};

/// Name of the application directory under the platform data directory
pub const APP_DIR: &str = "fish";

/// Resolved locations and configuration for one command
#[derive(Debug)]
pub struct ReaderContext {
    data_dir: PathBuf,
    config: CliConfig,
}

impl ReaderContext {
    /// Resolve the data directory and load the configuration
    pub fn new(data_dir: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs_next::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(CliError::DataDirUnavailable)?,
        };
        log::debug!("Using data directory {}", data_dir.display());

        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join(CONFIG_FILE));
        let config = CliConfig::load(&config_path)?;

        Ok(Self { data_dir, config })
    }

    /// Context with an explicit configuration
    pub fn with_config(data_dir: impl Into<PathBuf>, config: CliConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn bookshelf(&self) -> Result<Bookshelf> {
        let shelf = Bookshelf::open(
            self.data_dir.join(BOOKSHELF_FILE),
            self.config.reader.auto_save_progress,
        )?;
        Ok(shelf)
    }

    pub fn pipeline(&self) -> Result<ContentPipeline> {
        ContentPipeline::new(self.config.pagination)
            .map_err(|err| CliError::ConfigError(err.to_string()).into())
    }

    /// Paginate the current book and position the session at its progress
    pub fn current_session(&self, shelf: &Bookshelf) -> Result<ReadingSession> {
        if !shelf.has_opened_book() {
            return Err(CliError::NoCurrentBook.into());
        }
        let book = shelf.current_book().ok_or(CliError::NoCurrentBook)?;

        let document = self.pipeline()?.load(book);
        log::info!(
            "Loaded {} paragraphs from {}",
            document.len(),
            book.display()
        );

        Ok(ReadingSession::new(book, document, shelf.current_progress()))
    }
}

/// Absolute form of a user-supplied book path
pub fn resolve_book(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    path.canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))
}
