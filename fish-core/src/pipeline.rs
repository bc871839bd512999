//! Document-level orchestration of the segmentation stages

use crate::config::PaginationConfig;
use crate::document::PaginatedDocument;
use crate::error::{ConfigError, LoadResult};
use crate::loader::{count_lines, source_lines, DocumentLoader};
use crate::mapping::LineMappingBuilder;
use crate::segment::Segmenter;
use crate::tables::PunctuationTables;
use std::path::Path;

/// Turns a whole document into paragraphs and a line mapping.
///
/// Holds no per-document state; every call returns a fresh
/// [`PaginatedDocument`].
#[derive(Debug, Clone)]
pub struct ContentPipeline {
    config: PaginationConfig,
    segmenter: Segmenter,
    loader: DocumentLoader,
}

impl ContentPipeline {
    /// Create a pipeline with the default punctuation tables
    pub fn new(config: PaginationConfig) -> Result<Self, ConfigError> {
        Self::with_tables(config, PunctuationTables::default())
    }

    /// Create a pipeline with custom punctuation tables
    pub fn with_tables(
        config: PaginationConfig,
        tables: PunctuationTables,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            segmenter: Segmenter::new(tables, config.max_line_length()),
            loader: DocumentLoader::new(config.max_file_size),
        })
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Paginate in-memory text.
    ///
    /// Lines are numbered from 1; blank lines produce nothing but still
    /// count towards the numbering.
    pub fn paginate(&self, text: &str) -> PaginatedDocument {
        let mut paragraphs = Vec::new();
        let mut mapping = LineMappingBuilder::new();
        let mut total_lines = 0;

        for (idx, raw_line) in source_lines(text).enumerate() {
            let source_line = idx + 1;
            total_lines = source_line;

            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            for paragraph in self.segmenter.paragraphs(line) {
                mapping.push(source_line);
                paragraphs.push(paragraph);
            }
        }

        debug_assert_eq!(total_lines, count_lines(text));
        log::info!(
            "Formatted {total_lines} source lines into {} paragraphs",
            paragraphs.len()
        );

        PaginatedDocument::new(paragraphs, mapping.build(), total_lines)
    }

    /// Read and paginate a file, reporting loading failures as errors
    pub fn try_load(&self, path: &Path) -> LoadResult<PaginatedDocument> {
        log::info!("Loading book content from {}", path.display());
        let text = self.loader.read(path)?;
        Ok(self.paginate(&text))
    }

    /// Read and paginate a file.
    ///
    /// Loading failures never escape: the result is then a single
    /// paragraph describing the failure, with an empty mapping.
    pub fn load(&self, path: &Path) -> PaginatedDocument {
        match self.try_load(path) {
            Ok(document) => document,
            Err(err) => {
                log::error!("{err}");
                PaginatedDocument::diagnostic(err.to_string())
            }
        }
    }
}
