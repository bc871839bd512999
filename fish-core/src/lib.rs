//! Paragraph pagination for minimal text readers
//!
//! This crate cuts a plain-text document into short display paragraphs
//! (at most two lines of `max_length / 2` characters each) and keeps an
//! exact mapping between those paragraphs and the 1-based source lines
//! they came from, so a reader can save its position and jump to any
//! source line.
//!
//! # Pipeline
//!
//! For every non-blank source line, in document order:
//! 1. [`SentenceExtractor`] splits the line after `。？！` (with an
//!    optional closing quote)
//! 2. [`LinePacker`] greedily packs sentences into display lines, handing
//!    oversized sentences to [`ForcedSplitter`]
//! 3. [`segment::pairer`] joins display lines two at a time
//!
//! [`ContentPipeline`] drives the stages and records every paragraph in a
//! [`LineMapping`].
//!
//! # Example
//!
//! ```rust
//! use fish_core::{ContentPipeline, PaginationConfig};
//!
//! let pipeline = ContentPipeline::new(PaginationConfig::default()).unwrap();
//! let doc = pipeline.paginate("\n天气很好。你好吗？\n");
//!
//! assert_eq!(doc.book_content(), ["天气很好。你好吗？"]);
//! assert_eq!(doc.actual_line_number(0), Some(2));
//! assert_eq!(doc.display_line_index(1), None);
//! ```

pub mod bookshelf;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod mapping;
pub mod pipeline;
pub mod segment;
pub mod session;
pub mod tables;

pub use bookshelf::{BookEntry, Bookshelf, BOOKSHELF_FILE};
pub use config::{PaginationConfig, PaginationConfigBuilder};
pub use document::PaginatedDocument;
pub use error::{ConfigError, LoadError, LoadResult, StoreError, StoreResult};
pub use loader::{count_lines, source_lines, DocumentLoader};
pub use mapping::{LineMapping, LineMappingBuilder, NOT_FOUND};
pub use pipeline::ContentPipeline;
pub use segment::{ForcedSplitter, LinePacker, SentenceExtractor, Segmenter};
pub use session::{ProgressStore, ReadingSession, NOTHING_TO_DISPLAY};
pub use tables::PunctuationTables;
