//! Paginate command implementation

use anyhow::Context;
use clap::Args;
use fish_core::{ContentPipeline, PaginatedDocument};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::GlobalArgs;
use crate::error::{CliError, CliResult};
use crate::input::resolve_patterns;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the paginate command
#[derive(Debug, Args)]
pub struct PaginateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Override the configured paragraph budget
    #[arg(short, long, value_name = "CHARS")]
    pub max_length: Option<usize>,

    /// Load and paginate files in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Paragraphs with their display index and source line
    Text,
    /// JSON array of documents with their paragraphs
    Json,
}

impl PaginateArgs {
    /// Execute the paginate command
    pub fn execute(&self, global: &GlobalArgs, out: &mut dyn Write) -> CliResult<()> {
        log::debug!("Arguments: {self:?}");

        let files = resolve_patterns(&self.input)?;
        let pipeline = self.pipeline(global)?;
        let documents = self.load_all(&pipeline, &files, global.quiet);

        let mut file_writer;
        let writer: &mut dyn Write = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                file_writer = BufWriter::new(file);
                &mut file_writer
            }
            None => out,
        };

        let mut formatter: Box<dyn OutputFormatter + '_> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, files.len() > 1)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for (path, document) in files.iter().zip(&documents) {
            write_document(formatter.as_mut(), path, document)?;
        }
        formatter.finish()?;

        let failed = documents.iter().filter(|doc| doc.is_diagnostic()).count();
        if failed > 0 {
            log::warn!("{failed} of {} files could not be loaded", files.len());
        }
        Ok(())
    }

    fn pipeline(&self, global: &GlobalArgs) -> CliResult<ContentPipeline> {
        let ctx = global.context()?;
        let mut config = ctx.config().pagination;
        if let Some(max_length) = self.max_length {
            config.max_length = max_length;
        }

        ContentPipeline::new(config).map_err(|err| CliError::ConfigError(err.to_string()).into())
    }

    fn load_all(
        &self,
        pipeline: &ContentPipeline,
        files: &[PathBuf],
        quiet: bool,
    ) -> Vec<PaginatedDocument> {
        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        let load = |path: &PathBuf| {
            let document = pipeline.load(path);
            progress.file_completed(&display_name(path));
            document
        };

        let documents: Vec<PaginatedDocument> = if self.parallel && files.len() > 1 {
            log::info!("Paginating {} files in parallel", files.len());
            files.par_iter().map(load).collect()
        } else {
            files.iter().map(load).collect()
        };

        progress.finish();
        documents
    }
}

fn write_document(
    formatter: &mut dyn OutputFormatter,
    path: &Path,
    document: &PaginatedDocument,
) -> CliResult<()> {
    formatter.begin_document(path, document.total_lines())?;

    let mapping = document.mapping();
    for (index, text) in document.book_content().iter().enumerate() {
        let source_line = mapping.actual_line_number_or_sentinel(index as i64);
        formatter.format_paragraph(index, source_line, text)?;
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
