//! Reading commands: open, show, next, prev, goto, status, list, remove

use clap::Args;
use fish_core::{Bookshelf, ReadingSession};
use std::io::Write;
use std::path::PathBuf;

use crate::context::{resolve_book, ReaderContext};
use crate::error::CliResult;

/// Arguments for the open command
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Text file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for next/prev
#[derive(Debug, Args)]
pub struct StepArgs {
    /// Number of paragraphs to move
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
}

/// Arguments for the goto command
#[derive(Debug, Args)]
pub struct GotoArgs {
    /// 1-based line number in the source file
    #[arg(value_name = "LINE")]
    pub line: usize,
}

/// Arguments for the remove command
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Book to forget
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// How to move before printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Forward(usize),
    Back(usize),
    Line(usize),
}

impl OpenArgs {
    /// Execute the open command
    pub fn execute(&self, ctx: &ReaderContext, out: &mut dyn Write) -> CliResult<()> {
        let book = resolve_book(&self.file)?;

        let mut shelf = ctx.bookshelf()?;
        shelf.add_book(&book)?;
        shelf.set_current_book(&book)?;
        save_shelf(&mut shelf);

        navigate_with(ctx, shelf, Navigation::Stay, out)
    }
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self, ctx: &ReaderContext, out: &mut dyn Write) -> CliResult<()> {
        let mut shelf = ctx.bookshelf()?;

        // Accept both the stored absolute path and a path relative to here
        let book = resolve_book(&self.file).unwrap_or_else(|_| self.file.clone());
        if shelf.remove_book(&book) {
            save_shelf(&mut shelf);
            writeln!(out, "Removed {}", book.display())?;
        } else {
            writeln!(out, "Not on the bookshelf: {}", book.display())?;
        }
        Ok(())
    }
}

/// Move within the current book, print the page and record the position
pub fn navigate(
    ctx: &ReaderContext,
    navigation: Navigation,
    out: &mut dyn Write,
) -> CliResult<()> {
    let shelf = ctx.bookshelf()?;
    navigate_with(ctx, shelf, navigation, out)
}

fn navigate_with(
    ctx: &ReaderContext,
    mut shelf: Bookshelf,
    navigation: Navigation,
    out: &mut dyn Write,
) -> CliResult<()> {
    let mut session = ctx.current_session(&shelf)?;

    let moved = match navigation {
        Navigation::Stay => true,
        Navigation::Forward(count) => session.advance(count) > 0 || count == 0,
        Navigation::Back(count) => session.retreat(count) > 0 || count == 0,
        Navigation::Line(line) => session.jump_to_line(line),
    };
    if !moved {
        log::info!("Position unchanged at {}", session.position());
    }

    print_page(&session, ctx.config().reader.lines_per_page, out)?;

    // A failed load must not overwrite the stored position
    if !session.document().is_diagnostic() {
        session.record_progress(&mut shelf);
        save_shelf(&mut shelf);
    }

    Ok(())
}

/// Print the page at the current position, paragraphs separated by a blank line
pub fn print_page(
    session: &ReadingSession,
    lines_per_page: usize,
    out: &mut dyn Write,
) -> CliResult<()> {
    let page = session.page(lines_per_page);
    if page.is_empty() {
        writeln!(out, "{}", session.current())?;
        return Ok(());
    }

    for (i, paragraph) in page.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{paragraph}")?;
    }
    Ok(())
}

/// Print position, source line and percentage of the current book
pub fn status(ctx: &ReaderContext, out: &mut dyn Write) -> CliResult<()> {
    let shelf = ctx.bookshelf()?;
    let session = ctx.current_session(&shelf)?;
    let document = session.document();

    writeln!(out, "Book: {}", session.book().display())?;
    writeln!(
        out,
        "Paragraph: {} / {}",
        session.position() + 1,
        document.len()
    )?;

    let total_lines = match document.total_lines() {
        0 => shelf.total_lines(),
        n => n,
    };
    match session.current_source_line() {
        Some(line) => writeln!(
            out,
            "Line: {line} / {total_lines} ({:.1}%)",
            session.percent()
        )?,
        None => writeln!(out, "Line: - / {total_lines}")?,
    }
    Ok(())
}

/// Print every book on the shelf, marking the current one
pub fn list(ctx: &ReaderContext, out: &mut dyn Write) -> CliResult<()> {
    let shelf = ctx.bookshelf()?;
    let current = shelf.current_book();

    let mut empty = true;
    for (book, entry) in shelf.books() {
        empty = false;
        let marker = if Some(book) == current { '*' } else { ' ' };
        let lines = entry
            .total_lines
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        writeln!(
            out,
            "{marker} {}  (paragraph {}, {lines} lines)",
            book.display(),
            entry.progress + 1
        )?;
    }

    if empty {
        writeln!(out, "The bookshelf is empty")?;
    }
    Ok(())
}

fn save_shelf(shelf: &mut Bookshelf) {
    if let Err(err) = shelf.save() {
        log::error!("Error saving bookshelf: {err}");
    }
}
