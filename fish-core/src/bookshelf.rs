//! Persistent bookshelf: known books, their progress, the current book
//!
//! Stored as pretty-printed JSON:
//!
//! ```json
//! {
//!   "current_book": "/books/novel.txt",
//!   "books": {
//!     "/books/novel.txt": { "progress": 12, "total_lines": 3000 }
//!   }
//! }
//! ```

use crate::error::{StoreError, StoreResult};
use crate::loader::count_file_lines;
use crate::session::ProgressStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the bookshelf inside the data directory
pub const BOOKSHELF_FILE: &str = "bookshelf.json";

/// Per-book record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Last displayed paragraph index
    #[serde(default)]
    pub progress: usize,
    /// Raw line count, cached when the book was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_lines: Option<usize>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ShelfData {
    #[serde(default)]
    current_book: Option<PathBuf>,
    #[serde(default)]
    books: BTreeMap<PathBuf, BookEntry>,
}

/// Bookshelf backed by a JSON file
#[derive(Debug)]
pub struct Bookshelf {
    path: PathBuf,
    data: ShelfData,
    auto_save_progress: bool,
    dirty: bool,
}

impl Bookshelf {
    /// Load the bookshelf at `path`; a missing file gives an empty shelf
    pub fn open(path: impl Into<PathBuf>, auto_save_progress: bool) -> StoreResult<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).map_err(|source| StoreError::Format {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No bookshelf at {}, starting empty", path.display());
                ShelfData::default()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        Ok(Self {
            path,
            data,
            auto_save_progress,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Register a book; already known books are left untouched
    pub fn add_book(&mut self, book: &Path) -> StoreResult<()> {
        ensure_exists(book)?;

        if self.data.books.contains_key(book) {
            log::info!("Book already in bookshelf: {}", book.display());
            return Ok(());
        }

        let total_lines = count_file_lines(book);
        self.data.books.insert(
            book.to_path_buf(),
            BookEntry {
                progress: 0,
                total_lines: Some(total_lines),
            },
        );
        self.dirty = true;
        log::info!(
            "Book added to bookshelf: {} with {total_lines} lines",
            book.display()
        );
        Ok(())
    }

    /// Make `book` the current book
    pub fn set_current_book(&mut self, book: &Path) -> StoreResult<()> {
        ensure_exists(book)?;

        self.data.current_book = Some(book.to_path_buf());
        self.dirty = true;
        log::info!("Current book set to: {}", book.display());
        Ok(())
    }

    pub fn current_book(&self) -> Option<&Path> {
        self.data.current_book.as_deref()
    }

    /// The current book is set, registered, and still on disk
    pub fn has_opened_book(&self) -> bool {
        self.valid_current_book().is_some()
    }

    /// Stored position of the current book, 0 when there is none
    pub fn current_progress(&self) -> usize {
        match self.valid_current_book() {
            Some(book) => self.data.books[book].progress,
            None => {
                log::warn!("No valid current book, returning 0 progress");
                0
            }
        }
    }

    /// Raw line count of the current book
    pub fn total_lines(&self) -> usize {
        let Some(book) = self.current_book() else {
            return 0;
        };

        match self.data.books.get(book).and_then(|entry| entry.total_lines) {
            Some(total) => total,
            None => count_file_lines(book),
        }
    }

    pub fn entry(&self, book: &Path) -> Option<&BookEntry> {
        self.data.books.get(book)
    }

    /// Known books in path order
    pub fn books(&self) -> impl Iterator<Item = (&Path, &BookEntry)> {
        self.data
            .books
            .iter()
            .map(|(path, entry)| (path.as_path(), entry))
    }

    /// Forget a book; clears the current book if it was that one
    pub fn remove_book(&mut self, book: &Path) -> bool {
        if self.data.books.remove(book).is_none() {
            return false;
        }

        if self.current_book() == Some(book) {
            self.data.current_book = None;
        }
        self.dirty = true;
        true
    }

    /// Write the shelf if anything changed; returns whether it wrote
    pub fn save(&mut self) -> StoreResult<bool> {
        if !self.dirty {
            log::debug!("No changes to save, bookshelf unchanged");
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.data).map_err(|source| {
            StoreError::Format {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        self.dirty = false;
        log::info!("Bookshelf saved to {}", self.path.display());
        Ok(true)
    }

    fn valid_current_book(&self) -> Option<&Path> {
        self.current_book()
            .filter(|book| self.data.books.contains_key(*book) && book.exists())
    }
}

impl ProgressStore for Bookshelf {
    fn update_progress(&mut self, book: &Path, display_index: usize) {
        if !book.exists() {
            log::warn!("Cannot update progress, book missing: {}", book.display());
            return;
        }

        let Some(entry) = self.data.books.get_mut(book) else {
            log::warn!("Cannot update progress, book not on shelf: {}", book.display());
            return;
        };

        if entry.progress == display_index {
            return;
        }

        entry.progress = display_index;
        if self.auto_save_progress {
            self.dirty = true;
        }
        log::debug!("Progress updated to {display_index} for {}", book.display());
    }
}

fn ensure_exists(book: &Path) -> StoreResult<()> {
    if book.exists() {
        Ok(())
    } else {
        log::error!("File does not exist: {}", book.display());
        Err(StoreError::BookMissing(book.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_empty_shelf() {
        let dir = TempDir::new().unwrap();
        let shelf = Bookshelf::open(dir.path().join(BOOKSHELF_FILE), true).unwrap();

        assert_eq!(shelf.current_book(), None);
        assert!(!shelf.has_opened_book());
        assert_eq!(shelf.current_progress(), 0);
        assert_eq!(shelf.books().count(), 0);
    }

    #[test]
    fn test_add_and_select_book() {
        let dir = TempDir::new().unwrap();
        let book = fixture(&dir, "a.txt", "一\n二\n\n四\n");
        let mut shelf = Bookshelf::open(dir.path().join(BOOKSHELF_FILE), true).unwrap();

        shelf.add_book(&book).unwrap();
        shelf.set_current_book(&book).unwrap();

        assert!(shelf.has_opened_book());
        assert_eq!(shelf.total_lines(), 4);
        assert_eq!(
            shelf.entry(&book),
            Some(&BookEntry {
                progress: 0,
                total_lines: Some(4)
            })
        );
    }

    #[test]
    fn test_adding_twice_keeps_progress() {
        let dir = TempDir::new().unwrap();
        let book = fixture(&dir, "a.txt", "x\n");
        let mut shelf = Bookshelf::open(dir.path().join(BOOKSHELF_FILE), true).unwrap();

        shelf.add_book(&book).unwrap();
        shelf.update_progress(&book, 7);
        shelf.add_book(&book).unwrap();

        assert_eq!(shelf.entry(&book).unwrap().progress, 7);
    }

    #[test]
    fn test_missing_book_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut shelf = Bookshelf::open(dir.path().join(BOOKSHELF_FILE), true).unwrap();
        let missing = dir.path().join("missing.txt");

        assert!(matches!(
            shelf.add_book(&missing),
            Err(StoreError::BookMissing(_))
        ));
        assert!(shelf.set_current_book(&missing).is_err());
        assert!(!shelf.is_dirty());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let book = fixture(&dir, "a.txt", "x\ny\n");
        let shelf_path = dir.path().join("nested").join(BOOKSHELF_FILE);

        let mut shelf = Bookshelf::open(&shelf_path, true).unwrap();
        shelf.add_book(&book).unwrap();
        shelf.set_current_book(&book).unwrap();
        shelf.update_progress(&book, 3);
        assert!(shelf.save().unwrap());
        assert!(!shelf.save().unwrap());

        let reopened = Bookshelf::open(&shelf_path, true).unwrap();
        assert_eq!(reopened.current_book(), Some(book.as_path()));
        assert_eq!(reopened.current_progress(), 3);
    }

    #[test]
    fn test_progress_not_marked_dirty_without_auto_save() {
        let dir = TempDir::new().unwrap();
        let book = fixture(&dir, "a.txt", "x\n");
        let shelf_path = dir.path().join(BOOKSHELF_FILE);

        let mut shelf = Bookshelf::open(&shelf_path, false).unwrap();
        shelf.add_book(&book).unwrap();
        shelf.save().unwrap();

        shelf.update_progress(&book, 5);
        assert!(!shelf.is_dirty());
        assert_eq!(shelf.entry(&book).unwrap().progress, 5);
    }

    #[test]
    fn test_progress_for_unknown_book_is_ignored() {
        let dir = TempDir::new().unwrap();
        let book = fixture(&dir, "a.txt", "x\n");
        let mut shelf = Bookshelf::open(dir.path().join(BOOKSHELF_FILE), true).unwrap();

        shelf.update_progress(&book, 5);
        assert!(!shelf.is_dirty());
        assert_eq!(shelf.entry(&book), None);
    }

    #[test]
    fn test_current_book_deleted_from_disk() {
        let dir = TempDir::new().unwrap();
        let book = fixture(&dir, "a.txt", "x\n");
        let mut shelf = Bookshelf::open(dir.path().join(BOOKSHELF_FILE), true).unwrap();
        shelf.add_book(&book).unwrap();
        shelf.set_current_book(&book).unwrap();
        shelf.update_progress(&book, 2);

        fs::remove_file(&book).unwrap();

        assert!(!shelf.has_opened_book());
        assert_eq!(shelf.current_progress(), 0);
    }

    #[test]
    fn test_remove_current_book() {
        let dir = TempDir::new().unwrap();
        let book = fixture(&dir, "a.txt", "x\n");
        let mut shelf = Bookshelf::open(dir.path().join(BOOKSHELF_FILE), true).unwrap();
        shelf.add_book(&book).unwrap();
        shelf.set_current_book(&book).unwrap();

        assert!(shelf.remove_book(&book));
        assert_eq!(shelf.current_book(), None);
        assert!(!shelf.remove_book(&book));
    }

    #[test]
    fn test_malformed_shelf() {
        let dir = TempDir::new().unwrap();
        let shelf_path = fixture(&dir, BOOKSHELF_FILE, "{ not json");

        assert!(matches!(
            Bookshelf::open(&shelf_path, true),
            Err(StoreError::Format { .. })
        ));
    }
}
