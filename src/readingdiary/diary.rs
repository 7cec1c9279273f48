//! # Reading Diary
//!
//! The [`ReadingDiary`] owns every [`Book`] of a session, keyed by ISBN.
//!
//! Books are kept in insertion order next to an ISBN index. The order matters:
//! aggregate queries break ties in favour of the book added first, and
//! iteration has to be deterministic for that to mean anything.
//!
//! Every fallible operation reports failure as `false` or `None`. An unknown
//! ISBN, a duplicate ISBN, a page past the end of a book and an invalid
//! rating are all ordinary outcomes here, not errors.

use crate::model::{Book, Rating};
use chrono::NaiveDateTime;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ReadingDiary {
    books: Vec<Book>,
    // isbn -> position in `books`
    index: HashMap<String, usize>,
}

impl ReadingDiary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books in the order they were added.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.index.contains_key(isbn)
    }

    /// Adds an unrated book without notes. Returns `false` if the ISBN is taken.
    pub fn add_book(
        &mut self,
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: i64,
    ) -> bool {
        let isbn = isbn.into();
        if self.index.contains_key(&isbn) {
            tracing::debug!(%isbn, "book rejected: isbn already present");
            return false;
        }

        let book = Book::new(isbn.clone(), title, author, pages);
        self.index.insert(isbn.clone(), self.books.len());
        self.books.push(book);
        tracing::debug!(%isbn, pages, books = self.books.len(), "book added");
        true
    }

    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.index.get(isbn).map(|&pos| &self.books[pos])
    }

    fn book_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        let pos = *self.index.get(isbn)?;
        self.books.get_mut(pos)
    }

    /// Adds a note to the book with `isbn`. Fails for an unknown ISBN or
    /// whenever [`Book::add_note`] does.
    pub fn add_note_to_book(
        &mut self,
        isbn: &str,
        text: impl Into<String>,
        page: i64,
        date: NaiveDateTime,
    ) -> bool {
        match self.book_mut(isbn) {
            Some(book) => book.add_note(text, page, date),
            None => {
                tracing::debug!(isbn, "note rejected: unknown isbn");
                false
            }
        }
    }

    pub fn rate_book(&mut self, isbn: &str, rating: Rating) -> bool {
        match self.book_mut(isbn) {
            Some(book) => book.set_rating(rating),
            None => {
                tracing::debug!(isbn, "rating rejected: unknown isbn");
                false
            }
        }
    }

    /// The book with the most notes, first added winning ties.
    ///
    /// `None` both for an empty diary and for a diary where no book has a
    /// single note.
    pub fn book_with_most_notes(&self) -> Option<&Book> {
        let mut leader = None;
        let mut max_count = 0;
        for book in &self.books {
            let count = book.notes().len();
            if count > max_count {
                max_count = count;
                leader = Some(book);
            }
        }
        leader
    }
}
