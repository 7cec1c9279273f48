//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every diary operation, whatever UI is driving it.
//!
//! The facade:
//! - **Owns** the session's [`ReadingDiary`] and [`DiaryConfig`]
//! - **Normalizes inputs** (date strings become `NaiveDateTime` using the
//!   configured format)
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O and no formatting.

use crate::commands::{self, helpers};
use crate::config::DiaryConfig;
use crate::diary::ReadingDiary;
use crate::error::{DiaryError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub struct DiaryApi {
    diary: ReadingDiary,
    config: DiaryConfig,
}

impl DiaryApi {
    pub fn new(config: DiaryConfig) -> Self {
        Self {
            diary: ReadingDiary::new(),
            config,
        }
    }

    pub fn diary(&self) -> &ReadingDiary {
        &self.diary
    }

    pub fn config(&self) -> &DiaryConfig {
        &self.config
    }

    pub fn add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        pages: i64,
    ) -> Result<commands::CmdResult> {
        commands::books::add(&mut self.diary, isbn, title, author, pages)
    }

    pub fn search_book(&self, isbn: &str) -> Result<commands::CmdResult> {
        commands::books::search(&self.diary, isbn)
    }

    /// Fails with `BookNotFound` unless the ISBN is in the diary.
    pub fn ensure_book(&self, isbn: &str) -> Result<()> {
        helpers::ensure_book(&self.diary, isbn)
    }

    pub fn add_note(
        &mut self,
        isbn: &str,
        text: &str,
        page: i64,
        date: &str,
    ) -> Result<commands::CmdResult> {
        let date = parse_date(date, &self.config.date_format)?;
        commands::notes::add(&mut self.diary, isbn, text, page, date)
    }

    pub fn rate_book(&mut self, isbn: &str, rating: i32) -> Result<commands::CmdResult> {
        commands::rate::run(&mut self.diary, isbn, rating)
    }

    pub fn notes_of_page(&self, isbn: &str, page: i64) -> Result<commands::CmdResult> {
        commands::notes::of_page(&self.diary, isbn, page)
    }

    pub fn page_with_most_notes(&self, isbn: &str) -> Result<commands::CmdResult> {
        commands::stats::page_with_most_notes(&self.diary, isbn)
    }

    pub fn book_with_most_notes(&self) -> Result<commands::CmdResult> {
        commands::stats::book_with_most_notes(&self.diary)
    }
}

/// Parses a note date. A format without a time component yields midnight.
fn parse_date(input: &str, format: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, format)
        .or_else(|_| {
            NaiveDate::parse_from_str(input, format).map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|_| DiaryError::InvalidDate {
            input: input.to_string(),
            format: format.to_string(),
        })
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
