use crate::commands::{CmdMessage, CmdResult};
use crate::diary::ReadingDiary;
use crate::error::Result;
use chrono::NaiveDateTime;

use super::helpers::{ensure_book, find_book};

pub fn add(
    diary: &mut ReadingDiary,
    isbn: &str,
    text: &str,
    page: i64,
    date: NaiveDateTime,
) -> Result<CmdResult> {
    ensure_book(diary, isbn)?;

    let message = if diary.add_note_to_book(isbn, text, page, date) {
        CmdMessage::success("Note added successfully")
    } else {
        CmdMessage::warning("Invalid page")
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn of_page(diary: &ReadingDiary, isbn: &str, page: i64) -> Result<CmdResult> {
    let book = find_book(diary, isbn)?;
    let notes = book.get_notes_of_page(page);

    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("No notes found"));
    }
    Ok(result.with_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::DiaryError;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn diary() -> ReadingDiary {
        let mut diary = ReadingDiary::new();
        diary.add_book("1234", "Test Book", "Author X", 100);
        diary
    }

    #[test]
    fn add_reports_success() {
        let mut diary = diary();
        let result = add(&mut diary, "1234", "Note 1", 1, day(1)).unwrap();
        assert!(result.succeeded());
        assert_eq!(result.messages[0].content, "Note added successfully");
    }

    #[test]
    fn add_past_last_page_warns() {
        let mut diary = diary();
        let result = add(&mut diary, "1234", "too far", 101, day(1)).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Invalid page");
        assert!(diary.search_by_isbn("1234").unwrap().notes().is_empty());
    }

    #[test]
    fn add_to_unknown_book_is_not_found() {
        let mut diary = diary();
        let err = add(&mut diary, "9999", "lost", 1, day(1)).unwrap_err();
        assert!(matches!(err, DiaryError::BookNotFound(_)));
    }

    #[test]
    fn of_page_lists_matching_notes() {
        let mut diary = diary();
        add(&mut diary, "1234", "Note 1", 1, day(1)).unwrap();
        add(&mut diary, "1234", "Note 2", 2, day(2)).unwrap();
        add(&mut diary, "1234", "Note 3", 1, day(3)).unwrap();

        let result = of_page(&diary, "1234", 1).unwrap();
        let texts: Vec<&str> = result.notes.iter().map(|n| n.text()).collect();
        assert_eq!(texts, ["Note 1", "Note 3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn of_page_without_notes_says_so() {
        let diary = diary();
        let result = of_page(&diary, "1234", 5).unwrap();
        assert!(result.notes.is_empty());
        assert_eq!(result.messages[0].content, "No notes found");
    }
}
