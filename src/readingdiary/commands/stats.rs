use crate::commands::{CmdMessage, CmdResult};
use crate::diary::ReadingDiary;
use crate::error::Result;

use super::helpers::find_book;

/// Reports the busiest page of a book; the page is -1 when it has no notes.
pub fn page_with_most_notes(diary: &ReadingDiary, isbn: &str) -> Result<CmdResult> {
    let page = find_book(diary, isbn)?.page_with_most_notes();
    Ok(CmdResult::default()
        .with_page(page)
        .with_message(CmdMessage::info(format!("Page with most notes: {}", page))))
}

pub fn book_with_most_notes(diary: &ReadingDiary) -> Result<CmdResult> {
    let result = match diary.book_with_most_notes() {
        Some(book) => CmdResult::default().with_books(vec![book.clone()]),
        None => CmdResult::default().with_message(CmdMessage::info("No book has notes yet")),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NO_PAGE;
    use chrono::NaiveDate;

    fn diary() -> ReadingDiary {
        let mut diary = ReadingDiary::new();
        diary.add_book("1234", "Test Book", "Author X", 100);
        diary.add_book("5678", "Another Book", "Author Y", 200);
        diary
    }

    fn add(diary: &mut ReadingDiary, isbn: &str, page: i64) {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(diary.add_note_to_book(isbn, "note", page, date));
    }

    #[test]
    fn page_with_most_notes_reports_page() {
        let mut diary = diary();
        add(&mut diary, "1234", 4);
        add(&mut diary, "1234", 9);
        add(&mut diary, "1234", 9);

        let result = page_with_most_notes(&diary, "1234").unwrap();
        assert_eq!(result.page, Some(9));
        assert_eq!(result.messages[0].content, "Page with most notes: 9");
    }

    #[test]
    fn page_with_most_notes_keeps_sentinel_for_empty_book() {
        let result = page_with_most_notes(&diary(), "5678").unwrap();
        assert_eq!(result.page, Some(NO_PAGE));
    }

    #[test]
    fn book_with_most_notes_returns_book() {
        let mut diary = diary();
        add(&mut diary, "5678", 1);
        let result = book_with_most_notes(&diary).unwrap();
        assert_eq!(result.books[0].isbn(), "5678");
    }

    #[test]
    fn book_with_most_notes_without_notes_is_informational() {
        let result = book_with_most_notes(&diary()).unwrap();
        assert!(result.books.is_empty());
        assert_eq!(result.messages[0].content, "No book has notes yet");
    }
}
