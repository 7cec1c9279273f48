use crate::commands::{CmdMessage, CmdResult};
use crate::diary::ReadingDiary;
use crate::error::Result;
use crate::model::Rating;

use super::helpers::ensure_book;

/// Rates a book from a raw ordinal (1 bad, 2 good, 3 excellent).
pub fn run(diary: &mut ReadingDiary, isbn: &str, value: i32) -> Result<CmdResult> {
    ensure_book(diary, isbn)?;

    let rated = match Rating::try_from(value) {
        Ok(rating) => diary.rate_book(isbn, rating),
        Err(_) => false,
    };

    let message = if rated {
        CmdMessage::success("Book rated successfully")
    } else {
        CmdMessage::warning("Invalid rating")
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiaryError;

    fn diary() -> ReadingDiary {
        let mut diary = ReadingDiary::new();
        diary.add_book("1234", "Test Book", "Author X", 100);
        diary
    }

    #[test]
    fn valid_ratings_are_applied() {
        for (value, rating) in [(1, Rating::Bad), (2, Rating::Good), (3, Rating::Excellent)] {
            let mut diary = diary();
            let result = run(&mut diary, "1234", value).unwrap();
            assert!(result.succeeded());
            assert_eq!(diary.search_by_isbn("1234").unwrap().rating(), rating);
        }
    }

    #[test]
    fn out_of_range_ratings_warn_and_change_nothing() {
        let mut diary = diary();
        for value in [0, 4, -1] {
            let result = run(&mut diary, "1234", value).unwrap();
            assert_eq!(result.messages[0].content, "Invalid rating");
        }
        assert_eq!(
            diary.search_by_isbn("1234").unwrap().rating(),
            Rating::Unrated
        );
    }

    #[test]
    fn unknown_book_is_not_found() {
        let mut diary = diary();
        let err = run(&mut diary, "9999", 3).unwrap_err();
        assert!(matches!(err, DiaryError::BookNotFound(_)));
    }
}
