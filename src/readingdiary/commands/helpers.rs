use crate::diary::ReadingDiary;
use crate::error::{DiaryError, Result};
use crate::model::Book;

pub fn find_book<'a>(diary: &'a ReadingDiary, isbn: &str) -> Result<&'a Book> {
    diary
        .search_by_isbn(isbn)
        .ok_or_else(|| DiaryError::BookNotFound(isbn.to_string()))
}

pub fn ensure_book(diary: &ReadingDiary, isbn: &str) -> Result<()> {
    find_book(diary, isbn).map(|_| ())
}
