use crate::commands::{CmdMessage, CmdResult};
use crate::diary::ReadingDiary;
use crate::error::Result;

use super::helpers::find_book;

pub fn add(
    diary: &mut ReadingDiary,
    isbn: &str,
    title: &str,
    author: &str,
    pages: i64,
) -> Result<CmdResult> {
    let message = if diary.add_book(isbn, title, author, pages) {
        CmdMessage::success("Book added successfully")
    } else {
        CmdMessage::warning("Book already exists")
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn search(diary: &ReadingDiary, isbn: &str) -> Result<CmdResult> {
    let book = find_book(diary, isbn)?;
    Ok(CmdResult::default().with_books(vec![book.clone()]))
}
