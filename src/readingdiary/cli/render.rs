use colored::Colorize;
use readingdiary::api::{CmdMessage, MessageLevel};
use readingdiary::model::{Book, Note};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn write_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for (i, book) in books.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let text = book.to_string();
        let rule_width = text.lines().map(|line| line.width()).max().unwrap_or(0);
        writeln!(out, "{}", "-".repeat(rule_width).dimmed())?;
        writeln!(out, "{}", text)?;
        writeln!(out, "{}", "-".repeat(rule_width).dimmed())?;
    }
    Ok(())
}

pub(super) fn write_notes<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    for note in notes {
        writeln!(out, "{}", note)?;
    }
    Ok(())
}
