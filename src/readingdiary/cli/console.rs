//! # Interactive Console
//!
//! A numbered menu read from any `BufRead` and written to any `Write`, so the
//! whole session can be scripted in tests. Each option collects its inputs one
//! prompt at a time and hands them to [`DiaryApi`].
//!
//! Per-book options ask for the ISBN first and stop right there when the book
//! is unknown. End of input behaves like choosing `0`.

use super::render::{write_books, write_messages, write_notes};
use colored::Colorize;
use readingdiary::api::{CmdResult, DiaryApi};
use readingdiary::error::{DiaryError, Result};
use std::io::{BufRead, Write};

const ENTER_ISBN: &str = "Enter ISBN: ";
const RULE: &str = "====================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    AddBook,
    AddNote,
    RateBook,
    SearchBook,
    NotesOfPage,
    PageWithMostNotes,
    BookWithMostNotes,
    Exit,
}

impl MenuOption {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuOption::AddBook),
            "2" => Some(MenuOption::AddNote),
            "3" => Some(MenuOption::RateBook),
            "4" => Some(MenuOption::SearchBook),
            "5" => Some(MenuOption::NotesOfPage),
            "6" => Some(MenuOption::PageWithMostNotes),
            "7" => Some(MenuOption::BookWithMostNotes),
            "0" => Some(MenuOption::Exit),
            _ => None,
        }
    }

    fn heading(self) -> &'static str {
        match self {
            MenuOption::AddBook => "Add book",
            MenuOption::AddNote => "Add note",
            MenuOption::RateBook => "Rate book",
            MenuOption::SearchBook => "Search book by ISBN",
            MenuOption::NotesOfPage => "Get notes of page",
            MenuOption::PageWithMostNotes => "Page with most notes",
            MenuOption::BookWithMostNotes => "Book with most notes",
            MenuOption::Exit => "Exit",
        }
    }
}

pub(super) struct Console<R, W> {
    api: DiaryApi,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn new(api: DiaryApi, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter option: ")? else {
                break;
            };

            let Some(option) = MenuOption::parse(&choice) else {
                writeln!(self.output, "{}", "Invalid option".red())?;
                continue;
            };

            tracing::debug!(?option, "menu option selected");
            if option == MenuOption::Exit {
                break;
            }
            writeln!(self.output, ">>> {} {}", option.heading(), RULE)?;

            match self.dispatch(option) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(DiaryError::Io(e)) => return Err(DiaryError::Io(e)),
                Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
            }
        }

        writeln!(self.output, "\nGoodbye!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "{}", "Reading Diary App Menu".bold())?;
        for (key, option) in [
            ("1", MenuOption::AddBook),
            ("2", MenuOption::AddNote),
            ("3", MenuOption::RateBook),
            ("4", MenuOption::SearchBook),
            ("5", MenuOption::NotesOfPage),
            ("6", MenuOption::PageWithMostNotes),
            ("7", MenuOption::BookWithMostNotes),
            ("0", MenuOption::Exit),
        ] {
            writeln!(self.output, "{}. {}", key, option.heading())?;
        }
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Flow> {
        match option {
            MenuOption::AddBook => self.add_book(),
            MenuOption::AddNote => self.add_note(),
            MenuOption::RateBook => self.rate_book(),
            MenuOption::SearchBook => self.search_book(),
            MenuOption::NotesOfPage => self.notes_of_page(),
            MenuOption::PageWithMostNotes => self.page_with_most_notes(),
            MenuOption::BookWithMostNotes => self.book_with_most_notes(),
            MenuOption::Exit => Ok(Flow::Exit),
        }
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt(ENTER_ISBN)? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(pages) = self.prompt("Enter pages: ")? else {
            return Ok(Flow::Exit);
        };
        let pages = parse_number(&pages)?;

        let result = self.api.add_book(&isbn, &title, &author, pages)?;
        self.show(&result)
    }

    fn add_note(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt_known_isbn()? else {
            return Ok(Flow::Exit);
        };
        let Some(text) = self.prompt("Enter text: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(page) = self.prompt("Enter page: ")? else {
            return Ok(Flow::Exit);
        };
        let page = parse_number(&page)?;
        let label = format!("Enter date ({}): ", self.api.config().date_format);
        let Some(date) = self.prompt(&label)? else {
            return Ok(Flow::Exit);
        };

        let result = self.api.add_note(&isbn, &text, page, &date)?;
        self.show(&result)
    }

    fn rate_book(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt_known_isbn()? else {
            return Ok(Flow::Exit);
        };
        let Some(rating) = self.prompt("Enter rating (1-BAD, 2-GOOD, 3-EXCELLENT): ")? else {
            return Ok(Flow::Exit);
        };
        let rating = parse_number(&rating)?;
        // anything outside i32 is as invalid as 0 or 4
        let rating = i32::try_from(rating).unwrap_or(0);

        let result = self.api.rate_book(&isbn, rating)?;
        self.show(&result)
    }

    fn search_book(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt(ENTER_ISBN)? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.search_book(&isbn)?;
        self.show(&result)
    }

    fn notes_of_page(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt_known_isbn()? else {
            return Ok(Flow::Exit);
        };
        let Some(page) = self.prompt("Enter page: ")? else {
            return Ok(Flow::Exit);
        };
        let page = parse_number(&page)?;

        let result = self.api.notes_of_page(&isbn, page)?;
        self.show(&result)
    }

    fn page_with_most_notes(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt(ENTER_ISBN)? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.page_with_most_notes(&isbn)?;
        self.show(&result)
    }

    fn book_with_most_notes(&mut self) -> Result<Flow> {
        let result = self.api.book_with_most_notes()?;
        self.show(&result)
    }

    /// Asks for an ISBN and fails with `BookNotFound` before any further prompt.
    fn prompt_known_isbn(&mut self) -> Result<Option<String>> {
        let Some(isbn) = self.prompt(ENTER_ISBN)? else {
            return Ok(None);
        };
        self.api.ensure_book(&isbn)?;
        Ok(Some(isbn))
    }

    /// Prints `label` and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, result: &CmdResult) -> Result<Flow> {
        write_books(&mut self.output, &result.books)?;
        write_notes(&mut self.output, &result.notes)?;
        write_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }
}

fn parse_number(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| DiaryError::InvalidNumber(input.to_string()))
}
