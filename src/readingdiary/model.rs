use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt;

/// Sentinel returned by [`Book::page_with_most_notes`] when a book has no notes.
pub const NO_PAGE: i64 = -1;

/// How much a reader liked a book.
///
/// The discriminants are the ordinals the diary has always used, so
/// `Rating::Excellent as i32 == 3` and `Rating::Unrated as i32 == -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rating {
    Excellent = 3,
    Good = 2,
    Bad = 1,
    #[default]
    Unrated = -1,
}

impl Rating {
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Whether a book may be rated with this value. Only the three real
    /// ratings qualify; `Unrated` is a state, not a choice.
    pub fn is_ratable(self) -> bool {
        match self {
            Rating::Excellent | Rating::Good | Rating::Bad => true,
            Rating::Unrated => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Bad => "bad",
            Rating::Unrated => "unrated",
        }
    }

    /// Label for a raw ordinal. Anything that is not a real rating reads as "unrated".
    pub fn label_for(value: i32) -> &'static str {
        Rating::try_from(value).unwrap_or_default().label()
    }
}

impl TryFrom<i32> for Rating {
    type Error = i32;

    /// Accepts exactly the ratable ordinals (1, 2 and 3).
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Rating::Excellent),
            2 => Ok(Rating::Good),
            1 => Ok(Rating::Bad),
            other => Err(other),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dated annotation on one page of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    text: String,
    page: i64,
    date: NaiveDateTime,
}

impl Note {
    pub fn new(text: impl Into<String>, page: i64, date: NaiveDateTime) -> Self {
        Self {
            text: text.into(),
            page,
            date,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - page {}: {}", self.date, self.page, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    pages: i64,
    rating: Rating,
    notes: Vec<Note>,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: i64,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            pages,
            rating: Rating::Unrated,
            notes: Vec::new(),
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Notes in the order they were added.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Appends a note unless `page` lies past the end of the book.
    ///
    /// Only the upper bound is checked: pages at or below zero are accepted.
    pub fn add_note(&mut self, text: impl Into<String>, page: i64, date: NaiveDateTime) -> bool {
        if page > self.pages {
            tracing::debug!(isbn = %self.isbn, page, pages = self.pages, "note rejected: page out of range");
            return false;
        }
        self.notes.push(Note::new(text, page, date));
        tracing::debug!(isbn = %self.isbn, page, notes = self.notes.len(), "note added");
        true
    }

    /// Replaces the rating. `Rating::Unrated` is refused, so once rated a
    /// book stays rated.
    pub fn set_rating(&mut self, rating: Rating) -> bool {
        if !rating.is_ratable() {
            tracing::debug!(isbn = %self.isbn, rating = rating.value(), "rating rejected");
            return false;
        }
        self.rating = rating;
        tracing::debug!(isbn = %self.isbn, rating = %rating, "book rated");
        true
    }

    pub fn get_notes_of_page(&self, page: i64) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| note.page == page)
            .cloned()
            .collect()
    }

    /// The page carrying the most notes, or [`NO_PAGE`] for a book without notes.
    ///
    /// On a tie the page whose first note was added earliest wins.
    pub fn page_with_most_notes(&self) -> i64 {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        let mut first_seen: Vec<i64> = Vec::new();

        for note in &self.notes {
            let count = counts.entry(note.page).or_insert(0);
            if *count == 0 {
                first_seen.push(note.page);
            }
            *count += 1;
        }

        let mut max_page = NO_PAGE;
        let mut max_count = 0;
        for page in first_seen {
            let count = counts[&page];
            if count > max_count {
                max_count = count;
                max_page = page;
            }
        }
        max_page
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN: {}\nTitle: {}\nAuthor: {}\nPages: {}\nRating: {}",
            self.isbn, self.title, self.author, self.pages, self.rating
        )
    }
}
