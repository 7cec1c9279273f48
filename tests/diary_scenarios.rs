use chrono::{NaiveDate, NaiveDateTime};
use readingdiary::diary::ReadingDiary;
use readingdiary::model::{Book, Note, Rating, NO_PAGE};

fn date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn busiest_page_and_its_notes() {
    let mut book = Book::new("1234", "T", "A", 100);
    assert!(book.add_note("n1", 1, date(1)));
    assert!(book.add_note("n2", 2, date(2)));
    assert!(book.add_note("n3", 1, date(3)));

    assert_eq!(book.page_with_most_notes(), 1);
    assert_eq!(
        book.get_notes_of_page(1),
        vec![Note::new("n1", 1, date(1)), Note::new("n3", 1, date(3))]
    );
}

#[test]
fn page_past_the_end_leaves_book_untouched() {
    let mut book = Book::new("1234", "T", "A", 100);
    assert!(!book.add_note("x", 101, date(1)));
    assert!(book.notes().is_empty());
    assert_eq!(book.page_with_most_notes(), NO_PAGE);
}

#[test]
fn duplicate_isbn_keeps_a_single_book() {
    let mut diary = ReadingDiary::new();
    assert!(diary.add_book("1234", "Test Book", "Author X", 100));
    assert!(!diary.add_book("1234", "Test Book", "Author X", 100));
    assert_eq!(diary.len(), 1);
}

#[test]
fn books_without_notes_have_no_leader() {
    let mut diary = ReadingDiary::new();
    diary.add_book("1234", "Test Book", "Author X", 100);
    diary.add_book("5678", "Another Book", "Author Y", 200);
    assert!(diary.book_with_most_notes().is_none());
}

#[test]
fn full_session() {
    let mut diary = ReadingDiary::new();
    diary.add_book("1234", "Test Book", "Author X", 100);
    diary.add_book("5678", "Another Book", "Author Y", 200);

    assert!(diary.add_note_to_book("5678", "first", 10, date(1)));
    assert!(diary.add_note_to_book("1234", "a", 1, date(2)));
    assert!(diary.add_note_to_book("1234", "b", 1, date(3)));
    assert!(!diary.add_note_to_book("1234", "c", 500, date(4)));
    assert!(!diary.add_note_to_book("0000", "d", 1, date(5)));

    assert!(diary.rate_book("1234", Rating::Good));
    assert!(!diary.rate_book("1234", Rating::Unrated));
    assert!(!diary.rate_book("0000", Rating::Bad));

    let leader = diary.book_with_most_notes().unwrap();
    assert_eq!(leader.isbn(), "1234");
    assert_eq!(leader.notes().len(), 2);
    assert_eq!(leader.rating(), Rating::Good);
    assert_eq!(leader.page_with_most_notes(), 1);
    assert_eq!(
        leader.to_string(),
        "ISBN: 1234\nTitle: Test Book\nAuthor: Author X\nPages: 100\nRating: good"
    );
}
