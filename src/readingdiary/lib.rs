//! # Reading Diary Architecture
//!
//! The reading diary is a **UI-agnostic library** for keeping track of books,
//! the notes taken on their pages, and how much they were liked. The console
//! shipped as the `readingdiary` binary is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu, renders results         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session diary and config                        │
//! │  - Normalizes inputs (date strings → NaiveDateTime)         │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns model outcomes into messages                       │
//! │  - Unknown ISBNs become DiaryError::BookNotFound            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (diary.rs, model.rs)                                 │
//! │  - ReadingDiary → Book → Note, plain ownership              │
//! │  - Failures are `false` / `None`, never errors              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Model Invariants
//!
//! - Every note of a book lies on or before its last page. There is no lower
//!   bound: page 0 and negative pages are accepted.
//! - A rating is one of `Excellent`, `Good`, `Bad` or `Unrated`, and a rated
//!   book can never go back to `Unrated`.
//! - The diary keeps books in insertion order. Aggregates ("page with most
//!   notes", "book with most notes") break ties in favour of what came first.
//!
//! Nothing is persisted: a diary lives for one session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per group of operations
//! - [`diary`]: The [`diary::ReadingDiary`] collection
//! - [`model`]: [`model::Book`], [`model::Note`] and [`model::Rating`]
//! - [`config`]: `config.json` loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod diary;
pub mod error;
pub mod model;
