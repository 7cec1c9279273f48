//! # Reading Diary CLI
//!
//! The binary is intentionally thin: the interactive console lives in
//! `cli/`, while this file only invokes `cli::run()` and handles process
//! termination. Everything the console does goes through
//! `readingdiary::api::DiaryApi`, so the library stays free of terminal I/O.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
