//! 兩個前端共用的畫面輸出

use crate::tools::{Album, LibraryError, LibraryWarning, Location, MoveOutcome, MusicLibrary, ScanReport};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rust_i18n::t;
use std::time::Duration;

/// 掃描音樂庫，期間顯示 spinner
pub fn scan_with_spinner(library: &MusicLibrary) -> Result<ScanReport, LibraryError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(t!("library.scanning").to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = library.scan();

    spinner.finish_and_clear();
    result
}

pub fn print_warnings(warnings: &[LibraryWarning]) {
    for warning in warnings {
        println!("{} {}", style(t!("library.warning_prefix")).yellow().bold(), warning);
    }
}

pub fn print_move_outcome(outcome: &MoveOutcome) {
    println!(
        "{} {}",
        style(t!("library.move_done")).green().bold(),
        outcome.action
    );
    print_warnings(&outcome.warnings);
}

pub fn print_error(error: &impl std::fmt::Display) {
    eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), error);
}

/// `001. Artist - Album` 形式
#[must_use]
pub fn format_album_line(index: usize, album: &Album) -> String {
    format!("{index:03}. {album}")
}

pub fn print_album_line(index: usize, album: &Album) {
    let line = format_album_line(index, album);
    match album.location {
        Location::Active => println!("{}", style(line).on_green()),
        Location::Archive => println!("{}", style(line).on_red()),
    }
}
