use album_shelf::component::library_view::print_warnings;
use album_shelf::config::types::Config;
use album_shelf::{init, pause};
use album_shelf::menu::show_main_menu;
use album_shelf::signal::setup_shutdown_signal;
use anyhow::Result;
use console::{Term, style};
use log::{info, warn};
use rust_i18n::t;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();
    let shutdown_signal = setup_shutdown_signal();

    // Load config and set locale
    let mut config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    let library = config.music_library()?;
    if let Err(e) = library.audit_log().start_session() {
        warn!("{e}");
    }

    // 掃描失敗（找不到根目錄、重複專輯）時直接結束，不進入選單
    println!("{}", style(t!("main_menu.indexing")).dim());
    let report = library.scan()?;
    print_warnings(&report.warnings);
    if !report.warnings.is_empty() {
        pause(&term)?;
    }

    loop {
        // We pass the config to show_main_menu so it can update settings
        match show_main_menu(&term, &shutdown_signal, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
