//! 專輯瀏覽器
//!
//! 從清單選一張專輯移到另一邊，每次移動後重新掃描

use crate::component::library_view::{
    print_error, print_move_outcome, print_warnings, scan_with_spinner,
};
use crate::pause;
use crate::tools::{Album, Catalog, Location, MusicLibrary};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use log::info;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 清單一頁顯示的列數
const PAGE_SIZE: usize = 20;

pub struct AlbumBrowser {
    library: MusicLibrary,
    shutdown_signal: Arc<AtomicBool>,
}

impl AlbumBrowser {
    pub const fn new(library: MusicLibrary, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            library,
            shutdown_signal,
        }
    }

    pub fn run(&self, term: &Term) -> Result<()> {
        let mut last_selection = 0;

        loop {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                info!("收到中斷訊號，離開瀏覽器");
                return Ok(());
            }

            let report = scan_with_spinner(&self.library)?;
            let catalog = report.catalog;

            term.clear_screen()?;
            println!("{}", style(t!("browser.title")).cyan().bold());
            println!("{}", style(t!("common.esc_hint")).dim());
            print_warnings(&report.warnings);
            self.print_header(&catalog);

            if catalog.is_empty() {
                println!("{}", style(t!("browser.empty")).yellow());
                pause(term)?;
                return Ok(());
            }

            let items: Vec<String> = catalog.iter().map(list_caption).collect();

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(t!("browser.prompt"))
                .items(&items)
                .default(last_selection.min(items.len() - 1))
                .max_length(PAGE_SIZE)
                .interact_on_opt(term)?;

            // ESC pressed - back to main menu
            let Some(index) = selection else {
                return Ok(());
            };
            last_selection = index;

            let Some(album) = catalog.get(index) else {
                continue;
            };

            if !self.confirm_move(album)? {
                continue;
            }

            match self.library.move_album(album) {
                Ok(outcome) => print_move_outcome(&outcome),
                Err(e) => print_error(&e),
            }
            pause(term)?;
        }
    }

    fn print_header(&self, catalog: &Catalog) {
        println!(
            "{}  {}",
            style(t!("browser.active_count", count = catalog.count(Location::Active))).green(),
            style(t!("browser.archived_count", count = catalog.count(Location::Archive))).red()
        );
        println!();
    }

    fn confirm_move(&self, album: &Album) -> Result<bool> {
        let prompt = match album.location {
            Location::Active => t!("browser.confirm_archive", album = album),
            Location::Archive => t!("browser.confirm_activate", album = album),
        };
        let confirm = Confirm::new().with_prompt(prompt).default(true).interact()?;
        Ok(confirm)
    }
}

fn list_caption(album: &Album) -> String {
    let marker = match album.location {
        Location::Active => style("[A]").green(),
        Location::Archive => style("[R]").red(),
    };
    format!("{marker} {album}")
}
