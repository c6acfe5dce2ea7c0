//! 指令列介面
//!
//! 啟動時掃描一次，之後依指令移動專輯並直接切換目錄中的位置，不重新掃描

use super::command::{Command, parse_command};
use super::session::ShellSession;
use crate::component::library_view::{
    print_album_line, print_error, print_move_outcome, print_warnings, scan_with_spinner,
};
use crate::tools::{ListFilter, Location, MusicLibrary};
use anyhow::Result;
use console::style;
use log::info;
use rust_i18n::t;
use std::io::{self, BufRead};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct CommandShell {
    library: MusicLibrary,
    shutdown_signal: Arc<AtomicBool>,
}

impl CommandShell {
    pub const fn new(library: MusicLibrary, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            library,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("shell.title")).cyan().bold());

        let report = scan_with_spinner(&self.library)?;
        print_warnings(&report.warnings);

        let mut session = ShellSession::new(report.catalog);
        self.print_list(&session, ListFilter::All);
        println!("{}", style(t!("shell.help_hint")).dim());

        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                info!("收到中斷訊號，離開指令列");
                break;
            }

            line.clear();
            // EOF 視同 quit
            if stdin.lock().read_line(&mut line)? == 0 {
                self.print_summary(&session);
                break;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };

            match command {
                Command::Empty => {}
                Command::List(filter) => self.print_list(&session, filter),
                Command::Move(index) => match session.move_album(&self.library, index) {
                    Ok(outcome) => print_move_outcome(&outcome),
                    Err(e) => print_error(&e),
                },
                Command::History => self.print_history(&session),
                Command::Help => self.print_help(),
                Command::Quit => {
                    self.print_summary(&session);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_list(&self, session: &ShellSession, filter: ListFilter) {
        let catalog = session.catalog();

        println!();
        for (index, album) in catalog.filtered(filter) {
            print_album_line(index, album);
        }
        println!(
            "\n{}\n",
            t!(
                "shell.totals",
                active = catalog.count(Location::Active),
                archived = catalog.count(Location::Archive)
            )
        );
    }

    fn print_history(&self, session: &ShellSession) {
        if session.history().is_empty() {
            println!("{}", t!("shell.no_history"));
            return;
        }
        for action in session.history() {
            println!("{action}");
        }
    }

    fn print_summary(&self, session: &ShellSession) {
        if !session.history().is_empty() {
            println!("\n{}", style(t!("shell.summary")).cyan());
            for action in session.history() {
                println!("{action}");
            }
        }
        println!();
    }

    fn print_help(&self) {
        println!("\t{}", t!("shell.help_hist"));
        println!("\t{}", t!("shell.help_list"));
        println!("\t{}", t!("shell.help_move"));
        println!("\t{}", t!("shell.help_quit"));
        println!(
            "\n\t{} {} {}\n",
            t!("shell.legend"),
            style(t!("shell.legend_active")).on_green(),
            style(t!("shell.legend_archived")).on_red()
        );
    }
}
