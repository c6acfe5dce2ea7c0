use crate::component::library_view::print_error;
use crate::component::{AlbumBrowser, CommandShell};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::Term;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_album_browser(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    let browser = AlbumBrowser::new(config.music_library()?, Arc::clone(shutdown_signal));

    if let Err(e) = browser.run(term) {
        print_error(&e);
        pause(term)?;
    }

    Ok(())
}

pub fn run_command_shell(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    term.clear_screen()?;
    let shell = CommandShell::new(config.music_library()?, Arc::clone(shutdown_signal));

    if let Err(e) = shell.run() {
        print_error(&e);
    }

    pause(term)?;
    Ok(())
}
