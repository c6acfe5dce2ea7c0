use crate::config::save::save_settings;
use crate::config::types::{Config, Language};
use crate::menu::handlers::{run_album_browser, run_command_shell};
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_browser"),
        t!("main_menu.opt_shell"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_album_browser(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(1) => {
            run_command_shell(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(2) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(3) => Ok(false),
        None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let library = &config.settings.library;
        let options = vec![
            format!("{} [{}]", t!("settings.opt_active"), library.active.display()),
            format!("{} [{}]", t!("settings.opt_archive"), library.archive.display()),
            format!("{} [{}]", t!("settings.opt_log_file"), library.log_file.display()),
            t!("settings.opt_language").to_string(),
            t!("settings.back").to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => {
                let current = config.settings.library.active.clone();
                if let Some(path) = prompt_path(&t!("settings.opt_active"), &current, true)? {
                    config.settings.library.active = path;
                    persist(config)?;
                }
            }
            Some(1) => {
                let current = config.settings.library.archive.clone();
                if let Some(path) = prompt_path(&t!("settings.opt_archive"), &current, true)? {
                    config.settings.library.archive = path;
                    persist(config)?;
                }
            }
            Some(2) => {
                let current = config.settings.library.log_file.clone();
                if let Some(path) = prompt_path(&t!("settings.opt_log_file"), &current, false)? {
                    if let Err(e) = config.change_log_file(path) {
                        warn!("無法寫入新紀錄檔: {e:#}");
                        println!("{} {e:#}", style(t!("common.error_prefix")).red().bold());
                    }
                    persist(config)?;
                }
            }
            Some(3) => show_language_menu(term, config)?,
            Some(4) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// 輸入新路徑；沒有變更時回傳 None
fn prompt_path(label: &str, current: &Path, must_be_directory: bool) -> Result<Option<PathBuf>> {
    let input: String = Input::new()
        .with_prompt(label)
        .with_initial_text(current.display().to_string())
        .interact_text()?;
    let path = PathBuf::from(input.trim());

    if path.as_os_str().is_empty() || path.as_path() == current {
        return Ok(None);
    }

    if must_be_directory {
        if let Err(e) = validate_directory_exists(&path) {
            // 仍然儲存，啟動掃描時會再回報
            warn!("{e}");
            println!("{} {}", style(t!("settings.path_warning")).yellow(), e);
        }
    }

    Ok(Some(path))
}

fn persist(config: &Config) -> Result<()> {
    save_settings(&config.settings)?;
    info!("設定已儲存");
    println!("\n{}", style(t!("settings.saved")).green());
    std::thread::sleep(std::time::Duration::from_secs(1));
    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = [Language::EnUs, Language::ZhTw];

    let items: Vec<String> = languages.iter().map(|l: &Language| l.to_string()).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        persist(config)?;
    }

    Ok(())
}
