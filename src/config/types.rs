use crate::tools::{AuditLog, LibraryRoots, MusicLibrary, resolve_path};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

/// 音樂庫路徑設定，相對路徑以工作目錄為基準
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    pub active: PathBuf,
    pub archive: PathBuf,
    pub log_file: PathBuf,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            active: PathBuf::from("music/active"),
            archive: PathBuf::from("music/archive"),
            log_file: PathBuf::from("music_manager.log"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
}

impl Config {
    /// 依目前設定建立音樂庫
    pub fn music_library(&self) -> Result<MusicLibrary> {
        let library = &self.settings.library;
        let roots = LibraryRoots::new(
            resolve_path(&library.active)?,
            resolve_path(&library.archive)?,
        );
        let audit_log = AuditLog::new(resolve_path(&library.log_file)?);
        Ok(MusicLibrary::new(roots, audit_log))
    }

    /// 更換紀錄檔，並在新檔案寫入 session 開頭
    pub fn change_log_file(&mut self, path: PathBuf) -> Result<()> {
        self.settings.library.log_file = path;
        self.music_library()?.audit_log().start_session()?;
        Ok(())
    }
}
