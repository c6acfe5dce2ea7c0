//! 移動紀錄檔（只寫入，不讀回）

use super::album::ActionDescription;
use super::library_error::LibraryError;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const SESSION_TIME_FORMAT: &str = "%Y-%m-%d @ %H:%M";

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 寫入新工作階段的開頭
    pub fn start_session(&self) -> Result<(), LibraryError> {
        let timestamp = Local::now().format(SESSION_TIME_FORMAT);
        self.append(&format!("\nNew session: {timestamp}\n"))
    }

    pub fn record(&self, action: &ActionDescription) -> Result<(), LibraryError> {
        self.append(&format!("{}\n", action.log_line()))
    }

    // 每次寫入都重新開啟檔案，不持有檔案 handle
    fn append(&self, text: &str) -> Result<(), LibraryError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(text.as_bytes()))
            .map_err(|source| LibraryError::LogWrite {
                path: self.path.clone(),
                source,
            })
    }
}
