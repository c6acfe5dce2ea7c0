use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}

/// 相對路徑以目前工作目錄為基準轉為絕對路徑（不要求路徑存在）
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
