//! 專輯移動器
//!
//! 將專輯資料夾在使用中與封存之間搬移，並刪除搬空的演出者資料夾

use super::album::{ActionDescription, Album, LibraryRoots, MoveVerb};
use super::library_error::{LibraryError, LibraryWarning, MoveFailure};
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 移動結果
#[derive(Debug)]
pub struct MoveOutcome {
    pub action: ActionDescription,
    pub warnings: Vec<LibraryWarning>,
}

/// 將專輯移到另一個根目錄
///
/// 目標位置由 `album.location` 決定。失敗時不做任何回復，
/// 除了移除本次建立的空演出者資料夾與跨檔案系統複製留下的半成品
pub fn move_album(album: &Album, roots: &LibraryRoots) -> Result<MoveOutcome, LibraryError> {
    let destination = album.location.opposite();
    let src_root = roots.root(album.location);
    let src = album.path_under(src_root);
    let dst_artist = roots.root(destination).join(&album.artist);
    let dst = dst_artist.join(&album.name);

    let fail = |failure: MoveFailure| LibraryError::Move {
        src: src.clone(),
        dst: dst.clone(),
        failure,
    };

    if !src.is_dir() {
        return Err(fail(MoveFailure::SourceMissing));
    }
    if dst.exists() {
        return Err(fail(MoveFailure::DestinationExists));
    }

    let created_artist = !dst_artist.exists();
    fs::create_dir_all(&dst_artist).map_err(|e| fail(MoveFailure::Io(e)))?;

    info!("移動專輯: {} -> {}", src.display(), dst.display());
    if let Err(failure) = relocate(&src, &dst) {
        if created_artist {
            // 失敗時不留下空的演出者資料夾
            let _ = fs::remove_dir(&dst_artist);
        }
        return Err(fail(failure));
    }

    let mut warnings = Vec::new();
    if let Some(warning) = prune_empty_artist(&src_root.join(&album.artist)) {
        warn!("{warning}");
        warnings.push(warning);
    }

    Ok(MoveOutcome {
        action: ActionDescription {
            verb: MoveVerb::into_location(destination),
            artist: album.artist.clone(),
            name: album.name.clone(),
        },
        warnings,
    })
}

/// 先嘗試 rename，跨檔案系統時改為複製後刪除
fn relocate(src: &Path, dst: &Path) -> Result<(), MoveFailure> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            warn!("rename 失敗（跨檔案系統），改用複製: {e}");
            copy_then_remove(src, dst)
        }
        Err(e) => Err(MoveFailure::Io(e)),
    }
}

/// 複製失敗會刪掉不完整的目標；複製完成後來源刪不掉則回報兩邊都有
fn copy_then_remove(src: &Path, dst: &Path) -> Result<(), MoveFailure> {
    if let Err(e) = copy_dir_recursive(src, dst) {
        let _ = fs::remove_dir_all(dst);
        return Err(MoveFailure::Io(e));
    }
    fs::remove_dir_all(src).map_err(MoveFailure::SourceNotRemoved)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(io::Error::other)?;
        let target: PathBuf = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// 演出者資料夾已空時刪除；失敗回傳警告
fn prune_empty_artist(artist_dir: &Path) -> Option<LibraryWarning> {
    let cleanup_warning = |reason: String| LibraryWarning::Cleanup {
        path: artist_dir.to_path_buf(),
        reason,
    };

    let is_empty = match fs::read_dir(artist_dir) {
        Ok(mut entries) => entries.next().is_none(),
        Err(e) => return Some(cleanup_warning(e.to_string())),
    };

    if !is_empty {
        return None;
    }

    match fs::remove_dir(artist_dir) {
        Ok(()) => {
            debug!("已刪除空資料夾: {}", artist_dir.display());
            None
        }
        Err(e) => Some(cleanup_warning(e.to_string())),
    }
}
