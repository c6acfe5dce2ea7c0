//! 專輯掃描器
//!
//! 走訪使用中與封存兩個根目錄，把沒有子資料夾的末端資料夾視為專輯，
//! 並確認同一張專輯不會同時出現在兩邊

use super::album::{Album, LibraryRoots, Location};
use super::catalog::Catalog;
use super::library_error::{LibraryError, LibraryWarning};
use log::{debug, info, warn};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 專輯資料夾相對根目錄的深度（root/artist/album）
///
/// 其他深度的末端資料夾推導出的 artist 沒有意義（深度 1 會把根目錄名稱當成 artist，
/// 更深則會漏掉中間層），一律以 `MisplacedFolder` 警告略過
const ALBUM_DEPTH: usize = 2;

/// 掃描結果
#[derive(Debug, Default)]
pub struct ScanReport {
    pub catalog: Catalog,
    pub warnings: Vec<LibraryWarning>,
}

/// 掃描兩個根目錄並建立專輯目錄
pub fn scan_library(roots: &LibraryRoots) -> Result<ScanReport, LibraryError> {
    let mut warnings = Vec::new();

    let active = scan_root(&roots.active, Location::Active, &mut warnings)?;
    let archived = scan_root(&roots.archive, Location::Archive, &mut warnings)?;

    let pairs = find_duplicates(&active, &archived);
    if !pairs.is_empty() {
        return Err(LibraryError::DuplicateAlbums { pairs });
    }

    info!(
        "掃描完成 - 使用中: {} 張, 封存: {} 張",
        active.len(),
        archived.len()
    );

    Ok(ScanReport {
        catalog: Catalog::from_parts(active, archived),
        warnings,
    })
}

/// 掃描單一根目錄，回傳該根目錄下的專輯（依資料夾名稱排序）
pub fn scan_root(
    root: &Path,
    location: Location,
    warnings: &mut Vec<LibraryWarning>,
) -> Result<Vec<Album>, LibraryError> {
    if !root.is_dir() {
        return Err(LibraryError::MissingRoot {
            location,
            path: root.to_path_buf(),
        });
    }

    info!("開始掃描目錄: {}", root.display());

    let mut directories: Vec<(usize, PathBuf)> = Vec::new();
    let mut parents: HashSet<PathBuf> = HashSet::new();
    // 無法讀取內容的資料夾不知道有沒有子資料夾，不做分類
    let mut unreadable: HashSet<PathBuf> = HashSet::new();

    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                let warning = LibraryWarning::Unreadable {
                    location,
                    path: path.clone(),
                    reason: e.to_string(),
                };
                warn!("{warning}");
                warnings.push(warning);
                unreadable.insert(path);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.depth() > 0 && is_metadata_folder(&entry) {
            let warning = LibraryWarning::MetadataFolder {
                location,
                path: entry.path().to_path_buf(),
            };
            debug!("{warning}");
            warnings.push(warning);
            walker.skip_current_dir();
            continue;
        }

        if entry.depth() > 0 {
            if let Some(parent) = entry.path().parent() {
                parents.insert(parent.to_path_buf());
            }
        }
        directories.push((entry.depth(), entry.into_path()));
    }

    let mut albums = Vec::new();
    for (depth, path) in directories {
        // 有子資料夾就不是末端
        if parents.contains(&path) || unreadable.contains(&path) {
            continue;
        }

        match depth {
            0 => {
                let warning = LibraryWarning::EmptyRoot { location, path };
                warn!("{warning}");
                warnings.push(warning);
            }
            ALBUM_DEPTH => {
                let album = album_from_leaf(&path, location);
                debug!("找到專輯: {album} ({location})");
                albums.push(album);
            }
            _ => {
                let warning = LibraryWarning::MisplacedFolder { location, path };
                warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    Ok(albums)
}

/// 找出同時存在於兩邊的 (artist, name)，以 `artist - name` 形式回傳
#[must_use]
pub fn find_duplicates(active: &[Album], archived: &[Album]) -> Vec<String> {
    let active_ids: HashSet<(&str, &str)> = active.iter().map(Album::identity).collect();

    archived
        .iter()
        .filter(|album| active_ids.contains(&album.identity()))
        .map(ToString::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn album_from_leaf(path: &Path, location: Location) -> Album {
    let artist = path.parent().map(base_name).unwrap_or_default();
    Album::new(artist, base_name(path), location)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// 檔案系統或 NAS 產生的資料夾名稱，不算專輯也不算子資料夾
const METADATA_FOLDERS: &[&str] = &[
    ".thumbnails",
    ".AppleDouble",
    ".Trashes",
    ".Spotlight-V100",
    ".fseventsd",
    ".TemporaryItems",
    "@eaDir",
    "$RECYCLE.BIN",
    "System Volume Information",
];

fn is_metadata_folder(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| METADATA_FOLDERS.contains(&name))
}
