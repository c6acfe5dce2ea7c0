//! 音樂庫錯誤與警告

use super::album::Location;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// 中止操作的錯誤
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Could not find the {location} folder: {}. Check its definition in settings.json", path.display())]
    MissingRoot { location: Location, path: PathBuf },

    #[error(
        "The following albums are both active and archived:\n{}\nHandle these discrepancies before continuing.",
        pairs.join("\n")
    )]
    DuplicateAlbums { pairs: Vec<String> },

    #[error("Failed to move {} -> {}: {failure}", src.display(), dst.display())]
    Move {
        src: PathBuf,
        dst: PathBuf,
        failure: MoveFailure,
    },

    #[error("Failed to write log file {}: {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 移動失敗的原因
#[derive(Debug)]
pub enum MoveFailure {
    SourceMissing,
    DestinationExists,
    /// 跨檔案系統複製已完成，但來源無法刪除，兩邊都有這張專輯
    SourceNotRemoved(io::Error),
    Io(io::Error),
}

impl fmt::Display for MoveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceMissing => f.write_str("source album folder does not exist"),
            Self::DestinationExists => f.write_str("destination already contains this album"),
            Self::SourceNotRemoved(e) => write!(
                f,
                "the album was fully copied to the destination, but the source copy could not be removed ({e}); delete the source folder manually before rescanning"
            ),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

/// 不影響結果的警告，會同時寫入 log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryWarning {
    /// 根目錄沒有任何演出者資料夾
    EmptyRoot { location: Location, path: PathBuf },
    /// 不在 artist/album 這一層的末端資料夾
    MisplacedFolder { location: Location, path: PathBuf },
    /// 系統產生的資料夾（`@eaDir`、`.thumbnails` 等），不掃描
    MetadataFolder { location: Location, path: PathBuf },
    /// 無法讀取的資料夾，已略過
    Unreadable {
        location: Location,
        path: PathBuf,
        reason: String,
    },
    /// 移動成功但空的演出者資料夾無法刪除
    Cleanup { path: PathBuf, reason: String },
    /// 移動成功但紀錄檔寫入失敗
    LogWrite { path: PathBuf, reason: String },
}

impl fmt::Display for LibraryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRoot { location, path } => {
                write!(f, "The {location} folder {} was detected as empty", path.display())
            }
            Self::MisplacedFolder { location, path } => write!(
                f,
                "Skipped {} in the {location} folder: not an artist/album folder",
                path.display()
            ),
            Self::MetadataFolder { location, path } => write!(
                f,
                "Ignored system folder {} in the {location} folder",
                path.display()
            ),
            Self::Unreadable {
                location,
                path,
                reason,
            } => write!(
                f,
                "Skipped unreadable folder {} in the {location} folder: {reason}",
                path.display()
            ),
            Self::Cleanup { path, reason } => {
                write!(f, "{} is empty, but could not be deleted: {reason}", path.display())
            }
            Self::LogWrite { path, reason } => {
                write!(f, "Move succeeded but {} could not be written: {reason}", path.display())
            }
        }
    }
}
