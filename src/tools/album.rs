//! 專輯資料模型
//!
//! 專輯以 `artist/album` 兩層資料夾表示，位置只有使用中（active）與封存（archive）兩種

use std::fmt;
use std::path::{Path, PathBuf};

/// 專輯目前所在的根目錄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Active,
    Archive,
}

impl Location {
    /// 移動後的目標位置
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Active => Self::Archive,
            Self::Archive => Self::Active,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archive => "archive",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 兩個音樂庫根目錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRoots {
    pub active: PathBuf,
    pub archive: PathBuf,
}

impl LibraryRoots {
    pub fn new(active: impl Into<PathBuf>, archive: impl Into<PathBuf>) -> Self {
        Self {
            active: active.into(),
            archive: archive.into(),
        }
    }

    #[must_use]
    pub fn root(&self, location: Location) -> &Path {
        match location {
            Location::Active => &self.active,
            Location::Archive => &self.archive,
        }
    }
}

/// 單一專輯，身分為 (artist, name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// 專輯資料夾名稱
    pub name: String,
    /// 上一層（演出者）資料夾名稱
    pub artist: String,
    pub location: Location,
}

impl Album {
    pub fn new(artist: impl Into<String>, name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            location,
        }
    }

    #[must_use]
    pub fn identity(&self) -> (&str, &str) {
        (&self.artist, &self.name)
    }

    /// 專輯在指定根目錄下的完整路徑
    #[must_use]
    pub fn path_under(&self, root: &Path) -> PathBuf {
        root.join(&self.artist).join(&self.name)
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.name)
    }
}

/// 移動方向：移入封存為 archived，移入使用中為 activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerb {
    Archived,
    Activated,
}

impl MoveVerb {
    #[must_use]
    pub const fn into_location(destination: Location) -> Self {
        match destination {
            Location::Archive => Self::Archived,
            Location::Active => Self::Activated,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Archived => "archived",
            Self::Activated => "activated",
        }
    }

    /// 紀錄檔使用的首字大寫形式
    #[must_use]
    pub const fn log_label(self) -> &'static str {
        match self {
            Self::Archived => "Archived",
            Self::Activated => "Activated",
        }
    }
}

/// 一次成功移動的摘要，供紀錄檔與畫面顯示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescription {
    pub verb: MoveVerb,
    pub artist: String,
    pub name: String,
}

impl ActionDescription {
    #[must_use]
    pub fn log_line(&self) -> String {
        format!("{}\t{} - {}", self.verb.log_label(), self.artist, self.name)
    }
}

impl fmt::Display for ActionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.verb.as_str(), self.artist, self.name)
    }
}
