use super::album::{Album, LibraryRoots};
use super::album_mover::{MoveOutcome, move_album};
use super::album_scanner::{ScanReport, scan_library};
use super::audit_log::AuditLog;
use super::library_error::{LibraryError, LibraryWarning};
use log::warn;

/// 兩個前端共用的音樂庫操作：掃描與移動
#[derive(Debug, Clone)]
pub struct MusicLibrary {
    roots: LibraryRoots,
    audit_log: AuditLog,
}

impl MusicLibrary {
    pub const fn new(roots: LibraryRoots, audit_log: AuditLog) -> Self {
        Self { roots, audit_log }
    }

    #[must_use]
    pub const fn roots(&self) -> &LibraryRoots {
        &self.roots
    }

    #[must_use]
    pub const fn audit_log(&self) -> &AuditLog {
        &self.audit_log
    }

    pub fn scan(&self) -> Result<ScanReport, LibraryError> {
        scan_library(&self.roots)
    }

    /// 移動專輯並寫入紀錄；移動失敗時不寫紀錄
    pub fn move_album(&self, album: &Album) -> Result<MoveOutcome, LibraryError> {
        let mut outcome = move_album(album, &self.roots)?;

        if let Err(e) = self.audit_log.record(&outcome.action) {
            let warning = LibraryWarning::LogWrite {
                path: self.audit_log.path().to_path_buf(),
                reason: e.to_string(),
            };
            warn!("{warning}");
            outcome.warnings.push(warning);
        }

        Ok(outcome)
    }
}
