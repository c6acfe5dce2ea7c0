//! 指令列工作階段：保存專輯目錄與本次已完成的移動

use crate::tools::{ActionDescription, Catalog, LibraryError, MoveOutcome, MusicLibrary};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no album with number {index} (accepted values between 0 and {max})")]
    IndexOutOfRange { index: usize, max: usize },
    #[error("the catalog is empty")]
    EmptyCatalog,
    #[error(transparent)]
    Library(#[from] LibraryError),
}

#[derive(Debug, Default)]
pub struct ShellSession {
    catalog: Catalog,
    history: Vec<ActionDescription>,
}

impl ShellSession {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn history(&self) -> &[ActionDescription] {
        &self.history
    }

    /// 移動指定編號的專輯；成功後切換目錄中的位置並加入歷史
    pub fn move_album(
        &mut self,
        library: &MusicLibrary,
        index: usize,
    ) -> Result<MoveOutcome, SessionError> {
        if self.catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        let album = self
            .catalog
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                index,
                max: self.catalog.len() - 1,
            })?;

        let outcome = library.move_album(album)?;

        self.catalog.toggle_location(index);
        self.history.push(outcome.action.clone());
        Ok(outcome)
    }
}
