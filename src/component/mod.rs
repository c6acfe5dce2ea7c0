//! 功能元件模組
//!
//! 兩個前端共用同一組音樂庫操作（掃描、移動），各自只負責輸入與顯示

pub mod album_browser;
pub mod command_shell;
pub mod library_view;

pub use album_browser::AlbumBrowser;
pub use command_shell::CommandShell;
