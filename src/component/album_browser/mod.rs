//! 專輯瀏覽元件（清單選取後移動）

mod main;

pub use main::AlbumBrowser;
