mod album;
mod album_mover;
mod album_scanner;
mod audit_log;
mod catalog;
mod library_error;
mod music_library;
mod path_validator;

pub use album::{ActionDescription, Album, LibraryRoots, Location, MoveVerb};
pub use album_mover::{MoveOutcome, move_album};
pub use album_scanner::{ScanReport, find_duplicates, scan_library, scan_root};
pub use audit_log::AuditLog;
pub use catalog::{Catalog, ListFilter};
pub use library_error::{LibraryError, LibraryWarning, MoveFailure};
pub use music_library::MusicLibrary;
pub use path_validator::{resolve_path, validate_directory_exists};
