//! 整合測試 - 在暫存目錄建立音樂庫，驗證掃描與移動

use std::fs;
use std::path::Path;

use album_shelf::tools::{
    Album, AuditLog, LibraryError, LibraryRoots, LibraryWarning, Location, MoveFailure, MoveVerb,
    MusicLibrary, move_album, scan_library,
};
use tempfile::TempDir;

fn make_album(root: &Path, artist: &str, name: &str) {
    let dir = root.join(artist).join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("01 - Track.flac"), "audio").unwrap();
    fs::write(dir.join("cover.jpg"), "image").unwrap();
}

fn make_roots(temp_dir: &TempDir) -> LibraryRoots {
    let roots = LibraryRoots::new(
        temp_dir.path().join("active"),
        temp_dir.path().join("archive"),
    );
    fs::create_dir_all(&roots.active).unwrap();
    fs::create_dir_all(&roots.archive).unwrap();
    roots
}

/// 測試 1: 單張專輯封存
#[test]
fn test_abbey_road_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let roots = make_roots(&temp_dir);
    make_album(&roots.active, "Beatles", "AbbeyRoad");

    let report = scan_library(&roots).unwrap();
    let albums: Vec<&Album> = report.catalog.iter().collect();
    assert_eq!(
        albums,
        vec![&Album::new("Beatles", "AbbeyRoad", Location::Active)]
    );
    // 封存資料夾是空的
    assert!(matches!(
        report.warnings.as_slice(),
        [LibraryWarning::EmptyRoot {
            location: Location::Archive,
            ..
        }]
    ));

    let outcome = move_album(albums[0], &roots).unwrap();

    assert_eq!(outcome.action.verb, MoveVerb::Archived);
    assert_eq!(outcome.action.artist, "Beatles");
    assert_eq!(outcome.action.name, "AbbeyRoad");
    assert!(!roots.active.join("Beatles").exists());
    assert!(roots.archive.join("Beatles/AbbeyRoad").is_dir());
}

/// 測試 2: 專輯數量等於兩邊末端資料夾數量
#[test]
fn test_catalog_counts_every_album() {
    let temp_dir = TempDir::new().unwrap();
    let roots = make_roots(&temp_dir);
    make_album(&roots.active, "Beatles", "Abbey Road");
    make_album(&roots.active, "Beatles", "Help!");
    make_album(&roots.active, "Queen", "Jazz");
    make_album(&roots.archive, "ABBA", "Arrival");
    make_album(&roots.archive, "Queen", "Innuendo");

    let report = scan_library(&roots).unwrap();

    assert_eq!(report.catalog.len(), 5);
    assert_eq!(report.catalog.count(Location::Active), 3);
    assert_eq!(report.catalog.count(Location::Archive), 2);
    assert!(report.warnings.is_empty());

    let artists: Vec<&str> = report.catalog.iter().map(|a| a.artist.as_str()).collect();
    assert_eq!(artists, vec!["ABBA", "Beatles", "Beatles", "Queen", "Queen"]);
}

/// 測試 3: 移動後再移回，路徑與位置都恢復
#[test]
fn test_round_trip_restores_layout() {
    let temp_dir = TempDir::new().unwrap();
    let roots = make_roots(&temp_dir);
    make_album(&roots.active, "Radiohead", "Kid A");
    make_album(&roots.archive, "Radiohead", "Amnesiac");

    let album = Album::new("Radiohead", "Kid A", Location::Active);
    let first = move_album(&album, &roots).unwrap();
    assert_eq!(first.action.verb, MoveVerb::Archived);

    let moved = Album::new("Radiohead", "Kid A", Location::Archive);
    let second = move_album(&moved, &roots).unwrap();
    assert_eq!(second.action.verb, MoveVerb::Activated);

    assert!(roots.active.join("Radiohead/Kid A/01 - Track.flac").exists());
    assert!(roots.archive.join("Radiohead/Amnesiac").exists());
    assert!(!roots.archive.join("Radiohead/Kid A").exists());

    let report = scan_library(&roots).unwrap();
    assert_eq!(report.catalog.len(), 2);
    assert!(report.warnings.is_empty());
}

/// 測試 4: 兩邊有相同專輯時掃描失敗
#[test]
fn test_duplicate_albums_listed() {
    let temp_dir = TempDir::new().unwrap();
    let roots = make_roots(&temp_dir);
    make_album(&roots.active, "Beatles", "Abbey Road");
    make_album(&roots.active, "Queen", "Jazz");
    make_album(&roots.archive, "Beatles", "Abbey Road");
    make_album(&roots.archive, "Queen", "Jazz");
    make_album(&roots.archive, "Queen", "Innuendo");

    let err = scan_library(&roots).unwrap_err();
    let LibraryError::DuplicateAlbums { pairs } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(pairs, &vec!["Beatles - Abbey Road".to_string(), "Queen - Jazz".to_string()]);
    assert!(err.to_string().contains("Queen - Jazz"));
}

/// 測試 5: 目標已存在同名專輯時不移動、不寫紀錄
#[test]
fn test_collision_leaves_disk_and_log_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let roots = make_roots(&temp_dir);
    make_album(&roots.archive, "Beatles", "Abbey Road");
    // 掃描後才在使用中建立同名專輯，模擬目錄過期
    let stale = Album::new("Beatles", "Abbey Road", Location::Archive);
    fs::create_dir_all(roots.active.join("Beatles/Abbey Road")).unwrap();

    let log_path = temp_dir.path().join("moves.log");
    let library = MusicLibrary::new(roots.clone(), AuditLog::new(&log_path));

    let err = library.move_album(&stale).unwrap_err();

    assert!(matches!(
        err,
        LibraryError::Move {
            failure: MoveFailure::DestinationExists,
            ..
        }
    ));
    assert!(roots.archive.join("Beatles/Abbey Road/cover.jpg").exists());
    assert!(!roots.active.join("Beatles/Abbey Road/cover.jpg").exists());
    assert!(!log_path.exists());
}

/// 測試 6: 找不到根目錄
#[test]
fn test_missing_active_root() {
    let temp_dir = TempDir::new().unwrap();
    let roots = LibraryRoots::new(
        temp_dir.path().join("nope"),
        temp_dir.path().to_path_buf(),
    );

    let err = scan_library(&roots).unwrap_err();
    assert!(matches!(
        err,
        LibraryError::MissingRoot {
            location: Location::Active,
            ..
        }
    ));
}
