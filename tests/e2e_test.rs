//! E2E Integration Tests
//!
//! 模擬一次完整的工作階段：掃描、經由指令列移動、檢查紀錄檔

use std::fs;

use album_shelf::component::command_shell::{Command, ShellSession, parse_command};
use album_shelf::tools::{AuditLog, LibraryRoots, ListFilter, Location, MusicLibrary};
use tempfile::TempDir;

#[test]
fn test_command_shell_session_e2e() {
    let temp_dir = TempDir::new().unwrap();
    let roots = LibraryRoots::new(
        temp_dir.path().join("active"),
        temp_dir.path().join("archive"),
    );
    for (root, artist, name) in [
        (&roots.active, "Beatles", "Abbey Road"),
        (&roots.active, "Beatles", "Revolver"),
        (&roots.archive, "Pink Floyd", "Animals"),
    ] {
        let dir = root.join(artist).join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("track.flac"), "audio").unwrap();
    }

    let log_path = temp_dir.path().join("music_manager.log");
    let library = MusicLibrary::new(roots.clone(), AuditLog::new(&log_path));
    library.audit_log().start_session().unwrap();

    let report = library.scan().unwrap();
    let mut session = ShellSession::new(report.catalog);

    // 0 = Beatles/Abbey Road, 1 = Beatles/Revolver, 2 = Pink Floyd/Animals
    for line in ["m 0", "move 1", "m 2"] {
        let Ok(Command::Move(index)) = parse_command(line) else {
            panic!("failed to parse {line}");
        };
        session.move_album(&library, index).unwrap();
    }

    assert!(!roots.active.join("Beatles").exists());
    assert!(!roots.archive.join("Pink Floyd").exists());
    assert!(roots.archive.join("Beatles/Abbey Road/track.flac").exists());
    assert!(roots.archive.join("Beatles/Revolver/track.flac").exists());
    assert!(roots.active.join("Pink Floyd/Animals/track.flac").exists());

    let catalog = session.catalog();
    assert_eq!(catalog.count(Location::Active), 1);
    assert_eq!(catalog.filtered(ListFilter::Archived).count(), 2);

    // 切換後的目錄與重新掃描結果一致
    let rescanned = library.scan().unwrap().catalog;
    assert_eq!(&rescanned, catalog);

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("New session: "));
    assert_eq!(lines[1], "Archived\tBeatles - Abbey Road");
    assert_eq!(lines[2], "Archived\tBeatles - Revolver");
    assert_eq!(lines[3], "Activated\tPink Floyd - Animals");

    let history: Vec<String> = session.history().iter().map(ToString::to_string).collect();
    assert_eq!(
        history,
        vec![
            "archived Beatles - Abbey Road",
            "archived Beatles - Revolver",
            "activated Pink Floyd - Animals",
        ]
    );
}
