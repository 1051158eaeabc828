//! Startup migration of audio assets
//!
//! Older deployments kept the sound files next to the page template. On startup
//! they are moved into the static directory, which is what the server serves.
//! Nothing here is fatal: a failed move is logged and the file stays where it is.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::constants::paths::LEGACY_ASSETS;

/// Outcome of a migration run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub moved: Vec<String>,
    pub failed: Vec<String>,
}

/// Move every legacy asset from `templates_dir` into `static_dir`
///
/// `static_dir` is created if missing. Files already present in `static_dir`
/// are never overwritten.
pub fn migrate_legacy_assets(templates_dir: &Path, static_dir: &Path) -> MigrationReport {
    let mut report = MigrationReport::default();

    if let Err(e) = fs::create_dir_all(static_dir) {
        warn!(dir = %static_dir.display(), error = %e, "Failed to create static directory");
        return report;
    }

    for name in LEGACY_ASSETS {
        let source = templates_dir.join(name);
        let destination = static_dir.join(name);

        if !source.is_file() || destination.exists() {
            continue;
        }

        match move_file(&source, &destination) {
            Ok(()) => {
                info!(from = %source.display(), to = %destination.display(), "Moved asset");
                report.moved.push(name.to_string());
            }
            Err(e) => {
                warn!(from = %source.display(), error = %e, "Failed to move asset");
                report.failed.push(name.to_string());
            }
        }
    }

    debug!(?report, "Asset migration finished");
    report
}

// `rename` fails across filesystems, fall back to copy and delete
fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    if fs::rename(source, destination).is_ok() {
        return Ok(());
    }

    fs::copy(source, destination)?;
    fs::remove_file(source)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_moves_assets_into_new_static_dir() {
        let root = TempDir::new().unwrap();
        let templates = root.path().join("templates");
        let statics = root.path().join("static");
        fs::create_dir(&templates).unwrap();
        fs::write(templates.join("seufzer.mp3"), b"seufz").unwrap();
        fs::write(templates.join("stöhner.mp3"), b"stoehn").unwrap();
        fs::write(templates.join("index.html"), b"<html>").unwrap();

        let report = migrate_legacy_assets(&templates, &statics);

        assert_eq!(report.moved, vec!["seufzer.mp3", "stöhner.mp3"]);
        assert!(report.failed.is_empty());
        assert_eq!(fs::read(statics.join("seufzer.mp3")).unwrap(), b"seufz");
        assert!(!templates.join("seufzer.mp3").exists());
        // Only the known sound files move
        assert!(templates.join("index.html").exists());
        assert!(!statics.join("index.html").exists());
    }

    #[test]
    fn test_existing_destination_is_kept() {
        let root = TempDir::new().unwrap();
        let templates = root.path().join("templates");
        let statics = root.path().join("static");
        fs::create_dir_all(&templates).unwrap();
        fs::create_dir_all(&statics).unwrap();
        fs::write(templates.join("sad_sound.mp3"), b"old").unwrap();
        fs::write(statics.join("sad_sound.mp3"), b"new").unwrap();

        let report = migrate_legacy_assets(&templates, &statics);

        assert_eq!(report, MigrationReport::default());
        assert_eq!(fs::read(statics.join("sad_sound.mp3")).unwrap(), b"new");
        assert!(templates.join("sad_sound.mp3").exists());
    }

    #[test]
    fn test_missing_templates_dir_is_fine() {
        let root = TempDir::new().unwrap();
        let statics = root.path().join("static");

        let report = migrate_legacy_assets(&root.path().join("nope"), &statics);

        assert_eq!(report, MigrationReport::default());
        assert!(statics.is_dir());
    }
}
