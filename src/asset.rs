use crate::models::TitleArt;
use std::fs;
use std::path::Path;

/// Where the title graphic lives, relative to the working directory.
pub const TITLE_ART_PATH: &str = "Image/zoltar.txt";

/// Reads the title graphic. A missing or unreadable file only costs the
/// picture, so failures are logged and reported as `None`.
pub fn load_title_art(path: &Path) -> Option<TitleArt> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "title art unavailable");
            return None;
        }
    };

    let lines: Vec<String> = raw.lines().map(|l| l.trim_end().to_string()).collect();
    if lines.iter().all(|l| l.is_empty()) {
        tracing::warn!(path = %path.display(), "title art is empty");
        return None;
    }

    tracing::info!(path = %path.display(), rows = lines.len(), "loaded title art");
    Some(TitleArt { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_existing_art() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  /\\  ").unwrap();
        writeln!(file, " (oo) ").unwrap();

        let art = load_title_art(file.path()).unwrap();
        assert_eq!(art.lines, vec!["  /\\", " (oo)"]);
        assert_eq!(art.height(), 2);
    }

    #[test]
    fn test_missing_art_degrades() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_title_art(&dir.path().join("nope.txt")).is_none());
    }

    #[test]
    fn test_blank_art_degrades() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        assert!(load_title_art(file.path()).is_none());
    }
}
