// savepath.rs - Output Path Generation
//
// Turns the optional custom name from the UI into an absolute PNG path
// rooted in the current working directory. Names derived from the clock
// have second precision; two captures in the same second share a path
// and the later one overwrites the earlier (accepted behavior).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

/// File extension of every saved screenshot.
pub const EXTENSION: &str = "png";

/// Characters that are illegal in filenames on common filesystems.
const ILLEGAL_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Strip characters that are illegal in filenames on common filesystems.
pub fn sanitize(name: &str) -> String {
    name.chars().filter(|c| !ILLEGAL_CHARS.contains(c)).collect()
}

/// Build the output filename for an optional custom base name.
///
/// An empty (or whitespace-only) name falls back to a timestamped name;
/// so does a custom name that sanitizes down to nothing.
pub fn filename(custom_name: &str) -> String {
    let base = sanitize(custom_name.trim());
    if base.is_empty() {
        format!(
            "screenshot_{}.{}",
            Local::now().format(TIMESTAMP_FORMAT),
            EXTENSION
        )
    } else {
        format!("{}.{}", base, EXTENSION)
    }
}

/// Absolute output path for an optional custom base name, rooted in the
/// current working directory. No uniqueness check is performed; the
/// capture engine overwrites a pre-existing file at this path.
pub fn build(custom_name: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to resolve the working directory")?;
    Ok(cwd.join(filename(custom_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_every_illegal_character() {
        let dirty = r#"re\po/rt*2024?final:v2"<draft>|x"#;
        let clean = sanitize(dirty);

        assert_eq!(clean, "report2024finalv2draftx");
        for c in ILLEGAL_CHARS {
            assert!(!clean.contains(*c));
        }
    }

    #[test]
    fn sanitize_keeps_legal_names_untouched() {
        assert_eq!(sanitize("report"), "report");
        assert_eq!(sanitize("my shot-2024_01"), "my shot-2024_01");
    }

    #[test]
    fn custom_name_gets_the_png_extension() {
        assert_eq!(filename("report"), "report.png");
        assert_eq!(filename("  report  "), "report.png");
    }

    #[test]
    fn empty_name_falls_back_to_timestamp() {
        for name in ["", "   ", "???///"] {
            let generated = filename(name);
            assert_timestamped(&generated);
        }
    }

    #[test]
    fn path_is_rooted_in_the_working_directory() {
        let path = build("report").unwrap();

        assert!(path.is_absolute());
        assert_eq!(path.parent().unwrap(), std::env::current_dir().unwrap());
        assert_eq!(path.file_name().unwrap(), "report.png");
    }

    // screenshot_YYYYMMDD_HHMMSS.png
    fn assert_timestamped(name: &str) {
        let stem = name
            .strip_prefix("screenshot_")
            .unwrap_or_else(|| panic!("unexpected prefix: {}", name));
        let stem = stem
            .strip_suffix(".png")
            .unwrap_or_else(|| panic!("unexpected extension: {}", name));

        let (date, time) = stem.split_once('_').expect("missing date/time separator");
        assert_eq!(date.len(), 8);
        assert_eq!(time.len(), 6);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(time.chars().all(|c| c.is_ascii_digit()));
    }
}
