use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::feedback::Feedback;

/// The note file belonging to a task uuid: `<dir>/<uuid>.<ext>`.
pub fn note_path(uuid: &str, notes_dir: &Path, notes_ext: &str) -> PathBuf {
    notes_dir.join(format!("{uuid}.{notes_ext}"))
}

/// Open a note file in the user's editor and block until the editor
/// exits.
///
/// The command goes through the shell so editor settings like
/// `code --wait` keep working. No timeout: the note only counts as edited
/// once the user closes the editor.
pub fn open_editor(file: &Path, editor: &str, feedback: &Feedback) -> Result<()> {
    feedback.info(&format!("Editing note: {}", file.display()));

    let status = Command::new("sh")
        .arg("-c")
        .arg(format!("{editor} {}", file.display()))
        .status()
        .with_context(|| format!("Failed to launch editor '{editor}'"))?;
    if !status.success() {
        bail!("Editor '{editor}' exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_note_path_from_uuid_dir_and_extension() {
        assert_eq!(
            note_path("abc-123", Path::new("/tmp/notes"), "md"),
            PathBuf::from("/tmp/notes/abc-123.md")
        );
    }

    #[test]
    fn note_path_keeps_directory_untouched() {
        assert_eq!(
            note_path("abc-123", Path::new("relative/notes"), "org"),
            PathBuf::from("relative/notes/abc-123.org")
        );
    }
}
