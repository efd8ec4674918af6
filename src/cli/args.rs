use anyhow::Result;
use clap::Parser;

use crate::config::{SettingKey, SettingsPatch};

use super::commands;

/// Entry point for the `topen` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "topen",
    about = "Taskwarrior note editing made easy",
    version,
    after_help = "Provide a taskwarrior task id or uuid and topen creates a new\n\
                  note file for it or lets you edit an existing one. It also\n\
                  adds a small annotation to the task so that you can see there\n\
                  is a note the next time you view the task."
)]
pub struct Cli {
    /// The id/uuid of the taskwarrior task for which we edit notes
    pub id: String,

    /// Location of topen notes files
    #[arg(short = 'd', long = "notes-dir")]
    pub notes_dir: Option<String>,

    /// Silence any verbose displayed information
    #[arg(long)]
    pub quiet: bool,

    /// Extension of note files
    #[arg(long)]
    pub extension: Option<String>,

    /// Annotation content to set within taskwarrior
    #[arg(long)]
    pub annotation: Option<String>,

    /// Program to open note files with
    #[arg(long)]
    pub editor: Option<String>,

    /// Location of taskwarrior config file
    #[arg(long = "task-rc")]
    pub task_rc: Option<String>,

    /// Location of taskwarrior data directory
    #[arg(long = "task-data")]
    pub task_data: Option<String>,
}

impl Cli {
    /// The command-line tier: exactly the settings this invocation
    /// explicitly supplied. Options left at their parser defaults are
    /// omitted so lower tiers can fill them in; `--quiet` is presence-only
    /// and records `true` when given.
    pub fn to_patch(&self) -> SettingsPatch {
        let mut patch = SettingsPatch::new();
        patch.set(SettingKey::TaskId, self.id.clone());
        if let Some(dir) = &self.notes_dir {
            patch.set(SettingKey::NotesDir, dir.clone());
        }
        if let Some(ext) = &self.extension {
            patch.set(SettingKey::NotesExt, ext.clone());
        }
        if let Some(annot) = &self.annotation {
            patch.set(SettingKey::NotesAnnot, annot.clone());
        }
        if let Some(editor) = &self.editor {
            patch.set(SettingKey::NotesEditor, editor.clone());
        }
        if let Some(taskrc) = &self.task_rc {
            patch.set(SettingKey::TaskRc, taskrc.clone());
        }
        if let Some(data) = &self.task_data {
            patch.set(SettingKey::TaskData, data.clone());
        }
        if self.quiet {
            patch.set(SettingKey::NotesQuiet, "true");
        }
        patch
    }

    pub fn run(self) -> Result<()> {
        commands::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_contains_only_supplied_options() {
        let cli = Cli::try_parse_from(["topen", "7"]).unwrap();
        let patch = cli.to_patch();
        assert_eq!(patch.get(SettingKey::TaskId), Some("7"));
        assert_eq!(patch.get(SettingKey::NotesDir), None);
        assert_eq!(patch.get(SettingKey::NotesExt), None);
        assert_eq!(patch.get(SettingKey::NotesQuiet), None);
    }

    #[test]
    fn patch_records_overrides() {
        let cli = Cli::try_parse_from([
            "topen",
            "abc-123",
            "-d",
            "/srv/notes",
            "--extension",
            "org",
            "--annotation",
            "Has note",
            "--editor",
            "vi",
            "--task-rc",
            "/etc/taskrc",
            "--task-data",
            "/srv/task",
            "--quiet",
        ])
        .unwrap();
        let patch = cli.to_patch();
        assert_eq!(patch.get(SettingKey::TaskId), Some("abc-123"));
        assert_eq!(patch.get(SettingKey::NotesDir), Some("/srv/notes"));
        assert_eq!(patch.get(SettingKey::NotesExt), Some("org"));
        assert_eq!(patch.get(SettingKey::NotesAnnot), Some("Has note"));
        assert_eq!(patch.get(SettingKey::NotesEditor), Some("vi"));
        assert_eq!(patch.get(SettingKey::TaskRc), Some("/etc/taskrc"));
        assert_eq!(patch.get(SettingKey::TaskData), Some("/srv/task"));
        assert_eq!(patch.get(SettingKey::NotesQuiet), Some("true"));
    }

    #[test]
    fn task_id_is_required() {
        // A missing id must abort at the parser with a usage error rather
        // than limping on into a lookup with no identifier.
        assert!(Cli::try_parse_from(["topen"]).is_err());
        assert!(Cli::try_parse_from(["topen", "--quiet"]).is_err());
    }
}
