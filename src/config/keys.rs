use std::fmt;

/// A configuration knob recognized by topen.
///
/// The set is closed: every configuration source (defaults, taskrc,
/// environment, command line) speaks in terms of these keys, and the
/// resolved [`Config`](super::Config) carries exactly one value per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    /// Location of the taskwarrior config file.
    TaskRc,
    /// Location of the taskwarrior data directory.
    TaskData,
    /// The id or uuid of the task to edit a note for.
    TaskId,
    /// Directory holding note files.
    NotesDir,
    /// Extension of note files.
    NotesExt,
    /// Annotation added to tasks that have a note.
    NotesAnnot,
    /// Program used to open note files.
    NotesEditor,
    /// Suppress informational feedback.
    NotesQuiet,
}

impl SettingKey {
    pub const ALL: [SettingKey; 8] = [
        SettingKey::TaskRc,
        SettingKey::TaskData,
        SettingKey::TaskId,
        SettingKey::NotesDir,
        SettingKey::NotesExt,
        SettingKey::NotesAnnot,
        SettingKey::NotesEditor,
        SettingKey::NotesQuiet,
    ];

    /// The environment variable consulted for this key, if any.
    ///
    /// `TASKRC` and `TASKDATA` are shared with taskwarrior itself; the
    /// rest are topen-specific. The task id never comes from the
    /// environment.
    pub fn env_var(self) -> Option<&'static str> {
        match self {
            SettingKey::TaskRc => Some("TASKRC"),
            SettingKey::TaskData => Some("TASKDATA"),
            SettingKey::TaskId => None,
            SettingKey::NotesDir => Some("TOPEN_NOTES_DIR"),
            SettingKey::NotesExt => Some("TOPEN_NOTES_EXT"),
            SettingKey::NotesAnnot => Some("TOPEN_NOTES_ANNOT"),
            SettingKey::NotesEditor => Some("TOPEN_NOTES_EDITOR"),
            SettingKey::NotesQuiet => Some("TOPEN_NOTES_QUIET"),
        }
    }

    /// The taskrc entry this key is read from, if any.
    ///
    /// `data.location` follows the taskwarrior settings convention, the
    /// `notes.*` entries are topen's own. The taskrc location itself has
    /// no entry: the file that is about to be read cannot say where it
    /// lives.
    pub fn taskrc_key(self) -> Option<&'static str> {
        match self {
            SettingKey::TaskRc | SettingKey::TaskId => None,
            SettingKey::TaskData => Some("data.location"),
            SettingKey::NotesDir => Some("notes.dir"),
            SettingKey::NotesExt => Some("notes.ext"),
            SettingKey::NotesAnnot => Some("notes.annot"),
            SettingKey::NotesEditor => Some("notes.editor"),
            SettingKey::NotesQuiet => Some("notes.quiet"),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingKey::TaskRc => "task_rc",
            SettingKey::TaskData => "task_data",
            SettingKey::TaskId => "task_id",
            SettingKey::NotesDir => "notes_dir",
            SettingKey::NotesExt => "notes_ext",
            SettingKey::NotesAnnot => "notes_annot",
            SettingKey::NotesEditor => "notes_editor",
            SettingKey::NotesQuiet => "notes_quiet",
        };
        write!(f, "{name}")
    }
}
