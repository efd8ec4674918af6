use std::collections::BTreeMap;
use std::path::PathBuf;

use super::keys::SettingKey;

/// The settings one configuration source has an explicit value for.
///
/// A key that is absent means the source expresses no opinion on it, which
/// is different from a key set to an empty string: only the former lets a
/// lower-precedence source shine through during [`merge`](Self::merge).
/// Readers that treat empty input as "no opinion" (environment, taskrc)
/// filter before inserting; the patch itself stores values verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    values: BTreeMap<SettingKey, String>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: SettingKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Combine sources given lowest-precedence first: for each key the
    /// last source that defines it wins, and a key no source defines
    /// stays absent.
    pub fn merge(tiers: impl IntoIterator<Item = SettingsPatch>) -> SettingsPatch {
        let mut merged = SettingsPatch::new();
        for tier in tiers {
            merged.values.extend(tier.values);
        }
        merged
    }
}

/// Fully resolved topen configuration.
///
/// Built once per invocation from the merged settings, with path values
/// normalized and the quiet flag coerced to a bool. Nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// The taskwarrior config file the taskrc tier was read from.
    pub task_rc: PathBuf,
    /// The taskwarrior data directory.
    pub task_data: PathBuf,
    /// The id or uuid of the task to edit a note for. Taskwarrior
    /// disambiguates the two forms during lookup.
    pub task_id: String,
    /// The directory note files live in.
    pub notes_dir: PathBuf,
    /// The extension of note files.
    pub notes_ext: String,
    /// The annotation marking a task as having a note.
    pub notes_annot: String,
    /// The editor command note files are opened with.
    pub notes_editor: String,
    /// Whether informational feedback is suppressed.
    pub notes_quiet: bool,
}
