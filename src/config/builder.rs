use anyhow::{Result, anyhow};

use super::keys::SettingKey;
use super::paths::normalize;
use super::types::{Config, SettingsPatch};

impl Config {
    /// Materialize a merged settings map into a typed configuration.
    ///
    /// Every key other than the task id is backed by a built-in default,
    /// so only a missing task id can fail here. Path-valued keys are
    /// normalized on the way in.
    pub fn build(merged: SettingsPatch) -> Result<Config> {
        let task_id = merged
            .get(SettingKey::TaskId)
            .ok_or_else(|| {
                anyhow!("No task id given. Pass a taskwarrior task id or uuid as argument.")
            })?
            .to_string();

        Ok(Config {
            task_rc: normalize(require(&merged, SettingKey::TaskRc)?),
            task_data: normalize(require(&merged, SettingKey::TaskData)?),
            task_id,
            notes_dir: normalize(require(&merged, SettingKey::NotesDir)?),
            notes_ext: require(&merged, SettingKey::NotesExt)?.to_string(),
            notes_annot: require(&merged, SettingKey::NotesAnnot)?.to_string(),
            notes_editor: require(&merged, SettingKey::NotesEditor)?.to_string(),
            notes_quiet: parse_bool(merged.get(SettingKey::NotesQuiet)),
        })
    }
}

fn require(merged: &SettingsPatch, key: SettingKey) -> Result<&str> {
    merged
        .get(key)
        .ok_or_else(|| anyhow!("Missing required setting: {key}"))
}

/// Tolerant truthy parse for the quiet flag, following the taskwarrior rc
/// convention: `true`, `yes`, `on` and `1` in any case are true, anything
/// else (including absence) is false.
pub(super) fn parse_bool(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "yes" | "on" | "1")
    )
}
