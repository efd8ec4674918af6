use super::constants::*;
use super::environment::env_string;
use super::keys::SettingKey;
use super::types::SettingsPatch;

/// The built-in fallback values shipped with the tool, lowest precedence
/// of the four tiers. Covers every key except the task id, which only the
/// command line can supply.
pub fn defaults() -> SettingsPatch {
    let mut patch = SettingsPatch::new();
    patch.set(SettingKey::TaskRc, DEFAULT_TASKRC);
    patch.set(SettingKey::TaskData, DEFAULT_TASK_DATA);
    patch.set(SettingKey::NotesDir, DEFAULT_NOTES_DIR);
    patch.set(SettingKey::NotesExt, DEFAULT_NOTES_EXT);
    patch.set(SettingKey::NotesAnnot, DEFAULT_NOTES_ANNOT);
    patch.set(SettingKey::NotesEditor, default_editor());
    patch.set(SettingKey::NotesQuiet, "false");
    patch
}

/// `$EDITOR`, then `$VISUAL`, then nano. The generic editor variables only
/// seed the default tier; `TOPEN_NOTES_EDITOR` is the environment-tier
/// override.
fn default_editor() -> String {
    env_string("EDITOR")
        .ok()
        .flatten()
        .or_else(|| env_string("VISUAL").ok().flatten())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}
