pub const DEFAULT_TASKRC: &str = "~/.config/task/taskrc";
pub const DEFAULT_TASK_DATA: &str = "~/.task";
pub const DEFAULT_NOTES_DIR: &str = "~/.task/notes";
pub const DEFAULT_NOTES_EXT: &str = "md";
pub const DEFAULT_NOTES_ANNOT: &str = "Note";
pub const FALLBACK_EDITOR: &str = "nano";
