use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::feedback::Feedback;

/// A taskwarrior task, as exposed by `task export`. Fields the tool does
/// not consume are left to serde to skip.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    /// The working-set id. Completed and deleted tasks export id 0 or no
    /// id at all.
    #[serde(default)]
    pub id: Option<u64>,
    pub uuid: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// An annotation attached to a taskwarrior task.
#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    pub description: String,
}

/// Wrapper around the `task` binary, scoped to one taskrc and data
/// location so every invocation sees the same store the configuration
/// resolved to.
#[derive(Debug, Clone)]
pub struct TaskStore {
    taskrc: PathBuf,
    data_location: PathBuf,
}

impl TaskStore {
    pub fn new(taskrc: &Path, data_location: &Path) -> Self {
        Self {
            taskrc: taskrc.to_path_buf(),
            data_location: data_location.to_path_buf(),
        }
    }

    /// Find a task by taskwarrior id or uuid.
    pub fn find(&self, ident: &str) -> Result<Task> {
        let output = self
            .task_command()
            .arg("export")
            .output()
            .context("Failed to run `task export`. Is taskwarrior installed?")?;
        if !output.status.success() {
            bail!(
                "`task export` failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let tasks: Vec<Task> = serde_json::from_slice(&output.stdout)
            .context("Failed to parse `task export` output")?;
        find_match(&tasks, ident)
            .cloned()
            .ok_or_else(|| anyhow!("Could not find task for ID: {ident}"))
    }

    /// Add `text` as an annotation unless the task already carries an
    /// annotation with exactly that content.
    pub fn ensure_annotation(&self, task: &Task, text: &str, feedback: &Feedback) -> Result<()> {
        if has_annotation(task, text) {
            return Ok(());
        }

        let output = self
            .task_command()
            .arg(format!("uuid:{}", task.uuid))
            .arg("annotate")
            .arg("--")
            .arg(text)
            .output()
            .context("Failed to run `task annotate`")?;
        if !output.status.success() {
            bail!(
                "`task annotate` failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        feedback.info(&format!("Added annotation: {text}"));
        Ok(())
    }

    fn task_command(&self) -> Command {
        let mut cmd = Command::new("task");
        cmd.arg(format!("rc:{}", self.taskrc.display()))
            .arg(format!("rc.data.location={}", self.data_location.display()))
            .arg("rc.confirmation=0")
            .arg("rc.verbose=nothing")
            .arg("rc.hooks=0");
        cmd
    }
}

/// Match an identifier against exported tasks: numeric working-set id
/// first, exact uuid second.
fn find_match<'a>(tasks: &'a [Task], ident: &str) -> Option<&'a Task> {
    if let Ok(id) = ident.parse::<u64>()
        && let Some(task) = tasks.iter().find(|task| task.id == Some(id))
    {
        return Some(task);
    }
    tasks.iter().find(|task| task.uuid == ident)
}

fn has_annotation(task: &Task, text: &str) -> bool {
    task.annotations
        .iter()
        .any(|annot| annot.description == text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"[
        {
            "id": 7,
            "uuid": "abc-123",
            "description": "write the quarterly report",
            "status": "pending",
            "entry": "20250601T090000Z",
            "urgency": 4.3
        },
        {
            "id": 8,
            "uuid": "def-456",
            "description": "book flights",
            "status": "pending",
            "entry": "20250602T100000Z",
            "annotations": [
                {"entry": "20250603T080000Z", "description": "Note"}
            ],
            "urgency": 1.1
        },
        {
            "id": 0,
            "uuid": "0de-f99",
            "description": "done already",
            "status": "completed",
            "entry": "20250101T000000Z"
        }
    ]"#;

    fn fixture() -> Vec<Task> {
        serde_json::from_str(EXPORT).unwrap()
    }

    #[test]
    fn parses_export_payload() {
        let tasks = fixture();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].uuid, "abc-123");
        assert!(tasks[0].annotations.is_empty());
        assert_eq!(tasks[1].annotations[0].description, "Note");
    }

    #[test]
    fn finds_by_working_set_id() {
        let tasks = fixture();
        assert_eq!(find_match(&tasks, "7").unwrap().uuid, "abc-123");
    }

    #[test]
    fn finds_by_uuid() {
        let tasks = fixture();
        assert_eq!(find_match(&tasks, "def-456").unwrap().id, Some(8));
    }

    #[test]
    fn numeric_identifier_can_still_match_a_uuid() {
        // An identifier that parses as a number but matches no id falls
        // through to the uuid lookup, like the id-then-uuid retry in the
        // tasklib-based original.
        let mut tasks = fixture();
        tasks[0].uuid = "123".to_string();
        assert_eq!(find_match(&tasks, "123").unwrap().id, Some(7));
    }

    #[test]
    fn unknown_identifier_matches_nothing() {
        let tasks = fixture();
        assert!(find_match(&tasks, "42").is_none());
        assert!(find_match(&tasks, "no-such-uuid").is_none());
    }

    #[test]
    fn annotation_check_is_exact() {
        let tasks = fixture();
        assert!(has_annotation(&tasks[1], "Note"));
        assert!(!has_annotation(&tasks[1], "note"));
        assert!(!has_annotation(&tasks[0], "Note"));
    }
}
