use anyhow::Result;
use std::process;

use crate::config::Config;
use crate::feedback::Feedback;
use crate::notes;
use crate::task::TaskStore;

use super::args::Cli;

/// Resolve configuration, look the task up, open its note in the editor
/// and make sure the task carries the note annotation.
///
/// Steps run strictly in order and the first failure ends the run: a task
/// that cannot be found means no file is touched and no annotation is
/// added.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.to_patch())?;
    let feedback = Feedback::new(config.notes_quiet);

    let store = TaskStore::new(&config.task_rc, &config.task_data);
    let task = match store.find(&config.task_id) {
        Ok(task) => task,
        Err(err) => {
            feedback.error(&format!("{err:#}"));
            process::exit(1);
        }
    };

    let note = notes::note_path(&task.uuid, &config.notes_dir, &config.notes_ext);
    notes::open_editor(&note, &config.notes_editor, &feedback)?;

    store.ensure_annotation(&task, &config.notes_annot, &feedback)
}
