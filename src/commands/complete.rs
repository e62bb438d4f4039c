use crate::libs::messages::prompts::PROMPT_COMPLETE_NUMBER;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::task::TaskList;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;

/// Marks a task complete by its displayed position. Re-marking an already
/// completed task is allowed and saves again without complaint.
pub fn cmd(tasks: &mut TaskList, storage: &Storage) -> Result<()> {
    if tasks.is_empty() {
        msg_print!(Message::NoTasksToComplete);
        return Ok(());
    }

    View::tasks(tasks);
    let Some(pos) = super::prompt_position(PROMPT_COMPLETE_NUMBER, tasks.len())? else {
        return Ok(());
    };
    let Some(title) = tasks.complete(pos).map(|task| task.title.clone()) else {
        return Ok(());
    };

    storage.save(tasks)?;
    msg_success!(Message::TaskCompleted(title));
    Ok(())
}
