use crate::libs::messages::prompts::PROMPT_DELETE_NUMBER;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::task::TaskList;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Deletes a task by its displayed position after an explicit
/// confirmation. The confirmation defaults to "no"; anything but an
/// affirmative answer leaves the collection unchanged.
pub fn cmd(tasks: &mut TaskList, storage: &Storage) -> Result<()> {
    if tasks.is_empty() {
        msg_print!(Message::NoTasksToDelete);
        return Ok(());
    }

    View::tasks(tasks);
    let Some(pos) = super::prompt_position(PROMPT_DELETE_NUMBER, tasks.len())? else {
        return Ok(());
    };
    let Some(title) = tasks.get(pos).map(|task| task.title.clone()) else {
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(title).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_print!(Message::TaskDeletionCancelled);
        return Ok(());
    }

    tasks.remove(pos);
    storage.save(tasks)?;
    msg_success!(Message::TaskDeleted);
    Ok(())
}
