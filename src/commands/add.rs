use super::CANCEL_SENTINEL;
use crate::libs::messages::prompts::PROMPT_TASK_TITLE;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::task::TaskList;
use crate::{msg_error, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Prompts for a title and appends a new incomplete task. Empty or
/// whitespace-only input re-prompts; the cancel sentinel aborts without
/// mutation.
pub fn cmd(tasks: &mut TaskList, storage: &Storage) -> Result<()> {
    let title = loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT_TASK_TITLE)
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim().to_string();
        if input.eq_ignore_ascii_case(CANCEL_SENTINEL) {
            return Ok(());
        }
        if input.is_empty() {
            msg_error!(Message::EmptyTaskTitle);
            continue;
        }
        break input;
    };

    tasks.add(&title);
    storage.save(tasks)?;
    msg_success!(Message::TaskAdded(title));
    Ok(())
}
