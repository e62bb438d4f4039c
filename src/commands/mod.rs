//! Interactive menu loop and command dispatch.
//!
//! The application is a single interactive session: the store is read once
//! at startup, then every menu action mutates the in-memory collection and
//! immediately persists the whole collection back to disk.

pub mod add;
pub mod complete;
pub mod delete;
pub mod view;

use crate::libs::messages::prompts::PROMPT_MENU_CHOICE;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::{msg_error, msg_print};
use anyhow::Result;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

/// One-character sentinel accepted by every selection prompt to abort the
/// current operation without mutating anything.
pub(crate) const CANCEL_SENTINEL: &str = "q";

const MENU: &str = "\
--- Task Manager ---
1. Add Task
2. View Tasks
3. Mark Task Complete
4. Delete Task
5. Exit";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the tasks JSON file (default: tasks.json in the working directory)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum State {
    Running,
    Terminated,
}

impl Cli {
    /// Parses the command line and runs the menu loop until the exit
    /// choice. Invalid menu input re-prompts without changing state.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let storage = Storage::new(cli.file);
        let mut tasks = storage.load();

        let mut state = State::Running;
        while state == State::Running {
            println!("\n{}\n", MENU);
            let choice: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(PROMPT_MENU_CHOICE)
                .allow_empty(true)
                .interact_text()?;

            match choice.trim() {
                "1" => add::cmd(&mut tasks, &storage)?,
                "2" => view::cmd(&tasks),
                "3" => complete::cmd(&mut tasks, &storage)?,
                "4" => delete::cmd(&mut tasks, &storage)?,
                "5" => {
                    msg_print!(Message::Goodbye);
                    state = State::Terminated;
                }
                _ => msg_error!(Message::InvalidMenuChoice),
            }
        }
        Ok(())
    }
}

/// Prompts for a 1-based task position until the input is a number within
/// `1..=len` or the cancel sentinel. Returns `None` on cancel.
pub(crate) fn prompt_position(prompt: &str, len: usize) -> Result<Option<usize>> {
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim();
        if input.eq_ignore_ascii_case(CANCEL_SENTINEL) {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(pos) if (1..=len).contains(&pos) => return Ok(Some(pos)),
            Ok(_) => msg_error!(Message::InvalidTaskNumber(len)),
            Err(_) => msg_error!(Message::InvalidNumberInput),
        }
    }
}
