//! Display implementation for tama application messages.
//!
//! Single source of truth for all user-facing text. Converting structured
//! `Message` variants here keeps wording consistent and parameter
//! interpolation type-safe across the application.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task added: '{}'", title),
            Message::TaskCompleted(title) => format!("Task marked complete: '{}'", title),
            Message::TaskDeleted => "Task deleted".to_string(),
            Message::TaskDeletionCancelled => "Deletion cancelled".to_string(),
            Message::NoTasks => "No tasks yet!".to_string(),
            Message::NoTasksToComplete => "No tasks to complete".to_string(),
            Message::NoTasksToDelete => "No tasks to delete".to_string(),
            Message::TasksSummary(completed, total) => {
                format!("Tasks ({} of {} completed):", completed, total)
            }
            Message::ConfirmDeleteTask(title) => format!("Delete '{}'?", title),

            // === INPUT MESSAGES ===
            Message::EmptyTaskTitle => "Task title cannot be empty. Please try again".to_string(),
            Message::InvalidTaskNumber(max) => format!("Invalid task number. Please enter 1-{}", max),
            Message::InvalidNumberInput => "Invalid input. Please enter a number or 'q'".to_string(),
            Message::InvalidMenuChoice => "Invalid choice. Please enter 1-5".to_string(),

            // === STORE MESSAGES ===
            Message::StoreFileEmpty(path) => format!("{} is empty. Starting fresh", path),
            Message::StoreFileCorrupt(path) => format!("{} is corrupt. Starting fresh", path),
            Message::StoreFileNotAList(path) => {
                format!("{} is invalid (not a list). Starting fresh", path)
            }
            Message::StoreReadFailed(path, err) => {
                format!("Error loading tasks from {}: {}. Starting fresh", path, err)
            }
            Message::RecordsSkipped(count, path) => {
                format!("Skipped {} malformed record(s) in {}", count, path)
            }

            // === SESSION MESSAGES ===
            Message::Goodbye => "Goodbye!".to_string(),
        };
        write!(f, "{}", message)
    }
}
