use super::task::TaskList;
use crate::libs::messages::Message;
use crate::msg_print;

pub struct View {}

impl View {
    /// Prints the summary line and one numbered checkbox line per task.
    /// Pure read; an empty collection gets its own message instead of an
    /// empty summary.
    pub fn tasks(tasks: &TaskList) {
        if tasks.is_empty() {
            msg_print!(Message::NoTasks, true);
            return;
        }

        println!();
        msg_print!(Message::TasksSummary(tasks.completed_count(), tasks.len()));
        for (index, task) in tasks.tasks().iter().enumerate() {
            let checkbox = if task.completed { "[x]" } else { "[ ]" };
            println!("{}. {} {}", index + 1, checkbox, task.title);
        }
        println!();
    }
}
