use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single to-do item as it appears in the JSON store.
///
/// Serialization derives define the wire shape exactly: `id`, `title`,
/// `completed` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, title: &str) -> Self {
        Task {
            id,
            title: title.to_string(),
            completed: false,
        }
    }

    /// Validates one raw store record into a canonical task.
    ///
    /// Hand-edited files are tolerated on load, so every field is checked
    /// before it is trusted: the record must be an object carrying a
    /// positive integer `id`, a non-empty string `title` and a
    /// boolean-like `completed` (`true`/`false` or the integers `1`/`0`).
    /// Extra fields are ignored. Returns `None` for anything else, which
    /// the loader treats as "discard this record".
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let id = record.get("id")?.as_u64()?;
        if id == 0 {
            return None;
        }
        let title = record.get("title")?.as_str()?.trim();
        if title.is_empty() {
            return None;
        }
        let completed = match record.get("completed")? {
            Value::Bool(flag) => *flag,
            Value::Number(n) => match n.as_i64() {
                Some(0) => false,
                Some(1) => true,
                _ => return None,
            },
            _ => return None,
        };
        Some(Task {
            id,
            title: title.to_string(),
            completed,
        })
    }
}

/// The in-memory task collection, in insertion order.
///
/// Display positions are 1-based indexes into this order and are distinct
/// from task ids. All mutating methods taking a position use the 1-based
/// convention and return `None` when the position is out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn get(&self, pos: usize) -> Option<&Task> {
        self.tasks.get(pos.checked_sub(1)?)
    }

    /// Next available id: one past the current maximum, or 1 when empty.
    ///
    /// Ids only ever grow, so a deleted id is never handed out again as
    /// long as any later task survives.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1)
    }

    /// Appends a new incomplete task and returns its freshly allocated id.
    pub fn add(&mut self, title: &str) -> u64 {
        let id = self.next_id();
        self.tasks.push(Task::new(id, title));
        id
    }

    /// Marks the task at a 1-based position complete. Idempotent: marking
    /// an already-completed task again is not an error.
    pub fn complete(&mut self, pos: usize) -> Option<&Task> {
        let task = self.tasks.get_mut(pos.checked_sub(1)?)?;
        task.completed = true;
        Some(task)
    }

    /// Removes and returns the task at a 1-based position.
    pub fn remove(&mut self, pos: usize) -> Option<Task> {
        let index = pos.checked_sub(1)?;
        if index >= self.tasks.len() {
            return None;
        }
        Some(self.tasks.remove(index))
    }
}
