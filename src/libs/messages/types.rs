#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(String),
    TaskDeleted,
    TaskDeletionCancelled,
    NoTasks,
    NoTasksToComplete,
    NoTasksToDelete,
    TasksSummary(usize, usize), // completed, total
    ConfirmDeleteTask(String),

    // === INPUT MESSAGES ===
    EmptyTaskTitle,
    InvalidTaskNumber(usize), // upper bound of the valid range
    InvalidNumberInput,
    InvalidMenuChoice,

    // === STORE MESSAGES ===
    StoreFileEmpty(String),        // path
    StoreFileCorrupt(String),      // path
    StoreFileNotAList(String),     // path
    StoreReadFailed(String, String), // path, error
    RecordsSkipped(usize, String), // count, path

    // === SESSION MESSAGES ===
    Goodbye,
}
