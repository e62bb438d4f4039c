// Task prompts
pub const PROMPT_TASK_TITLE: &str = "Enter task title (or 'q' to cancel)";
pub const PROMPT_COMPLETE_NUMBER: &str = "Enter task number to mark complete (or 'q' to cancel)";
pub const PROMPT_DELETE_NUMBER: &str = "Enter task number to delete (or 'q' to cancel)";

// Menu prompts
pub const PROMPT_MENU_CHOICE: &str = "Enter choice (1-5)";
