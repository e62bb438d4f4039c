//! # Tama - Task Manager
//!
//! An interactive command-line to-do manager that persists tasks as a JSON
//! document on local disk.
//!
//! ## Features
//!
//! - **Task Management**: Add, view, complete, and delete tasks from a menu
//! - **Defensive Loading**: Malformed or hand-edited store files degrade to
//!   a filtered or empty collection instead of crashing
//! - **Crash-Safe Saves**: Every mutation rewrites the store through a
//!   temp-file-plus-atomic-rename sequence
//! - **Stable Identifiers**: Task ids are monotonically increasing and are
//!   never reused, even after deletion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tama::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
