//! Core library modules for the tama application.
//!
//! ## Components
//!
//! - **Data Model**: Task entity and the in-memory collection
//! - **Persistence**: Defensive loading and atomic saving of the JSON store
//! - **User Interface**: Console rendering and centralized messaging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tama::libs::storage::Storage;
//!
//! let storage = Storage::new(None);
//! let mut tasks = storage.load();
//! tasks.add("Buy milk");
//! storage.save(&tasks)?;
//! # Ok::<(), tama::libs::storage::StorageError>(())
//! ```

pub mod messages;
pub mod storage;
pub mod task;
pub mod view;
