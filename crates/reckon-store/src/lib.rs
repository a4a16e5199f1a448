//! Reckon Store - persistence layer for the calculator history
//!
//! Provides:
//! - SQLite connection management
//! - An embedded, ordered migration runner
//! - The history repository backing the calculator's HistoryStore
//!   collaborator (load once at startup, replace-all save after each
//!   successful calculation and after clearing)

pub mod db;
pub mod errors;
pub mod history;
pub mod migrations;

// Re-export key types
pub use errors::Result;
pub use history::HistoryRepo;
