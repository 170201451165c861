// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod list;
pub mod notice;

pub use item::{Entry, EntryId, ListKind};
pub use list::EntryList;
pub use notice::{Notice, Severity};
