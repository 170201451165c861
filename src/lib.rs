// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod help;
pub mod logging;
pub mod model;
pub mod notify;
pub mod screen;
pub mod script;
pub mod system;

#[cfg(feature = "tui")]
pub mod tui;
