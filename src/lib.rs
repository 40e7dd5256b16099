pub mod config;
pub mod event;
pub mod format;
pub mod shell;
pub mod system;
