pub mod commands;
pub mod dir_watcher;
pub mod render;
