pub mod action;
pub mod command;
pub mod config;
pub mod features;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod r#loop;
pub mod reducer;
pub mod sink;
pub mod state;
pub mod ui;
