pub mod cli;
pub mod config;
pub mod extensions;
pub mod logging;
pub mod render;
pub mod ui;
