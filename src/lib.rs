pub mod app;
pub mod backend;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod extension;
pub mod input;
pub mod logging;
pub mod notify;
pub mod palette;
pub mod profile;
pub mod ui;
