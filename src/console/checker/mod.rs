//! The `check_last_modified` console program.
pub mod app;
pub mod config;
pub mod console;
pub mod logger;
pub mod printer;
pub mod report;
pub mod service;
