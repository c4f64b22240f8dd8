pub mod config;
pub mod driver;
pub mod event;
pub mod results;
pub mod run_controller;
pub mod scheduler;
pub mod server;
pub mod waiting_line;
