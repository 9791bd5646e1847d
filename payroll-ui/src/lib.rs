pub mod app;
pub mod cli;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod models;
pub mod state;
pub mod utils;

pub use cli::Cli;
