pub mod cli;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod github;
pub mod identity;
pub mod models;
pub mod server;
pub mod types;
