pub mod app;
pub mod channel;
pub mod config;
pub mod env_variable_utils;
pub mod error;
pub mod gateway;
pub mod hooks;
pub mod load;
pub mod logging;
pub mod models;
pub mod router;
pub mod search;
pub mod settle;
pub mod transcript;
pub mod trending;
pub mod utils;
pub mod video;
