pub mod app;
pub mod app_state;
pub mod catalog;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod intake;
pub mod synthetic;
#[cfg(feature = "testing")]
pub mod tests;
pub mod types;
pub mod upload;
pub mod utils;
