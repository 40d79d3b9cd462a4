pub mod app_config;
pub mod database_config;
pub mod error;
pub mod server_config;
