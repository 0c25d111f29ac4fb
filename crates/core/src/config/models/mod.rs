pub mod app_config;
pub mod yard;

pub use app_config::*;
pub use yard::*;
