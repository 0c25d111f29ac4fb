pub mod config;
pub mod errors;
pub mod logging;
pub mod models;

pub use config::{
    AppConfig, ContainerConfig, ScenarioConfig, StorageConfig, TrainConfig, WorkerConfig,
    YardConfig,
};
pub use errors::*;
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use models::ContainerKind;
