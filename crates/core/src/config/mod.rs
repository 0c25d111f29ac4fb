//! 货场配置
//!
//! - **models**: 配置数据模型（日志、场景、货场布局）
//!
//! 配置来源按优先级从低到高：内置默认值、TOML配置文件、`YARD__` 前缀的环境变量。

pub mod models;

pub use models::app_config::{AppConfig, ScenarioConfig};
pub use models::yard::{ContainerConfig, StorageConfig, TrainConfig, WorkerConfig, YardConfig};
