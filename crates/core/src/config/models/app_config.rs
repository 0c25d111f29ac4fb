use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::yard::YardConfig;
use crate::logging::LogConfig;

/// 示例货场的生成方式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// 是否打乱仓库顺序和列车货单
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
    /// 固定随机种子，便于复现
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_shuffle() -> bool {
    true
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            shuffle: default_shuffle(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LogConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
    /// 未配置时使用内置示例货场
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yard: Option<YardConfig>,
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("配置文件不存在: {}", path));
            }
        } else {
            let default_paths = ["config/yard.toml", "yard.toml"];

            let mut config_file_found = false;
            for path in &default_paths {
                if Path::new(path).exists() {
                    builder = builder.add_source(File::new(path, FileFormat::Toml));
                    config_file_found = true;
                    break;
                }
            }

            if !config_file_found {
                builder = builder
                    .set_default("logging.level", "info")?
                    .set_default("logging.format", "pretty")?
                    .set_default("scenario.shuffle", true)?;
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("YARD")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("构建配置失败")?
            .try_deserialize()
            .context("反序列化配置失败")?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("解析TOML配置失败")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("序列化配置为TOML失败")
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(yard) = &self.yard {
            yard.validate().context("货场配置无效")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::logging::{LogFormat, LogLevel};
    use crate::models::ContainerKind;

    const SCENARIO: &str = r#"
[logging]
level = "debug"
format = "json"

[scenario]
shuffle = false
seed = 7

[[yard.workers]]
name = "Alice"

[[yard.workers]]
name = "Bob"
busy = true

[[yard.storages]]
location = "101 Liquids Street, UK"
kind = "liquid"
max_capacity = 1

[[yard.storages]]
location = "201 Cars Street, UK"
kind = "car"
max_capacity = 3

[[yard.trains]]
id = "1"

[[yard.trains.containers]]
id = "1"
cost_minor_units = 1
description = "BMW cars"
kind = "car"

[[yard.trains.containers]]
id = "4"
cost_minor_units = 10
description = "Oil"
kind = "liquid"
"#;

    #[test]
    fn test_from_toml() {
        let config = AppConfig::from_toml(SCENARIO).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.scenario.shuffle);
        assert_eq!(config.scenario.seed, Some(7));

        let yard = config.yard.unwrap();
        assert_eq!(yard.workers.len(), 2);
        assert!(yard.workers[1].busy);
        assert_eq!(yard.storages[1].kind, ContainerKind::Car);
        assert_eq!(yard.trains[0].containers.len(), 2);
        assert_eq!(yard.trains[0].containers[1].kind, ContainerKind::Liquid);
    }

    #[test]
    fn test_defaults_without_yard() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.scenario.shuffle);
        assert!(config.yard.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SCENARIO.as_bytes()).unwrap();

        let config = AppConfig::load(file.path().to_str()).unwrap();
        let yard = config.yard.unwrap();
        assert_eq!(yard.storages.len(), 2);
        assert_eq!(yard.storages[0].max_capacity, 1);
        assert_eq!(yard.container_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Some("/nonexistent/yard.toml")).unwrap_err();
        assert!(err.to_string().contains("配置文件不存在"));
    }

    #[test]
    fn test_invalid_yard_rejected() {
        let invalid = SCENARIO.replace("max_capacity = 1", "max_capacity = 0");
        assert!(AppConfig::from_toml(&invalid).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::from_toml(SCENARIO).unwrap();
        let serialized = config.to_toml().unwrap();
        let reparsed = AppConfig::from_toml(&serialized).unwrap();
        assert_eq!(config, reparsed);
    }
}
