use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::logging::log_level::LogLevel;

/// Output format for log lines
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = crate::errors::YardError;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(crate::errors::YardError::config_error(format!(
                "不支持的日志格式: {format}"
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum log level to display
    #[serde(default)]
    pub level: LogLevel,
    /// Output format for logs
    #[serde(default)]
    pub format: LogFormat,
}

impl LogConfig {
    /// 是否输出debug及以下级别
    pub fn is_verbose(&self) -> bool {
        self.level <= LogLevel::Debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_and_format() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_defaults_and_verbosity() {
        let config = LogConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.is_verbose());

        let config = LogConfig {
            level: LogLevel::Debug,
            format: LogFormat::Json,
        };
        assert!(config.is_verbose());
    }

    #[test]
    fn test_invalid_format_is_configuration_error() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(matches!(err, crate::errors::YardError::Configuration(_)));
        assert!(err.to_string().contains("xml"));
    }
}
