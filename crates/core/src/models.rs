use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::YardError;

/// 货物类型，决定集装箱可以进入哪类仓库
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    SpareParts,
    Car,
    Liquid,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 3] = [
        ContainerKind::SpareParts,
        ContainerKind::Car,
        ContainerKind::Liquid,
    ];

    /// 配置文件中使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::SpareParts => "spare_parts",
            ContainerKind::Car => "car",
            ContainerKind::Liquid => "liquid",
        }
    }

    /// 仓库内容描述
    pub fn content_type(&self) -> &'static str {
        match self {
            ContainerKind::SpareParts => "spare parts",
            ContainerKind::Car => "cars",
            ContainerKind::Liquid => "liquids",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerKind {
    type Err = YardError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.trim().to_lowercase().as_str() {
            "spare_parts" | "spare parts" => Ok(ContainerKind::SpareParts),
            "car" | "cars" => Ok(ContainerKind::Car),
            "liquid" | "liquids" => Ok(ContainerKind::Liquid),
            _ => Err(YardError::validation_error(format!("未知的货物类型: {kind}"))),
        }
    }
}
