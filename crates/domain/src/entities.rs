use serde::{Deserialize, Serialize};
use yard_core::{ContainerConfig, ContainerKind};

/// 集装箱
///
/// 创建后不可变；同一时刻只属于一列列车或一个仓库。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    id: String,
    cost_minor_units: u64,
    description: String,
    kind: ContainerKind,
}

impl Container {
    pub fn new<I, D>(id: I, cost_minor_units: u64, description: D, kind: ContainerKind) -> Self
    where
        I: Into<String>,
        D: Into<String>,
    {
        Self {
            id: id.into(),
            cost_minor_units,
            description: description.into(),
            kind,
        }
    }

    pub fn spare_parts<I: Into<String>, D: Into<String>>(id: I, cost: u64, description: D) -> Self {
        Self::new(id, cost, description, ContainerKind::SpareParts)
    }

    pub fn car<I: Into<String>, D: Into<String>>(id: I, cost: u64, description: D) -> Self {
        Self::new(id, cost, description, ContainerKind::Car)
    }

    pub fn liquid<I: Into<String>, D: Into<String>>(id: I, cost: u64, description: D) -> Self {
        Self::new(id, cost, description, ContainerKind::Liquid)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 货值（最小货币单位，如美分）
    pub fn cost_minor_units(&self) -> u64 {
        self.cost_minor_units
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }
}

impl From<ContainerConfig> for Container {
    fn from(config: ContainerConfig) -> Self {
        Self::new(
            config.id,
            config.cost_minor_units,
            config.description,
            config.kind,
        )
    }
}

/// 持有集装箱的对象（列车或仓库）
pub trait ContainerHolder {
    /// 按装入顺序排列的集装箱
    fn containers(&self) -> &[Container];

    fn container_count(&self) -> usize {
        self.containers().len()
    }
}
