use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;
use yard_core::{TrainConfig, YardError, YardResult};

use crate::entities::{Container, ContainerHolder};
use crate::events::{EventSink, YardEvent};

/// 列车，货单按装车顺序排列
///
/// 货单内集装箱编号唯一；卸货后按编号从货单移除。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrainRecord")]
pub struct Train {
    id: String,
    containers: Vec<Container>,
    #[serde(skip)]
    at_platform: bool,
}

/// 反序列化得到的原始列车数据，经 `Train::new` 校验
#[derive(Deserialize)]
struct TrainRecord {
    id: String,
    #[serde(default)]
    containers: Vec<Container>,
}

impl Train {
    /// 创建列车，货单内集装箱编号重复时拒绝
    pub fn new<S: Into<String>>(id: S, containers: Vec<Container>) -> YardResult<Self> {
        let mut seen = HashSet::with_capacity(containers.len());
        for container in &containers {
            if !seen.insert(container.id()) {
                return Err(YardError::duplicate_container(container.id()));
            }
        }

        Ok(Self {
            id: id.into(),
            containers,
            at_platform: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn is_at_platform(&self) -> bool {
        self.at_platform
    }

    pub fn arrive(&mut self, sink: &mut dyn EventSink) {
        self.at_platform = true;
        info!("列车 {} 已进站，货单 {} 个集装箱", self.id, self.containers.len());
        sink.record(YardEvent::train_arrived(&self.id, self.containers.len()));
    }

    pub fn depart(&mut self, sink: &mut dyn EventSink) {
        self.at_platform = false;
        info!("列车 {} 已离站，剩余 {} 个集装箱", self.id, self.containers.len());
        sink.record(YardEvent::train_departed(&self.id, self.containers.len()));
    }

    /// 按编号移除集装箱，其余保持原顺序，返回移除数量
    pub fn remove_containers(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.containers.len();
        self.containers
            .retain(|container| !ids.contains(container.id()));
        before - self.containers.len()
    }
}

impl ContainerHolder for Train {
    fn containers(&self) -> &[Container] {
        &self.containers
    }
}

impl TryFrom<TrainConfig> for Train {
    type Error = YardError;

    fn try_from(config: TrainConfig) -> YardResult<Self> {
        let containers = config.containers.into_iter().map(Container::from).collect();
        Train::new(config.id, containers)
    }
}

impl TryFrom<TrainRecord> for Train {
    type Error = YardError;

    fn try_from(record: TrainRecord) -> YardResult<Self> {
        Train::new(record.id, record.containers)
    }
}
