use serde::{Deserialize, Serialize};
use tracing::debug;
use yard_core::{ContainerKind, StorageConfig, YardError, YardResult};

use crate::entities::{Container, ContainerHolder};

/// 仓库能力
///
/// 所有仓库行为一致，只在接收的货物类型上不同。
pub trait ContainerStore: ContainerHolder {
    fn location(&self) -> &str;

    fn content_kind(&self) -> ContainerKind;

    fn max_capacity(&self) -> usize;

    /// 放入集装箱，类型不符或已满时拒收
    fn add(&mut self, container: Container) -> YardResult<()>;

    fn capacity_remaining(&self) -> usize {
        self.max_capacity().saturating_sub(self.container_count())
    }

    fn is_full(&self) -> bool {
        self.capacity_remaining() == 0
    }

    fn content_type(&self) -> &'static str {
        self.content_kind().content_type()
    }
}

/// 按货物类型参数化的仓库
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StorageRecord")]
pub struct Storage {
    location: String,
    content_kind: ContainerKind,
    max_capacity: usize,
    containers: Vec<Container>,
}

impl Storage {
    pub fn new<S: Into<String>>(
        location: S,
        content_kind: ContainerKind,
        max_capacity: usize,
    ) -> YardResult<Self> {
        let location = location.into();
        if max_capacity == 0 {
            return Err(YardError::validation_error(format!(
                "仓库最大容量必须大于0: {location}"
            )));
        }

        Ok(Self {
            location,
            content_kind,
            max_capacity,
            containers: Vec::with_capacity(max_capacity),
        })
    }
}

/// 反序列化得到的原始仓库数据，逐个经 `add` 放回以保证容量和类型约束
#[derive(Deserialize)]
struct StorageRecord {
    location: String,
    content_kind: ContainerKind,
    max_capacity: usize,
    #[serde(default)]
    containers: Vec<Container>,
}

impl TryFrom<StorageRecord> for Storage {
    type Error = YardError;

    fn try_from(record: StorageRecord) -> YardResult<Self> {
        let mut storage = Storage::new(record.location, record.content_kind, record.max_capacity)?;
        for container in record.containers {
            storage.add(container)?;
        }
        Ok(storage)
    }
}

impl ContainerHolder for Storage {
    fn containers(&self) -> &[Container] {
        &self.containers
    }
}

impl ContainerStore for Storage {
    fn location(&self) -> &str {
        &self.location
    }

    fn content_kind(&self) -> ContainerKind {
        self.content_kind
    }

    fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    fn add(&mut self, container: Container) -> YardResult<()> {
        if container.kind() != self.content_kind {
            return Err(YardError::kind_mismatch(
                &self.location,
                self.content_kind,
                container.kind(),
            ));
        }

        if self.is_full() {
            return Err(YardError::capacity_exceeded(
                &self.location,
                self.max_capacity,
            ));
        }

        debug!(
            "仓库 {} 接收集装箱 {} ({}/{})",
            self.location,
            container.id(),
            self.containers.len() + 1,
            self.max_capacity
        );
        self.containers.push(container);
        Ok(())
    }
}

impl TryFrom<StorageConfig> for Storage {
    type Error = YardError;

    fn try_from(config: StorageConfig) -> YardResult<Self> {
        Storage::new(config.location, config.kind, config.max_capacity)
    }
}
