use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use yard_core::{WorkerConfig, YardError, YardResult};
use yard_domain::{Container, ContainerStore, EventSink, YardEvent};

/// 工人状态
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    #[default]
    Free,
    Busy,
}

/// 装卸工人，一次只搬运一个集装箱
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    name: String,
    status: WorkerStatus,
}

impl Worker {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_status(name, WorkerStatus::Free)
    }

    pub fn with_status<S: Into<String>>(name: S, status: WorkerStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> WorkerStatus {
        self.status
    }

    pub fn is_free(&self) -> bool {
        self.status == WorkerStatus::Free
    }

    fn set_status(&mut self, status: WorkerStatus, sink: &mut dyn EventSink) {
        self.status = status;
        match status {
            WorkerStatus::Busy => {
                info!("工人 {} 忙碌", self.name);
                sink.record(YardEvent::worker_busy(&self.name));
            }
            WorkerStatus::Free => {
                info!("工人 {} 空闲", self.name);
                sink.record(YardEvent::worker_free(&self.name));
            }
        }
    }

    /// 把集装箱搬进目标仓库
    ///
    /// 搬运期间工人处于忙碌状态；无论仓库是否接收，结束后都恢复空闲，并原样返回仓库的结果。
    pub fn move_container<S>(
        &mut self,
        container: Container,
        destination: &mut S,
        sink: &mut dyn EventSink,
    ) -> YardResult<()>
    where
        S: ContainerStore + ?Sized,
    {
        if !self.is_free() {
            warn!("工人 {} 正忙，无法搬运集装箱 {}", self.name, container.id());
            return Err(YardError::worker_busy(&self.name));
        }

        self.set_status(WorkerStatus::Busy, sink);

        let container_id = container.id().to_string();
        let kind = container.kind();
        let result = destination.add(container);

        match &result {
            Ok(()) => {
                info!(
                    "工人 {} 将集装箱 {} 搬运到 {}",
                    self.name,
                    container_id,
                    destination.location()
                );
                sink.record(YardEvent::container_moved(
                    &self.name,
                    &container_id,
                    kind,
                    destination.location(),
                ));
            }
            Err(e) => {
                warn!(
                    "工人 {} 搬运集装箱 {} 到 {} 失败: {}",
                    self.name,
                    container_id,
                    destination.location(),
                    e
                );
            }
        }

        self.set_status(WorkerStatus::Free, sink);
        result
    }
}

impl From<WorkerConfig> for Worker {
    fn from(config: WorkerConfig) -> Self {
        let status = if config.busy {
            WorkerStatus::Busy
        } else {
            WorkerStatus::Free
        };
        Worker::with_status(config.name, status)
    }
}
