//! 领域事件
//!
//! 调度过程中发生的事件，按发生顺序交给 [`EventSink`]，用于观察和调试。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use yard_core::ContainerKind;

/// 领域事件基础trait
pub trait DomainEvent {
    fn event_id(&self) -> Uuid;
    fn event_type(&self) -> &str;
    fn occurred_at(&self) -> DateTime<Utc>;
    fn aggregate_id(&self) -> String;
}

/// 货场事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum YardEvent {
    RunStarted {
        id: Uuid,
        queued_trains: usize,
        occurred_at: DateTime<Utc>,
    },
    TrainArrived {
        id: Uuid,
        train_id: String,
        container_count: usize,
        occurred_at: DateTime<Utc>,
    },
    WorkerBusy {
        id: Uuid,
        worker: String,
        occurred_at: DateTime<Utc>,
    },
    ContainerMoved {
        id: Uuid,
        worker: String,
        container_id: String,
        kind: ContainerKind,
        location: String,
        occurred_at: DateTime<Utc>,
    },
    WorkerFree {
        id: Uuid,
        worker: String,
        occurred_at: DateTime<Utc>,
    },
    ContainerStranded {
        id: Uuid,
        train_id: String,
        container_id: String,
        reason: String,
        occurred_at: DateTime<Utc>,
    },
    TrainDeparted {
        id: Uuid,
        train_id: String,
        remaining: usize,
        occurred_at: DateTime<Utc>,
    },
    RunFinished {
        id: Uuid,
        trains_processed: usize,
        occurred_at: DateTime<Utc>,
    },
}

impl YardEvent {
    pub fn run_started(queued_trains: usize) -> Self {
        YardEvent::RunStarted {
            id: Uuid::new_v4(),
            queued_trains,
            occurred_at: Utc::now(),
        }
    }

    pub fn train_arrived(train_id: &str, container_count: usize) -> Self {
        YardEvent::TrainArrived {
            id: Uuid::new_v4(),
            train_id: train_id.to_string(),
            container_count,
            occurred_at: Utc::now(),
        }
    }

    pub fn worker_busy(worker: &str) -> Self {
        YardEvent::WorkerBusy {
            id: Uuid::new_v4(),
            worker: worker.to_string(),
            occurred_at: Utc::now(),
        }
    }

    pub fn container_moved(
        worker: &str,
        container_id: &str,
        kind: ContainerKind,
        location: &str,
    ) -> Self {
        YardEvent::ContainerMoved {
            id: Uuid::new_v4(),
            worker: worker.to_string(),
            container_id: container_id.to_string(),
            kind,
            location: location.to_string(),
            occurred_at: Utc::now(),
        }
    }

    pub fn worker_free(worker: &str) -> Self {
        YardEvent::WorkerFree {
            id: Uuid::new_v4(),
            worker: worker.to_string(),
            occurred_at: Utc::now(),
        }
    }

    pub fn container_stranded(train_id: &str, container_id: &str, reason: String) -> Self {
        YardEvent::ContainerStranded {
            id: Uuid::new_v4(),
            train_id: train_id.to_string(),
            container_id: container_id.to_string(),
            reason,
            occurred_at: Utc::now(),
        }
    }

    pub fn train_departed(train_id: &str, remaining: usize) -> Self {
        YardEvent::TrainDeparted {
            id: Uuid::new_v4(),
            train_id: train_id.to_string(),
            remaining,
            occurred_at: Utc::now(),
        }
    }

    pub fn run_finished(trains_processed: usize) -> Self {
        YardEvent::RunFinished {
            id: Uuid::new_v4(),
            trains_processed,
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for YardEvent {
    fn event_id(&self) -> Uuid {
        match self {
            YardEvent::RunStarted { id, .. } => *id,
            YardEvent::TrainArrived { id, .. } => *id,
            YardEvent::WorkerBusy { id, .. } => *id,
            YardEvent::ContainerMoved { id, .. } => *id,
            YardEvent::WorkerFree { id, .. } => *id,
            YardEvent::ContainerStranded { id, .. } => *id,
            YardEvent::TrainDeparted { id, .. } => *id,
            YardEvent::RunFinished { id, .. } => *id,
        }
    }

    fn event_type(&self) -> &str {
        match self {
            YardEvent::RunStarted { .. } => "RunStarted",
            YardEvent::TrainArrived { .. } => "TrainArrived",
            YardEvent::WorkerBusy { .. } => "WorkerBusy",
            YardEvent::ContainerMoved { .. } => "ContainerMoved",
            YardEvent::WorkerFree { .. } => "WorkerFree",
            YardEvent::ContainerStranded { .. } => "ContainerStranded",
            YardEvent::TrainDeparted { .. } => "TrainDeparted",
            YardEvent::RunFinished { .. } => "RunFinished",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            YardEvent::RunStarted { occurred_at, .. } => *occurred_at,
            YardEvent::TrainArrived { occurred_at, .. } => *occurred_at,
            YardEvent::WorkerBusy { occurred_at, .. } => *occurred_at,
            YardEvent::ContainerMoved { occurred_at, .. } => *occurred_at,
            YardEvent::WorkerFree { occurred_at, .. } => *occurred_at,
            YardEvent::ContainerStranded { occurred_at, .. } => *occurred_at,
            YardEvent::TrainDeparted { occurred_at, .. } => *occurred_at,
            YardEvent::RunFinished { occurred_at, .. } => *occurred_at,
        }
    }

    fn aggregate_id(&self) -> String {
        match self {
            YardEvent::RunStarted { .. } | YardEvent::RunFinished { .. } => {
                "control-room".to_string()
            }
            YardEvent::TrainArrived { train_id, .. } => train_id.clone(),
            YardEvent::TrainDeparted { train_id, .. } => train_id.clone(),
            YardEvent::ContainerStranded { train_id, .. } => train_id.clone(),
            YardEvent::WorkerBusy { worker, .. } => worker.clone(),
            YardEvent::ContainerMoved { worker, .. } => worker.clone(),
            YardEvent::WorkerFree { worker, .. } => worker.clone(),
        }
    }
}

/// 事件接收端
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    fn record(&mut self, event: YardEvent);
}

/// 内存事件日志，按发生顺序保存
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<YardEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[YardEvent] {
        &self.events
    }

    pub fn event_types(&self) -> Vec<&str> {
        self.events.iter().map(|event| event.event_type()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: YardEvent) {
        self.events.push(event);
    }
}

/// 以debug级别输出事件
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: YardEvent) {
        debug!(
            event_type = event.event_type(),
            aggregate_id = %event.aggregate_id(),
            event_id = %event.event_id(),
            "货场事件"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardEvents;

impl EventSink for DiscardEvents {
    fn record(&mut self, _event: YardEvent) {}
}
