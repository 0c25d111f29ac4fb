use std::collections::{HashSet, VecDeque};

use metrics::counter;
use tracing::{debug, info, warn};
use yard_core::ContainerKind;
use yard_domain::{
    summarize, Container, ContainerHolder, EventLog, EventSink, Storage, Train, YardEvent,
    YardSummary,
};
use yard_worker::Worker;

use crate::registry::StorageRegistry;
use crate::report::{RunReport, StrandReason, StrandedContainer, TrainOutcome};

/// 控制室状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlRoomState {
    Idle,
    Processing { train_id: String },
    Done,
}

/// 控制室
///
/// 唯一修改工人、仓库和列车的地方。每列列车只处理一遍：
/// 没有匹配到工人或仓库的集装箱留在车上随车离站，不会重新排队。
pub struct ControlRoom<S = EventLog> {
    workers: Vec<Worker>,
    train_queue: VecDeque<Train>,
    storages: StorageRegistry,
    departed: Vec<Train>,
    state: ControlRoomState,
    sink: S,
}

impl ControlRoom<EventLog> {
    pub fn new<W, T, R>(workers: W, trains: T, storages: R) -> Self
    where
        W: IntoIterator<Item = Worker>,
        T: IntoIterator<Item = Train>,
        R: IntoIterator<Item = Storage>,
    {
        Self::with_sink(workers, trains, storages, EventLog::new())
    }
}

impl<S: EventSink> ControlRoom<S> {
    pub fn with_sink<W, T, R>(workers: W, trains: T, storages: R, sink: S) -> Self
    where
        W: IntoIterator<Item = Worker>,
        T: IntoIterator<Item = Train>,
        R: IntoIterator<Item = Storage>,
    {
        Self {
            workers: workers.into_iter().collect(),
            train_queue: trains.into_iter().collect(),
            storages: storages.into_iter().collect(),
            departed: Vec::new(),
            state: ControlRoomState::Idle,
            sink,
        }
    }

    pub fn state(&self) -> &ControlRoomState {
        &self.state
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn storages(&self) -> &StorageRegistry {
        &self.storages
    }

    pub fn queued_trains(&self) -> &VecDeque<Train> {
        &self.train_queue
    }

    /// 已处理过的列车，按离站顺序
    pub fn departed_trains(&self) -> &[Train] {
        &self.departed
    }

    /// 已离站和仍在排队的全部列车
    pub fn trains(&self) -> impl Iterator<Item = &Train> + Clone {
        self.departed.iter().chain(self.train_queue.iter())
    }

    pub fn event_sink(&self) -> &S {
        &self.sink
    }

    pub fn summary(&self) -> YardSummary {
        summarize(self.trains(), self.storages.iter())
    }

    pub fn enqueue(&mut self, train: Train) {
        debug!("列车 {} 加入队列", train.id());
        self.train_queue.push_back(train);
        if self.state == ControlRoomState::Done {
            self.state = ControlRoomState::Idle;
        }
    }

    pub fn dequeue_next_train(&mut self) -> Option<Train> {
        self.train_queue.pop_front()
    }

    /// 按登记顺序找第一个空闲工人
    pub fn find_free_worker(&self) -> Option<&Worker> {
        self.free_worker_index().map(|index| &self.workers[index])
    }

    fn free_worker_index(&self) -> Option<usize> {
        self.workers.iter().position(Worker::is_free)
    }

    pub fn find_available_storage(&self, kind: ContainerKind) -> Option<&Storage> {
        self.storages.find_available(kind)
    }

    /// 处理一列列车并让它离站
    pub fn process_train(&mut self, mut train: Train) -> TrainOutcome {
        self.state = ControlRoomState::Processing {
            train_id: train.id().to_string(),
        };
        train.arrive(&mut self.sink);

        let mut outcome = TrainOutcome::new(train.id());
        let mut moved_ids = HashSet::new();

        for container in train.containers() {
            match self.unload(container) {
                Ok(()) => {
                    counter!("yard_containers_moved_total", "kind" => container.kind().as_str())
                        .increment(1);
                    moved_ids.insert(container.id().to_string());
                    outcome.moved.push(container.id().to_string());
                }
                Err(reason) => {
                    match &reason {
                        StrandReason::Rejected(err) if !err.is_placement_failure() => warn!(
                            "集装箱 {} 被意外拒收，留在列车 {} 上: {}",
                            container.id(),
                            train.id(),
                            err
                        ),
                        _ => debug!(
                            "集装箱 {} 留在列车 {} 上: {}",
                            container.id(),
                            train.id(),
                            reason
                        ),
                    }
                    counter!("yard_containers_stranded_total", "reason" => reason.as_label())
                        .increment(1);
                    self.sink.record(YardEvent::container_stranded(
                        train.id(),
                        container.id(),
                        reason.to_string(),
                    ));
                    outcome.stranded.push(StrandedContainer {
                        container_id: container.id().to_string(),
                        reason,
                    });
                }
            }
        }

        train.remove_containers(&moved_ids);
        train.depart(&mut self.sink);
        counter!("yard_trains_processed_total").increment(1);

        self.departed.push(train);
        self.state = ControlRoomState::Idle;
        outcome
    }

    fn unload(&mut self, container: &Container) -> Result<(), StrandReason> {
        let index = self.free_worker_index().ok_or(StrandReason::NoFreeWorker)?;
        let worker = &mut self.workers[index];
        let storage = self
            .storages
            .find_available_mut(container.kind())
            .ok_or(StrandReason::NoAvailableStorage)?;

        worker
            .move_container(container.clone(), storage, &mut self.sink)
            .map_err(StrandReason::Rejected)
    }

    /// 依次处理队列中的全部列车，直到队列为空
    pub fn run(&mut self) -> RunReport {
        let queued = self.train_queue.len();
        info!("控制室开始工作，队列中有 {} 列列车", queued);
        self.sink.record(YardEvent::run_started(queued));

        let mut report = RunReport::default();
        while let Some(train) = self.dequeue_next_train() {
            let outcome = self.process_train(train);
            report.record(outcome);
        }

        self.state = ControlRoomState::Done;
        self.sink
            .record(YardEvent::run_finished(report.trains_processed()));
        info!("控制室停止工作: {}", report);
        report
    }
}
