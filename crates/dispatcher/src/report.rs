use std::fmt;

use serde::Serialize;
use yard_core::YardError;

/// 集装箱留在列车上的原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StrandReason {
    NoFreeWorker,
    NoAvailableStorage,
    Rejected(#[serde(serialize_with = "serialize_error")] YardError),
}

fn serialize_error<S: serde::Serializer>(error: &YardError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl StrandReason {
    /// 指标标签
    pub fn as_label(&self) -> &'static str {
        match self {
            StrandReason::NoFreeWorker => "no_free_worker",
            StrandReason::NoAvailableStorage => "no_available_storage",
            StrandReason::Rejected(_) => "rejected",
        }
    }
}

impl fmt::Display for StrandReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrandReason::NoFreeWorker => f.write_str("没有空闲工人"),
            StrandReason::NoAvailableStorage => f.write_str("没有可用仓库"),
            StrandReason::Rejected(e) => write!(f, "仓库拒收: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrandedContainer {
    pub container_id: String,
    pub reason: StrandReason,
}

/// 单列列车的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainOutcome {
    pub train_id: String,
    /// 按货单顺序
    pub moved: Vec<String>,
    pub stranded: Vec<StrandedContainer>,
}

impl TrainOutcome {
    pub fn new<S: Into<String>>(train_id: S) -> Self {
        Self {
            train_id: train_id.into(),
            moved: Vec::new(),
            stranded: Vec::new(),
        }
    }

    pub fn is_fully_unloaded(&self) -> bool {
        self.stranded.is_empty()
    }
}

/// 一次运行的结果，按处理顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<TrainOutcome>,
}

impl RunReport {
    pub fn record(&mut self, outcome: TrainOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn trains_processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn train_ids(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.train_id.as_str()).collect()
    }

    pub fn containers_moved(&self) -> usize {
        self.outcomes.iter().map(|o| o.moved.len()).sum()
    }

    pub fn containers_stranded(&self) -> usize {
        self.outcomes.iter().map(|o| o.stranded.len()).sum()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "处理列车 {} 列，卸下集装箱 {} 个，滞留 {} 个",
            self.trains_processed(),
            self.containers_moved(),
            self.containers_stranded()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let mut report = RunReport::default();
        let mut first = TrainOutcome::new("1");
        first.moved = vec!["1".to_string(), "2".to_string()];
        first.stranded.push(StrandedContainer {
            container_id: "3".to_string(),
            reason: StrandReason::NoAvailableStorage,
        });
        report.record(first);
        report.record(TrainOutcome::new("2"));

        assert_eq!(report.trains_processed(), 2);
        assert_eq!(report.train_ids(), vec!["1", "2"]);
        assert_eq!(report.containers_moved(), 2);
        assert_eq!(report.containers_stranded(), 1);
        assert!(!report.outcomes[0].is_fully_unloaded());
        assert!(report.outcomes[1].is_fully_unloaded());
        assert!(report.to_string().contains("滞留 1"));
    }

    #[test]
    fn test_reason_labels() {
        assert_eq!(StrandReason::NoFreeWorker.as_label(), "no_free_worker");
        assert_eq!(
            StrandReason::Rejected(YardError::capacity_exceeded("x", 1)).as_label(),
            "rejected"
        );
    }
}
