use thiserror::Error;

use crate::models::ContainerKind;

/// 货场错误类型定义
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YardError {
    #[error("货物类型不匹配: 仓库 {location} 只接收 {expected}，集装箱类型为 {actual}")]
    KindMismatch {
        location: String,
        expected: ContainerKind,
        actual: ContainerKind,
    },

    #[error("仓库容量已满: {location} (最大容量 {max_capacity})")]
    CapacityExceeded {
        location: String,
        max_capacity: usize,
    },

    #[error("工人正忙: {name}")]
    WorkerBusy { name: String },

    #[error("集装箱编号重复: {id}")]
    DuplicateContainer { id: String },

    #[error("数据验证失败: {0}")]
    Validation(String),

    #[error("配置错误: {0}")]
    Configuration(String),
}

/// 统一的Result类型
pub type YardResult<T> = std::result::Result<T, YardError>;

impl YardError {
    pub fn kind_mismatch<S: Into<String>>(
        location: S,
        expected: ContainerKind,
        actual: ContainerKind,
    ) -> Self {
        Self::KindMismatch {
            location: location.into(),
            expected,
            actual,
        }
    }

    pub fn capacity_exceeded<S: Into<String>>(location: S, max_capacity: usize) -> Self {
        Self::CapacityExceeded {
            location: location.into(),
            max_capacity,
        }
    }

    pub fn worker_busy<S: Into<String>>(name: S) -> Self {
        Self::WorkerBusy { name: name.into() }
    }

    pub fn duplicate_container<S: Into<String>>(id: S) -> Self {
        Self::DuplicateContainer { id: id.into() }
    }

    pub fn validation_error<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// 仓库拒收导致的失败（集装箱留在列车上，不影响调度继续）
    pub fn is_placement_failure(&self) -> bool {
        matches!(
            self,
            YardError::KindMismatch { .. }
                | YardError::CapacityExceeded { .. }
                | YardError::WorkerBusy { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_failures() {
        assert!(YardError::capacity_exceeded("101 Liquids Street, UK", 1).is_placement_failure());
        assert!(YardError::kind_mismatch("x", ContainerKind::Car, ContainerKind::Liquid)
            .is_placement_failure());
        assert!(YardError::worker_busy("Alice").is_placement_failure());
        assert!(!YardError::validation_error("bad").is_placement_failure());
        assert!(!YardError::config_error("bad").is_placement_failure());
    }

    #[test]
    fn test_error_messages() {
        let err = YardError::kind_mismatch(
            "201 Cars Street, UK",
            ContainerKind::Car,
            ContainerKind::Liquid,
        );
        let msg = err.to_string();
        assert!(msg.contains("201 Cars Street, UK"));
        assert!(msg.contains("car"));
        assert!(msg.contains("liquid"));

        let err = YardError::capacity_exceeded("101 Liquids Street, UK", 3);
        assert!(err.to_string().contains('3'));
    }
}
