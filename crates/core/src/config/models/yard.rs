use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::ContainerKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    pub name: String,
    #[serde(default)]
    pub busy: bool,
}

impl WorkerConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow::anyhow!("工人名称不能为空"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub location: String,
    pub kind: ContainerKind,
    pub max_capacity: usize,
}

impl StorageConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.location.trim().is_empty() {
            return Err(anyhow::anyhow!("仓库地址不能为空"));
        }

        if self.max_capacity == 0 {
            return Err(anyhow::anyhow!(
                "仓库最大容量必须大于0: {}",
                self.location
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub id: String,
    pub cost_minor_units: u64,
    #[serde(default)]
    pub description: String,
    pub kind: ContainerKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub id: String,
    #[serde(default)]
    pub containers: Vec<ContainerConfig>,
}

/// 货场布局：工人、仓库以及按到站顺序排列的列车
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardConfig {
    #[serde(default)]
    pub workers: Vec<WorkerConfig>,
    #[serde(default)]
    pub storages: Vec<StorageConfig>,
    #[serde(default)]
    pub trains: Vec<TrainConfig>,
}

impl YardConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        for worker in &self.workers {
            worker.validate()?;
        }

        for storage in &self.storages {
            storage.validate()?;
        }

        let mut seen = HashSet::new();
        for train in &self.trains {
            if train.id.trim().is_empty() {
                return Err(anyhow::anyhow!("列车编号不能为空"));
            }
            for container in &train.containers {
                if container.id.trim().is_empty() {
                    return Err(anyhow::anyhow!("列车 {} 上存在空的集装箱编号", train.id));
                }
                if !seen.insert(container.id.as_str()) {
                    return Err(anyhow::anyhow!(
                        "集装箱编号重复: {} (列车 {})",
                        container.id,
                        train.id
                    ));
                }
            }
        }

        Ok(())
    }

    pub fn container_count(&self) -> usize {
        self.trains.iter().map(|train| train.containers.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(id: &str, kind: ContainerKind) -> ContainerConfig {
        ContainerConfig {
            id: id.to_string(),
            cost_minor_units: 10,
            description: "Oil".to_string(),
            kind,
        }
    }

    fn yard() -> YardConfig {
        YardConfig {
            workers: vec![WorkerConfig {
                name: "Alice".to_string(),
                busy: false,
            }],
            storages: vec![StorageConfig {
                location: "101 Liquids Street, UK".to_string(),
                kind: ContainerKind::Liquid,
                max_capacity: 1,
            }],
            trains: vec![
                TrainConfig {
                    id: "1".to_string(),
                    containers: vec![container("1", ContainerKind::Liquid)],
                },
                TrainConfig {
                    id: "2".to_string(),
                    containers: vec![container("2", ContainerKind::Liquid)],
                },
            ],
        }
    }

    #[test]
    fn test_valid_yard() {
        let yard = yard();
        assert!(yard.validate().is_ok());
        assert_eq!(yard.container_count(), 2);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut yard = yard();
        yard.storages[0].max_capacity = 0;
        let err = yard.validate().unwrap_err();
        assert!(err.to_string().contains("最大容量"));
    }

    #[test]
    fn test_duplicate_container_ids_across_trains_rejected() {
        let mut yard = yard();
        yard.trains[1].containers[0].id = "1".to_string();
        let err = yard.validate().unwrap_err();
        assert!(err.to_string().contains("重复"));
    }

    #[test]
    fn test_empty_worker_name_rejected() {
        let mut yard = yard();
        yard.workers[0].name = "  ".to_string();
        assert!(yard.validate().is_err());
    }
}
