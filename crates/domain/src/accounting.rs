//! 会计部门：对列车和仓库做只读统计

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::ContainerHolder;
use crate::storage::ContainerStore;
use crate::train::Train;

/// 统计列车或仓库中的集装箱总数
pub fn total_containers<'a, H, I>(holders: I) -> usize
where
    H: ContainerHolder + 'a,
    I: IntoIterator<Item = &'a H>,
{
    holders
        .into_iter()
        .map(|holder| holder.container_count())
        .sum()
}

/// 仓库内全部集装箱的货值总和（最小货币单位）
pub fn total_cost<'a, S, I>(storages: I) -> u64
where
    S: ContainerStore + 'a,
    I: IntoIterator<Item = &'a S>,
{
    storages
        .into_iter()
        .flat_map(|storage| storage.containers())
        .map(|container| container.cost_minor_units())
        .sum()
}

/// 货场汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardSummary {
    pub containers_on_trains: usize,
    pub containers_in_storages: usize,
    pub total_cost_minor_units: u64,
}

pub fn summarize<'a, 'b, S, T, I>(trains: T, storages: I) -> YardSummary
where
    S: ContainerStore + 'b,
    T: IntoIterator<Item = &'a Train>,
    I: IntoIterator<Item = &'b S> + Clone,
{
    YardSummary {
        containers_on_trains: total_containers(trains),
        containers_in_storages: total_containers(storages.clone()),
        total_cost_minor_units: total_cost(storages),
    }
}

impl fmt::Display for YardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    列车上等待的集装箱: {}", self.containers_on_trains)?;
        writeln!(f, "        仓库中的集装箱: {}", self.containers_in_storages)?;
        write!(
            f,
            "          仓库货值总计: {} ({}.{:02})",
            self.total_cost_minor_units,
            self.total_cost_minor_units / 100,
            self.total_cost_minor_units % 100
        )
    }
}
