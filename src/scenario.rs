//! 场景构建
//!
//! 内置示例货场：九个仓库（每类三个，容量 1/3/5）、三列各装九个集装箱的列车、三名工人。

use rand::seq::SliceRandom;
use rand::Rng;
use yard_core::{ContainerKind, YardConfig, YardResult};
use yard_dispatcher::ControlRoom;
use yard_domain::{Container, EventLog, EventSink, Storage, Train};
use yard_worker::Worker;

const SAMPLE_TRAINS: u32 = 3;

/// 一次模拟所需的工人、仓库和列车（按到站顺序）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub workers: Vec<Worker>,
    pub storages: Vec<Storage>,
    pub trains: Vec<Train>,
}

impl Scenario {
    pub fn sample() -> YardResult<Self> {
        Ok(Self {
            workers: sample_workers(),
            storages: sample_storages()?,
            trains: (1..=SAMPLE_TRAINS)
                .map(|n| Train::new(n.to_string(), sample_manifest(n)))
                .collect::<YardResult<Vec<_>>>()?,
        })
    }

    /// 打乱仓库登记顺序和每列列车的货单
    pub fn sample_shuffled<R: Rng + ?Sized>(rng: &mut R) -> YardResult<Self> {
        let mut storages = sample_storages()?;
        storages.shuffle(rng);

        let trains = (1..=SAMPLE_TRAINS)
            .map(|n| {
                let mut manifest = sample_manifest(n);
                manifest.shuffle(rng);
                Train::new(n.to_string(), manifest)
            })
            .collect::<YardResult<Vec<_>>>()?;

        Ok(Self {
            workers: sample_workers(),
            storages,
            trains,
        })
    }

    pub fn from_yard_config(config: YardConfig) -> YardResult<Self> {
        let storages = config
            .storages
            .into_iter()
            .map(Storage::try_from)
            .collect::<YardResult<Vec<_>>>()?;
        let trains = config
            .trains
            .into_iter()
            .map(Train::try_from)
            .collect::<YardResult<Vec<_>>>()?;

        Ok(Self {
            workers: config.workers.into_iter().map(Worker::from).collect(),
            storages,
            trains,
        })
    }

    pub fn into_control_room(self) -> ControlRoom {
        self.into_control_room_with_sink(EventLog::new())
    }

    pub fn into_control_room_with_sink<S: EventSink>(self, sink: S) -> ControlRoom<S> {
        ControlRoom::with_sink(self.workers, self.trains, self.storages, sink)
    }
}

fn sample_workers() -> Vec<Worker> {
    ["Alice", "Bob", "Carol"].into_iter().map(Worker::new).collect()
}

fn sample_storages() -> YardResult<Vec<Storage>> {
    let streets = [
        (ContainerKind::Liquid, 100, "Liquids Street"),
        (ContainerKind::Car, 200, "Cars Street"),
        (ContainerKind::SpareParts, 300, "Spare Parts Street"),
    ];

    let mut storages = Vec::with_capacity(9);
    for (kind, base, street) in streets {
        for (offset, capacity) in [(1, 1), (2, 3), (3, 5)] {
            storages.push(Storage::new(
                format!("{} {street}, UK", base + offset),
                kind,
                capacity,
            )?);
        }
    }
    Ok(storages)
}

/// 第 n 列列车的货单，集装箱编号从 9(n-1)+1 开始连续编号
fn sample_manifest(n: u32) -> Vec<Container> {
    let base = (n - 1) * 9;
    let id = |offset: u32| (base + offset).to_string();

    vec![
        Container::car(id(1), 1, "BMW cars"),
        Container::car(id(2), 1, "Audi cars"),
        Container::car(id(3), 1, "Mercedes cars"),
        Container::liquid(id(4), 10, "Oil"),
        Container::liquid(id(5), 10, "Diesel"),
        Container::liquid(id(6), 10, "Petrol"),
        Container::spare_parts(id(7), 100, "Spare parts for BMW"),
        Container::spare_parts(id(8), 100, "Spare parts for Audi"),
        Container::spare_parts(id(9), 100, "Spare parts for Mercedes"),
    ]
}
