use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use yard_core::AppConfig;
use yard_dispatcher::{ControlRoom, RunReport};
use yard_domain::{DiscardEvents, EventSink, TracingSink, YardSummary};

use crate::scenario::Scenario;

/// 一次模拟的结果
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub before: YardSummary,
    pub after: YardSummary,
    pub report: RunReport,
}

/// 主应用程序
pub struct Application {
    config: AppConfig,
}

impl Application {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 使用配置中的货场，未配置时使用示例货场
    pub fn build_scenario(&self) -> Result<Scenario> {
        if let Some(yard) = &self.config.yard {
            info!(
                "使用配置的货场: {} 名工人, {} 个仓库, {} 列列车",
                yard.workers.len(),
                yard.storages.len(),
                yard.trains.len()
            );
            return Scenario::from_yard_config(yard.clone()).context("构建货场失败");
        }

        if !self.config.scenario.shuffle {
            info!("使用示例货场（不打乱）");
            return Scenario::sample().context("构建示例货场失败");
        }

        let seed = self.config.scenario.seed.unwrap_or_else(rand::random);
        info!("使用示例货场，随机种子: {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        Scenario::sample_shuffled(&mut rng).context("构建示例货场失败")
    }

    /// 运行模拟；只有在debug及以下级别时才逐条输出货场事件
    pub fn run(&self) -> Result<SimulationResult> {
        let scenario = self.build_scenario()?;
        if self.config.logging.is_verbose() {
            self.simulate(scenario.into_control_room_with_sink(TracingSink))
        } else {
            self.simulate(scenario.into_control_room_with_sink(DiscardEvents))
        }
    }

    fn simulate<S: EventSink>(&self, mut control_room: ControlRoom<S>) -> Result<SimulationResult> {
        let before = control_room.summary();
        info!("初始状态:\n{}", before);

        let report = control_room.run();

        let after = control_room.summary();
        info!("最终状态:\n{}", after);
        info!("{}", report);
        debug!(
            "运行报告: {}",
            serde_json::to_string(&report).context("序列化运行报告失败")?
        );

        Ok(SimulationResult {
            before,
            after,
            report,
        })
    }
}
