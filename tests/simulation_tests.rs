//! 端到端模拟测试：示例货场与配置货场

use std::io::Write;

use freight_yard::app::Application;
use freight_yard::scenario::Scenario;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yard_core::{AppConfig, ScenarioConfig};
use yard_dispatcher::StrandReason;
use yard_domain::{ContainerHolder, ContainerStore};

#[test]
fn test_sample_yard_unloads_everything() {
    let mut room = Scenario::sample().unwrap().into_control_room();

    let before = room.summary();
    let report = room.run();
    let after = room.summary();

    assert_eq!(before.containers_on_trains, 27);
    assert_eq!(before.containers_in_storages, 0);
    assert_eq!(before.total_cost_minor_units, 0);

    assert_eq!(report.trains_processed(), 3);
    assert_eq!(report.containers_moved(), 27);
    assert_eq!(after.containers_on_trains, 0);
    assert_eq!(after.containers_in_storages, 27);
    assert_eq!(after.total_cost_minor_units, 999);
    assert!(room.storages().iter().all(|s| s.is_full()));
}

#[test]
fn test_shuffled_sample_conserves_containers_for_any_seed() {
    for seed in [0u64, 1, 7, 42, 2024] {
        let scenario = Scenario::sample_shuffled(&mut StdRng::seed_from_u64(seed)).unwrap();
        let mut room = scenario.into_control_room();

        let before = room.summary();
        let report = room.run();
        let after = room.summary();

        assert_eq!(
            before.containers_on_trains,
            after.containers_on_trains + after.containers_in_storages,
            "seed {seed}"
        );
        assert_eq!(report.containers_moved(), after.containers_in_storages);
        for storage in room.storages().iter() {
            assert!(storage.container_count() <= storage.max_capacity());
            assert!(storage
                .containers()
                .iter()
                .all(|c| c.kind() == storage.content_kind()));
        }
    }
}

const SMALL_YARD: &str = r#"
[scenario]
shuffle = false

[[yard.workers]]
name = "Alice"

[[yard.storages]]
location = "101 Liquids Street, UK"
kind = "liquid"
max_capacity = 1

[[yard.trains]]
id = "1"

[[yard.trains.containers]]
id = "4"
cost_minor_units = 10
description = "Oil"
kind = "liquid"

[[yard.trains.containers]]
id = "5"
cost_minor_units = 10
description = "Diesel"
kind = "liquid"

[[yard.trains.containers]]
id = "1"
cost_minor_units = 1
description = "BMW cars"
kind = "car"
"#;

#[test]
fn test_configured_yard_strands_what_does_not_fit() {
    let config = AppConfig::from_toml(SMALL_YARD).unwrap();
    let result = Application::new(config).run().unwrap();

    assert_eq!(result.before.containers_on_trains, 3);
    assert_eq!(result.after.containers_in_storages, 1);
    assert_eq!(result.after.containers_on_trains, 2);
    assert_eq!(result.after.total_cost_minor_units, 10);

    let outcome = &result.report.outcomes[0];
    assert_eq!(outcome.moved, vec!["4"]);
    let stranded: Vec<&str> = outcome
        .stranded
        .iter()
        .map(|s| s.container_id.as_str())
        .collect();
    assert_eq!(stranded, vec!["5", "1"]);
    assert!(outcome
        .stranded
        .iter()
        .all(|s| s.reason == StrandReason::NoAvailableStorage));
}

#[test]
fn test_application_loads_yard_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(SMALL_YARD.as_bytes()).unwrap();

    let config = AppConfig::load(file.path().to_str()).unwrap();
    let app = Application::new(config);
    let scenario = app.build_scenario().unwrap();

    assert_eq!(scenario.workers.len(), 1);
    assert_eq!(scenario.storages.len(), 1);
    assert_eq!(scenario.trains[0].container_count(), 3);
}

#[test]
fn test_application_sample_with_seed() {
    let config = AppConfig {
        scenario: ScenarioConfig {
            shuffle: true,
            seed: Some(11),
        },
        ..AppConfig::default()
    };
    let app = Application::new(config);

    let first = app.build_scenario().unwrap();
    let second = app.build_scenario().unwrap();
    assert_eq!(first, second);

    let result = app.run().unwrap();
    assert_eq!(result.after.containers_in_storages, 27);
    assert_eq!(result.after.total_cost_minor_units, 999);
}
