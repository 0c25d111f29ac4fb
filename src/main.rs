use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use freight_yard::app::Application;
use tracing::info;
use yard_core::{init_logging, AppConfig, LogFormat, LogLevel};

fn main() -> Result<()> {
    // 解析命令行参数
    let matches = Command::new("freight-yard")
        .version("1.0.0")
        .about("货场装卸调度模拟")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("货场配置文件路径（TOML）"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("日志级别")
                .value_parser(["trace", "debug", "info", "warn", "error"]),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("日志格式")
                .value_parser(["json", "pretty"]),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("示例货场的随机种子")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("no-shuffle")
                .long("no-shuffle")
                .help("不打乱示例货场")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config");

    // 加载配置
    let mut config = AppConfig::load(config_path.map(String::as_str))
        .with_context(|| format!("加载配置失败: {}", config_path.map_or("<默认>", |p| p)))?;

    // 命令行参数覆盖配置
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.parse::<LogLevel>()?;
    }
    if let Some(format) = matches.get_one::<String>("log-format") {
        config.logging.format = format.parse::<LogFormat>()?;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.scenario.seed = Some(*seed);
    }
    if matches.get_flag("no-shuffle") {
        config.scenario.shuffle = false;
    }

    // 初始化日志系统
    init_logging(&config.logging)?;

    info!("启动货场调度模拟");
    if let Some(path) = config_path {
        info!("配置文件: {path}");
    }

    let result = Application::new(config).run()?;

    info!(
        "货场调度模拟结束，卸下 {} 个集装箱，滞留 {} 个",
        result.report.containers_moved(),
        result.report.containers_stranded()
    );
    Ok(())
}
