use anyhow::Result;
use clap::Parser;
use exam_practice::cli::Cli;
use exam_practice::utils::logging;
use exam_practice::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).run(cli.command).await
}
