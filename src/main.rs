use anyhow::{Context, Result};
use dwg_print_bot::utils::logging;
use dwg_print_bot::{App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let _summary = App::initialize(config)?.run().await?;

    Ok(())
}
