use clap::Parser;
use tracing::info;

mod cli;

use shortly::config::StaticConfig;
use shortly::interfaces::tui::run_tui;
use shortly::system::logging::init_logging;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    if cli.generate_config {
        println!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    }

    // 配置优先级：CLI > ENV > 文件 > 默认值
    let mut config = StaticConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    // 日志写文件，终端留给 TUI；guard 需存活到退出
    let _guard = init_logging(&config.logging)?;
    info!("Shortly v{} starting", env!("CARGO_PKG_VERSION"));

    run_tui(&config, &cli.route).await?;

    info!("Shortly exited");
    Ok(())
}
