//! Homework Bot CLI
//!
//! 轮询 Practicum 作业评审状态，状态变化时推送 Telegram 通知

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use homework_bot::{
    Config, Poller, PracticumClient, TelegramConfig, TelegramSink, DEFAULT_RETRY_SECS,
};

#[derive(Parser)]
#[command(name = "hwbot")]
#[command(about = "Homework Bot - 轮询作业评审状态并推送 Telegram 通知")]
#[command(version)]
struct Cli {
    /// 轮询间隔（秒）
    #[arg(long, short, default_value_t = DEFAULT_RETRY_SECS)]
    interval: u64,
    /// 只执行一个轮询周期后退出（调试用）
    #[arg(long)]
    once: bool,
    /// Dry-run 模式（只打印不发送）
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化 tracing 日志系统
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug hwbot --once
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("homework_bot=info,hwbot=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    // 凭证检查是唯一致命且不重试的失败，必须发生在任何网络请求之前
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "startup credential check failed");
            std::process::exit(1);
        }
    };

    let api = PracticumClient::new(&config.endpoint, &config.practicum_token)?;
    let sink = TelegramSink::new(
        TelegramConfig::new(&config.telegram_token, &config.telegram_chat_id)
            .with_dry_run(cli.dry_run),
    )?;

    let mut poller = Poller::new(api, sink, Duration::from_secs(cli.interval));

    if cli.once {
        poller.run_cycle().await;
    } else {
        poller.run().await;
    }

    Ok(())
}
