//! Telegram 渠道 - 通过 Bot API 投递通知
//!
//! `send` 永不向上抛错：任何投递失败都被捕获、记录，并以
//! `delivered = false` 返回。Poller 据此决定是否推进 PreviousReport。

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

/// Bot API 基础 URL
const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// 发送超时（秒）
const SEND_TIMEOUT_SECS: u64 = 30;

/// 消息投递的抽象（Poller 的测试接缝）
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// 投递一条文本消息，返回是否确认送达
    async fn send(&self, text: &str) -> bool;
}

/// sendMessage 请求载荷
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Bot API 响应（只关心 ok 与错误描述）
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram 渠道配置
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token
    pub token: String,
    /// 目标 chat ID
    pub chat_id: String,
    /// Bot API 基础 URL（测试时指向 mock）
    pub api_url: String,
    /// Dry-run：只记录不发送，视为送达
    pub dry_run: bool,
}

impl TelegramConfig {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            chat_id: chat_id.into(),
            api_url: TELEGRAM_API_URL.to_string(),
            dry_run: false,
        }
    }

    /// 覆盖 Bot API 基础 URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// 开启 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Telegram 渠道
pub struct TelegramSink {
    client: Client,
    config: TelegramConfig,
}

impl TelegramSink {
    pub fn new(config: TelegramConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, config })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_url, self.config.token
        )
    }
}

#[async_trait]
impl MessageSink for TelegramSink {
    async fn send(&self, text: &str) -> bool {
        if self.config.dry_run {
            info!(chat_id = %self.config.chat_id, text = %text, "dry-run: message not sent");
            return true;
        }

        let payload = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
        };

        let response = match self
            .client
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "failed to reach Telegram API");
                return false;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Telegram API rejected the message");
            return false;
        }

        // Bot API 在 200 响应里也可能报错，检查 ok 字段
        match response.json::<SendMessageResponse>().await {
            Ok(body) if body.ok => {
                info!(chat_id = %self.config.chat_id, text = %text, "notification delivered");
                true
            }
            Ok(body) => {
                error!(
                    description = %body.description.unwrap_or_default(),
                    "Telegram API returned ok=false"
                );
                false
            }
            Err(e) => {
                error!(error = %e, "unreadable Telegram API response");
                false
            }
        }
    }
}
