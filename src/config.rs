//! 配置模块 - 从环境变量读取凭证
//!
//! 三个必需的密钥：
//! - `PRACTICUM_TOKEN`：状态端点的 OAuth token
//! - `TELEGRAM_TOKEN`：Telegram Bot token
//! - `TELEGRAM_CHAT_ID`：通知目标 chat
//!
//! 任一缺失即为致命错误，进程在发出任何网络请求前退出。
//! 可选的 `PRACTICUM_ENDPOINT` 覆盖默认端点（用于对接 mock 服务）。

use crate::error::ConfigError;

/// 默认的作业状态端点
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// 运行配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 状态端点的 OAuth token
    pub practicum_token: String,
    /// Telegram Bot token
    pub telegram_token: String,
    /// 通知目标 chat ID
    pub telegram_chat_id: String,
    /// 状态端点 URL
    pub endpoint: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 空字符串视同缺失。返回的错误指明具体缺失的变量名。
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            practicum_token: require_var("PRACTICUM_TOKEN")?,
            telegram_token: require_var("TELEGRAM_TOKEN")?,
            telegram_chat_id: require_var("TELEGRAM_CHAT_ID")?,
            endpoint: std::env::var("PRACTICUM_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
