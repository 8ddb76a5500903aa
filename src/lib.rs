//! Homework Bot - 轮询 Practicum 作业评审状态并推送 Telegram 通知

pub mod config;
pub mod error;
pub mod poller;
pub mod practicum;
pub mod report;
pub mod response;
pub mod status;
pub mod telegram;

pub use config::{Config, DEFAULT_ENDPOINT};
pub use error::{ConfigError, PollError};
pub use poller::{Poller, DEFAULT_RETRY_SECS};
pub use practicum::{PracticumClient, StatusApi};
pub use report::{Report, FAILURE_PREFIX, NO_NEW_STATUSES};
pub use status::{format_status, verdict};
pub use telegram::{MessageSink, TelegramConfig, TelegramSink};
