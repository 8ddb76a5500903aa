//! 轮询错误分类 - 每个分支对应不同的恢复策略
//!
//! Poller 根据错误标签决定后续动作：
//! - `Empty`：良性空响应，仅记录 info 日志，不通知，不推进游标
//! - 其余：走失败路径，构造嵌入错误描述的候选报告并去重后通知

use thiserror::Error;

/// 一次轮询周期中可能出现的失败
#[derive(Debug, Error)]
pub enum PollError {
    /// 传输层失败（连接被拒、超时、DNS 等）
    #[error("endpoint unreachable: {0}")]
    Connectivity(String),

    /// 端点返回了非 200 状态码
    #[error("unexpected API status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// 响应体缺少必需结构
    #[error("malformed response: {0}")]
    Malformed(String),

    /// 响应既无 homeworks 也无 current_date（端点返回了空载荷）
    #[error("response carries neither homeworks nor current_date")]
    Empty,

    /// 作业记录缺少必需字段
    #[error("homework record is missing required field `{0}`")]
    MissingField(&'static str),

    /// 状态码在目录中没有对应条目
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}

impl PollError {
    /// 是否属于良性空响应（不算用户可见的错误）
    pub fn is_benign_empty(&self) -> bool {
        matches!(self, PollError::Empty)
    }
}

/// 启动期配置失败 - 唯一致命且不重试的错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必需的环境变量缺失或为空
    #[error("required environment variable `{0}` is missing or empty")]
    Missing(&'static str),
}
