//! Practicum API 客户端 - 拉取作业状态
//!
//! `GET {endpoint}?from_date=<cursor>`，带 `Authorization: OAuth <token>`。
//! 客户端只负责取回并解码响应体，不做任何内容解释；结构校验
//! 在 `response` 模块。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

use crate::error::PollError;

/// HTTP 请求超时（秒）- 没有独立的取消机制，超时是唯一的挂起保护
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// 状态拉取的抽象（Poller 的测试接缝）
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// 拉取 `from_date` 之后的作业状态，返回未解释的响应体
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// Practicum 状态端点客户端
#[derive(Debug)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// 创建客户端（带固定超时）
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self, PollError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PollError::Connectivity(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        // 诊断日志：描述即将发出的请求，token 不落日志
        info!(
            endpoint = %self.endpoint,
            from_date = from_date,
            auth = "OAuth <redacted>",
            "requesting homework statuses"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PollError::Connectivity(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(PollError::UnexpectedStatus(status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PollError::Malformed(format!("body is not valid JSON: {}", e)))
    }
}
