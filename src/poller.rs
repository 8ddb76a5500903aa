//! 轮询状态机 - fetch → validate → diff → notify → sleep
//!
//! Poller 独占持有两份进程内状态：
//! - 游标（下一个查询窗口的起点，只进不退）
//! - 上一次成功送达的报告（去重的唯一依据）
//!
//! 所有路径（成功、良性空响应、失败）最后都睡同一个固定间隔，
//! 失败不做退避升级。

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::error::PollError;
use crate::practicum::StatusApi;
use crate::report::Report;
use crate::response;
use crate::status::format_status;
use crate::telegram::MessageSink;

/// 默认轮询间隔（秒）
pub const DEFAULT_RETRY_SECS: u64 = 600;

/// 轮询器
pub struct Poller<A, N> {
    api: A,
    sink: N,
    interval: Duration,
    /// 下一个查询窗口的起点（Unix 时间戳）
    cursor: i64,
    /// 上一次成功送达的报告
    previous: Option<Report>,
}

impl<A: StatusApi, N: MessageSink> Poller<A, N> {
    /// 创建轮询器，游标从当前时刻开始
    pub fn new(api: A, sink: N, interval: Duration) -> Self {
        Self::with_cursor(api, sink, interval, Utc::now().timestamp())
    }

    /// 创建轮询器并指定初始游标
    pub fn with_cursor(api: A, sink: N, interval: Duration, cursor: i64) -> Self {
        Self {
            api,
            sink,
            interval,
            cursor,
            previous: None,
        }
    }

    /// 当前游标值
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// 上一次成功送达的报告
    pub fn previous_report(&self) -> Option<&Report> {
        self.previous.as_ref()
    }

    /// 无限轮询，每个周期后固定休眠
    pub async fn run(&mut self) {
        info!(interval_secs = self.interval.as_secs(), "poller started");
        loop {
            self.run_cycle().await;
            sleep(self.interval).await;
        }
    }

    /// 执行一个轮询周期（不含休眠）
    pub async fn run_cycle(&mut self) {
        match self.evaluate().await {
            Ok((candidate, server_now)) => {
                if self.deliver_if_changed(&candidate).await {
                    self.advance_cursor(server_now);
                }
            }
            Err(error) if error.is_benign_empty() => {
                // 良性空响应：只记日志，不通知，游标原地不动
                info!("endpoint returned an empty payload, nothing to report");
            }
            Err(error) => {
                error!(error = %error, "poll cycle failed");
                let candidate = Report::for_failure(&error);
                // 失败路径走同样的去重，但永不推进游标
                self.deliver_if_changed(&candidate).await;
            }
        }
    }

    /// fetch + validate + format，产出候选报告与服务端时钟
    async fn evaluate(&self) -> Result<(Report, Option<i64>), PollError> {
        let raw = self.api.fetch(self.cursor).await?;
        let homeworks = response::validate(&raw)?;
        let server_now = response::current_date(&raw);

        let candidate = match homeworks.first() {
            Some(record) => {
                let message = format_status(record)?;
                let name = record
                    .get("homework_name")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default();
                Report::for_homework(name, message)
            }
            None => Report::no_new_statuses(),
        };

        Ok((candidate, server_now))
    }

    /// 需要时投递候选报告
    ///
    /// 返回 `true` 表示本周期算 "已汇报"（内容未变，或已确认送达），
    /// `false` 表示投递失败，下个周期要用同一窗口重试。
    async fn deliver_if_changed(&mut self, candidate: &Report) -> bool {
        if !candidate.differs_from(self.previous.as_ref()) {
            return true;
        }

        if self.sink.send(&candidate.message).await {
            self.previous = Some(candidate.clone());
            true
        } else {
            // 投递失败不算汇报过，PreviousReport 保持不变
            warn!("delivery failed, report will be retried next cycle");
            false
        }
    }

    /// 推进游标到服务端时钟，缺省回落到本地时钟；只进不退
    fn advance_cursor(&mut self, server_now: Option<i64>) {
        let next = server_now.unwrap_or_else(|| Utc::now().timestamp());
        if next > self.cursor {
            self.cursor = next;
        }
    }
}
