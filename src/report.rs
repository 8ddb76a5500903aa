//! 报告与变更检测
//!
//! `Report` 是一次轮询评估出的 (name, message) 摘要。只有当候选
//! 报告与上一次成功送达的报告在结构上不同时才发送通知。

use serde::{Deserialize, Serialize};

/// 作业列表为空时的固定哨兵消息
pub const NO_NEW_STATUSES: &str = "No new statuses";

/// 失败路径消息的固定前缀
pub const FAILURE_PREFIX: &str = "Сбой в работе программы: ";

/// 一次轮询评估的摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// 作业名；空列表或失败路径时为 None
    pub name: Option<String>,
    /// 渲染好的通知文本
    pub message: String,
}

impl Report {
    /// 基于某条作业的报告
    pub fn for_homework(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            message: message.into(),
        }
    }

    /// "暂无更新" 哨兵报告，参与同样的去重比较
    pub fn no_new_statuses() -> Self {
        Self {
            name: None,
            message: NO_NEW_STATUSES.to_string(),
        }
    }

    /// 失败路径报告，消息嵌入错误描述
    pub fn for_failure(error: &impl std::fmt::Display) -> Self {
        Self {
            name: None,
            message: format!("{}{}", FAILURE_PREFIX, error),
        }
    }

    /// 纯比较：候选报告是否需要发送
    pub fn differs_from(&self, previous: Option<&Report>) -> bool {
        previous != Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_report_always_differs() {
        let candidate = Report::for_homework("proj1", "text");
        assert!(candidate.differs_from(None));
    }

    #[test]
    fn test_identical_report_does_not_differ() {
        let previous = Report::for_homework("proj1", "text");
        let candidate = Report::for_homework("proj1", "text");
        assert!(!candidate.differs_from(Some(&previous)));
    }

    #[test]
    fn test_message_change_differs() {
        let previous = Report::for_homework("proj1", "old");
        let candidate = Report::for_homework("proj1", "new");
        assert!(candidate.differs_from(Some(&previous)));
    }

    #[test]
    fn test_name_change_differs() {
        let previous = Report::for_homework("proj1", "text");
        let candidate = Report::for_homework("proj2", "text");
        assert!(candidate.differs_from(Some(&previous)));
    }

    #[test]
    fn test_sentinel_participates_in_comparison() {
        let previous = Report::no_new_statuses();
        let candidate = Report::no_new_statuses();
        assert!(!candidate.differs_from(Some(&previous)));

        let change = Report::for_homework("proj1", "text");
        assert!(change.differs_from(Some(&previous)));
    }

    #[test]
    fn test_failure_report_embeds_error_text() {
        let err = crate::error::PollError::UnknownStatus("on_fire".to_string());
        let report = Report::for_failure(&err);
        assert!(report.name.is_none());
        assert!(report.message.starts_with(FAILURE_PREFIX));
        assert!(report.message.contains("on_fire"));
    }
}
