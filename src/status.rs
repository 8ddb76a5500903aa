//! 作业状态目录与消息格式化
//!
//! 端点返回的 `status` 是固定的三个状态码之一，目录把它映射为
//! 评审结论文本。目录之外的状态码是集成层面的故障，必须上抛而
//! 不能静默丢弃。

use serde_json::Value;
use tracing::debug;

use crate::error::PollError;

/// 状态码 → 评审结论文本
const STATUS_CATALOG: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// 查询状态码对应的结论文本
pub fn verdict(status: &str) -> Option<&'static str> {
    STATUS_CATALOG
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// 把一条作业记录渲染为通知文本
///
/// 固定模板：`Изменился статус проверки работы "<name>". <verdict>`
///
/// # Errors
/// - `MissingField`：记录缺少 `homework_name` 或 `status`
/// - `UnknownStatus`：状态码不在目录中
pub fn format_status(record: &Value) -> Result<String, PollError> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(PollError::MissingField("homework_name"))?;

    let status = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(PollError::MissingField("status"))?;

    let verdict = verdict(status).ok_or_else(|| {
        debug!(status = %status, homework = %name, "status has no catalog entry");
        PollError::UnknownStatus(status.to_string())
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name, verdict
    ))
}
