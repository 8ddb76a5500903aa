//! 响应校验 - 检查端点返回的原始载荷结构
//!
//! 载荷保持为未类型化的 `serde_json::Value`，字段逐个探测，
//! 这样结构缺陷能按分类上报而不是变成一个笼统的反序列化错误。

use serde_json::Value;

use crate::error::PollError;

/// 校验原始响应并取出 `homeworks` 序列
///
/// 空数组是合法的（与字段缺失是两回事）。既无 `homeworks` 也无
/// `current_date` 视为端点返回了空载荷（`Empty`，良性）。
pub fn validate(raw: &Value) -> Result<&Vec<Value>, PollError> {
    let object = raw
        .as_object()
        .ok_or_else(|| PollError::Malformed("response body is not a JSON object".to_string()))?;

    if !object.contains_key("homeworks") && !object.contains_key("current_date") {
        return Err(PollError::Empty);
    }

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| PollError::Malformed("`homeworks` field is absent".to_string()))?;

    homeworks
        .as_array()
        .ok_or_else(|| PollError::Malformed("`homeworks` is not an array".to_string()))
}

/// 取出服务端时钟 `current_date`（可选字段）
pub fn current_date(raw: &Value) -> Option<i64> {
    raw.get("current_date").and_then(Value::as_i64)
}
