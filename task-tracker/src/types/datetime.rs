use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use super::FieldUpdate;

/// 期日文字列をパースする
///
/// RFC 3339 形式のタイムスタンプ、または日付入力欄が送る `YYYY-MM-DD`（UTC 0時として扱う）を受け付ける。
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            format!(
                "Invalid date '{}': expected an ISO-8601 timestamp or YYYY-MM-DD",
                value
            )
        })
}

/// 作成リクエスト用: 未指定・null・空文字はいずれも期日なし
pub mod optional_due_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_due_date(&s).map(Some).map_err(serde::de::Error::custom),
        }
    }
}

/// 更新リクエスト用: null・空文字は明示的なクリア
pub mod due_date_update {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<FieldUpdate<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(FieldUpdate::Clear),
            Some(s) if s.trim().is_empty() => Ok(FieldUpdate::Clear),
            Some(s) => parse_due_date(&s)
                .map(FieldUpdate::Set)
                .map_err(serde::de::Error::custom),
        }
    }
}
