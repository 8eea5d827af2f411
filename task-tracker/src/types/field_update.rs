// task-tracker/src/types/field_update.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 部分更新リクエストのフィールド
///
/// JSON でキーが無い場合は `Absent`、`null` の場合は `Clear`、値がある場合は `Set`。
/// `Absent` を得るにはフィールドに `#[serde(default)]` を付けること。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Absent,
    Clear,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Absent
    }
}

impl<T> FieldUpdate<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldUpdate::Absent)
    }

    /// 現在値にマージした結果を返す
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            FieldUpdate::Absent => current,
            FieldUpdate::Clear => None,
            FieldUpdate::Set(value) => Some(value),
        }
    }
}

impl FieldUpdate<String> {
    /// 空白のみの文字列はクリア扱いにする
    pub fn clear_if_blank(self) -> Self {
        match self {
            FieldUpdate::Set(value) if value.trim().is_empty() => FieldUpdate::Clear,
            other => other,
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => FieldUpdate::Clear,
            Some(value) => FieldUpdate::Set(value),
        })
    }
}

impl<T> Serialize for FieldUpdate<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Absent は skip_serializing_if で省略される前提
        match self {
            FieldUpdate::Absent | FieldUpdate::Clear => serializer.serialize_none(),
            FieldUpdate::Set(value) => serializer.serialize_some(value),
        }
    }
}
