//! Tolerant decoding of backend JSON
//!
//! The backend's collections are snapshots we do not control. Optional and
//! collection fields that are null, missing, or of the wrong shape decode as
//! absent/empty instead of failing the whole record.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A record that cannot be decoded at all (its identity is missing)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Competition as it arrives over the wire
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionWire {
    #[serde(default)]
    pub competition_id: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub participation_type: Option<Value>,
    #[serde(default)]
    pub min_team_size: Option<Value>,
    #[serde(default)]
    pub max_team_size: Option<Value>,
}

/// Team as it arrives over the wire
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeamWire {
    #[serde(default)]
    pub team_id: Option<Value>,
    #[serde(default)]
    pub team_name: Option<Value>,
    #[serde(default)]
    pub competition_id: Option<Value>,
    #[serde(default)]
    pub leader_id: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub member_ids: Option<Value>,
    #[serde(default)]
    pub invited_member_ids: Option<Value>,
    #[serde(default)]
    pub accepted_member_ids: Option<Value>,
}

/// Non-empty string value, or `None`
pub fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

/// Identifier list; non-arrays are empty, non-string and empty entries are dropped
pub fn ids(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Team size; anything but a non-negative integer is absent
pub fn size(value: Option<Value>) -> Option<u32> {
    value
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

/// First of several values that decodes to a non-empty string
pub fn first_text(values: impl IntoIterator<Item = Option<Value>>) -> Option<String> {
    values.into_iter().find_map(text)
}
