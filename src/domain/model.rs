use serde::{Serialize, Serializer};

/// Sentinel for values the upstream response did not carry. Lexically sorts
/// after any zero-padded ISO date, so an undated play never matches a window.
pub const UNKNOWN: &str = "unknown";

/// One recorded play session: when it happened and which game it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub date: String,
    pub game_id: String,
}

/// Play count for one game inside the requested date window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameAggregate {
    pub game_id: String,
    pub play_count: u64,
}

/// A statistic the upstream may omit: serializes as the raw number when
/// known, or as the literal string `"unknown"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stat<T> {
    Known(T),
    Unknown,
}

impl<T: Serialize> Serialize for Stat<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Stat::Known(value) => value.serialize(serializer),
            Stat::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

impl<T> From<Option<T>> for Stat<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Stat::Known(v),
            None => Stat::Unknown,
        }
    }
}

/// Display-ready summary of one catalog item.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThingStats {
    pub name: String,
    pub owned_count: Stat<u64>,
    pub average_rating: Stat<f64>,
}

/// Body of a successful `/api/bgg-plays` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaysResponse {
    pub game_ids: Vec<GameAggregate>,
}
