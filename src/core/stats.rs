use crate::core::normalize::Normalizer;
use crate::domain::model::{ThingStats, UNKNOWN};
use serde_json::Value;

/// Extract the display summary from a decoded `<items>` container.
///
/// Lookups are by id, so exactly one item is expected; `None` means the
/// upstream answered without one, which callers surface as not-found.
/// Owned count and average rating come from the statistics → ratings subtree,
/// each step tolerant of arity ambiguity; an absent or non-numeric value
/// degrades to the unknown sentinel rather than failing extraction.
pub fn thing_stats(norm: &Normalizer, items: &Value) -> Option<ThingStats> {
    let item = norm.child(items, "item")?;

    let name = norm.field(item, "name").unwrap_or(UNKNOWN).to_string();

    let ratings = norm
        .child(item, "statistics")
        .and_then(|stats| norm.child(stats, "ratings"));

    let owned_count = ratings
        .and_then(|r| norm.field(r, "owned"))
        .and_then(|v| v.parse::<u64>().ok())
        .into();
    let average_rating = ratings
        .and_then(|r| norm.field(r, "average"))
        .and_then(|v| v.parse::<f64>().ok())
        .into();

    Some(ThingStats {
        name,
        owned_count,
        average_rating,
    })
}
