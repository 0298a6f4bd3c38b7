use crate::domain::model::{GameAggregate, PlayRecord};
use std::collections::HashMap;

/// Inclusive date window over zero-padded ISO dates. The upstream format is
/// `YYYY-MM-DD`, so lexical comparison is chronological comparison.
#[derive(Debug, Clone)]
pub struct DateWindow {
    pub start: String,
    pub end: String,
}

impl DateWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.start.as_str() <= date && date <= self.end.as_str()
    }
}

/// Count plays per game inside the window.
///
/// Output order is unspecified; callers must not depend on it. An empty
/// result is an ordinary outcome, not an error.
pub fn plays_per_game(plays: &[PlayRecord], window: &DateWindow) -> Vec<GameAggregate> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for play in plays.iter().filter(|p| window.contains(&p.date)) {
        *counts.entry(play.game_id.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(game_id, play_count)| GameAggregate {
            game_id: game_id.to_string(),
            play_count,
        })
        .collect()
}
