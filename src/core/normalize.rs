use crate::domain::model::{PlayRecord, UNKNOWN};
use serde_json::Value;

/// Field-access policy for decoded nodes: names the attribute that carries a
/// field's value when the field renders as a nested node.
#[derive(Debug, Clone)]
pub struct NormalizerOptions {
    pub value_key: String,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            value_key: "value".to_string(),
        }
    }
}

/// Resolves the decoder's arity ambiguity before any business logic runs.
///
/// Constructed once at startup from an explicit [`NormalizerOptions`] and
/// shared immutably; all methods are pure.
#[derive(Debug, Clone)]
pub struct Normalizer {
    opts: NormalizerOptions,
}

impl Normalizer {
    pub fn new(opts: NormalizerOptions) -> Self {
        Self { opts }
    }

    /// View the `child` entries of `parent` as a list, whatever arity the
    /// decoder chose: absent → empty, single → one element, sequence →
    /// unchanged in original order.
    pub fn list<'a>(&self, parent: &'a Value, child: &str) -> Vec<&'a Value> {
        match parent.get(child) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().collect(),
            Some(single) => vec![single],
        }
    }

    /// First `list` entry, for children expected at most once per parent.
    pub fn child<'a>(&self, parent: &'a Value, name: &str) -> Option<&'a Value> {
        self.list(parent, name).into_iter().next()
    }

    /// Leaf accessor tolerant of every shape the decoder emits for a
    /// single-valued field. Strategies are tried in a fixed order:
    /// an attribute-style scalar, then a nested node's value attribute, then
    /// the first element of a sequence rendering. Upstream payload shape has
    /// varied across observed responses; extraction must not fail merely
    /// because the decoder chose a different rendering.
    pub fn field<'a>(&self, node: &'a Value, name: &str) -> Option<&'a str> {
        match node.get(name)? {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map.get(&self.opts.value_key).and_then(Value::as_str),
            Value::Array(items) => items.first().and_then(|item| match item {
                Value::String(s) => Some(s.as_str()),
                Value::Object(map) => map.get(&self.opts.value_key).and_then(Value::as_str),
                _ => None,
            }),
            _ => None,
        }
    }

    /// Lower a decoded `<plays>` container into one record per play entry.
    ///
    /// Total: an entry missing its date or game id still yields a record,
    /// carrying the `"unknown"` sentinel, which no date window matches.
    pub fn play_records(&self, plays: &Value) -> Vec<PlayRecord> {
        self.list(plays, "play")
            .into_iter()
            .map(|play| {
                let date = self.field(play, "date").unwrap_or(UNKNOWN).to_string();
                let game_id = self
                    .child(play, "item")
                    .and_then(|item| self.field(item, "objectid"))
                    .unwrap_or(UNKNOWN)
                    .to_string();
                PlayRecord { date, game_id }
            })
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_absent_child_is_empty() {
        let norm = Normalizer::default();
        let parent = json!({"total": "0"});
        assert!(norm.list(&parent, "play").is_empty());
    }

    #[test]
    fn test_list_single_child_is_one_element() {
        let norm = Normalizer::default();
        let parent = json!({"play": {"date": "2023-01-01"}});
        let plays = norm.list(&parent, "play");
        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0], &json!({"date": "2023-01-01"}));
    }

    #[test]
    fn test_list_sequence_preserves_order() {
        let norm = Normalizer::default();
        let parent = json!({"play": [{"date": "a"}, {"date": "b"}, {"date": "c"}]});
        let dates: Vec<_> = norm
            .list(&parent, "play")
            .into_iter()
            .map(|p| p.get("date").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(dates, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_field_reads_attribute_style_scalar() {
        let norm = Normalizer::default();
        let node = json!({"date": "2023-01-01"});
        assert_eq!(norm.field(&node, "date"), Some("2023-01-01"));
    }

    #[test]
    fn test_field_reads_nested_value_attribute() {
        let norm = Normalizer::default();
        let node = json!({"average": {"value": "7.85"}});
        assert_eq!(norm.field(&node, "average"), Some("7.85"));
    }

    #[test]
    fn test_field_reads_first_of_sequence() {
        let norm = Normalizer::default();
        let node = json!({"name": [
            {"type": "primary", "value": "Pandemic"},
            {"type": "alternate", "value": "Pandemie"}
        ]});
        assert_eq!(norm.field(&node, "name"), Some("Pandemic"));
    }

    // Pins the fallback order: when the same field is present both as an
    // attribute-style scalar and as a nested value-bearing node, the
    // attribute-style form wins.
    #[test]
    fn field_prefers_attribute_over_nested_value() {
        let norm = Normalizer::default();
        let node = json!({"name": ["attr", {"value": "nested"}]});
        assert_eq!(norm.field(&node, "name"), Some("attr"));
    }

    #[test]
    fn test_field_absent_is_none() {
        let norm = Normalizer::default();
        let node = json!({"date": "2023-01-01"});
        assert_eq!(norm.field(&node, "quantity"), None);
    }

    #[test]
    fn test_play_records_shape_invariance() {
        // The same logical play, rendered bare and as a one-element sequence,
        // yields identical records.
        let norm = Normalizer::default();
        let bare = json!({"play": {"date": "2023-01-01", "item": {"objectid": "100"}}});
        let listed = json!({"play": [{"date": "2023-01-01", "item": {"objectid": "100"}}]});

        let expected = vec![PlayRecord {
            date: "2023-01-01".to_string(),
            game_id: "100".to_string(),
        }];
        assert_eq!(norm.play_records(&bare), expected);
        assert_eq!(norm.play_records(&listed), expected);
    }

    #[test]
    fn test_play_records_item_sequence_uses_first() {
        let norm = Normalizer::default();
        let plays = json!({"play": {
            "date": "2023-01-01",
            "item": [{"objectid": "100"}, {"objectid": "200"}]
        }});
        assert_eq!(norm.play_records(&plays)[0].game_id, "100");
    }

    #[test]
    fn test_play_records_total_over_missing_fields() {
        let norm = Normalizer::default();
        let plays = json!({"play": [
            {"date": "2023-01-01", "item": {"objectid": "100"}},
            {"item": {"objectid": "200"}},
            {"date": "2023-01-02"}
        ]});

        let records = norm.play_records(&plays);
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].date, UNKNOWN);
        assert_eq!(records[1].game_id, "200");
        assert_eq!(records[2].game_id, UNKNOWN);
    }
}
