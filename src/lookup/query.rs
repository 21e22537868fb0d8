//! Commander search queries and result payloads.

use serde::Deserialize;

use crate::cards::Commander;

/// Most results kept from one search; anything past this is dropped.
pub const MAX_RESULTS: usize = 10;

/// A non-blank commander search.
///
/// Holds the user's text; `full_query` appends the card-type restriction
/// the collaborator sends upstream. Results come back ordered by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Result ordering requested from the collaborator.
    pub const ORDER: &'static str = "name";

    /// Build a query from raw text-field input.
    ///
    /// Returns `None` for blank input, which means "clear the results",
    /// not "search for everything".
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }

    /// The user's search text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The full query string, restricted to legendary creatures.
    #[must_use]
    pub fn full_query(&self) -> String {
        format!("{} type:legendary type:creature", self.text)
    }
}

#[derive(Deserialize)]
struct SearchPayload {
    #[serde(default)]
    data: Vec<Commander>,
}

/// Parse a raw search response into candidate cards.
///
/// Reads the collaborator's `{"data": [...]}` layout, keeping at most
/// `MAX_RESULTS` entries. A missing `data` key or malformed payload
/// degrades to an empty list; lookup failures are never fatal.
#[must_use]
pub fn parse_search_payload(json: &str) -> Vec<Commander> {
    match serde_json::from_str::<SearchPayload>(json) {
        Ok(payload) => {
            let mut cards = payload.data;
            cards.truncate(MAX_RESULTS);
            cards
        }
        Err(err) => {
            tracing::debug!(%err, "unparseable search payload, degrading to empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_trims_and_rejects_blank() {
        assert_eq!(SearchQuery::new("  atraxa ").unwrap().text(), "atraxa");
        assert!(SearchQuery::new("").is_none());
        assert!(SearchQuery::new("   ").is_none());
    }

    #[test]
    fn test_full_query_restricts_to_legendary_creatures() {
        let q = SearchQuery::new("krenko").unwrap();
        assert_eq!(q.full_query(), "krenko type:legendary type:creature");
        assert_eq!(SearchQuery::ORDER, "name");
    }

    #[test]
    fn test_parse_payload() {
        let json = r#"{"data": [
            {"id": "a", "name": "Atraxa, Praetors' Voice"},
            {"id": "b", "name": "Breya, Etherium Shaper"}
        ]}"#;

        let cards = parse_search_payload(json);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Atraxa, Praetors' Voice");
    }

    #[test]
    fn test_parse_payload_caps_results() {
        let entries: Vec<String> = (0..25)
            .map(|i| format!(r#"{{"id": "{i}", "name": "Commander {i}"}}"#))
            .collect();
        let json = format!(r#"{{"data": [{}]}}"#, entries.join(","));

        let cards = parse_search_payload(&json);
        assert_eq!(cards.len(), MAX_RESULTS);
        assert_eq!(cards[9].name, "Commander 9");
    }

    #[test]
    fn test_parse_payload_degrades_to_empty() {
        // Error payloads have no "data" key.
        assert!(parse_search_payload(r#"{"object": "error", "code": "not_found"}"#).is_empty());
        assert!(parse_search_payload("not json at all").is_empty());
        assert!(parse_search_payload("").is_empty());
    }
}
