//! Read and write paths against the recipe store.
//!
//! Every function takes an explicit connection so callers own pooling and
//! error mapping. "Not found" is `Ok(None)`; anything else surfaces as the
//! diesel error for the handler to log and translate.

pub mod catalog;
pub mod full;
pub mod list;
pub mod mutate;

use uuid::Uuid;

/// Escape ILIKE wildcards in user-entered search text so a literal `%` or
/// `_` matches itself.
pub(crate) fn escape_like(text: &str) -> String {
    text.replace('%', "\\%").replace('_', "\\_")
}

/// Filter ids arriving as raw query-string values down to well-formed
/// UUIDs. Malformed values match nothing, which for an advisory filter
/// means they are simply dropped.
pub(crate) fn parse_ids(raw: &[String]) -> Vec<Uuid> {
    raw.iter()
        .filter_map(|s| match Uuid::parse_str(s) {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::debug!(value = %s, "ignoring malformed id in filter");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50% cocoa"), "50\\% cocoa");
        assert_eq!(escape_like("under_score"), "under\\_score");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_parse_ids_drops_malformed_values() {
        let raw = vec![
            "3".to_string(),
            "a7f4f5e6-0b1c-4b5e-9d3e-1a2b3c4d5e6f".to_string(),
        ];
        let ids = parse_ids(&raw);
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].to_string(), "a7f4f5e6-0b1c-4b5e-9d3e-1a2b3c4d5e6f");
    }
}
