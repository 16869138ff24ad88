use crate::tokenizer::StopWords;
use std::collections::BTreeSet;
use tracing::debug;

/// Query terms split into required (`plus`) and excluded (`minus`) sets.
///
/// Built fresh for every query; nothing carries over between calls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

/// Parse a raw query with the same stop-word treatment documents receive.
///
/// A token starting with `-` becomes a minus term with the prefix removed.
/// A bare `-` has nothing to exclude and is ignored.
pub fn parse_query(raw_query: &str, stop_words: &StopWords) -> ParsedQuery {
    let mut query = ParsedQuery::default();
    for word in stop_words.split_no_stop(raw_query) {
        match word.strip_prefix('-') {
            Some("") => continue,
            Some(rest) => {
                query.minus_words.insert(rest.to_string());
            }
            None => {
                query.plus_words.insert(word.to_string());
            }
        }
    }
    debug!(plus = query.plus_words.len(), minus = query.minus_words.len(), "parsed query");
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn splits_plus_and_minus() {
        let q = parse_query("cat -dog  fluffy", &StopWords::new());
        assert_eq!(q.plus_words, set(&["cat", "fluffy"]));
        assert_eq!(q.minus_words, set(&["dog"]));
    }

    #[test]
    fn drops_stop_words() {
        let mut sw = StopWords::new();
        sw.configure("a the");
        let q = parse_query("a the", &sw);
        assert!(q.is_empty());
        let q = parse_query("the cat", &sw);
        assert_eq!(q.plus_words, set(&["cat"]));
    }

    #[test]
    fn bare_dash_is_ignored() {
        let q = parse_query("- cat -", &StopWords::new());
        assert_eq!(q.plus_words, set(&["cat"]));
        assert!(q.minus_words.is_empty());
    }

    #[test]
    fn only_first_dash_is_stripped() {
        let q = parse_query("--cat", &StopWords::new());
        assert_eq!(q.minus_words, set(&["-cat"]));
    }

    #[test]
    fn term_can_be_both_plus_and_minus() {
        let q = parse_query("cat -cat", &StopWords::new());
        assert!(q.plus_words.contains("cat"));
        assert!(q.minus_words.contains("cat"));
    }
}
