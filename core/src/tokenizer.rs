use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // Only the ASCII space separates words; tabs and punctuation stay inside a token.
    static ref WORD: Regex = Regex::new(r"[^ ]+").expect("valid regex");
}

/// Split text into words delimited by one or more spaces, preserving order and case.
pub fn split_into_words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Set of words dropped from both documents and queries.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Add every word of `text` to the set. Repeated calls union their results.
    pub fn configure(&mut self, text: &str) {
        for word in split_into_words(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Keep the tokens that are not stop words, in their original order.
    pub fn filter<'a>(&self, tokens: &[&'a str]) -> Vec<&'a str> {
        tokens.iter().copied().filter(|t| !self.contains(t)).collect()
    }

    /// Tokenize and filter in one pass; the path shared by documents and queries.
    pub fn split_no_stop<'a>(&self, text: &'a str) -> Vec<&'a str> {
        WORD.find_iter(text)
            .map(|m| m.as_str())
            .filter(|t| !self.contains(t))
            .collect()
    }
}
