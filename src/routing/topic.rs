// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wire encoding of token sets onto a hierarchical topic exchange.
//!
//! Topic exchanges match word *sequences*, while routing keys here are token
//! *sets*. Publishing canonical (sorted) keys and binding with a multi-word
//! wildcard around every sorted token makes the exchange deliver exactly the
//! keys that contain all of the bound tokens.

use crate::routing::RoutingKey;

/// Matches zero or more words.
pub const MULTI_WORD: &str = "#";

/// Matches exactly one word.
pub const SINGLE_WORD: &str = "*";

/// Expand a key into its binding pattern: `{a, b}` becomes `#.a.#.b.#`.
///
/// ```
/// use switchyard::routing::{topic_pattern, RoutingKey};
///
/// assert_eq!(topic_pattern(&RoutingKey::parse("b.a")), "#.a.#.b.#");
/// assert_eq!(topic_pattern(&RoutingKey::parse("")), "#");
/// ```
pub fn topic_pattern(key: &RoutingKey) -> String {
    let mut words = vec![MULTI_WORD];
    for token in key.tokens() {
        words.push(token);
        words.push(MULTI_WORD);
    }
    words.join(".")
}

/// Topic exchange matching of `routing_key` against a binding `pattern`.
pub fn topic_matches(pattern: &str, routing_key: &str) -> bool {
    let pattern: Vec<&str> = pattern.split('.').filter(|w| !w.is_empty()).collect();
    let words: Vec<&str> = routing_key.split('.').filter(|w| !w.is_empty()).collect();
    WordMatcher::new(&pattern, &words).matches(0, 0)
}

/// Memoized over (pattern position, word position) so runs of `#` stay
/// polynomial.
struct WordMatcher<'a> {
    pattern: &'a [&'a str],
    words: &'a [&'a str],
    memo: Vec<Option<bool>>,
}

impl<'a> WordMatcher<'a> {
    fn new(pattern: &'a [&'a str], words: &'a [&'a str]) -> Self {
        Self {
            pattern,
            words,
            memo: vec![None; (pattern.len() + 1) * (words.len() + 1)],
        }
    }

    fn matches(&mut self, p: usize, w: usize) -> bool {
        let (pattern, words) = (self.pattern, self.words);
        let slot = p * (words.len() + 1) + w;
        if let Some(known) = self.memo[slot] {
            return known;
        }

        let result = match pattern.get(p).copied() {
            None => w == words.len(),
            Some(MULTI_WORD) => (w..=words.len()).any(|next| self.matches(p + 1, next)),
            Some(SINGLE_WORD) => w < words.len() && self.matches(p + 1, w + 1),
            Some(word) => words.get(w) == Some(&word) && self.matches(p + 1, w + 1),
        };

        self.memo[slot] = Some(result);
        result
    }
}
