// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Token prefix marking a pattern requirement that must be absent.
pub const NEGATION_PREFIX: char = '~';

/// Output-pattern token replaced during key derivation.
pub const WILDCARD_TOKEN: &str = "?";

fn tokens(key: &str) -> impl Iterator<Item = &str> {
    key.split('.').filter(|token| !token.is_empty())
}

/// Canonical form of a dotted key: tokens deduplicated, sorted, dot-joined.
pub fn canonicalize(key: &str) -> String {
    RoutingKey::parse(key).to_string()
}

/// A routing key as a set of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutingKey(BTreeSet<String>);

impl RoutingKey {
    pub fn parse(key: &str) -> Self {
        Self(tokens(key).map(str::to_string).collect())
    }

    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens of this key that the pattern did not mention, in sorted order.
    pub fn difference<'a>(&'a self, pattern: &'a Pattern) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(|token| !pattern.mentions(token))
            .map(String::as_str)
    }
}

impl fmt::Display for RoutingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(String::as_str).collect();
        f.write_str(&joined.join("."))
    }
}

impl FromStr for RoutingKey {
    type Err = std::convert::Infallible;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(key))
    }
}

impl From<&str> for RoutingKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

/// An input pattern: tokens that must be present and tokens that must not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    required: BTreeSet<String>,
    negated: BTreeSet<String>,
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        let mut required = BTreeSet::new();
        let mut negated = BTreeSet::new();
        for token in tokens(raw) {
            match token.strip_prefix(NEGATION_PREFIX) {
                Some(name) => negated.insert(name.to_string()),
                None => required.insert(token.to_string()),
            };
        }
        Self {
            raw: raw.to_string(),
            required,
            negated,
        }
    }

    /// The pattern as declared.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    pub fn negated(&self) -> &BTreeSet<String> {
        &self.negated
    }

    /// The required tokens as a key, for binding on a topic exchange.
    ///
    /// Negations cannot be expressed on the exchange; deliveries must still be
    /// checked with [`Pattern::matches`].
    pub fn binding_key(&self) -> RoutingKey {
        RoutingKey(self.required.clone())
    }

    /// All required tokens present and no negated token present.
    pub fn matches(&self, candidate: &RoutingKey) -> bool {
        self.required.iter().all(|token| candidate.contains(token))
            && !self.negated.iter().any(|token| candidate.contains(token))
    }

    /// Whether `token` appears in the pattern as declared (`~x` counts as the
    /// literal token `~x`, not `x`).
    fn mentions(&self, token: &str) -> bool {
        self.required.contains(token)
            || token
                .strip_prefix(NEGATION_PREFIX)
                .is_some_and(|name| self.negated.contains(name))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Derive the concrete key an output pattern publishes to.
///
/// Every lone `?` token of `output_pattern` is replaced by the sorted tokens
/// of `trigger` that `matched` did not mention. When that difference is empty
/// the `?` token is dropped rather than leaving an empty segment. Other tokens
/// are kept in their declared order.
pub fn derive(output_pattern: &str, trigger: &RoutingKey, matched: &Pattern) -> String {
    let remainder: Vec<&str> = trigger.difference(matched).collect();
    let mut derived: Vec<&str> = Vec::new();
    for token in tokens(output_pattern) {
        if token == WILDCARD_TOKEN {
            derived.extend(remainder.iter().copied());
        } else {
            derived.push(token);
        }
    }
    derived.join(".")
}
