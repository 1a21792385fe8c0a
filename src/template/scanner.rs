// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Balanced-brace scanner for placeholder text.
//!
//! Braces are paired with a stack, so `{a.{b}}` yields an outer placeholder
//! whose path contains an inner one. A brace without a partner is ordinary
//! text.

use std::collections::HashMap;

/// One piece of a parsed template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// A `{...}` span; its contents are themselves segments.
    Placeholder(Vec<Segment>),
}

impl Segment {
    /// The source text this segment was parsed from.
    pub fn raw(&self) -> String {
        match self {
            Segment::Literal(text) => text.clone(),
            Segment::Placeholder(path) => format!("{{{}}}", raw(path)),
        }
    }
}

/// Reassemble the source text of a segment list.
pub fn raw(segments: &[Segment]) -> String {
    segments.iter().map(Segment::raw).collect()
}

/// Parse `text` into literal and placeholder segments.
pub fn parse(text: &str) -> Vec<Segment> {
    let pairs = match_braces(text);
    parse_range(text, 0, text.len(), &pairs)
}

/// Map from the byte offset of each matched `{` to its closing `}`.
fn match_braces(text: &str) -> HashMap<usize, usize> {
    let mut open = Vec::new();
    let mut pairs = HashMap::new();
    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'{' => open.push(i),
            b'}' => {
                if let Some(start) = open.pop() {
                    pairs.insert(start, i);
                }
            }
            _ => {}
        }
    }
    pairs
}

fn parse_range(text: &str, start: usize, end: usize, pairs: &HashMap<usize, usize>) -> Vec<Segment> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = start;
    let mut i = start;

    while i < end {
        if bytes[i] == b'{' {
            if let Some(&close) = pairs.get(&i) {
                if literal_start < i {
                    segments.push(Segment::Literal(text[literal_start..i].to_string()));
                }
                segments.push(Segment::Placeholder(parse_range(text, i + 1, close, pairs)));
                i = close + 1;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }

    if literal_start < end {
        segments.push(Segment::Literal(text[literal_start..end].to_string()));
    }
    segments
}
