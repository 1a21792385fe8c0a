// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dot-path access into nested maps and sequences.
//!
//! Segments are separated by `.`; a segment addressing a sequence must be a
//! decimal index. The empty path addresses the container itself.

use serde_json::{Map, Value};

use crate::errors::KeyPathError;

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Look up `path` in `container`.
///
/// # Errors
/// [`KeyPathError::NotFound`] if any segment is absent.
pub fn get<'a>(container: &'a Value, path: &str) -> Result<&'a Value, KeyPathError> {
    if path.is_empty() {
        return Ok(container);
    }
    path.split('.')
        .try_fold(container, |node, segment| child(node, segment))
        .ok_or_else(|| KeyPathError::NotFound {
            path: path.to_string(),
        })
}

/// Look up `path` in `container`, falling back to `default` when absent.
pub fn get_or<'a>(container: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(container, path).unwrap_or(default)
}

/// Whether `path` addresses a value in `container`.
pub fn has(container: &Value, path: &str) -> bool {
    get(container, path).is_ok()
}

/// Write `value` at `path`, creating intermediate maps as needed.
///
/// A sequence index equal to the length appends; larger indices are
/// rejected. A scalar standing where a container is needed is replaced by an
/// empty map.
pub fn set(container: &mut Value, path: &str, value: Value) -> Result<(), KeyPathError> {
    if path.is_empty() {
        *container = value;
        return Ok(());
    }

    let (parents, leaf) = match path.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, path),
    };

    let mut node = container;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        node = slot(node, path, segment)?;
    }
    *slot(node, path, leaf)? = value;
    Ok(())
}

/// Mutable access to `segment` under `node`, creating the slot if missing.
fn slot<'a>(node: &'a mut Value, path: &str, segment: &str) -> Result<&'a mut Value, KeyPathError> {
    if !matches!(node, Value::Object(_) | Value::Array(_)) {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Array(items) => {
            let invalid = || KeyPathError::InvalidIndex {
                path: path.to_string(),
                segment: segment.to_string(),
            };
            let index = segment.parse::<usize>().map_err(|_| invalid())?;
            if index > items.len() {
                return Err(invalid());
            }
            if index == items.len() {
                items.push(Value::Null);
            }
            Ok(&mut items[index])
        }
        Value::Object(map) => Ok(map.entry(segment.to_string()).or_insert(Value::Null)),
        _ => unreachable!("node was coerced to a container above"),
    }
}

/// Remove the value at `path`. Missing paths and bad indices are ignored,
/// and the empty path removes nothing.
pub fn unset(container: &mut Value, path: &str) {
    if path.is_empty() {
        return;
    }
    let parts: Vec<&str> = path.split('.').collect();
    let Some((leaf, parents)) = parts.split_last() else {
        return;
    };

    let mut node = container;
    for segment in parents {
        let next = match node {
            Value::Object(map) => map.get_mut(*segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
            _ => None,
        };
        match next {
            Some(next) => node = next,
            None => return,
        }
    }

    match node {
        Value::Object(map) => {
            map.remove(*leaf);
        }
        Value::Array(items) => {
            if let Ok(index) = leaf.parse::<usize>() {
                if index < items.len() {
                    items.remove(index);
                }
            }
        }
        _ => {}
    }
}
