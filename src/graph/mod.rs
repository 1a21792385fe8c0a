// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static topology derivation.
//!
//! Given every component document and a set of seed routing keys, the
//! builder walks the routing-key algebra to find which components consume
//! which outputs. The result is a [`Topology`]: an append-only arena of
//! component and edge nodes a renderer can draw from [`Topology::links`].
//!
//! # Example
//! ```
//! use serde_json::json;
//! use switchyard::config::Config;
//! use switchyard::graph::build_topology;
//!
//! let configs = vec![
//!     Config::from_value(json!({
//!         "name": "upper",
//!         "input": {"keys": ["text"]},
//!         "output": {"keys": ["upper"]}
//!     })).unwrap(),
//!     Config::from_value(json!({
//!         "name": "reverse",
//!         "input": {"keys": ["upper"]},
//!         "output": {"keys": []}
//!     })).unwrap(),
//! ];
//!
//! let topology = build_topology(&["text"], &configs);
//! assert!(topology.links().contains(&("upper".to_string(), "reverse".to_string())));
//! ```

mod builder;
mod node;

pub use builder::{build_topology, GraphBuilder};
pub use node::{Node, NodeId, NodeKind, Topology};
