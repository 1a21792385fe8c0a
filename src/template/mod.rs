// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Key paths and `{placeholder}` templating over JSON trees.
//!
//! Everything a component sees at runtime is a `serde_json::Value`: its config
//! document, the inbound message and whatever its procedure returns. This module
//! addresses those trees with dot paths (`input.items.0.name`) and resolves
//! placeholders that reference them.
//!
//! # Example
//! ```
//! use serde_json::json;
//! use switchyard::template::substitute;
//!
//! let context = json!({"x": {"y": 5}});
//! assert_eq!(substitute(&json!("{x.y}"), &context), json!(5));
//! assert_eq!(substitute(&json!("val={x.y}"), &context), json!("val=5"));
//! assert_eq!(substitute(&json!("{missing}"), &context), json!("{missing}"));
//! ```

pub mod keypath;
pub mod scanner;
mod substitute;

pub use substitute::{stringify, substitute};
