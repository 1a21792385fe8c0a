// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Routing-key algebra.
//!
//! A routing key is a *set* of dot-separated tokens: `b.a.b` and `a.b` name
//! the same topic. Components consume with [`Pattern`]s, whose tokens may be
//! negated with `~`, and publish with output patterns whose `?` token is
//! replaced by whatever the triggering key carried beyond the matched pattern.
//!
//! # Example
//! ```
//! use switchyard::routing::{canonicalize, derive, Pattern, RoutingKey};
//!
//! assert_eq!(canonicalize("b.a.b"), "a.b");
//!
//! let pattern = Pattern::parse("text.~draft");
//! let trigger = RoutingKey::parse("text.user.en");
//! assert!(pattern.matches(&trigger));
//!
//! assert_eq!(derive("upper.?", &trigger, &pattern), "upper.en.user");
//! ```

mod key;
pub mod topic;

pub use key::{canonicalize, derive, Pattern, RoutingKey, NEGATION_PREFIX, WILDCARD_TOKEN};
pub use topic::{topic_matches, topic_pattern};
