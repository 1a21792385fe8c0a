// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // procedure backends
pub mod codec;      // value codecs
pub mod config;     // component documents
pub mod engine;     // pipelines and workers
pub mod errors;     // error handling
pub mod graph;      // topology derivation
pub mod observability;
pub mod routing;    // routing-key algebra
pub mod template;   // key paths and placeholders
pub mod traits;     // capability abstractions
pub mod transport;  // in-memory exchange
