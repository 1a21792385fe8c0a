// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Transport implementations.
//!
//! Production brokers live outside this crate behind the
//! [`Transport`](crate::traits::Transport) trait. [`MemoryTransport`] is an
//! in-process topic exchange for tests and demos.

mod memory;

pub use memory::MemoryTransport;
