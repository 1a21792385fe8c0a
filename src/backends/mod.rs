// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Procedure backends.
//!
//! A component names the function it runs with `shell.procedure` and the
//! backend with `shell.language`. The only backend is `local`: native Rust
//! procedures built by [`local::LocalProcedureFactory`].
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process text procedures:
//! - **Case conversion**: upper, lower, proper and title case
//! - **Word joining**: snake case, camel case
//! - **Reshaping**: reversal, concatenation of lists, splitting into lines
//!
//! ## Stub Backend (Test-Only)
//! Procedures for exercising pipelines (only available in test builds):
//! - **CountingProcedure**: counts invocations, for laziness tests
//! - **FailingProcedure** / **FailingStreamProcedure**: simulate failures
//! - **AddOneProcedure**: numeric arguments that survive substitution
//!
//! # Example
//! ```rust
//! use serde_json::json;
//! use switchyard::backends::local::LocalProcedureFactory;
//! use switchyard::traits::{Arguments, Yielded};
//!
//! let procedure = LocalProcedureFactory::create_procedure("reverse_text").unwrap();
//! let mut args = Arguments::new();
//! args.insert("string".to_string(), json!("hello"));
//!
//! match procedure.invoke(args).unwrap() {
//!     Yielded::Value(value) => assert_eq!(value, json!("olleh")),
//!     Yielded::Stream(_) => unreachable!(),
//! }
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
