// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The stages a [`Pipeline`](crate::engine::Pipeline) is built from, listed
//! outermost first: guard, context, decryption, deserialization,
//! substitution, binding.

mod binding;
mod context;
mod decryption;
mod guard;
mod serialization;
mod substitution;

pub use binding::BindingStage;
pub use context::ContextStage;
pub use decryption::DecryptionStage;
pub use guard::GuardStage;
pub use serialization::DeserializationStage;
pub use substitution::SubstitutionStage;
