// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod procedures;

pub use factory::LocalProcedureFactory;
pub use procedures::*;
