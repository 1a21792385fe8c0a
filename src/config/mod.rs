// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod component;
mod loader;

pub mod consts;

pub use component::{Config, EncryptionSettings};
pub use loader::{load_component, load_config, load_configs};
