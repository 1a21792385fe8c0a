// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::component::Config;
use crate::config::consts::{CONFIG_EXTENSIONS, NAME_PATH};
use crate::errors::ConfigError;
use crate::observability::messages::config::{ConfigDocumentSkipped, ConfigFileLoaded};
use crate::observability::messages::StructuredLog;
use crate::template::keypath;

/// Load every component declared in one file.
///
/// The file holds either a single component document or a list of them, in
/// JSON, YAML or TOML as chosen by its extension. Documents without a `name`
/// are skipped and logged. TOML has no top-level arrays, so a TOML list is
/// written as `[[components]]` tables.
///
/// # Example
/// ```yaml
/// - name: uppercase
///   shell: { procedure: change_text_case_upper }
///   input: { keys: ["text"], bindings: { string: "{input.text}" } }
///   output: { keys: ["upper.?"] }
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Vec<Config>, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = match parse_document(path, &content)? {
        Value::Array(items) => items,
        Value::Object(mut map) if !map.contains_key(NAME_PATH) && map.len() == 1 => {
            match map.remove("components") {
                Some(Value::Array(items)) => items,
                Some(other) => vec![other],
                None => vec![Value::Object(map)],
            }
        }
        other => vec![other],
    };

    let mut configs = Vec::with_capacity(documents.len());
    for document in documents {
        if keypath::get(&document, NAME_PATH).is_err() {
            ConfigDocumentSkipped {
                path,
                reason: "document has no 'name'",
            }
            .log();
            continue;
        }
        configs.push(Config::from_value(document)?);
    }

    ConfigFileLoaded {
        path,
        component_count: configs.len(),
    }
    .log();

    Ok(configs)
}

/// Load a file that must declare exactly one component.
pub fn load_component<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut configs = load_config(path)?;
    if configs.len() != 1 {
        return Err(ConfigError::Invalid {
            reason: format!(
                "expected exactly one component in '{}', found {}",
                path.display(),
                configs.len()
            ),
        });
    }
    Ok(configs.remove(0))
}

/// Recursively load every component file under the given folders.
///
/// Files are visited in sorted path order so the result is stable across
/// runs. A path that is itself a file is loaded directly.
pub fn load_configs<P: AsRef<Path>>(folders: &[P]) -> Result<Vec<Config>, ConfigError> {
    let mut files = Vec::new();
    for folder in folders {
        collect_files(folder.as_ref(), &mut files)?;
    }
    files.sort();

    let mut configs = Vec::new();
    for file in files {
        configs.extend(load_config(&file)?);
    }
    Ok(configs)
}

fn collect_files(path: &Path, files: &mut Vec<PathBuf>) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.is_file() {
        files.push(path.to_path_buf());
        return Ok(());
    }

    for entry in fs::read_dir(path).map_err(io_error)? {
        let entry_path = entry.map_err(io_error)?.path();
        if entry_path.is_dir() {
            collect_files(&entry_path, files)?;
        } else if has_config_extension(&entry_path) {
            files.push(entry_path);
        }
    }
    Ok(())
}

fn has_config_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext))
}

fn parse_document(path: &Path, content: &str) -> Result<Value, ConfigError> {
    let parse_error = |reason: String| ConfigError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        Some("toml") => {
            let table: toml::Value =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            serde_json::to_value(table).map_err(|e| parse_error(e.to_string()))
        }
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
