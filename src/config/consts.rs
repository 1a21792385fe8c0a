/// Upper bound on placeholder resolution passes over a single string.
pub const MAX_SUBSTITUTION_PASSES: usize = 32;
/// Prefix marking a string leaf as a serialized value token.
pub const SERIALIZED_PREFIX: &str = "base64:";
/// Prefix of the queue a component consumes from.
pub const QUEUE_PREFIX: &str = "q-";
/// File extensions scanned when loading component folders.
pub const CONFIG_EXTENSIONS: [&str; 4] = ["json", "yaml", "yml", "toml"];
/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Language of procedures provided by the local backend.
pub const LOCAL_LANGUAGE: &str = "local";

/// Document paths of the component fields.
pub const NAME_PATH: &str = "name";
pub const PROCEDURE_PATH: &str = "shell.procedure";
pub const LANGUAGE_PATH: &str = "shell.language";
pub const INPUT_KEYS_PATH: &str = "input.keys";
pub const BINDINGS_PATH: &str = "input.bindings";
pub const OUTPUT_KEYS_PATH: &str = "output.keys";
pub const ENCRYPTION_PATH: &str = "encryption";

/// Top-level fields of a pipeline record.
pub const RECORD_CONFIG: &str = "config";
pub const RECORD_INPUT: &str = "input";
pub const RECORD_OUTPUT: &str = "output";
/// Record path of the bindings as seen by the binding stage.
pub const RECORD_BINDINGS_PATH: &str = "config.input.bindings";

/// Upper bound on drain rounds when simulating a component set in memory.
pub const MAX_SIMULATION_ROUNDS: usize = 64;
