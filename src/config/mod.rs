pub mod settings;

pub use settings::{
    ConfigError, EngineConfig, DEFAULT_ALPHABET_RANGE, DEFAULT_MAX_STRING_LENGTH,
    DEFAULT_SAMPLE_WINDOW_SIZE, DEFAULT_STALENESS_MULTIPLIER, MAX_SUPPORTED_LENGTH,
};
