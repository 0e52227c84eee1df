use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::numbering::SequenceNumbering;

/// Printable ASCII, space first.
pub const DEFAULT_ALPHABET_RANGE: [u32; 2] = [32, 126];
pub const DEFAULT_MAX_STRING_LENGTH: usize = 16;
pub const DEFAULT_SAMPLE_WINDOW_SIZE: usize = 10;
pub const DEFAULT_STALENESS_MULTIPLIER: u32 = 5;

/// Upper bound on `max_string_length`; keeps every exponent within `u32`.
pub const MAX_SUPPORTED_LENGTH: usize = 4096;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Alphabet range is reversed: {first} > {last}")]
    ReversedRange { first: u32, last: u32 },
    #[error("Alphabet needs at least 3 characters, got {0}")]
    AlphabetTooSmall(u32),
    #[error("Alphabet range {first}..={last} contains values that are not characters")]
    InvalidCodePoints { first: u32, last: u32 },
    #[error("Maximum string length must be between 1 and 4096, got {0}")]
    MaxStringLength(usize),
    #[error("Sample window must hold at least 2 emissions, got {0}")]
    SampleWindowSize(usize),
    #[error("Staleness multiplier must be positive and fit in i32, got {0}")]
    StalenessMultiplier(u32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Inclusive code-point range; the first character is the boundary character.
    pub alphabet_range: [u32; 2],
    pub max_string_length: usize,
    pub sample_window_size: usize,
    pub staleness_multiplier: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            alphabet_range: DEFAULT_ALPHABET_RANGE,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            sample_window_size: DEFAULT_SAMPLE_WINDOW_SIZE,
            staleness_multiplier: DEFAULT_STALENESS_MULTIPLIER,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alphabet()?;

        check_max_string_length(self.max_string_length)?;
        if self.sample_window_size < 2 {
            return Err(ConfigError::SampleWindowSize(self.sample_window_size));
        }
        check_staleness_multiplier(self.staleness_multiplier)?;
        Ok(())
    }

    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        let [first, last] = self.alphabet_range;
        Alphabet::new(first, last)
    }

    pub fn numbering(&self) -> Result<SequenceNumbering, ConfigError> {
        self.validate()?;
        SequenceNumbering::new(self.alphabet()?, self.max_string_length)
    }

    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let f = fs::File::open(path)?;
        let config: EngineConfig = serde_json::from_reader(f)?;
        config.validate()?;
        Ok(config)
    }

    /// `sha256:<hex>` over the canonical JSON form.
    ///
    /// Sequence numbers are only comparable between configurations with the
    /// same fingerprint.
    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        let config_json = serde_json::to_vec(self)?;

        let mut hasher = Sha256::new();
        hasher.update(&config_json);
        let hash = hasher.finalize();

        Ok(format!("sha256:{}", hex::encode(hash)))
    }
}

pub(crate) fn check_max_string_length(max_string_length: usize) -> Result<(), ConfigError> {
    if max_string_length == 0 || max_string_length > MAX_SUPPORTED_LENGTH {
        return Err(ConfigError::MaxStringLength(max_string_length));
    }
    Ok(())
}

/// The threshold is `multiplier × median` in exact `TimeDelta` arithmetic,
/// which takes an `i32`.
pub(crate) fn check_staleness_multiplier(multiplier: u32) -> Result<(), ConfigError> {
    if multiplier == 0 || i32::try_from(multiplier).is_err() {
        return Err(ConfigError::StalenessMultiplier(multiplier));
    }
    Ok(())
}
