use std::fmt;
use std::str::FromStr;

use num_bigint::{BigUint, ParseBigIntError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 1-based rank of a string in the canonical enumeration.
///
/// Ranks grow as `N^length` and leave the 64-bit range quickly, so the
/// value is always arbitrary precision. Serialized as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceNumber(BigUint);

impl SequenceNumber {
    pub fn new(value: BigUint) -> Self {
        SequenceNumber(value)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl From<BigUint> for SequenceNumber {
    fn from(value: BigUint) -> Self {
        SequenceNumber(value)
    }
}

impl From<u64> for SequenceNumber {
    fn from(value: u64) -> Self {
        SequenceNumber(BigUint::from(value))
    }
}

impl FromStr for SequenceNumber {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str(s).map(SequenceNumber)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for SequenceNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        decimal::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for SequenceNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decimal::deserialize(deserializer).map(SequenceNumber)
    }
}

/// Serde adapter writing a `BigUint` as a base-10 string.
pub mod decimal {
    use std::str::FromStr;

    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BigUint::from_str(&raw).map_err(de::Error::custom)
    }
}
