pub mod alphabet;
pub mod enumeration;

pub use alphabet::{Alphabet, MIN_ALPHABET_SIZE};
pub use enumeration::CanonicalStrings;
