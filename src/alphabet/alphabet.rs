use crate::alphabet::enumeration::CanonicalStrings;
use crate::config::ConfigError;
use crate::types::{DomainError, Edge};

pub const MIN_ALPHABET_SIZE: u32 = 3;

/// A contiguous, ordered range of characters.
///
/// The first character is the boundary character: it may appear inside a
/// string but never at either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    first: char,
    last: char,
}

impl Alphabet {
    pub fn new(first: u32, last: u32) -> Result<Self, ConfigError> {
        if first > last {
            return Err(ConfigError::ReversedRange { first, last });
        }

        let size = last - first + 1;
        if size < MIN_ALPHABET_SIZE {
            return Err(ConfigError::AlphabetTooSmall(size));
        }

        // Both ends must be scalar values and nothing in between may be a surrogate.
        let ends = char::from_u32(first).zip(char::from_u32(last));
        let spans_surrogates = first <= 0xDFFF && last >= 0xD800;
        match ends {
            Some((first, last)) if !spans_surrogates => Ok(Alphabet { first, last }),
            _ => Err(ConfigError::InvalidCodePoints { first, last }),
        }
    }

    /// Code points 32..=126.
    pub fn printable_ascii() -> Self {
        Alphabet {
            first: ' ',
            last: '~',
        }
    }

    /// Number of characters, the radix `N` of every positional reading.
    pub fn size(&self) -> u32 {
        self.last as u32 - self.first as u32 + 1
    }

    pub fn boundary(&self) -> char {
        self.first
    }

    pub fn contains(&self, ch: char) -> bool {
        (self.first..=self.last).contains(&ch)
    }

    /// Digit value of `ch`, `0` for the boundary character.
    pub fn ord(&self, ch: char) -> Option<u32> {
        self.contains(ch).then(|| ch as u32 - self.first as u32)
    }

    pub fn char_at(&self, digit: u32) -> Option<char> {
        if digit < self.size() {
            char::from_u32(self.first as u32 + digit)
        } else {
            None
        }
    }

    /// Digits of a candidate string, most significant first.
    ///
    /// Rejects the empty string, foreign characters, and a boundary
    /// character in first or last position.
    pub fn digits(&self, s: &str) -> Result<Vec<u32>, DomainError> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                self.ord(ch)
                    .ok_or(DomainError::OutsideAlphabet { ch, position })
            })
            .collect::<Result<Vec<u32>, DomainError>>()?;

        match (digits.first().copied(), digits.last().copied()) {
            (None, _) | (_, None) => Err(DomainError::EmptyString),
            (Some(0), _) => Err(DomainError::BoundaryAtEdge(Edge::Start)),
            (_, Some(0)) => Err(DomainError::BoundaryAtEdge(Edge::End)),
            _ => Ok(digits),
        }
    }

    /// Inverse of [`Alphabet::digits`]; `None` if any digit is out of range.
    pub fn spell(&self, digits: &[u32]) -> Option<String> {
        digits.iter().map(|&digit| self.char_at(digit)).collect()
    }

    /// Every valid string up to `max_length`, in canonical order.
    pub fn enumerate(&self, max_length: usize) -> CanonicalStrings {
        CanonicalStrings::new(*self, max_length)
    }
}
