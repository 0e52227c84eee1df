use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::config::settings::check_max_string_length;
use crate::config::ConfigError;
use crate::numbering::counting::{count_shorter_than, count_up_to, valid_count};
use crate::types::{DomainError, SequenceNumber};

/// Bijection between valid strings and their 1-based rank in the canonical
/// enumeration, computed in closed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceNumbering {
    alphabet: Alphabet,
    max_length: usize,
}

impl SequenceNumbering {
    /// `max_length` must lie in `1..=MAX_SUPPORTED_LENGTH`.
    pub fn new(alphabet: Alphabet, max_length: usize) -> Result<Self, ConfigError> {
        check_max_string_length(max_length)?;
        Ok(Self {
            alphabet,
            max_length,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Highest rank reachable within the maximum length.
    pub fn last_rank(&self) -> SequenceNumber {
        SequenceNumber::new(count_up_to(self.alphabet.size(), self.max_length as u32))
    }

    /// Digits of `s` if it has a rank at all.
    pub fn validate(&self, s: &str) -> Result<Vec<u32>, DomainError> {
        if s.is_empty() {
            return Err(DomainError::EmptyString);
        }

        let length = s.chars().count();
        if length > self.max_length {
            return Err(DomainError::TooLong {
                length,
                max: self.max_length,
            });
        }

        self.alphabet.digits(s)
    }

    pub fn rank_of(&self, s: &str) -> Result<SequenceNumber, DomainError> {
        let digits = self.validate(s)?;
        let rank = self.rank_of_digits(&digits);
        debug!(length = digits.len(), %rank, "ranked string");
        Ok(SequenceNumber::new(rank))
    }

    /// Rank of an already validated digit string.
    ///
    /// `prefix + position − N^(L−1) − ⌊position / N⌋ + N^(L−2)`: the numerals
    /// of length `L` at or below `position` whose first digit is not the
    /// boundary, minus the ones ending on the boundary (every N-th numeral),
    /// plus the block counted twice.
    fn rank_of_digits(&self, digits: &[u32]) -> BigUint {
        let radix = self.alphabet.size();
        let n = BigUint::from(radix);
        let length = digits.len() as u32;

        let position = digits
            .iter()
            .fold(BigUint::zero(), |value, &digit| value * &n + digit);

        if length == 1 {
            return position;
        }

        let prefix = count_shorter_than(radix, length);
        let leading_boundary = n.pow(length - 1);
        let trailing_boundary = &position / &n;
        let both_boundaries = n.pow(length - 2);

        // Additions first so the unsigned subtraction cannot underflow.
        (prefix + position + both_boundaries) - (leading_boundary + trailing_boundary)
    }

    /// The string holding `rank`; inverse of [`SequenceNumbering::rank_of`].
    pub fn string_at(&self, rank: &SequenceNumber) -> Result<String, DomainError> {
        if rank.as_biguint().is_zero() {
            return Err(DomainError::RankZero);
        }

        let radix = self.alphabet.size();
        let out_of_range = || DomainError::RankOutOfRange(rank.to_string());

        let mut remaining = rank.as_biguint().clone();
        for length in 1..=self.max_length as u32 {
            let block = valid_count(radix, length);
            if remaining <= block {
                let index = remaining - BigUint::one();
                let digits = digits_within_length(radix, length, index);
                return self.alphabet.spell(&digits).ok_or_else(out_of_range);
            }
            remaining -= block;
        }

        Err(out_of_range())
    }
}

/// Digits of the `index`-th (0-based) valid string of exactly `length`.
///
/// Valid strings of one length form a mixed-radix numeral: first digit in
/// `1..N`, middle digits in `0..N`, last digit in `1..N`. Counting in that
/// numeral preserves positional order.
fn digits_within_length(radix: u32, length: u32, index: BigUint) -> Vec<u32> {
    if length == 1 {
        return vec![low_digit(&index) + 1];
    }

    let n = BigUint::from(radix);
    let edge = BigUint::from(radix - 1);
    let length = length as usize;

    let mut digits = vec![0; length];
    digits[length - 1] = low_digit(&(&index % &edge)) + 1;

    let mut rest = index / &edge;
    for slot in (1..length - 1).rev() {
        digits[slot] = low_digit(&(&rest % &n));
        rest /= &n;
    }
    digits[0] = low_digit(&rest) + 1;

    digits
}

fn low_digit(value: &BigUint) -> u32 {
    value.iter_u32_digits().next().unwrap_or(0)
}
