use crate::alphabet::alphabet::Alphabet;

/// Brute-force walk over the canonical enumeration.
///
/// Shorter strings first, then ascending positional value. Strings with a
/// boundary character at either end are skipped. Cost is linear in the
/// number of candidates visited, so this is only practical for small
/// alphabets or short lengths.
#[derive(Debug, Clone)]
pub struct CanonicalStrings {
    alphabet: Alphabet,
    max_length: usize,
    digits: Vec<u32>,
    exhausted: bool,
}

impl CanonicalStrings {
    pub fn new(alphabet: Alphabet, max_length: usize) -> Self {
        Self {
            alphabet,
            max_length,
            // Smallest candidate with a non-boundary first digit.
            digits: vec![1],
            exhausted: max_length == 0,
        }
    }

    /// Odometer step. On wrap-around the length grows and the first digit
    /// jumps past the boundary block, which holds no valid strings.
    fn advance(&mut self) {
        let radix = self.alphabet.size();
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < radix {
                return;
            }
            *digit = 0;
        }

        if self.digits.len() >= self.max_length {
            self.exhausted = true;
        } else {
            self.digits.push(0);
            self.digits[0] = 1;
        }
    }
}

impl Iterator for CanonicalStrings {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.exhausted {
            let valid = self.digits.first() != Some(&0) && self.digits.last() != Some(&0);
            let candidate = if valid {
                self.alphabet.spell(&self.digits)
            } else {
                None
            };
            self.advance();
            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}
