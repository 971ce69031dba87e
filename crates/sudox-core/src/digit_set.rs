//! Candidate digit sets for a single cell.
//!
//! A [`DigitSet`] is a 9-bit bitset over a `u16`, where bits 0-8 represent
//! digits 1-9. Membership, removal and counting are all single bit
//! operations, which matters because the solver manipulates candidate sets
//! in its innermost loops.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// A set of candidate digits (1-9) for a single cell.
///
/// A cell is *resolved* when its set contains exactly one digit; an empty
/// set signals a contradiction.
///
/// # Examples
///
/// ```
/// use sudox_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const FULL_BITS: u16 = 0x1FF;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(FULL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudox_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::singleton(Digit::D4);
    /// assert_eq!(set.as_single(), Some(Digit::D4));
    /// ```
    #[must_use]
    pub const fn singleton(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    /// Adds a digit to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= Self::singleton(digit).0;
    }

    /// Removes a digit from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::singleton(digit).0;
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::singleton(digit).0 != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the set contains exactly one digit.
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.0.count_ones() == 1
    }

    /// Returns the sole digit if the set is a singleton, `None` otherwise.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        self.is_single().then(|| {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Digit::from_value(value)
        })
    }

    /// Returns the set of digits in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in increasing order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DigitSet {
    /// Formats the set as its digits concatenated in increasing order,
    /// e.g. `"137"`. The empty set renders as `"·"` so contradictions stay
    /// visible in grid dumps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("·");
        }
        for digit in *self {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

/// Iterator over the digits of a [`DigitSet`], in increasing order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use crate::digit::Digit::*;

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(D1);
        set.insert(D9);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));
        assert_eq!(set.len(), 2);

        set.remove(D1);
        assert!(!set.contains(D1));
        assert_eq!(set.len(), 1);

        // removing an absent digit is a no-op
        set.remove(D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_singleton_and_as_single() {
        let set = DigitSet::singleton(D7);
        assert!(set.is_single());
        assert_eq!(set.as_single(), Some(D7));

        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);
        assert_eq!(a.difference(b), DigitSet::singleton(D1));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DigitSet::from_iter([D3, D1, D7]).to_string(), "137");
        assert_eq!(DigitSet::singleton(D8).to_string(), "8");
        assert_eq!(DigitSet::EMPTY.to_string(), "·");
    }
}
