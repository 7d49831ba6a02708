//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used by the
//! conflict detection and the solution validator.

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit of a `u16`. This generally has better
/// performance than a `HashSet` and makes duplicate detection a single
/// bitwise operation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DigitSet(u16);

const ALL_DIGITS_MASK: u16 = 0b11_1111_1110;

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn new() -> DigitSet {
        DigitSet(0)
    }

    /// Creates a digit set containing every digit from 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet(ALL_DIGITS_MASK)
    }

    /// Inserts the given digit into this set. Returns `true` if the digit
    /// was not yet present and `false` if it already was.
    ///
    /// Digits outside the range `[1, 9]` are rejected by a debug assertion;
    /// all call sites in this crate guarantee the range.
    pub fn insert(&mut self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));

        let bit = 1u16 << digit;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Removes the given digit from this set. Removing an absent digit is a
    /// no-op.
    pub fn remove(&mut self, digit: u8) {
        debug_assert!((1..=9).contains(&digit));

        self.0 &= !(1u16 << digit);
    }

    /// Indicates whether the given digit is contained in this set.
    pub fn contains(&self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));

        self.0 & (1u16 << digit) != 0
    }

    /// The number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Indicates whether this set contains no digits.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Indicates whether this set contains every digit from 1 to 9.
    pub fn is_full(&self) -> bool {
        self.0 == ALL_DIGITS_MASK
    }

    /// Gets the smallest digit from 1 to 9 that is *not* contained in this
    /// set, or `None` if the set is full.
    pub fn smallest_missing(&self) -> Option<u8> {
        (1..=9).find(|&digit| !self.contains(digit))
    }

    /// An iterator over the digits in this set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=9).filter(move |&digit| self.contains(digit))
    }
}
