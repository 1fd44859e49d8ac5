use crate::significant_bit::{least_significant_bit, most_significant_bit};
use crate::word::Word;
use core::fmt::{Debug, Formatter};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of flag bits stored in a single [`Word`].
///
/// Bit offsets count from the least significant bit. Offsets that do not fit
/// in the word are ignored by the mutators and read as unset.
///
/// # Examples
/// ```
/// use tinker_bits::BitOptions;
///
/// let mut options = BitOptions::<u32>::new();
/// options.set_bit(5);
/// options.insert(0b1001);
/// assert_eq!(options.flatten(), 0b10_1001);
/// assert_eq!(options.least_significant_bit_index(), 0);
/// assert_eq!(options.most_significant_bit_index(), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitOptions<W: Word>(W);

impl<W: Word> BitOptions<W> {
    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self(W::ZERO)
    }

    /// Wraps a raw word.
    #[inline]
    pub const fn from_raw(raw: W) -> Self {
        Self(raw)
    }

    /// Sets every bit.
    #[inline]
    pub fn set_all(&mut self) {
        self.0 = W::ALL;
    }

    /// Clears every bit.
    #[inline]
    pub fn clear_all(&mut self) {
        self.0 = W::ZERO;
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == W::ZERO
    }

    #[inline]
    fn bit(offset: usize) -> Option<W> {
        (offset < W::BITS).then(|| W::ONE << offset)
    }

    /// Returns `true` if the bit at `offset` is set.
    #[inline]
    pub fn contains_bit(&self, offset: usize) -> bool {
        Self::bit(offset).is_some_and(|bit| self.0 & bit != W::ZERO)
    }

    /// Returns the bit at `offset` as `0` or `1`.
    #[inline]
    pub fn get_bit(&self, offset: usize) -> u8 {
        u8::from(self.contains_bit(offset))
    }

    /// Sets the bit at `offset`.
    #[inline]
    pub fn set_bit(&mut self, offset: usize) {
        if let Some(bit) = Self::bit(offset) {
            self.0 |= bit;
        }
    }

    /// Clears the bit at `offset`.
    #[inline]
    pub fn clear_bit(&mut self, offset: usize) {
        if let Some(bit) = Self::bit(offset) {
            self.0 &= !bit;
        }
    }

    /// Returns `true` if every bit of `mask` is set.
    #[inline]
    pub fn contains(&self, mask: W) -> bool {
        self.0 & mask == mask
    }

    /// Sets every bit of `mask`.
    #[inline]
    pub fn insert(&mut self, mask: W) {
        self.0 |= mask;
    }

    /// Clears every bit of `mask`.
    #[inline]
    pub fn remove(&mut self, mask: W) {
        self.0 &= !mask;
    }

    /// Returns the union of `self` and `mask`.
    #[inline]
    pub fn bit_or(&self, mask: W) -> Self {
        Self(self.0 | mask)
    }

    /// Replaces `self` with the union of `self` and `mask`.
    #[inline]
    pub fn in_place_bit_or(&mut self, mask: W) {
        self.0 |= mask;
    }

    /// Returns the intersection of `self` and `mask`.
    #[inline]
    pub fn bit_and(&self, mask: W) -> Self {
        Self(self.0 & mask)
    }

    /// Replaces `self` with the intersection of `self` and `mask`.
    #[inline]
    pub fn in_place_bit_and(&mut self, mask: W) {
        self.0 &= mask;
    }

    /// Returns the raw word.
    #[inline]
    pub fn flatten(&self) -> W {
        self.0
    }

    /// Number of set bits.
    #[inline]
    pub fn popcount(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Index of the least significant set bit.
    ///
    /// Returns 0 for an empty set; check [`is_empty`](Self::is_empty) first.
    #[inline]
    pub fn least_significant_bit_index(&self) -> u32 {
        least_significant_bit(self.0)
    }

    /// Index of the most significant set bit.
    ///
    /// Returns 0 for an empty set as well.
    #[inline]
    pub fn most_significant_bit_index(&self) -> u32 {
        most_significant_bit(self.0)
    }
}

impl<W: Word> From<W> for BitOptions<W> {
    fn from(raw: W) -> Self {
        Self(raw)
    }
}

impl<W: Word> Debug for BitOptions<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitOptions({:#0width$b})", self.0, width = W::BITS + 2)
    }
}

impl<W: Word> BitOr for BitOptions<W> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.bit_or(rhs.0)
    }
}

impl<W: Word> BitOrAssign for BitOptions<W> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.in_place_bit_or(rhs.0)
    }
}

impl<W: Word> BitAnd for BitOptions<W> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.bit_and(rhs.0)
    }
}

impl<W: Word> BitAndAssign for BitOptions<W> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.in_place_bit_and(rhs.0)
    }
}

impl<W: Word> Not for BitOptions<W> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}
