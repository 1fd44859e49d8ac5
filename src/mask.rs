//! Bit mask constructors for a given [`Word`] width.
//!
//! Counts and bounds past the width saturate instead of overflowing the
//! shift.

use crate::range::ClosedRange;
use crate::word::Word;

/// Returns a mask with the lowest `n` bits set.
///
/// # Examples
/// ```
/// use tinker_bits::mask::low_bits_set;
///
/// assert_eq!(low_bits_set::<u8>(2), 0b0000_0011);
/// assert_eq!(low_bits_set::<u8>(8), 0b1111_1111);
/// assert_eq!(low_bits_set::<u8>(100), 0b1111_1111);
/// ```
#[inline]
pub fn low_bits_set<W: Word>(n: usize) -> W {
    if n >= W::BITS {
        // shift would overflow
        W::ALL
    } else {
        (W::ONE << n) - W::ONE
    }
}

/// Returns a mask with the highest `n` bits set.
///
/// # Examples
/// ```
/// use tinker_bits::mask::high_bits_set;
///
/// assert_eq!(high_bits_set::<u8>(2), 0b1100_0000);
/// assert_eq!(high_bits_set::<u8>(0), 0);
/// ```
#[inline]
pub fn high_bits_set<W: Word>(n: usize) -> W {
    !low_bits_set::<W>(W::BITS.saturating_sub(n))
}

/// Returns a mask with the lowest `n` bits clear and every other bit set.
///
/// # Examples
/// ```
/// use tinker_bits::mask::low_bits_clear;
///
/// assert_eq!(low_bits_clear::<u8>(2), 0b1111_1100);
/// ```
#[inline]
pub fn low_bits_clear<W: Word>(n: usize) -> W {
    !low_bits_set::<W>(n)
}

/// Returns a mask with the highest `n` bits clear and every other bit set.
///
/// # Examples
/// ```
/// use tinker_bits::mask::high_bits_clear;
///
/// assert_eq!(high_bits_clear::<u8>(2), 0b0011_1111);
/// ```
#[inline]
pub fn high_bits_clear<W: Word>(n: usize) -> W {
    !high_bits_set::<W>(n)
}

/// Returns a mask with exactly the bits in `range` set.
///
/// Bounds past the word width are clamped, so bits that do not exist in `W`
/// are never set.
///
/// # Examples
/// ```
/// use tinker_bits::{ClosedRange, mask::range_of_bits_set};
///
/// assert_eq!(range_of_bits_set::<u8, usize>(ClosedRange::new(2, 5)), 0b0011_1100);
/// assert_eq!(range_of_bits_set::<u8, usize>(ClosedRange::new(7, 7)), 0b1000_0000);
/// ```
pub fn range_of_bits_set<W: Word, B: Word>(range: ClosedRange<B>) -> W {
    let lower = range.lower().to_index().unwrap_or(usize::MAX);
    let upper = range.upper().to_index().unwrap_or(usize::MAX);

    let below = low_bits_set::<W>(lower);
    let above = high_bits_set::<W>((W::BITS - 1).saturating_sub(upper));

    !(below | above)
}
