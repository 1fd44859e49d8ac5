use core::fmt::{Binary, Debug, Display};
use core::hash::Hash;
use core::ops::{
    Add, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not, Shl, Shr, Sub,
};

/// The algorithm used to locate the least or most significant set bit of a
/// word.
///
/// Every [`Word`] picks one through [`Word::SCAN`]. The choice is a constant,
/// so the dispatch in [`significant_bit`](crate::significant_bit) is resolved
/// at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitScan {
    /// Shift one bit at a time. Used for 8-bit words.
    Linear,
    /// Halve the search window on every step. Used for 16-bit words.
    BinaryHalving,
    /// De Bruijn multiplication with a 32-entry position table.
    DeBruijn32,
    /// De Bruijn multiplication with a 64-entry position table.
    DeBruijn64,
}

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer type usable as bit storage.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`. The trait is sealed,
/// so any other width is rejected at compile time.
///
/// Signed storage does not compile:
/// ```compile_fail
/// use tinker_bits::StaticBitVector;
///
/// let vector = StaticBitVector::<8, 1, i32>::new();
/// ```
///
/// Neither does a width outside the native set:
/// ```compile_fail
/// use tinker_bits::StaticBitVector;
///
/// let vector = StaticBitVector::<8, 1, u128>::new();
/// ```
pub trait Word:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Binary
    + Add<Output = Self>
    + Sub<Output = Self>
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
{
    /// Number of bits in the word.
    const BITS: usize;
    /// The word with no bit set.
    const ZERO: Self;
    /// The word with only bit 0 set.
    const ONE: Self;
    /// The word with every bit set.
    const ALL: Self;
    /// The bit-scan algorithm used for this width.
    const SCAN: BitScan;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Zero-extends the word to 64 bits.
    fn to_u64(self) -> u64;

    /// Converts the word to a `usize` index, or `None` if it does not fit.
    fn to_index(self) -> Option<usize>;

    /// Adds `rhs`, or returns `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

#[cfg(target_pointer_width = "64")]
const USIZE_SCAN: BitScan = BitScan::DeBruijn64;
#[cfg(target_pointer_width = "32")]
const USIZE_SCAN: BitScan = BitScan::DeBruijn32;
#[cfg(target_pointer_width = "16")]
const USIZE_SCAN: BitScan = BitScan::BinaryHalving;

macro_rules! impl_word {
    ($($ty:ty => $scan:expr),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const ALL: Self = <$ty>::MAX;
                const SCAN: BitScan = $scan;

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }
            }
        )+
    };
}

impl_word!(
    u8 => BitScan::Linear,
    u16 => BitScan::BinaryHalving,
    u32 => BitScan::DeBruijn32,
    u64 => BitScan::DeBruijn64,
    usize => USIZE_SCAN,
);
