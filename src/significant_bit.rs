//! Bit scanning over a single [`Word`]: least and most significant set bit,
//! and power-of-two rounding.
//!
//! The scan algorithm depends on the width (see [`BitScan`]); the result does
//! not. Indices are always counted from bit 0.

use crate::word::{BitScan, Word};

const DE_BRUIJN_32: u32 = 0x077C_B531;

#[rustfmt::skip]
const DE_BRUIJN_POSITION_32: [u8; 32] = [
     0,  1, 28,  2, 29, 14, 24,  3, 30, 22, 20, 15, 25, 17,  4,  8,
    31, 27, 13, 23, 21, 19, 16,  7, 26, 12, 18,  6, 11,  5, 10,  9,
];

const DE_BRUIJN_64: u64 = 0x037E_84A9_9DAE_458F;

#[rustfmt::skip]
const DE_BRUIJN_POSITION_64: [u8; 64] = [
     0,  1, 17,  2, 18, 50,  3, 57,
    47, 19, 22, 51, 29,  4, 33, 58,
    15, 48, 20, 27, 25, 23, 52, 41,
    54, 30, 38,  5, 43, 34, 59,  8,
    63, 16, 49, 56, 46, 21, 28, 32,
    14, 26, 24, 40, 53, 37, 42,  7,
    62, 55, 45, 31, 13, 39, 36,  6,
    61, 44, 12, 35, 60, 11, 10,  9,
];

/// Returns the index of the least significant set bit of `value`.
///
/// Returns 0 if `value` is zero, which is indistinguishable from bit 0 being
/// set. Check for zero first when that matters.
///
/// # Examples
/// ```
/// use tinker_bits::significant_bit::least_significant_bit;
///
/// assert_eq!(least_significant_bit(0b0110_1000u8), 3);
/// assert_eq!(least_significant_bit(1u64 << 63), 63);
/// ```
#[inline]
pub fn least_significant_bit<W: Word>(value: W) -> u32 {
    match W::SCAN {
        BitScan::Linear => lsb_linear(value),
        BitScan::BinaryHalving => lsb_halving(value),
        BitScan::DeBruijn32 => lsb_de_bruijn_32(value.to_u64() as u32),
        BitScan::DeBruijn64 => lsb_de_bruijn_64(value.to_u64()),
    }
}

/// Returns the index of the most significant set bit of `value`.
///
/// Returns 0 if `value` is zero. Check for zero first when that matters.
///
/// # Examples
/// ```
/// use tinker_bits::significant_bit::most_significant_bit;
///
/// assert_eq!(most_significant_bit(0b0110_1000u8), 6);
/// assert_eq!(most_significant_bit(0x0001_0000u32), 16);
/// ```
#[inline]
pub fn most_significant_bit<W: Word>(value: W) -> u32 {
    match W::SCAN {
        BitScan::Linear => msb_linear(value),
        BitScan::BinaryHalving => msb_halving(value),
        BitScan::DeBruijn32 => msb_de_bruijn_32(value.to_u64() as u32),
        BitScan::DeBruijn64 => msb_de_bruijn_64(value.to_u64()),
    }
}

/// Rounds `value` up to the next power of two.
///
/// `0` and `1` both round to `1`. Returns `None` if the result does not fit
/// in `W`.
///
/// # Examples
/// ```
/// use tinker_bits::significant_bit::next_power_of_two;
///
/// assert_eq!(next_power_of_two(5u8), Some(8));
/// assert_eq!(next_power_of_two(64u8), Some(64));
/// assert_eq!(next_power_of_two(129u8), None);
/// ```
pub fn next_power_of_two<W: Word>(value: W) -> Option<W> {
    if value <= W::ONE {
        return Some(W::ONE);
    }
    let exponent = most_significant_bit(value - W::ONE) as usize + 1;
    (exponent < W::BITS).then(|| W::ONE << exponent)
}

/// Returns `2^exponent`.
///
/// # Panics
/// Panics if `exponent >= W::BITS`.
///
/// # Examples
/// ```
/// use tinker_bits::significant_bit::power_of_two;
///
/// assert_eq!(power_of_two::<u16>(10), 1024);
/// ```
#[inline]
pub fn power_of_two<W: Word>(exponent: usize) -> W {
    assert!(
        exponent < W::BITS,
        "Exponent {exponent} does not fit in a {}-bit word",
        W::BITS
    );
    W::ONE << exponent
}

fn lsb_linear<W: Word>(mut value: W) -> u32 {
    if value == W::ZERO {
        return 0;
    }
    let mut count = 0;
    while value & W::ONE == W::ZERO {
        value = value >> 1;
        count += 1;
    }
    count
}

fn msb_linear<W: Word>(mut value: W) -> u32 {
    let mut count = 0;
    loop {
        value = value >> 1;
        if value == W::ZERO {
            return count;
        }
        count += 1;
    }
}

fn lsb_halving<W: Word>(mut value: W) -> u32 {
    if value == W::ZERO {
        return 0;
    }
    let mut count = 0;
    let mut window = W::BITS / 2;
    while window > 0 {
        // low half of the window empty: the bit is further up
        if value & ((W::ONE << window) - W::ONE) == W::ZERO {
            value = value >> window;
            count += window as u32;
        }
        window /= 2;
    }
    count
}

fn msb_halving<W: Word>(mut value: W) -> u32 {
    let mut count = 0;
    let mut window = W::BITS / 2;
    while window > 0 {
        if value >> window != W::ZERO {
            value = value >> window;
            count += window as u32;
        }
        window /= 2;
    }
    count
}

#[inline]
fn lsb_de_bruijn_32(value: u32) -> u32 {
    let isolated = value & value.wrapping_neg();
    u32::from(DE_BRUIJN_POSITION_32[(isolated.wrapping_mul(DE_BRUIJN_32) >> 27) as usize])
}

#[inline]
fn lsb_de_bruijn_64(value: u64) -> u32 {
    let isolated = value & value.wrapping_neg();
    u32::from(DE_BRUIJN_POSITION_64[(isolated.wrapping_mul(DE_BRUIJN_64) >> 58) as usize])
}

#[inline]
fn msb_de_bruijn_32(mut value: u32) -> u32 {
    value |= value >> 1;
    value |= value >> 2;
    value |= value >> 4;
    value |= value >> 8;
    value |= value >> 16;
    // only the top set bit survives
    let top = (value >> 1) + 1;
    u32::from(DE_BRUIJN_POSITION_32[(top.wrapping_mul(DE_BRUIJN_32) >> 27) as usize])
}

#[inline]
fn msb_de_bruijn_64(mut value: u64) -> u32 {
    value |= value >> 1;
    value |= value >> 2;
    value |= value >> 4;
    value |= value >> 8;
    value |= value >> 16;
    value |= value >> 32;
    let top = (value >> 1) + 1;
    u32::from(DE_BRUIJN_POSITION_64[(top.wrapping_mul(DE_BRUIJN_64) >> 58) as usize])
}
