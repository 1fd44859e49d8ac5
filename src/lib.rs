//! Low-level bit utilities written in pure Rust for hosted and freestanding
//! targets.
//! `no_std`, no heap or `alloc`, no `unsafe`. Only `core` and the `log`
//! facade.
//!
//! [`StaticBitVector`] is the main struct in this library: a fixed number of
//! bits stored in [`BitOptions`] words, with least/most significant bit
//! search over the whole vector or a [`ClosedRange`] of it. Its
//! [features](#features) are listed below.
//!
//! # Examples
//! ```
//! use tinker_bits::{ClosedRange, StaticBitVector, word_count};
//!
//! const BIT_COUNT: usize = 12;
//! let mut vector = StaticBitVector::<BIT_COUNT, { word_count::<u8>(BIT_COUNT) }, u8>::new();
//! assert!(vector.is_empty());
//! vector.set_bit(3);
//! vector.set_bit(9);
//! assert_eq!(vector.find_least_significant_bit_index(), Some(3));
//! assert_eq!(
//!     vector.find_most_significant_bit_index_with_range(ClosedRange::new(0usize, 8)),
//!     Some(3)
//! );
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible, stack-only storage
//! - Const-generic API: `StaticBitVector<const NUM_BITS, const NUM_WORDS, W>`
//!   over `u8`, `u16`, `u32`, `u64` or `usize` words
//! - Lenient per-bit access: out-of-range reads return `0`/`false`, writes
//!   are ignored
//! - Whole-vector and range-restricted LSB / MSB search
//! - Bit mask constructors in [`mask`]
//! - Width-specific bit scanning in [`significant_bit`] (linear, binary
//!   halving or De Bruijn multiplication)
//! - A fixed-capacity, handle-addressed [`LinkedList`]
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: vector (re)initialization is
//! logged at `trace`, range queries with out-of-range bounds at `error`.
//! Nothing is emitted unless the application installs a logger.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

pub mod list;
pub mod mask;
mod options;
mod range;
pub mod significant_bit;
mod vector;
mod word;

pub use list::{Handle, LinkedList};
pub use options::BitOptions;
pub use range::{ClosedRange, InvalidRangeError};
pub use vector::{IterOnes, StaticBitVector, word_count};
pub use word::{BitScan, Word};
