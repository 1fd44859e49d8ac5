use crate::mask::{low_bits_clear, low_bits_set, range_of_bits_set};
use crate::options::BitOptions;
use crate::range::ClosedRange;
use crate::word::Word;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use log::{error, trace};

/// Computes the number of `W` words needed to store `bit_count` bits.
///
/// It's recommended to inline this call as a const expression into the type
/// annotation generics to avoid unnecessary panics.
///
/// # Examples
/// ```
/// use tinker_bits::word_count;
///
/// assert_eq!(word_count::<u8>(9), 2);
/// assert_eq!(word_count::<u8>(16), 2);
/// assert_eq!(word_count::<u32>(33), 2);
/// assert_eq!(word_count::<u64>(64), 1);
/// ```
pub const fn word_count<W: Word>(bit_count: usize) -> usize {
    bit_count.div_ceil(W::BITS)
}

#[allow(clippy::no_effect)]
#[allow(clippy::unnecessary_operation)]
pub(crate) const fn compile_assert_const_params<W: Word>(bit_count: usize, words: usize) {
    // This will cause a compile-time error if bit_count == 0
    ["NUM_BITS must be greater than zero."][(bit_count == 0) as usize];
    // This will cause a compile-time error if words != word_count(bit_count)
    ["NUM_WORDS must match word_count(NUM_BITS)."][(word_count::<W>(bit_count) != words) as usize];
}

pub(crate) fn runtime_assert_const_params<W: Word>(bit_count: usize, words: usize) {
    assert_ne!(bit_count, 0, "NUM_BITS must be greater than zero.");
    assert_eq!(
        word_count::<W>(bit_count),
        words,
        "NUM_WORDS must match word_count(NUM_BITS)."
    );
}

/// The part of a vector a range query looks at, with out-of-range bits of
/// the boundary words already masked off.
enum Window<W: Word> {
    /// Both bounds fall in the same word.
    Single { word: usize, bits: BitOptions<W> },
    /// The bounds fall in different words; everything strictly between
    /// `first` and `last` is scanned unmasked.
    Span {
        first: usize,
        head: BitOptions<W>,
        last: usize,
        tail: BitOptions<W>,
    },
}

/// A fixed number of bits stored in an array of [`BitOptions`] words.
///
/// `NUM_BITS` is the number of usable bits. `NUM_WORDS` is the number of
/// storage words and should only be set via const expression with
/// [`word_count`] to avoid unnecessary panics (see [`new`]). `W` is the
/// storage word and defaults to `usize`; pick a narrower one to save memory.
///
/// Bits past `NUM_BITS` in the last word are padding and always stay clear.
///
/// Out-of-range indices are tolerated by the per-bit operations: reads return
/// `0`/`false` and writes do nothing.
///
/// # Examples
/// ```
/// use tinker_bits::{ClosedRange, StaticBitVector, word_count};
///
/// let mut vector = StaticBitVector::<12, { word_count::<u8>(12) }, u8>::new();
/// for index in [3, 6, 7, 9, 11] {
///     vector.set_bit(index);
/// }
/// assert_eq!(vector.find_least_significant_bit_index(), Some(3));
/// assert_eq!(vector.find_most_significant_bit_index(), Some(11));
/// assert_eq!(vector.find_least_significant_bit_index_with_range(ClosedRange::new(5usize, 10)), Some(6));
/// assert_eq!(vector.find_most_significant_bit_index_with_range(ClosedRange::new(5usize, 10)), Some(9));
/// ```
///
/// [`new`]: StaticBitVector::new
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct StaticBitVector<const NUM_BITS: usize, const NUM_WORDS: usize, W: Word = usize> {
    words: [BitOptions<W>; NUM_WORDS],
}

impl<const NUM_BITS: usize, const NUM_WORDS: usize, W: Word> StaticBitVector<NUM_BITS, NUM_WORDS, W> {
    /// Creates a new vector with all bits clear.
    ///
    /// # Panics
    /// Panics if `NUM_BITS == 0` or `NUM_WORDS != word_count::<W>(NUM_BITS)`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{StaticBitVector, word_count};
    ///
    /// let vector = StaticBitVector::<16, { word_count::<u8>(16) }, u8>::new();
    /// assert!(vector.is_empty());
    /// ```
    pub fn new() -> Self {
        runtime_assert_const_params::<W>(NUM_BITS, NUM_WORDS);
        Self {
            words: [BitOptions::new(); NUM_WORDS],
        }
    }

    /// Creates a new `const` vector with all bits clear.
    ///
    /// Equivalent to [`new`], but callable in compile-time contexts such as
    /// `const` and `static` initialization.
    ///
    /// # Compiler Errors
    /// Prevents compilation if either `NUM_BITS == 0` or `NUM_WORDS !=
    /// word_count::<W>(NUM_BITS)` with an unintuitive message like `evaluation
    /// of constant value failed` and `index out of bounds: the length is 1 but
    /// the index is 1`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{StaticBitVector, word_count};
    ///
    /// const EMPTY: StaticBitVector<40, { word_count::<u32>(40) }, u32> = StaticBitVector::const_zeros();
    /// assert_eq!(EMPTY.popcount(), 0);
    /// ```
    ///
    /// Zero bits are rejected:
    /// ```compile_fail
    /// use tinker_bits::StaticBitVector;
    ///
    /// static EMPTY: StaticBitVector<0, 0, u8> = StaticBitVector::const_zeros();
    /// assert!(EMPTY.is_empty());
    /// ```
    ///
    /// So is a word count that does not match `word_count(NUM_BITS)`:
    /// ```compile_fail
    /// use tinker_bits::StaticBitVector;
    ///
    /// static SHORT: StaticBitVector<20, 2, u8> = StaticBitVector::const_zeros();
    /// assert!(SHORT.is_empty());
    /// ```
    ///
    /// [`new`]: StaticBitVector::new
    pub const fn const_zeros() -> Self {
        compile_assert_const_params::<W>(NUM_BITS, NUM_WORDS);
        Self {
            words: [BitOptions::new(); NUM_WORDS],
        }
    }

    /// Creates a new vector with all bits clear. Same as [`new`].
    ///
    /// [`new`]: StaticBitVector::new
    #[inline]
    pub fn zeros() -> Self {
        Self::new()
    }

    /// Creates a new vector with all `NUM_BITS` bits set.
    ///
    /// # Panics
    /// Panics if `NUM_BITS == 0` or `NUM_WORDS != word_count::<W>(NUM_BITS)`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{StaticBitVector, word_count};
    ///
    /// let vector = StaticBitVector::<11, { word_count::<u8>(11) }, u8>::ones();
    /// assert_eq!(vector.popcount(), 11);
    /// assert_eq!(vector.as_words()[1].flatten(), 0b0000_0111);
    /// ```
    pub fn ones() -> Self {
        let mut vector = Self::new();
        vector.init_with_ones();
        vector
    }

    /// Constructs a vector by setting only the indices provided in the
    /// iterator.
    ///
    /// # Panics
    /// Panics if any index is out of bounds (i.e., `>= NUM_BITS`), if
    /// `NUM_BITS == 0` or if `NUM_WORDS != word_count::<W>(NUM_BITS)`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{StaticBitVector, word_count};
    ///
    /// let vector = StaticBitVector::<5, { word_count::<u8>(5) }, u8>::from_ones_iter([0, 2, 4]);
    /// assert!(vector.contains_bit(2));
    /// assert_eq!(vector.popcount(), 3);
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut vector = Self::new();
        for index in iter {
            assert!(index < NUM_BITS, "Bit index {index} out of bounds");
            vector.set_bit(index);
        }
        vector
    }

    /// Clears every bit.
    pub fn init_with_zeros(&mut self) {
        self.trace_init();
        for word in &mut self.words {
            word.clear_all();
        }
    }

    /// Sets every one of the `NUM_BITS` bits. Padding bits stay clear.
    pub fn init_with_ones(&mut self) {
        self.trace_init();
        for word in &mut self.words {
            word.set_all();
        }
        self.clean_padding_bits();
    }

    fn trace_init(&self) {
        trace!(
            "Initialized with NUM_BITS = {}; word size = {}; NUM_WORDS = {}; storage size = {}.",
            NUM_BITS,
            size_of::<W>(),
            NUM_WORDS,
            size_of::<[BitOptions<W>; NUM_WORDS]>()
        );
    }

    #[inline]
    fn clean_padding_bits(&mut self) {
        let bits_in_last = NUM_BITS % W::BITS;
        if bits_in_last != 0 {
            self.words[NUM_WORDS - 1].in_place_bit_and(low_bits_set::<W>(bits_in_last));
        }
    }

    /// Splits a bit index into the index of its word and the offset within
    /// that word.
    ///
    /// Returns `None` if `index >= NUM_BITS`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{StaticBitVector, word_count};
    ///
    /// type Vector = StaticBitVector<12, { word_count::<u8>(12) }, u8>;
    /// assert_eq!(Vector::index_to_word_offset(9), Some((1, 1)));
    /// assert_eq!(Vector::index_to_word_offset(12), None);
    /// ```
    #[inline]
    pub const fn index_to_word_offset(index: usize) -> Option<(usize, usize)> {
        if index >= NUM_BITS {
            return None;
        }
        Some((index / W::BITS, index % W::BITS))
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// Returns `false` if `index >= NUM_BITS`.
    #[inline]
    pub fn contains_bit(&self, index: usize) -> bool {
        let Some((word, offset)) = Self::index_to_word_offset(index) else {
            return false;
        };
        self.words[word].contains_bit(offset)
    }

    /// Returns the bit at `index` as `0` or `1`.
    ///
    /// Returns `0` if `index >= NUM_BITS`.
    #[inline]
    pub fn get_bit(&self, index: usize) -> u8 {
        let Some((word, offset)) = Self::index_to_word_offset(index) else {
            return 0;
        };
        self.words[word].get_bit(offset)
    }

    /// Sets the bit at `index`. Does nothing if `index >= NUM_BITS`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{StaticBitVector, word_count};
    ///
    /// let mut vector = StaticBitVector::<8, { word_count::<u8>(8) }, u8>::new();
    /// vector.set_bit(3);
    /// vector.set_bit(8);
    /// assert_eq!(vector.as_words()[0].flatten(), 0b0000_1000);
    /// ```
    #[inline]
    pub fn set_bit(&mut self, index: usize) {
        if let Some((word, offset)) = Self::index_to_word_offset(index) {
            self.words[word].set_bit(offset);
        }
    }

    /// Clears the bit at `index`. Does nothing if `index >= NUM_BITS`.
    #[inline]
    pub fn clear_bit(&mut self, index: usize) {
        if let Some((word, offset)) = Self::index_to_word_offset(index) {
            self.words[word].clear_bit(offset);
        }
    }

    /// Returns the storage words, lowest bits first.
    #[inline]
    pub fn as_words(&self) -> &[BitOptions<W>; NUM_WORDS] {
        &self.words
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn popcount(&self) -> usize {
        self.words.iter().map(BitOptions::popcount).sum()
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(BitOptions::is_empty)
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{StaticBitVector, word_count};
    ///
    /// let vector = StaticBitVector::<20, { word_count::<u8>(20) }, u8>::from_ones_iter([1, 8, 19]);
    /// let mut ones = vector.iter_ones();
    /// assert_eq!(ones.next(), Some(1));
    /// assert_eq!(ones.next(), Some(8));
    /// assert_eq!(ones.next(), Some(19));
    /// assert_eq!(ones.next(), None);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_, W> {
        IterOnes {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().map_or(W::ZERO, BitOptions::flatten),
        }
    }

    #[inline]
    fn absolute_index(word: usize, offset: u32) -> usize {
        word * W::BITS + offset as usize
    }

    /// Returns the index of the least significant set bit, or `None` if no
    /// bit is set.
    ///
    /// Words are checked from the lowest to the highest. Runs in O(w) where w
    /// is the word count.
    pub fn find_least_significant_bit_index(&self) -> Option<usize> {
        for (index, word) in self.words.iter().enumerate() {
            if !word.is_empty() {
                return Some(Self::absolute_index(index, word.least_significant_bit_index()));
            }
        }
        None
    }

    /// Returns the index of the most significant set bit, or `None` if no bit
    /// is set.
    ///
    /// Words are checked from the highest to the lowest. Runs in O(w) where w
    /// is the word count.
    pub fn find_most_significant_bit_index(&self) -> Option<usize> {
        for (index, word) in self.words.iter().enumerate().rev() {
            if !word.is_empty() {
                return Some(Self::absolute_index(index, word.most_significant_bit_index()));
            }
        }
        None
    }

    fn window<B: Word>(&self, range: ClosedRange<B>) -> Option<Window<W>> {
        let Some((first, first_offset)) = range.lower().to_index().and_then(Self::index_to_word_offset)
        else {
            error!("The lower bound {} of the given range {range} is not valid.", range.lower());
            return None;
        };
        let Some((last, last_offset)) = range.upper().to_index().and_then(Self::index_to_word_offset)
        else {
            error!("The upper bound {} of the given range {range} is not valid.", range.upper());
            return None;
        };

        if first == last {
            let mask = range_of_bits_set::<W, usize>(ClosedRange::new(first_offset, last_offset));
            return Some(Window::Single {
                word: first,
                bits: self.words[first].bit_and(mask),
            });
        }

        // Range [5, 12] over u8 words:
        //   word 0 keeps bits 5..=7  -> mask 0b1110_0000 (low 5 bits clear)
        //   word 1 keeps bits 8..=12 -> mask 0b0001_1111 (low 4 + 1 bits set)
        Some(Window::Span {
            first,
            head: self.words[first].bit_and(low_bits_clear::<W>(first_offset)),
            last,
            tail: self.words[last].bit_and(low_bits_set::<W>(last_offset + 1)),
        })
    }

    /// Returns the index of the least significant set bit within `range`.
    ///
    /// Returns `None` if no bit in the range is set or if either bound is
    /// `>= NUM_BITS`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{ClosedRange, StaticBitVector, word_count};
    ///
    /// let vector = StaticBitVector::<24, { word_count::<u8>(24) }, u8>::from_ones_iter([2, 20]);
    /// assert_eq!(vector.find_least_significant_bit_index_with_range(ClosedRange::new(3usize, 23)), Some(20));
    /// assert_eq!(vector.find_least_significant_bit_index_with_range(ClosedRange::new(3usize, 19)), None);
    /// assert_eq!(vector.find_least_significant_bit_index_with_range(ClosedRange::new(3usize, 24)), None);
    /// ```
    pub fn find_least_significant_bit_index_with_range<B: Word>(
        &self,
        range: ClosedRange<B>,
    ) -> Option<usize> {
        match self.window(range)? {
            Window::Single { word, bits } => (!bits.is_empty())
                .then(|| Self::absolute_index(word, bits.least_significant_bit_index())),
            Window::Span {
                first,
                head,
                last,
                tail,
            } => {
                if !head.is_empty() {
                    return Some(Self::absolute_index(first, head.least_significant_bit_index()));
                }
                for index in first + 1..last {
                    let word = self.words[index];
                    if !word.is_empty() {
                        return Some(Self::absolute_index(index, word.least_significant_bit_index()));
                    }
                }
                (!tail.is_empty())
                    .then(|| Self::absolute_index(last, tail.least_significant_bit_index()))
            }
        }
    }

    /// Returns the index of the most significant set bit within `range`.
    ///
    /// Returns `None` if no bit in the range is set or if either bound is
    /// `>= NUM_BITS`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::{ClosedRange, StaticBitVector, word_count};
    ///
    /// let vector = StaticBitVector::<24, { word_count::<u8>(24) }, u8>::from_ones_iter([2, 20]);
    /// assert_eq!(vector.find_most_significant_bit_index_with_range(ClosedRange::new(0usize, 19)), Some(2));
    /// assert_eq!(vector.find_most_significant_bit_index_with_range(ClosedRange::new(3usize, 19)), None);
    /// ```
    pub fn find_most_significant_bit_index_with_range<B: Word>(
        &self,
        range: ClosedRange<B>,
    ) -> Option<usize> {
        match self.window(range)? {
            Window::Single { word, bits } => (!bits.is_empty())
                .then(|| Self::absolute_index(word, bits.most_significant_bit_index())),
            Window::Span {
                first,
                head,
                last,
                tail,
            } => {
                if !tail.is_empty() {
                    return Some(Self::absolute_index(last, tail.most_significant_bit_index()));
                }
                for index in (first + 1..last).rev() {
                    let word = self.words[index];
                    if !word.is_empty() {
                        return Some(Self::absolute_index(index, word.most_significant_bit_index()));
                    }
                }
                (!head.is_empty())
                    .then(|| Self::absolute_index(first, head.most_significant_bit_index()))
            }
        }
    }
}

impl<const NUM_BITS: usize, const NUM_WORDS: usize, W: Word> Default
    for StaticBitVector<NUM_BITS, NUM_WORDS, W>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const NUM_BITS: usize, const NUM_WORDS: usize, W: Word> Debug
    for StaticBitVector<NUM_BITS, NUM_WORDS, W>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for index in 0..NUM_BITS {
            if index % W::BITS == 0 {
                write!(f, "{index}: ")?;
            }
            write!(f, "{}", self.get_bit(index))?;
            if index % W::BITS == W::BITS - 1 && index < NUM_BITS - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

/// Iterator over the indices of set bits in a [`StaticBitVector`].
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`StaticBitVector::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'vector, W: Word> {
    words: &'vector [BitOptions<W>],
    word_idx: usize,
    current: W,
}

impl<W: Word> Iterator for IterOnes<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.words.len() {
            if self.current != W::ZERO {
                let offset = BitOptions::from_raw(self.current).least_significant_bit_index();
                self.current = self.current & (self.current - W::ONE); // clear LSB
                return Some(self.word_idx * W::BITS + offset as usize);
            }

            self.word_idx += 1;
            self.current = self.words.get(self.word_idx).map_or(W::ZERO, BitOptions::flatten);
        }
        None
    }
}

impl<W: Word> FusedIterator for IterOnes<'_, W> {}
