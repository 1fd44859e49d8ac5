use crate::word::Word;
use core::fmt;
use core::ops::RangeInclusive;

/// An inclusive interval `[lower, upper]` over an unsigned integer type.
///
/// `lower <= upper` holds for every value of this type: [`new`] panics and
/// [`try_new`] returns an error otherwise.
///
/// # Examples
/// ```
/// use tinker_bits::ClosedRange;
///
/// let range = ClosedRange::new(5usize, 12);
/// assert_eq!(range.length(), 8);
/// assert!(range.contains(12));
/// assert!(!range.contains(13));
/// ```
///
/// [`new`]: ClosedRange::new
/// [`try_new`]: ClosedRange::try_new
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedRange<B: Word = usize> {
    lower: B,
    upper: B,
}

impl<B: Word> ClosedRange<B> {
    /// Creates a closed range with the given bounds.
    ///
    /// # Panics
    /// Panics if `lower > upper`.
    #[inline]
    pub fn new(lower: B, upper: B) -> Self {
        assert!(lower <= upper, "The given bounds are invalid.");
        Self { lower, upper }
    }

    /// Creates a closed range with the given bounds, or returns an error if
    /// `lower > upper`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::ClosedRange;
    ///
    /// assert!(ClosedRange::try_new(3u8, 3).is_ok());
    /// assert!(ClosedRange::try_new(4u8, 3).is_err());
    /// ```
    #[inline]
    pub fn try_new(lower: B, upper: B) -> Result<Self, InvalidRangeError<B>> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(InvalidRangeError { lower, upper })
        }
    }

    /// Creates a closed range that starts at `start` and covers `length`
    /// elements.
    ///
    /// # Panics
    /// Panics if `length` is zero or if the upper bound overflows `B`.
    ///
    /// # Examples
    /// ```
    /// use tinker_bits::ClosedRange;
    ///
    /// let range = ClosedRange::with_length(4u32, 3);
    /// assert_eq!((range.lower(), range.upper()), (4, 6));
    /// ```
    pub fn with_length(start: B, length: B) -> Self {
        assert!(length != B::ZERO, "A closed range covers at least one element.");
        let Some(upper) = start.checked_add(length - B::ONE) else {
            panic!("A range of {length} elements starting at {start} overflows its bound type.");
        };
        Self { lower: start, upper }
    }

    /// The lower bound.
    #[inline]
    pub fn lower(&self) -> B {
        self.lower
    }

    /// The upper bound.
    #[inline]
    pub fn upper(&self) -> B {
        self.upper
    }

    /// Number of elements in the range, `upper - lower + 1`.
    ///
    /// Overflows (and panics in debug builds) if the range spans the whole
    /// domain of `B`.
    #[inline]
    pub fn length(&self) -> B {
        self.upper - self.lower + B::ONE
    }

    /// Returns `true` if `value` lies within the range.
    #[inline]
    pub fn contains(&self, value: B) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl<B: Word> fmt::Display for ClosedRange<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<B: Word> TryFrom<RangeInclusive<B>> for ClosedRange<B> {
    type Error = InvalidRangeError<B>;

    fn try_from(range: RangeInclusive<B>) -> Result<Self, Self::Error> {
        let (lower, upper) = range.into_inner();
        Self::try_new(lower, upper)
    }
}

impl<B: Word> From<ClosedRange<B>> for RangeInclusive<B> {
    fn from(range: ClosedRange<B>) -> Self {
        range.lower..=range.upper
    }
}

/// Error returned when building a [`ClosedRange`] whose lower bound exceeds
/// its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError<B: Word> {
    /// The rejected lower bound.
    pub lower: B,
    /// The rejected upper bound.
    pub upper: B,
}

impl<B: Word> fmt::Display for InvalidRangeError<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lower bound {} exceeds upper bound {}",
            self.lower, self.upper
        )
    }
}

impl<B: Word> core::error::Error for InvalidRangeError<B> {}
