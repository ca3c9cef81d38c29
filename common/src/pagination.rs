//! Abstractions for page-based pagination.

use std::{
    fmt,
    num::{NonZeroUsize, ParseIntError},
    ops::Range,
    str::FromStr,
};

use derive_more::{Display, Error, From, Into};

/// Number of items shown on a single [`Page`].
pub const PAGE_SIZE: usize = 9;

/// Returns the number of [`Page`]s required to show `len` items.
#[must_use]
pub const fn count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Zero-based index of a [`Page`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Index(usize);

impl Index {
    /// [`Index`] of the first [`Page`].
    pub const FIRST: Self = Self(0);

    /// Creates a new [`Index`].
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw value of this [`Index`].
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the [`Label`] shown for this [`Index`].
    #[must_use]
    pub const fn label(self) -> Label {
        Label(NonZeroUsize::MIN.saturating_add(self.0))
    }

    /// Returns the range of items covered by this [`Index`] in a list of
    /// `len` items.
    ///
    /// The range is clipped to the list bounds, so an out-of-range [`Index`]
    /// results in an empty range.
    #[must_use]
    pub fn bounds(self, len: usize) -> Range<usize> {
        let start = self.0.saturating_mul(PAGE_SIZE).min(len);
        let end = start.saturating_add(PAGE_SIZE).min(len);
        start..end
    }
}

/// One-based label of a [`Page`], as shown on its [`Indicator`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Label(NonZeroUsize);

impl Label {
    /// Creates a new [`Label`] if the given `label` is not zero.
    #[must_use]
    pub const fn new(label: usize) -> Option<Self> {
        match NonZeroUsize::new(label) {
            Some(l) => Some(Self(l)),
            None => None,
        }
    }

    /// Returns the raw value of this [`Label`].
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the [`Index`] of the [`Page`] this [`Label`] is shown for.
    #[must_use]
    pub const fn index(self) -> Index {
        Index(self.0.get() - 1)
    }
}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().parse()?).ok_or(ParseLabelError::Zero)
    }
}

/// Error of parsing a [`Label`] from a string.
#[derive(Clone, Debug, Display, Error, From)]
pub enum ParseLabelError {
    /// String is not a number.
    #[display("not a page number: {_0}")]
    Int(ParseIntError),

    /// Pages are labeled starting from `1`.
    #[display("page numbers start from 1")]
    #[from(ignore)]
    Zero,
}

/// Page of items.
pub struct Page<'a, T> {
    /// [`Index`] of this [`Page`].
    pub index: Index,

    /// Items on this [`Page`].
    pub items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    /// Returns the [`Page`] of the provided `items` at the given [`Index`].
    ///
    /// An out-of-range [`Index`] gives an empty [`Page`].
    #[must_use]
    pub fn of(items: &'a [T], index: Index) -> Self {
        Self {
            index,
            items: &items[index.bounds(items.len())],
        }
    }
}

impl<T> Copy for Page<'_, T> {}
impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: fmt::Debug> fmt::Debug for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("index", &self.index)
            .field("items", &self.items)
            .finish()
    }
}

/// Clickable control selecting a [`Page`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Indicator {
    /// [`Label`] shown on this [`Indicator`].
    pub label: Label,

    /// Indicator whether this [`Indicator`]'s [`Page`] is the shown one.
    pub active: bool,
}

/// [`Indicator`]s of all the [`Page`]s of a list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Indicators(Vec<Indicator>);

impl Indicators {
    /// Creates [`Indicator`]s for a list of `len` items, marking the one at
    /// the `active` [`Index`].
    ///
    /// No [`Indicator`] is active if the `active` [`Index`] is out of range.
    #[must_use]
    pub fn new(len: usize, active: Index) -> Self {
        Self(
            (0..count(len))
                .map(|i| Indicator {
                    label: Index(i).label(),
                    active: i == active.0,
                })
                .collect(),
        )
    }

    /// Returns an iterator over these [`Indicators`].
    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.0.iter()
    }

    /// Returns the number of [`Indicator`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether there are no [`Indicator`]s at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the [`Label`] of the active [`Indicator`], if any.
    #[must_use]
    pub fn active(&self) -> Option<Label> {
        self.0.iter().find(|i| i.active).map(|i| i.label)
    }
}

impl<'a> IntoIterator for &'a Indicators {
    type Item = &'a Indicator;
    type IntoIter = std::slice::Iter<'a, Indicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
