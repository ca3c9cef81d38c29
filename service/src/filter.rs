//! Filtering of [`Person`]s by their [`Name`].
//!
//! [`Name`]: crate::domain::person::Name

use derive_more::{AsRef, Display};
use strum::{Display as StrumDisplay, EnumString};

use crate::domain::Person;

/// Search query to match [`Person`]s' names against.
///
/// Always lowercased and never empty.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Query(String);

impl Query {
    /// Creates a new [`Query`] out of the given user `input`.
    ///
    /// [`None`] is returned for an empty `input`, meaning no filtering.
    #[must_use]
    pub fn new(input: impl AsRef<str>) -> Option<Self> {
        let input = input.as_ref();
        (!input.is_empty()).then(|| Self(input.to_lowercase()))
    }

    /// Returns this [`Query`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Policy of matching a [`Query`] against a [`Person`]'s name.
///
/// Both policies ignore letter case.
#[derive(
    Clone, Copy, Debug, Default, EnumString, Eq, Hash, PartialEq, StrumDisplay,
)]
#[strum(serialize_all = "snake_case")]
pub enum Policy {
    /// Name contains the [`Query`] as a contiguous part.
    ///
    /// `"Anna Lee"` matches `"lee"`, but not `"al"`.
    #[default]
    Substring,

    /// Name contains all the [`Query`] characters in the same order, not
    /// necessarily next to each other.
    ///
    /// `"Anna Lee"` matches both `"lee"` and `"al"`.
    Subsequence,
}

impl Policy {
    /// Checks whether the given `name` matches the provided [`Query`].
    #[must_use]
    pub fn matches(self, name: &str, query: &Query) -> bool {
        let name = name.to_lowercase();
        match self {
            Self::Substring => name.contains(query.as_str()),
            Self::Subsequence => {
                let mut rest = name.chars();
                query.as_str().chars().all(|c| rest.any(|n| n == c))
            }
        }
    }
}

/// Checks whether the provided [`Person`] matches the [`Query`].
#[must_use]
pub fn matches(person: &Person, query: &Query, policy: Policy) -> bool {
    policy.matches(&person.name.to_string(), query)
}

/// Selects [`Person`]s matching the provided [`Query`], preserving their
/// order.
///
/// All the `people` are selected if there is no [`Query`].
#[must_use]
pub fn select<'p>(
    people: &'p [Person],
    query: Option<&Query>,
    policy: Policy,
) -> Vec<&'p Person> {
    match query {
        Some(q) => people.iter().filter(|p| matches(p, q, policy)).collect(),
        None => people.iter().collect(),
    }
}
