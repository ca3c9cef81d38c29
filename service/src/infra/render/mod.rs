//! [`Renderer`]-related implementations.

#[cfg(feature = "html")]
pub mod html;

use common::pagination::Index;
use derive_more::{Display, Error as StdError, From};

#[cfg(doc)]
use common::{operations::Show, pagination::Indicators};

use crate::domain::Person;

#[cfg(feature = "html")]
pub use self::html::Html;

/// Rendering operation.
///
/// Every [`Renderer`] is expected to [`Show`]:
/// - [`Records`] in place of the currently shown list;
/// - [`Indicators`] in place of the current pagination controls;
/// - [`NoResults`] in place of the currently shown list;
/// - the [`SearchBar`].
pub use common::Handler as Renderer;

/// [`Renderer`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "html")]
    /// [`Html`] error.
    Html(html::Error),
}

/// [`Person`]s shown on a page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Records {
    /// [`Index`] of the shown page.
    pub page: Index,

    /// [`Person`]s on the page.
    pub people: Vec<Person>,
}

/// Indicator of nothing matching the search query.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoResults;

impl NoResults {
    /// Message shown instead of an empty list.
    pub const MESSAGE: &'static str = "No results found";
}

/// Search bar to look for people by name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchBar;

impl SearchBar {
    /// Placeholder of the search input.
    pub const PLACEHOLDER: &'static str = "Search by name...";
}
