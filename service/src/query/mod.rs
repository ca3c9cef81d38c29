//! [`Query`] definition.

use std::convert::Infallible;

use common::operations::By;

use crate::{
    view::{self, Presentation, View},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] selecting a `T`ype out of a [`View`].
#[derive(Clone, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct ViewQuery<T>(T);

impl<W> ViewQuery<By<W, View>> {
    /// Creates a new [`ViewQuery`] selecting a `W` of the provided [`View`].
    #[must_use]
    pub fn of(view: View) -> Self {
        Self(By::new(view))
    }
}

/// Queries the [`Presentation`] of a [`View`] without rendering it.
pub type Visible = ViewQuery<By<Presentation, View>>;

/// Queries the number of pages in a [`View`].
pub type PageCount = ViewQuery<By<view::PageCount, View>>;

impl<R> Query<Visible> for Service<R> {
    type Ok = Presentation;
    type Err = Infallible;

    fn execute(
        &self,
        ViewQuery(by): Visible,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(by.into_inner().present(self.people(), self.config().policy))
    }
}

impl<R> Query<PageCount> for Service<R> {
    type Ok = view::PageCount;
    type Err = Infallible;

    fn execute(
        &self,
        ViewQuery(by): PageCount,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(by.into_inner().page_count(self.people(), self.config().policy))
    }
}
