//! [`Command`] for showing the people directory for the first time.

use common::{operations::Show, pagination::Indicators};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::render::{self, NoResults, Records, Renderer, SearchBar},
    view::View,
    Service,
};

use super::Command;

/// [`Command`] for showing the people directory for the first time.
///
/// Renders the search bar and the first page of everyone.
#[derive(Clone, Copy, Debug, Default)]
pub struct Start;

impl<R> Command<Start> for Service<R>
where
    R: Renderer<Show<Records>, Ok = (), Err = Traced<render::Error>>
        + Renderer<Show<Indicators>, Ok = (), Err = Traced<render::Error>>
        + Renderer<Show<NoResults>, Ok = (), Err = Traced<render::Error>>
        + Renderer<Show<SearchBar>, Ok = (), Err = Traced<render::Error>>,
{
    type Ok = View;
    type Err = Traced<ExecutionError>;

    fn execute(&self, _: Start) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        log::info!(
            "starting directory of {} people with `{}` matching",
            self.people().len(),
            self.config().policy,
        );

        self.renderer()
            .execute(Show(SearchBar))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let view = View::default();
        self.show(view.present(self.people(), self.config().policy))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(view)
    }
}

/// Error of [`Start`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Renderer`] error.
    #[display("`Renderer` operation failed: {_0}")]
    Render(render::Error),
}
