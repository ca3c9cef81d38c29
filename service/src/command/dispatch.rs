//! [`Command`] for dispatching user input [`Event`]s.

use common::{operations::Show, pagination::Indicators};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    filter::Query,
    infra::render::{self, NoResults, Records, Renderer},
    view::{Event, Presentation, View},
    Service,
};

use super::Command;

/// [`Command`] for dispatching a user input [`Event`] upon the current
/// [`View`].
///
/// Renders the resulting [`View`] and returns it.
#[derive(Clone, Debug)]
pub struct Dispatch {
    /// Currently shown [`View`].
    pub view: View,

    /// [`Event`] to apply to the [`View`].
    pub event: Event,
}

impl<R> Command<Dispatch> for Service<R>
where
    R: Renderer<Show<Records>, Ok = (), Err = Traced<render::Error>>
        + Renderer<Show<Indicators>, Ok = (), Err = Traced<render::Error>>
        + Renderer<Show<NoResults>, Ok = (), Err = Traced<render::Error>>,
{
    type Ok = View;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: Dispatch) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Dispatch { view, event } = cmd;

        log::debug!("applying {event:?} to {view:?}");
        let (view, presentation) =
            view.step(event, self.people(), self.config().policy);

        if let Presentation::NoResults { .. } = presentation {
            log::info!(
                "nobody matches `{}`",
                view.query().map(Query::as_str).unwrap_or_default(),
            );
        }
        self.show(presentation)
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(view)
    }
}

/// Error of [`Dispatch`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Renderer`] error.
    #[display("`Renderer` operation failed: {_0}")]
    Render(render::Error),
}
