//! [`Command`] definition.

pub mod dispatch;
pub mod start;

use common::{operations::Show, pagination::Indicators};
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::render::{self, NoResults, Records, Renderer},
    view::Presentation,
    Service,
};

/// [`Command`] of the [`Service`].
pub use common::Handler as Command;

pub use self::{dispatch::Dispatch, start::Start};

impl<R> Service<R>
where
    R: Renderer<Show<Records>, Ok = (), Err = Traced<render::Error>>
        + Renderer<Show<Indicators>, Ok = (), Err = Traced<render::Error>>
        + Renderer<Show<NoResults>, Ok = (), Err = Traced<render::Error>>,
{
    /// Hands the provided [`Presentation`] to the [`Renderer`].
    fn show(
        &self,
        presentation: Presentation,
    ) -> Result<(), Traced<render::Error>> {
        match presentation {
            Presentation::Page {
                records,
                indicators,
            } => {
                log::debug!(
                    "showing {} people on page {} of {}",
                    records.people.len(),
                    records.page.label(),
                    indicators.len(),
                );
                self.renderer()
                    .execute(Show(records))
                    .map_err(tracerr::wrap!())?;
                self.renderer()
                    .execute(Show(indicators))
                    .map_err(tracerr::wrap!())
            }
            Presentation::NoResults { indicators } => {
                self.renderer()
                    .execute(Show(NoResults))
                    .map_err(tracerr::wrap!())?;
                self.renderer()
                    .execute(Show(indicators))
                    .map_err(tracerr::wrap!())
            }
        }
    }
}
