use std::{
    io::{self, BufRead as _},
    path::PathBuf,
    process::ExitCode,
    sync::OnceLock,
};

use application::{data, input, Args, Config, Input, Service};
use service::{
    command::{Dispatch, Start},
    infra::Html,
    query,
    view::{Presentation, View},
    Command as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        data: source,
        filter,
        output,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let people = data::load(&source.path).map_err(|e| {
        log::error!("failed to load people from `{}`: {e}", source.path);
    })?;

    let service = Service::new(
        filter.into(),
        people,
        Html::new(output.path.map(PathBuf::from)),
    );
    if let Some(target) = service.renderer().target() {
        log::info!("rendering into `{}`", target.display());
    }

    let mut view = service.execute(Start).map_err(|e| {
        log::error!("failed to show people directory: {e}");
    })?;
    trace_shown(&service, &view);

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| {
            log::error!("failed to read input: {e}");
        })?;

        let event = match line.parse::<Input>() {
            Ok(Input::Event(ev)) => ev,
            Ok(Input::Quit) => break,
            Err(e) => {
                log::warn!("skipping `{line}`: {e}");
                continue;
            }
        };

        if let Err(e) = input::check(&service, &view, &event) {
            log::warn!("skipping `{line}`: {e}");
            continue;
        }

        view = service
            .execute(Dispatch {
                view: view.clone(),
                event,
            })
            .map_err(|e| {
                log::error!("failed to show people directory: {e}");
            })?;
        trace_shown(&service, &view);
    }

    Ok(())
}

/// Logs which page of the people directory the [`View`] shows.
fn trace_shown(service: &Service, view: &View) {
    let presentation = service
        .execute(query::Visible::of(view.clone()))
        .unwrap_or_else(|e| match e {});
    match &presentation {
        Presentation::Page { records, .. } => log::debug!(
            "showing {} people on page {} of {}",
            records.people.len(),
            records.page.label(),
            presentation.indicators().len(),
        ),
        Presentation::NoResults { .. } => {
            log::debug!("showing no results");
        }
    }
}
