//! User [`Input`] definitions.

use std::str::FromStr;

use common::pagination::{Label, ParseLabelError};
use derive_more::{Display, Error, From};
use service::{
    query,
    view::{Event, PageCount, View},
    Query as _,
};

/// Single line of user input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// [`Event`] to dispatch.
    Event(Event),

    /// Request to stop.
    Quit,
}

impl FromStr for Input {
    type Err = ParseError;

    /// Parses one of:
    /// - `page <N>` clicking the page indicator labeled `N`;
    /// - `type <text>` editing the search input to `text`;
    /// - `search <text>` submitting the search input with `text`;
    /// - `quit` or `exit`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        Ok(match command {
            "page" => Self::Event(Event::PageSelected(arg.parse()?)),
            "type" => Self::Event(Event::QueryChanged(arg.to_owned())),
            "search" => Self::Event(Event::QuerySubmitted(arg.to_owned())),
            "quit" | "exit" => Self::Quit,
            "" => return Err(ParseError::Empty),
            other => {
                return Err(ParseError::UnknownCommand(other.to_owned()));
            }
        })
    }
}

/// Error of parsing an [`Input`].
#[derive(Clone, Debug, Display, Error, From)]
pub enum ParseError {
    /// Line is empty.
    #[display("empty input")]
    #[from(ignore)]
    Empty,

    /// Line starts with an unknown command.
    #[display("unknown command `{_0}`")]
    #[from(ignore)]
    UnknownCommand(#[error(not(source))] String),

    /// Page number is invalid.
    #[display("invalid page: {_0}")]
    Page(ParseLabelError),
}

/// Checks whether the provided [`Event`] may be dispatched in the [`View`].
///
/// Only the shown page indicators can be clicked, so a [`Label`] past the
/// [`View`]'s page count is rejected.
///
/// # Errors
///
/// Errors if the [`Event`] selects a non-existent page.
pub fn check<R>(
    service: &service::Service<R>,
    view: &View,
    event: &Event,
) -> Result<(), NoSuchPage> {
    let Event::PageSelected(label) = event else {
        return Ok(());
    };

    let count = service
        .execute(query::PageCount::of(view.clone()))
        .unwrap_or_else(|e| match e {});
    if label.get() > usize::from(count) {
        return Err(NoSuchPage {
            label: *label,
            count,
        });
    }

    Ok(())
}

/// Error of selecting a page the [`View`] doesn't have.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("there is no page {label}, only {count}")]
pub struct NoSuchPage {
    /// [`Label`] of the selected page.
    pub label: Label,

    /// Number of pages in the [`View`].
    pub count: PageCount,
}

#[cfg(test)]
mod spec {
    use common::pagination::Label;
    use service::{
        domain::{person::Name, Person},
        filter::Policy,
        infra::Html,
        view::{Event, View},
        Config,
    };

    use crate::Service;

    use super::{check, Input, NoSuchPage, ParseError};

    fn service(len: usize) -> Service {
        let people = (0..len)
            .map(|i| Person {
                name: Name::new(
                    if i % 2 == 0 { "Anna" } else { "Bob" },
                    format!("N{i}"),
                ),
                ..Person::default()
            })
            .collect();
        Service::new(
            Config {
                policy: Policy::Substring,
            },
            people,
            Html::default(),
        )
    }

    fn page(n: usize) -> Event {
        Event::PageSelected(Label::new(n).unwrap())
    }

    #[test]
    fn parses_page_selection() {
        assert_eq!(
            "page 2".parse::<Input>().unwrap(),
            Input::Event(Event::PageSelected(Label::new(2).unwrap())),
        );
        assert!(matches!(
            "page 0".parse::<Input>(),
            Err(ParseError::Page(_)),
        ));
        assert!(matches!("page".parse::<Input>(), Err(ParseError::Page(_))));
    }

    #[test]
    fn keeps_search_text_verbatim() {
        assert_eq!(
            "type Anna Lee\n".parse::<Input>().unwrap(),
            Input::Event(Event::QueryChanged("Anna Lee".into())),
        );
        assert_eq!(
            "search  lee ".parse::<Input>().unwrap(),
            Input::Event(Event::QuerySubmitted(" lee ".into())),
        );
        assert_eq!(
            "type".parse::<Input>().unwrap(),
            Input::Event(Event::QueryChanged(String::new())),
        );
    }

    #[test]
    fn parses_quit() {
        assert_eq!("quit".parse::<Input>().unwrap(), Input::Quit);
        assert_eq!("exit\r\n".parse::<Input>().unwrap(), Input::Quit);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("".parse::<Input>(), Err(ParseError::Empty)));
        assert!(matches!(
            "jump 3".parse::<Input>(),
            Err(ParseError::UnknownCommand(c)) if c == "jump",
        ));
    }

    #[test]
    fn checks_page_against_everyone() {
        let service = service(20);
        let view = View::default();

        assert!(check(&service, &view, &page(1)).is_ok());
        assert!(check(&service, &view, &page(3)).is_ok());
        assert!(matches!(
            check(&service, &view, &page(4)),
            Err(NoSuchPage { count, .. }) if usize::from(count) == 3,
        ));
    }

    #[test]
    fn checks_page_against_filtered() {
        let service = service(20);
        let view = View::default().apply(Event::QueryChanged("bob".into()));

        assert!(check(&service, &view, &page(2)).is_ok());
        assert!(check(&service, &view, &page(3)).is_err());
    }

    #[test]
    fn rejects_any_page_without_results() {
        let service = service(20);
        let view = View::default().apply(Event::QuerySubmitted("zed".into()));

        let err = check(&service, &view, &page(1)).unwrap_err();
        assert_eq!(err.to_string(), "there is no page 1, only 0");
    }

    #[test]
    fn passes_search_events() {
        let service = service(0);
        let view = View::default();

        let typed = Event::QueryChanged("a".into());
        let cleared = Event::QuerySubmitted(String::new());

        assert!(check(&service, &view, &typed).is_ok());
        assert!(check(&service, &view, &cleared).is_ok());
    }
}
