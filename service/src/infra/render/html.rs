//! HTML document [`Renderer`] implementation.

use std::{
    cell::RefCell,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use common::{operations::Show, pagination::Indicators};
use derive_more::{Display, Error as StdError};
use itertools::Itertools as _;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Person,
    infra::render::{self, NoResults, Records, Renderer, SearchBar},
};

/// [`Renderer`] keeping an HTML [`Document`] of the people directory.
///
/// Once a target file is provided, the whole [`Document`] is written into it
/// after every change.
#[derive(Debug, Default)]
pub struct Html {
    /// Path to the file the [`Document`] is written to.
    target: Option<PathBuf>,

    /// Rendered [`Document`].
    document: RefCell<Document>,
}

impl Html {
    /// Creates a new [`Html`] renderer writing into the provided `target`
    /// file (if any).
    #[must_use]
    pub fn new(target: Option<PathBuf>) -> Self {
        Self {
            target,
            document: RefCell::default(),
        }
    }

    /// Returns the path to the file this [`Html`] renderer writes into.
    #[must_use]
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Returns a snapshot of the currently rendered [`Document`].
    #[must_use]
    pub fn document(&self) -> Document {
        self.document.borrow().clone()
    }

    /// Replaces a region of the [`Document`] and writes it to the target
    /// file (if any).
    fn update(
        &self,
        region: impl FnOnce(&mut Document) -> &mut String,
        markup: String,
    ) -> Result<(), Traced<render::Error>> {
        *region(&mut *self.document.borrow_mut()) = markup;

        let Some(target) = &self.target else {
            return Ok(());
        };
        fs::write(target, self.document.borrow().to_string())
            .map_err(Error::Write)
            .map_err(tracerr::from_and_wrap!(=> render::Error))?;
        log::trace!("written HTML document to `{}`", target.display());

        Ok(())
    }
}

impl Renderer<Show<Records>> for Html {
    type Ok = ();
    type Err = Traced<render::Error>;

    fn execute(
        &self,
        Show(records): Show<Records>,
    ) -> Result<Self::Ok, Self::Err> {
        let markup = records
            .people
            .iter()
            .format_with("", |p, f| f(&Student(p)))
            .to_string();
        self.update(|d| &mut d.students, markup)
    }
}

impl Renderer<Show<NoResults>> for Html {
    type Ok = ();
    type Err = Traced<render::Error>;

    fn execute(&self, _: Show<NoResults>) -> Result<Self::Ok, Self::Err> {
        let markup = format!(
            "<h3 class=\"error-message\">{}</h3>",
            NoResults::MESSAGE,
        );
        self.update(|d| &mut d.students, markup)
    }
}

impl Renderer<Show<Indicators>> for Html {
    type Ok = ();
    type Err = Traced<render::Error>;

    fn execute(
        &self,
        Show(indicators): Show<Indicators>,
    ) -> Result<Self::Ok, Self::Err> {
        let markup = indicators
            .iter()
            .format_with("", |i, f| {
                f(&format_args!(
                    "<li><button type=\"button\"{}>{}</button></li>",
                    if i.active { " class=\"active\"" } else { "" },
                    i.label,
                ))
            })
            .to_string();
        self.update(|d| &mut d.links, markup)
    }
}

impl Renderer<Show<SearchBar>> for Html {
    type Ok = ();
    type Err = Traced<render::Error>;

    fn execute(&self, _: Show<SearchBar>) -> Result<Self::Ok, Self::Err> {
        let markup = format!(
            "<label for=\"search\" class=\"student-search\">\
                <span>Search by name</span>\
                <input id=\"search\" placeholder=\"{}\">\
                <button type=\"button\">\
                    <img src=\"img/icn-search.svg\" alt=\"Search icon\">\
                </button>\
             </label>",
            SearchBar::PLACEHOLDER,
        );
        self.update(|d| &mut d.search_bar, markup)
    }
}

/// Rendered HTML document of the people directory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Document {
    /// Markup of the search bar in the page header.
    pub search_bar: String,

    /// Markup inside the students list.
    pub students: String,

    /// Markup inside the pagination links list.
    pub links: String,
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            search_bar,
            students,
            links,
        } = self;

        write!(
            f,
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>Students</title>\n\
             <link rel=\"stylesheet\" href=\"css/styles.css\">\n\
             </head>\n\
             <body>\n\
             <div class=\"page\">\n\
             <header class=\"header\">\n\
             <h2>STUDENTS</h2>{search_bar}\n\
             </header>\n\
             <ul class=\"student-list\">{students}</ul>\n\
             <div class=\"pagination\">\n\
             <ul class=\"link-list\">{links}</ul>\n\
             </div>\n\
             </div>\n\
             </body>\n\
             </html>\n",
        )
    }
}

/// [`Html`] renderer error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Failed to write the [`Document`] into the target file.
    #[display("Failed to write HTML document: {_0}")]
    Write(io::Error),
}

/// List item markup of a single [`Person`].
struct Student<'a>(&'a Person);

impl Display for Student<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Person {
            name,
            email,
            picture,
            registered,
        } = self.0;

        write!(
            f,
            "<li class=\"student-item cf\">\
                <div class=\"student-details\">\
                    <img class=\"avatar\" src=\"{}\" alt=\"Profile Picture\">\
                    <h3>{}</h3>\
                    <span class=\"email\">{}</span>\
                </div>\
                <div class=\"joined-details\">\
                    <span class=\"date\">Joined {}</span>\
                </div>\
             </li>",
            Escaped(&picture.large),
            Escaped(&name.to_string()),
            Escaped(email.as_ref()),
            Escaped(&registered.date),
        )
    }
}

/// Text escaped for embedding into HTML markup.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}
