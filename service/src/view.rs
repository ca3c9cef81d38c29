//! [`View`] state machine of the people directory.

use common::pagination::{self, Index, Indicators, Label, Page};
use derive_more::{Display, From, Into};

use crate::{
    domain::Person,
    filter::{self, Policy, Query},
    infra::render::Records,
};

/// What the people directory currently shows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum View {
    /// All the [`Person`]s are listed.
    Unfiltered {
        /// [`Index`] of the shown page.
        page: Index,
    },

    /// Only the [`Person`]s matching the [`Query`] are listed.
    Filtered {
        /// [`Query`] the listed [`Person`]s match.
        query: Query,

        /// [`Index`] of the shown page.
        page: Index,
    },
}

impl Default for View {
    fn default() -> Self {
        Self::Unfiltered { page: Index::FIRST }
    }
}

impl View {
    /// Returns the [`Index`] of the page shown in this [`View`].
    #[must_use]
    pub fn page(&self) -> Index {
        match self {
            Self::Unfiltered { page } | Self::Filtered { page, .. } => *page,
        }
    }

    /// Returns the [`Query`] of this [`View`], if it's filtered.
    #[must_use]
    pub fn query(&self) -> Option<&Query> {
        match self {
            Self::Unfiltered { .. } => None,
            Self::Filtered { query, .. } => Some(query),
        }
    }

    /// Applies the provided [`Event`] to this [`View`], returning the next
    /// one.
    ///
    /// Any change of the search input resets the page to the first one.
    #[must_use]
    pub fn apply(self, event: Event) -> Self {
        match event {
            Event::PageSelected(label) => {
                let page = label.index();
                match self {
                    Self::Unfiltered { .. } => Self::Unfiltered { page },
                    Self::Filtered { query, .. } => {
                        Self::Filtered { query, page }
                    }
                }
            }
            Event::QueryChanged(input) | Event::QuerySubmitted(input) => {
                Query::new(input).map_or_else(Self::default, |query| {
                    Self::Filtered {
                        query,
                        page: Index::FIRST,
                    }
                })
            }
        }
    }

    /// Returns the [`Presentation`] of this [`View`] over the provided
    /// `people`.
    #[must_use]
    pub fn present(&self, people: &[Person], policy: Policy) -> Presentation {
        let matching = filter::select(people, self.query(), policy);
        let indicators = Indicators::new(matching.len(), self.page());

        if matching.is_empty() && self.query().is_some() {
            return Presentation::NoResults { indicators };
        }

        let page = Page::of(&matching, self.page());
        Presentation::Page {
            records: Records {
                page: page.index,
                people: page.items.iter().map(|&p| p.clone()).collect(),
            },
            indicators,
        }
    }

    /// Applies the provided [`Event`] and presents the resulting [`View`].
    #[must_use]
    pub fn step(
        self,
        event: Event,
        people: &[Person],
        policy: Policy,
    ) -> (Self, Presentation) {
        let next = self.apply(event);
        let presentation = next.present(people, policy);
        (next, presentation)
    }

    /// Returns the [`PageCount`] of this [`View`] over the provided `people`.
    #[must_use]
    pub fn page_count(&self, people: &[Person], policy: Policy) -> PageCount {
        let matching = filter::select(people, self.query(), policy);
        PageCount(pagination::count(matching.len()))
    }
}

/// User input changing a [`View`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// Page indicator with the [`Label`] has been clicked.
    PageSelected(Label),

    /// Search input has been edited.
    QueryChanged(String),

    /// Search input has been submitted.
    QuerySubmitted(String),
}

/// Request to render a [`View`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Presentation {
    /// Page of [`Person`]s along with pagination controls.
    Page {
        /// [`Person`]s on the shown page.
        records: Records,

        /// Pagination controls.
        indicators: Indicators,
    },

    /// Nothing matches the search query.
    NoResults {
        /// Pagination controls (always empty).
        indicators: Indicators,
    },
}

impl Presentation {
    /// Returns pagination [`Indicators`] of this [`Presentation`].
    #[must_use]
    pub fn indicators(&self) -> &Indicators {
        match self {
            Self::Page { indicators, .. } | Self::NoResults { indicators } => {
                indicators
            }
        }
    }
}

/// Number of pages in a [`View`].
#[derive(Clone, Copy, Debug, Display, Eq, From, Into, PartialEq)]
pub struct PageCount(usize);

#[cfg(test)]
mod spec {
    use common::pagination::{Index, Label};

    use crate::{
        domain::{person::Name, Person},
        filter::{Policy, Query},
    };

    use super::{Event, PageCount, Presentation, View};

    fn people(len: usize) -> Vec<Person> {
        (0..len)
            .map(|i| Person {
                name: Name::new(
                    if i % 2 == 0 { "Anna" } else { "Bob" },
                    format!("N{i}"),
                ),
                ..Person::default()
            })
            .collect()
    }

    fn label(n: usize) -> Label {
        Label::new(n).unwrap()
    }

    fn names(presentation: &Presentation) -> Vec<String> {
        match presentation {
            Presentation::Page { records, .. } => {
                records.people.iter().map(|p| p.name.to_string()).collect()
            }
            Presentation::NoResults { .. } => panic!("no results"),
        }
    }

    #[test]
    fn starts_unfiltered_on_first_page() {
        assert_eq!(View::default(), View::Unfiltered { page: Index::FIRST });
    }

    #[test]
    fn selects_page_in_same_mode() {
        let view = View::default().apply(Event::PageSelected(label(3)));
        assert_eq!(view, View::Unfiltered { page: Index::new(2) });

        let view = View::default()
            .apply(Event::QueryChanged("ann".into()))
            .apply(Event::PageSelected(label(2)));
        assert_eq!(
            view,
            View::Filtered {
                query: Query::new("ann").unwrap(),
                page: Index::new(1),
            },
        );
    }

    #[test]
    fn query_change_resets_page() {
        let view = View::default()
            .apply(Event::PageSelected(label(3)))
            .apply(Event::QueryChanged("a".into()));
        assert_eq!(view.page(), Index::FIRST);

        let view = view
            .apply(Event::PageSelected(label(2)))
            .apply(Event::QuerySubmitted("an".into()));
        assert_eq!(view.page(), Index::FIRST);
        assert_eq!(view.query().map(Query::as_str), Some("an"));
    }

    #[test]
    fn empty_query_unfilters() {
        let view = View::default()
            .apply(Event::QueryChanged("anna".into()))
            .apply(Event::PageSelected(label(2)))
            .apply(Event::QueryChanged(String::new()));

        assert_eq!(view, View::default());
    }

    #[test]
    fn presents_first_page_of_everyone() {
        let people = people(20);

        let presentation =
            View::default().present(&people, Policy::Substring);

        assert_eq!(names(&presentation).len(), 9);
        assert_eq!(names(&presentation)[0], "Anna N0");
        assert_eq!(presentation.indicators().len(), 3);
        assert_eq!(presentation.indicators().active(), Some(label(1)));
    }

    #[test]
    fn presents_selected_page_of_filtered() {
        let people = people(40);

        let (view, presentation) = View::default().step(
            Event::QueryChanged("bob".into()),
            &people,
            Policy::Substring,
        );
        assert_eq!(presentation.indicators().len(), 3);
        assert_eq!(names(&presentation)[0], "Bob N1");

        let (_, presentation) = view.step(
            Event::PageSelected(label(3)),
            &people,
            Policy::Substring,
        );
        assert_eq!(
            names(&presentation),
            ["Bob N37", "Bob N39"],
            "last page of the filtered set, not of everyone",
        );
        assert_eq!(presentation.indicators().active(), Some(label(3)));
    }

    #[test]
    fn presents_no_results() {
        let people = people(20);

        let (view, presentation) = View::default().step(
            Event::QuerySubmitted("zed".into()),
            &people,
            Policy::Subsequence,
        );

        assert!(matches!(view, View::Filtered { .. }));
        assert!(matches!(presentation, Presentation::NoResults { .. }));
        assert!(presentation.indicators().is_empty());
        assert_eq!(view.page_count(&people, Policy::Subsequence), PageCount(0));
    }

    #[test]
    fn presents_empty_directory_without_error() {
        let presentation = View::default().present(&[], Policy::Substring);

        assert_eq!(names(&presentation), Vec::<String>::new());
        assert!(presentation.indicators().is_empty());
    }

    #[test]
    fn presents_nothing_past_last_page() {
        let people = people(10);

        let view = View::default().apply(Event::PageSelected(label(5)));
        let presentation = view.present(&people, Policy::Substring);

        assert!(names(&presentation).is_empty());
        assert_eq!(presentation.indicators().active(), None);
    }

    #[test]
    fn counts_pages_of_matching() {
        let people = people(30);
        let view = View::default().apply(Event::QueryChanged("anna".into()));

        assert_eq!(
            View::default().page_count(&people, Policy::Substring),
            PageCount(4),
        );
        assert_eq!(view.page_count(&people, Policy::Substring), PageCount(2));
    }

    #[test]
    fn policy_decides_matching() {
        let people = vec![Person {
            name: Name::new("Anna", "Lee"),
            ..Person::default()
        }];
        let view = View::default().apply(Event::QueryChanged("al".into()));

        assert!(matches!(
            view.present(&people, Policy::Substring),
            Presentation::NoResults { .. },
        ));
        assert_eq!(
            names(&view.present(&people, Policy::Subsequence)),
            ["Anna Lee"],
        );
    }
}
