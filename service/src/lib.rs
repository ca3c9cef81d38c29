//! Service contains the business logic of the people directory.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod filter;
pub mod infra;
pub mod query;
pub mod view;

#[cfg(doc)]
use infra::Renderer;

use crate::domain::Person;

pub use self::{command::Command, query::Query, view::View};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// [`filter::Policy`] of matching search queries against names.
    pub policy: filter::Policy,
}

/// Domain service.
#[derive(Debug)]
pub struct Service<R> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Person`]s listed by this [`Service`].
    people: Vec<Person>,

    /// [`Renderer`] of this [`Service`].
    renderer: R,
}

impl<R> Service<R> {
    /// Creates a new [`Service`] listing the provided `people`.
    #[must_use]
    pub fn new(config: Config, people: Vec<Person>, renderer: R) -> Self {
        Self {
            config,
            people,
            renderer,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Person`]s listed by this [`Service`].
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns [`Renderer`] of this [`Service`].
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
