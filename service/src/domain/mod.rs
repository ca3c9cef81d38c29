//! Domain definitions.

pub mod person;

pub use self::person::Person;
