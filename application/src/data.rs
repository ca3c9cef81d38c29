//! Loading of the listed [`Person`]s.

use std::{fs::File, io, path::Path};

use derive_more::{Display, Error};
use service::domain::Person;
use tracing as log;

/// Loads [`Person`]s from the JSON file at the provided `path`.
///
/// The file is expected to contain an array of people records.
///
/// # Errors
///
/// Errors if the file cannot be read or is not a valid people list.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Person>, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(LoadError::Read)?;
    let people = parse(io::BufReader::new(file))?;
    log::debug!("loaded {} people from `{}`", people.len(), path.display());

    Ok(people)
}

/// Parses [`Person`]s out of the provided JSON `reader`.
///
/// # Errors
///
/// Errors if the input is not a valid people list.
pub fn parse(reader: impl io::Read) -> Result<Vec<Person>, LoadError> {
    serde_json::from_reader(reader).map_err(LoadError::Parse)
}

/// Error of loading [`Person`]s.
#[derive(Debug, Display, Error)]
pub enum LoadError {
    /// Failed to read the file.
    #[display("cannot read people file: {_0}")]
    Read(io::Error),

    /// File contents are not a people list.
    #[display("malformed people list: {_0}")]
    Parse(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use std::io::Write as _;

    use super::{load, parse, LoadError};

    #[test]
    fn parses_people_in_order() {
        let people = parse(
            r#"[
                { "name": { "first": "Anna", "last": "Lee" } },
                { "name": { "first": "Bob", "last": "Ray" }, "email": "b@x.io" }
            ]"#
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name.to_string(), "Anna Lee");
        assert_eq!(people[1].email.to_string(), "b@x.io");
    }

    #[test]
    fn keeps_records_with_null_fields() {
        let people = parse(
            r#"[
                { "name": { "first": "Anna", "last": "Lee" } },
                { "name": { "first": null, "last": "Ray" }, "email": null }
            ]"#
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name.to_string(), "Anna Lee");
        assert_eq!(people[1].name.last, "Ray");
        assert_eq!(people[1].email.to_string(), "");
    }

    #[test]
    fn rejects_non_list() {
        assert!(matches!(
            parse(r#"{ "name": "Anna" }"#.as_bytes()),
            Err(LoadError::Parse(_)),
        ));
    }

    #[test]
    fn loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "name": {{ "first": "Anna" }} }}]"#).unwrap();

        let people = load(file.path()).unwrap();

        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name.first, "Anna");
    }

    #[test]
    fn fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            load(dir.path().join("people.json")),
            Err(LoadError::Read(_)),
        ));
    }
}
