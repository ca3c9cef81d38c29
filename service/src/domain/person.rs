//! [`Person`] definitions.

use derive_more::{AsRef, Display, From};
use serde::{de::IgnoredAny, Deserialize, Deserializer};

/// Person listed in the directory.
///
/// Every field falls back to an empty value when missing, `null` or of a
/// wrong type, so a malformed record still shows up, just with less text.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Person {
    /// [`Name`] of this [`Person`].
    #[serde(deserialize_with = "lenient")]
    pub name: Name,

    /// [`Email`] of this [`Person`].
    #[serde(deserialize_with = "lenient")]
    pub email: Email,

    /// [`Picture`] of this [`Person`].
    #[serde(deserialize_with = "lenient")]
    pub picture: Picture,

    /// [`Registration`] of this [`Person`].
    #[serde(deserialize_with = "lenient")]
    pub registered: Registration,
}

/// Name of a [`Person`].
#[derive(Clone, Debug, Default, Deserialize, Display, Eq, PartialEq)]
#[display("{first} {last}")]
#[serde(default)]
pub struct Name {
    /// Title of the [`Person`] (`Mr`, `Ms`, ...).
    #[serde(deserialize_with = "lenient")]
    pub title: String,

    /// First name.
    #[serde(deserialize_with = "lenient")]
    pub first: String,

    /// Last name.
    #[serde(deserialize_with = "lenient")]
    pub last: String,
}

impl Name {
    /// Creates a new [`Name`] out of the `first` and `last` names.
    #[must_use]
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            first: first.into(),
            last: last.into(),
        }
    }
}

/// Email address of a [`Person`].
#[derive(
    AsRef, Clone, Debug, Default, Deserialize, Display, Eq, From, PartialEq,
)]
#[as_ref(str, String)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Email(String);

/// Avatar picture URLs of a [`Person`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Picture {
    /// URL of the large picture.
    #[serde(deserialize_with = "lenient")]
    pub large: String,

    /// URL of the medium picture.
    #[serde(deserialize_with = "lenient")]
    pub medium: String,

    /// URL of the thumbnail picture.
    #[serde(deserialize_with = "lenient")]
    pub thumbnail: String,
}

/// Registration details of a [`Person`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Registration {
    /// Date of the registration, shown as is.
    #[serde(deserialize_with = "lenient")]
    pub date: String,

    /// Years passed since the registration.
    #[serde(deserialize_with = "lenient")]
    pub age: Option<u32>,
}

/// Deserializes a `T`, falling back to its default value if the input is not
/// a valid `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<V> {
        Valid(V),
        Invalid(IgnoredAny),
    }

    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Valid(v) => v,
        Lenient::Invalid(_) => T::default(),
    })
}

#[cfg(test)]
mod spec {
    use super::{Name, Person};

    #[test]
    fn shows_first_and_last_name() {
        assert_eq!(Name::new("Anna", "Lee").to_string(), "Anna Lee");
    }

    #[test]
    fn deserializes_full_record() {
        let person = serde_json::from_str::<Person>(
            r#"{
                "name": { "title": "Ms", "first": "Ethel", "last": "Dean" },
                "email": "ethel.dean@example.com",
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/25.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/25.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/25.jpg"
                },
                "registered": { "date": "12-15-2005", "age": 15 }
            }"#,
        )
        .unwrap();

        assert_eq!(person.name.to_string(), "Ethel Dean");
        assert_eq!(person.name.title, "Ms");
        assert_eq!(person.email.to_string(), "ethel.dean@example.com");
        assert!(person.picture.large.ends_with("women/25.jpg"));
        assert_eq!(person.registered.date, "12-15-2005");
        assert_eq!(person.registered.age, Some(15));
    }

    #[test]
    fn tolerates_missing_fields() {
        let person =
            serde_json::from_str::<Person>(r#"{ "name": { "first": "Lee" } }"#)
                .unwrap();

        assert_eq!(person.name.to_string(), "Lee ");
        assert_eq!(person.email.to_string(), "");
        assert_eq!(person.registered.date, "");
    }

    #[test]
    fn tolerates_null_fields() {
        let person = serde_json::from_str::<Person>(
            r#"{
                "name": { "title": 3, "first": null, "last": "Ray" },
                "email": null,
                "picture": "none",
                "registered": { "date": ["x"], "age": "old" }
            }"#,
        )
        .unwrap();

        assert_eq!(person.name.to_string(), " Ray");
        assert_eq!(person.name.title, "");
        assert_eq!(person.email.to_string(), "");
        assert_eq!(person.picture.large, "");
        assert_eq!(person.registered.date, "");
        assert_eq!(person.registered.age, None);

        let person =
            serde_json::from_str::<Person>(r#"{ "name": null }"#).unwrap();
        assert_eq!(person, Person::default());
    }
}
