//! Name newtype for animals
//!
//! Construction is permissive: any string, including an empty one, is a
//! valid name. The newtype exists so that names cannot be confused with
//! breeds, colors, or food.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An animal's name, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalName(String);

impl AnimalName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AnimalName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for AnimalName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<AnimalName> for String {
    fn from(name: AnimalName) -> String {
        name.0
    }
}

impl AsRef<str> for AnimalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_empty_name() {
        let name = AnimalName::new("");
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn keeps_name_verbatim() {
        let name = AnimalName::from("  Rex ");
        assert_eq!(name.to_string(), "  Rex ");
        assert_eq!(name.as_ref(), "  Rex ");
        assert_eq!(String::from(name), "  Rex ");
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = AnimalName::new("Whiskers");
        assert_eq!(serde_json::to_string(&name).unwrap(), r#""Whiskers""#);
        let back: AnimalName = serde_json::from_str(r#""Whiskers""#).unwrap();
        assert_eq!(back, name);
    }
}
