//! Capability traits that animals may implement in any combination.
//!
//! A capability is a plain trait, so conformance is checked at compile time
//! wherever a concrete type is known. For trait objects, [`Animal`] exposes
//! `as_movable` / `as_feedable` hooks and [`Capability`] names each contract
//! for runtime membership queries.
//!
//! [`Animal`]: crate::animals::Animal

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Something that can travel a distance and report its current speed.
pub trait Movable {
    /// Travel `distance` meters. Implementations update internal state as a
    /// function of distance (cats get hungrier, for example).
    fn move_by(&mut self, distance: f64);

    /// Current effective speed. Derived from state, never stored.
    fn speed(&self) -> f64;
}

/// Something that can be fed and can tell whether it is hungry.
pub trait Feedable {
    /// Feed `food`, lowering hunger by a type-specific amount (floored at 0).
    fn feed(&mut self, food: &str);

    /// Whether current hunger is above the type-specific threshold.
    fn is_hungry(&self) -> bool;
}

/// Named capability contracts, used for runtime membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Movable,
    Feedable,
}

impl Capability {
    pub fn all() -> &'static [Capability] {
        &[Capability::Movable, Capability::Feedable]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Capability::Movable => "Movable",
            Capability::Feedable => "Feedable",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movable" => Ok(Capability::Movable),
            "feedable" => Ok(Capability::Feedable),
            _ => Err(DomainError::parse(format!("Unknown capability: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_capability_names_case_insensitively() {
        assert_eq!("movable".parse::<Capability>(), Ok(Capability::Movable));
        assert_eq!(" Feedable ".parse::<Capability>(), Ok(Capability::Feedable));
    }

    #[test]
    fn rejects_unknown_capability() {
        let err = "flying".parse::<Capability>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Capability::all()).unwrap();
        assert_eq!(json, r#"["movable","feedable"]"#);
    }
}
