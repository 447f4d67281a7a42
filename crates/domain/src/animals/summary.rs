//! Serializable snapshot of an animal

use serde::Serialize;

use super::Animal;
use crate::capabilities::Capability;

/// What an animal is and what it can do, without triggering any side effects
/// (no sound is produced, so nothing is logged).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalSummary {
    pub name: String,
    pub species: String,
    pub description: String,
    pub capabilities: Vec<Capability>,
}

impl AnimalSummary {
    pub fn of(animal: &dyn Animal) -> Self {
        Self {
            name: animal.name().to_string(),
            species: animal.species().to_string(),
            description: animal.describe(),
            capabilities: animal.capabilities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animals::{Cat, Dog};

    #[test]
    fn summarizes_dog() {
        let dog = Dog::new("Rex", "Beagle");
        let summary = AnimalSummary::of(&dog);
        assert_eq!(summary.species, "dog");
        assert_eq!(summary.description, "This is a Beagle dog named Rex");
        assert_eq!(summary.capabilities, vec![Capability::Feedable]);
    }

    #[test]
    fn serializes_camel_case() {
        let cat = Cat::new("Tom", "grey");
        let json = serde_json::to_value(AnimalSummary::of(&cat)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Tom",
                "species": "cat",
                "description": "This is a grey cat named Tom",
                "capabilities": ["movable", "feedable"],
            })
        );
    }
}
