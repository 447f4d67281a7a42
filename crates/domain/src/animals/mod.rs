//! The animal hierarchy.
//!
//! [`Animal`] plays the role of an abstract base: `make_sound` must be
//! supplied by every species, while `describe` has a default that species
//! may override. Capabilities are separate traits (see
//! [`crate::capabilities`]); an animal advertises the ones it has through the
//! `as_movable` / `as_feedable` hooks, and the `try_*` methods turn a missing
//! capability into [`DomainError::CapabilityNotImplemented`].

mod cat;
mod dog;
mod summary;

pub use cat::Cat;
pub use dog::Dog;
pub use summary::AnimalSummary;

use crate::capabilities::{Capability, Feedable, Movable};
use crate::error::DomainError;
use crate::value_objects::AnimalName;

pub trait Animal: Send + Sync {
    fn name(&self) -> &AnimalName;

    /// Short species label, e.g. `"dog"`.
    fn species(&self) -> &'static str;

    /// The species-specific sound. May log through an injected logger.
    fn make_sound(&self) -> String;

    fn describe(&self) -> String {
        format!("This is a {}", self.name())
    }

    fn as_movable(&self) -> Option<&dyn Movable> {
        None
    }

    fn as_movable_mut(&mut self) -> Option<&mut dyn Movable> {
        None
    }

    fn as_feedable(&self) -> Option<&dyn Feedable> {
        None
    }

    fn as_feedable_mut(&mut self) -> Option<&mut dyn Feedable> {
        None
    }

    fn implements(&self, capability: Capability) -> bool {
        match capability {
            Capability::Movable => self.as_movable().is_some(),
            Capability::Feedable => self.as_feedable().is_some(),
        }
    }

    fn capabilities(&self) -> Vec<Capability> {
        Capability::all()
            .iter()
            .copied()
            .filter(|capability| self.implements(*capability))
            .collect()
    }

    fn try_move(&mut self, distance: f64) -> Result<(), DomainError> {
        match self.as_movable_mut() {
            Some(movable) => {
                movable.move_by(distance);
                Ok(())
            }
            None => Err(not_implemented(&*self, Capability::Movable)),
        }
    }

    fn try_speed(&self) -> Result<f64, DomainError> {
        self.as_movable()
            .map(|movable| movable.speed())
            .ok_or_else(|| not_implemented(self, Capability::Movable))
    }

    fn try_feed(&mut self, food: &str) -> Result<(), DomainError> {
        match self.as_feedable_mut() {
            Some(feedable) => {
                feedable.feed(food);
                Ok(())
            }
            None => Err(not_implemented(&*self, Capability::Feedable)),
        }
    }

    fn try_is_hungry(&self) -> Result<bool, DomainError> {
        self.as_feedable()
            .map(|feedable| feedable.is_hungry())
            .ok_or_else(|| not_implemented(self, Capability::Feedable))
    }
}

fn not_implemented<A: Animal + ?Sized>(animal: &A, capability: Capability) -> DomainError {
    tracing::debug!(animal = %animal.name(), %capability, "Capability requested but not implemented");
    DomainError::capability_not_implemented(capability, animal.name().as_str())
}
