//! Menagerie domain: animals, the capabilities they may have, and the
//! services injected into them.
//!
//! ## Structure
//!
//! - `animals/` - The [`Animal`] base trait plus the concrete [`Dog`] and [`Cat`]
//! - `capabilities` - [`Movable`] and [`Feedable`] contracts and runtime [`Capability`] tags
//! - `services/` - [`SoundService`] and [`LoggingService`]
//! - `ports` - Traits the services implement, so animals can take any implementation
//! - `value_objects/` - Names, hunger levels, feeding rules

pub mod animals;
pub mod capabilities;
pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use animals::{Animal, AnimalSummary, Cat, Dog};
pub use capabilities::{Capability, Feedable, Movable};
pub use error::DomainError;
pub use ports::{ActionLogPort, SoundPort};
pub use services::{LoggingService, SoundService};
pub use value_objects::{AnimalName, FeedingProfile, HungerLevel};
