//! Value objects - Immutable objects defined by their attributes

mod feeding;
mod hunger;
mod names;

pub use feeding::FeedingProfile;
pub use hunger::HungerLevel;
pub use names::AnimalName;
