//! Concrete services injected into animals.

mod logging;
mod sound;

pub use logging::LoggingService;
pub use sound::SoundService;
