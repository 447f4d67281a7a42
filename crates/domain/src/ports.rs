//! Port traits for the services animals depend on.
//!
//! Animals hold these as `Arc<dyn ...>` so a single service instance can be
//! shared by several animals, and so tests can inject mocks.

#[cfg_attr(test, mockall::automock)]
pub trait SoundPort: Send + Sync {
    /// Expand a base sound token into the sound an animal actually makes.
    fn make_animal_sound(&self, base_sound: &str) -> String;
}

#[cfg_attr(test, mockall::automock)]
pub trait ActionLogPort: Send + Sync {
    /// Record one action. Must never fail the caller.
    fn log_action(&self, message: &str);

    /// All recorded entries, oldest first.
    fn logs(&self) -> Vec<String>;
}
