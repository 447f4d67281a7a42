//! Dog - feedable, not movable

use std::fmt;
use std::sync::Arc;

use super::Animal;
use crate::capabilities::Feedable;
use crate::ports::{ActionLogPort, SoundPort};
use crate::services::SoundService;
use crate::value_objects::{AnimalName, FeedingProfile, HungerLevel};

pub struct Dog {
    name: AnimalName,
    breed: String,
    hunger_level: HungerLevel,
    sound_service: Arc<dyn SoundPort>,
    logging_service: Option<Arc<dyn ActionLogPort>>,
}

impl Dog {
    pub const BARK: &'static str = "Woof!";
    pub const DEFAULT_ACTIVITY: &'static str = "frisbee";
    /// One meal removes 3; hungry above 3.
    pub const FEEDING: FeedingProfile = FeedingProfile::new(3.0, 3.0);

    /// A dog with a default-volume [`SoundService`] and no logger.
    pub fn new(name: impl Into<AnimalName>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            hunger_level: HungerLevel::default(),
            sound_service: Arc::new(SoundService::default()),
            logging_service: None,
        }
    }

    pub fn with_sound_service(mut self, sound_service: Arc<dyn SoundPort>) -> Self {
        self.sound_service = sound_service;
        self
    }

    pub fn with_logging_service(mut self, logging_service: Arc<dyn ActionLogPort>) -> Self {
        self.logging_service = Some(logging_service);
        self
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn hunger_level(&self) -> HungerLevel {
        self.hunger_level
    }

    /// Hunger as a whole number. Meals remove whole points, so nothing is lost.
    pub fn hunger_points(&self) -> u8 {
        self.hunger_level.value().round() as u8
    }

    /// Describe a play session.
    ///
    /// `activity` falls back to [`Dog::DEFAULT_ACTIVITY`]. The sentence shape
    /// depends only on how many toys are given: none, one, or several
    /// (joined with `", "`).
    pub fn play(&self, activity: Option<&str>, toys: &[&str]) -> String {
        let activity = activity.unwrap_or(Self::DEFAULT_ACTIVITY);
        match toys {
            [] => format!("{} is playing {}", self.name, activity),
            [toy] => format!("{} is playing {} with {}", self.name, activity, toy),
            _ => format!(
                "{} is playing {} with {}",
                self.name,
                activity,
                toys.join(", ")
            ),
        }
    }

    fn log(&self, message: impl FnOnce() -> String) {
        if let Some(logger) = &self.logging_service {
            logger.log_action(&message());
        }
    }
}

impl Animal for Dog {
    fn name(&self) -> &AnimalName {
        &self.name
    }

    fn species(&self) -> &'static str {
        "dog"
    }

    fn make_sound(&self) -> String {
        self.log(|| format!("{} is making a sound", self.name));
        self.sound_service.make_animal_sound(Self::BARK)
    }

    fn describe(&self) -> String {
        format!("This is a {} dog named {}", self.breed, self.name)
    }

    fn as_feedable(&self) -> Option<&dyn Feedable> {
        Some(self)
    }

    fn as_feedable_mut(&mut self) -> Option<&mut dyn Feedable> {
        Some(self)
    }
}

impl Feedable for Dog {
    fn feed(&mut self, food: &str) {
        self.hunger_level = Self::FEEDING.after_meal(self.hunger_level);
        self.log(|| {
            format!(
                "{} ate {}, hunger dropped to {}",
                self.name, food, self.hunger_level
            )
        });
    }

    fn is_hungry(&self) -> bool {
        Self::FEEDING.is_hungry(self.hunger_level)
    }
}

impl fmt::Debug for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dog")
            .field("name", &self.name)
            .field("breed", &self.breed)
            .field("hunger_level", &self.hunger_level)
            .field("has_logger", &self.logging_service.is_some())
            .finish_non_exhaustive()
    }
}
