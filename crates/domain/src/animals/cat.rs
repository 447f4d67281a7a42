//! Cat - movable and feedable

use std::fmt;
use std::sync::Arc;

use super::Animal;
use crate::capabilities::{Feedable, Movable};
use crate::ports::{ActionLogPort, SoundPort};
use crate::services::SoundService;
use crate::value_objects::{AnimalName, FeedingProfile, HungerLevel};

pub struct Cat {
    name: AnimalName,
    color: String,
    speed: f64,
    hunger_level: HungerLevel,
    sound_service: Arc<dyn SoundPort>,
    logging_service: Option<Arc<dyn ActionLogPort>>,
}

impl Cat {
    pub const MEOW: &'static str = "Meow~";
    pub const BASE_SPEED: f64 = 10.0;
    /// Volume of the sound service a cat gets when none is injected.
    pub const DEFAULT_VOLUME: i64 = 2;
    /// One meal removes 2; hungry above 2.
    pub const FEEDING: FeedingProfile = FeedingProfile::new(2.0, 2.0);
    /// Meters travelled per point of hunger gained.
    const METERS_PER_HUNGER_POINT: f64 = 10.0;

    pub fn new(name: impl Into<AnimalName>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            speed: Self::BASE_SPEED,
            hunger_level: HungerLevel::default(),
            sound_service: Arc::new(SoundService::new(Self::DEFAULT_VOLUME)),
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

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn base_speed(&self) -> f64 {
        self.speed
    }

    pub fn hunger_level(&self) -> HungerLevel {
        self.hunger_level
    }

    fn log(&self, message: impl FnOnce() -> String) {
        if let Some(logger) = &self.logging_service {
            logger.log_action(&message());
        }
    }
}

impl Animal for Cat {
    fn name(&self) -> &AnimalName {
        &self.name
    }

    fn species(&self) -> &'static str {
        "cat"
    }

    fn make_sound(&self) -> String {
        self.log(|| format!("{} is making a sound", self.name));
        self.sound_service.make_animal_sound(Self::MEOW)
    }

    fn describe(&self) -> String {
        format!("This is a {} cat named {}", self.color, self.name)
    }

    fn as_movable(&self) -> Option<&dyn Movable> {
        Some(self)
    }

    fn as_movable_mut(&mut self) -> Option<&mut dyn Movable> {
        Some(self)
    }

    fn as_feedable(&self) -> Option<&dyn Feedable> {
        Some(self)
    }

    fn as_feedable_mut(&mut self) -> Option<&mut dyn Feedable> {
        Some(self)
    }
}

impl Movable for Cat {
    fn move_by(&mut self, distance: f64) {
        self.log(|| format!("{} moved {:?} meters", self.name, distance));
        self.hunger_level = self
            .hunger_level
            .increased_by(distance / Self::METERS_PER_HUNGER_POINT);
    }

    /// Degrades linearly from full speed at hunger 0 to half speed at 10.
    fn speed(&self) -> f64 {
        self.speed * (1.0 - self.hunger_level.value() / 20.0)
    }
}

impl Feedable for Cat {
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

impl fmt::Debug for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cat")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("speed", &self.speed)
            .field("hunger_level", &self.hunger_level)
            .field("has_logger", &self.logging_service.is_some())
            .finish_non_exhaustive()
    }
}
