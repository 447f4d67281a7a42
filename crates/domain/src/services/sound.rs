//! Volume-driven sound generation.

use serde::{Deserialize, Serialize};

use crate::ports::SoundPort;

/// Repeats a base sound token once per unit of volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundService {
    volume: i64,
}

impl SoundService {
    pub const DEFAULT_VOLUME: i64 = 5;

    /// Any volume is accepted. Zero or negative volumes produce silence.
    pub fn new(volume: i64) -> Self {
        Self { volume }
    }

    pub fn volume(&self) -> i64 {
        self.volume
    }

    /// `base_sound` concatenated `volume` times with no separator.
    pub fn make_animal_sound(&self, base_sound: &str) -> String {
        base_sound.repeat(usize::try_from(self.volume).unwrap_or(0))
    }
}

impl Default for SoundService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VOLUME)
    }
}

impl SoundPort for SoundService {
    fn make_animal_sound(&self, base_sound: &str) -> String {
        SoundService::make_animal_sound(self, base_sound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_sound_once_per_volume_unit() {
        for volume in 0..=6_usize {
            let service = SoundService::new(volume as i64);
            let sound = service.make_animal_sound("Woof!");
            assert_eq!(sound.matches("Woof!").count(), volume);
            assert_eq!(sound.len(), "Woof!".len() * volume);
        }
    }

    #[test]
    fn zero_volume_is_silent() {
        assert_eq!(SoundService::new(0).make_animal_sound("Meow~"), "");
    }

    #[test]
    fn negative_volume_is_silent() {
        for volume in [-1, -5, i64::MIN] {
            let service = SoundService::new(volume);
            assert_eq!(service.volume(), volume);
            assert_eq!(service.make_animal_sound("Woof!"), "");
        }
    }

    #[test]
    fn default_volume_is_five() {
        let service = SoundService::default();
        assert_eq!(service.volume(), 5);
        assert_eq!(service.make_animal_sound("ab"), "ababababab");
    }

    #[test]
    fn port_delegates_to_service() {
        let port: &dyn SoundPort = &SoundService::new(3);
        assert_eq!(port.make_animal_sound("x"), "xxx");
    }
}
