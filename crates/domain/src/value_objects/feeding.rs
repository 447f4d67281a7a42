//! Per-species feeding rules

use serde::{Deserialize, Serialize};

use super::HungerLevel;

/// How much one meal lowers hunger, and above which level an animal is hungry.
///
/// Each species declares its own profile as an associated constant; there is
/// no shared default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedingProfile {
    /// Hunger removed by one meal
    pub meal_reduction: f64,
    /// Hungry when hunger is strictly above this value
    pub hungry_above: f64,
}

impl FeedingProfile {
    pub const fn new(meal_reduction: f64, hungry_above: f64) -> Self {
        Self {
            meal_reduction,
            hungry_above,
        }
    }

    /// Hunger after one meal, floored at zero.
    pub fn after_meal(&self, hunger: HungerLevel) -> HungerLevel {
        hunger.decreased_by(self.meal_reduction)
    }

    pub fn is_hungry(&self, hunger: HungerLevel) -> bool {
        hunger.exceeds(self.hungry_above)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_lowers_hunger_and_floors() {
        let profile = FeedingProfile::new(3.0, 3.0);
        let hunger = profile.after_meal(HungerLevel::default());
        assert_eq!(hunger.value(), 2.0);
        assert_eq!(profile.after_meal(hunger).value(), 0.0);
    }

    #[test]
    fn threshold_is_exclusive() {
        let profile = FeedingProfile::new(2.0, 2.0);
        assert!(!profile.is_hungry(HungerLevel::new(2.0)));
        assert!(profile.is_hungry(HungerLevel::new(2.5)));
    }
}
