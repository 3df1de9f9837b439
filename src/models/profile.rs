use crate::error::{RationError, Result};
use crate::models::round2;

/// Activity level, following the 1.2 / 1.5 / 2.0 maintenance-energy ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Parse the 1/2/3 wire encoding used by config sources.
    pub fn from_level(level: u8) -> Result<Self> {
        match level {
            1 => Ok(ActivityLevel::Low),
            2 => Ok(ActivityLevel::Moderate),
            3 => Ok(ActivityLevel::High),
            other => Err(RationError::InvalidActivity(other)),
        }
    }

    #[inline]
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Moderate => 1.5,
            ActivityLevel::High => 2.0,
        }
    }
}

/// The cat whose meals are being portioned.
#[derive(Debug, Clone)]
pub struct PetProfile {
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub neutered: bool,
    pub meals_per_day: u32,
}

impl PetProfile {
    /// Maintenance energy requirement for one meal.
    ///
    /// `((30 * kg) + 70) * activity`, scaled by 0.8 when neutered, split
    /// evenly across the day's meals.
    pub fn calories_per_meal(&self) -> Result<f64> {
        if self.weight_kg <= 0.0 {
            return Err(RationError::InvalidInput(format!(
                "weight must be positive, got {}",
                self.weight_kg
            )));
        }
        if self.meals_per_day == 0 {
            return Err(RationError::InvalidInput(
                "meal count must be positive".to_string(),
            ));
        }

        let mut requirement = (30.0 * self.weight_kg + 70.0) * self.activity.multiplier();
        if self.neutered {
            requirement *= 0.8;
        }

        Ok(round2(requirement / self.meals_per_day as f64))
    }
}
