//! # Stats View
//!
//! A read-only snapshot of everything the presentation layer shows. Built
//! from [`CharacterStats`] after each change; the shell compares snapshots to
//! decide whether a refresh tick needs to write anything.
//!
//! Rendered either as the plain-text panel (`Display`) or as JSON (`Serialize`).

use serde::Serialize;
use std::fmt;

use crate::core::stats::CharacterStats;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub age: u32,
    pub weight: u32,
    pub height_inches: u32,
    pub bmi: String,
    pub fullness: String,
    pub current_calories: u32,
    pub max_calories: f64,
    pub date: String,
    pub shirt_size: String,
    pub shirt_fit: String,
    pub pant_size: u32,
    pub pant_fit: String,
}

impl From<&CharacterStats> for StatsView {
    fn from(stats: &CharacterStats) -> Self {
        Self {
            age: stats.age(),
            weight: stats.weight(),
            height_inches: stats.height_inches(),
            bmi: stats.calculate_bmi(),
            fullness: stats.calculate_fullness().to_string(),
            current_calories: stats.current_calories(),
            max_calories: stats.max_calories(),
            date: stats.formatted_date(),
            shirt_size: stats.shirt_size().to_string(),
            shirt_fit: stats.shirt_fit().to_string(),
            pant_size: stats.pant_size(),
            pant_fit: stats.pant_fit().to_string(),
        }
    }
}

impl StatsView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// Calorie budget is shown to the whole calorie; the JSON form keeps full precision.
impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Weight: {} lbs", self.weight)?;
        writeln!(f, "Height: {} inches", self.height_inches)?;
        writeln!(f, "BMI: {}", self.bmi)?;
        writeln!(f, "Fullness: {}", self.fullness)?;
        writeln!(f, "Calories: {} / {:.0}", self.current_calories, self.max_calories)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Shirt Size: {} ({})", self.shirt_size, self.shirt_fit)?;
        write!(f, "Pant Size: {} ({})", self.pant_size, self.pant_fit)
    }
}
