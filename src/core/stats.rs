//! # Character Stats
//!
//! The simulation engine. Owns the one character record and every derived
//! metric computed from it. No I/O, no rendering: the presentation snapshot
//! lives in [`crate::core::view`].
//!
//! ```text
//! CharacterStats
//! ├── profile: Profile            // starting snapshot, restored by reset_stats()
//! ├── age: u32                    // years
//! ├── weight: u32                 // pounds
//! ├── height_inches: u32          // fixed after construction
//! ├── current_calories: u32       // eaten today, zeroed by end_day()
//! ├── max_calories: f64           // daily budget (BMR after the first recompute)
//! ├── current_date: NaiveDate     // in-game calendar
//! └── shirt/pant size + fit       // derived from weight, never set directly
//! ```
//!
//! ## Day advance
//!
//! `end_day()` is the only time-based transition:
//!
//! ```text
//! date += 1 day → birthday? age += 1 → excess = eaten - BMR
//!   → excess > 500? weight += floor(excess / 500)
//!   → calories = 0 → clothing recomputed → max_calories = BMR
//! ```

use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use std::fmt;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_AGE: u32 = 19;
pub const DEFAULT_WEIGHT: u32 = 170;
pub const DEFAULT_HEIGHT_INCHES: u32 = 67;
pub const DEFAULT_MAX_CALORIES: f64 = 1620.0;
pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2009, 6, 15) {
    Some(date) => date,
    None => panic!("invalid default start date"),
};

/// Clothing sizes are measured from this weight, independent of the profile.
const CLOTHING_BASE_WEIGHT: i64 = 170;
const SHIRT_STEP_LBS: i64 = 30;
const PANT_STEP_LBS: i64 = 15;
const BASE_PANT_SIZE: i64 = 14;

/// Surplus calories that turn into one pound at the end of a day. A surplus
/// must also exceed this to cause any gain at all.
const CALORIES_PER_POUND: f64 = 500.0;

/// Zero-based month (7 = August) and day of the yearly birthday.
const BIRTHDAY_MONTH0: u32 = 7;
const BIRTHDAY_DAY: u32 = 16;

// ============================================================================
// Derived labels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShirtSize {
    Medium,
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
    XxxxLarge,
    XxxxxLarge,
}

impl ShirtSize {
    /// All sizes, smallest first.
    pub const ALL: [ShirtSize; 7] = [
        ShirtSize::Medium,
        ShirtSize::Large,
        ShirtSize::XLarge,
        ShirtSize::XxLarge,
        ShirtSize::XxxLarge,
        ShirtSize::XxxxLarge,
        ShirtSize::XxxxxLarge,
    ];

    /// Picks the size for a bucket index, clamped to the ends of the list.
    pub fn from_index(index: i64) -> Self {
        let last = Self::ALL.len() as i64 - 1;
        Self::ALL[index.clamp(0, last) as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            ShirtSize::Medium => "Medium",
            ShirtSize::Large => "Large",
            ShirtSize::XLarge => "X-Large",
            ShirtSize::XxLarge => "XX-Large",
            ShirtSize::XxxLarge => "XXX-Large",
            ShirtSize::XxxxLarge => "XXXX-Large",
            ShirtSize::XxxxxLarge => "XXXXX-Large",
        }
    }
}

impl fmt::Display for ShirtSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a garment sits within its size interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Loose,
    Standard,
    Tight,
}

impl Fit {
    pub fn label(self) -> &'static str {
        match self {
            Fit::Loose => "Loose Fit",
            Fit::Standard => "Standard Fit",
            Fit::Tight => "Tight Fit",
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Healthy,
    Overweight,
    Chubby,
    Obese,
    SuperObese,
    HyperObese,
}

/// Exclusive upper bound of each category, ascending.
const BMI_THRESHOLDS: [(f64, BmiCategory); 6] = [
    (18.5, BmiCategory::Healthy),
    (25.0, BmiCategory::Overweight),
    (30.0, BmiCategory::Chubby),
    (35.0, BmiCategory::Obese),
    (40.0, BmiCategory::SuperObese),
    (45.0, BmiCategory::HyperObese),
];

impl BmiCategory {
    /// First category whose threshold is strictly above `bmi`; anything at or
    /// past the last threshold stays in the last category.
    pub fn from_bmi(bmi: f64) -> Self {
        BMI_THRESHOLDS
            .iter()
            .find(|(threshold, _)| bmi < *threshold)
            .map(|(_, category)| *category)
            .unwrap_or(BmiCategory::HyperObese)
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Chubby => "Chubby",
            BmiCategory::Obese => "Obese",
            BmiCategory::SuperObese => "Super Obese",
            BmiCategory::HyperObese => "Hyper Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fullness {
    Starving,
    Hungry,
    Content,
    Satiated,
    Stuffed,
    Overfed,
}

impl Fullness {
    /// Buckets are inclusive on their upper bound.
    pub fn from_percentage(pct: f64) -> Self {
        if pct <= 20.0 {
            Fullness::Starving
        } else if pct <= 40.0 {
            Fullness::Hungry
        } else if pct <= 60.0 {
            Fullness::Content
        } else if pct <= 80.0 {
            Fullness::Satiated
        } else if pct <= 100.0 {
            Fullness::Stuffed
        } else {
            Fullness::Overfed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Fullness::Starving => "Starving",
            Fullness::Hungry => "Hungry",
            Fullness::Content => "Content",
            Fullness::Satiated => "Satiated",
            Fullness::Stuffed => "Stuffed",
            Fullness::Overfed => "Overfed",
        }
    }
}

impl fmt::Display for Fullness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Starting values for a character. `reset_stats()` returns to this snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub age: u32,
    pub weight: u32,
    pub height_inches: u32,
    pub max_calories: f64,
    pub start_date: NaiveDate,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            weight: DEFAULT_WEIGHT,
            height_inches: DEFAULT_HEIGHT_INCHES,
            max_calories: DEFAULT_MAX_CALORIES,
            start_date: DEFAULT_START_DATE,
        }
    }
}

// ============================================================================
// CharacterStats
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    profile: Profile,
    age: u32,
    weight: u32,
    height_inches: u32,
    current_calories: u32,
    max_calories: f64,
    current_date: NaiveDate,
    shirt_size: ShirtSize,
    shirt_fit: Fit,
    pant_size: u32,
    pant_fit: Fit,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl CharacterStats {
    pub fn new(profile: Profile) -> Self {
        let mut stats = Self {
            age: profile.age,
            weight: profile.weight,
            height_inches: profile.height_inches,
            current_calories: 0,
            max_calories: profile.max_calories,
            current_date: profile.start_date,
            shirt_size: ShirtSize::Medium,
            shirt_fit: Fit::Loose,
            pant_size: BASE_PANT_SIZE as u32,
            pant_fit: Fit::Loose,
            profile,
        };
        stats.update_clothing_sizes();
        stats
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn height_inches(&self) -> u32 {
        self.height_inches
    }

    pub fn current_calories(&self) -> u32 {
        self.current_calories
    }

    pub fn max_calories(&self) -> f64 {
        self.max_calories
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn shirt_size(&self) -> ShirtSize {
        self.shirt_size
    }

    pub fn shirt_fit(&self) -> Fit {
        self.shirt_fit
    }

    pub fn pant_size(&self) -> u32 {
        self.pant_size
    }

    pub fn pant_fit(&self) -> Fit {
        self.pant_fit
    }

    /// Adds to today's intake. Saturates at `u32::MAX` instead of wrapping.
    pub fn add_calories(&mut self, calories: u32) {
        self.current_calories = self.current_calories.saturating_add(calories);
    }

    pub fn bmi(&self) -> f64 {
        f64::from(self.weight) / f64::from(self.height_inches).powi(2) * 703.0
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi())
    }

    /// BMI to one decimal with its category, e.g. `"26.6 (Chubby)"`.
    pub fn calculate_bmi(&self) -> String {
        let bmi = self.bmi();
        format!("{:.1} ({})", bmi, BmiCategory::from_bmi(bmi))
    }

    /// Harris-Benedict basal metabolic rate. Not rounded.
    pub fn calculate_bmr(&self) -> f64 {
        655.0 + 4.35 * f64::from(self.weight) + 4.7 * f64::from(self.height_inches)
            - 4.7 * f64::from(self.age)
    }

    pub fn fullness_percentage(&self) -> f64 {
        f64::from(self.current_calories) / self.max_calories * 100.0
    }

    pub fn calculate_fullness(&self) -> Fullness {
        Fullness::from_percentage(self.fullness_percentage())
    }

    pub fn end_day(&mut self) {
        match self.current_date.succ_opt() {
            Some(next) => self.current_date = next,
            None => warn!("Calendar cannot advance past {}", self.current_date),
        }

        if self.current_date.month0() == BIRTHDAY_MONTH0 && self.current_date.day() == BIRTHDAY_DAY {
            self.age = self.age.saturating_add(1);
            info!("Birthday on {}: age is now {}", self.current_date, self.age);
        }

        let excess = f64::from(self.current_calories) - self.calculate_bmr();
        if excess > CALORIES_PER_POUND {
            let gained = (excess / CALORIES_PER_POUND).floor() as u32;
            self.weight = self.weight.saturating_add(gained);
            debug!("Excess of {:.1} calories added {} lbs", excess, gained);
        }

        self.current_calories = 0;
        self.update_clothing_sizes();
        self.max_calories = self.calculate_bmr();

        info!(
            "Day ended, now {} (weight {} lbs, budget {:.1})",
            self.current_date, self.weight, self.max_calories
        );
    }

    /// `"Month DD, YYYY"`, e.g. `"June 15, 2009"`.
    pub fn formatted_date(&self) -> String {
        self.current_date.format("%B %d, %Y").to_string()
    }

    pub fn update_clothing_sizes(&mut self) {
        let weight_diff = i64::from(self.weight) - CLOTHING_BASE_WEIGHT;

        self.shirt_size = ShirtSize::from_index(weight_diff.div_euclid(SHIRT_STEP_LBS));
        self.shirt_fit = Self::calculate_fit(weight_diff, SHIRT_STEP_LBS);

        let pant_steps = weight_diff.div_euclid(PANT_STEP_LBS).max(0);
        self.pant_size = (BASE_PANT_SIZE + 2 * pant_steps) as u32;
        self.pant_fit = Self::calculate_fit(weight_diff, PANT_STEP_LBS);
    }

    /// Fit within a size interval of `divider` pounds.
    ///
    /// Uses Rust's truncating `%`, so a negative `weight_diff` gives a
    /// non-positive remainder and always lands in `Loose`. A zero divider is
    /// treated as a remainder of zero.
    pub fn calculate_fit(weight_diff: i64, divider: i64) -> Fit {
        let remainder = weight_diff.checked_rem(divider).unwrap_or(0);
        if remainder <= 5 {
            Fit::Loose
        } else if remainder <= 10 {
            Fit::Standard
        } else {
            Fit::Tight
        }
    }

    pub fn reset_stats(&mut self) {
        self.age = self.profile.age;
        self.weight = self.profile.weight;
        self.height_inches = self.profile.height_inches;
        self.current_calories = 0;
        self.max_calories = self.profile.max_calories;
        self.current_date = self.profile.start_date;
        self.update_clothing_sizes();
        debug!("Stats reset to profile defaults");
    }

    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
        self.update_clothing_sizes();
        self.max_calories = self.calculate_bmr();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
        self.max_calories = self.calculate_bmr();
    }

    /// Replaces (does not add to) today's intake.
    pub fn set_calories(&mut self, calories: u32) {
        self.current_calories = calories;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, stats_with_weight};

    #[test]
    fn test_new_uses_documented_defaults() {
        let stats = CharacterStats::default();
        assert_eq!(stats.age(), 19);
        assert_eq!(stats.weight(), 170);
        assert_eq!(stats.height_inches(), 67);
        assert_eq!(stats.current_calories(), 0);
        assert_eq!(stats.max_calories(), 1620.0);
        assert_eq!(stats.current_date(), date(2009, 6, 15));
        assert_eq!(stats.shirt_size(), ShirtSize::Medium);
        assert_eq!(stats.shirt_fit(), Fit::Loose);
        assert_eq!(stats.pant_size(), 14);
        assert_eq!(stats.pant_fit(), Fit::Loose);
    }

    #[test]
    fn test_default_bmi_is_chubby() {
        let stats = CharacterStats::default();
        assert!((stats.bmi() - 26.62).abs() < 0.01);
        // 26.62 is first below the 30 threshold, which carries "Chubby"
        assert_eq!(stats.bmi_category(), BmiCategory::Chubby);
        assert_eq!(stats.calculate_bmi(), "26.6 (Chubby)");
    }

    #[test]
    fn test_bmi_category_is_index_aligned_with_thresholds() {
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Chubby);
        assert_eq!(BmiCategory::from_bmi(26.6), BmiCategory::Chubby);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_category_thresholds() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Healthy);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Chubby);
        assert_eq!(BmiCategory::from_bmi(35.0), BmiCategory::SuperObese);
        assert_eq!(BmiCategory::from_bmi(44.9), BmiCategory::HyperObese);
        assert_eq!(BmiCategory::from_bmi(45.0), BmiCategory::HyperObese);
        assert_eq!(BmiCategory::from_bmi(90.0), BmiCategory::HyperObese);
    }

    #[test]
    fn test_heavy_character_bmi_string() {
        // 300 / 4489 * 703 = 46.98
        let stats = stats_with_weight(300);
        assert_eq!(stats.calculate_bmi(), "47.0 (Hyper Obese)");
    }

    #[test]
    fn test_bmr_formula() {
        let stats = CharacterStats::default();
        // 655 + 739.5 + 314.9 - 89.3
        assert!((stats.calculate_bmr() - 1620.1).abs() < 1e-9);
    }

    #[test]
    fn test_fullness_buckets() {
        let mut stats = CharacterStats::default();
        assert_eq!(stats.calculate_fullness(), Fullness::Starving);

        stats.set_calories(500);
        assert_eq!(stats.calculate_fullness(), Fullness::Hungry);

        stats.set_calories(1620);
        assert_eq!(stats.calculate_fullness(), Fullness::Stuffed);
        assert_eq!(stats.calculate_fullness().to_string(), "Stuffed");

        stats.set_calories(1621);
        assert_eq!(stats.calculate_fullness(), Fullness::Overfed);
    }

    #[test]
    fn test_fullness_upper_bounds_are_inclusive() {
        assert_eq!(Fullness::from_percentage(20.0), Fullness::Starving);
        assert_eq!(Fullness::from_percentage(40.0), Fullness::Hungry);
        assert_eq!(Fullness::from_percentage(60.0), Fullness::Content);
        assert_eq!(Fullness::from_percentage(80.0), Fullness::Satiated);
        assert_eq!(Fullness::from_percentage(100.0), Fullness::Stuffed);
        assert_eq!(Fullness::from_percentage(100.1), Fullness::Overfed);
    }

    #[test]
    fn test_add_calories_accumulates() {
        let mut stats = CharacterStats::default();
        stats.add_calories(300);
        stats.add_calories(450);
        assert_eq!(stats.current_calories(), 750);
    }

    #[test]
    fn test_add_calories_saturates() {
        let mut stats = CharacterStats::default();
        stats.set_calories(u32::MAX - 1);
        stats.add_calories(10);
        assert_eq!(stats.current_calories(), u32::MAX);
    }

    #[test]
    fn test_set_calories_replaces() {
        let mut stats = CharacterStats::default();
        stats.add_calories(900);
        stats.set_calories(100);
        assert_eq!(stats.current_calories(), 100);
    }

    #[test]
    fn test_end_day_from_defaults() {
        let mut stats = CharacterStats::default();
        stats.end_day();

        assert_eq!(stats.current_date(), date(2009, 6, 16));
        assert_eq!(stats.age(), 19);
        assert_eq!(stats.weight(), 170);
        assert_eq!(stats.current_calories(), 0);
        assert_eq!(stats.max_calories(), stats.calculate_bmr());
        assert!((stats.max_calories() - 1620.1).abs() < 1e-9);
    }

    #[test]
    fn test_end_day_surplus_adds_weight() {
        let mut stats = CharacterStats::default();
        stats.set_calories(3000);
        stats.end_day();

        // 3000 - 1620.1 = 1379.9 -> floor(2.76) = 2
        assert_eq!(stats.weight(), 172);
        assert_eq!(stats.current_calories(), 0);
        assert!((stats.max_calories() - 1628.8).abs() < 1e-9);
    }

    #[test]
    fn test_end_day_small_surplus_keeps_weight() {
        let mut stats = CharacterStats::default();
        stats.set_calories(2100);
        stats.end_day();
        // 2100 - 1620.1 = 479.9, under the threshold
        assert_eq!(stats.weight(), 170);
    }

    #[test]
    fn test_end_day_birthday_on_august_16() {
        let mut stats = CharacterStats::default();
        stats.set_date(date(2009, 8, 15));
        stats.end_day();

        assert_eq!(stats.current_date(), date(2009, 8, 16));
        assert_eq!(stats.age(), 20);
        assert!((stats.max_calories() - 1615.4).abs() < 1e-9);
    }

    #[test]
    fn test_end_day_no_birthday_on_july_16() {
        let mut stats = CharacterStats::default();
        stats.set_date(date(2009, 7, 15));
        stats.end_day();
        assert_eq!(stats.age(), 19);
    }

    #[test]
    fn test_end_day_birthday_counts_before_surplus() {
        let mut stats = CharacterStats::default();
        stats.set_date(date(2009, 8, 15));
        // BMR after the birthday is 1615.4, so 2116 leaves 500.6 of surplus.
        // Before the birthday it would be 495.9 and no gain.
        stats.set_calories(2116);
        stats.end_day();
        assert_eq!(stats.age(), 20);
        assert_eq!(stats.weight(), 171);
    }

    #[test]
    fn test_end_day_crosses_year() {
        let mut stats = CharacterStats::default();
        stats.set_date(date(2009, 12, 31));
        stats.end_day();
        assert_eq!(stats.current_date(), date(2010, 1, 1));
    }

    #[test]
    fn test_formatted_date() {
        let mut stats = CharacterStats::default();
        assert_eq!(stats.formatted_date(), "June 15, 2009");
        stats.set_date(date(2010, 3, 5));
        assert_eq!(stats.formatted_date(), "March 05, 2010");
    }

    #[test]
    fn test_clothing_at_plus_thirty() {
        let stats = stats_with_weight(200);
        assert_eq!(stats.shirt_size(), ShirtSize::Large);
        assert_eq!(stats.shirt_fit(), Fit::Loose);
        assert_eq!(stats.pant_size(), 18);
        assert_eq!(stats.pant_fit(), Fit::Loose);
    }

    #[test]
    fn test_clothing_fit_buckets() {
        let stats = stats_with_weight(178);
        assert_eq!(stats.shirt_fit(), Fit::Standard);
        assert_eq!(stats.pant_fit(), Fit::Standard);

        let stats = stats_with_weight(182);
        assert_eq!(stats.shirt_size(), ShirtSize::Medium);
        assert_eq!(stats.shirt_fit(), Fit::Tight);
        assert_eq!(stats.pant_size(), 14);
        assert_eq!(stats.pant_fit(), Fit::Tight);
    }

    #[test]
    fn test_shirt_size_clamps_at_largest() {
        let stats = stats_with_weight(500);
        assert_eq!(stats.shirt_size(), ShirtSize::XxxxxLarge);
        assert_eq!(stats.shirt_size().to_string(), "XXXXX-Large");
        assert_eq!(stats.pant_size(), 14 + 2 * 22);
    }

    #[test]
    fn test_underweight_clothing_uses_truncating_remainder() {
        // diff -30: remainder 0 against both dividers
        let stats = stats_with_weight(140);
        assert_eq!(stats.shirt_size(), ShirtSize::Medium);
        assert_eq!(stats.shirt_fit(), Fit::Loose);
        assert_eq!(stats.pant_size(), 14);
        assert_eq!(stats.pant_fit(), Fit::Loose);

        // diff -15: truncating gives -15 (Loose), a true modulo would give 15 (Tight)
        let stats = stats_with_weight(155);
        assert_eq!(stats.shirt_fit(), Fit::Loose);
        assert_eq!(CharacterStats::calculate_fit(-15, 30), Fit::Loose);
    }

    #[test]
    fn test_calculate_fit_zero_divider() {
        assert_eq!(CharacterStats::calculate_fit(12, 0), Fit::Loose);
    }

    #[test]
    fn test_pant_size_is_even_and_at_least_14() {
        for weight in (100..400).step_by(7) {
            let stats = stats_with_weight(weight);
            assert!(stats.pant_size() >= 14);
            assert_eq!(stats.pant_size() % 2, 0);
        }
    }

    #[test]
    fn test_update_clothing_sizes_is_idempotent() {
        for weight in [120, 170, 183, 200, 260, 999] {
            let mut stats = stats_with_weight(weight);
            let before = stats.clone();
            stats.update_clothing_sizes();
            stats.update_clothing_sizes();
            assert_eq!(stats, before);
        }
    }

    #[test]
    fn test_set_weight_recomputes_budget() {
        let mut stats = CharacterStats::default();
        stats.set_weight(200);
        assert_eq!(stats.weight(), 200);
        assert_eq!(stats.max_calories(), stats.calculate_bmr());
    }

    #[test]
    fn test_set_age_recomputes_budget_only() {
        let mut stats = CharacterStats::default();
        stats.set_age(30);
        assert_eq!(stats.age(), 30);
        assert_eq!(stats.max_calories(), stats.calculate_bmr());
        assert_eq!(stats.shirt_size(), ShirtSize::Medium);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut stats = CharacterStats::default();
        stats.set_weight(260);
        stats.set_age(44);
        stats.add_calories(900);
        stats.set_date(date(2012, 1, 1));
        stats.end_day();

        stats.reset_stats();
        assert_eq!(stats, CharacterStats::default());
        assert_eq!(stats.max_calories(), DEFAULT_MAX_CALORIES);
        assert_eq!(stats.formatted_date(), "June 15, 2009");
    }

    #[test]
    fn test_reset_restores_custom_profile() {
        let profile = Profile {
            age: 25,
            weight: 230,
            start_date: date(2020, 1, 1),
            ..Default::default()
        };
        let mut stats = CharacterStats::new(profile.clone());
        stats.set_weight(180);
        stats.reset_stats();
        assert_eq!(stats.weight(), 230);
        assert_eq!(stats.age(), 25);
        assert_eq!(stats.shirt_size(), ShirtSize::XLarge);
        assert_eq!(stats.profile(), &profile);
    }
}
