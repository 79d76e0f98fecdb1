//! # Application State
//!
//! Everything the shell needs between input lines, in one place. Domain data
//! lives in [`CharacterStats`]; the rest is presentation bookkeeping.
//!
//! ```text
//! App
//! ├── stats: CharacterStats       // the one character record
//! ├── panel_visible: bool         // toggled by /toggle or `s`
//! ├── status_message: String      // last thing that happened
//! └── error: Option<String>       // last command error, cleared on next input
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::stats::{CharacterStats, Profile};
use crate::core::view::StatsView;

pub struct App {
    pub stats: CharacterStats,
    pub panel_visible: bool,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    pub fn new(profile: Profile, panel_visible: bool) -> Self {
        Self {
            stats: CharacterStats::new(profile),
            panel_visible,
            status_message: String::from("Use /stats weight==200 to update character stats"),
            error: None,
        }
    }

    pub fn view(&self) -> StatsView {
        StatsView::from(&self.stats)
    }
}
