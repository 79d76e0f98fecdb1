//! # Actions
//!
//! Everything that can happen to the character becomes an `Action`.
//! User types `/stats END_DAY`? That's `Action::Command("END_DAY")`.
//! Polling timer fires? That's `Action::Refresh`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an [`Effect`] telling the adapter what to do next.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::command;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw command text for the command processor.
    Command(String),
    AddCalories(u32),
    Reset,
    TogglePanel,
    /// Polling tick from the adapter.
    Refresh,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// State changed, redraw the panel.
    Render,
    /// Redraw only if the snapshot differs from the last one shown.
    RenderIfChanged,
    /// Report `App::error`.
    ShowError,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Command(input) => {
            app.error = None;
            match command::execute(&mut app.stats, &input) {
                Ok(Some(cmd)) => {
                    app.status_message = format!("Applied {:?}", cmd);
                    Effect::Render
                }
                Ok(None) => {
                    debug!("No command in input: {:?}", input);
                    Effect::None
                }
                Err(e) => {
                    warn!("Rejected command {:?}: {}", input, e);
                    app.error = Some(e.to_string());
                    Effect::ShowError
                }
            }
        }
        Action::AddCalories(calories) => {
            app.stats.add_calories(calories);
            app.status_message = format!("Ate {} calories", calories);
            Effect::Render
        }
        Action::Reset => {
            app.stats.reset_stats();
            app.status_message = String::from("Stats reset");
            Effect::Render
        }
        Action::TogglePanel => {
            app.panel_visible = !app.panel_visible;
            info!("Stats panel visible: {}", app.panel_visible);
            if app.panel_visible {
                Effect::Render
            } else {
                Effect::None
            }
        }
        Action::Refresh => {
            if app.panel_visible {
                Effect::RenderIfChanged
            } else {
                Effect::None
            }
        }
        Action::Quit => Effect::Quit,
    }
}
