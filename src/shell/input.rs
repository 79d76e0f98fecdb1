use crate::core::action::Action;

/// Shell input events, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    // Core actions (passed to core::update)
    Stats(String),
    Eat(u32),
    Reset,
    TogglePanel,
    Quit,

    // Shell-local events (handled directly in the shell)
    Help,
    Invalid(String),
}

impl ShellEvent {
    /// The core action for this event, or `None` for shell-local events.
    pub fn into_action(self) -> Option<Action> {
        match self {
            ShellEvent::Stats(text) => Some(Action::Command(text)),
            ShellEvent::Eat(calories) => Some(Action::AddCalories(calories)),
            ShellEvent::Reset => Some(Action::Reset),
            ShellEvent::TogglePanel => Some(Action::TogglePanel),
            ShellEvent::Quit => Some(Action::Quit),
            ShellEvent::Help | ShellEvent::Invalid(_) => None,
        }
    }
}

/// Maps one input line to an event. Blank lines produce nothing.
///
/// Lines that are not slash commands go straight to the command processor,
/// the same as `/stats <line>`.
pub fn parse_line(line: &str) -> Option<ShellEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    // Single `s` toggles the panel, like the host's key binding
    if line == "s" {
        return Some(ShellEvent::TogglePanel);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Some(ShellEvent::Stats(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let event = match name {
        "stats" => ShellEvent::Stats(arg.to_string()),
        "eat" => match arg.parse::<u32>() {
            Ok(calories) => ShellEvent::Eat(calories),
            Err(_) => ShellEvent::Invalid(format!("usage: /eat <calories>, got {:?}", arg)),
        },
        "reset" => ShellEvent::Reset,
        "toggle" => ShellEvent::TogglePanel,
        "help" => ShellEvent::Help,
        "quit" | "exit" => ShellEvent::Quit,
        other => ShellEvent::Invalid(format!("unknown shell command: /{other}")),
    };
    Some(event)
}
