//! Chat command parsing.

use std::fmt;

/// Lifecycle operation requested on a remote bot endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Stop,
}

impl ControlAction {
    /// Wire token appended to the endpoint URL.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlAction::Start => "on",
            ControlAction::Stop => "off",
        }
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `!startbot <name>` / `!stopbot <name>`. The name is optional at the
    /// parse level so the dispatcher can answer with the configured listing.
    Control {
        action: ControlAction,
        bot: Option<String>,
    },
    /// `!listbots`
    ListBots,
}

/// Parse a raw message into a command.
///
/// The first whitespace token is the verb, matched case-insensitively.
/// Anything that is not a recognized verb (including empty input) returns
/// `None` so unrelated chat is ignored rather than rejected.
pub fn parse(text: &str) -> Option<Command> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let verb = parts.first()?.to_lowercase();

    match verb.as_str() {
        "!startbot" => Some(Command::Control {
            action: ControlAction::Start,
            bot: parts.get(1).map(|s| s.to_string()),
        }),
        "!stopbot" => Some(Command::Control {
            action: ControlAction::Stop,
            bot: parts.get(1).map(|s| s.to_string()),
        }),
        "!listbots" => Some(Command::ListBots),
        _ => None,
    }
}
