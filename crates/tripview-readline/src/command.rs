//! REPL command parsing.

use tripview_core::trip::{ActivityId, DayId};

/// Commands offered for completion.
pub const COMMANDS: &[&str] = &["/day", "/hover", "/leave", "/show", "/help"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectDay(DayId),
    Hover(ActivityId),
    Leave,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Empty command".to_string());
        };
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(format!("Too many arguments for {head}"));
        }

        match (head, arg) {
            ("quit" | "exit", None) => Ok(Self::Quit),
            ("/day", Some(id)) => parse_id(id).map(Self::SelectDay),
            ("/hover", Some(id)) => parse_id(id).map(Self::Hover),
            ("/day" | "/hover", None) => Err(format!("Usage: {head} <id>")),
            ("/leave", None) => Ok(Self::Leave),
            ("/show", None) => Ok(Self::Show),
            ("/help", None) => Ok(Self::Help),
            _ => Err(format!("Unknown command: {input}")),
        }
    }
}

fn parse_id(raw: &str) -> Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("'{raw}' is not a valid id"))
}

pub fn help_text() -> &'static str {
    "/day <id>      select a day\n\
     /hover <id>    highlight an activity on the map\n\
     /leave         clear the highlight\n\
     /show          redraw the itinerary\n\
     quit           exit"
}
