//! Line-editor helper: completes commands and the ids of the loaded trip.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tripview_core::trip::{ActivityId, Day, DayId, Trip};

use crate::command::COMMANDS;

#[derive(Debug, Clone, Default)]
pub struct ViewerHelper {
    day_ids: Vec<DayId>,
    activity_ids: Vec<ActivityId>,
}

impl ViewerHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes the completable ids after the trip or active day changed.
    pub fn sync(&mut self, trip: Option<&Trip>, active_day: Option<&Day>) {
        self.day_ids = trip
            .map(|t| t.days.iter().map(|d| d.id).collect())
            .unwrap_or_default();
        self.activity_ids = active_day
            .map(|d| d.activities.iter().map(|a| a.id).collect())
            .unwrap_or_default();
    }

    /// Completion start offset and candidates for the text before the cursor.
    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        match line.split_once(' ') {
            None if line.starts_with('/') => (
                0,
                COMMANDS
                    .iter()
                    .filter(|cmd| cmd.starts_with(line))
                    .map(|cmd| cmd.to_string())
                    .collect(),
            ),
            Some((command, partial)) if !partial.contains(' ') => {
                let ids = match command {
                    "/day" => &self.day_ids,
                    "/hover" => &self.activity_ids,
                    _ => return (0, vec![]),
                };
                let start = command.len() + 1;
                let matches = ids
                    .iter()
                    .map(|id| id.to_string())
                    .filter(|id| id.starts_with(partial))
                    .collect();
                (start, matches)
            }
            _ => (0, vec![]),
        }
    }

    fn is_known_command(line: &str) -> bool {
        let head = line.split_whitespace().next().unwrap_or_default();
        COMMANDS.contains(&head) || matches!(head, "quit" | "exit")
    }
}

impl Helper for ViewerHelper {}

impl Completer for ViewerHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = self.candidates(&line[..pos]);
        let pairs = candidates
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for ViewerHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            Borrowed(line)
        } else if Self::is_known_command(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Owned(line.red().to_string())
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ViewerHelper {
    type Hint = String;

    /// Completes a unique candidate inline, otherwise hints the argument.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        match line {
            "/day " => return Some("<day id>".dimmed().to_string()),
            "/hover " => return Some("<activity id>".dimmed().to_string()),
            _ => {}
        }

        let (start, candidates) = self.candidates(line);
        let typed = &line[start..];
        match candidates.as_slice() {
            [only] if only.len() > typed.len() => Some(only[typed.len()..].to_string()),
            _ => None,
        }
    }
}

impl Validator for ViewerHelper {}
