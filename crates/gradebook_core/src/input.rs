//! Console input parsing.
//!
//! # Responsibility
//! - Turn raw console lines into commands, menu choices and record entries.
//!
//! # Invariants
//! - Parsing never fails hard; unrecognized input maps to `None`/`Entry`.
//! - Entry parts are returned trimmed and non-empty.

use once_cell::sync::Lazy;
use regex::Regex;

static ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^,]*),([^,]*)$").expect("valid entry regex"));

/// Top-level console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Menu,
    /// Anything else; may or may not be a valid `Name, Grade` entry.
    Entry(&'a str),
}

/// Classifies one line typed at the main prompt.
pub fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("exit") {
        Command::Exit
    } else if trimmed.eq_ignore_ascii_case("menu") {
        Command::Menu
    } else {
        Command::Entry(trimmed)
    }
}

/// Splits a `Name, Grade` line into its two trimmed parts.
///
/// Returns `None` unless the line has exactly one comma and both sides are
/// non-blank. The grade part is not validated here.
pub fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let captures = ENTRY_RE.captures(line.trim())?;
    let name = captures.get(1)?.as_str().trim();
    let grade = captures.get(2)?.as_str().trim();
    if name.is_empty() || grade.is_empty() {
        return None;
    }
    Some((name, grade))
}

/// Numbered choices offered by the record menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ViewAll,
    TopStudent,
    Filter,
    Statistics,
    Back,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::AddStudent),
            "2" => Some(Self::ViewAll),
            "3" => Some(Self::TopStudent),
            "4" => Some(Self::Filter),
            "5" => Some(Self::Statistics),
            "6" => Some(Self::Back),
            _ => None,
        }
    }
}
