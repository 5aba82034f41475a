//! Command parser for the : command line

use super::Page;
use crate::domain::ListingFilter;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Page),
    Filter(ListingFilter),
    Catalog,
    Menu,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(str::trim).filter(|s| !s.is_empty());

    if let Some(page) = Page::from_id(cmd) {
        if args.is_none() {
            return Command::Go(page);
        }
    }

    match (cmd.to_lowercase().as_str(), args) {
        ("go" | "goto" | "open", Some(id)) => match Page::from_id(id) {
            Some(page) => Command::Go(page),
            None if id.eq_ignore_ascii_case("catalog") => Command::Catalog,
            None => Command::Unknown(input.to_string()),
        },
        ("filter" | "f", Some(name)) => match ListingFilter::from_name(name) {
            Some(filter) => Command::Filter(filter),
            None => Command::Unknown(input.to_string()),
        },
        ("catalog" | "browse", None) => Command::Catalog,
        ("menu" | "drawer", None) => Command::Menu,
        ("help" | "?", None) => Command::Help,
        ("quit" | "q", None) => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}
