use std::fmt;
use std::str::FromStr;

use campus::{Building, Faculty, Period, SearchMode, Status};
use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Faculty(Option<Faculty>),
    Building(Option<&'static Building>),
    Status(Option<Status>),
    At(SearchMode),
    Now,
    Refresh,
    Favorite(String),
    Unfavorite(String),
    History,
    DeleteSearch(String),
    ClearHistory,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  faculty <id>|all            education, engineering, economics, business, urban-sciences
  building <id>|all           e.g. bus-1, eng-a
  status <status>|all         available, in-use, occupied, full, no-data
  at <YYYY-MM-DD> <period>    rooms scheduled for a period (1-5)
  now                         live rooms
  refresh                     reload the current search
  fav <room-id>               mark a room as favourite
  unfav <room-id>             unmark a favourite room
  history                     recent searches
  history delete <id>         forget one recent search
  history clear               forget all recent searches
  quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError(String);

impl ParseError {
    pub fn new(message: impl Into<String>) -> ParseError {
        ParseError(message.into())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["faculty", id] => Ok(Command::Faculty(all_or(id, parse_faculty)?)),
            ["building", id] => Ok(Command::Building(all_or(id, parse_building)?)),
            ["status", status] => Ok(Command::Status(all_or(status, parse_status)?)),
            ["at", date, period] => Ok(Command::At(parse_mode(date, period)?)),
            ["now"] => Ok(Command::Now),
            ["refresh"] => Ok(Command::Refresh),
            ["fav", id] => Ok(Command::Favorite(id.to_string())),
            ["unfav", id] => Ok(Command::Unfavorite(id.to_string())),
            ["history"] => Ok(Command::History),
            ["history", "delete", id] => Ok(Command::DeleteSearch(id.to_string())),
            ["history", "clear"] => Ok(Command::ClearHistory),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            [] => Err(ParseError("empty command".to_string())),
            _ => Err(ParseError(format!("unknown command: {}", line.trim()))),
        }
    }
}

/// `None` for `all`, otherwise whatever `parse` makes of `value`.
pub fn all_or<T>(
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Result<Option<T>, ParseError> {
    if value == "all" {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

pub fn parse_faculty(id: &str) -> Result<Faculty, ParseError> {
    id.parse()
        .map_err(|_| ParseError(format!("unknown faculty: {id}")))
}

pub fn parse_building(id: &str) -> Result<&'static Building, ParseError> {
    Building::find(id).ok_or_else(|| ParseError(format!("unknown building: {id}")))
}

/// Only the displayed statuses are accepted, not the backend's aliases.
pub fn parse_status(value: &str) -> Result<Status, ParseError> {
    Status::ALL
        .iter()
        .copied()
        .find(|status| status.to_string() == value)
        .ok_or_else(|| ParseError(format!("unknown status: {value}")))
}

pub fn parse_mode(date: &str, period: &str) -> Result<SearchMode, ParseError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|err| ParseError(format!("invalid date {date}: {err}")))?;

    let period = period
        .parse::<u8>()
        .ok()
        .and_then(Period::new)
        .ok_or_else(|| ParseError(format!("invalid period {period}, expected 1-5")))?;

    Ok(SearchMode::Future { date, period })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn test_scope_commands() {
        assert_eq!(
            parse("faculty business"),
            Ok(Command::Faculty(Some(Faculty::Business)))
        );
        assert_eq!(parse("faculty all"), Ok(Command::Faculty(None)));
        assert_eq!(
            parse("  building   eng-a "),
            Ok(Command::Building(Building::find("eng-a")))
        );
        assert_eq!(parse("building all"), Ok(Command::Building(None)));
    }

    #[test]
    fn test_status_command() {
        assert_eq!(
            parse("status in-use"),
            Ok(Command::Status(Some(Status::InUse)))
        );
        assert_eq!(parse("status all"), Ok(Command::Status(None)));

        assert!(parse("status in-class").is_err());
        assert!(parse("status busy").is_err());
    }

    #[test]
    fn test_at_command() {
        assert_eq!(
            parse("at 2025-06-04 3"),
            Ok(Command::At(SearchMode::Future {
                date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
                period: Period::new(3).unwrap(),
            }))
        );

        assert!(parse("at 2025-06-04 6").is_err());
        assert!(parse("at 2025-13-01 1").is_err());
        assert!(parse("at tomorrow").is_err());
    }

    #[test]
    fn test_invalid_commands() {
        assert_eq!(
            parse("faculty law"),
            Err(ParseError("unknown faculty: law".to_string()))
        );
        assert_eq!(
            parse("building bus-9"),
            Err(ParseError("unknown building: bus-9".to_string()))
        );
        assert_eq!(parse(""), Err(ParseError("empty command".to_string())));
        assert_eq!(
            parse("dance"),
            Err(ParseError("unknown command: dance".to_string()))
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("now"), Ok(Command::Now));
        assert_eq!(parse("refresh"), Ok(Command::Refresh));
        assert_eq!(
            parse("fav bus-1-101"),
            Ok(Command::Favorite("bus-1-101".to_string()))
        );
        assert_eq!(
            parse("unfav bus-1-101"),
            Ok(Command::Unfavorite("bus-1-101".to_string()))
        );
        assert_eq!(parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_history_commands() {
        assert_eq!(parse("history"), Ok(Command::History));
        assert_eq!(
            parse("history delete h-1"),
            Ok(Command::DeleteSearch("h-1".to_string()))
        );
        assert_eq!(parse("history clear"), Ok(Command::ClearHistory));

        assert!(parse("history delete").is_err());
        assert!(parse("history clear all").is_err());
    }
}
