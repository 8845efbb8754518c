use std::time::Duration;

use board::Scope;
use campus::{SearchMode, Status};

use crate::command::{all_or, parse_building, parse_faculty, parse_mode, parse_status, ParseError};
use crate::error::Error;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub poll_interval: Duration,
    pub scope: Scope,
    pub status: Option<Status>,
    pub token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Config, Error> {
        let var = |name: &str| var(name).filter(|value| !value.trim().is_empty());

        let api_url = var("CAMPUS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let poll_interval = match var("POLL_INTERVAL_MS") {
            Some(value) => {
                parse_interval(&value).map_err(|err| Error::config("POLL_INTERVAL_MS", err))?
            }
            None => Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        };

        let faculty = var("FACULTY")
            .map(|value| all_or(&value, parse_faculty))
            .transpose()
            .map_err(|err| Error::config("FACULTY", err))?
            .flatten();

        let building = var("BUILDING")
            .map(|value| all_or(&value, parse_building))
            .transpose()
            .map_err(|err| Error::config("BUILDING", err))?
            .flatten();

        let status = var("STATUS")
            .map(|value| all_or(&value, parse_status))
            .transpose()
            .map_err(|err| Error::config("STATUS", err))?
            .flatten();

        let mode = match (var("TARGET_DATE"), var("TARGET_PERIOD")) {
            (Some(date), Some(period)) => {
                parse_mode(&date, &period).map_err(|err| Error::config("TARGET_DATE", err))?
            }
            (None, None) => SearchMode::Now,
            _ => {
                return Err(Error::Config(
                    "TARGET_DATE and TARGET_PERIOD must be set together".to_string(),
                ))
            }
        };

        let faculty = match (faculty, building) {
            (Some(faculty), Some(building)) if building.faculty != faculty => {
                return Err(Error::Config(format!(
                    "BUILDING: {} does not belong to {}",
                    building.id, faculty
                )))
            }
            (None, Some(building)) => Some(building.faculty),
            (faculty, _) => faculty,
        };

        Ok(Config {
            api_url,
            poll_interval,
            scope: Scope {
                faculty: faculty.map(|faculty| faculty.to_string()),
                building_id: building.map(|building| building.id.to_string()),
                mode,
            },
            status,
            token: var("CAMPUS_TOKEN"),
        })
    }
}

fn parse_interval(value: &str) -> Result<Duration, ParseError> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ParseError::new(format!(
            "expected a positive number of milliseconds, got {value}"
        ))),
        Ok(millis) => Ok(Duration::from_millis(millis)),
    }
}
