use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Period;

/// Whether the board shows the live situation or a scheduled slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "search_mode", rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Now,
    Future {
        #[serde(rename = "target_date")]
        date: NaiveDate,
        #[serde(rename = "target_period")]
        period: Period,
    },
}

impl SearchMode {
    pub fn is_live(&self) -> bool {
        matches!(self, SearchMode::Now)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Now => write!(f, "now"),
            SearchMode::Future { date, period } => write!(f, "{date} {period}"),
        }
    }
}

/// Query of `/occupancy/classrooms-with-status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StatusQuery {
    pub faculty: Option<String>,
    pub building_id: Option<String>,
    pub available_only: bool,
    pub mode: SearchMode,
}

impl StatusQuery {
    /// Query string pairs in the order the backend documents them. Unset
    /// filters are omitted.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![];

        if let Some(faculty) = &self.faculty {
            pairs.push(("faculty", faculty.clone()));
        }

        if let Some(building_id) = &self.building_id {
            pairs.push(("building_id", building_id.clone()));
        }

        if self.available_only {
            pairs.push(("available_only", "true".to_string()));
        }

        if let SearchMode::Future { date, period } = self.mode {
            pairs.push(("target_date", date.format("%Y-%m-%d").to_string()));
            pairs.push(("target_period", period.number().to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn test_empty_query() {
        assert!(StatusQuery::default().pairs().is_empty());
    }

    #[test]
    fn test_full_query() {
        let query = StatusQuery {
            faculty: Some("business".to_string()),
            building_id: Some("bus-2".to_string()),
            available_only: true,
            mode: SearchMode::Future {
                date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
                period: Period::new(2).unwrap(),
            },
        };

        assert_eq!(
            query.pairs(),
            vec![
                ("faculty", "business".to_string()),
                ("building_id", "bus-2".to_string()),
                ("available_only", "true".to_string()),
                ("target_date", "2025-06-03".to_string()),
                ("target_period", "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_mode_serialization() {
        assert_eq!(
            to_value(SearchMode::Now).unwrap(),
            json!({"search_mode": "now"})
        );

        let mode = SearchMode::Future {
            date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            period: Period::new(5).unwrap(),
        };

        assert_eq!(
            to_value(mode).unwrap(),
            json!({"search_mode": "future", "target_date": "2025-06-03", "target_period": 5})
        );
        assert_eq!(mode.to_string(), "2025-06-03 period 5 (16:15-17:45)");
    }
}
