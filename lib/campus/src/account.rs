use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Classroom, Period, SearchMode, Status};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Favorite {
    pub id: String,
    pub classroom_id: String,
    pub classroom: Classroom,
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchHistory {
    pub id: String,
    pub faculty: Option<String>,
    pub building_id: Option<String>,
    pub status: Option<String>,
    pub search_mode: String,
    pub target_date: Option<NaiveDate>,
    pub target_period: Option<u8>,
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SearchHistory {
    /// Search mode of the entry, `None` when the stored target is incomplete.
    pub fn mode(&self) -> Option<SearchMode> {
        match self.search_mode.as_str() {
            "now" => Some(SearchMode::Now),
            "future" => Some(SearchMode::Future {
                date: self.target_date?,
                period: Period::new(self.target_period?)?,
            }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SearchHistoryCreate {
    pub faculty: Option<String>,
    pub building_id: Option<String>,
    pub status: Option<Status>,
    #[serde(flatten)]
    pub mode: SearchMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    #[test]
    fn test_history_create() {
        let entry = SearchHistoryCreate {
            faculty: Some("economics".to_string()),
            building_id: None,
            status: Some(Status::Available),
            mode: SearchMode::Now,
        };

        assert_eq!(
            to_value(&entry).unwrap(),
            json!({
                "faculty": "economics",
                "building_id": null,
                "status": "available",
                "search_mode": "now"
            })
        );
    }

    #[test]
    fn test_history_mode() {
        let entry: SearchHistory = from_value(json!({
            "id": "hist_u1_2025-06-02T10-00-00-000000",
            "faculty": null,
            "building_id": "eng-a",
            "status": null,
            "search_mode": "future",
            "target_date": "2025-06-04",
            "target_period": 3,
            "created_at": "2025-06-02T10:00:00"
        }))
        .unwrap();

        assert_eq!(
            entry.mode(),
            Some(SearchMode::Future {
                date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
                period: Period::new(3).unwrap(),
            })
        );

        let broken = SearchHistory {
            target_period: None,
            ..entry
        };
        assert_eq!(broken.mode(), None);
    }
}
