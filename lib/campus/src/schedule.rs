use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Teaching period of the day, 1 through 5.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Period(u8);

impl Period {
    pub const COUNT: u8 = 5;

    pub fn new(number: u8) -> Option<Period> {
        (1..=Self::COUNT).contains(&number).then_some(Period(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Period> {
        (1..=Self::COUNT).map(Period)
    }

    /// Start and end of the period.
    pub fn time_range(self) -> (NaiveTime, NaiveTime) {
        let (start, end) = match self.0 {
            1 => ((8, 50), (10, 20)),
            2 => ((10, 30), (12, 0)),
            3 => ((13, 0), (14, 30)),
            4 => ((14, 40), (16, 10)),
            _ => ((16, 15), (17, 45)),
        };

        (hm(start), hm(end))
    }

    /// Period running at `time`, `None` between periods and outside of
    /// teaching hours.
    pub fn at(time: NaiveTime) -> Option<Period> {
        Self::all().find(|period| {
            let (start, end) = period.time_range();
            start <= time && time < end
        })
    }
}

fn hm((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

impl TryFrom<u8> for Period {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Period::new(value).ok_or_else(|| format!("period must be 1-{}, got {value}", Self::COUNT))
    }
}

impl From<Period> for u8 {
    fn from(period: Period) -> u8 {
        period.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.time_range();
        write!(
            f,
            "period {} ({}-{})",
            self.0,
            start.format("%H:%M"),
            end.format("%H:%M")
        )
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClassSchedule {
    pub id: String,
    pub classroom_id: String,
    pub class_name: String,
    #[serde(default)]
    pub instructor: Option<String>,
    /// 0 is Monday, 6 is Sunday.
    pub day_of_week: u8,
    pub period: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClassScheduleCreate {
    pub classroom_id: String,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    pub day_of_week: u8,
    pub period: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClassScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
}

impl ClassScheduleUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ClassScheduleUpdate::default()
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScheduleWithStatus {
    pub schedule: ClassSchedule,
    pub is_active_now: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_period_bounds() {
        assert_eq!(Period::new(0), None);
        assert_eq!(Period::new(6), None);
        assert_eq!(Period::new(3).unwrap().number(), 3);
        assert_eq!(Period::all().count(), 5);
    }

    #[test]
    fn test_period_at() {
        assert_eq!(Period::at(time(8, 50)), Period::new(1));
        assert_eq!(Period::at(time(10, 25)), None);
        assert_eq!(Period::at(time(14, 40)), Period::new(4));
        assert_eq!(Period::at(time(17, 44)), Period::new(5));
        assert_eq!(Period::at(time(17, 45)), None);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(
            Period::new(2).unwrap().to_string(),
            "period 2 (10:30-12:00)"
        );
    }

    #[test]
    fn test_period_serde() {
        assert_eq!(to_value(Period::new(4).unwrap()).unwrap(), json!(4));
        assert_eq!(from_value::<Period>(json!(1)).unwrap(), Period::new(1).unwrap());
        assert!(from_value::<Period>(json!(9)).is_err());
    }

    #[test]
    fn test_schedule() {
        let schedule: ClassSchedule = from_value(json!({
            "id": "sch-001",
            "classroom_id": "bus1-203",
            "class_name": "管理会計論",
            "instructor": "山田",
            "day_of_week": 2,
            "period": 3,
            "start_time": "13:00:00",
            "end_time": "14:30:00",
            "semester": null
        }))
        .unwrap();

        assert_eq!(schedule.start_time, time(13, 0));
        assert_eq!(schedule.course_code, None);
    }

    #[test]
    fn test_create_body() {
        let body = ClassScheduleCreate {
            classroom_id: "bus1-203".to_string(),
            class_name: "管理会計論".to_string(),
            instructor: None,
            day_of_week: 0,
            period: 1,
            start_time: time(8, 50),
            end_time: time(10, 20),
            semester: Some("2025-spring".to_string()),
            course_code: None,
        };

        assert_eq!(
            to_value(&body).unwrap(),
            json!({
                "classroom_id": "bus1-203",
                "class_name": "管理会計論",
                "day_of_week": 0,
                "period": 1,
                "start_time": "08:50:00",
                "end_time": "10:20:00",
                "semester": "2025-spring"
            })
        );
    }
}
