use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Classroom, Status};

/// Occupancy record as returned by the occupancy endpoints.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Occupancy {
    pub id: String,
    pub classroom_id: String,
    pub current_count: u32,
    pub detection_confidence: f64,
    #[serde(default, with = "crate::timestamp::option")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub camera_id: Option<String>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub occupancy_rate: f64,
}

/// Occupancy as embedded into a classroom status entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct OccupancyReading {
    pub current_count: u32,
    #[serde(default)]
    pub detection_confidence: f64,
    #[serde(default, with = "crate::timestamp::option")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActiveClass {
    pub class_name: String,
    #[serde(default)]
    pub instructor: Option<String>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// One entry of `/occupancy/classrooms-with-status`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ClassroomWithStatus {
    pub classroom: Classroom,
    pub occupancy: Option<OccupancyReading>,
    pub is_available: bool,
    pub occupancy_rate: f64,
    pub status: Status,
    #[serde(default)]
    pub status_detail: String,
    #[serde(default)]
    pub active_class: Option<ActiveClass>,
    #[serde(default)]
    pub image_url: Option<String>,
}
