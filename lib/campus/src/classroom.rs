use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Classroom {
    pub id: String,
    pub room_number: String,
    pub building_id: String,
    pub faculty: String,
    pub floor: i32,
    pub capacity: u32,
    pub has_projector: bool,
    pub has_wifi: bool,
    pub has_power_outlets: bool,
    #[serde(
        default,
        with = "crate::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ClassroomCreate {
    pub id: String,
    pub room_number: String,
    pub building_id: String,
    pub faculty: String,
    pub floor: i32,
    pub capacity: u32,
    pub has_projector: bool,
    pub has_wifi: bool,
    pub has_power_outlets: bool,
}

/// Partial update, only the fields that are set are sent.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ClassroomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projector: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wifi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_power_outlets: Option<bool>,
}

impl ClassroomUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ClassroomUpdate::default()
    }
}
