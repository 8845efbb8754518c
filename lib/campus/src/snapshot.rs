use chrono::{DateTime, Utc};

use crate::{ActiveClass, ClassroomWithStatus, SearchMode, Status};

/// Occupancy readings older than this are not trusted.
pub const STALE_AFTER_MS: i64 = 30_000;

/// Flattened view of a room: static classroom attributes plus the dynamic
/// status the backend reported on the last fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomStatusSnapshot {
    pub id: String,
    pub room_number: String,
    pub building_id: String,
    pub faculty: String,
    pub floor: i32,
    pub capacity: u32,
    pub has_projector: bool,
    pub has_wifi: bool,
    pub has_power_outlets: bool,

    pub status: Status,
    pub occupancy: Option<u32>,
    pub occupancy_rate: f64,
    pub active_class: Option<ActiveClass>,
    pub last_updated: Option<DateTime<Utc>>,
    pub status_detail: String,
    pub image_url: Option<String>,
}

impl From<ClassroomWithStatus> for RoomStatusSnapshot {
    fn from(entry: ClassroomWithStatus) -> Self {
        let ClassroomWithStatus {
            classroom,
            occupancy,
            occupancy_rate,
            status,
            status_detail,
            active_class,
            image_url,
            ..
        } = entry;

        let (count, last_updated) = match occupancy {
            Some(reading) => (Some(reading.current_count), reading.last_updated),
            None => (None, None),
        };

        RoomStatusSnapshot {
            id: classroom.id,
            room_number: classroom.room_number,
            building_id: classroom.building_id,
            faculty: classroom.faculty,
            floor: classroom.floor,
            capacity: classroom.capacity,
            has_projector: classroom.has_projector,
            has_wifi: classroom.has_wifi,
            has_power_outlets: classroom.has_power_outlets,
            status,
            occupancy: count,
            occupancy_rate,
            active_class,
            last_updated,
            status_detail,
            image_url,
        }
    }
}

impl RoomStatusSnapshot {
    pub fn active_class_name(&self) -> Option<&str> {
        self.active_class
            .as_ref()
            .map(|class| class.class_name.as_str())
    }

    /// True when the occupancy reading cannot be trusted at `now`: it has no
    /// timestamp or the timestamp is more than [`STALE_AFTER_MS`] old.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match self.last_updated {
            Some(updated) => now.signed_duration_since(updated).num_milliseconds() > STALE_AFTER_MS,
            None => true,
        }
    }

    /// Status to display at `now`.
    ///
    /// Live searches distrust rooms without any data and readings that went
    /// stale. Scheduled searches describe a future slot: the attached
    /// occupancy is the live one, so only the reported status applies.
    pub fn effective_status(&self, now: DateTime<Utc>, mode: &SearchMode) -> Status {
        if !mode.is_live() {
            return self.status;
        }

        if self.occupancy.is_none() && self.active_class.is_none() {
            return Status::NoData;
        }

        if self.occupancy.is_some() && self.is_stale(now) {
            return Status::NoData;
        }

        match self.occupancy {
            Some(count) if self.capacity > 0 && count >= self.capacity => Status::Full,
            _ => self.status,
        }
    }

    /// Compares the fields a card shows for a changing room.
    pub fn dynamic_eq(&self, other: &RoomStatusSnapshot) -> bool {
        self.occupancy == other.occupancy
            && self.status == other.status
            && self.status_detail == other.status_detail
            && self.active_class_name() == other.active_class_name()
            && self.last_updated == other.last_updated
    }

    /// Copy of `self` carrying the dynamic fields of `fresh`. Static
    /// attributes always come from `self`.
    pub fn with_dynamic_from(&self, fresh: &RoomStatusSnapshot) -> RoomStatusSnapshot {
        RoomStatusSnapshot {
            status: fresh.status,
            occupancy: fresh.occupancy,
            occupancy_rate: fresh.occupancy_rate,
            active_class: fresh.active_class.clone(),
            last_updated: fresh.last_updated,
            status_detail: fresh.status_detail.clone(),
            image_url: fresh.image_url.clone(),
            ..self.clone()
        }
    }
}
