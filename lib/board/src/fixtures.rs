use campus::{RoomStatusSnapshot, Status};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 10, 45, 0).unwrap()
}

/// Room reported five seconds before [`now`]. The building is the id without
/// its last segment.
pub fn room(
    id: &str,
    room_number: &str,
    faculty: &str,
    occupancy: Option<u32>,
    status: Status,
) -> RoomStatusSnapshot {
    let building_id = id.rsplit_once('-').map(|(building, _)| building).unwrap();

    RoomStatusSnapshot {
        id: id.to_string(),
        room_number: room_number.to_string(),
        building_id: building_id.to_string(),
        faculty: faculty.to_string(),
        floor: 1,
        capacity: 130,
        has_projector: true,
        has_wifi: true,
        has_power_outlets: false,
        status,
        occupancy,
        occupancy_rate: occupancy.map(|count| count as f64 / 130.0).unwrap_or_default(),
        active_class: None,
        last_updated: occupancy.map(|_| now() - TimeDelta::seconds(5)),
        status_detail: String::new(),
        image_url: None,
    }
}

/// Ten rooms over every faculty, three of them in business.
pub fn campus_rooms() -> Vec<RoomStatusSnapshot> {
    let mut stale = room("edu-6-105", "教育6-105", "education", Some(3), Status::Available);
    stale.last_updated = Some(now() - TimeDelta::seconds(60));

    vec![
        room("bus-1-301", "経営1-301", "business", Some(40), Status::Available),
        room("eng-a-104", "A-104", "engineering", Some(70), Status::Occupied),
        room("bus-1-101", "経営1-101", "business", Some(5), Status::Available),
        room("edu-7-201", "教育7-201", "education", Some(20), Status::InUse),
        room("econ-1-102", "経済1-102", "economics", None, Status::Available),
        room("bus-2-201", "経営2-201", "business", Some(130), Status::Occupied),
        room("eng-b-201", "B-201", "engineering", Some(0), Status::Available),
        room("urban-8-401", "都市8-401", "urban-sciences", Some(12), Status::InUse),
        stale,
        room("econ-2-301", "経済2-301", "economics", Some(90), Status::Occupied),
    ]
}
