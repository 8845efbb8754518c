//! Pure filtering, ordering and grouping of the displayed rooms.

use std::sync::Arc;

use campus::{RoomStatusSnapshot, Status};
use chrono::{DateTime, Utc};

use crate::{Criteria, ViewState};

/// Room with the status it should be displayed with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<'a> {
    pub room: &'a RoomStatusSnapshot,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group<'a> {
    pub faculty: &'a str,
    pub entries: Vec<Entry<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct View<'a> {
    pub groups: Vec<Group<'a>>,
    pub total: usize,
    pub available: usize,
}

impl<'a> View<'a> {
    pub fn new(state: &'a ViewState, now: DateTime<Utc>) -> View<'a> {
        let mut entries = filter(&state.rooms, &state.criteria, now);
        sort_by_room_number(&mut entries);

        let total = entries.len();
        let available = available_count(&entries);

        View {
            groups: group_by_faculty(entries),
            total,
            available,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

pub fn matches_scope(room: &RoomStatusSnapshot, criteria: &Criteria) -> bool {
    let scope = &criteria.scope;

    scope
        .faculty
        .as_ref()
        .map_or(true, |faculty| &room.faculty == faculty)
        && scope
            .building_id
            .as_ref()
            .map_or(true, |building_id| &room.building_id == building_id)
}

/// Rooms inside the scope whose status at `now` passes the status filter.
pub fn filter<'a>(
    rooms: &'a [Arc<RoomStatusSnapshot>],
    criteria: &Criteria,
    now: DateTime<Utc>,
) -> Vec<Entry<'a>> {
    rooms
        .iter()
        .filter(|room| matches_scope(room, criteria))
        .map(|room| Entry {
            room,
            status: room.effective_status(now, &criteria.scope.mode),
        })
        .filter(|entry| criteria.status.map_or(true, |status| entry.status == status))
        .collect()
}

pub fn sort_by_room_number(entries: &mut [Entry]) {
    entries.sort_by(|lhs, rhs| lhs.room.room_number.cmp(&rhs.room.room_number));
}

/// Groups in the order their faculty first appears in `entries`.
pub fn group_by_faculty(entries: Vec<Entry>) -> Vec<Group> {
    let mut groups: Vec<Group> = vec![];

    for entry in entries {
        let faculty = entry.room.faculty.as_str();

        match groups.iter_mut().find(|group| group.faculty == faculty) {
            Some(group) => group.entries.push(entry),
            None => groups.push(Group {
                faculty,
                entries: vec![entry],
            }),
        }
    }

    groups
}

pub fn available_count(entries: &[Entry]) -> usize {
    entries
        .iter()
        .filter(|entry| entry.status.is_available())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{campus_rooms, now};
    use crate::{Phase, Scope};

    fn state(criteria: Criteria) -> ViewState {
        ViewState {
            rooms: campus_rooms().into_iter().map(Arc::new).collect(),
            criteria,
            phase: Phase::Ready,
            ..Default::default()
        }
    }

    fn room_numbers(view: &View) -> Vec<String> {
        view.groups
            .iter()
            .flat_map(|group| group.entries.iter())
            .map(|entry| entry.room.room_number.clone())
            .collect()
    }

    #[test]
    fn test_faculty_filter() {
        let state = state(Criteria {
            scope: Scope {
                faculty: Some("business".to_string()),
                ..Default::default()
            },
            status: None,
        });

        let view = View::new(&state, now());

        assert_eq!(view.total, 3);
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].faculty, "business");
        assert_eq!(
            room_numbers(&view),
            vec!["経営1-101", "経営1-301", "経営2-201"]
        );
    }

    #[test]
    fn test_building_filter() {
        let state = state(Criteria {
            scope: Scope {
                building_id: Some("bus-1".to_string()),
                ..Default::default()
            },
            status: None,
        });

        let view = View::new(&state, now());

        assert_eq!(room_numbers(&view), vec!["経営1-101", "経営1-301"]);
    }

    #[test]
    fn test_groups_follow_sorted_order() {
        let state = state(Criteria::default());
        let view = View::new(&state, now());

        let faculties: Vec<&str> = view.groups.iter().map(|group| group.faculty).collect();

        assert_eq!(
            faculties,
            vec![
                "engineering",
                "education",
                "business",
                "economics",
                "urban-sciences"
            ]
        );
        assert_eq!(view.total, 10);
        assert_eq!(view.available, 3);
    }

    #[test]
    fn test_available_filter() {
        let state = state(Criteria {
            scope: Scope::default(),
            status: Some(Status::Available),
        });

        let view = View::new(&state, now());

        assert_eq!(room_numbers(&view), vec!["B-201", "経営1-101", "経営1-301"]);
        assert_eq!(view.available, 3);
    }

    #[test]
    fn test_status_filter_is_exclusive() {
        let expected = [
            (Status::Available, vec!["B-201", "経営1-101", "経営1-301"]),
            (Status::InUse, vec!["教育7-201", "都市8-401"]),
            (Status::Occupied, vec!["A-104", "経済2-301"]),
            (Status::Full, vec!["経営2-201"]),
            (Status::NoData, vec!["教育6-105", "経済1-102"]),
        ];

        for (status, rooms) in expected {
            let state = state(Criteria {
                scope: Scope::default(),
                status: Some(status),
            });

            let view = View::new(&state, now());

            assert_eq!(room_numbers(&view), rooms, "{status}");
            assert!(view
                .groups
                .iter()
                .flat_map(|group| group.entries.iter())
                .all(|entry| entry.status == status));
        }
    }

    #[test]
    fn test_sort_is_stable() {
        let rooms: Vec<Arc<RoomStatusSnapshot>> = campus_rooms()
            .into_iter()
            .map(|mut room| {
                room.room_number = "101".to_string();
                Arc::new(room)
            })
            .collect();

        let mut entries = filter(&rooms, &Criteria::default(), now());
        sort_by_room_number(&mut entries);

        let ids: Vec<&str> = entries.iter().map(|entry| entry.room.id.as_str()).collect();
        let original: Vec<&str> = rooms.iter().map(|room| room.id.as_str()).collect();

        assert_eq!(ids, original);
    }

    #[test]
    fn test_empty_view() {
        let state = ViewState::default();
        let view = View::new(&state, now());

        assert!(view.is_empty());
        assert!(view.groups.is_empty());
        assert_eq!(view.available, 0);
    }
}
