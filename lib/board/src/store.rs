use std::sync::Arc;

use campus::{RoomStatusSnapshot, SearchMode, Status, StatusQuery};
use log::debug;
use tokio::sync::watch;

use crate::reconcile;

/// Number of the manual load a response belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Generation {
        Generation(self.0 + 1)
    }
}

/// What the board fetches: changing it requires a new load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scope {
    pub faculty: Option<String>,
    pub building_id: Option<String>,
    pub mode: SearchMode,
}

impl Scope {
    pub fn query(&self) -> StatusQuery {
        StatusQuery {
            faculty: self.faculty.clone(),
            building_id: self.building_id.clone(),
            available_only: false,
            mode: self.mode,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub scope: Scope,
    /// Applied locally, never sent to the backend.
    pub status: Option<Status>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub rooms: Vec<Arc<RoomStatusSnapshot>>,
    pub criteria: Criteria,
    pub phase: Phase,
    pub generation: Generation,
}

/// Single owner of the board's view state. Clones share the same state and
/// every change is published to subscribers.
#[derive(Clone)]
pub struct Store {
    sender: Arc<watch::Sender<ViewState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Store {
        let (sender, _) = watch::channel(ViewState::default());

        Store {
            sender: Arc::new(sender),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.sender.subscribe()
    }

    pub fn state(&self) -> ViewState {
        self.sender.borrow().clone()
    }

    /// Starts a manual load of `scope`. Responses issued under any earlier
    /// generation are discarded from now on.
    pub fn begin_load(&self, scope: Scope) -> Generation {
        let mut generation = Generation::default();

        self.sender.send_modify(|state| {
            state.generation = state.generation.next();
            state.criteria.scope = scope;
            state.phase = Phase::Loading;
            state.rooms.clear();

            generation = state.generation;
        });

        debug!("load {:?} started", generation);

        generation
    }

    pub fn finish_load(&self, generation: Generation, rooms: Vec<RoomStatusSnapshot>) -> bool {
        self.sender.send_if_modified(|state| {
            if state.generation != generation {
                debug!("discarding load of {:?}", generation);
                return false;
            }

            state.rooms = rooms.into_iter().map(Arc::new).collect();
            state.phase = Phase::Ready;

            true
        })
    }

    pub fn fail_load(&self, generation: Generation, message: String) -> bool {
        self.sender.send_if_modified(|state| {
            if state.generation != generation {
                debug!("discarding failure of {:?}", generation);
                return false;
            }

            state.rooms.clear();
            state.phase = Phase::Failed(message);

            true
        })
    }

    /// Merges a poll response. Subscribers are notified only when a room
    /// actually changed.
    pub fn apply_poll(&self, generation: Generation, fresh: &[RoomStatusSnapshot]) -> bool {
        self.sender.send_if_modified(|state| {
            if state.generation != generation || state.phase != Phase::Ready {
                debug!("discarding poll of {:?}", generation);
                return false;
            }

            let changed = reconcile(&mut state.rooms, fresh);
            if changed > 0 {
                debug!("poll changed {} rooms", changed);
            }

            changed > 0
        })
    }

    pub fn set_status_filter(&self, status: Option<Status>) -> bool {
        self.sender.send_if_modified(|state| {
            if state.criteria.status == status {
                return false;
            }

            state.criteria.status = status;
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{campus_rooms, room};

    fn business() -> Scope {
        Scope {
            faculty: Some("business".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_load() {
        let store = Store::new();
        let mut rx = store.subscribe();

        let generation = store.begin_load(business());
        assert_eq!(store.state().phase, Phase::Loading);
        assert_eq!(store.state().criteria.scope, business());

        assert!(store.finish_load(generation, campus_rooms()));
        assert!(rx.has_changed().unwrap());

        let state = rx.borrow_and_update().clone();
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.rooms.len(), 10);
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let store = Store::new();

        let first = store.begin_load(Scope::default());
        let second = store.begin_load(business());
        assert!(first < second);

        let mut rx = store.subscribe();

        assert!(!store.finish_load(first, campus_rooms()));
        assert!(!store.fail_load(first, "API error: 500".to_string()));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.state().phase, Phase::Loading);

        let rooms = vec![room("bus-1-101", "経営1-101", "business", Some(3), Status::Available)];
        assert!(store.finish_load(second, rooms));
        assert_eq!(store.state().rooms.len(), 1);

        let fresh = vec![room("bus-1-101", "経営1-101", "business", Some(9), Status::InUse)];
        assert!(!store.apply_poll(first, &fresh));
        assert_eq!(store.state().rooms[0].occupancy, Some(3));

        assert!(store.apply_poll(second, &fresh));
        assert_eq!(store.state().rooms[0].occupancy, Some(9));
    }

    #[test]
    fn test_failed_load() {
        let store = Store::new();

        let generation = store.begin_load(Scope::default());
        assert!(store.fail_load(generation, "API error: 503".to_string()));

        let state = store.state();
        assert_eq!(state.phase, Phase::Failed("API error: 503".to_string()));
        assert!(state.rooms.is_empty());

        assert!(!store.apply_poll(generation, &campus_rooms()));
    }

    #[test]
    fn test_unchanged_poll_does_not_notify() {
        let store = Store::new();

        let generation = store.begin_load(Scope::default());
        store.finish_load(generation, campus_rooms());

        let mut rx = store.subscribe();
        rx.borrow_and_update();

        assert!(!store.apply_poll(generation, &campus_rooms()));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_status_filter() {
        let store = Store::new();
        let mut rx = store.subscribe();

        assert!(store.set_status_filter(Some(Status::Available)));
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        assert!(!store.set_status_filter(Some(Status::Available)));
        assert!(!rx.has_changed().unwrap());

        store.begin_load(business());
        assert_eq!(store.state().criteria.status, Some(Status::Available));
    }
}
