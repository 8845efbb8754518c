use std::collections::HashMap;
use std::sync::Arc;

use campus::RoomStatusSnapshot;

/// Merges a freshly fetched list into the displayed one.
///
/// A displayed room is replaced only when its counterpart in `fresh` differs
/// in a field a card shows, and then only its dynamic fields change. Rooms
/// missing from `fresh` are kept as they are, rooms only present in `fresh`
/// are ignored. Returns the number of replaced rooms.
pub fn reconcile(rooms: &mut [Arc<RoomStatusSnapshot>], fresh: &[RoomStatusSnapshot]) -> usize {
    let fresh: HashMap<&str, &RoomStatusSnapshot> =
        fresh.iter().map(|room| (room.id.as_str(), room)).collect();

    let mut changed = 0;

    for room in rooms.iter_mut() {
        let Some(update) = fresh.get(room.id.as_str()).copied() else {
            continue;
        };

        if room.dynamic_eq(update) {
            continue;
        }

        *room = Arc::new(room.with_dynamic_from(update));
        changed += 1;
    }

    changed
}
