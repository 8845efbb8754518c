use std::collections::HashSet;
use std::fmt::Write;
use std::time::Duration;

use board::{Entry, Phase, View, ViewState};
use campus::Faculty;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use unicode_width::UnicodeWidthStr;

/// Hands the board text to `output` whenever it changes. The timer catches
/// rooms whose readings went stale without any new data arriving.
pub async fn render_updates(
    mut rooms: watch::Receiver<ViewState>,
    mut favorites: watch::Receiver<HashSet<String>>,
    period: Duration,
    clock: impl Fn() -> DateTime<Utc>,
    mut output: impl FnMut(&str),
) {
    let mut timer = time::interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last = String::new();

    loop {
        let text = {
            let state = rooms.borrow_and_update();
            let favorites = favorites.borrow_and_update();
            render(&state, &favorites, clock())
        };

        if text != last {
            output(&text);
            last = text;
        }

        tokio::select! {
            changed = rooms.changed() => if changed.is_err() { break },
            changed = favorites.changed() => if changed.is_err() { break },
            _ = timer.tick() => {},
        }
    }
}

/// Text of the whole board for `state` as seen at `now`.
pub fn render(state: &ViewState, favorites: &HashSet<String>, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    match &state.phase {
        Phase::Idle => {}
        Phase::Loading => out.push_str("loading rooms...\n"),
        Phase::Failed(message) => {
            let _ = writeln!(out, "!! unable to load rooms");
            let _ = writeln!(out, "!! {message}");
            let _ = writeln!(out, "!! type `refresh` to try again");
        }
        Phase::Ready => render_view(&mut out, state, favorites, now),
    }

    out
}

fn render_view(
    out: &mut String,
    state: &ViewState,
    favorites: &HashSet<String>,
    now: DateTime<Utc>,
) {
    let view = View::new(state, now);

    let _ = writeln!(
        out,
        "{} of {} rooms available ({})",
        view.available,
        view.total,
        state.criteria.scope.mode
    );

    if view.is_empty() {
        out.push_str("\nno rooms match the current filters\n");
        return;
    }

    for group in &view.groups {
        let _ = writeln!(out, "\n{}", Faculty::display_name(group.faculty));

        for entry in &group.entries {
            let favorite = favorites.contains(&entry.room.id);
            render_card(out, entry, favorite, state.criteria.scope.mode.is_live());
        }
    }
}

const ROOM_NUMBER_WIDTH: usize = 12;

/// Scheduled slots carry the live reading of the room, so their count is
/// not shown.
fn render_card(out: &mut String, entry: &Entry, favorite: bool, live: bool) {
    let room = entry.room;
    let mark = if favorite { '★' } else { ' ' };

    let occupancy = match room.occupancy {
        Some(count) if live => format!("{}/{}", count, room.capacity),
        _ => format!("-/{}", room.capacity),
    };

    let _ = write!(out, "{} ", mark);
    pad(out, &room.room_number, ROOM_NUMBER_WIDTH);
    let _ = write!(out, " {:<16} {:>9}", entry.status.label(), occupancy);

    let amenities = amenities(room.has_projector, room.has_wifi, room.has_power_outlets);
    if !amenities.is_empty() {
        let _ = write!(out, "  {}", amenities.join(" "));
    }

    out.push('\n');

    if let Some(class) = &room.active_class {
        let _ = write!(
            out,
            "    {} {}-{}",
            class.class_name,
            class.start_time.format("%H:%M"),
            class.end_time.format("%H:%M")
        );

        if let Some(instructor) = &class.instructor {
            let _ = write!(out, " ({instructor})");
        }

        out.push('\n');
    } else if !room.status_detail.is_empty() {
        let _ = writeln!(out, "    {}", room.status_detail);
    }
}

/// Writes `text` padded with spaces to `width` terminal columns. Full-width
/// characters take two columns.
fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);

    let used = UnicodeWidthStr::width(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
}

fn amenities(projector: bool, wifi: bool, outlets: bool) -> Vec<&'static str> {
    [(projector, "projector"), (wifi, "wi-fi"), (outlets, "outlets")]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
}
