use serde::{Deserialize, Serialize};
use str_derive::Str;

/// Availability of a room as shown on its card.
///
/// The backend reports a richer vocabulary than the board displays, the
/// extra values are folded in through aliases. Anything unrecognised is
/// treated as missing data.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[serde(alias = "partially-occupied")]
    Available,
    #[serde(alias = "in-class", alias = "scheduled-low")]
    InUse,
    Occupied,
    Full,
    #[serde(other)]
    NoData,
}

impl Status {
    pub fn is_available(self) -> bool {
        matches!(self, Status::Available)
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::InUse => "class in session",
            Status::Occupied => "occupied",
            Status::Full => "full",
            Status::NoData => "no data",
        }
    }
}
