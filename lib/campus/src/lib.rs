mod account;
pub use account::{Favorite, SearchHistory, SearchHistoryCreate, User};

mod building;
pub use building::{Building, BUILDINGS};

mod classroom;
pub use classroom::{Classroom, ClassroomCreate, ClassroomUpdate};

mod faculty;
pub use faculty::Faculty;

mod occupancy;
pub use occupancy::{ActiveClass, ClassroomWithStatus, Occupancy, OccupancyReading};

mod query;
pub use query::{SearchMode, StatusQuery};

mod schedule;
pub use schedule::{
    ClassSchedule, ClassScheduleCreate, ClassScheduleUpdate, Period, ScheduleWithStatus,
};

mod snapshot;
pub use snapshot::{RoomStatusSnapshot, STALE_AFTER_MS};

mod status;
pub use status::Status;

mod timestamp;
pub use timestamp::parse_timestamp;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub camera_enabled: bool,
}

/// Plain `{"message": ...}` acknowledgement returned by mutating endpoints.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub message: String,
}
