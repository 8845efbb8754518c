use campus::{
    Building, ClassScheduleCreate, ClassScheduleUpdate, ClassroomCreate, ClassroomUpdate, Period,
};
use campus_client::{ClassroomFilter, ScheduleFilter};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

use crate::error::Error;

/// Administration of campus classrooms and class schedules.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base url of the campus backend
    #[arg(long, env = "CAMPUS_API_URL", default_value = "http://localhost:8000")]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that the backend is up
    Health,
    /// Print the url of the sign-in page
    LoginUrl,
    /// Inspect raw occupancy readings
    #[command(subcommand)]
    Occupancy(OccupancyCommand),
    /// Manage classrooms
    #[command(subcommand)]
    Classrooms(ClassroomCommand),
    /// Manage class schedules
    #[command(subcommand)]
    Schedules(ScheduleCommand),
}

#[derive(Debug, Subcommand)]
pub enum OccupancyCommand {
    /// List the latest reading of every classroom
    List {
        #[arg(long)]
        faculty: Option<String>,
        #[arg(long)]
        building: Option<String>,
        #[arg(long)]
        available_only: bool,
    },
    /// Show the latest reading of one classroom
    Show { classroom_id: String },
}

#[derive(Debug, Subcommand)]
pub enum ClassroomCommand {
    /// List classrooms
    List {
        #[arg(long)]
        faculty: Option<String>,
        #[arg(long)]
        building: Option<String>,
        #[arg(long)]
        floor: Option<i32>,
    },
    /// Show one classroom
    Show { id: String },
    /// Register a classroom
    Create(NewClassroom),
    /// Change fields of a classroom
    Update(ClassroomChanges),
    /// Remove a classroom
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct NewClassroom {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub room_number: String,
    #[arg(long)]
    pub building: String,
    /// Defaults to the faculty owning the building
    #[arg(long)]
    pub faculty: Option<String>,
    #[arg(long)]
    pub floor: i32,
    #[arg(long)]
    pub capacity: u32,
    #[arg(long)]
    pub projector: bool,
    #[arg(long)]
    pub wifi: bool,
    #[arg(long)]
    pub outlets: bool,
}

#[derive(Debug, Args)]
pub struct ClassroomChanges {
    pub id: String,
    #[arg(long)]
    pub room_number: Option<String>,
    #[arg(long)]
    pub building: Option<String>,
    #[arg(long)]
    pub faculty: Option<String>,
    #[arg(long)]
    pub floor: Option<i32>,
    #[arg(long)]
    pub capacity: Option<u32>,
    #[arg(long)]
    pub projector: Option<bool>,
    #[arg(long)]
    pub wifi: Option<bool>,
    #[arg(long)]
    pub outlets: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// List schedules
    List {
        #[arg(long)]
        classroom: Option<String>,
        /// 0 is Monday, 6 is Sunday
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
        day: Option<u8>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        period: Option<u8>,
    },
    /// Schedules in session now or at the given time
    Active {
        /// Local time as YYYY-MM-DDTHH:MM:SS
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
    /// Show one schedule
    Show { id: String },
    /// Add a class to the timetable
    Create(NewSchedule),
    /// Change fields of a schedule
    Update(ScheduleChanges),
    /// Remove a schedule
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct NewSchedule {
    #[arg(long)]
    pub classroom: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub instructor: Option<String>,
    /// 0 is Monday, 6 is Sunday
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub day: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub period: u8,
    #[arg(long)]
    pub semester: Option<String>,
    #[arg(long)]
    pub course_code: Option<String>,
}

#[derive(Debug, Args)]
pub struct ScheduleChanges {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub instructor: Option<String>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub day: Option<u8>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub period: Option<u8>,
    #[arg(long)]
    pub semester: Option<String>,
    #[arg(long)]
    pub course_code: Option<String>,
}

pub fn classroom_filter(
    faculty: Option<String>,
    building: Option<String>,
    floor: Option<i32>,
) -> ClassroomFilter {
    ClassroomFilter {
        faculty,
        building_id: building,
        floor,
    }
}

pub fn schedule_filter(
    classroom: Option<String>,
    day: Option<u8>,
    period: Option<u8>,
) -> ScheduleFilter {
    ScheduleFilter {
        classroom_id: classroom,
        day_of_week: day,
        period,
    }
}

impl TryFrom<NewClassroom> for ClassroomCreate {
    type Error = Error;

    fn try_from(args: NewClassroom) -> Result<Self, Self::Error> {
        let faculty = match args.faculty {
            Some(faculty) => faculty,
            None => Building::find(&args.building)
                .map(|building| building.faculty.to_string())
                .ok_or_else(|| {
                    Error::InvalidArgs(format!(
                        "unknown building {}, pass --faculty",
                        args.building
                    ))
                })?,
        };

        Ok(ClassroomCreate {
            id: args.id,
            room_number: args.room_number,
            building_id: args.building,
            faculty,
            floor: args.floor,
            capacity: args.capacity,
            has_projector: args.projector,
            has_wifi: args.wifi,
            has_power_outlets: args.outlets,
        })
    }
}

impl ClassroomChanges {
    pub fn into_update(self) -> Result<(String, ClassroomUpdate), Error> {
        let update = ClassroomUpdate {
            room_number: self.room_number,
            building_id: self.building,
            faculty: self.faculty,
            floor: self.floor,
            capacity: self.capacity,
            has_projector: self.projector,
            has_wifi: self.wifi,
            has_power_outlets: self.outlets,
        };

        if update.is_empty() {
            return Err(Error::InvalidArgs("nothing to update".to_string()));
        }

        Ok((self.id, update))
    }
}

impl From<NewSchedule> for ClassScheduleCreate {
    fn from(args: NewSchedule) -> Self {
        let (start_time, end_time) = period_times(args.period);

        ClassScheduleCreate {
            classroom_id: args.classroom,
            class_name: args.name,
            instructor: args.instructor,
            day_of_week: args.day,
            period: args.period,
            start_time,
            end_time,
            semester: args.semester,
            course_code: args.course_code,
        }
    }
}

impl ScheduleChanges {
    /// Moving a class to another period moves its start and end time along.
    pub fn into_update(self) -> Result<(String, ClassScheduleUpdate), Error> {
        let times = self.period.map(period_times);

        let update = ClassScheduleUpdate {
            class_name: self.name,
            instructor: self.instructor,
            day_of_week: self.day,
            period: self.period,
            start_time: times.map(|(start, _)| start),
            end_time: times.map(|(_, end)| end),
            semester: self.semester,
            course_code: self.course_code,
        };

        if update.is_empty() {
            return Err(Error::InvalidArgs("nothing to update".to_string()));
        }

        Ok((self.id, update))
    }
}

fn period_times(period: u8) -> (chrono::NaiveTime, chrono::NaiveTime) {
    Period::new(period)
        .map(Period::time_range)
        .unwrap_or_default()
}
