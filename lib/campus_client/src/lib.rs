mod client;

pub use client::{Client, ClassroomFilter, Error, ScheduleFilter, Session};

pub type Result<T> = std::result::Result<T, Error>;
