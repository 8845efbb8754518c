use serde::{Deserialize, Serialize};
use str_derive::Str;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Faculty {
    Education,
    Engineering,
    Economics,
    Business,
    UrbanSciences,
}

impl Faculty {
    pub fn short_name(self) -> &'static str {
        match self {
            Faculty::Education => "教養",
            Faculty::Engineering => "理工",
            Faculty::Economics => "経済",
            Faculty::Business => "経営",
            Faculty::UrbanSciences => "都市",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Faculty::Education => "教育学部",
            Faculty::Engineering => "理工学部",
            Faculty::Economics => "経済学部",
            Faculty::Business => "経営学部",
            Faculty::UrbanSciences => "都市科学部",
        }
    }

    /// Human readable name for a faculty id as sent by the backend, falling
    /// back to the raw id for faculties this crate does not know about.
    pub fn display_name(id: &str) -> &str {
        match id.parse::<Faculty>() {
            Ok(faculty) => faculty.full_name(),
            Err(_) => id,
        }
    }
}
