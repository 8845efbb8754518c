use crate::Faculty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Building {
    pub id: &'static str,
    pub name: &'static str,
    pub faculty: Faculty,
    pub floors: &'static [u8],
}

pub const BUILDINGS: &[Building] = &[
    Building {
        id: "edu-6",
        name: "教育学部講義棟6号館",
        faculty: Faculty::Education,
        floors: &[1, 2],
    },
    Building {
        id: "edu-7",
        name: "教育学部講義棟7号館・化学実験室",
        faculty: Faculty::Education,
        floors: &[1, 2, 3],
    },
    Building {
        id: "edu-8",
        name: "教育学部講義棟8号館",
        faculty: Faculty::Education,
        floors: &[1, 2],
    },
    Building {
        id: "eng-a",
        name: "理工学部講義棟A・物理実験室",
        faculty: Faculty::Engineering,
        floors: &[1, 2, 3],
    },
    Building {
        id: "eng-b",
        name: "理工学部講義棟B",
        faculty: Faculty::Engineering,
        floors: &[1, 2],
    },
    Building {
        id: "eng-c",
        name: "理工学部講義棟C",
        faculty: Faculty::Engineering,
        floors: &[1, 2, 3],
    },
    Building {
        id: "econ-1",
        name: "経済学部講義棟1号館",
        faculty: Faculty::Economics,
        floors: &[1, 2],
    },
    Building {
        id: "econ-2",
        name: "経済学部講義棟2号館",
        faculty: Faculty::Economics,
        floors: &[1, 2],
    },
    Building {
        id: "bus-1",
        name: "経営学部講義棟1号館",
        faculty: Faculty::Business,
        floors: &[1, 2],
    },
    Building {
        id: "bus-2",
        name: "経営学部講義棟2号館",
        faculty: Faculty::Business,
        floors: &[1, 2, 3],
    },
    Building {
        id: "urban-8",
        name: "都市科学部講義棟",
        faculty: Faculty::UrbanSciences,
        floors: &[1, 2],
    },
];

impl Building {
    pub fn find(id: &str) -> Option<&'static Building> {
        BUILDINGS.iter().find(|building| building.id == id)
    }

    pub fn of_faculty(faculty: Faculty) -> impl Iterator<Item = &'static Building> {
        BUILDINGS
            .iter()
            .filter(move |building| building.faculty == faculty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let building = Building::find("bus-2").unwrap();
        assert_eq!(building.faculty, Faculty::Business);
        assert_eq!(building.floors, &[1, 2, 3]);

        assert!(Building::find("library").is_none());
    }

    #[test]
    fn test_of_faculty() {
        let ids: Vec<_> = Building::of_faculty(Faculty::Engineering)
            .map(|building| building.id)
            .collect();

        assert_eq!(ids, ["eng-a", "eng-b", "eng-c"]);
    }
}
