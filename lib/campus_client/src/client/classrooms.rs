use campus::{Classroom, ClassroomCreate, ClassroomUpdate, Message};
use chipp_http::HttpMethod;

use super::{Client, Error};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassroomFilter {
    pub faculty: Option<String>,
    pub building_id: Option<String>,
    pub floor: Option<i32>,
}

impl ClassroomFilter {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![];

        if let Some(faculty) = &self.faculty {
            pairs.push(("faculty", faculty.clone()));
        }

        if let Some(building_id) = &self.building_id {
            pairs.push(("building_id", building_id.clone()));
        }

        if let Some(floor) = self.floor {
            pairs.push(("floor", floor.to_string()));
        }

        pairs
    }
}

impl Client {
    pub async fn classrooms(&self, filter: &ClassroomFilter) -> Result<Vec<Classroom>, Error> {
        let url = self.api_url(&["classrooms", ""], &filter.pairs())?;
        self.get(url).await
    }

    pub async fn classroom(&self, classroom_id: &str) -> Result<Classroom, Error> {
        let url = self.api_url(&["classrooms", classroom_id], &[])?;
        self.get(url).await
    }

    pub async fn create_classroom(&self, classroom: &ClassroomCreate) -> Result<Classroom, Error> {
        let url = self.api_url(&["classrooms", ""], &[])?;
        self.send(HttpMethod::Post, url, classroom).await
    }

    pub async fn update_classroom(
        &self,
        classroom_id: &str,
        update: &ClassroomUpdate,
    ) -> Result<Classroom, Error> {
        let url = self.api_url(&["classrooms", classroom_id], &[])?;
        self.send(HttpMethod::Put, url, update).await
    }

    pub async fn delete_classroom(&self, classroom_id: &str) -> Result<Message, Error> {
        let url = self.api_url(&["classrooms", classroom_id], &[])?;
        self.perform(HttpMethod::Delete, url, None).await
    }
}
