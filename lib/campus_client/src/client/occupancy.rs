use campus::{ClassroomWithStatus, Occupancy, StatusQuery};
use chrono::Utc;

use super::{Client, Error};

impl Client {
    /// Classrooms merged with their occupancy and active class.
    pub async fn classrooms_with_status(
        &self,
        query: &StatusQuery,
    ) -> Result<Vec<ClassroomWithStatus>, Error> {
        let url = self.api_url(&["occupancy", "classrooms-with-status"], &query.pairs())?;
        self.get(url).await
    }

    /// Raw occupancy records. A timestamp parameter keeps intermediaries from
    /// answering out of cache.
    pub async fn occupancy(
        &self,
        faculty: Option<&str>,
        building_id: Option<&str>,
        available_only: bool,
    ) -> Result<Vec<Occupancy>, Error> {
        let mut query = vec![];

        if let Some(faculty) = faculty {
            query.push(("faculty", faculty.to_string()));
        }

        if let Some(building_id) = building_id {
            query.push(("building_id", building_id.to_string()));
        }

        if available_only {
            query.push(("available_only", "true".to_string()));
        }

        query.push(("_t", Utc::now().timestamp_millis().to_string()));

        let url = self.api_url(&["occupancy", ""], &query)?;
        self.get(url).await
    }

    pub async fn classroom_occupancy(&self, classroom_id: &str) -> Result<Occupancy, Error> {
        let url = self.api_url(&["occupancy", "classroom", classroom_id], &[])?;
        self.get(url).await
    }
}
