use campus::{ClassSchedule, ClassScheduleCreate, ClassScheduleUpdate, Message, ScheduleWithStatus};
use chipp_http::HttpMethod;
use chrono::NaiveDateTime;

use super::{Client, Error};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub classroom_id: Option<String>,
    pub day_of_week: Option<u8>,
    pub period: Option<u8>,
}

impl ScheduleFilter {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![];

        if let Some(classroom_id) = &self.classroom_id {
            pairs.push(("classroom_id", classroom_id.clone()));
        }

        if let Some(day_of_week) = self.day_of_week {
            pairs.push(("day_of_week", day_of_week.to_string()));
        }

        if let Some(period) = self.period {
            pairs.push(("period", period.to_string()));
        }

        pairs
    }
}

impl Client {
    pub async fn schedules(&self, filter: &ScheduleFilter) -> Result<Vec<ClassSchedule>, Error> {
        let url = self.api_url(&["schedules", ""], &filter.pairs())?;
        self.get(url).await
    }

    /// Schedules in session at `at`, or right now when `at` is `None`.
    pub async fn active_schedules(
        &self,
        at: Option<NaiveDateTime>,
    ) -> Result<Vec<ScheduleWithStatus>, Error> {
        let query: Vec<_> = at
            .map(|at| ("current_time", at.format("%Y-%m-%dT%H:%M:%S").to_string()))
            .into_iter()
            .collect();

        let url = self.api_url(&["schedules", "active"], &query)?;
        self.get(url).await
    }

    pub async fn schedule(&self, schedule_id: &str) -> Result<ClassSchedule, Error> {
        let url = self.api_url(&["schedules", schedule_id], &[])?;
        self.get(url).await
    }

    pub async fn create_schedule(
        &self,
        schedule: &ClassScheduleCreate,
    ) -> Result<ClassSchedule, Error> {
        let url = self.api_url(&["schedules", ""], &[])?;
        self.send(HttpMethod::Post, url, schedule).await
    }

    pub async fn update_schedule(
        &self,
        schedule_id: &str,
        update: &ClassScheduleUpdate,
    ) -> Result<ClassSchedule, Error> {
        let url = self.api_url(&["schedules", schedule_id], &[])?;
        self.send(HttpMethod::Put, url, update).await
    }

    pub async fn delete_schedule(&self, schedule_id: &str) -> Result<Message, Error> {
        let url = self.api_url(&["schedules", schedule_id], &[])?;
        self.perform(HttpMethod::Delete, url, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_pairs() {
        let filter = ScheduleFilter {
            classroom_id: Some("bus1-203".to_string()),
            day_of_week: Some(0),
            period: None,
        };

        assert_eq!(
            filter.pairs(),
            vec![
                ("classroom_id", "bus1-203".to_string()),
                ("day_of_week", "0".to_string())
            ]
        );
    }
}
