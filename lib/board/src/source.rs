use async_trait::async_trait;
use campus::{RoomStatusSnapshot, StatusQuery};
use campus_client::Client;

use crate::Result;

/// Where the board gets room statuses from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
    async fn fetch_statuses(&self, query: &StatusQuery) -> Result<Vec<RoomStatusSnapshot>>;
}

#[async_trait]
impl StatusSource for Client {
    async fn fetch_statuses(&self, query: &StatusQuery) -> Result<Vec<RoomStatusSnapshot>> {
        let rooms = self.classrooms_with_status(query).await?;
        Ok(rooms.into_iter().map(RoomStatusSnapshot::from).collect())
    }
}
