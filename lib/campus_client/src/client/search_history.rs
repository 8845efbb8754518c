use campus::{Message, SearchHistory, SearchHistoryCreate};
use chipp_http::HttpMethod;
use url::Url;

use super::{Client, Error, Session};

impl Client {
    /// Most recent searches first, at most `limit` (1-100) entries.
    pub async fn search_history(
        &self,
        session: &Session,
        limit: u8,
    ) -> Result<Vec<SearchHistory>, Error> {
        let url = self.search_history_url(session, "", Some(limit))?;
        self.get(url).await
    }

    pub async fn save_search(
        &self,
        session: &Session,
        entry: &SearchHistoryCreate,
    ) -> Result<SearchHistory, Error> {
        let url = self.search_history_url(session, "", None)?;
        self.send(HttpMethod::Post, url, entry).await
    }

    pub async fn delete_search(&self, session: &Session, history_id: &str) -> Result<(), Error> {
        let url = self.search_history_url(session, history_id, None)?;
        let _: Message = self.perform(HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    pub async fn clear_search_history(&self, session: &Session) -> Result<(), Error> {
        let url = self.search_history_url(session, "", None)?;
        let _: Message = self.perform(HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    /// An empty `history_id` addresses the whole history.
    fn search_history_url(
        &self,
        session: &Session,
        history_id: &str,
        limit: Option<u8>,
    ) -> Result<Url, Error> {
        let mut query = vec![session.query()];

        if let Some(limit) = limit {
            query.push(("limit", limit.clamp(1, 100).to_string()));
        }

        self.api_url(&["search-history", history_id], &query)
    }
}
