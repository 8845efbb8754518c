use campus::{Favorite, Message};
use chipp_http::HttpMethod;
use serde::Deserialize;
use url::Url;

use super::{Client, Error, Session};

impl Client {
    pub async fn favorites(&self, session: &Session) -> Result<Vec<Favorite>, Error> {
        let url = self.favorites_url(session, &[""])?;
        self.get(url).await
    }

    pub async fn add_favorite(&self, session: &Session, classroom_id: &str) -> Result<(), Error> {
        let url = self.favorites_url(session, &[classroom_id])?;
        let _: Message = self.perform(HttpMethod::Post, url, None).await?;
        Ok(())
    }

    pub async fn remove_favorite(
        &self,
        session: &Session,
        classroom_id: &str,
    ) -> Result<(), Error> {
        let url = self.favorites_url(session, &[classroom_id])?;
        let _: Message = self.perform(HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    pub async fn is_favorite(&self, session: &Session, classroom_id: &str) -> Result<bool, Error> {
        #[derive(Deserialize)]
        struct ResponseBody {
            is_favorite: bool,
        }

        let url = self.favorites_url(session, &["check", classroom_id])?;
        let body: ResponseBody = self.get(url).await?;

        Ok(body.is_favorite)
    }

    fn favorites_url(&self, session: &Session, path: &[&str]) -> Result<Url, Error> {
        let segments: Vec<&str> = std::iter::once("favorites")
            .chain(path.iter().copied())
            .collect();

        self.api_url(&segments, &[session.query()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_urls() {
        let client = Client::new("http://localhost:8000").unwrap();
        let session = Session::stub("abc");

        let list = client.favorites_url(&session, &[""]).unwrap();
        assert_eq!(
            list.as_str(),
            "http://localhost:8000/api/v1/favorites/?token=abc"
        );

        let check = client
            .favorites_url(&session, &["check", "bus-1-101"])
            .unwrap();
        assert_eq!(
            check.as_str(),
            "http://localhost:8000/api/v1/favorites/check/bus-1-101?token=abc"
        );
    }
}
