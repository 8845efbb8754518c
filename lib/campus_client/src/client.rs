mod error;
pub use error::Error;

mod session;
pub use session::Session;

mod classrooms;
pub use classrooms::ClassroomFilter;

mod schedules;
pub use schedules::ScheduleFilter;

mod favorites;
mod occupancy;
mod search_history;

use std::sync::Arc;

use campus::Health;
use chipp_http::{HttpClient, HttpMethod, NoInterceptor};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Typed client of the campus REST API.
///
/// Every call is a single request, non-2xx responses are reported as
/// [`Error::Status`] and nothing is retried.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    http_client: Arc<HttpClient<NoInterceptor>>,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url =
            Url::parse(base_url).map_err(|err| Error::InvalidUrl(format!("{base_url}: {err}")))?;

        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }

        let http_client = HttpClient::new(base_url.as_str())
            .map_err(|_| Error::InvalidUrl(base_url.to_string()))?;

        Ok(Self {
            base_url,
            http_client: Arc::new(http_client),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Liveness of the backend. Served outside the versioned api prefix.
    pub async fn health(&self) -> Result<Health, Error> {
        let url = endpoint(&self.base_url, &["health"], &[])?;
        self.get(url).await
    }

    fn api_url(&self, path: &[&str], query: &[(&str, String)]) -> Result<Url, Error> {
        let segments: Vec<&str> = API_PREFIX.iter().copied().chain(path.iter().copied()).collect();
        endpoint(&self.base_url, &segments, query)
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.perform(HttpMethod::Get, url, None).await
    }

    async fn send<B, T>(&self, method: HttpMethod, url: Url, body: &B) -> Result<T, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.perform(method, url, Some(body)).await
    }

    async fn perform<T>(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        debug!("request {url}");

        let mut request = self.http_client.new_request_with_url(url.to_string())?;
        request.set_method(method);

        if let Some(body) = body {
            trace!("request body: {body}");
            request.set_json_body(&body);
        }

        let (status_code, body) = self
            .http_client
            .perform_request(request, |_, response| {
                Ok((response.status_code, response.body))
            })
            .await?;

        trace!("response: {}", String::from_utf8_lossy(&body));

        if !(200..300).contains(&status_code) {
            let status_code = u16::try_from(status_code).unwrap_or_default();
            let body = String::from_utf8_lossy(&body).into_owned();
            return Err(Error::Status(status_code, body));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Joins `segments` onto `base` and appends `query`. An empty last segment
/// produces a trailing slash.
fn endpoint(base: &Url, segments: &[&str], query: &[(&str, String)]) -> Result<Url, Error> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| Error::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    if query.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
    }

    Ok(url)
}
