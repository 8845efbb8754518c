use campus::{Message, User};
use chipp_http::HttpMethod;
use log::info;
use serde::Deserialize;

use super::{Client, Error};

/// Signed in user. Calls that need authentication take the session
/// explicitly, there is no ambient token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub(super) fn query(&self) -> (&'static str, String) {
        ("token", self.token.clone())
    }
}

impl Client {
    /// Url of the identity provider's consent page.
    pub async fn login_url(&self) -> Result<String, Error> {
        #[derive(Deserialize)]
        struct ResponseBody {
            authorization_url: String,
        }

        let url = self.api_url(&["auth", "login"], &[])?;
        let body: ResponseBody = self.get(url).await?;

        Ok(body.authorization_url)
    }

    /// Validates `token` and opens a session for its user.
    pub async fn sign_in(&self, token: String) -> Result<Session, Error> {
        let url = self.api_url(&["auth", "me"], &[("token", token.clone())])?;
        let user: User = self.get(url).await?;

        info!("signed in as {} <{}>", user.name, user.email);

        Ok(Session { token, user })
    }

    /// Closes the session on the backend. The session is consumed either way.
    pub async fn sign_out(&self, session: Session) -> Result<(), Error> {
        let url = self.api_url(&["auth", "logout"], &[session.query()])?;
        let _: Message = self.perform(HttpMethod::Post, url, None).await?;

        info!("signed out {}", session.user.email);

        Ok(())
    }
}

#[cfg(test)]
impl Session {
    pub fn stub(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user: User {
                id: "u-1".to_string(),
                email: "student@example.ac.jp".to_string(),
                name: "Student".to_string(),
                picture: None,
            },
        }
    }
}
