#[derive(Debug)]
pub enum Error {
    Http(chipp_http::Error),
    UrlParse(chipp_http::UrlParseError),
    InvalidUrl(String),
    Json(serde_json::Error),
    Status(u16, String),
}

impl From<chipp_http::Error> for Error {
    fn from(err: chipp_http::Error) -> Self {
        Self::Http(err)
    }
}

impl From<chipp_http::UrlParseError> for Error {
    fn from(err: chipp_http::UrlParseError) -> Self {
        Self::UrlParse(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl Error {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401, _))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404, _))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "HTTP error: {err}"),
            Self::UrlParse(err) => write!(f, "URL parse error: {err}"),
            Self::InvalidUrl(url) => write!(f, "Invalid URL: {url}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::Status(code, body) if body.is_empty() => write!(f, "API error: {code}"),
            Self::Status(code, body) => write!(f, "API error: {code} {body}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Error::Status(503, String::new()).to_string(), "API error: 503");
        assert_eq!(
            Error::Status(404, r#"{"detail":"Classroom not found"}"#.to_string()).to_string(),
            r#"API error: 404 {"detail":"Classroom not found"}"#
        );
    }

    #[test]
    fn test_classification() {
        assert!(Error::Status(401, String::new()).is_unauthorized());
        assert!(Error::Status(404, String::new()).is_not_found());
        assert!(!Error::InvalidUrl("x".to_string()).is_not_found());
    }
}
