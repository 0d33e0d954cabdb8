//! Errors from talking to the backend services.

use crate::models::TournamentId;

#[derive(Debug)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read).
    Http(reqwest::Error),
    /// Backend answered 404.
    NotFound(String),
    /// Backend answered with another non-success status.
    Status { status: u16, url: String },
    /// Body was not the expected JSON shape.
    Decode { url: String, source: serde_json::Error },
    /// Swiss data requested for a tournament without a Swiss bracket.
    NoSwissBracket(TournamentId),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_) | ClientError::NoSwissBracket(_))
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "Backend request failed: {}", e),
            ClientError::NotFound(url) => write!(f, "Not found: {}", url),
            ClientError::Status { status, url } => {
                write!(f, "Backend returned status {} for {}", status, url)
            }
            ClientError::Decode { url, source } => {
                write!(f, "Unexpected response from {}: {}", url, source)
            }
            ClientError::NoSwissBracket(id) => {
                write!(f, "Tournament {} has no Swiss bracket", id)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            ClientError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e)
    }
}
