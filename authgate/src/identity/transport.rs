use std::fmt;

use futures::future::LocalBoxFuture;

use crate::error::AuthError;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    body: Vec<u8>,
    status_code: u16,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: Vec<u8>) -> Self {
        Self { body, status_code }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    ConnectionError(String),
    Other(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ConnectionError(e) => {
                write!(f, "ConnectionError: {}", e)
            }
            TransportError::Other(e) => write!(f, "Other: {}", e),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<TransportError> for AuthError {
    fn from(error: TransportError) -> Self {
        AuthError::Transport(error.to_string())
    }
}

/// Sends a JSON body with POST and hands back whatever came back,
/// regardless of status code.
pub trait Transport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<HttpResponse, TransportError>>;
}
