#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error while recording: {0}")]
    Network(String),

    #[error("Invalid request, nothing recorded: {0}")]
    InvalidRequest(String),

    #[error("Timed out waiting for the response to record")]
    Timeout,
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn is_body(&self) -> bool;
    fn error_string(&self) -> String;
}

impl<T: HttpClientErrorChecker> From<T> for Error {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() || err.is_body() {
            Error::Network(err.error_string())
        } else {
            Error::InvalidRequest(err.error_string())
        }
    }
}
