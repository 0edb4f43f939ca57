#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Recorded response has no status code")]
    MissingStatusCode,

    #[error("Binary response body is not valid base64: {0}")]
    MalformedBase64Body(#[from] base64::DecodeError),
}
