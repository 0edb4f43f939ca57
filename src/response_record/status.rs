use http::StatusCode;

pub const DEFAULT_HTTP_VERSION: &str = "1.1";

/// Standard reason phrase for a status code, `None` when the code has none.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: u16,
    pub message: Option<String>,
    pub http_version: String,
}

impl Status {
    pub fn new(code: u16) -> Self {
        Self {
            code,
            message: None,
            http_version: DEFAULT_HTTP_VERSION.to_string(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().or_else(|| reason_phrase(self.code))
    }
}

pub(crate) fn version_to_string(version: http::Version) -> String {
    match version {
        http::Version::HTTP_09 => "0.9",
        http::Version::HTTP_10 => "1.0",
        http::Version::HTTP_2 => "2",
        http::Version::HTTP_3 => "3",
        _ => DEFAULT_HTTP_VERSION,
    }
    .to_string()
}
