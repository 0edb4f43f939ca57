use std::borrow::Cow;

use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::response_record::{
    binary::is_binary_response,
    error::Error,
    headers::ResponseHeaders,
    status::{DEFAULT_HTTP_VERSION, Status, version_to_string},
    structure::{ResponseStructure, StatusStructure},
    transport_info::TransportInfo,
};

/// A captured HTTP response. Built once, from live transport data or from a
/// [`ResponseStructure`] read back from a cassette, and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ResponseStructure", try_from = "ResponseStructure")]
pub struct ResponseRecord {
    status: Status,
    headers: ResponseHeaders,
    body: Option<Bytes>,
    transport_info: TransportInfo,
}

impl ResponseRecord {
    pub fn new(status_code: u16) -> Self {
        Self {
            status: Status::new(status_code),
            headers: ResponseHeaders::default(),
            body: None,
            transport_info: TransportInfo::default(),
        }
    }

    pub fn with_headers(mut self, headers: impl Into<ResponseHeaders>) -> Self {
        self.headers = headers.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_transport_info(mut self, transport_info: impl Into<TransportInfo>) -> Self {
        self.transport_info = transport_info.into();
        self
    }

    pub fn with_status_message(mut self, message: impl Into<String>) -> Self {
        self.status.message = Some(message.into());
        self
    }

    pub fn with_http_version(mut self, http_version: impl Into<String>) -> Self {
        self.status.http_version = http_version.into();
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status.code
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.message()
    }

    pub fn http_version(&self) -> &str {
        &self.status.http_version
    }

    pub fn headers(&self) -> &ResponseHeaders {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The body as written to the structure, not the raw bytes: base64 for
    /// binary responses, even ones built directly from captured bytes, plain
    /// text otherwise. Text bytes that are not valid UTF-8 are replaced with
    /// U+FFFD, so such a body does not survive a round-trip unchanged.
    pub fn encoded_body(&self) -> Option<Cow<'_, str>> {
        let body = self.body.as_ref()?;

        if self.is_binary() {
            return Some(Cow::Owned(general_purpose::STANDARD.encode(body)));
        }

        let text = String::from_utf8_lossy(body);
        if let Cow::Owned(_) = text {
            warn!(
                "Response body declared as {:?} is not valid UTF-8, storing it lossily",
                self.headers.get_ignore_case("Content-Type")
            );
        }
        Some(text)
    }

    pub fn transport_info(&self) -> &TransportInfo {
        &self.transport_info
    }

    pub fn is_binary(&self) -> bool {
        is_binary_response(&self.headers)
    }

    pub fn to_structure(&self) -> ResponseStructure {
        ResponseStructure {
            status: StatusStructure {
                http_version: Some(self.status.http_version.clone()),
                code: Some(self.status.code),
                message: self.status.message().map(str::to_string),
            },
            headers: self.headers.clone(),
            body: self.encoded_body().map(Cow::into_owned),
        }
    }

    pub fn from_structure(data: ResponseStructure) -> Result<Self, Error> {
        let ResponseStructure {
            status,
            headers,
            body,
        } = data;

        let code = status.code.ok_or(Error::MissingStatusCode)?;

        let body = match body {
            Some(body) if is_binary_response(&headers) => {
                debug!("Decoding base64 body of recorded {} response", code);
                Some(Bytes::from(general_purpose::STANDARD.decode(body)?))
            }
            Some(body) => Some(Bytes::from(body)),
            None => None,
        };

        Ok(Self {
            status: Status {
                code,
                message: status.message,
                http_version: status
                    .http_version
                    .unwrap_or_else(|| DEFAULT_HTTP_VERSION.to_string()),
            },
            headers,
            body,
            transport_info: TransportInfo::default(),
        })
    }
}

impl From<&ResponseRecord> for ResponseStructure {
    fn from(record: &ResponseRecord) -> Self {
        record.to_structure()
    }
}

impl From<ResponseRecord> for ResponseStructure {
    fn from(record: ResponseRecord) -> Self {
        record.to_structure()
    }
}

impl TryFrom<ResponseStructure> for ResponseRecord {
    type Error = Error;

    fn try_from(data: ResponseStructure) -> Result<Self, Self::Error> {
        ResponseRecord::from_structure(data)
    }
}

impl From<http::Response<Bytes>> for ResponseRecord {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();

        ResponseRecord::new(parts.status.as_u16())
            .with_http_version(version_to_string(parts.version))
            .with_headers(&parts.headers)
            .with_body(body)
    }
}
