use serde::{Deserialize, Serialize};

use crate::response_record::headers::ResponseHeaders;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseStructure {
    #[serde(default)]
    pub status: StatusStructure,

    #[serde(default, skip_serializing_if = "ResponseHeaders::is_empty")]
    pub headers: ResponseHeaders,

    /// Plain text, or base64 when the headers mark the body as binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusStructure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
