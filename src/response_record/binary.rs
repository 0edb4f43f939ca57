use crate::response_record::headers::ResponseHeaders;

const CONTENT_TYPE: &str = "Content-Type";

const ENCODING_HEADERS: [&str; 3] = [
    "Content-Encoding",
    "Transfer-Encoding",
    "Content-Transfer-Encoding",
];

const TEXTUAL_MEDIA_TYPES: [&str; 3] = [
    "application/json",
    "application/xml",
    "application/javascript",
];

/// Missing `Content-Type` counts as binary, and so does any encoding header.
/// Names are compared ignoring ASCII case. When several `Content-Type`
/// entries differ only in case, the body is text only if all of them are.
pub fn is_binary_response(headers: &ResponseHeaders) -> bool {
    let mut content_types = headers.get_all_ignore_case(CONTENT_TYPE).peekable();
    if content_types.peek().is_none() {
        return true;
    }

    if ENCODING_HEADERS
        .iter()
        .any(|name| headers.contains_ignore_case(name))
    {
        return true;
    }

    !content_types.all(|content_type| is_textual(content_type))
}

fn is_textual(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    media_type.starts_with("text/") || TEXTUAL_MEDIA_TYPES.contains(&media_type.as_str())
}

#[cfg(test)]
mod tests {
    use crate::response_record::{binary::is_binary_response, headers::ResponseHeaders};

    fn is_binary<const N: usize>(headers: [(&str, &str); N]) -> bool {
        is_binary_response(&ResponseHeaders::from(headers))
    }

    #[test]
    fn missing_content_type_is_binary() {
        assert!(is_binary_response(&ResponseHeaders::default()));
        assert!(is_binary([("Host", "example.com")]));
    }

    #[test]
    fn non_textual_content_types_are_binary() {
        assert!(is_binary([("Content-Type", "application/zip")]));
        assert!(is_binary([("Content-Type", "application/pdf")]));
        assert!(is_binary([("Content-Type", "application/x-gzip")]));
        assert!(is_binary([("Content-Type", "audio/vorbis")]));
        assert!(is_binary([("Content-Type", "image/png")]));
    }

    #[test]
    fn encoding_headers_are_binary() {
        assert!(is_binary([("Content-Encoding", "gzip")]));
        assert!(is_binary([("Transfer-Encoding", "gzip")]));
        assert!(is_binary([("Content-Transfer-Encoding", "gzip")]));
    }

    #[test]
    fn encoding_wins_over_textual_content_type() {
        assert!(is_binary([
            ("Content-Encoding", "gzip"),
            ("Content-Type", "text/html"),
        ]));
        assert!(is_binary([
            ("Content-Type", "application/json"),
            ("Transfer-Encoding", "chunked"),
        ]));
    }

    #[test]
    fn textual_content_types_are_not_binary() {
        assert!(!is_binary([("Content-Type", "text/html")]));
        assert!(!is_binary([("Content-Type", "text/plain")]));
        assert!(!is_binary([("Content-Type", "text/css")]));
        assert!(!is_binary([("Content-Type", "application/javascript")]));
        assert!(!is_binary([("Content-Type", "application/json")]));
        assert!(!is_binary([("Content-Type", "application/xml")]));
    }

    #[test]
    fn ignores_header_name_case_and_media_type_parameters() {
        assert!(!is_binary([("content-type", "text/html; charset=utf-8")]));
        assert!(!is_binary([("CONTENT-TYPE", "Application/JSON; charset=utf-8")]));
        assert!(is_binary([
            ("content-type", "text/html"),
            ("content-encoding", "br"),
        ]));
    }

    #[test]
    fn any_non_textual_content_type_among_case_variants_is_binary() {
        assert!(is_binary([
            ("content-type", "text/plain"),
            ("Content-Type", "image/png"),
        ]));
        assert!(is_binary([
            ("Content-Type", "application/zip"),
            ("CONTENT-TYPE", "text/html"),
        ]));
        assert!(!is_binary([
            ("content-type", "text/plain"),
            ("Content-Type", "application/json; charset=utf-8"),
        ]));
    }

    #[test]
    fn textual_subtypes_must_match_exactly() {
        assert!(is_binary([("Content-Type", "application/jsonx")]));
        assert!(is_binary([("Content-Type", "application/vnd.api+json")]));
    }
}
