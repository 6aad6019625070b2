//! The backend's uniform response wrapper and pagination shape.

use serde::{Deserialize, Serialize};

/// Envelope code signalling a successful call, independent of HTTP status.
pub const SUCCESS_CODE: i64 = 200;

/// Uniform wrapper around every backend response body.
///
/// A call succeeded iff `code == 200`; otherwise `message` carries the
/// backend's error text. `data` is absent for void operations (deletes,
/// saves) and on failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Offset-paginated collection as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_matches_code() {
        let env: ApiEnvelope<i64> = serde_json::from_str(r#"{"code":200,"message":"","data":7}"#)
            .expect("envelope parses");
        assert!(env.is_success());
        assert_eq!(env.data, Some(7));
    }

    #[test]
    fn envelope_tolerates_missing_message_and_data() {
        let env: ApiEnvelope<i64> = serde_json::from_str(r#"{"code":500}"#).expect("parses");
        assert!(!env.is_success());
        assert!(env.message.is_empty());
        assert!(env.data.is_none());
    }

    #[test]
    fn page_response_uses_camel_case() {
        let page: PageResponse<String> = serde_json::from_str(
            r#"{"content":["a"],"page":0,"size":10,"totalElements":1,"totalPages":1}"#,
        )
        .expect("page parses");
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content, vec!["a".to_string()]);
    }
}
