//! Media library: listings, multipart upload, deletion. High-churn, never
//! cached.

use reqwest::{Method, multipart};

use brezza_api_types::{Media, PageResponse};

use super::{ApiClient, Auth, decode, envelope_message, query};
use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct MediaListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub uploader_id: Option<i64>,
}

impl MediaListQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(uploader_id) = self.uploader_id {
            pairs.push(("uploaderId", uploader_id.to_string()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn list_media(
        &self,
        filters: &MediaListQuery,
    ) -> Result<PageResponse<Media>, ApiError> {
        let pairs = filters.to_pairs();
        self.request(
            Method::GET,
            "api/admin/media",
            query(&pairs),
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn recent_media(&self, limit: u32) -> Result<Vec<Media>, ApiError> {
        let pairs = [("limit", limit.to_string())];
        self.request(
            Method::GET,
            "api/admin/media/recent",
            Some(&pairs),
            None,
            Auth::Bearer,
        )
        .await
    }

    /// Uploads one file as the `file` part of a multipart form. This bypasses
    /// the JSON request path but shares the envelope handling.
    pub async fn upload_media(
        &self,
        file_name: &str,
        mime_type: &str,
        contents: Vec<u8>,
    ) -> Result<Media, ApiError> {
        let part = multipart::Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|err| ApiError::InvalidInput(format!("mime type: {err}")))?;
        let form = multipart::Form::new().part("file", part);

        let (status, bytes) = self.send_multipart("api/admin/media/upload", form).await?;
        let envelope = decode::<Media>(status, &bytes)?;
        if !envelope.is_success() {
            return Err(ApiError::Envelope(envelope_message(envelope.message)));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Envelope("missing data in response".to_string()))
    }

    pub async fn delete_media(&self, id: i64) -> Result<(), ApiError> {
        self.request_unit(
            Method::DELETE,
            &format!("api/admin/media/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }
}
