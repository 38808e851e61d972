//! Photo and posture-analysis endpoints
//!
//! Upload and analyze are multipart calls. The analyze endpoint maps backend
//! failures to [`ApiError::Analysis`] so the capture pipeline can run its
//! compensating delete; only a request that never reached the server stays a
//! network error.

use reqwest::multipart;

use super::{check_status, ApiClient};
use crate::shared::error::ApiError;
use crate::shared::model::{AnalyzeResponse, Photo, PostureAnalysis, UploadPhotoResponse};

fn jpeg_part(field_file_name: &str, image: &[u8]) -> Result<multipart::Part, ApiError> {
    multipart::Part::bytes(image.to_vec())
        .file_name(field_file_name.to_string())
        .mime_str("image/jpeg")
        .map_err(|e| ApiError::network(e.to_string()))
}

impl ApiClient {
    /// `GET /students/:id/photos`
    pub fn student_photos(&self, student_id: i64) -> Result<Vec<Photo>, ApiError> {
        let url = self.url(&format!("/students/{}/photos", student_id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self.client.get(&url).send().await.map_err(ApiError::from)?;
            let response = check_status(response).await?;
            response
                .json::<Vec<Photo>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `POST /photos/upload` - multipart `photo` file plus `student_id`
    pub fn upload_photo(&self, student_id: i64, image: &[u8]) -> Result<i64, ApiError> {
        let url = self.url("/photos/upload");
        let rt = Self::runtime()?;

        rt.block_on(async {
            let form = multipart::Form::new()
                .part("photo", jpeg_part("photo.jpg", image)?)
                .text("student_id", student_id.to_string());

            let response = self
                .client
                .post(&url)
                .multipart(form)
                .send()
                .await
                .map_err(ApiError::from)?;
            let response = check_status(response).await?;
            let body = response
                .json::<UploadPhotoResponse>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))?;
            Ok(body.id)
        })
    }

    /// `DELETE /photos/:id`
    pub fn delete_photo(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/photos/{}", id))
    }

    /// `POST /posture/:photoId/analyze` - multipart `image` file
    pub fn analyze_posture(&self, photo_id: i64, image: &[u8]) -> Result<AnalyzeResponse, ApiError> {
        let url = self.url(&format!("/posture/{}/analyze", photo_id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let form = multipart::Form::new()
                .part("image", jpeg_part("photo.jpg", image)?)
                .text("photo_id", photo_id.to_string());

            let response = self
                .client
                .post(&url)
                .multipart(form)
                .send()
                .await
                .map_err(ApiError::from)?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_else(|_| status.to_string());
                return Err(ApiError::analysis(format!("{}: {}", status, body)));
            }

            response
                .json::<AnalyzeResponse>()
                .await
                .map_err(|e| ApiError::analysis(format!("unreadable analysis result: {}", e)))
        })
    }

    /// `GET /posture/:photoId/history`
    pub fn posture_history(&self, photo_id: i64) -> Result<Vec<PostureAnalysis>, ApiError> {
        let url = self.url(&format!("/posture/{}/history", photo_id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self.client.get(&url).send().await.map_err(ApiError::from)?;
            let response = check_status(response).await?;
            response
                .json::<Vec<PostureAnalysis>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// Fetch overlay bytes stored at a server path, e.g. `/overlays/4.jpg`
    pub fn fetch_overlay(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        let url = self.url(&path);
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self.client.get(&url).send().await.map_err(ApiError::from)?;
            let response = check_status(response).await?;
            let bytes = response
                .bytes()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))?;
            Ok(bytes.to_vec())
        })
    }
}
