//! Student endpoints

use super::{check_status, ApiClient};
use crate::shared::error::ApiError;
use crate::shared::model::{Student, StudentPayload};

impl ApiClient {
    /// `GET /students`
    pub fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let url = self.url("/students");
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self.client.get(&url).send().await.map_err(ApiError::from)?;
            let response = check_status(response).await?;
            response
                .json::<Vec<Student>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `POST /students`
    pub fn add_student(&self, payload: &StudentPayload) -> Result<Student, ApiError> {
        payload.validate()?;
        let url = self.url("/students");
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .post(&url)
                .json(payload)
                .send()
                .await
                .map_err(ApiError::from)?;
            let response = check_status(response).await?;
            response
                .json::<Student>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `PUT /students/:id`
    pub fn update_student(&self, id: i64, payload: &StudentPayload) -> Result<Student, ApiError> {
        payload.validate()?;
        let url = self.url(&format!("/students/{}", id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .put(&url)
                .json(payload)
                .send()
                .await
                .map_err(ApiError::from)?;
            let response = check_status(response).await?;
            response
                .json::<Student>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `DELETE /students/:id`
    pub fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/students/{}", id))
    }
}
