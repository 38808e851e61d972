//! Measurement and session endpoints

use super::{check_status, ApiClient};
use crate::shared::error::ApiError;
use crate::shared::model::{Measurement, MeasurementPayload, Session, SessionPayload};

impl ApiClient {
    /// `GET /students/:id/measurements`
    pub fn student_measurements(&self, student_id: i64) -> Result<Vec<Measurement>, ApiError> {
        let url = self.url(&format!("/students/{}/measurements", student_id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self.client.get(&url).send().await.map_err(ApiError::from)?;
            let response = check_status(response).await?;
            response
                .json::<Vec<Measurement>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `GET /students/:id/sessions`
    pub fn student_sessions(&self, student_id: i64) -> Result<Vec<Session>, ApiError> {
        let url = self.url(&format!("/students/{}/sessions", student_id));
        let rt = Self::runtime()?;

        rt.block_on(async {
            let response = self.client.get(&url).send().await.map_err(ApiError::from)?;
            let response = check_status(response).await?;
            response
                .json::<Vec<Session>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `POST /measurements`
    pub fn add_measurement(&self, payload: &MeasurementPayload) -> Result<Measurement, ApiError> {
        payload.validate()?;
        let url = self.url("/measurements");
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
                .json::<Measurement>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `PUT /measurements/:id`
    pub fn update_measurement(
        &self,
        id: i64,
        payload: &MeasurementPayload,
    ) -> Result<Measurement, ApiError> {
        payload.validate()?;
        let url = self.url(&format!("/measurements/{}", id));
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
                .json::<Measurement>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `DELETE /measurements/:id`
    pub fn delete_measurement(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/measurements/{}", id))
    }

    /// `POST /sessions`
    pub fn add_session(&self, payload: &SessionPayload) -> Result<Session, ApiError> {
        let url = self.url("/sessions");
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
                .json::<Session>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `PUT /sessions/:id`
    pub fn update_session(&self, id: i64, payload: &SessionPayload) -> Result<Session, ApiError> {
        let url = self.url(&format!("/sessions/{}", id));
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
                .json::<Session>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// `DELETE /sessions/:id`
    pub fn delete_session(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/sessions/{}", id))
    }
}
