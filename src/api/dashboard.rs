//! Program Manager Dashboard & Applications

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ApplicationDecision, DashboardData, MentorApplication, MessageResponse};

#[derive(Serialize)]
struct DecisionArgs {
    decision: ApplicationDecision,
}

impl ApiClient {
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.get("/api/dashboard").await
    }

    pub async fn platform_report_pdf(&self) -> Result<Vec<u8>, ApiError> {
        self.get_bytes("/api/pm/dashboard/export-pdf").await
    }

    pub async fn mentor_applications(&self) -> Result<Vec<MentorApplication>, ApiError> {
        self.get("/api/pm/applications").await
    }

    pub async fn process_application(
        &self,
        application_id: u32,
        decision: ApplicationDecision,
    ) -> Result<MessageResponse, ApiError> {
        self.put(&format!("/api/pm/applications/{}/process", application_id), &DecisionArgs { decision })
            .await
    }
}
