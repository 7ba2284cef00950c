//! Certificate Endpoints

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Certificate, MessageResponse};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CertificatePdfArgs<'a> {
    learner_name: &'a str,
    course_name: &'a str,
    issued_date: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssueArgs {
    learner_id: u32,
    course_id: u32,
}

impl ApiClient {
    pub async fn my_certificates(&self) -> Result<Vec<Certificate>, ApiError> {
        self.get("/api/certificates/my-certificates").await
    }

    /// Rendered PDF for one certificate
    pub async fn certificate_pdf(&self, learner_name: &str, certificate: &Certificate) -> Result<Vec<u8>, ApiError> {
        let args = CertificatePdfArgs {
            learner_name,
            course_name: &certificate.course_name,
            issued_date: &certificate.issued_date,
        };
        self.post_bytes("/api/certificates/download", &args).await
    }

    pub async fn issue_certificate(&self, learner_id: u32, course_id: u32) -> Result<MessageResponse, ApiError> {
        self.post("/api/certificates/issue", &IssueArgs { learner_id, course_id }).await
    }
}
