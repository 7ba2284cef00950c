//! Physical Programs & Public Mentors
//!
//! Endpoints under `/api/public` need no session.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::FormPayload;
use crate::models::{AvailabilitySlot, LearnerPrograms, MessageResponse, NextProgram, PhysicalProgram, PublicMentor};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgramIdArgs {
    program_id: u32,
}

impl ApiClient {
    /// `None` when nothing is scheduled
    pub async fn next_program(&self) -> Result<Option<NextProgram>, ApiError> {
        self.get("/api/public/next-physical-program").await
    }

    pub async fn public_programs(&self) -> Result<Vec<PhysicalProgram>, ApiError> {
        self.get("/api/public/physical-programs").await
    }

    pub async fn public_mentors(&self) -> Result<Vec<PublicMentor>, ApiError> {
        self.get("/api/public/mentors").await
    }

    pub async fn mentor_slots(&self, mentor_id: u32) -> Result<Vec<AvailabilitySlot>, ApiError> {
        self.get(&format!("/api/public/mentors/{}/availability", mentor_id)).await
    }

    pub async fn learner_programs(&self) -> Result<LearnerPrograms, ApiError> {
        self.get("/api/learner/physical-programs").await
    }

    pub async fn enroll_program(&self, program_id: u32) -> Result<MessageResponse, ApiError> {
        self.post("/api/learner/physical-programs/enroll", &ProgramIdArgs { program_id }).await
    }

    /// Multipart with the program `image`
    pub async fn create_program(&self, payload: &FormPayload) -> Result<MessageResponse, ApiError> {
        self.post_form("/api/pm/physical-programs", payload).await
    }
}
