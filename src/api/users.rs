//! User Endpoints
//!
//! Mentor and learner administration, plus lookups used by mentors.

use serde::Serialize;

use super::{encode_query, ApiClient};
use crate::error::ApiError;
use crate::models::{EligibleMentor, Learner, Mentor, MentorStudent, MessageResponse, PublicMentor};

#[derive(Serialize)]
struct StatusArgs<'a> {
    status: &'a str,
}

impl ApiClient {
    pub async fn mentors(&self) -> Result<Vec<Mentor>, ApiError> {
        self.get("/api/users/mentors").await
    }

    pub async fn learners(&self) -> Result<Vec<Learner>, ApiError> {
        self.get("/api/users/learners").await
    }

    /// Mentors visible to the signed-in learner
    pub async fn my_mentors(&self) -> Result<Vec<PublicMentor>, ApiError> {
        self.get("/api/users/mentor").await
    }

    pub async fn eligible_mentors(&self, query: &str) -> Result<Vec<EligibleMentor>, ApiError> {
        self.get(&format!("/api/users/eligible-mentors?q={}", encode_query(query))).await
    }

    /// Learners of the signed-in mentor, optionally for one course
    pub async fn my_learners(&self, course_id: Option<u32>) -> Result<Vec<MentorStudent>, ApiError> {
        match course_id {
            Some(id) => self.get(&format!("/api/users/my-learners?courseId={}", id)).await,
            None => self.get("/api/users/my-learners").await,
        }
    }

    /// `status` is `"active"` or `"disabled"`
    pub async fn set_user_status(&self, user_id: u32, status: &str) -> Result<MessageResponse, ApiError> {
        self.put(&format!("/api/users/{}", user_id), &StatusArgs { status }).await
    }

    pub async fn delete_user(&self, user_id: u32) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/users/{}", user_id)).await
    }
}
