//! Mentor Endpoints
//!
//! Mentor dashboard and courses, learner messages, resource uploads,
//! quiz overview and availability slots.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::FormPayload;
use crate::models::{
    AvailabilitySlot, ChapterOption, CourseSummary, MentorCourse, MentorDashboard, MessageResponse, QuizOverview,
    SlotStatus,
};

#[derive(Serialize)]
struct NewSlotsArgs<'a> {
    date: &'a str,
    times: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LearnerMessageArgs<'a> {
    learner_id: u32,
    course_id: u32,
    message: &'a str,
}

#[derive(Serialize)]
struct SlotStatusArgs {
    status: &'static str,
}

impl ApiClient {
    pub async fn mentor_dashboard(&self) -> Result<MentorDashboard, ApiError> {
        self.get("/api/mentor/dashboard").await
    }

    pub async fn mentor_report_pdf(&self) -> Result<Vec<u8>, ApiError> {
        self.get_bytes("/api/mentor/dashboard/export-pdf").await
    }

    pub async fn mentor_courses(&self) -> Result<Vec<MentorCourse>, ApiError> {
        self.get("/api/mentor/courses").await
    }

    pub async fn mentor_course_details(&self, course_id: u32) -> Result<CourseSummary, ApiError> {
        self.get(&format!("/api/mentor/courses/{}/details", course_id)).await
    }

    pub async fn course_chapters(&self, course_id: u32) -> Result<Vec<ChapterOption>, ApiError> {
        self.get(&format!("/api/mentor/courses/{}/chapters", course_id)).await
    }

    pub async fn message_learner(
        &self,
        learner_id: u32,
        course_id: u32,
        message: &str,
    ) -> Result<MessageResponse, ApiError> {
        let args = LearnerMessageArgs {
            learner_id,
            course_id,
            message,
        };
        self.post("/api/mentor/message-learner", &args).await
    }

    /// Multipart: course fields plus `resourceFile` and `courseImage`
    pub async fn upload_resource(&self, payload: &FormPayload) -> Result<MessageResponse, ApiError> {
        self.post_form("/api/resources", payload).await
    }

    pub async fn quiz_overview(&self) -> Result<Vec<QuizOverview>, ApiError> {
        self.get("/api/mentor/quizzes/overview").await
    }

    // ========================
    // Availability
    // ========================

    pub async fn my_availability(&self) -> Result<Vec<AvailabilitySlot>, ApiError> {
        self.get("/api/mentor/availability").await
    }

    /// Open one slot per time on `date` (`YYYY-MM-DD`)
    pub async fn add_availability(&self, date: &str, times: &[String]) -> Result<MessageResponse, ApiError> {
        self.post("/api/mentor/availability", &NewSlotsArgs { date, times }).await
    }

    pub async fn cancel_slot(&self, slot_id: u32) -> Result<MessageResponse, ApiError> {
        let args = SlotStatusArgs {
            status: SlotStatus::Cancelled.request_value(),
        };
        self.put(&format!("/api/mentor/availability/{}", slot_id), &args).await
    }

    pub async fn delete_slot(&self, slot_id: u32) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/mentor/availability/{}", slot_id)).await
    }
}
