//! Course Endpoints

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AdminCourse, CatalogueCourse, ChapterToggle, CourseLearners, CourseOption, EnrolledCourse, LearnCourse,
    MessageResponse,
};

#[derive(Serialize)]
struct NewCourseArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CourseIdArgs {
    course_id: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChapterIdArgs {
    chapter_id: u32,
}

impl ApiClient {
    // ========================
    // Catalogue
    // ========================

    pub async fn course_options(&self) -> Result<Vec<CourseOption>, ApiError> {
        self.get("/api/courses").await
    }

    pub async fn public_courses(&self) -> Result<Vec<CatalogueCourse>, ApiError> {
        self.get("/api/courses/public").await
    }

    pub async fn available_courses(&self) -> Result<Vec<CatalogueCourse>, ApiError> {
        self.get("/api/courses/available").await
    }

    // ========================
    // Program manager
    // ========================

    pub async fn admin_courses(&self) -> Result<Vec<AdminCourse>, ApiError> {
        self.get("/api/courses/admin-list").await
    }

    pub async fn course_learners(&self, course_id: u32) -> Result<CourseLearners, ApiError> {
        self.get(&format!("/api/courses/{}", course_id)).await
    }

    pub async fn create_course(&self, name: &str) -> Result<MessageResponse, ApiError> {
        self.post("/api/courses", &NewCourseArgs { name }).await
    }

    pub async fn delete_course(&self, course_id: u32) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/courses/{}", course_id)).await
    }

    // ========================
    // Learner
    // ========================

    pub async fn my_courses(&self) -> Result<Vec<EnrolledCourse>, ApiError> {
        self.get("/api/courses/my-courses").await
    }

    pub async fn learn_course(&self, course_id: u32) -> Result<LearnCourse, ApiError> {
        self.get(&format!("/api/courses/learn/{}", course_id)).await
    }

    pub async fn enroll(&self, course_id: u32) -> Result<MessageResponse, ApiError> {
        self.post("/api/courses/enroll", &CourseIdArgs { course_id }).await
    }

    /// Flip a chapter's completion; the response carries the new state.
    pub async fn toggle_chapter(&self, chapter_id: u32) -> Result<ChapterToggle, ApiError> {
        self.post("/api/courses/chapters/toggle-completion", &ChapterIdArgs { chapter_id }).await
    }
}
