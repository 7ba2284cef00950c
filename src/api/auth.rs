//! Auth Endpoints
//!
//! Login, registration, password flows, profile and public contact forms.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::FormPayload;
use crate::models::{LoginResponse, MessageResponse, ProfileUpdateResponse, User};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterArgs {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
    pub age: Option<u32>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRegistrationArgs {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordArgs<'a> {
    new_password: &'a str,
    confirm_new_password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordArgs<'a> {
    previous_password: &'a str,
    new_password: &'a str,
    confirm_new_password: &'a str,
}

#[derive(Serialize)]
struct EmailArgs<'a> {
    email: &'a str,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ContactArgs {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InviteMentorArgs<'a> {
    email: &'a str,
    course_id: u32,
}

// ========================
// Commands
// ========================

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post("/api/auth/login", &LoginArgs { email, password }).await
    }

    pub async fn register(&self, args: &RegisterArgs) -> Result<MessageResponse, ApiError> {
        self.post("/api/auth/register", args).await
    }

    pub async fn complete_registration(
        &self,
        token: &str,
        args: &CompleteRegistrationArgs,
    ) -> Result<MessageResponse, ApiError> {
        self.put(&format!("/api/auth/complete-registration/{}", token), args).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.post("/api/auth/forgot-password", &EmailArgs { email }).await
    }

    pub async fn reset_password(&self, token: &str, password: &str, confirm: &str) -> Result<MessageResponse, ApiError> {
        let args = ResetPasswordArgs {
            new_password: password,
            confirm_new_password: confirm,
        };
        self.put(&format!("/api/auth/reset-password/{}", token), &args).await
    }

    pub async fn change_password(&self, previous: &str, new: &str, confirm: &str) -> Result<MessageResponse, ApiError> {
        let args = ChangePasswordArgs {
            previous_password: previous,
            new_password: new,
            confirm_new_password: confirm,
        };
        self.put("/api/auth/change-password", &args).await
    }

    pub async fn current_profile(&self) -> Result<User, ApiError> {
        self.get("/api/auth/profile").await
    }

    /// Multipart: text fields plus an optional `profilePicture`.
    pub async fn update_profile(&self, payload: &FormPayload) -> Result<User, ApiError> {
        let response: ProfileUpdateResponse = self.put_form("/api/auth/profile", payload).await?;
        Ok(response.user)
    }

    pub async fn send_contact(&self, args: &ContactArgs) -> Result<MessageResponse, ApiError> {
        self.post("/api/auth/contact", args).await
    }

    /// Multipart with the applicant's `cv`.
    pub async fn apply_mentor(&self, payload: &FormPayload) -> Result<MessageResponse, ApiError> {
        self.post_form("/api/auth/apply-mentor", payload).await
    }

    pub async fn invite_mentor(&self, email: &str, course_id: u32) -> Result<MessageResponse, ApiError> {
        self.post("/api/auth/invite-mentor", &InviteMentorArgs { email, course_id }).await
    }
}
