//! Booking Endpoints

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Booking, BookingStatus, MessageResponse};

#[derive(Serialize)]
struct BookingStatusArgs {
    status: BookingStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookSessionArgs<'a> {
    slot_id: u32,
    topic: &'a str,
}

impl ApiClient {
    pub async fn bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("/api/bookings").await
    }

    pub async fn set_booking_status(&self, booking_id: u32, status: BookingStatus) -> Result<MessageResponse, ApiError> {
        self.put(&format!("/api/bookings/{}/status", booking_id), &BookingStatusArgs { status }).await
    }

    /// Learner books an open mentor slot
    pub async fn book_session(&self, slot_id: u32, topic: &str) -> Result<MessageResponse, ApiError> {
        self.post("/api/learner/book-session", &BookSessionArgs { slot_id, topic }).await
    }
}
