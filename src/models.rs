//! Frontend Models
//!
//! Data structures matching backend responses. The backend mixes
//! camelCase and snake_case between endpoints, so each struct carries
//! its own serde renames.

use serde::{Deserialize, Deserializer, Serialize};

// ========================
// Lenient field decoding
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    Text(String),
}

/// Some endpoints send ids as strings ("12"), others as numbers.
fn id_from_number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(id) => Ok(id),
        NumberOrString::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// KPI counters arrive either as numbers or preformatted strings.
fn display_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => "0".to_string(),
        other => other.to_string(),
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ========================
// Users & Session
// ========================

/// Platform role. Unknown roles are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    ProgramManager,
    Mentor,
    Learner,
    Other(String),
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "program manager" => Self::ProgramManager,
            "mentor" => Self::Mentor,
            "learner" => Self::Learner,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::ProgramManager => "program manager".to_string(),
            Role::Mentor => "mentor".to_string(),
            Role::Learner => "learner".to_string(),
            Role::Other(value) => value,
        }
    }
}

impl Role {
    /// Program managers and mentors work in the admin dashboard.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::ProgramManager | Self::Mentor)
    }
}

/// Authenticated user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default, alias = "firstName")]
    pub first_name: String,
    #[serde(default, alias = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateResponse {
    pub user: User,
}

/// Generic `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Account state shared by mentors and learners
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AccountStatus {
    Active,
    Inactive,
    Pending,
    Other(String),
}

impl From<String> for AccountStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "active" => Self::Active,
            "inactive" | "disabled" => Self::Inactive,
            "pending" => Self::Pending,
            _ => Self::Other(value),
        }
    }
}

impl AccountStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Other(value) => value,
        }
    }

    /// Value sent to `PUT /api/users/{id}` to flip the status
    pub fn toggled_request_value(&self) -> &'static str {
        match self {
            Self::Active => "disabled",
            _ => "active",
        }
    }
}

// ========================
// Courses
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl From<String> for CourseLevel {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Other(value),
        }
    }
}

impl CourseLevel {
    pub fn label(&self) -> &str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Other(value) => value,
        }
    }
}

/// Row of `GET /api/courses/admin-list`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCourse {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub duration: String,
    #[serde(default)]
    pub lessons: u32,
    pub level: CourseLevel,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mentor: String,
    #[serde(default)]
    pub enrolled_count: u32,
}

/// Course card in the public catalogue and the learner dashboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueCourse {
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub duration: String,
    #[serde(default)]
    pub lessons: u32,
    pub level: CourseLevel,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_enrolled: bool,
}

/// Row of `GET /api/courses/my-courses`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub duration: String,
    #[serde(default)]
    pub lessons: u32,
    #[serde(default)]
    pub lessons_completed: u32,
    pub level: CourseLevel,
    #[serde(default)]
    pub image: Option<String>,
}

/// Course as seen by an enrolled learner (`GET /api/courses/learn/{id}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnCourse {
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub video_link: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub final_quiz: Option<FinalQuiz>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub quiz_id: Option<u32>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub quiz_passed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalQuiz {
    pub quiz_id: u32,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChapterToggle {
    pub completed: bool,
}

/// `GET /api/courses/{id}`: course with its learners for certificate issuance
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseLearners {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub learners: Vec<CourseLearner>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseLearner {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enrolled: String,
    #[serde(default)]
    pub lessons_completed: u32,
    #[serde(default)]
    pub total_lessons: u32,
    #[serde(default)]
    pub certificate_eligible: bool,
}

/// Course picker entry (`GET /api/courses`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseOption {
    pub id: u32,
    #[serde(alias = "title")]
    pub name: String,
}

// ========================
// Mentors, Learners, Applications
// ========================

/// Row of `GET /api/users/mentors`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mentor {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub expertise: Option<String>,
    pub status: AccountStatus,
    #[serde(default)]
    pub image: Option<String>,
}

/// Row of `GET /api/users/learners`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Learner {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    pub email: String,
    pub status: AccountStatus,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

impl Learner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Mentor card for learners (`GET /api/users/mentor`, `GET /api/public/mentors`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublicMentor {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expertise: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Invite suggestion (`GET /api/users/eligible-mentors?q=`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EligibleMentor {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MentorApplication {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expertise: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default)]
    pub cv_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationDecision {
    Approved,
    Declined,
}

impl ApplicationDecision {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Approved => "approve",
            Self::Declined => "decline",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Declined => "declined",
        }
    }
}

// ========================
// Bookings & Availability
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Scheduled,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Still waiting to happen, so it can be completed or cancelled
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::Scheduled)
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Confirmed | Self::Scheduled => "badge badge-green",
            Self::Pending => "badge badge-blue",
            Self::Completed => "badge badge-gray",
            Self::Cancelled => "badge badge-red",
        }
    }
}

/// Row of `GET /api/bookings` (mentor view)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u32,
    pub mentee_name: String,
    pub date: String,
    pub time: String,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topic: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    #[serde(alias = "available")]
    Available,
    #[serde(alias = "booked")]
    Booked,
    #[serde(alias = "cancelled")]
    Cancelled,
}

impl SlotStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Lowercase form accepted by `PUT /api/mentor/availability/{id}`
    pub fn request_value(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvailabilitySlot {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub status: SlotStatus,
}

// ========================
// Quizzes & Certificates
// ========================

/// Row of `GET /api/mentor/quizzes/overview`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOverview {
    pub quiz_id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub course: String,
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub passed: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub expected_students: u32,
}

impl QuizOverview {
    /// Share of attempts that passed, rounded; 0 without attempts
    pub fn pass_rate(&self) -> u32 {
        let attempts = self.passed + self.failed;
        if attempts == 0 {
            return 0;
        }
        ((f64::from(self.passed) / f64::from(attempts)) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quiz {
    pub quiz_id: u32,
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub is_final: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizEnvelope {
    pub quiz: Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct QuizResult {
    pub passed: bool,
    pub score_percentage: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizResultEnvelope {
    pub result: QuizResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: u32,
    pub course_name: String,
    pub issued_date: String,
}

// ========================
// Physical Programs
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhysicalProgram {
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub duration: String,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub next_session: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, rename = "isEnrolled")]
    pub is_enrolled: bool,
}

/// `GET /api/learner/physical-programs`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerPrograms {
    #[serde(default)]
    pub programs: Vec<PhysicalProgram>,
    /// Learners must finish an online course before joining a workshop
    #[serde(default)]
    pub is_eligible: bool,
}

/// `GET /api/public/next-physical-program` (null when nothing is scheduled)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NextProgram {
    pub title: String,
    pub next_session: String,
}

// ========================
// Dashboards
// ========================

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    #[serde(default, deserialize_with = "display_value")]
    pub total_courses: String,
    #[serde(default, deserialize_with = "display_value")]
    pub active_mentors: String,
    #[serde(default, deserialize_with = "display_value")]
    pub enrolled_students: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    Assigned,
    Pending,
    NotAssigned,
}

impl AssignmentStatus {
    pub const ALL: [Self; 3] = [Self::Assigned, Self::Pending, Self::NotAssigned];

    pub fn label(self) -> &'static str {
        match self {
            Self::Assigned => "Assigned",
            Self::Pending => "Pending",
            Self::NotAssigned => "Not Assigned",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Pending => "pending",
            Self::NotAssigned => "not-assigned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCourse {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub mentor_id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mentor_name: String,
    pub mentor_status: AssignmentStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMentor {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub status: AccountStatus,
    #[serde(default)]
    pub assigned_courses: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStudent {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enrolled_course: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mentor: String,
    #[serde(default)]
    pub progress: f64,
}

/// `GET /api/dashboard`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub kpis: Kpis,
    #[serde(default)]
    pub courses: Vec<DashboardCourse>,
    #[serde(default)]
    pub mentors: Vec<DashboardMentor>,
    #[serde(default)]
    pub students: Vec<DashboardStudent>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorKpis {
    #[serde(default)]
    pub total_courses: u32,
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub total_chapters: u32,
    #[serde(default)]
    pub completed_courses: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorCourse {
    pub id: u32,
    pub title: String,
    pub level: CourseLevel,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub duration: String,
    #[serde(default)]
    pub chapters: u32,
    #[serde(default)]
    pub students_enrolled: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpcomingBooking {
    pub id: u32,
    pub student: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub course: String,
    pub time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topic: String,
}

/// `GET /api/mentor/dashboard`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MentorDashboard {
    #[serde(default)]
    pub kpis: MentorKpis,
    #[serde(default)]
    pub courses: Vec<MentorCourse>,
    #[serde(default)]
    pub bookings: Vec<UpcomingBooking>,
}

/// Row of `GET /api/users/my-learners`. Per-course listings send name
/// parts and `enrolled_at` instead of `name` and `enrolled`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "LearnerRow")]
pub struct MentorStudent {
    pub id: u32,
    pub name: String,
    pub progress: f64,
    pub enrolled: String,
    pub last_active: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LearnerRow {
    #[serde(deserialize_with = "id_from_number_or_string")]
    id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    name: String,
    #[serde(default, alias = "first_name", deserialize_with = "null_as_empty")]
    first_name: String,
    #[serde(default, alias = "last_name", deserialize_with = "null_as_empty")]
    last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    email: String,
    #[serde(default)]
    progress: f64,
    #[serde(default, alias = "enrolled_at", alias = "enrolledAt", deserialize_with = "null_as_empty")]
    enrolled: String,
    #[serde(default, alias = "last_active", deserialize_with = "null_as_empty")]
    last_active: String,
}

/// `first last`, trimmed; the email when both parts are blank
pub fn learner_display_name(first_name: &str, last_name: &str, email: &str) -> String {
    let name = format!("{} {}", first_name.trim(), last_name.trim());
    match name.trim() {
        "" => email.to_string(),
        name => name.to_string(),
    }
}

impl From<LearnerRow> for MentorStudent {
    fn from(row: LearnerRow) -> Self {
        let name = if row.name.trim().is_empty() {
            learner_display_name(&row.first_name, &row.last_name, &row.email)
        } else {
            row.name
        };
        Self {
            id: row.id,
            name,
            progress: row.progress,
            enrolled: row.enrolled,
            last_active: row.last_active,
        }
    }
}

/// `GET /api/mentor/courses/{id}/details`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseSummary {
    #[serde(default, alias = "title", deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Row of `GET /api/mentor/courses/{id}/chapters`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChapterOption {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: u32,
    pub title: String,
}

/// Question drafted by the quiz generator, answer included
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub correct_answer: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedQuiz {
    #[serde(default)]
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuizEnvelope {
    #[serde(default)]
    pub quiz: GeneratedQuiz,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        let user: User = serde_json::from_str(
            r#"{"id":3,"username":"pm","email":"pm@shecan.rw","first_name":"Aline","last_name":"U","role":"Program Manager"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::ProgramManager);
        assert!(user.role.is_staff());
        assert_eq!(user.full_name(), "Aline U");

        assert_eq!(Role::from("mentor".to_string()), Role::Mentor);
        assert_eq!(Role::from("learner".to_string()), Role::Learner);
        assert_eq!(Role::from("guest".to_string()), Role::Other("guest".to_string()));
        assert!(!Role::Learner.is_staff());
        assert_eq!(String::from(Role::ProgramManager), "program manager");
    }

    #[test]
    fn test_camel_case_profile_alias() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"email":"a@b.c","firstName":"Grace","lastName":"M","role":"learner","username":"grace"}"#,
        )
        .unwrap();
        assert_eq!(user.first_name, "Grace");
        assert_eq!(user.profile_picture_url, None);
    }

    #[test]
    fn test_string_ids_and_null_fields() {
        let course: EnrolledCourse = serde_json::from_str(
            r#"{"id":"12","title":"Web Basics","description":null,"lessons":5,"lessonsCompleted":2,"level":"Beginner","image":null}"#,
        )
        .unwrap();
        assert_eq!(course.id, 12);
        assert_eq!(course.description, "");
        assert_eq!(course.level, CourseLevel::Beginner);
    }

    #[test]
    fn test_dashboard_payload() {
        let data: DashboardData = serde_json::from_str(
            r#"{
                "kpis": {"totalCourses": 4, "activeMentors": "2", "enrolledStudents": 17},
                "courses": [{"id":1,"title":"Design","mentorId":null,"mentorName":null,"mentorStatus":"not-assigned"}],
                "mentors": [{"id":2,"name":null,"status":"pending","assignedCourses":0}],
                "students": [{"id":5,"name":"Diane","enrolledCourse":"Design","mentor":"Aline","progress":62.5}]
            }"#,
        )
        .unwrap();
        assert_eq!(data.kpis.total_courses, "4");
        assert_eq!(data.kpis.active_mentors, "2");
        assert_eq!(data.courses[0].mentor_status, AssignmentStatus::NotAssigned);
        assert_eq!(data.courses[0].mentor_name, "");
        assert_eq!(data.mentors[0].status, AccountStatus::Pending);
        assert_eq!(data.students[0].progress, 62.5);
    }

    #[test]
    fn test_status_toggle_value() {
        assert_eq!(AccountStatus::from("Active".to_string()).toggled_request_value(), "disabled");
        assert_eq!(AccountStatus::from("Inactive".to_string()).toggled_request_value(), "active");
        assert_eq!(AccountStatus::from("disabled".to_string()), AccountStatus::Inactive);
    }

    #[test]
    fn test_quiz_pass_rate() {
        let overview = QuizOverview {
            quiz_id: 1,
            title: "HTML".into(),
            course: "Web".into(),
            total_students: 10,
            passed: 2,
            failed: 1,
            expected_students: 12,
        };
        assert_eq!(overview.pass_rate(), 67);
        assert_eq!(QuizOverview { passed: 0, failed: 0, ..overview }.pass_rate(), 0);
    }

    #[test]
    fn test_learner_rows_in_both_shapes() {
        let learners: Vec<MentorStudent> = serde_json::from_str(
            r#"[
                {"id":4,"name":"Diane K","progress":40,"enrolled":"2025-01-02","lastActive":"2025-02-01"},
                {"id":"5","first_name":"Grace","last_name":null,"email":"grace@shecan.rw","progress":75.5,"enrolled_at":"2025-03-04"},
                {"id":6,"first_name":" ","last_name":"","email":"anon@shecan.rw","progress":0}
            ]"#,
        )
        .unwrap();
        assert_eq!(learners[0].name, "Diane K");
        assert_eq!(learners[0].last_active, "2025-02-01");
        assert_eq!(learners[1].id, 5);
        assert_eq!(learners[1].name, "Grace");
        assert_eq!(learners[1].enrolled, "2025-03-04");
        assert_eq!(learners[2].name, "anon@shecan.rw");
    }

    #[test]
    fn test_generated_quiz_payload() {
        let envelope: GeneratedQuizEnvelope = serde_json::from_str(
            r#"{"message":"ok","quiz":{"id":9,"questions":[{"question":"Tag for links?","options":["<a>","<p>"],"correct_answer":"<a>"}]}}"#,
        )
        .unwrap();
        let question = &envelope.quiz.questions[0];
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.correct_answer, "<a>");
    }
}
