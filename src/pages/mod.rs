//! Pages
//!
//! One component per route.

mod admin_courses;
mod admin_dashboard;
mod admin_people;
mod auth;
mod course;
mod learner;
mod mentor;
mod mentor_courses;
mod profile;
mod public;
pub mod shared;

pub use admin_courses::{AddCoursePage, AdminCoursesPage, CourseDetailsPage};
pub use admin_dashboard::AdminDashboardPage;
pub use admin_people::{AdminLearnersPage, AdminMentorsPage, InviteMentorPage, MentorApplicationsPage};
pub use auth::{
    ChangePasswordPage, CompleteRegistrationPage, ForgotPasswordPage, LoginPage, RegisterPage, ResetPasswordPage,
};
pub use course::{CoursePage, TakeQuizPage};
pub use learner::{
    LearnerCoursesPage, LearnerDashboardPage, LearnerMentorshipPage, LearnerProgramsPage, MentorSlotsPage,
};
pub use mentor::{
    MentorAvailabilityPage, MentorBookingsPage, MentorDashboardPage, MentorQuizzesPage, MentorStudentsPage,
};
pub use mentor_courses::{MentorAddQuizPage, MentorCourseStudentsPage, MentorCoursesPage, UploadResourcePage};
pub use profile::{AdminProfilePage, LearnerProfilePage};
pub use public::{
    AboutPage, CatalogueCoursesPage, ContactPage, HomePage, MentorshipPage, NotFoundPage, PhysicalProgramsPage,
};
