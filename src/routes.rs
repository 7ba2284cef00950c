//! Typed Routes
//!
//! Every page the app can show, parsed from and rendered back to a URL path.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Public
    Home,
    About,
    Contact,
    Courses,
    PhysicalPrograms,
    Mentorship,
    // Auth
    Login,
    Register,
    ForgotPassword,
    ResetPassword(String),
    CompleteRegistration(String),
    // Program manager / mentor
    Dashboard,
    AdminCourses,
    AddCourse,
    CourseDetails(u32),
    AdminMentors,
    InviteMentor,
    AdminLearners,
    MentorApplications,
    AdminProfile,
    ChangePassword,
    MentorDashboard,
    MentorBookings,
    MentorAvailability,
    MentorQuizzes,
    MentorStudents,
    MentorCourses,
    MentorCourseStudents(u32),
    MentorEditCourse,
    MentorAddQuiz,
    // Learner
    LearnerDashboard,
    LearnerCourses,
    LearnerCourse(u32),
    TakeQuiz(u32),
    LearnerProfile,
    LearnerPrograms,
    LearnerMentorship,
    MentorSlots(u32),
    NotFound,
}

impl Route {
    /// Query string and fragment are ignored; a trailing slash is tolerated.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            ["services", "courses"] => Self::Courses,
            ["services", "physical"] => Self::PhysicalPrograms,
            ["mentorship"] => Self::Mentorship,

            ["auth", "login"] => Self::Login,
            ["auth", "register"] => Self::Register,
            ["forgot-password"] => Self::ForgotPassword,
            ["auth", "reset-password", token] => Self::ResetPassword(token.to_string()),
            ["auth", "complete-registration", token] => Self::CompleteRegistration(token.to_string()),

            ["dashboard"] => Self::Dashboard,
            ["dashboard", "courses"] => Self::AdminCourses,
            ["dashboard", "courses", "add"] => Self::AddCourse,
            ["dashboard", "courses", id] => id.parse().map(Self::CourseDetails).unwrap_or(Self::NotFound),
            ["dashboard", "mentors"] => Self::AdminMentors,
            ["dashboard", "mentors", "invite"] => Self::InviteMentor,
            ["dashboard", "users"] => Self::AdminLearners,
            ["dashboard", "mentorapplication"] => Self::MentorApplications,
            ["dashboard", "profile"] => Self::AdminProfile,
            ["dashboard", "change-password"] => Self::ChangePassword,

            ["mentor_dashboard"] => Self::MentorDashboard,
            ["mentor_dashboard", "booking"] => Self::MentorBookings,
            ["mentor_dashboard", "availability"] => Self::MentorAvailability,
            ["mentor_dashboard", "Quiz"] => Self::MentorQuizzes,
            ["mentor_dashboard", "students"] => Self::MentorStudents,
            ["mentor_dashboard", "AllCourses"] => Self::MentorCourses,
            ["mentor_dashboard", "AllCourses", id] => {
                id.parse().map(Self::MentorCourseStudents).unwrap_or(Self::NotFound)
            }
            ["mentor_dashboard", "editcourse"] => Self::MentorEditCourse,
            ["mentor_dashboard", "Overview"] => Self::MentorAddQuiz,

            ["user-dashboard"] => Self::LearnerDashboard,
            ["user-dashboard", "your-courses"] => Self::LearnerCourses,
            ["user-dashboard", "your-courses", id] => id.parse().map(Self::LearnerCourse).unwrap_or(Self::NotFound),
            ["user-dashboard", "quiz", id] => id.parse().map(Self::TakeQuiz).unwrap_or(Self::NotFound),
            ["user-dashboard", "learner-profile"] => Self::LearnerProfile,
            ["user-dashboard", "physical-programs"] => Self::LearnerPrograms,
            ["user-dashboard", "mentorship"] => Self::LearnerMentorship,
            ["user-dashboard", "mentorship", id, "availability"] => {
                id.parse().map(Self::MentorSlots).unwrap_or(Self::NotFound)
            }

            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::About => "/about".into(),
            Self::Contact => "/contact".into(),
            Self::Courses => "/services/courses".into(),
            Self::PhysicalPrograms => "/services/physical".into(),
            Self::Mentorship => "/mentorship".into(),
            Self::Login => "/auth/login".into(),
            Self::Register => "/auth/register".into(),
            Self::ForgotPassword => "/forgot-password".into(),
            Self::ResetPassword(token) => format!("/auth/reset-password/{}", token),
            Self::CompleteRegistration(token) => format!("/auth/complete-registration/{}", token),
            Self::Dashboard => "/dashboard".into(),
            Self::AdminCourses => "/dashboard/courses".into(),
            Self::AddCourse => "/dashboard/courses/add".into(),
            Self::CourseDetails(id) => format!("/dashboard/courses/{}", id),
            Self::AdminMentors => "/dashboard/mentors".into(),
            Self::InviteMentor => "/dashboard/mentors/invite".into(),
            Self::AdminLearners => "/dashboard/users".into(),
            Self::MentorApplications => "/dashboard/mentorapplication".into(),
            Self::AdminProfile => "/dashboard/profile".into(),
            Self::ChangePassword => "/dashboard/change-password".into(),
            Self::MentorDashboard => "/mentor_dashboard".into(),
            Self::MentorBookings => "/mentor_dashboard/booking".into(),
            Self::MentorAvailability => "/mentor_dashboard/availability".into(),
            Self::MentorQuizzes => "/mentor_dashboard/Quiz".into(),
            Self::MentorStudents => "/mentor_dashboard/students".into(),
            Self::MentorCourses => "/mentor_dashboard/AllCourses".into(),
            Self::MentorCourseStudents(id) => format!("/mentor_dashboard/AllCourses/{}", id),
            Self::MentorEditCourse => "/mentor_dashboard/editcourse".into(),
            Self::MentorAddQuiz => "/mentor_dashboard/Overview".into(),
            Self::LearnerDashboard => "/user-dashboard".into(),
            Self::LearnerCourses => "/user-dashboard/your-courses".into(),
            Self::LearnerCourse(id) => format!("/user-dashboard/your-courses/{}", id),
            Self::TakeQuiz(id) => format!("/user-dashboard/quiz/{}", id),
            Self::LearnerProfile => "/user-dashboard/learner-profile".into(),
            Self::LearnerPrograms => "/user-dashboard/physical-programs".into(),
            Self::LearnerMentorship => "/user-dashboard/mentorship".into(),
            Self::MentorSlots(id) => format!("/user-dashboard/mentorship/{}/availability", id),
            Self::NotFound => "/404".into(),
        }
    }

    /// Pages that need a signed-in user
    pub fn requires_session(&self) -> bool {
        self.is_staff_area() || self.is_learner_area()
    }

    pub fn is_staff_area(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::AdminCourses
                | Self::AddCourse
                | Self::CourseDetails(_)
                | Self::AdminMentors
                | Self::InviteMentor
                | Self::AdminLearners
                | Self::MentorApplications
                | Self::AdminProfile
                | Self::ChangePassword
                | Self::MentorDashboard
                | Self::MentorBookings
                | Self::MentorAvailability
                | Self::MentorQuizzes
                | Self::MentorStudents
                | Self::MentorCourses
                | Self::MentorCourseStudents(_)
                | Self::MentorEditCourse
                | Self::MentorAddQuiz
        )
    }

    pub fn is_learner_area(&self) -> bool {
        matches!(
            self,
            Self::LearnerDashboard
                | Self::LearnerCourses
                | Self::LearnerCourse(_)
                | Self::TakeQuiz(_)
                | Self::LearnerProfile
                | Self::LearnerPrograms
                | Self::LearnerMentorship
                | Self::MentorSlots(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_roundtrip() {
        let routes = [
            Route::Home,
            Route::Courses,
            Route::Login,
            Route::ResetPassword("abc123".into()),
            Route::CourseDetails(7),
            Route::MentorQuizzes,
            Route::LearnerCourse(12),
            Route::TakeQuiz(3),
            Route::MentorSlots(9),
            Route::MentorCourses,
            Route::MentorCourseStudents(5),
            Route::MentorEditCourse,
            Route::MentorAddQuiz,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_add_course_is_not_an_id() {
        assert_eq!(Route::parse("/dashboard/courses/add"), Route::AddCourse);
        assert_eq!(Route::parse("/dashboard/courses/abc"), Route::NotFound);
    }

    #[test]
    fn test_unknown_and_decorated_paths() {
        assert_eq!(Route::parse("/nowhere"), Route::NotFound);
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/auth/login?next=/dashboard"), Route::Login);
        assert_eq!(Route::parse("/mentor_dashboard/quiz"), Route::NotFound);
    }

    #[test]
    fn test_session_areas() {
        assert!(Route::Dashboard.requires_session());
        assert!(Route::MentorBookings.is_staff_area());
        assert!(Route::TakeQuiz(1).is_learner_area());
        assert!(!Route::Home.requires_session());
        assert!(!Route::Login.requires_session());
    }

    #[test]
    fn test_mentor_course_tools_are_staff_only() {
        for route in [
            Route::MentorCourses,
            Route::MentorCourseStudents(2),
            Route::MentorEditCourse,
            Route::MentorAddQuiz,
        ] {
            assert!(route.is_staff_area());
            assert!(!route.is_learner_area());
        }
        assert_eq!(Route::parse("/mentor_dashboard/editcourse"), Route::MentorEditCourse);
        assert_eq!(Route::parse("/mentor_dashboard/AllCourses/x"), Route::NotFound);
    }
}
