//! Yego SheCan Frontend App
//!
//! Provides the store, router and session, guards dashboard routes and
//! renders the page for the current route.

use leptos::logging::log;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DashboardShell, Loading, PublicNav, Toaster};
use crate::config::AppConfig;
use crate::context::{use_session, Router, SessionContext};
use crate::models::Role;
use crate::pages::*;
use crate::routes::Route;
use crate::session::guard_route;
use crate::store::{use_toasts, AppState};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(Store::new(AppState::new()));
    let router = Router::new();
    provide_context(router);

    let config = AppConfig::from_env();
    log!("[APP] API base URL {}", config.api_base_url);
    let session = SessionContext::new(config, router, use_toasts());
    provide_context(session);
    session.restore();

    Effect::new(move |_| {
        let route = router.route.get();
        let redirect = session.state.with(|state| guard_route(&route, state));
        if let Some(target) = redirect {
            log!("[ROUTER] {} not allowed, redirecting to {}", route.path(), target.path());
            router.replace(target);
        }
    });

    view! {
        {move || {
            let route = router.route.get();
            if route.requires_session() {
                view! { <DashboardShell>{dashboard_page(route)}</DashboardShell> }.into_any()
            } else {
                view! {
                    <PublicNav />
                    <main class="public-main">{public_page(route)}</main>
                }
                .into_any()
            }
        }}
        <Toaster />
    }
}

fn public_page(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Contact => view! { <ContactPage /> }.into_any(),
        Route::Courses => view! { <CatalogueCoursesPage /> }.into_any(),
        Route::PhysicalPrograms => view! { <PhysicalProgramsPage /> }.into_any(),
        Route::Mentorship => view! { <MentorshipPage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
        Route::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        Route::ResetPassword(token) => view! { <ResetPasswordPage token=token /> }.into_any(),
        Route::CompleteRegistration(token) => view! { <CompleteRegistrationPage token=token /> }.into_any(),
        _ => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Session-only pages; nothing renders until the stored token is checked
/// and the guard has let the user through.
fn dashboard_page(route: Route) -> impl IntoView {
    let session = use_session();
    // Profile edits replace the user; only the role decides what renders
    let role = Memo::new(move |_| session.state.with(|state| state.user().map(|user| user.role.clone())));
    let blocked = {
        let route = route.clone();
        Memo::new(move |_| session.state.with(|state| guard_route(&route, state)).is_some())
    };

    move || {
        let Some(role) = role.get() else {
            return view! { <Loading /> }.into_any();
        };
        if blocked.get() {
            return view! { <Loading /> }.into_any();
        }
        match route.clone() {
            Route::Dashboard if role == Role::Mentor => view! { <MentorDashboardPage /> }.into_any(),
            Route::Dashboard => view! { <AdminDashboardPage /> }.into_any(),
            Route::AdminCourses => view! { <AdminCoursesPage /> }.into_any(),
            Route::AddCourse => view! { <AddCoursePage /> }.into_any(),
            Route::CourseDetails(id) => view! { <CourseDetailsPage course_id=id /> }.into_any(),
            Route::AdminMentors => view! { <AdminMentorsPage /> }.into_any(),
            Route::InviteMentor => view! { <InviteMentorPage /> }.into_any(),
            Route::AdminLearners => view! { <AdminLearnersPage /> }.into_any(),
            Route::MentorApplications => view! { <MentorApplicationsPage /> }.into_any(),
            Route::AdminProfile => view! { <AdminProfilePage /> }.into_any(),
            Route::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
            Route::MentorDashboard => view! { <MentorDashboardPage /> }.into_any(),
            Route::MentorBookings => view! { <MentorBookingsPage /> }.into_any(),
            Route::MentorAvailability => view! { <MentorAvailabilityPage /> }.into_any(),
            Route::MentorQuizzes => view! { <MentorQuizzesPage /> }.into_any(),
            Route::MentorStudents => view! { <MentorStudentsPage /> }.into_any(),
            Route::MentorCourses => view! { <MentorCoursesPage /> }.into_any(),
            Route::MentorCourseStudents(id) => view! { <MentorCourseStudentsPage course_id=id /> }.into_any(),
            Route::MentorEditCourse => view! { <UploadResourcePage /> }.into_any(),
            Route::MentorAddQuiz => view! { <MentorAddQuizPage /> }.into_any(),
            Route::LearnerDashboard => view! { <LearnerDashboardPage /> }.into_any(),
            Route::LearnerCourses => view! { <LearnerCoursesPage /> }.into_any(),
            Route::LearnerCourse(id) => view! { <CoursePage course_id=id /> }.into_any(),
            Route::TakeQuiz(id) => view! { <TakeQuizPage quiz_id=id /> }.into_any(),
            Route::LearnerProfile => view! { <LearnerProfilePage /> }.into_any(),
            Route::LearnerPrograms => view! { <LearnerProgramsPage /> }.into_any(),
            Route::LearnerMentorship => view! { <LearnerMentorshipPage /> }.into_any(),
            Route::MentorSlots(id) => view! { <MentorSlotsPage mentor_id=id /> }.into_any(),
            _ => view! { <NotFoundPage /> }.into_any(),
        }
    }
}
