//! Navigation
//!
//! Public header and the role-aware dashboard shell.

use leptos::prelude::*;

use crate::components::Link;
use crate::context::use_session;
use crate::models::Role;
use crate::routes::Route;
use crate::session::home_for;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Sidebar entries for a role
fn menu_for(role: &Role) -> Vec<(&'static str, Route)> {
    match role {
        Role::ProgramManager => vec![
            ("Dashboard", Route::Dashboard),
            ("Courses", Route::AdminCourses),
            ("Mentors", Route::AdminMentors),
            ("Learners", Route::AdminLearners),
            ("Applications", Route::MentorApplications),
            ("Profile", Route::AdminProfile),
        ],
        Role::Mentor => vec![
            ("Dashboard", Route::MentorDashboard),
            ("My Courses", Route::MentorCourses),
            ("Upload Resource", Route::MentorEditCourse),
            ("Create Quiz", Route::MentorAddQuiz),
            ("Quizzes", Route::MentorQuizzes),
            ("Availability", Route::MentorAvailability),
            ("Bookings", Route::MentorBookings),
            ("Students", Route::MentorStudents),
            ("Profile", Route::AdminProfile),
        ],
        _ => vec![
            ("Dashboard", Route::LearnerDashboard),
            ("My Courses", Route::LearnerCourses),
            ("Physical Programs", Route::LearnerPrograms),
            ("Mentorship", Route::LearnerMentorship),
            ("Profile", Route::LearnerProfile),
        ],
    }
}

#[component]
pub fn PublicNav() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="public-nav">
            <Link to=Route::Home class="brand">"Yego SheCan"</Link>
            <nav class="public-links">
                <Link to=Route::Home>"Home"</Link>
                <Link to=Route::About>"About"</Link>
                <Link to=Route::Courses>"Courses"</Link>
                <Link to=Route::PhysicalPrograms>"Physical Programs"</Link>
                <Link to=Route::Mentorship>"Become a Mentor"</Link>
                <Link to=Route::Contact>"Contact"</Link>
            </nav>
            <div class="public-actions">
                {move || match session.user() {
                    Some(user) => {
                        view! { <Link to=home_for(&user.role) class="btn btn-primary">"Dashboard"</Link> }
                            .into_any()
                    }
                    None => {
                        view! {
                            <Link to=Route::Login class="btn btn-secondary">"Log in"</Link>
                            <Link to=Route::Register class="btn btn-primary">"Sign up"</Link>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}

/// Sidebar + top bar around a dashboard page
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let session = use_session();
    let router = crate::context::use_router();

    let sidebar = move || {
        let role = session.user().map(|user| user.role).unwrap_or(Role::Learner);
        let current = router.route.get();
        menu_for(&role)
            .into_iter()
            .map(|(label, route)| {
                let class = if route == current { "sidebar-link active" } else { "sidebar-link" };
                view! { <Link to=route class=class>{label}</Link> }
            })
            .collect_view()
    };

    let avatar = move || {
        session.user().map(|user| {
            let name = user.full_name();
            match user.profile_picture_url.as_deref() {
                Some(path) if !path.is_empty() => {
                    view! { <img class="avatar" src=session.asset_url(path) alt=name /> }.into_any()
                }
                _ => view! { <span class="avatar avatar-initials">{initials(&name)}</span> }.into_any(),
            }
        })
    };

    view! {
        <div class="dashboard-shell">
            <aside class="sidebar">
                <Link to=Route::Home class="brand">"Yego SheCan"</Link>
                <nav class="sidebar-links">{sidebar}</nav>
                <button class="sidebar-link logout" on:click=move |_| session.logout()>
                    "Log out"
                </button>
            </aside>
            <div class="dashboard-main">
                <header class="topbar">
                    <span class="greeting">
                        {move || session.user().map(|user| format!("Hello, {}", user.first_name))}
                    </span>
                    {avatar}
                </header>
                <main class="dashboard-content">{children()}</main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("grace mukamana"), "GM");
        assert_eq!(initials("Aline"), "A");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_menu_by_role() {
        assert_eq!(menu_for(&Role::ProgramManager)[0].1, Route::Dashboard);
        assert_eq!(menu_for(&Role::Mentor)[1].1, Route::MentorCourses);
        assert!(menu_for(&Role::Mentor).iter().all(|(_, route)| route.is_staff_area()));
        assert!(menu_for(&Role::Learner).iter().all(|(_, route)| route.is_learner_area()));
    }
}
