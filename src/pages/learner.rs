//! Learner Pages
//!
//! Course enrolment, enrolled courses, physical programs and mentorship
//! booking for signed-in learners.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EmptyState, Link, Loading, NotFoundCard, TextField};
use crate::context::use_session;
use crate::hooks::use_remote;
use crate::models::{AvailabilitySlot, CatalogueCourse, EnrolledCourse, PhysicalProgram, PublicMentor};
use crate::pages::shared::ProgressBar;
use crate::progress::CourseProgress;
use crate::routes::Route;
use crate::slots::open_slots;
use crate::store::use_toasts;

/// Lesson completion of an enrolled course, in percent
fn lesson_progress(course: &EnrolledCourse) -> f64 {
    let progress = CourseProgress {
        completed: course.lessons_completed as usize,
        total: course.lessons as usize,
    };
    progress.percent().min(100) as f64
}

fn mark_enrolled(courses: &mut [CatalogueCourse], course_id: u32) {
    if let Some(course) = courses.iter_mut().find(|course| course.id == course_id) {
        course.is_enrolled = true;
    }
}

// ========================
// Dashboard & Courses
// ========================

#[component]
pub fn LearnerDashboardPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let courses = use_remote(|api| async move { api.available_courses().await }, "Failed to load courses.");
    let enrolling = RwSignal::new(None::<u32>);

    let enroll = move |course_id: u32| {
        if enrolling.get_untracked().is_some() {
            return;
        }
        enrolling.set(Some(course_id));
        let api = session.api();
        spawn_local(async move {
            match api.enroll(course_id).await {
                Ok(response) => {
                    courses.update(|list| mark_enrolled(list, course_id));
                    toasts.success(response.message.unwrap_or_else(|| "Enrolled successfully!".to_string()));
                }
                Err(err) => session.report(&err, "Enrollment failed."),
            }
            let _ = enrolling.try_set(None);
        });
    };

    let greeting = move || {
        session
            .user()
            .map(|user| format!("Welcome back, {}!", user.first_name))
            .unwrap_or_else(|| "Welcome!".to_string())
    };

    let course_card = move |course: CatalogueCourse| {
        let id = course.id;
        let image = course.image.as_deref().map(|path| session.asset_url(path));
        let action = if course.is_enrolled {
            view! { <Link to=Route::LearnerCourse(id) class="btn btn-secondary">"Continue"</Link> }.into_any()
        } else {
            view! {
                <button
                    class="btn btn-primary"
                    disabled=move || enrolling.get().is_some()
                    on:click=move |_| enroll(id)
                >
                    {move || if enrolling.get() == Some(id) { "Enrolling..." } else { "Enroll" }}
                </button>
            }
            .into_any()
        };
        view! {
            <div class="card course-card">
                {image.map(|src| view! { <img class="card-image" src=src alt=course.title.clone() /> })}
                <div class="card-body">
                    <span class="badge badge-blue">{course.level.label().to_string()}</span>
                    <h3>{course.title.clone()}</h3>
                    <p>{course.description}</p>
                    <p class="muted">{format!("{} · {} lessons", course.duration, course.lessons)}</p>
                    <div class="card-footer">{action}</div>
                </div>
            </div>
        }
    };

    view! {
        <section class="page">
            <h1 class="page-title">{greeting}</h1>
            <h2>"Available Courses"</h2>
            {move || {
                if courses.is_loading() {
                    return view! { <Loading label="Loading courses..." /> }.into_any();
                }
                let list = courses.value();
                if list.is_empty() {
                    return view! { <EmptyState message="No courses are available right now." /> }.into_any();
                }
                view! { <div class="card-grid">{list.into_iter().map(course_card).collect_view()}</div> }.into_any()
            }}
        </section>
    }
}

#[component]
pub fn LearnerCoursesPage() -> impl IntoView {
    let session = use_session();
    let courses = use_remote(|api| async move { api.my_courses().await }, "Failed to load your courses.");

    let course_card = move |course: EnrolledCourse| {
        let progress = lesson_progress(&course);
        let image = course.image.as_deref().map(|path| session.asset_url(path));
        view! {
            <div class="card course-card">
                {image.map(|src| view! { <img class="card-image" src=src alt=course.title.clone() /> })}
                <div class="card-body">
                    <h3>{course.title.clone()}</h3>
                    <p>{course.description.clone()}</p>
                    <p class="muted">
                        {format!("{} of {} lessons · {}", course.lessons_completed, course.lessons, course.duration)}
                    </p>
                    <ProgressBar progress=progress />
                    <Link to=Route::LearnerCourse(course.id) class="btn btn-primary">
                        {if progress > 0.0 { "Continue Learning" } else { "Start Course" }}
                    </Link>
                </div>
            </div>
        }
    };

    view! {
        <section class="page">
            <h1 class="page-title">"My Courses"</h1>
            {move || {
                if courses.is_loading() {
                    return view! { <Loading label="Loading your courses..." /> }.into_any();
                }
                let list = courses.value();
                if list.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"You are not enrolled in any course yet."</p>
                            <Link to=Route::LearnerDashboard class="btn btn-primary">"Browse Courses"</Link>
                        </div>
                    }
                    .into_any();
                }
                view! { <div class="card-grid">{list.into_iter().map(course_card).collect_view()}</div> }.into_any()
            }}
        </section>
    }
}

// ========================
// Physical Programs
// ========================

#[component]
pub fn LearnerProgramsPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let programs = use_remote(|api| async move { api.learner_programs().await }, "Failed to load programs.");
    let enrolling = RwSignal::new(None::<u32>);

    let enroll = move |program_id: u32| {
        if enrolling.get_untracked().is_some() {
            return;
        }
        enrolling.set(Some(program_id));
        let api = session.api();
        spawn_local(async move {
            match api.enroll_program(program_id).await {
                Ok(_) => {
                    programs.update(|data| {
                        if let Some(program) = data.programs.iter_mut().find(|p| p.id == program_id) {
                            program.is_enrolled = true;
                        }
                    });
                    toasts.success("You are enrolled in the program.");
                }
                Err(err) => session.report(&err, "Enrollment failed."),
            }
            let _ = enrolling.try_set(None);
        });
    };

    let program_card = move |program: PhysicalProgram, eligible: bool| {
        let id = program.id;
        let image = program.image_url.as_deref().map(|path| session.asset_url(path));
        let action = if program.is_enrolled {
            view! { <span class="badge badge-green">"Enrolled"</span> }.into_any()
        } else if eligible {
            view! {
                <button
                    class="btn btn-primary"
                    disabled=move || enrolling.get().is_some()
                    on:click=move |_| enroll(id)
                >
                    {move || if enrolling.get() == Some(id) { "Enrolling..." } else { "Enroll" }}
                </button>
            }
            .into_any()
        } else {
            view! { <button class="btn btn-secondary" disabled=true>"Locked"</button> }.into_any()
        };
        view! {
            <div class="card program-card">
                {image.map(|src| view! { <img class="card-image" src=src alt=program.title.clone() /> })}
                <div class="card-body">
                    <h3>{program.title.clone()}</h3>
                    <p>{program.description}</p>
                    <p class="muted">{format!("{} · {} · next session {}", program.duration, program.location, program.next_session)}</p>
                    <h4>"Skills"</h4>
                    <ul class="feature-list">
                        {program.skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
                    </ul>
                    <h4>"Requirements"</h4>
                    <ul class="feature-list">
                        {program.requirements.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                    {action}
                </div>
            </div>
        }
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Physical Programs"</h1>
            {move || {
                if programs.is_loading() {
                    return view! { <Loading label="Loading programs..." /> }.into_any();
                }
                let data = programs.value();
                let notice = (!data.is_eligible).then(|| {
                    view! {
                        <div class="notice">
                            "Complete at least one online course to unlock enrollment in physical programs."
                        </div>
                    }
                });
                if data.programs.is_empty() {
                    return view! { {notice} <EmptyState message="No programs are scheduled yet." /> }.into_any();
                }
                let eligible = data.is_eligible;
                view! {
                    {notice}
                    <div class="card-grid">
                        {data.programs.into_iter().map(|program| program_card(program, eligible)).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

// ========================
// Mentorship
// ========================

#[component]
pub fn LearnerMentorshipPage() -> impl IntoView {
    let session = use_session();
    let mentors = use_remote(|api| async move { api.my_mentors().await }, "Failed to load mentors.");

    let mentor_card = move |mentor: PublicMentor| {
        let image = mentor.image.as_deref().map(|path| session.asset_url(path));
        view! {
            <div class="card mentor-card">
                {image.map(|src| view! { <img class="card-image" src=src alt=mentor.name.clone() /> })}
                <h3>{mentor.name.clone()}</h3>
                <p class="muted">{mentor.expertise}</p>
                <p>{mentor.bio}</p>
                <Link to=Route::MentorSlots(mentor.id) class="btn btn-primary">"View Availability"</Link>
            </div>
        }
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Mentorship"</h1>
            {move || {
                if mentors.is_loading() {
                    return view! { <Loading label="Loading mentors..." /> }.into_any();
                }
                let list = mentors.value();
                if list.is_empty() {
                    return view! { <EmptyState message="No mentors are assigned to your courses yet." /> }.into_any();
                }
                view! { <div class="card-grid">{list.into_iter().map(mentor_card).collect_view()}</div> }.into_any()
            }}
        </section>
    }
}

/// Open slots of one mentor, bookable with a topic
#[component]
pub fn MentorSlotsPage(mentor_id: u32) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let slots = use_remote(
        move |api| async move { api.mentor_slots(mentor_id).await },
        "Failed to load availability.",
    );
    let chosen = RwSignal::new(None::<u32>);
    let topic = RwSignal::new(String::new());
    let booking = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if booking.get_untracked() {
            return;
        }
        let Some(slot_id) = chosen.get_untracked() else {
            toasts.error("Please choose a time slot.");
            return;
        };
        let subject = topic.get_untracked();
        if subject.trim().is_empty() {
            toasts.error("Please tell your mentor what you want to discuss.");
            return;
        }
        booking.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.book_session(slot_id, subject.trim()).await {
                Ok(_) => {
                    toasts.success("Session booked!");
                    let _ = chosen.try_set(None);
                    let _ = topic.try_set(String::new());
                    slots.reload();
                }
                Err(err) => session.report(&err, "Booking failed."),
            }
            let _ = booking.try_set(false);
        });
    };

    let slot_button = move |slot: AvailabilitySlot| {
        let id = slot.id;
        view! {
            <button
                type="button"
                class=move || if chosen.get() == Some(id) { "time-chip selected" } else { "time-chip" }
                on:click=move |_| chosen.set(Some(id))
            >
                {format!("{} · {}", slot.date, slot.time)}
            </button>
        }
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h1 class="page-title">"Book a Session"</h1>
                <Link to=Route::LearnerMentorship class="btn btn-secondary">"Back to Mentors"</Link>
            </div>
            {move || {
                if slots.is_loading() {
                    return view! { <Loading label="Loading availability..." /> }.into_any();
                }
                if slots.failed() {
                    return view! {
                        <NotFoundCard
                            title="Mentor Not Found"
                            message="This mentor's availability could not be loaded."
                            back_to=Route::LearnerMentorship
                        />
                    }
                    .into_any();
                }
                let open = open_slots(&slots.value());
                if open.is_empty() {
                    return view! { <EmptyState message="This mentor has no open slots right now." /> }.into_any();
                }
                view! {
                    <form class="card form-card" on:submit=on_submit>
                        <div class="time-grid">{open.into_iter().map(slot_button).collect_view()}</div>
                        <TextField label="Topic" value=topic disabled=booking required=true />
                        <button class="btn btn-primary" type="submit" disabled=move || booking.get()>
                            {move || if booking.get() { "Booking..." } else { "Book Session" }}
                        </button>
                    </form>
                }
                .into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseLevel;

    fn enrolled(done: u32, total: u32) -> EnrolledCourse {
        EnrolledCourse {
            id: 1,
            title: "Bookkeeping".into(),
            description: String::new(),
            duration: "4 weeks".into(),
            lessons: total,
            lessons_completed: done,
            level: CourseLevel::Beginner,
            image: None,
        }
    }

    #[test]
    fn test_lesson_progress() {
        assert_eq!(lesson_progress(&enrolled(1, 4)), 25.0);
        assert_eq!(lesson_progress(&enrolled(0, 0)), 0.0);
        assert_eq!(lesson_progress(&enrolled(5, 4)), 100.0);
    }

    #[test]
    fn test_mark_enrolled() {
        let course = CatalogueCourse {
            id: 7,
            title: "Marketing".into(),
            description: String::new(),
            duration: String::new(),
            lessons: 3,
            level: CourseLevel::Beginner,
            price: "Free".into(),
            image: None,
            features: Vec::new(),
            is_enrolled: false,
        };
        let mut courses = vec![course.clone(), CatalogueCourse { id: 8, ..course }];
        mark_enrolled(&mut courses, 8);
        assert!(!courses[0].is_enrolled);
        assert!(courses[1].is_enrolled);
    }
}
