//! Program Manager Course Pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, Confirmation};

use crate::components::{
    ConfirmModal, EmptyState, FilePicker, FilterSelect, Link, Loading, NotFoundCard, Pagination, SearchInput,
    SortHeader, TextArea, TextField,
};
use crate::context::{use_router, use_session};
use crate::forms::{array_literal, require, FormBuilder};
use crate::hooks::use_remote;
use crate::listing::CourseSort;
use crate::models::{AdminCourse, CourseLevel};
use crate::pages::shared::{level_key, parse_level, ProgressBar, LEVEL_OPTIONS};
use crate::routes::Route;
use crate::store::use_toasts;

const PAGE_SIZE: usize = 6;

#[component]
pub fn AdminCoursesPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let courses = use_remote(|api| async move { api.admin_courses().await }, "Failed to load courses.");
    let list = create_list_signals::<CourseLevel, CourseSort>(CourseSort::Title, PAGE_SIZE);
    let page = list.page_of(move || courses.value());
    let confirm = RwSignal::new(Confirmation::<AdminCourse>::Idle);

    let on_confirm = move |_: ()| {
        let Some(course) = confirm.try_update(|c| c.accept()).flatten() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            match api.delete_course(course.id).await {
                Ok(_) => {
                    toasts.success(format!("\"{}\" was deleted.", course.title));
                    courses.reload();
                }
                Err(err) => session.report(&err, "Failed to delete course."),
            }
        });
    };

    let sorted_by = move |key: CourseSort| {
        Signal::derive(move || {
            let (sort, direction) = list.sort();
            (sort == key).then_some(direction)
        })
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h1 class="page-title">"Courses"</h1>
                <Link to=Route::AddCourse class="btn btn-primary">"Add Course"</Link>
            </div>
            <div class="card table-card">
                <div class="table-toolbar">
                    <SearchInput
                        value=Signal::derive(move || list.search())
                        on_input=move |text: String| list.set_search(text)
                        placeholder="Search by title or mentor"
                    />
                    <FilterSelect
                        options=LEVEL_OPTIONS.to_vec()
                        selected=Signal::derive(move || level_key(list.filter().as_ref()))
                        on_change=move |key: String| list.set_filter(parse_level(&key))
                        all_label="All levels"
                    />
                </div>
                {move || {
                    if courses.is_loading() {
                        return view! { <Loading label="Loading courses..." /> }.into_any();
                    }
                    let current = page.get();
                    if current.is_empty() {
                        return view! { <EmptyState message="No courses found." /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <SortHeader
                                        label="Title"
                                        active=sorted_by(CourseSort::Title)
                                        on_sort=move |_: ()| list.sort_by(CourseSort::Title)
                                    />
                                    <th>"Level"</th>
                                    <th>"Mentor"</th>
                                    <SortHeader
                                        label="Enrolled"
                                        active=sorted_by(CourseSort::Enrolled)
                                        on_sort=move |_: ()| list.sort_by(CourseSort::Enrolled)
                                    />
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {current
                                    .items
                                    .into_iter()
                                    .map(|course| {
                                        let target = Route::CourseDetails(course.id);
                                        let title = course.title.clone();
                                        let pending = course.clone();
                                        view! {
                                            <tr>
                                                <td><Link to=target>{title}</Link></td>
                                                <td>{course.level.label().to_string()}</td>
                                                <td>{if course.mentor.is_empty() { "-".to_string() } else { course.mentor }}</td>
                                                <td>{course.enrolled_count}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-danger btn-small"
                                                        on:click=move |_| confirm.update(|c| c.request(pending.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
                <Pagination
                    page=Signal::derive(move || page.with(|p| p.page))
                    page_count=Signal::derive(move || page.with(|p| p.page_count))
                    on_page=move |number: usize| list.go_to_page(number)
                />
            </div>
            <ConfirmModal
                message=Signal::derive(move || {
                    confirm.with(|c| c.pending().map(|course| format!("Delete the course \"{}\"?", course.title)))
                })
                on_confirm=on_confirm
                on_cancel=move |_: ()| confirm.update(|c| c.dismiss())
            />
        </section>
    }
}

/// New online course and new physical program, side by side
#[component]
pub fn AddCoursePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let toasts = use_toasts();

    let course_title = RwSignal::new(String::new());
    let adding_course = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let schedule = RwSignal::new(String::new());
    let next_session = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let requirements = RwSignal::new(String::new());
    let image = StoredValue::new_local(None::<web_sys::File>);
    let image_name = RwSignal::new(None::<String>);
    let adding_program = RwSignal::new(false);

    let add_course = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if adding_course.get_untracked() {
            return;
        }
        let name = course_title.get_untracked();
        if let Err(err) = require(&[("the course title", name.as_str())]) {
            toasts.error(err.to_string());
            return;
        }
        adding_course.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.create_course(name.trim()).await {
                Ok(_) => {
                    toasts.success("Course added successfully!");
                    router.navigate(Route::AdminCourses);
                }
                Err(err) => session.report(&err, "Failed to add course."),
            }
            let _ = adding_course.try_set(false);
        });
    };

    let add_program = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if adding_program.get_untracked() {
            return;
        }
        let missing = require(&[
            ("the program title", title.get_untracked().as_str()),
            ("the next session date", next_session.get_untracked().as_str()),
            ("the location", location.get_untracked().as_str()),
        ]);
        if let Err(err) = missing {
            toasts.error(err.to_string());
            return;
        }
        let payload = FormBuilder::multipart()
            .text("title", title.get_untracked())
            .text("description", description.get_untracked())
            .text("duration", duration.get_untracked())
            .text("schedule", schedule.get_untracked())
            .text("nextSession", next_session.get_untracked())
            .text("location", location.get_untracked())
            .text("skills", array_literal(&skills.get_untracked()))
            .text("requirements", array_literal(&requirements.get_untracked()))
            .file("image", image.get_value())
            .build();
        adding_program.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.create_program(&payload).await {
                Ok(_) => {
                    toasts.success("Physical program added successfully!");
                    for field in [title, description, duration, schedule, next_session, location, skills, requirements] {
                        let _ = field.try_set(String::new());
                    }
                    let _ = image.try_update_value(|file| *file = None);
                    let _ = image_name.try_set(None);
                }
                Err(err) => session.report(&err, "Failed to add physical program."),
            }
            let _ = adding_program.try_set(false);
        });
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Add Course"</h1>
            <div class="form-columns">
                <form class="card form-card" on:submit=add_course>
                    <h2>"Online Course"</h2>
                    <TextField label="Course title" value=course_title disabled=adding_course required=true />
                    <button class="btn btn-primary" type="submit" disabled=move || adding_course.get()>
                        {move || if adding_course.get() { "Adding..." } else { "Add Course" }}
                    </button>
                </form>

                <form class="card form-card" on:submit=add_program>
                    <h2>"Physical Program"</h2>
                    <TextField label="Title" value=title disabled=adding_program required=true />
                    <TextArea label="Description" value=description disabled=adding_program />
                    <div class="form-row">
                        <TextField label="Duration" value=duration disabled=adding_program />
                        <TextField label="Schedule" value=schedule disabled=adding_program />
                    </div>
                    <div class="form-row">
                        <TextField
                            label="Next session"
                            value=next_session
                            input_type="datetime-local"
                            disabled=adding_program
                            required=true
                        />
                        <TextField label="Location" value=location disabled=adding_program required=true />
                    </div>
                    <TextField label="Skills (comma separated)" value=skills disabled=adding_program />
                    <TextField label="Requirements (comma separated)" value=requirements disabled=adding_program />
                    <FilePicker label="Image" accept="image/*" file=image file_name=image_name disabled=adding_program />
                    <button class="btn btn-primary" type="submit" disabled=move || adding_program.get()>
                        {move || if adding_program.get() { "Adding..." } else { "Add Program" }}
                    </button>
                </form>
            </div>
        </section>
    }
}

/// Enrolled learners of one course, with certificate issuance
#[component]
pub fn CourseDetailsPage(course_id: u32) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let course = use_remote(move |api| async move { api.course_learners(course_id).await }, "Failed to load course.");
    let issuing = RwSignal::new(None::<u32>);

    let issue = move |learner_id: u32, name: String| {
        if issuing.get_untracked().is_some() {
            return;
        }
        issuing.set(Some(learner_id));
        let api = session.api();
        spawn_local(async move {
            match api.issue_certificate(learner_id, course_id).await {
                Ok(response) => {
                    toasts.success(response.message.unwrap_or_else(|| format!("Certificate issued to {}.", name)));
                }
                Err(err) => session.report(&err, "Failed to issue certificate."),
            }
            let _ = issuing.try_set(None);
        });
    };

    view! {
        <section class="page">
            {move || {
                course.data.with(|remote| {
                    if remote.is_loading() {
                        return view! { <Loading label="Loading course..." /> }.into_any();
                    }
                    let Some(details) = remote.data().cloned() else {
                        return view! {
                            <NotFoundCard
                                title="Course Not Found"
                                message="This course does not exist or could not be loaded."
                                back_to=Route::AdminCourses
                            />
                        }
                        .into_any();
                    };
                    let rows = if details.learners.is_empty() {
                        view! { <EmptyState message="No learners are enrolled in this course yet." /> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Learner"</th>
                                        <th>"Enrolled"</th>
                                        <th>"Lessons"</th>
                                        <th>"Progress"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {details
                                        .learners
                                        .into_iter()
                                        .map(|learner| {
                                            let id = learner.id;
                                            let name = learner.name.clone();
                                            let eligible = learner.certificate_eligible;
                                            view! {
                                                <tr>
                                                    <td>{learner.name}</td>
                                                    <td>{learner.enrolled}</td>
                                                    <td>
                                                        {format!("{} / {}", learner.lessons_completed, learner.total_lessons)}
                                                    </td>
                                                    <td><ProgressBar progress=learner.progress /></td>
                                                    <td>
                                                        <button
                                                            class="btn btn-primary btn-small"
                                                            disabled=move || !eligible || issuing.get().is_some()
                                                            on:click=move |_| issue(id, name.clone())
                                                        >
                                                            {move || {
                                                                if issuing.get() == Some(id) { "Issuing..." } else { "Issue Certificate" }
                                                            }}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    };
                    view! {
                        <div class="page-header">
                            <h1 class="page-title">{details.name}</h1>
                            <Link to=Route::AdminCourses class="btn btn-secondary">"All courses"</Link>
                        </div>
                        <div class="card table-card">{rows}</div>
                    }
                    .into_any()
                })
            }}
        </section>
    }
}
