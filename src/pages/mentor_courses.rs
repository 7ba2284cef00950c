//! Mentor Course Pages
//!
//! Assigned courses, their learners, resource uploads and quiz generation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::create_list_signals;

use crate::components::{
    EmptyState, FilePicker, FilterSelect, Link, Loading, NotFoundCard, Pagination, SearchInput, SortHeader,
    TextArea, TextField,
};
use crate::context::{use_router, use_session};
use crate::forms::{resource_form, FormError, ResourceFields};
use crate::hooks::use_remote;
use crate::listing::{CourseSort, ProgressFilter, StudentSort};
use crate::models::{CourseLevel, GeneratedQuestion};
use crate::pages::shared::{level_key, parse_level, ProgressBar, LEVEL_OPTIONS};
use crate::quiz::{quiz_target, QuizScope};
use crate::routes::Route;
use crate::store::use_toasts;

const PAGE_SIZE: usize = 6;

/// Trimmed message body; blank messages never leave the modal.
fn learner_message(text: &str) -> Result<String, FormError> {
    match text.trim() {
        "" => Err(FormError::Custom("Please write a message before sending.".to_string())),
        text => Ok(text.to_string()),
    }
}

fn option_class(option: &str, correct_answer: &str) -> &'static str {
    if option == correct_answer {
        "quiz-option correct"
    } else {
        "quiz-option"
    }
}

// ========================
// Courses
// ========================

#[component]
pub fn MentorCoursesPage() -> impl IntoView {
    let courses = use_remote(|api| async move { api.mentor_courses().await }, "Failed to load courses.");
    let list = create_list_signals::<CourseLevel, CourseSort>(CourseSort::Title, PAGE_SIZE);
    let page = list.page_of(move || courses.value());

    let sorted_by = move |key: CourseSort| {
        Signal::derive(move || {
            let (sort, direction) = list.sort();
            (sort == key).then_some(direction)
        })
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h1 class="page-title">"My Courses"</h1>
                <Link to=Route::MentorEditCourse class="btn btn-primary">"Upload Resource"</Link>
            </div>
            <div class="card table-card">
                <div class="table-toolbar">
                    <SearchInput
                        value=Signal::derive(move || list.search())
                        on_input=move |text: String| list.set_search(text)
                        placeholder="Search courses"
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
                        return view! { <Loading label="Loading your courses..." /> }.into_any();
                    }
                    if courses.data.with(|data| data.data().is_some_and(Vec::is_empty)) {
                        return view! { <EmptyState message="You have not been assigned to any courses yet." /> }
                            .into_any();
                    }
                    let current = page.get();
                    if current.is_empty() {
                        return view! { <EmptyState message="No courses match your search." /> }.into_any();
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
                                    <th>"Duration"</th>
                                    <th>"Chapters"</th>
                                    <th>"Level"</th>
                                    <SortHeader
                                        label="Students"
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
                                        let duration = if course.duration.is_empty() {
                                            "N/A".to_string()
                                        } else {
                                            course.duration.clone()
                                        };
                                        view! {
                                            <tr>
                                                <td>{course.title.clone()}</td>
                                                <td>{duration}</td>
                                                <td>{course.chapters}</td>
                                                <td>{course.level.label().to_string()}</td>
                                                <td>{course.students_enrolled}</td>
                                                <td>
                                                    <Link
                                                        to=Route::MentorCourseStudents(course.id)
                                                        class="btn btn-secondary btn-small"
                                                    >
                                                        "View Students"
                                                    </Link>
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
        </section>
    }
}

/// Learners of one assigned course, each reachable by a direct message
#[component]
pub fn MentorCourseStudentsPage(course_id: u32) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let details = use_remote(
        move |api| async move { api.mentor_course_details(course_id).await },
        "Could not load enrolled learners.",
    );
    let learners = use_remote(
        move |api| async move { api.my_learners(Some(course_id)).await },
        "Could not load enrolled learners.",
    );
    let list = create_list_signals::<ProgressFilter, StudentSort>(StudentSort::Name, PAGE_SIZE);
    let page = list.page_of(move || learners.value());

    let recipient = RwSignal::new(None::<(u32, String)>);
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let close = move || {
        recipient.set(None);
        message.set(String::new());
    };

    let send = move |_| {
        if sending.get_untracked() {
            return;
        }
        let Some((learner_id, name)) = recipient.get_untracked() else {
            return;
        };
        let text = match learner_message(&message.get_untracked()) {
            Ok(text) => text,
            Err(err) => {
                toasts.error(err.to_string());
                return;
            }
        };
        sending.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.message_learner(learner_id, course_id, &text).await {
                Ok(_) => {
                    toasts.success(format!("Message sent to {}", name));
                    let _ = recipient.try_set(None);
                    let _ = message.try_set(String::new());
                }
                Err(err) => session.report(&err, "Failed to send message."),
            }
            let _ = sending.try_set(false);
        });
    };

    let table = move || {
        if learners.is_loading() {
            return view! { <Loading label="Loading learners..." /> }.into_any();
        }
        let current = page.get();
        if current.is_empty() {
            return view! { <EmptyState message="No learners found." /> }.into_any();
        }
        view! {
            <table class="table">
                <thead>
                    <tr>
                        <SortHeader
                            label="Student"
                            active=Signal::derive(move || {
                                let (sort, direction) = list.sort();
                                (sort == StudentSort::Name).then_some(direction)
                            })
                            on_sort=move |_: ()| list.sort_by(StudentSort::Name)
                        />
                        <SortHeader
                            label="Progress"
                            active=Signal::derive(move || {
                                let (sort, direction) = list.sort();
                                (sort == StudentSort::Progress).then_some(direction)
                            })
                            on_sort=move |_: ()| list.sort_by(StudentSort::Progress)
                        />
                        <th>"Enrolled"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {current
                        .items
                        .into_iter()
                        .map(|learner| {
                            let target = (learner.id, learner.name.clone());
                            view! {
                                <tr>
                                    <td>{learner.name}</td>
                                    <td><ProgressBar progress=learner.progress /></td>
                                    <td>{learner.enrolled}</td>
                                    <td>
                                        <button
                                            class="btn btn-primary btn-small"
                                            on:click=move |_| recipient.set(Some(target.clone()))
                                        >
                                            "Message"
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
        <section class="page">
            {move || {
                details.data.with(|remote| {
                    if remote.is_loading() {
                        return view! { <Loading label="Loading course..." /> }.into_any();
                    }
                    let Some(course) = remote.data().cloned() else {
                        return view! {
                            <NotFoundCard
                                title="Course Not Found"
                                message="This course does not exist or is not assigned to you."
                                back_to=Route::MentorCourses
                            />
                        }
                        .into_any();
                    };
                    view! {
                        <div class="page-header">
                            <h1 class="page-title">{format!("Learners in {}", course.name)}</h1>
                            <Link to=Route::MentorCourses class="btn btn-secondary">"Back to courses"</Link>
                        </div>
                        <div class="card table-card">
                            <div class="table-toolbar">
                                <SearchInput
                                    value=Signal::derive(move || list.search())
                                    on_input=move |text: String| list.set_search(text)
                                    placeholder="Search learners by name"
                                />
                            </div>
                            {table}
                            <Pagination
                                page=Signal::derive(move || page.with(|p| p.page))
                                page_count=Signal::derive(move || page.with(|p| p.page_count))
                                on_page=move |number: usize| list.go_to_page(number)
                            />
                        </div>
                    }
                    .into_any()
                })
            }}
            <Show when=move || recipient.with(Option::is_some)>
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h2 class="modal-title">
                            {move || {
                                recipient.with(|r| r.as_ref().map(|(_, name)| format!("Message {}", name)))
                            }}
                        </h2>
                        <TextArea label="Message" value=message disabled=sending rows=5 />
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button class="btn btn-primary" disabled=move || sending.get() on:click=send>
                                {move || if sending.get() { "Sending..." } else { "Send Message" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}

// ========================
// Resources
// ========================

#[component]
pub fn UploadResourcePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let toasts = use_toasts();
    let courses = use_remote(|api| async move { api.mentor_courses().await }, "Failed to load courses.");

    let course_id = RwSignal::new(None::<u32>);
    let description = RwSignal::new(String::new());
    let timeline = RwSignal::new(String::new());
    let level = RwSignal::new(None::<CourseLevel>);
    let video_link = RwSignal::new(String::new());
    let resource = StoredValue::new_local(None::<web_sys::File>);
    let resource_name = RwSignal::new(None::<String>);
    let image = StoredValue::new_local(None::<web_sys::File>);
    let image_name = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }
        let fields = ResourceFields {
            course_id: course_id.get_untracked(),
            description: description.get_untracked(),
            timeline: timeline.get_untracked(),
            level: level.with_untracked(|level| level_key(level.as_ref())).to_string(),
            video_link: video_link.get_untracked(),
        };
        let payload = match resource_form(&fields, resource.get_value(), image.get_value()) {
            Ok(payload) => payload,
            Err(err) => {
                toasts.error(err.to_string());
                return;
            }
        };
        uploading.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.upload_resource(&payload).await {
                Ok(_) => {
                    toasts.success("Course resource uploaded successfully!");
                    router.navigate(Route::MentorCourses);
                }
                Err(err) => session.report(&err, "Upload failed. Please check your inputs."),
            }
            let _ = uploading.try_set(false);
        });
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Upload Course Resource"</h1>
            <form class="card form-card" on:submit=submit>
                <label class="form-field">
                    <span class="form-label">"Course"</span>
                    <select
                        class="form-input"
                        disabled=move || uploading.get()
                        prop:value=move || course_id.get().map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| course_id.set(event_target_value(&ev).parse().ok())
                    >
                        <option value="">"Select a course"</option>
                        {move || {
                            courses
                                .value()
                                .into_iter()
                                .map(|course| view! { <option value=course.id.to_string()>{course.title}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <TextArea label="Description" value=description disabled=uploading />
                <div class="form-row">
                    <TextField label="Timeline" value=timeline disabled=uploading required=true />
                    <label class="form-field">
                        <span class="form-label">"Level"</span>
                        <FilterSelect
                            options=LEVEL_OPTIONS.to_vec()
                            selected=Signal::derive(move || level.with(|level| level_key(level.as_ref())))
                            on_change=move |key: String| level.set(parse_level(&key))
                            all_label="Select level"
                        />
                    </label>
                </div>
                <TextField label="Video link (optional)" value=video_link input_type="url" disabled=uploading />
                <FilePicker
                    label="Resource file"
                    accept=".pdf,.doc,.docx"
                    file=resource
                    file_name=resource_name
                    disabled=uploading
                />
                <FilePicker label="Course image" accept="image/*" file=image file_name=image_name disabled=uploading />
                <button class="btn btn-primary" type="submit" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload Resource" }}
                </button>
            </form>
        </section>
    }
}

// ========================
// Quiz generation
// ========================

#[component]
pub fn MentorAddQuizPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let courses = use_remote(|api| async move { api.mentor_courses().await }, "Failed to load courses.");

    let course = RwSignal::new(None::<u32>);
    let scope = RwSignal::new(None::<QuizScope>);
    let chapter = RwSignal::new(None::<u32>);
    let questions = RwSignal::new(Vec::<GeneratedQuestion>::new());
    let generating = RwSignal::new(false);

    let chapters = use_remote(
        move |api| {
            let selected = course.get();
            let scope = scope.get();
            async move {
                match (selected, scope) {
                    (Some(id), Some(QuizScope::Chapter)) => api.course_chapters(id).await,
                    _ => Ok(Vec::new()),
                }
            }
        },
        "Failed to load chapters.",
    );

    let pick_course = move |ev: web_sys::Event| {
        course.set(event_target_value(&ev).parse().ok());
        scope.set(None);
        chapter.set(None);
        questions.set(Vec::new());
    };

    let generate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if generating.get_untracked() {
            return;
        }
        let Some(target) = quiz_target(course.get_untracked(), scope.get_untracked(), chapter.get_untracked()) else {
            toasts.error("Please complete your selection.");
            return;
        };
        generating.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.generate_quiz(&target).await {
                Ok(generated) => {
                    toasts.success("Quiz questions generated successfully!");
                    let _ = questions.try_set(generated);
                }
                Err(err) => session.report(&err, "Failed to generate quiz."),
            }
            let _ = generating.try_set(false);
        });
    };

    let preview = move || {
        let generated = questions.get();
        if generated.is_empty() {
            return None;
        }
        Some(view! {
            <div class="card quiz-preview">
                <h2>"Generated Questions"</h2>
                <p class="muted">"Review the questions below. If they look good, they are already saved."</p>
                <ol class="quiz-questions">
                    {generated
                        .into_iter()
                        .map(|question| {
                            let correct = question.correct_answer.clone();
                            view! {
                                <li class="quiz-question">
                                    <p>{question.question}</p>
                                    <ul class="quiz-options">
                                        {question
                                            .options
                                            .into_iter()
                                            .map(|option| {
                                                let class = option_class(&option, &correct);
                                                view! { <li class=class>{option}</li> }
                                            })
                                            .collect_view()}
                                    </ul>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        })
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Create Quiz"</h1>
            <form class="card form-card" on:submit=generate>
                <label class="form-field">
                    <span class="form-label">"Course"</span>
                    <select
                        class="form-input"
                        disabled=move || generating.get()
                        prop:value=move || course.get().map(|id| id.to_string()).unwrap_or_default()
                        on:change=pick_course
                    >
                        <option value="">"Select a course"</option>
                        {move || {
                            courses
                                .value()
                                .into_iter()
                                .map(|course| view! { <option value=course.id.to_string()>{course.title}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <Show when=move || course.get().is_some()>
                    <label class="form-field">
                        <span class="form-label">"Quiz type"</span>
                        <FilterSelect
                            options=QuizScope::OPTIONS.to_vec()
                            selected=Signal::derive(move || QuizScope::key(scope.get()))
                            on_change=move |key: String| {
                                scope.set(QuizScope::parse(&key));
                                chapter.set(None);
                            }
                            all_label="Select quiz type"
                        />
                    </label>
                </Show>
                <Show when=move || scope.get() == Some(QuizScope::Chapter)>
                    <label class="form-field">
                        <span class="form-label">"Chapter"</span>
                        <select
                            class="form-input"
                            disabled=move || generating.get() || chapters.is_loading()
                            prop:value=move || chapter.get().map(|id| id.to_string()).unwrap_or_default()
                            on:change=move |ev| chapter.set(event_target_value(&ev).parse().ok())
                        >
                            <option value="">"Select a chapter"</option>
                            {move || {
                                chapters
                                    .value()
                                    .into_iter()
                                    .map(|c| view! { <option value=c.id.to_string()>{c.title}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                </Show>
                <button class="btn btn-primary" type="submit" disabled=move || generating.get()>
                    {move || if generating.get() { "Generating..." } else { "Generate Quiz" }}
                </button>
            </form>
            {preview}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_is_refused() {
        for text in ["", "   ", "\n\t"] {
            assert_eq!(
                learner_message(text).unwrap_err().to_string(),
                "Please write a message before sending."
            );
        }
        assert_eq!(learner_message("  See you Monday ").unwrap(), "See you Monday");
    }

    #[test]
    fn test_correct_option_is_highlighted() {
        assert_eq!(option_class("<a>", "<a>"), "quiz-option correct");
        assert_eq!(option_class("<p>", "<a>"), "quiz-option");
        assert_eq!(option_class("<A>", "<a>"), "quiz-option");
    }
}
