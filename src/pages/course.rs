//! Course & Quiz Pages

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Link, Loading, NotFoundCard};
use crate::content::{embed_video_url, render_markdown};
use crate::context::{use_router, use_session};
use crate::hooks::use_remote;
use crate::models::{Chapter, LearnCourse, Quiz};
use crate::progress::{final_quiz_state, set_chapter_completed, CourseProgress, FinalQuizState};
use crate::quiz::{result_message, QuizAnswers, RETURN_DELAY_MS};
use crate::remote::Remote;
use crate::routes::Route;
use crate::store::use_toasts;

fn toggle_label(chapter: &Chapter) -> &'static str {
    if chapter.is_completed {
        "Mark as Incomplete"
    } else {
        "Mark as Complete"
    }
}

// ========================
// Course
// ========================

#[component]
pub fn CoursePage(course_id: u32) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let course = use_remote(
        move |api| async move { api.learn_course(course_id).await },
        "Failed to load course.",
    );
    let open_chapter = RwSignal::new(None::<u32>);
    let toggling = RwSignal::new(None::<u32>);

    let toggle = move |chapter_id: u32| {
        if toggling.get_untracked().is_some() {
            return;
        }
        toggling.set(Some(chapter_id));
        let api = session.api();
        spawn_local(async move {
            match api.toggle_chapter(chapter_id).await {
                Ok(toggled) => {
                    course.update(|course| {
                        set_chapter_completed(&mut course.chapters, chapter_id, toggled.completed);
                    });
                    if toggled.completed {
                        toasts.success("Chapter completed!");
                    }
                }
                Err(err) => session.report(&err, "Failed to update chapter."),
            }
            let _ = toggling.try_set(None);
        });
    };

    let chapter_view = move |chapter: Chapter| {
        let id = chapter.id;
        let label = toggle_label(&chapter);
        let html = render_markdown(&chapter.content, |path| session.asset_url(path));
        let quiz = chapter.quiz_id.map(|quiz_id| {
            if chapter.quiz_passed {
                view! { <span class="badge badge-green">"Quiz passed"</span> }.into_any()
            } else {
                view! { <Link to=Route::TakeQuiz(quiz_id) class="btn btn-secondary">"Take Chapter Quiz"</Link> }
                    .into_any()
            }
        });
        view! {
            <div class=if chapter.is_completed { "chapter completed" } else { "chapter" }>
                <button
                    class="chapter-header"
                    on:click=move |_| open_chapter.update(|open| *open = if *open == Some(id) { None } else { Some(id) })
                >
                    <span class="chapter-check">{if chapter.is_completed { "✓" } else { "" }}</span>
                    <span>{chapter.title}</span>
                </button>
                <Show when=move || open_chapter.get() == Some(id)>
                    <div class="chapter-body">
                        <div class="chapter-content" inner_html=html.clone()></div>
                        <div class="chapter-actions">
                            <button
                                class="btn btn-primary"
                                disabled=move || toggling.get().is_some()
                                on:click=move |_| toggle(id)
                            >
                                {move || if toggling.get() == Some(id) { "Saving..." } else { label }}
                            </button>
                        </div>
                    </div>
                </Show>
                {quiz}
            </div>
        }
    };

    let course_view = move |course: LearnCourse| {
        let progress = CourseProgress::of(&course.chapters);
        let final_quiz = match final_quiz_state(&course) {
            FinalQuizState::Absent => None,
            FinalQuizState::Locked => Some(
                view! { <p class="muted">"Complete every chapter to unlock the final quiz."</p> }.into_any(),
            ),
            FinalQuizState::Available(quiz_id) => Some(
                view! { <Link to=Route::TakeQuiz(quiz_id) class="btn btn-primary">"Take Final Quiz"</Link> }
                    .into_any(),
            ),
            FinalQuizState::Passed => Some(
                view! { <p class="success">"Congratulations! You have completed this course."</p> }.into_any(),
            ),
        };
        let video = course
            .video_link
            .filter(|link| !link.trim().is_empty())
            .map(|link| {
                view! {
                    <iframe
                        class="course-video"
                        src=embed_video_url(&link)
                        title=course.title.clone()
                        allowfullscreen=true
                    ></iframe>
                }
            });
        view! {
            <div class="page-header">
                <h1 class="page-title">{course.title.clone()}</h1>
                <Link to=Route::LearnerCourses class="btn btn-secondary">"Back to My Courses"</Link>
            </div>
            <p>{course.description}</p>
            <div class="course-progress">
                <span>{progress.label()}</span>
                <div class="progress">
                    <div class="progress-fill" style=format!("width: {}%", progress.percent())></div>
                </div>
            </div>
            {video}
            <div class="chapter-list">{course.chapters.into_iter().map(chapter_view).collect_view()}</div>
            <div class="card final-quiz">
                <h2>"Final Quiz"</h2>
                {final_quiz}
            </div>
        }
    };

    view! {
        <section class="page course-page">
            {move || match course.data.get() {
                Remote::Idle | Remote::Loading => view! { <Loading label="Loading course..." /> }.into_any(),
                Remote::Loaded(data) => course_view(data).into_any(),
                Remote::Failed(err) => {
                    let message = if err.is_not_found() {
                        "This course does not exist or you are not enrolled in it."
                    } else {
                        "This course could not be loaded."
                    };
                    view! { <NotFoundCard title="Course Not Found" message=message back_to=Route::LearnerCourses /> }
                        .into_any()
                }
            }}
        </section>
    }
}

// ========================
// Quiz
// ========================

#[component]
pub fn TakeQuizPage(quiz_id: u32) -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let toasts = use_toasts();
    let quiz = use_remote(move |api| async move { api.quiz(quiz_id).await }, "Failed to load quiz.");
    let answers = RwSignal::new(QuizAnswers::default());
    let submitting = RwSignal::new(false);
    let returning = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        if let Some(fresh) = quiz.data.with(|data| data.data().map(QuizAnswers::for_quiz)) {
            answers.set(fresh);
        }
    });

    on_cleanup(move || {
        let _ = returning.try_update_value(|timer| *timer = None);
    });

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let submission = quiz
            .data
            .with_untracked(|data| data.data().and_then(|quiz| answers.with_untracked(|a| a.submission(quiz))));
        let Some(submission) = submission else {
            toasts.error("Please answer every question before submitting.");
            return;
        };
        submitting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.submit_quiz(quiz_id, &submission).await {
                Ok(result) => {
                    let message = result_message(&result);
                    if result.passed {
                        toasts.success(message);
                    } else {
                        toasts.error(message);
                    }
                    let timer = Timeout::new(RETURN_DELAY_MS, move || router.back());
                    let _ = returning.try_update_value(|slot| *slot = Some(timer));
                }
                Err(err) => {
                    session.report(&err, "Failed to submit quiz.");
                    let _ = submitting.try_set(false);
                }
            }
        });
    };

    let quiz_view = move |quiz: Quiz| {
        let total = quiz.questions.len();
        let questions = quiz
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, question)| {
                let options = question
                    .options
                    .into_iter()
                    .map(|option| {
                        let picked = {
                            let option = option.clone();
                            move || answers.with(|a| a.picked(index) == Some(option.as_str()))
                        };
                        let label = option.clone();
                        view! {
                            <label class="quiz-option">
                                <input
                                    type="radio"
                                    name=format!("question-{}", index)
                                    prop:checked=picked
                                    disabled=move || submitting.get()
                                    on:change=move |_| answers.update(|a| a.pick(index, &option))
                                />
                                <span>{label}</span>
                            </label>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="card quiz-question">
                        <h3>{format!("{}. {}", index + 1, question.question)}</h3>
                        {options}
                    </div>
                }
            })
            .collect_view();
        view! {
            <div class="page-header">
                <h1 class="page-title">{if quiz.is_final { "Final Quiz" } else { "Chapter Quiz" }}</h1>
                <span class="muted">{move || format!("{} / {} answered", answers.with(QuizAnswers::answered), total)}</span>
            </div>
            {questions}
            <button
                class="btn btn-primary"
                on:click=submit
                disabled=move || submitting.get() || !answers.with(QuizAnswers::is_complete)
            >
                {move || if submitting.get() { "Submitting..." } else { "Submit Quiz" }}
            </button>
        }
    };

    view! {
        <section class="page quiz-page">
            {move || match quiz.data.get() {
                Remote::Idle | Remote::Loading => view! { <Loading label="Loading quiz..." /> }.into_any(),
                Remote::Loaded(data) => quiz_view(data).into_any(),
                Remote::Failed(_) => view! {
                    <NotFoundCard
                        title="Quiz Not Found"
                        message="This quiz could not be loaded."
                        back_to=Route::LearnerCourses
                    />
                }
                .into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        let mut chapter = Chapter {
            id: 1,
            title: "Intro".into(),
            content: String::new(),
            quiz_id: None,
            is_completed: false,
            quiz_passed: false,
        };
        assert_eq!(toggle_label(&chapter), "Mark as Complete");
        chapter.is_completed = true;
        assert_eq!(toggle_label(&chapter), "Mark as Incomplete");
    }
}
