//! Program Manager People Pages
//!
//! Mentors, learners, invitations and mentor applications.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, remove_record, Confirmation};

use crate::components::{
    ConfirmModal, EmptyState, FilterSelect, Link, Loading, Pagination, SearchInput, SortHeader, TextField,
};
use crate::context::use_session;
use crate::debounce::{use_debounced, DEBOUNCE_MS};
use crate::forms::require;
use crate::hooks::use_remote;
use crate::listing::{LearnerSort, NameSort};
use crate::models::{AccountStatus, ApplicationDecision, EligibleMentor, MentorApplication};
use crate::pages::shared::{account_status_badge, account_status_key, parse_account_status, ACCOUNT_STATUS_OPTIONS};
use crate::routes::Route;
use crate::store::use_toasts;

const PAGE_SIZE: usize = 5;

/// Account pending removal
#[derive(Clone, Debug, PartialEq)]
struct Removal {
    id: u32,
    name: String,
}

#[component]
pub fn AdminMentorsPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let mentors = use_remote(|api| async move { api.mentors().await }, "Failed to load mentors.");
    let list = create_list_signals::<AccountStatus, NameSort>(NameSort::Name, PAGE_SIZE);
    let page = list.page_of(move || mentors.value());
    let confirm = RwSignal::new(Confirmation::<Removal>::Idle);

    let on_confirm = move |_: ()| {
        let Some(removal) = confirm.try_update(|c| c.accept()).flatten() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            match api.delete_user(removal.id).await {
                Ok(_) => {
                    toasts.success(format!("{} was removed.", removal.name));
                    mentors.update(|records| {
                        remove_record(records, removal.id);
                    });
                }
                Err(err) => session.report(&err, "Failed to remove mentor."),
            }
        });
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h1 class="page-title">"Mentors"</h1>
                <Link to=Route::InviteMentor class="btn btn-primary">"Invite Mentor"</Link>
            </div>
            <div class="card table-card">
                <div class="table-toolbar">
                    <SearchInput
                        value=Signal::derive(move || list.search())
                        on_input=move |text: String| list.set_search(text)
                        placeholder="Search by name, email or expertise"
                    />
                    <FilterSelect
                        options=ACCOUNT_STATUS_OPTIONS.to_vec()
                        selected=Signal::derive(move || account_status_key(list.filter().as_ref()))
                        on_change=move |key: String| list.set_filter(parse_account_status(&key))
                        all_label="All statuses"
                    />
                </div>
                {move || {
                    if mentors.is_loading() {
                        return view! { <Loading label="Loading mentors..." /> }.into_any();
                    }
                    let current = page.get();
                    if current.is_empty() {
                        return view! { <EmptyState message="No mentors found." /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr><th>"Name"</th><th>"Email"</th><th>"Expertise"</th><th>"Status"</th><th></th></tr>
                            </thead>
                            <tbody>
                                {current
                                    .items
                                    .into_iter()
                                    .map(|mentor| {
                                        let removal = Removal { id: mentor.id, name: mentor.name.clone() };
                                        view! {
                                            <tr>
                                                <td>{mentor.name}</td>
                                                <td>{mentor.email}</td>
                                                <td>{mentor.expertise.unwrap_or_else(|| "-".to_string())}</td>
                                                <td>
                                                    <span class=account_status_badge(&mentor.status)>
                                                        {mentor.status.label().to_string()}
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn-danger btn-small"
                                                        on:click=move |_| confirm.update(|c| c.request(removal.clone()))
                                                    >
                                                        "Remove"
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
                    confirm.with(|c| c.pending().map(|r| format!("Remove mentor {}? This cannot be undone.", r.name)))
                })
                confirm_label="Remove"
                on_confirm=on_confirm
                on_cancel=move |_: ()| confirm.update(|c| c.dismiss())
            />
        </section>
    }
}

fn suggestion_label(mentor: &EligibleMentor) -> String {
    let name = format!("{} {}", mentor.first_name, mentor.last_name);
    let name = name.trim();
    if name.is_empty() {
        mentor.email.clone()
    } else {
        format!("{} <{}>", name, mentor.email)
    }
}

#[component]
pub fn InviteMentorPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let courses = use_remote(|api| async move { api.course_options().await }, "Failed to load courses.");
    let email = RwSignal::new(String::new());
    let course_id = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<EligibleMentor>::new());
    let submitting = RwSignal::new(false);

    let query = use_debounced(Signal::derive(move || email.get()), DEBOUNCE_MS);

    Effect::new(move |_| {
        let Some(text) = query.get() else {
            suggestions.set(Vec::new());
            return;
        };
        let api = session.api();
        spawn_local(async move {
            match api.eligible_mentors(&text).await {
                Ok(found) => {
                    let _ = suggestions.try_set(found);
                }
                Err(err) => session.report(&err, "Could not search mentors."),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (address, course) = (email.get_untracked(), course_id.get_untracked());
        if let Err(err) = require(&[("the mentor's email", address.as_str()), ("a course", course.as_str())]) {
            toasts.error(err.to_string());
            return;
        }
        let Ok(course) = course.parse::<u32>() else {
            toasts.error("Please choose a course.");
            return;
        };
        submitting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.invite_mentor(address.trim(), course).await {
                Ok(response) => {
                    toasts.success(response.message.unwrap_or_else(|| "Invitation sent!".to_string()));
                    let _ = email.try_set(String::new());
                    let _ = course_id.try_set(String::new());
                }
                Err(err) => session.report(&err, "Failed to send invitation."),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Invite Mentor"</h1>
            <form class="card form-card" on:submit=on_submit>
                <div class="autocomplete">
                    <TextField label="Mentor email" value=email input_type="email" disabled=submitting required=true />
                    <Show when=move || suggestions.with(|found| !found.is_empty())>
                        <ul class="suggestions">
                            <For
                                each=move || suggestions.get()
                                key=|mentor| mentor.id
                                children=move |mentor| {
                                    let label = suggestion_label(&mentor);
                                    let address = mentor.email.clone();
                                    view! {
                                        <li
                                            class="suggestion-item"
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                email.set(address.clone());
                                                suggestions.set(Vec::new());
                                            }
                                        >
                                            {label}
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
                <label class="form-field">
                    <span class="form-label">"Course"</span>
                    <select
                        class="form-input"
                        disabled=move || submitting.get()
                        prop:value=move || course_id.get()
                        on:change=move |ev| course_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a course"</option>
                        {move || {
                            courses
                                .value()
                                .into_iter()
                                .map(|course| view! { <option value=course.id.to_string()>{course.name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send Invitation" }}
                </button>
            </form>
        </section>
    }
}

#[component]
pub fn AdminLearnersPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let learners = use_remote(|api| async move { api.learners().await }, "Failed to load learners.");
    let list = create_list_signals::<AccountStatus, LearnerSort>(LearnerSort::Name, PAGE_SIZE);
    let page = list.page_of(move || learners.value());
    let confirm = RwSignal::new(Confirmation::<Removal>::Idle);

    let on_confirm = move |_: ()| {
        let Some(removal) = confirm.try_update(|c| c.accept()).flatten() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            match api.delete_user(removal.id).await {
                Ok(_) => {
                    toasts.success(format!("{} was removed.", removal.name));
                    learners.update(|records| {
                        remove_record(records, removal.id);
                    });
                }
                Err(err) => session.report(&err, "Failed to remove learner."),
            }
        });
    };

    let sorted_by = move |key: LearnerSort| {
        Signal::derive(move || {
            let (sort, direction) = list.sort();
            (sort == key).then_some(direction)
        })
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Learners"</h1>
            <div class="card table-card">
                <div class="table-toolbar">
                    <SearchInput
                        value=Signal::derive(move || list.search())
                        on_input=move |text: String| list.set_search(text)
                        placeholder="Search by name or email"
                    />
                    <FilterSelect
                        options=ACCOUNT_STATUS_OPTIONS.to_vec()
                        selected=Signal::derive(move || account_status_key(list.filter().as_ref()))
                        on_change=move |key: String| list.set_filter(parse_account_status(&key))
                        all_label="All statuses"
                    />
                </div>
                {move || {
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
                                        label="Name"
                                        active=sorted_by(LearnerSort::Name)
                                        on_sort=move |_: ()| list.sort_by(LearnerSort::Name)
                                    />
                                    <th>"Email"</th>
                                    <th>"Status"</th>
                                    <SortHeader
                                        label="Joined"
                                        active=sorted_by(LearnerSort::Joined)
                                        on_sort=move |_: ()| list.sort_by(LearnerSort::Joined)
                                    />
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {current
                                    .items
                                    .into_iter()
                                    .map(|learner| {
                                        let name = learner.full_name();
                                        let removal = Removal { id: learner.id, name: name.clone() };
                                        let joined = learner.created_at.get(..10).unwrap_or(learner.created_at.as_str()).to_string();
                                        view! {
                                            <tr>
                                                <td>{name}</td>
                                                <td>{learner.email}</td>
                                                <td>
                                                    <span class=account_status_badge(&learner.status)>
                                                        {learner.status.label().to_string()}
                                                    </span>
                                                </td>
                                                <td>{joined}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-danger btn-small"
                                                        on:click=move |_| confirm.update(|c| c.request(removal.clone()))
                                                    >
                                                        "Remove"
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
                    confirm.with(|c| c.pending().map(|r| format!("Remove learner {}? This cannot be undone.", r.name)))
                })
                confirm_label="Remove"
                on_confirm=on_confirm
                on_cancel=move |_: ()| confirm.update(|c| c.dismiss())
            />
        </section>
    }
}

/// Application plus the decision awaiting confirmation
#[derive(Clone, Debug, PartialEq)]
struct Review {
    application: MentorApplication,
    decision: ApplicationDecision,
}

impl Review {
    fn prompt(&self) -> String {
        format!(
            "Are you sure you want to {} the application from {}?",
            self.decision.verb(),
            self.application.name
        )
    }
}

#[component]
pub fn MentorApplicationsPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let applications =
        use_remote(|api| async move { api.mentor_applications().await }, "Failed to load applications.");
    let list = create_list_signals::<(), NameSort>(NameSort::Name, PAGE_SIZE);
    let page = list.page_of(move || applications.value());
    let confirm = RwSignal::new(Confirmation::<Review>::Idle);
    let expanded = RwSignal::new(None::<u32>);

    let on_confirm = move |_: ()| {
        let Some(review) = confirm.try_update(|c| c.accept()).flatten() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            let id = review.application.id;
            match api.process_application(id, review.decision).await {
                Ok(response) => {
                    toasts.success(response.message.unwrap_or_else(|| {
                        format!("Application {} successfully.", review.decision.past_tense())
                    }));
                    applications.update(|records| {
                        remove_record(records, id);
                    });
                }
                Err(err) => session.report(&err, "Failed to process application."),
            }
        });
    };

    let request = move |application: MentorApplication, decision: ApplicationDecision| {
        confirm.update(|c| c.request(Review { application, decision }));
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Mentor Applications"</h1>
            <div class="card table-card">
                <div class="table-toolbar">
                    <SearchInput
                        value=Signal::derive(move || list.search())
                        on_input=move |text: String| list.set_search(text)
                        placeholder="Search applications"
                    />
                </div>
                {move || {
                    if applications.is_loading() {
                        return view! { <Loading label="Loading applications..." /> }.into_any();
                    }
                    let current = page.get();
                    if current.is_empty() {
                        return view! { <EmptyState message="No pending applications." /> }.into_any();
                    }
                    current
                        .items
                        .into_iter()
                        .map(|application| {
                            let id = application.id;
                            let cv = application.cv_path.as_deref().map(|path| session.asset_url(path));
                            let details = (
                                application.education.clone(),
                                application.experience.clone(),
                                application.message.clone(),
                            );
                            let approve = application.clone();
                            let decline = application.clone();
                            view! {
                                <div class="application-card">
                                    <div class="application-summary" on:click=move |_| {
                                        expanded.update(|open| *open = if *open == Some(id) { None } else { Some(id) })
                                    }>
                                        <strong>{application.name}</strong>
                                        <span class="muted">{application.email}</span>
                                        <span>{application.expertise}</span>
                                    </div>
                                    <Show when=move || expanded.get() == Some(id)>
                                        <dl class="application-details">
                                            <dt>"Education"</dt>
                                            <dd>{details.0.clone()}</dd>
                                            <dt>"Experience"</dt>
                                            <dd>{details.1.clone()}</dd>
                                            <dt>"Message"</dt>
                                            <dd>{details.2.clone()}</dd>
                                        </dl>
                                    </Show>
                                    <div class="row-actions">
                                        {cv.map(|href| {
                                            view! { <a class="btn btn-secondary btn-small" href=href target="_blank">"View CV"</a> }
                                        })}
                                        <button
                                            class="btn btn-primary btn-small"
                                            on:click=move |_| request(approve.clone(), ApplicationDecision::Approved)
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="btn btn-danger btn-small"
                                            on:click=move |_| request(decline.clone(), ApplicationDecision::Declined)
                                        >
                                            "Decline"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
                <Pagination
                    page=Signal::derive(move || page.with(|p| p.page))
                    page_count=Signal::derive(move || page.with(|p| p.page_count))
                    on_page=move |number: usize| list.go_to_page(number)
                />
            </div>
            <ConfirmModal
                message=Signal::derive(move || confirm.with(|c| c.pending().map(Review::prompt)))
                confirm_label=Signal::derive(move || {
                    match confirm.with(|c| c.pending().map(|review| review.decision)) {
                        Some(ApplicationDecision::Declined) => "Decline",
                        _ => "Approve",
                    }
                })
                on_confirm=on_confirm
                on_cancel=move |_: ()| confirm.update(|c| c.dismiss())
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(id: u32) -> MentorApplication {
        MentorApplication {
            id,
            name: "Aline".into(),
            email: "aline@shecan.rw".into(),
            education: String::new(),
            experience: String::new(),
            expertise: "Marketing".into(),
            message: String::new(),
            cv_path: None,
        }
    }

    #[test]
    fn test_review_prompt() {
        let review = Review { application: application(1), decision: ApplicationDecision::Declined };
        assert_eq!(review.prompt(), "Are you sure you want to decline the application from Aline?");
    }

    #[test]
    fn test_processed_application_is_removed_locally() {
        let mut records = vec![application(1), application(2)];
        assert!(remove_record(&mut records, 1));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);
    }

    #[test]
    fn test_suggestion_label() {
        let mut mentor = EligibleMentor {
            id: 3,
            first_name: "Grace".into(),
            last_name: "M".into(),
            email: "grace@shecan.rw".into(),
        };
        assert_eq!(suggestion_label(&mentor), "Grace M <grace@shecan.rw>");
        mentor.first_name.clear();
        mentor.last_name.clear();
        assert_eq!(suggestion_label(&mentor), "grace@shecan.rw");
    }
}
