//! Program Manager Dashboard
//!
//! KPIs plus filtered course, mentor and student tables.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, Confirmation, SortDirection};

use crate::components::{ConfirmModal, EmptyState, FilterSelect, Loading, Pagination, SearchInput, SortHeader};
use crate::context::use_session;
use crate::download::{report_file_name, today};
use crate::hooks::use_remote;
use crate::listing::{DashboardMentorSort, NameSort, ProgressFilter, StudentSort};
use crate::models::{AccountStatus, AssignmentStatus, DashboardData};
use crate::pages::shared::{
    account_status_badge, account_status_key, parse_account_status, parse_progress_filter, progress_filter_key,
    save_pdf, ProgressBar, ACCOUNT_STATUS_OPTIONS, PROGRESS_OPTIONS,
};
use crate::store::use_toasts;

const PAGE_SIZE: usize = 5;

/// Action waiting for the manager's confirmation
#[derive(Clone, Debug, PartialEq)]
enum DashboardAction {
    ToggleMentor { id: u32, name: String, status: AccountStatus },
    DeleteMentor { id: u32, name: String },
    DeleteCourse { id: u32, title: String },
}

impl DashboardAction {
    fn prompt(&self) -> String {
        match self {
            Self::ToggleMentor { name, status, .. } => {
                let verb = if *status == AccountStatus::Active { "disable" } else { "enable" };
                format!("Are you sure you want to {} {}?", verb, name)
            }
            Self::DeleteMentor { name, .. } => format!("Are you sure you want to delete {}?", name),
            Self::DeleteCourse { title, .. } => format!("Are you sure you want to delete the course \"{}\"?", title),
        }
    }

    fn confirm_label(&self) -> &'static str {
        match self {
            Self::ToggleMentor { .. } => "Confirm",
            Self::DeleteMentor { .. } | Self::DeleteCourse { .. } => "Delete",
        }
    }
}

fn assignment_options() -> Vec<(&'static str, &'static str)> {
    AssignmentStatus::ALL.iter().map(|status| (status.key(), status.label())).collect()
}

fn parse_assignment(key: &str) -> Option<AssignmentStatus> {
    AssignmentStatus::ALL.into_iter().find(|status| status.key() == key)
}

fn display_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => "Unnamed mentor".to_string(),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let data = use_remote(|api| async move { api.dashboard().await }, "Failed to load dashboard data.");
    let confirm = RwSignal::new(Confirmation::<DashboardAction>::Idle);
    let exporting = RwSignal::new(false);

    let courses = create_list_signals::<AssignmentStatus, NameSort>(NameSort::Name, PAGE_SIZE);
    let courses_page = courses.page_of(move || data.data.with(|r| r.data().map(|d| d.courses.clone()).unwrap_or_default()));
    let mentors = create_list_signals::<AccountStatus, DashboardMentorSort>(DashboardMentorSort::Name, PAGE_SIZE);
    let mentors_page = mentors.page_of(move || data.data.with(|r| r.data().map(|d| d.mentors.clone()).unwrap_or_default()));
    let students = create_list_signals::<ProgressFilter, StudentSort>(StudentSort::Name, PAGE_SIZE);
    let students_page =
        students.page_of(move || data.data.with(|r| r.data().map(|d| d.students.clone()).unwrap_or_default()));

    let run = move |action: DashboardAction| {
        let api = session.api();
        spawn_local(async move {
            let (result, done) = match &action {
                DashboardAction::ToggleMentor { id, status, .. } => (
                    api.set_user_status(*id, status.toggled_request_value()).await,
                    "Mentor status updated.",
                ),
                DashboardAction::DeleteMentor { id, .. } => (api.delete_user(*id).await, "Mentor deleted."),
                DashboardAction::DeleteCourse { id, .. } => (api.delete_course(*id).await, "Course deleted."),
            };
            match result {
                Ok(_) => {
                    toasts.success(done);
                    data.reload();
                }
                Err(err) => session.report(&err, "Action failed. Please try again."),
            }
        });
    };

    let on_confirm = move |_: ()| {
        if let Some(action) = confirm.try_update(|c| c.accept()).flatten() {
            run(action);
        }
    };

    let export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        exporting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.platform_report_pdf().await {
                Ok(bytes) => save_pdf(toasts, &bytes, &report_file_name(today())),
                Err(err) => session.report(&err, "Failed to export report."),
            }
            let _ = exporting.try_set(false);
        });
    };

    let kpi = move |label: &'static str, pick: fn(&DashboardData) -> String| {
        view! {
            <div class="kpi-card">
                <span class="kpi-label">{label}</span>
                <span class="kpi-value">
                    {move || data.data.with(|r| r.data().map(pick).unwrap_or_else(|| "-".to_string()))}
                </span>
            </div>
        }
    };

    view! {
        <section class="page admin-dashboard">
            <div class="page-header">
                <h1 class="page-title">"Dashboard"</h1>
                <button class="btn btn-secondary" on:click=export disabled=move || exporting.get()>
                    {move || if exporting.get() { "Exporting..." } else { "Export PDF" }}
                </button>
            </div>

            <div class="kpi-grid">
                {kpi("Total Courses", |d| d.kpis.total_courses.clone())}
                {kpi("Active Mentors", |d| d.kpis.active_mentors.clone())}
                {kpi("Enrolled Students", |d| d.kpis.enrolled_students.clone())}
            </div>

            // Courses
            <div class="card table-card">
                <div class="table-toolbar">
                    <h2>"Courses"</h2>
                    <SearchInput
                        value=Signal::derive(move || courses.search())
                        on_input=move |text: String| courses.set_search(text)
                        placeholder="Search courses or mentors"
                    />
                    <FilterSelect
                        options=assignment_options()
                        selected=Signal::derive(move || courses.filter().map(|s| s.key()).unwrap_or(""))
                        on_change=move |key: String| courses.set_filter(parse_assignment(&key))
                        all_label="All statuses"
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            let direction = if event_target_value(&ev) == "desc" {
                                SortDirection::Descending
                            } else {
                                SortDirection::Ascending
                            };
                            courses.set_sort(NameSort::Name, direction);
                        }
                    >
                        <option value="asc">"A–Z"</option>
                        <option value="desc">"Z–A"</option>
                    </select>
                </div>
                {move || {
                    if data.is_loading() {
                        return view! { <Loading /> }.into_any();
                    }
                    let page = courses_page.get();
                    if page.is_empty() {
                        return view! { <EmptyState message="No courses match your search." /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr><th>"Course"</th><th>"Mentor"</th><th>"Status"</th><th></th></tr>
                            </thead>
                            <tbody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|course| {
                                        let action = DashboardAction::DeleteCourse {
                                            id: course.id,
                                            title: course.title.clone(),
                                        };
                                        let mentor = if course.mentor_name.is_empty() {
                                            "-".to_string()
                                        } else {
                                            course.mentor_name.clone()
                                        };
                                        view! {
                                            <tr>
                                                <td>{course.title}</td>
                                                <td>{mentor}</td>
                                                <td>
                                                    <span class="badge">{course.mentor_status.label()}</span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn-danger btn-small"
                                                        on:click=move |_| confirm.update(|c| c.request(action.clone()))
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
                    page=Signal::derive(move || courses_page.with(|p| p.page))
                    page_count=Signal::derive(move || courses_page.with(|p| p.page_count))
                    on_page=move |page: usize| courses.go_to_page(page)
                />
            </div>

            // Mentors
            <div class="card table-card">
                <div class="table-toolbar">
                    <h2>"Mentors"</h2>
                    <SearchInput
                        value=Signal::derive(move || mentors.search())
                        on_input=move |text: String| mentors.set_search(text)
                        placeholder="Search mentors"
                    />
                    <FilterSelect
                        options=ACCOUNT_STATUS_OPTIONS.to_vec()
                        selected=Signal::derive(move || account_status_key(mentors.filter().as_ref()))
                        on_change=move |key: String| mentors.set_filter(parse_account_status(&key))
                        all_label="All statuses"
                    />
                </div>
                {move || {
                    if data.is_loading() {
                        return view! { <Loading /> }.into_any();
                    }
                    let page = mentors_page.get();
                    if page.is_empty() {
                        return view! { <EmptyState message="No mentors found." /> }.into_any();
                    }
                    let sorted_by = move |key: DashboardMentorSort| {
                        Signal::derive(move || {
                            let (sort, direction) = mentors.sort();
                            (sort == key).then_some(direction)
                        })
                    };
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <SortHeader
                                        label="Name"
                                        active=sorted_by(DashboardMentorSort::Name)
                                        on_sort=move |_: ()| mentors.sort_by(DashboardMentorSort::Name)
                                    />
                                    <th>"Status"</th>
                                    <SortHeader
                                        label="Courses"
                                        active=sorted_by(DashboardMentorSort::AssignedCourses)
                                        on_sort=move |_: ()| mentors.sort_by(DashboardMentorSort::AssignedCourses)
                                    />
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|mentor| {
                                        let name = display_name(mentor.name.as_deref());
                                        let toggle = DashboardAction::ToggleMentor {
                                            id: mentor.id,
                                            name: name.clone(),
                                            status: mentor.status.clone(),
                                        };
                                        let delete = DashboardAction::DeleteMentor { id: mentor.id, name: name.clone() };
                                        let toggle_label = if mentor.status == AccountStatus::Active {
                                            "Disable"
                                        } else {
                                            "Enable"
                                        };
                                        view! {
                                            <tr>
                                                <td>{name}</td>
                                                <td>
                                                    <span class=account_status_badge(&mentor.status)>
                                                        {mentor.status.label().to_string()}
                                                    </span>
                                                </td>
                                                <td>{mentor.assigned_courses}</td>
                                                <td class="row-actions">
                                                    <button
                                                        class="btn btn-secondary btn-small"
                                                        on:click=move |_| confirm.update(|c| c.request(toggle.clone()))
                                                    >
                                                        {toggle_label}
                                                    </button>
                                                    <button
                                                        class="btn btn-danger btn-small"
                                                        on:click=move |_| confirm.update(|c| c.request(delete.clone()))
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
                    page=Signal::derive(move || mentors_page.with(|p| p.page))
                    page_count=Signal::derive(move || mentors_page.with(|p| p.page_count))
                    on_page=move |page: usize| mentors.go_to_page(page)
                />
            </div>

            // Students
            <div class="card table-card">
                <div class="table-toolbar">
                    <h2>"Students"</h2>
                    <SearchInput
                        value=Signal::derive(move || students.search())
                        on_input=move |text: String| students.set_search(text)
                        placeholder="Search students"
                    />
                    <FilterSelect
                        options=PROGRESS_OPTIONS.to_vec()
                        selected=Signal::derive(move || progress_filter_key(students.filter()))
                        on_change=move |key: String| students.set_filter(parse_progress_filter(&key))
                        all_label="All progress"
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            if event_target_value(&ev) == "progress" {
                                students.set_sort(StudentSort::Progress, SortDirection::Descending);
                            } else {
                                students.set_sort(StudentSort::Name, SortDirection::Ascending);
                            }
                        }
                    >
                        <option value="name">"Sort by name"</option>
                        <option value="progress">"Sort by progress"</option>
                    </select>
                </div>
                {move || {
                    if data.is_loading() {
                        return view! { <Loading /> }.into_any();
                    }
                    let page = students_page.get();
                    if page.is_empty() {
                        return view! { <EmptyState message="No students found." /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr><th>"Student"</th><th>"Course"</th><th>"Mentor"</th><th>"Progress"</th></tr>
                            </thead>
                            <tbody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|student| {
                                        view! {
                                            <tr>
                                                <td>{student.name}</td>
                                                <td>{student.enrolled_course}</td>
                                                <td>{student.mentor}</td>
                                                <td><ProgressBar progress=student.progress /></td>
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
                    page=Signal::derive(move || students_page.with(|p| p.page))
                    page_count=Signal::derive(move || students_page.with(|p| p.page_count))
                    on_page=move |page: usize| students.go_to_page(page)
                />
            </div>

            <ConfirmModal
                message=Signal::derive(move || confirm.with(|c| c.pending().map(DashboardAction::prompt)))
                confirm_label=Signal::derive(move || {
                    confirm.with(|c| c.pending().map(DashboardAction::confirm_label)).unwrap_or("Confirm")
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

    #[test]
    fn test_prompts() {
        let toggle = DashboardAction::ToggleMentor {
            id: 1,
            name: "Aline".into(),
            status: AccountStatus::Active,
        };
        assert_eq!(toggle.prompt(), "Are you sure you want to disable Aline?");
        let enable = DashboardAction::ToggleMentor {
            id: 1,
            name: "Aline".into(),
            status: AccountStatus::Inactive,
        };
        assert_eq!(enable.prompt(), "Are you sure you want to enable Aline?");
        assert_eq!(DashboardAction::DeleteCourse { id: 2, title: "Web".into() }.confirm_label(), "Delete");
    }

    #[test]
    fn test_assignment_filter_keys() {
        assert_eq!(assignment_options().len(), 3);
        assert_eq!(parse_assignment("not-assigned"), Some(AssignmentStatus::NotAssigned));
        assert_eq!(parse_assignment(""), None);
    }

    #[test]
    fn test_confirmation_gates_the_request() {
        let mut confirm = Confirmation::Idle;
        confirm.request(DashboardAction::DeleteMentor { id: 4, name: "Grace".into() });
        confirm.dismiss();
        assert_eq!(confirm.accept(), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(None), "Unnamed mentor");
        assert_eq!(display_name(Some("  ")), "Unnamed mentor");
        assert_eq!(display_name(Some("Claudine")), "Claudine");
    }
}
