//! Mentor Pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_listview::{create_list_signals, Confirmation, Optimistic};

use crate::components::{
    ConfirmModal, EmptyState, FilterSelect, Loading, Pagination, SearchInput, SortHeader, TextField,
};
use crate::context::use_session;
use crate::download::{mentor_report_file_name, today};
use crate::hooks::use_remote;
use crate::listing::{BookingSort, ProgressFilter, QuizSort, StudentSort};
use crate::models::{BookingStatus, MentorDashboard, SlotStatus};
use crate::pages::shared::{parse_progress_filter, progress_filter_key, save_pdf, ProgressBar, PROGRESS_OPTIONS};
use crate::slots::{slot_dates, slots_on, time_slots, toggle_time};
use crate::store::use_toasts;

const PAGE_SIZE: usize = 5;

const BOOKING_STATUSES: [BookingStatus; 5] = [
    BookingStatus::Pending,
    BookingStatus::Confirmed,
    BookingStatus::Scheduled,
    BookingStatus::Completed,
    BookingStatus::Cancelled,
];

fn booking_status_options() -> Vec<(&'static str, &'static str)> {
    BOOKING_STATUSES.iter().map(|status| (status.label(), status.label())).collect()
}

fn parse_booking_status(key: &str) -> Option<BookingStatus> {
    BOOKING_STATUSES.into_iter().find(|status| status.label() == key)
}

// ========================
// Dashboard
// ========================

#[component]
pub fn MentorDashboardPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let data = use_remote(|api| async move { api.mentor_dashboard().await }, "Failed to load dashboard data.");
    let exporting = RwSignal::new(false);

    let export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        exporting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.mentor_report_pdf().await {
                Ok(bytes) => save_pdf(toasts, &bytes, &mentor_report_file_name(today())),
                Err(err) => session.report(&err, "Failed to export report."),
            }
            let _ = exporting.try_set(false);
        });
    };

    let kpi = move |label: &'static str, pick: fn(&MentorDashboard) -> u32| {
        view! {
            <div class="kpi-card">
                <span class="kpi-label">{label}</span>
                <span class="kpi-value">{move || data.data.with(|r| r.data().map(pick).unwrap_or_default())}</span>
            </div>
        }
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h1 class="page-title">"Mentor Dashboard"</h1>
                <button class="btn btn-secondary" on:click=export disabled=move || exporting.get()>
                    {move || if exporting.get() { "Exporting..." } else { "Export PDF" }}
                </button>
            </div>
            <div class="kpi-grid">
                {kpi("Courses", |d| d.kpis.total_courses)}
                {kpi("Students", |d| d.kpis.total_students)}
                {kpi("Chapters", |d| d.kpis.total_chapters)}
                {kpi("Completed Courses", |d| d.kpis.completed_courses)}
            </div>
            {move || {
                if data.is_loading() {
                    return view! { <Loading /> }.into_any();
                }
                let dashboard = data.value();
                let courses = if dashboard.courses.is_empty() {
                    view! { <EmptyState message="You have no courses assigned yet." /> }.into_any()
                } else {
                    view! {
                        <table class="table">
                            <thead>
                                <tr><th>"Course"</th><th>"Level"</th><th>"Duration"</th><th>"Chapters"</th><th>"Students"</th></tr>
                            </thead>
                            <tbody>
                                {dashboard
                                    .courses
                                    .into_iter()
                                    .map(|course| {
                                        view! {
                                            <tr>
                                                <td>{course.title}</td>
                                                <td>{course.level.label().to_string()}</td>
                                                <td>{course.duration}</td>
                                                <td>{course.chapters}</td>
                                                <td>{course.students_enrolled}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                };
                let bookings = if dashboard.bookings.is_empty() {
                    view! { <EmptyState message="No upcoming sessions." /> }.into_any()
                } else {
                    view! {
                        <ul class="booking-list">
                            {dashboard
                                .bookings
                                .into_iter()
                                .map(|booking| {
                                    view! {
                                        <li class="booking-item">
                                            <strong>{booking.student}</strong>
                                            <span>{booking.course}</span>
                                            <span class="muted">{booking.time}</span>
                                            <span>{booking.topic}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                };
                view! {
                    <div class="card table-card">
                        <h2>"My Courses"</h2>
                        {courses}
                    </div>
                    <div class="card">
                        <h2>"Upcoming Sessions"</h2>
                        {bookings}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

// ========================
// Bookings
// ========================

/// Status change waiting for confirmation
#[derive(Clone, Debug, PartialEq)]
struct StatusChange {
    id: u32,
    mentee: String,
    status: BookingStatus,
}

impl StatusChange {
    fn prompt(&self) -> String {
        match self.status {
            BookingStatus::Cancelled => format!("Cancel the session with {}?", self.mentee),
            _ => format!("Mark the session with {} as {}?", self.mentee, self.status.label()),
        }
    }
}

#[component]
pub fn MentorBookingsPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let bookings = use_remote(|api| async move { api.bookings().await }, "Failed to load bookings.");
    let list = create_list_signals::<BookingStatus, BookingSort>(BookingSort::When, PAGE_SIZE);
    let page = list.page_of(move || bookings.value());
    let confirm = RwSignal::new(Confirmation::<StatusChange>::Idle);

    let on_confirm = move |_: ()| {
        let Some(change) = confirm.try_update(|c| c.accept()).flatten() else {
            return;
        };
        let mut snapshot = None;
        bookings.update(|records| {
            snapshot = Optimistic::patch(records, change.id, |booking| booking.status = change.status);
        });
        let Some(snapshot) = snapshot else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            match api.set_booking_status(change.id, change.status).await {
                Ok(_) => {
                    snapshot.commit();
                    toasts.success(format!("Booking marked as {}.", change.status.label()));
                }
                Err(err) => {
                    bookings.update(|records| snapshot.rollback(records));
                    session.report(&err, "Failed to update booking.");
                }
            }
        });
    };

    let sorted_by = move |key: BookingSort| {
        Signal::derive(move || {
            let (sort, direction) = list.sort();
            (sort == key).then_some(direction)
        })
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Bookings"</h1>
            <div class="card table-card">
                <div class="table-toolbar">
                    <SearchInput
                        value=Signal::derive(move || list.search())
                        on_input=move |text: String| list.set_search(text)
                        placeholder="Search by mentee or topic"
                    />
                    <FilterSelect
                        options=booking_status_options()
                        selected=Signal::derive(move || list.filter().map(BookingStatus::label).unwrap_or(""))
                        on_change=move |key: String| list.set_filter(parse_booking_status(&key))
                        all_label="All statuses"
                    />
                </div>
                {move || {
                    if bookings.is_loading() {
                        return view! { <Loading label="Loading bookings..." /> }.into_any();
                    }
                    let current = page.get();
                    if current.is_empty() {
                        return view! { <EmptyState message="No bookings found." /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <SortHeader
                                        label="Mentee"
                                        active=sorted_by(BookingSort::Mentee)
                                        on_sort=move |_: ()| list.sort_by(BookingSort::Mentee)
                                    />
                                    <SortHeader
                                        label="When"
                                        active=sorted_by(BookingSort::When)
                                        on_sort=move |_: ()| list.sort_by(BookingSort::When)
                                    />
                                    <th>"Topic"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {current
                                    .items
                                    .into_iter()
                                    .map(|booking| {
                                        let (id, mentee) = (booking.id, booking.mentee_name.clone());
                                        let request = move |status: BookingStatus| {
                                            let change = StatusChange { id, mentee: mentee.clone(), status };
                                            move |_| confirm.update(|c| c.request(change.clone()))
                                        };
                                        let actions = booking.status.is_open().then(|| {
                                            view! {
                                                <button
                                                    class="btn btn-primary btn-small"
                                                    on:click=request(BookingStatus::Completed)
                                                >
                                                    "Complete"
                                                </button>
                                                <button
                                                    class="btn btn-danger btn-small"
                                                    on:click=request(BookingStatus::Cancelled)
                                                >
                                                    "Cancel"
                                                </button>
                                            }
                                        });
                                        view! {
                                            <tr>
                                                <td>{booking.mentee_name}</td>
                                                <td>{format!("{} {}", booking.date, booking.time)}</td>
                                                <td>{booking.topic}</td>
                                                <td>
                                                    <span class=booking.status.badge_class()>{booking.status.label()}</span>
                                                </td>
                                                <td class="row-actions">{actions}</td>
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
                message=Signal::derive(move || confirm.with(|c| c.pending().map(StatusChange::prompt)))
                confirm_label="Confirm"
                on_confirm=on_confirm
                on_cancel=move |_: ()| confirm.update(|c| c.dismiss())
            />
        </section>
    }
}

// ========================
// Availability
// ========================

#[derive(Clone, Copy, Debug, PartialEq)]
enum SlotAction {
    Cancel(u32),
    Delete(u32),
}

impl SlotAction {
    fn prompt(self) -> &'static str {
        match self {
            Self::Cancel(_) => "Cancel this slot? Learners will no longer be able to book it.",
            Self::Delete(_) => "Delete this slot permanently?",
        }
    }
}

#[component]
pub fn MentorAvailabilityPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let slots = use_remote(|api| async move { api.my_availability().await }, "Failed to load availability.");
    let date = RwSignal::new(String::new());
    let selected = RwSignal::new(Vec::<String>::new());
    let shown_date = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let confirm = RwSignal::new(Confirmation::<SlotAction>::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let (day, times) = (date.get_untracked(), selected.get_untracked());
        if day.is_empty() || times.is_empty() {
            toasts.error("Please pick a date and at least one time slot.");
            return;
        }
        saving.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.add_availability(&day, &times).await {
                Ok(_) => {
                    toasts.success("Availability added.");
                    let _ = selected.try_set(Vec::new());
                    slots.reload();
                }
                Err(err) => session.report(&err, "Failed to add availability."),
            }
            let _ = saving.try_set(false);
        });
    };

    let on_confirm = move |_: ()| {
        let Some(action) = confirm.try_update(|c| c.accept()).flatten() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            let (result, done) = match action {
                SlotAction::Cancel(id) => (api.cancel_slot(id).await, "Slot cancelled."),
                SlotAction::Delete(id) => (api.delete_slot(id).await, "Slot deleted."),
            };
            match result {
                Ok(_) => {
                    toasts.success(done);
                    slots.reload();
                }
                Err(err) => session.report(&err, "Failed to update slot."),
            }
        });
    };

    let grid = time_slots()
        .into_iter()
        .map(|time| {
            let label = time.clone();
            let picked = {
                let time = time.clone();
                move || selected.with(|chosen| chosen.contains(&time))
            };
            view! {
                <button
                    type="button"
                    class=move || if picked() { "time-chip selected" } else { "time-chip" }
                    on:click=move |_| selected.update(|chosen| toggle_time(chosen, &time))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="page">
            <h1 class="page-title">"Availability"</h1>
            <form class="card form-card" on:submit=on_submit>
                <h2>"Add Availability"</h2>
                <TextField label="Date" value=date input_type="date" disabled=saving required=true />
                <div class="time-grid">{grid}</div>
                <button class="btn btn-primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Slots" }}
                </button>
            </form>

            <div class="card">
                <div class="table-toolbar">
                    <h2>"My Slots"</h2>
                    <select
                        class="filter-select"
                        prop:value=move || shown_date.get()
                        on:change=move |ev| shown_date.set(event_target_value(&ev))
                    >
                        <option value="">"All dates"</option>
                        {move || {
                            slot_dates(&slots.value())
                                .into_iter()
                                .map(|day| view! { <option value=day.clone()>{day.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
                {move || {
                    if slots.is_loading() {
                        return view! { <Loading label="Loading slots..." /> }.into_any();
                    }
                    let all = slots.value();
                    let filter = shown_date.get();
                    let visible = slots_on(&all, (!filter.is_empty()).then_some(filter.as_str()));
                    if visible.is_empty() {
                        return view! { <EmptyState message="No availability slots yet." /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr><th>"Date"</th><th>"Time"</th><th>"Status"</th><th></th></tr>
                            </thead>
                            <tbody>
                                {visible
                                    .into_iter()
                                    .map(|slot| {
                                        let id = slot.id;
                                        let cancellable = slot.status == SlotStatus::Available;
                                        view! {
                                            <tr>
                                                <td>{slot.date.clone()}</td>
                                                <td>{slot.time.clone()}</td>
                                                <td>{slot.status.label()}</td>
                                                <td class="row-actions">
                                                    <Show when=move || cancellable>
                                                        <button
                                                            class="btn btn-secondary btn-small"
                                                            on:click=move |_| confirm.update(|c| c.request(SlotAction::Cancel(id)))
                                                        >
                                                            "Cancel"
                                                        </button>
                                                    </Show>
                                                    <button
                                                        class="btn btn-danger btn-small"
                                                        on:click=move |_| confirm.update(|c| c.request(SlotAction::Delete(id)))
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
            </div>
            <ConfirmModal
                message=Signal::derive(move || confirm.with(|c| c.pending().map(|a| a.prompt().to_string())))
                confirm_label=Signal::derive(move || match confirm.with(|c| c.pending().copied()) {
                    Some(SlotAction::Cancel(_)) => "Cancel Slot",
                    _ => "Delete",
                })
                on_confirm=on_confirm
                on_cancel=move |_: ()| confirm.update(|c| c.dismiss())
            />
        </section>
    }
}

// ========================
// Quizzes & Students
// ========================

#[component]
pub fn MentorQuizzesPage() -> impl IntoView {
    let quizzes = use_remote(|api| async move { api.quiz_overview().await }, "Failed to load quizzes.");
    let list = create_list_signals::<(), QuizSort>(QuizSort::Title, PAGE_SIZE);
    let page = list.page_of(move || quizzes.value());

    let sorted_by = move |key: QuizSort| {
        Signal::derive(move || {
            let (sort, direction) = list.sort();
            (sort == key).then_some(direction)
        })
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Quizzes"</h1>
            <div class="card table-card">
                <div class="table-toolbar">
                    <SearchInput
                        value=Signal::derive(move || list.search())
                        on_input=move |text: String| list.set_search(text)
                        placeholder="Search by quiz or course"
                    />
                </div>
                {move || {
                    if quizzes.is_loading() {
                        return view! { <Loading label="Loading quizzes..." /> }.into_any();
                    }
                    let current = page.get();
                    if current.is_empty() {
                        return view! { <EmptyState message="No quizzes found." /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <SortHeader
                                        label="Quiz"
                                        active=sorted_by(QuizSort::Title)
                                        on_sort=move |_: ()| list.sort_by(QuizSort::Title)
                                    />
                                    <th>"Course"</th>
                                    <th>"Attempted"</th>
                                    <th>"Passed"</th>
                                    <th>"Failed"</th>
                                    <SortHeader
                                        label="Pass rate"
                                        active=sorted_by(QuizSort::PassRate)
                                        on_sort=move |_: ()| list.sort_by(QuizSort::PassRate)
                                    />
                                </tr>
                            </thead>
                            <tbody>
                                {current
                                    .items
                                    .into_iter()
                                    .map(|quiz| {
                                        let rate = format!("{}%", quiz.pass_rate());
                                        view! {
                                            <tr>
                                                <td>{quiz.title}</td>
                                                <td>{quiz.course}</td>
                                                <td>{format!("{} / {}", quiz.total_students, quiz.expected_students)}</td>
                                                <td>{quiz.passed}</td>
                                                <td>{quiz.failed}</td>
                                                <td>{rate}</td>
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

#[component]
pub fn MentorStudentsPage() -> impl IntoView {
    let course_filter = RwSignal::new(None::<u32>);
    let courses = use_remote(|api| async move { api.mentor_courses().await }, "Failed to load courses.");
    let students = use_remote(
        move |api| {
            let course = course_filter.get();
            async move { api.my_learners(course).await }
        },
        "Failed to load students.",
    );
    let list = create_list_signals::<ProgressFilter, StudentSort>(StudentSort::Name, PAGE_SIZE);
    let page = list.page_of(move || students.value());

    let sorted_by = move |key: StudentSort| {
        Signal::derive(move || {
            let (sort, direction) = list.sort();
            (sort == key).then_some(direction)
        })
    };

    view! {
        <section class="page">
            <h1 class="page-title">"My Students"</h1>
            <div class="card table-card">
                <div class="table-toolbar">
                    <SearchInput
                        value=Signal::derive(move || list.search())
                        on_input=move |text: String| list.set_search(text)
                        placeholder="Search students"
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| course_filter.set(event_target_value(&ev).parse().ok())
                    >
                        <option value="">"All courses"</option>
                        {move || {
                            courses
                                .value()
                                .into_iter()
                                .map(|course| view! { <option value=course.id.to_string()>{course.title}</option> })
                                .collect_view()
                        }}
                    </select>
                    <FilterSelect
                        options=PROGRESS_OPTIONS.to_vec()
                        selected=Signal::derive(move || progress_filter_key(list.filter()))
                        on_change=move |key: String| list.set_filter(parse_progress_filter(&key))
                        all_label="All progress"
                    />
                </div>
                {move || {
                    if students.is_loading() {
                        return view! { <Loading label="Loading students..." /> }.into_any();
                    }
                    let current = page.get();
                    if current.is_empty() {
                        return view! { <EmptyState message="No students found." /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <SortHeader
                                        label="Student"
                                        active=sorted_by(StudentSort::Name)
                                        on_sort=move |_: ()| list.sort_by(StudentSort::Name)
                                    />
                                    <th>"Enrolled"</th>
                                    <th>"Last active"</th>
                                    <SortHeader
                                        label="Progress"
                                        active=sorted_by(StudentSort::Progress)
                                        on_sort=move |_: ()| list.sort_by(StudentSort::Progress)
                                    />
                                </tr>
                            </thead>
                            <tbody>
                                {current
                                    .items
                                    .into_iter()
                                    .map(|student| {
                                        view! {
                                            <tr>
                                                <td>{student.name}</td>
                                                <td>{student.enrolled}</td>
                                                <td>{student.last_active}</td>
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
                    page=Signal::derive(move || page.with(|p| p.page))
                    page_count=Signal::derive(move || page.with(|p| p.page_count))
                    on_page=move |number: usize| list.go_to_page(number)
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Booking;

    fn booking(id: u32, status: BookingStatus) -> Booking {
        Booking {
            id,
            mentee_name: "Diane".into(),
            date: "2025-06-01".into(),
            time: "10:00 AM".into(),
            status,
            topic: "Pricing".into(),
            notes: None,
        }
    }

    #[test]
    fn test_booking_status_keys() {
        assert_eq!(booking_status_options().len(), 5);
        assert_eq!(parse_booking_status("completed"), Some(BookingStatus::Completed));
        assert_eq!(parse_booking_status(""), None);
    }

    #[test]
    fn test_failed_status_change_restores_list() {
        let mut records = vec![booking(1, BookingStatus::Pending), booking(2, BookingStatus::Confirmed)];
        let before = records.clone();
        let snapshot = Optimistic::patch(&mut records, 2, |b| b.status = BookingStatus::Cancelled).unwrap();
        assert_eq!(records[1].status, BookingStatus::Cancelled);
        snapshot.rollback(&mut records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_status_change_prompt() {
        let change = StatusChange { id: 1, mentee: "Diane".into(), status: BookingStatus::Completed };
        assert_eq!(change.prompt(), "Mark the session with Diane as completed?");
        let cancel = StatusChange { status: BookingStatus::Cancelled, ..change };
        assert_eq!(cancel.prompt(), "Cancel the session with Diane?");
    }

    #[test]
    fn test_slot_prompts() {
        assert!(SlotAction::Cancel(3).prompt().starts_with("Cancel"));
        assert_eq!(SlotAction::Delete(3).prompt(), "Delete this slot permanently?");
    }
}
