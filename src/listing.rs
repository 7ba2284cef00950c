//! List View Bindings
//!
//! How each backend record takes part in a filtered list view: which
//! fields the search box looks at, which categorical filter applies,
//! and which columns sort.

use std::cmp::Ordering;

use leptos_listview::{Identified, ListRecord};

use crate::models::{
    AccountStatus, AdminCourse, AssignmentStatus, Booking, BookingStatus, CourseLevel, DashboardCourse,
    DashboardMentor, DashboardStudent, Learner, Mentor, MentorApplication, MentorCourse, MentorStudent, QuizOverview,
};

/// Locale-ish text ordering: case-insensitive, then exact as tiebreak
fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Students above this progress pass the "above 50%" filter
const PROGRESS_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressFilter {
    AboveHalf,
    BelowHalf,
}

impl ProgressFilter {
    fn matches(self, progress: f64) -> bool {
        match self {
            Self::AboveHalf => progress > PROGRESS_THRESHOLD,
            Self::BelowHalf => progress <= PROGRESS_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameSort {
    Name,
}

// ========================
// Admin courses
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseSort {
    Title,
    Enrolled,
}

impl ListRecord for AdminCourse {
    type Filter = CourseLevel;
    type SortKey = CourseSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.mentor.as_str()]
    }

    fn matches_filter(&self, filter: &CourseLevel) -> bool {
        &self.level == filter
    }

    fn compare_by(&self, other: &Self, key: CourseSort) -> Ordering {
        match key {
            CourseSort::Title => cmp_text(&self.title, &other.title),
            CourseSort::Enrolled => self.enrolled_count.cmp(&other.enrolled_count),
        }
    }
}

// ========================
// Mentors & learners
// ========================

impl ListRecord for Mentor {
    type Filter = AccountStatus;
    type SortKey = NameSort;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(expertise) = &self.expertise {
            fields.push(expertise);
        }
        fields
    }

    fn matches_filter(&self, filter: &AccountStatus) -> bool {
        &self.status == filter
    }

    fn compare_by(&self, other: &Self, _key: NameSort) -> Ordering {
        cmp_text(&self.name, &other.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LearnerSort {
    Name,
    Joined,
}

impl ListRecord for Learner {
    type Filter = AccountStatus;
    type SortKey = LearnerSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.first_name.as_str(), self.last_name.as_str(), self.email.as_str()]
    }

    fn matches_filter(&self, filter: &AccountStatus) -> bool {
        &self.status == filter
    }

    fn compare_by(&self, other: &Self, key: LearnerSort) -> Ordering {
        match key {
            LearnerSort::Name => cmp_text(&self.full_name(), &other.full_name()),
            // ISO timestamps order lexically
            LearnerSort::Joined => self.created_at.cmp(&other.created_at),
        }
    }
}

impl ListRecord for MentorApplication {
    type Filter = ();
    type SortKey = NameSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.expertise.as_str()]
    }

    fn matches_filter(&self, _filter: &()) -> bool {
        true
    }

    fn compare_by(&self, other: &Self, _key: NameSort) -> Ordering {
        cmp_text(&self.name, &other.name)
    }
}

// ========================
// Admin dashboard tables
// ========================

impl ListRecord for DashboardCourse {
    type Filter = AssignmentStatus;
    type SortKey = NameSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.mentor_name.as_str()]
    }

    fn matches_filter(&self, filter: &AssignmentStatus) -> bool {
        self.mentor_status == *filter
    }

    fn compare_by(&self, other: &Self, _key: NameSort) -> Ordering {
        cmp_text(&self.title, &other.title)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardMentorSort {
    Name,
    AssignedCourses,
}

impl ListRecord for DashboardMentor {
    type Filter = AccountStatus;
    type SortKey = DashboardMentorSort;

    fn search_fields(&self) -> Vec<&str> {
        self.name.as_deref().into_iter().collect()
    }

    fn matches_filter(&self, filter: &AccountStatus) -> bool {
        &self.status == filter
    }

    fn compare_by(&self, other: &Self, key: DashboardMentorSort) -> Ordering {
        match key {
            DashboardMentorSort::Name => cmp_text(
                self.name.as_deref().unwrap_or_default(),
                other.name.as_deref().unwrap_or_default(),
            ),
            DashboardMentorSort::AssignedCourses => self.assigned_courses.cmp(&other.assigned_courses),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentSort {
    Name,
    Progress,
}

impl ListRecord for DashboardStudent {
    type Filter = ProgressFilter;
    type SortKey = StudentSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn matches_filter(&self, filter: &ProgressFilter) -> bool {
        filter.matches(self.progress)
    }

    fn compare_by(&self, other: &Self, key: StudentSort) -> Ordering {
        match key {
            StudentSort::Name => cmp_text(&self.name, &other.name),
            StudentSort::Progress => self.progress.total_cmp(&other.progress),
        }
    }
}

impl ListRecord for MentorStudent {
    type Filter = ProgressFilter;
    type SortKey = StudentSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn matches_filter(&self, filter: &ProgressFilter) -> bool {
        filter.matches(self.progress)
    }

    fn compare_by(&self, other: &Self, key: StudentSort) -> Ordering {
        match key {
            StudentSort::Name => cmp_text(&self.name, &other.name),
            StudentSort::Progress => self.progress.total_cmp(&other.progress),
        }
    }
}

// ========================
// Mentor views
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingSort {
    When,
    Mentee,
}

impl ListRecord for Booking {
    type Filter = BookingStatus;
    type SortKey = BookingSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.mentee_name.as_str(), self.topic.as_str()]
    }

    fn matches_filter(&self, filter: &BookingStatus) -> bool {
        self.status == *filter
    }

    fn compare_by(&self, other: &Self, key: BookingSort) -> Ordering {
        match key {
            BookingSort::When => (&self.date, &self.time).cmp(&(&other.date, &other.time)),
            BookingSort::Mentee => cmp_text(&self.mentee_name, &other.mentee_name),
        }
    }
}

impl ListRecord for MentorCourse {
    type Filter = CourseLevel;
    type SortKey = CourseSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn matches_filter(&self, filter: &CourseLevel) -> bool {
        &self.level == filter
    }

    fn compare_by(&self, other: &Self, key: CourseSort) -> Ordering {
        match key {
            CourseSort::Title => cmp_text(&self.title, &other.title),
            CourseSort::Enrolled => self.students_enrolled.cmp(&other.students_enrolled),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizSort {
    Title,
    PassRate,
}

impl ListRecord for QuizOverview {
    type Filter = ();
    type SortKey = QuizSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.course.as_str()]
    }

    fn matches_filter(&self, _filter: &()) -> bool {
        true
    }

    fn compare_by(&self, other: &Self, key: QuizSort) -> Ordering {
        match key {
            QuizSort::Title => cmp_text(&self.title, &other.title),
            QuizSort::PassRate => self.pass_rate().cmp(&other.pass_rate()),
        }
    }
}

// ========================
// Identity
// ========================

macro_rules! identified_by_id {
    ($($record:ty),* $(,)?) => {
        $(impl Identified for $record {
            fn id(&self) -> u32 {
                self.id
            }
        })*
    };
}

identified_by_id!(
    AdminCourse,
    Mentor,
    Learner,
    MentorApplication,
    DashboardCourse,
    DashboardMentor,
    DashboardStudent,
    MentorCourse,
    MentorStudent,
    Booking,
);

impl Identified for QuizOverview {
    fn id(&self) -> u32 {
        self.quiz_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_listview::{derive_page, ListQuery};

    fn student(id: u32, name: &str, progress: f64) -> DashboardStudent {
        DashboardStudent {
            id,
            name: name.to_string(),
            enrolled_course: "Web Basics".to_string(),
            mentor: "Aline".to_string(),
            progress,
        }
    }

    fn course(id: u32, title: &str, mentor: &str, status: AssignmentStatus) -> DashboardCourse {
        DashboardCourse {
            id,
            title: title.to_string(),
            mentor_id: None,
            mentor_name: mentor.to_string(),
            mentor_status: status,
        }
    }

    #[test]
    fn test_students_above_half_by_progress() {
        let students = vec![
            student(1, "Grace", 40.0),
            student(2, "Aline", 90.0),
            student(3, "Diane", 50.0),
            student(4, "Belise", 75.5),
        ];
        let mut query = ListQuery::new(StudentSort::Progress, 5).descending();
        query.set_filter(Some(ProgressFilter::AboveHalf));
        let page = derive_page(&students, &query);
        let ids: Vec<_> = page.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_dashboard_courses_search_mentor_and_sort_za() {
        let courses = vec![
            course(1, "Digital Marketing", "Aline", AssignmentStatus::Assigned),
            course(2, "agile basics", "Grace", AssignmentStatus::Pending),
            course(3, "Bookkeeping", "aline", AssignmentStatus::Assigned),
            course(4, "Coding", "", AssignmentStatus::NotAssigned),
        ];
        let mut query = ListQuery::new(NameSort::Name, 5).descending();
        query.set_search("ALINE");
        let page = derive_page(&courses, &query);
        let titles: Vec<_> = page.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Digital Marketing", "Bookkeeping"]);

        let mut query = ListQuery::new(NameSort::Name, 5);
        query.set_filter(Some(AssignmentStatus::Assigned));
        let page = derive_page(&courses, &query);
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|c| c.mentor_status == AssignmentStatus::Assigned));
    }

    #[test]
    fn test_nameless_mentor_only_matches_blank_search() {
        let mentors = vec![
            DashboardMentor { id: 1, name: None, status: AccountStatus::Pending, assigned_courses: 0 },
            DashboardMentor { id: 2, name: Some("Claudine".into()), status: AccountStatus::Active, assigned_courses: 2 },
        ];
        let mut query = ListQuery::new(DashboardMentorSort::Name, 5);
        assert_eq!(derive_page(&mentors, &query).total, 2);
        query.set_search("c");
        let page = derive_page(&mentors, &query);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, 2);
    }

    #[test]
    fn test_mentor_courses_by_level_and_students() {
        let course = |id, title: &str, level: CourseLevel, students_enrolled| MentorCourse {
            id,
            title: title.to_string(),
            level,
            duration: String::new(),
            chapters: 4,
            students_enrolled,
        };
        let courses = vec![
            course(1, "Web Basics", CourseLevel::Beginner, 12),
            course(2, "Tailoring", CourseLevel::Advanced, 3),
            course(3, "Web Design", CourseLevel::Beginner, 30),
        ];
        let mut query = ListQuery::new(CourseSort::Enrolled, 5).descending();
        query.set_filter(Some(CourseLevel::Beginner));
        let ids: Vec<_> = derive_page(&courses, &query).items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1]);

        query.set_search("design");
        assert_eq!(derive_page(&courses, &query).total, 1);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        assert_eq!(cmp_text("agile", "Bookkeeping"), Ordering::Less);
        assert_eq!(cmp_text("Zebra", "apple"), Ordering::Greater);
    }
}
