//! List Query Derivation
//!
//! Search, categorical filter, sort and page window over an already
//! fetched slice of records.

use std::cmp::Ordering;

use crate::pagination::{clamp_page, page_bounds, page_count};

/// Sort direction for the active sort key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A record that can be shown in a filtered list view.
pub trait ListRecord {
    /// Categorical filter (status, level, ...)
    type Filter: Clone + PartialEq;
    /// Sortable column
    type SortKey: Copy + PartialEq;

    /// Display fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    fn matches_filter(&self, filter: &Self::Filter) -> bool;

    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Per-view list state. Never persisted; recreated on navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery<F, S> {
    pub search: String,
    pub filter: Option<F>,
    pub sort: S,
    pub direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl<F, S> ListQuery<F, S> {
    pub fn new(sort: S, page_size: usize) -> Self {
        Self {
            search: String::new(),
            filter: None,
            sort,
            direction: SortDirection::Ascending,
            page: 1,
            page_size,
        }
    }

    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    /// Replace the search text; the result set changes so paging restarts.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: Option<F>) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: S, direction: SortDirection) {
        self.sort = sort;
        self.direction = direction;
    }
}

/// The visible window of a derived list
#[derive(Clone, Debug, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Clamped into `[1, page_count]` (1 when nothing matched)
    pub page: usize,
    pub page_count: usize,
    /// Number of records left after search and filter
    pub total: usize,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_count: 0,
            total: 0,
        }
    }
}

/// Case-insensitive substring match on any search field.
/// Only the empty search matches everything; spaces are part of the needle.
pub fn matches_search<T: ListRecord>(record: &T, search: &str) -> bool {
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Search and filter, in input order.
pub fn filter_records<'a, T: ListRecord>(
    records: &'a [T],
    query: &ListQuery<T::Filter, T::SortKey>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_search(*record, &query.search))
        .filter(|record| match &query.filter {
            Some(filter) => record.matches_filter(filter),
            None => true,
        })
        .collect()
}

/// Search, filter, sort, then slice the current page.
pub fn derive_page<T: ListRecord + Clone>(
    records: &[T],
    query: &ListQuery<T::Filter, T::SortKey>,
) -> ListPage<T> {
    let mut matched = filter_records(records, query);
    // sort_by is stable, so equal keys keep backend order
    matched.sort_by(|a, b| query.direction.apply(a.compare_by(b, query.sort)));

    let total = matched.len();
    let page_count = page_count(total, query.page_size);
    let page = clamp_page(query.page, page_count);
    let window = page_bounds(page, query.page_size, total);

    ListPage {
        items: matched[window].iter().map(|record| (*record).clone()).collect(),
        page,
        page_count,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Mentor {
        id: u32,
        name: String,
        email: String,
        active: bool,
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum MentorSort {
        Name,
        Id,
    }

    impl ListRecord for Mentor {
        type Filter = bool;
        type SortKey = MentorSort;

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.email.as_str()]
        }

        fn matches_filter(&self, filter: &bool) -> bool {
            self.active == *filter
        }

        fn compare_by(&self, other: &Self, key: MentorSort) -> Ordering {
            match key {
                MentorSort::Name => self.name.cmp(&other.name),
                MentorSort::Id => self.id.cmp(&other.id),
            }
        }
    }

    fn mentor(id: u32, name: &str, active: bool) -> Mentor {
        Mentor {
            id,
            name: name.to_string(),
            email: format!("{}@shecan.rw", name.to_lowercase()),
            active,
        }
    }

    fn mentors() -> Vec<Mentor> {
        vec![
            mentor(1, "Aline", true),
            mentor(2, "Diane", false),
            mentor(3, "Claudine", true),
            mentor(4, "Alice", true),
            mentor(5, "Grace", false),
            mentor(6, "Belise", true),
            mentor(7, "Annette", true),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_subset() {
        let records = mentors();
        for search in ["al", "AL", "ine", "shecan", "zzz", "", " al", "al ", "  ", "ice "] {
            let mut query = ListQuery::<bool, MentorSort>::new(MentorSort::Id, 100);
            query.set_search(search);
            let found = filter_records(&records, &query);
            let needle = search.to_lowercase();
            for record in &found {
                assert!(records.contains(record));
                assert!(
                    record.name.to_lowercase().contains(&needle)
                        || record.email.to_lowercase().contains(&needle)
                );
            }
            let expected = records
                .iter()
                .filter(|m| m.name.to_lowercase().contains(&needle) || m.email.to_lowercase().contains(&needle))
                .count();
            assert_eq!(found.len(), expected, "search {:?}", search);
        }
    }

    #[test]
    fn test_padded_search_is_not_trimmed() {
        let records = mentors();
        let mut query = ListQuery::<bool, MentorSort>::new(MentorSort::Id, 100);
        query.set_search(" al");
        assert!(filter_records(&records, &query).is_empty());
        query.set_search("al");
        assert!(!filter_records(&records, &query).is_empty());
    }

    #[test]
    fn test_search_matches_second_field() {
        let mut records = mentors();
        records[1].email = "mentor.lead@example.org".to_string();
        let mut query = ListQuery::<bool, MentorSort>::new(MentorSort::Id, 10);
        query.set_search("LEAD");
        let found = filter_records(&records, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_filter_then_sort() {
        let mut query = ListQuery::new(MentorSort::Name, 10);
        query.set_filter(Some(false));
        let page = derive_page(&mentors(), &query);
        let names: Vec<_> = page.items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Diane", "Grace"]);
    }

    #[test]
    fn test_descending_sort() {
        let query = ListQuery::<bool, _>::new(MentorSort::Name, 3).descending();
        let page = derive_page(&mentors(), &query);
        let names: Vec<_> = page.items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Grace", "Diane", "Claudine"]);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.total, 7);
    }

    #[test]
    fn test_page_window_and_clamp() {
        let mut query = ListQuery::<bool, _>::new(MentorSort::Id, 3);
        query.page = 3;
        let page = derive_page(&mentors(), &query);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 7);

        query.page = 42;
        let page = derive_page(&mentors(), &query);
        assert_eq!(page.page, 3);

        query.page = 0;
        let page = derive_page(&mentors(), &query);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let mut query = ListQuery::<bool, _>::new(MentorSort::Id, 5);
        query.page = 4;
        query.set_search("nobody");
        let page = derive_page(&mentors(), &query);
        assert!(page.is_empty());
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 0);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut query = ListQuery::<bool, _>::new(MentorSort::Id, 2);
        query.page = 3;
        query.set_search("a");
        assert_eq!(query.page, 1);
        query.page = 2;
        query.set_filter(Some(true));
        assert_eq!(query.page, 1);
    }
}
