//! Leptos List View Utilities
//!
//! Client-side search / filter / sort / paginate over a fetched collection.
//! The derivation is pure; `ListSignals` wires it into Leptos reactivity.

mod confirm;
mod optimistic;
mod pagination;
mod query;

use leptos::prelude::*;

pub use confirm::Confirmation;
pub use optimistic::{remove_record, replace_record, Identified, Optimistic};
pub use pagination::{clamp_page, page_bounds, page_count, pagination_window, PaginationWindow};
pub use query::{derive_page, filter_records, matches_search, ListPage, ListQuery, ListRecord, SortDirection};

/// List state signals for one view
pub struct ListSignals<F: Send + Sync + 'static, S: Send + Sync + 'static> {
    /// Search, filter, sort and page in one signal
    pub query: RwSignal<ListQuery<F, S>>,
}

impl<F: Send + Sync + 'static, S: Send + Sync + 'static> Clone for ListSignals<F, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static, S: Send + Sync + 'static> Copy for ListSignals<F, S> {}

/// Create list signals starting on page 1, ascending by `sort`
pub fn create_list_signals<F, S>(sort: S, page_size: usize) -> ListSignals<F, S>
where
    F: Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    ListSignals {
        query: RwSignal::new(ListQuery::new(sort, page_size)),
    }
}

impl<F, S> ListSignals<F, S>
where
    F: Clone + PartialEq + Send + Sync + 'static,
    S: Copy + PartialEq + Send + Sync + 'static,
{
    pub fn search(&self) -> String {
        self.query.with(|q| q.search.clone())
    }

    pub fn set_search(&self, search: String) {
        self.query.update(|q| q.set_search(search));
    }

    pub fn filter(&self) -> Option<F> {
        self.query.with(|q| q.filter.clone())
    }

    pub fn set_filter(&self, filter: Option<F>) {
        self.query.update(|q| q.set_filter(filter));
    }

    pub fn sort(&self) -> (S, SortDirection) {
        self.query.with(|q| (q.sort, q.direction))
    }

    /// Select a sort column; picking the active column again flips direction.
    pub fn sort_by(&self, key: S) {
        self.query.update(|q| {
            let direction = if q.sort == key {
                q.direction.toggled()
            } else {
                SortDirection::Ascending
            };
            q.set_sort(key, direction);
        });
    }

    pub fn set_sort(&self, key: S, direction: SortDirection) {
        self.query.update(|q| q.set_sort(key, direction));
    }

    pub fn go_to_page(&self, page: usize) {
        self.query.update(|q| q.page = page.max(1));
    }

    /// Derived page, recomputed when the records or the query change.
    pub fn page_of<T>(
        &self,
        records: impl Fn() -> Vec<T> + Send + Sync + 'static,
    ) -> Memo<ListPage<T>>
    where
        T: ListRecord<Filter = F, SortKey = S> + Clone + PartialEq + Send + Sync + 'static,
    {
        let query = self.query;
        Memo::new(move |_| {
            let records = records();
            query.with(|q| derive_page(&records, q))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Column {
        Name,
        Joined,
    }

    #[test]
    fn test_list_signals_start_on_first_page_ascending() {
        let owner = Owner::new();
        owner.set();
        let list = create_list_signals::<(), Column>(Column::Name, 5);
        assert_eq!(list.sort(), (Column::Name, SortDirection::Ascending));
        assert_eq!(list.query.with(|q| q.page), 1);

        list.go_to_page(3);
        list.set_search("ada".to_string());
        assert_eq!(list.query.with(|q| q.page), 1);

        list.sort_by(Column::Name);
        assert_eq!(list.sort(), (Column::Name, SortDirection::Descending));
        list.sort_by(Column::Joined);
        assert_eq!(list.sort(), (Column::Joined, SortDirection::Ascending));
    }
}
