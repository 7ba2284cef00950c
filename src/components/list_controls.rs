//! List Controls
//!
//! Search box, filter dropdown and sortable column header shared by
//! every table view.

use leptos::prelude::*;
use leptos_listview::SortDirection;

#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, default = "Search...".to_string())] placeholder: String,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Dropdown over `(key, label)` options; the empty key means "All".
#[component]
pub fn FilterSelect(
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] selected: Signal<&'static str>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, default = "All".to_string())] all_label: String,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || selected.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{all_label}</option>
            {options
                .into_iter()
                .map(|(key, label)| view! { <option value=key>{label}</option> })
                .collect_view()}
        </select>
    }
}

/// Column header that toggles sort on click and shows the direction
#[component]
pub fn SortHeader(
    #[prop(into)] label: String,
    #[prop(into)] active: Signal<Option<SortDirection>>,
    #[prop(into)] on_sort: Callback<()>,
) -> impl IntoView {
    let arrow = move || match active.get() {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    };

    view! {
        <th class="sortable" on:click=move |_| on_sort.run(())>
            {label}
            <span class="sort-arrow">{arrow}</span>
        </th>
    }
}
