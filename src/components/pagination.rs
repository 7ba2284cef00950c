//! Pagination Component

use leptos::prelude::*;
use leptos_listview::pagination_window;

/// Prev / numbered / next buttons. Renders nothing for a single page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    move || {
        pagination_window(page.get(), page_count.get()).map(|window| {
            let current = window.current;
            view! {
                <nav class="pagination">
                    <button
                        class="page-btn"
                        disabled=!window.has_prev
                        on:click=move |_| on_page.run(current - 1)
                    >
                        "Prev"
                    </button>
                    {window
                        .pages
                        .into_iter()
                        .map(|number| {
                            let class = if number == current { "page-btn active" } else { "page-btn" };
                            view! {
                                <button class=class on:click=move |_| on_page.run(number)>
                                    {number}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="page-btn"
                        disabled=!window.has_next
                        on:click=move |_| on_page.run(current + 1)
                    >
                        "Next"
                    </button>
                </nav>
            }
        })
    }
}
