//! Pagination Bar Component
//!
//! Previous/Next buttons around the page-index sequence.

use leptos::prelude::*;

use crate::pagination::PageMarker;

/// Page controls, rendered only when there is more than one page
///
/// `on_select` receives the requested page; out-of-range requests are
/// left to the controller to ignore, as are Previous/Next at the ends.
#[component]
pub fn PaginationBar(
    #[prop(into)] markers: Signal<Vec<PageMarker>>,
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <div class="pagination">
                <button
                    class="pagination-btn"
                    disabled=move || current.get() <= 1
                    on:click=move |_| on_previous.run(())
                >
                    <i class="fi fi-rr-angle-left"></i>
                    "Previous"
                </button>

                {move || markers.get().into_iter().map(move |marker| match marker {
                    PageMarker::Page(page) => view! {
                        <button
                            class=move || if current.get() == page { "pagination-btn active" } else { "pagination-btn" }
                            on:click=move |_| on_select.run(page)
                        >
                            {page}
                        </button>
                    }.into_any(),
                    PageMarker::Ellipsis => view! {
                        <span class="pagination-ellipsis">"..."</span>
                    }.into_any(),
                }).collect_view()}

                <button
                    class="pagination-btn"
                    disabled=move || current.get() >= total.get()
                    on:click=move |_| on_next.run(())
                >
                    "Next"
                    <i class="fi fi-rr-angle-right"></i>
                </button>
            </div>
        </Show>
    }
}
