//! Filter Tabs Component
//!
//! All / Completed / Pending switch above the task grid.

use leptos::prelude::*;

use crate::models::TaskFilter;

/// Filter tab buttons
#[component]
pub fn FilterTabs(
    current: Memo<TaskFilter>,
    on_change: impl Fn(TaskFilter) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="filter-tabs">
            {TaskFilter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_active = move || current.get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                        on:click=move |_| on_change(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
