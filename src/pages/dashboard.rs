//! Dashboard Page

use leptos::prelude::*;

use crate::components::{SummaryCards, TaskBoardView};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page dashboard-page">
            <h1>"Dashboard"</h1>
            <SummaryCards />
            <TaskBoardView heading="Your Tasks" />
        </div>
    }
}
