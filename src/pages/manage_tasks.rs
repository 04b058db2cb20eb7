//! My Tasks Page

use leptos::prelude::*;

use crate::components::TaskBoardView;

#[component]
pub fn ManageTasksPage() -> impl IntoView {
    view! {
        <div class="page manage-page">
            <TaskBoardView heading="My Tasks" />
        </div>
    }
}
