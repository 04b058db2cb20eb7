use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href=routes::LOGIN attr:class="btn btn-primary">"Go Home"</A>
        </div>
    }
}
