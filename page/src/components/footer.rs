use leptos::prelude::*;

/// Copyright line.
#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer">
            {format!("© {} US Google Ads Specialists. Not affiliated with Google LLC.", year)}
        </footer>
    }
}
