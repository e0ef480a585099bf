use crate::worktable::ui::page::WorkTablePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    log::info!("mounting work queue table");

    view! {
        <div class="app-shell">
            <WorkTablePage />
        </div>
    }
}
