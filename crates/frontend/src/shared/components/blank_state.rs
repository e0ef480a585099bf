use crate::shared::icons::icon;
use leptos::prelude::*;

/// Empty-state placeholder shown when no rows pass the current filters
#[component]
pub fn BlankState() -> impl IntoView {
    view! {
        <div class="blank-state">
            <div class="blank-state__icon">{icon("search-large")}</div>
            <h3 class="blank-state__title">"No results found"</h3>
            <p class="blank-state__hint">
                "Try adjusting your search or filters to find matching results."
            </p>
        </div>
    }
}
