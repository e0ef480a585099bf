pub mod analytic_filter;
pub mod assignee_filter;
pub mod captions;
pub mod facet_filter;

use self::analytic_filter::AnalyticTypeFilter;
use self::assignee_filter::AssigneeFilter;
use self::facet_filter::{FacetFilter, FacetOption};
use contracts::enums::{RequestType, Role, Source};
use contracts::filter::TableFilter;
use leptos::prelude::*;

fn request_type_options() -> Vec<FacetOption> {
    RequestType::all()
        .iter()
        .map(|t| FacetOption::new(t.code(), t.display_name()))
        .collect()
}

fn source_options() -> Vec<FacetOption> {
    Source::all()
        .iter()
        .map(|s| FacetOption::new(s.code(), s.display_name()))
        .collect()
}

fn role_options() -> Vec<FacetOption> {
    Role::all()
        .iter()
        .map(|r| FacetOption::new(r.code(), r.display_name()))
        .collect()
}

fn codes(options: &[FacetOption]) -> Vec<String> {
    options.iter().map(|o| o.key.clone()).collect()
}

/// FilterBar component - the five facet dropdowns plus "Clear filters"
#[component]
pub fn FilterBar(filter: RwSignal<TableFilter>) -> impl IntoView {
    let request_options = request_type_options();
    let request_universe = codes(&request_options);
    let source_opts = source_options();
    let source_universe = codes(&source_opts);
    let role_opts = role_options();
    let role_universe = codes(&role_opts);

    let is_active = Memo::new(move |_| filter.with(|f| f.is_active()));

    let clear_filters = move |_| {
        log::debug!("resetting all table filters to their defaults");
        filter.update(|f| f.clear());
    };

    view! {
        <div class="filter-bar">
            <FacetFilter
                label="Request type"
                options=request_options
                offers_none=true
                selection=Signal::derive(move || filter.with(|f| f.request_types.clone()))
                on_toggle=Callback::new(move |key: String| {
                    filter.update(|f| f.request_types.toggle(&key, &request_universe));
                })
                on_select_all=Callback::new(move |_| {
                    filter.update(|f| f.request_types.select_all());
                })
                on_select_none=Callback::new(move |_| {
                    filter.update(|f| f.request_types.select_none());
                })
            />
            <AnalyticTypeFilter filter=filter />
            <FacetFilter
                label="Source"
                options=source_opts
                selection=Signal::derive(move || filter.with(|f| f.sources.clone()))
                on_toggle=Callback::new(move |key: String| {
                    filter.update(|f| f.sources.toggle(&key, &source_universe));
                })
                on_select_all=Callback::new(move |_| {
                    filter.update(|f| f.sources.select_all());
                })
            />
            <FacetFilter
                label="Role"
                options=role_opts
                selection=Signal::derive(move || filter.with(|f| f.roles.clone()))
                on_toggle=Callback::new(move |key: String| {
                    filter.update(|f| f.roles.toggle(&key, &role_universe));
                })
                on_select_all=Callback::new(move |_| {
                    filter.update(|f| f.roles.select_all());
                })
            />
            <AssigneeFilter filter=filter />
            <button
                class=move || {
                    if is_active.get() {
                        "filter-bar__clear filter-bar__clear--enabled"
                    } else {
                        "filter-bar__clear"
                    }
                }
                disabled=move || !is_active.get()
                on:click=clear_filters
            >
                "Clear filters"
            </button>
        </div>
    }
}
