use super::captions::facet_caption;
use super::facet_filter::FacetOption;
use crate::shared::components::dropdown::{CheckboxRow, FilterChip, FilterDropdown};
use crate::shared::icons::icon;
use contracts::filter::TableFilter;
use contracts::mock_data;
use contracts::row::assignee_key;
use leptos::prelude::*;

/// Engineer roster plus the "Unassigned" bucket, keyed the way rows key
/// their assignee
pub fn assignee_options() -> Vec<FacetOption> {
    let mut options: Vec<FacetOption> = mock_data::ENGINEERS
        .iter()
        .map(|name| FacetOption::new(assignee_key(Some(name)), *name))
        .collect();
    options.push(FacetOption::new("unassigned", "Unassigned"));
    options
}

/// AssigneeFilter component - searchable engineer list with a chip box
///
/// Unlike the plain facet dropdowns this one shows the current picks as
/// chips above the list and offers a search box, since the roster is long.
#[component]
pub fn AssigneeFilter(filter: RwSignal<TableFilter>) -> impl IntoView {
    let (search, set_search) = signal(String::new());

    let options = StoredValue::new(assignee_options());
    let universe = StoredValue::new(
        assignee_options()
            .into_iter()
            .map(|o| o.key)
            .collect::<Vec<String>>(),
    );

    let selection = Memo::new(move |_| filter.with(|f| f.assignees.clone()));
    let caption = Signal::derive(move || facet_caption("Assigned to", &selection.get()));
    let is_active = Signal::derive(move || selection.get().is_active());

    let visible_options = Memo::new(move |_| {
        let term = search.get().trim().to_lowercase();
        options.with_value(|all| {
            all.iter()
                .filter(|o| term.is_empty() || o.label.to_lowercase().contains(&term))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    // Picked keys with their display labels, for the chip box
    let picked = Memo::new(move |_| {
        let sel = selection.get();
        options.with_value(|all| {
            all.iter()
                .filter(|o| sel.is_active() && sel.contains(&o.key))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let toggle = move |key: String| {
        filter.update(|f| universe.with_value(|u| f.assignees.toggle(&key, u)));
    };

    view! {
        <FilterDropdown caption=caption is_active=is_active>
            <div class="filter-search">
                <span class="filter-search__icon">{icon("search")}</span>
                <input
                    type="text"
                    class="filter-search__input"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <div class="filter-chip-box">
                {move || {
                    let current = picked.get();
                    if current.is_empty() {
                        view! {
                            <span class="filter-chip filter-chip--muted">
                                "All items selected"
                            </span>
                        }
                        .into_any()
                    } else {
                        view! {
                            <For
                                each=move || current.clone()
                                key=|option| option.key.clone()
                                children=move |option| {
                                    let key = option.key.clone();
                                    view! {
                                        <FilterChip
                                            label=option.label.clone()
                                            on_remove=Callback::new(move |_| toggle(key.clone()))
                                        />
                                    }
                                }
                            />
                        }
                        .into_any()
                    }
                }}
            </div>

            <div class="filter-options filter-options--scrollable">
                <CheckboxRow
                    label="All"
                    checked=Signal::derive(move || selection.get().is_all())
                    on_toggle=Callback::new(move |_| filter.update(|f| f.assignees.select_all()))
                    separated=true
                />
                <For
                    each=move || visible_options.get()
                    key=|option| option.key.clone()
                    children=move |option| {
                        let key = option.key.clone();
                        let checked_key = option.key.clone();
                        view! {
                            <CheckboxRow
                                label=option.label.clone()
                                checked=Signal::derive(move || {
                                    selection.get().contains(&checked_key)
                                })
                                on_toggle=Callback::new(move |_| toggle(key.clone()))
                            />
                        }
                    }
                />
            </div>
        </FilterDropdown>
    }
}
