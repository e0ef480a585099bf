use super::captions::analytic_caption;
use crate::shared::components::dropdown::{CheckboxRow, FilterChip, FilterDropdown};
use crate::shared::icons::icon;
use contracts::catalog::{self, AnalyticSubtype, AnalyticType};
use contracts::filter::TableFilter;
use contracts::selection::ChipKind;
use leptos::prelude::*;

/// Part of the catalog visible under the current search term: a category and
/// the subset of its leaves to render
type VisibleType = (&'static AnalyticType, Vec<&'static AnalyticSubtype>);

/// Categories and leaves whose labels match the search term. A matching
/// category label keeps all of its leaves; otherwise only matching leaves
/// are kept.
fn search_catalog(term: &str) -> Vec<VisibleType> {
    let term = term.trim().to_lowercase();
    catalog::ANALYTIC_TYPES
        .iter()
        .filter_map(|analytic_type| {
            if term.is_empty() || analytic_type.label.to_lowercase().contains(&term) {
                return Some((analytic_type, analytic_type.subtypes.iter().collect()));
            }
            let matching: Vec<&'static AnalyticSubtype> = analytic_type
                .subtypes
                .iter()
                .filter(|st| st.label.to_lowercase().contains(&term))
                .collect();
            if matching.is_empty() {
                None
            } else {
                Some((analytic_type, matching))
            }
        })
        .collect()
}

/// AnalyticTypeFilter component - hierarchical type/subtype dropdown
///
/// Checkbox rows for every category and its leaves, a search box over both
/// levels, and a chip strip for the active selection. All state transitions
/// (promotion, demotion, revert-to-All) are handled by `AnalyticSelection`.
#[component]
pub fn AnalyticTypeFilter(filter: RwSignal<TableFilter>) -> impl IntoView {
    let (search, set_search) = signal(String::new());

    let selection = Memo::new(move |_| filter.with(|f| f.analytics.clone()));
    let caption = Signal::derive(move || analytic_caption(&selection.get()));
    let is_active = Signal::derive(move || selection.get().is_active());

    let visible_types = Memo::new(move |_| search_catalog(&search.get()));
    let chips = Memo::new(move |_| selection.get().chips());

    let toggle_type = move |key: &'static str| {
        filter.update(|f| f.analytics.toggle_type(key));
    };
    let toggle_subtype = move |key: &'static str| {
        filter.update(|f| f.analytics.toggle_subtype(key));
    };

    view! {
        <FilterDropdown caption=caption is_active=is_active>
            <div class="filter-search">
                <span class="filter-search__icon">{icon("search")}</span>
                <input
                    type="text"
                    class="filter-search__input"
                    placeholder="Search types and subtypes..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            {move || {
                let active_chips = chips.get();
                if active_chips.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <div class="filter-chips">
                            <For
                                each=move || active_chips.clone()
                                key=|chip| chip.key.clone()
                                children=move |chip| {
                                    let kind = chip.kind;
                                    let key = chip.key.clone();
                                    view! {
                                        <FilterChip
                                            label=chip.label.clone()
                                            count=chip.leaf_count
                                            on_remove=Callback::new(move |_| {
                                                filter.update(|f| match kind {
                                                    ChipKind::Type => f.analytics.remove_type(&key),
                                                    ChipKind::Subtype => {
                                                        f.analytics.remove_subtype(&key)
                                                    }
                                                });
                                            })
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            <div class="filter-options filter-options--scrollable">
                <CheckboxRow
                    label="All"
                    checked=Signal::derive(move || selection.get().is_all())
                    on_toggle=Callback::new(move |_| filter.update(|f| f.analytics.select_all()))
                />
                <CheckboxRow
                    label="None"
                    checked=Signal::derive(move || selection.get().is_none())
                    on_toggle=Callback::new(move |_| filter.update(|f| f.analytics.select_none()))
                    separated=true
                />
                <For
                    each=move || visible_types.get()
                    key=|(analytic_type, leaves)| (analytic_type.key, leaves.len())
                    children=move |(analytic_type, leaves)| {
                        let type_key = analytic_type.key;
                        view! {
                            <CheckboxRow
                                label=analytic_type.label
                                checked=Signal::derive(move || {
                                    selection.get().types.contains(type_key)
                                })
                                on_toggle=Callback::new(move |_| toggle_type(type_key))
                            />
                            <For
                                each=move || leaves.clone()
                                key=|subtype| subtype.key
                                children=move |subtype| {
                                    let subtype_key = subtype.key;
                                    view! {
                                        <CheckboxRow
                                            label=subtype.label
                                            checked=Signal::derive(move || {
                                                selection.get().subtypes.contains(subtype_key)
                                            })
                                            on_toggle=Callback::new(move |_| {
                                                toggle_subtype(subtype_key)
                                            })
                                            indented=true
                                        />
                                    }
                                }
                            />
                        }
                    }
                />
            </div>
        </FilterDropdown>
    }
}
