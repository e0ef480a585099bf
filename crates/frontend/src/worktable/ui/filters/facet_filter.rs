use super::captions::facet_caption;
use crate::shared::components::dropdown::{CheckboxRow, FilterDropdown};
use contracts::facet::FacetSelection;
use leptos::prelude::*;

/// One checkbox entry of a flat facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub key: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// FacetFilter component - dropdown for a single-level facet
///
/// Renders an "All" row, an optional "None" row (request type only) and one
/// checkbox row per option. The toggling rules themselves live in
/// `FacetSelection`; this component only dispatches the clicks.
#[component]
pub fn FacetFilter(
    /// Facet name shown in the trigger caption
    label: &'static str,

    /// Selectable options, in display order
    options: Vec<FacetOption>,

    /// Offer an explicit "None" row that hides every row of this facet
    #[prop(optional)]
    offers_none: bool,

    /// Current facet state
    #[prop(into)]
    selection: Signal<FacetSelection>,

    /// Toggle one option by key
    on_toggle: Callback<String>,

    /// Select the canonical "All"
    on_select_all: Callback<()>,

    /// Select the explicit "None"; required when `offers_none` is set
    #[prop(optional)]
    on_select_none: Option<Callback<()>>,
) -> impl IntoView {
    let caption = Signal::derive(move || facet_caption(label, &selection.get()));
    let is_active = Signal::derive(move || selection.get().is_active());

    view! {
        <FilterDropdown caption=caption is_active=is_active>
            <div class="filter-options">
                <CheckboxRow
                    label="All"
                    checked=Signal::derive(move || selection.get().is_all())
                    on_toggle=on_select_all
                    separated=!offers_none
                />
                {offers_none
                    .then(|| {
                        on_select_none.map(|on_none| {
                            view! {
                                <CheckboxRow
                                    label="None"
                                    checked=Signal::derive(move || selection.get().is_none())
                                    on_toggle=on_none
                                    separated=true
                                />
                            }
                        })
                    })}
                <For
                    each=move || options.clone()
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
                                on_toggle=Callback::new(move |_| on_toggle.run(key.clone()))
                            />
                        }
                    }
                />
            </div>
        </FilterDropdown>
    }
}
