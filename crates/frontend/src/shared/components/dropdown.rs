use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterDropdown component - trigger button plus a collapsible panel
///
/// The trigger shows the facet caption and is highlighted while the facet
/// deviates from its default. A transparent backdrop closes the panel on any
/// click elsewhere on the page.
#[component]
pub fn FilterDropdown(
    /// Trigger caption, e.g. "Source: All"
    #[prop(into)]
    caption: Signal<String>,

    /// Whether the facet currently filters rows (highlights the trigger)
    #[prop(into)]
    is_active: Signal<bool>,

    /// Panel content
    children: Children,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    let trigger_class = move || {
        let mut class = String::from("filter-dropdown__trigger");
        if is_active.get() {
            class.push_str(" filter-dropdown__trigger--active");
        }
        if is_open.get() {
            class.push_str(" filter-dropdown__trigger--open");
        }
        class
    };

    view! {
        <div class="filter-dropdown">
            <button
                class=trigger_class
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span>{caption}</span>
                {icon("chevron-down")}
            </button>

            {move || {
                if is_open.get() {
                    view! {
                        <div
                            class="filter-dropdown__backdrop"
                            on:click=move |_| set_is_open.set(false)
                        ></div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class=move || {
                if is_open.get() {
                    "filter-dropdown__panel"
                } else {
                    "filter-dropdown__panel filter-dropdown__panel--hidden"
                }
            }>{children()}</div>
        </div>
    }
}

/// FilterChip component - removable chip for one active selection
#[component]
pub fn FilterChip(
    /// Chip label
    #[prop(into)]
    label: String,

    /// Leaf count shown after the label, e.g. "Margin Variance (4)"
    #[prop(optional_no_strip)]
    count: Option<usize>,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="filter-chip">
            <span>{label} {count.map(|c| format!(" ({})", c))}</span>
            <button
                class="filter-chip__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </span>
    }
}

/// CheckboxRow component - one selectable row inside a filter panel
#[component]
pub fn CheckboxRow(
    /// Row label
    #[prop(into)]
    label: String,

    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,

    /// Toggle handler
    on_toggle: Callback<()>,

    /// Indent the row (subtype rows)
    #[prop(optional)]
    indented: bool,

    /// Draw a separator under the row (the All/None block)
    #[prop(optional)]
    separated: bool,
) -> impl IntoView {
    let row_class = move || {
        let mut class = String::from("checkbox-row");
        if indented {
            class.push_str(" checkbox-row--indented");
        }
        if separated {
            class.push_str(" checkbox-row--separated");
        }
        class
    };

    view! {
        <label class=row_class>
            <input
                type="checkbox"
                class="checkbox-row__input"
                checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
            <span class="checkbox-row__label">{label}</span>
        </label>
    }
}
