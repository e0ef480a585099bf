use contracts::row::WorkItem;
use leptos::prelude::*;

/// WorkItemRow component - one table row
///
/// Analytic rows show the leaf label over the category label; request rows
/// show the request type over a "Request" caption and leave the end date
/// empty.
#[component]
pub fn WorkItemRow(
    item: WorkItem,
    /// Whether the row checkbox is ticked
    #[prop(into)]
    checked: Signal<bool>,
    /// Row checkbox handler
    on_toggle: Callback<bool>,
) -> impl IntoView {
    let type_cell = if let Some(subtype) = item.subtype_label() {
        view! {
            <div class="cell-main">{subtype}</div>
            <div class="cell-sub">{item.type_label()}</div>
        }
        .into_any()
    } else {
        view! {
            <div class="cell-main">{item.type_label()}</div>
            <div class="cell-sub">"Request"</div>
        }
        .into_any()
    };

    view! {
        <tr class="work-row">
            <td class="work-row__select">
                <input
                    type="checkbox"
                    checked=move || checked.get()
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
            </td>
            <td>{item.location.clone()}</td>
            <td>{type_cell}</td>
            <td>{item.description.clone()}</td>
            <td>{item.source.display_name()}</td>
            <td>
                <div class="cell-main">{item.assigned_display()}</div>
                <div class="cell-sub">{item.role.display_name()}</div>
            </td>
            <td>{item.arrival_display()}</td>
            <td>{item.end_display()}</td>
        </tr>
    }
}
