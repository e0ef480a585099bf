use crate::shared::components::blank_state::BlankState;
use crate::worktable::ui::filters::FilterBar;
use crate::worktable::ui::row::WorkItemRow;
use contracts::filter::TableFilter;
use contracts::mock_data;
use leptos::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

/// WorkTablePage component - the "Available Analytics and Requests" table
///
/// Owns the dataset, the combined filter state and the row-checkbox
/// selection. Everything below the header re-renders from the filtered memo.
#[component]
pub fn WorkTablePage() -> impl IntoView {
    let all_items = StoredValue::new(mock_data::generate_all_data());
    let filter = RwSignal::new(TableFilter::default());
    let (selected, set_selected) = signal(HashSet::<Uuid>::new());

    let visible = Memo::new(move |_| {
        filter.with(|f| {
            all_items.with_value(|items| f.apply(items).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    let toggle_select = move |id: Uuid, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    view! {
        <div class="worktable">
            <div class="worktable__header">
                <h1 class="worktable__title">"Available Analytics and Requests"</h1>
                <FilterBar filter=filter />
            </div>

            <div class="worktable__body">
                <table class="worktable__table">
                    <thead>
                        <tr>
                            <th class="worktable__col-select"></th>
                            <th class="worktable__col-location">"Location"</th>
                            <th class="worktable__col-type">"Type"</th>
                            <th>"Description"</th>
                            <th class="worktable__col-source">"Source"</th>
                            <th class="worktable__col-assigned">"Assigned to & Role"</th>
                            <th class="worktable__col-date">"Arrival date"</th>
                            <th class="worktable__col-date">"End date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|item| item.id
                            children=move |item| {
                                let id = item.id;
                                view! {
                                    <WorkItemRow
                                        item=item
                                        checked=Signal::derive(move || {
                                            selected.get().contains(&id)
                                        })
                                        on_toggle=Callback::new(move |checked| {
                                            toggle_select(id, checked)
                                        })
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>

                {move || {
                    if visible.get().is_empty() {
                        view! { <BlankState /> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
