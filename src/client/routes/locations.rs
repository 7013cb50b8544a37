use dioxus::prelude::*;

use crate::{
    app::{
        table::TableRow,
        AppContext,
        view::{locations::LocationsCommand, CharacterLocationsView},
    },
    client::{
        components::{DataTable, FilterChipSelect, Page, SortBySelect, StatusText},
        hooks::use_view,
    },
};

#[component]
pub fn Locations() -> Element {
    let is_mobile = use_context::<AppContext>().layout.is_mobile();
    let (view, snapshot) = use_view(|_| CharacterLocationsView::new());
    let snapshot = snapshot.read();
    let table = &snapshot.table;

    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| (0..table.columns.len()).map(|c| r.cell(c)).collect())
        .collect();

    let sort_view = view.clone();
    let set_sort_view = view.clone();
    let reset_sort_view = view.clone();
    let reset_view = view.clone();

    rsx!(
        Title { "Locations | EveBuddy" }
        Page {
            div { class: "flex flex-wrap items-center gap-2",
                for (filter, chip) in table.chips.iter().cloned().enumerate() {
                    FilterChipSelect {
                        key: "{filter}",
                        chip,
                        on_select: {
                            let view = view.clone();
                            move |value| {
                                view.send(LocationsCommand::Select { filter, value });
                            }
                        },
                    }
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| {
                        reset_view.send(LocationsCommand::ResetSort);
                    },
                    "Reset sort"
                }
            }
            if is_mobile {
                SortBySelect {
                    columns: table.columns.clone(),
                    sort: table.sort.clone(),
                    on_set: move |(column, dir)| {
                        set_sort_view.send(LocationsCommand::SetSort(column, dir));
                    },
                    on_reset: move |_| {
                        reset_sort_view.send(LocationsCommand::ResetSort);
                    },
                }
            }
            DataTable {
                columns: table.columns.clone(),
                sort: table.sort.clone(),
                cells,
                on_sort: move |column| {
                    sort_view.send(LocationsCommand::SortColumn(column));
                },
            }
            if let Some(label) = snapshot.bottom.clone() {
                StatusText { label }
            }
        }
    )
}
