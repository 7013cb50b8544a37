use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaSort, FaSortDown, FaSortUp};
use dioxus_free_icons::Icon;

use crate::app::table::{ColumnDef, SortDir};

/// Table with sortable column headers.
///
/// Cells are rendered as text, rows by index into `cells`.
#[component]
pub fn DataTable(
    columns: Vec<ColumnDef>,
    sort: Vec<SortDir>,
    cells: Vec<Vec<String>>,
    on_sort: EventHandler<usize>,
    on_row_click: Option<EventHandler<usize>>,
) -> Element {
    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-sm table-pin-rows",
                thead {
                    tr {
                        for (idx, column) in columns.iter().enumerate() {
                            th {
                                key: "{idx}",
                                style: column
                                    .width
                                    .map(|w| format!("width: {}px", w))
                                    .unwrap_or_default(),
                                if column.sortable {
                                    button {
                                        class: "flex items-center gap-1",
                                        onclick: move |_| on_sort.call(idx),
                                        "{column.label}"
                                        SortIcon { dir: sort.get(idx).copied().unwrap_or_default() }
                                    }
                                } else {
                                    "{column.label}"
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (row_idx, row) in cells.iter().enumerate() {
                        tr {
                            key: "{row_idx}",
                            class: if on_row_click.is_some() { "hover cursor-pointer" } else { "" },
                            onclick: move |_| {
                                if let Some(handler) = on_row_click {
                                    handler.call(row_idx);
                                }
                            },
                            for cell in row.iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn SortIcon(dir: SortDir) -> Element {
    match dir {
        SortDir::Asc => rsx!(Icon { width: 12, height: 12, icon: FaSortUp }),
        SortDir::Desc => rsx!(Icon { width: 12, height: 12, icon: FaSortDown }),
        SortDir::Off => rsx!(Icon { width: 12, height: 12, icon: FaSort, class: "opacity-30" }),
        SortDir::None => rsx!(),
    }
}

/// Compact sort control for the mobile layout, where headers are not clickable.
#[component]
pub fn SortBySelect(
    columns: Vec<ColumnDef>,
    sort: Vec<SortDir>,
    on_set: EventHandler<(usize, SortDir)>,
    on_reset: EventHandler<()>,
) -> Element {
    let current = sort
        .iter()
        .position(|d| matches!(d, SortDir::Asc | SortDir::Desc))
        .map(|idx| format!("{}-{}", idx, if sort[idx] == SortDir::Desc { "desc" } else { "asc" }))
        .unwrap_or_default();
    let options: Vec<(String, String)> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.sortable)
        .flat_map(|(idx, c)| {
            [
                (format!("{}-asc", idx), format!("{} ascending", c.label)),
                (format!("{}-desc", idx), format!("{} descending", c.label)),
            ]
        })
        .collect();

    rsx!(
        select {
            class: "select select-sm w-48",
            onchange: move |evt| {
                let value = evt.value();
                let Some((idx, dir)) = value.split_once('-') else {
                    on_reset.call(());
                    return;
                };
                let Ok(idx) = idx.parse::<usize>() else {
                    return;
                };
                let dir = if dir == "desc" { SortDir::Desc } else { SortDir::Asc };
                on_set.call((idx, dir));
            },
            option { value: "", selected: current.is_empty(), "Sort by" }
            for (value, label) in options {
                option {
                    selected: value == current,
                    value: "{value}",
                    "{label}"
                }
            }
        }
    )
}
