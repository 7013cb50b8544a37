use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    app::{
        table::TableRow,
        view::{clones::ClonesCommand, CloneSearchView},
        AppContext,
    },
    client::{
        components::{DataTable, FilterChipSelect, Page, SortBySelect, StatusText},
        hooks::use_view,
    },
    model::{EveSolarSystem, RoutePreference, SolarSystemId},
};

#[component]
pub fn Clones() -> Element {
    let ctx = use_context::<AppContext>();
    let is_mobile = ctx.layout.is_mobile();
    let (view, snapshot) = use_view(|ctx: &AppContext| CloneSearchView::new(ctx.route_preference));

    let universe = ctx.universe.clone();
    let systems = use_resource(move || {
        let universe = universe.clone();
        async move {
            universe.list_solar_systems().await.unwrap_or_else(|err| {
                tracing::error!("Failed to load solar systems: {}", err);
                Vec::new()
            })
        }
    });
    let systems: Vec<EveSolarSystem> = systems.read().clone().unwrap_or_default();

    let snapshot = snapshot.read();
    let table = &snapshot.table;
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| (0..table.columns.len()).map(|c| r.cell(c)).collect())
        .collect();
    let origin_id = snapshot.origin.as_ref().map(|s| s.id);

    let origin_view = view.clone();
    let preference_view = view.clone();
    let sort_view = view.clone();
    let set_sort_view = view.clone();
    let reset_sort_view = view.clone();
    let origin_systems = systems.clone();

    rsx!(
        Title { "Clones | EveBuddy" }
        Page {
            StatusText { label: snapshot.top.clone() }
            div { class: "flex flex-wrap items-center gap-2",
                select {
                    class: "select select-sm w-48",
                    onchange: move |evt| {
                        let origin = evt
                            .value()
                            .parse::<i32>()
                            .ok()
                            .and_then(|id| {
                                origin_systems.iter().find(|s| s.id == SolarSystemId(id)).cloned()
                            });
                        origin_view.send(ClonesCommand::SetOrigin(origin));
                    },
                    option { value: "", selected: origin_id.is_none(), "Origin" }
                    for system in systems {
                        option {
                            value: "{system.id}",
                            selected: origin_id == Some(system.id),
                            "{system.name}"
                        }
                    }
                }
                select {
                    class: "select select-sm w-32",
                    onchange: move |evt| {
                        if let Ok(preference) = evt.value().parse::<RoutePreference>() {
                            preference_view.send(ClonesCommand::SetRoutePreference(preference));
                        }
                    },
                    for preference in [
                        RoutePreference::Shortest,
                        RoutePreference::Secure,
                        RoutePreference::Insecure,
                    ] {
                        option {
                            value: "{preference}",
                            selected: snapshot.preference == preference,
                            "{preference}"
                        }
                    }
                }
                for (filter, chip) in table.chips.iter().cloned().enumerate() {
                    FilterChipSelect {
                        key: "{filter}",
                        chip,
                        on_select: {
                            let view = view.clone();
                            move |value| {
                                view.send(ClonesCommand::Select { filter, value });
                            }
                        },
                    }
                }
            }
            if is_mobile {
                SortBySelect {
                    columns: table.columns.clone(),
                    sort: table.sort.clone(),
                    on_set: move |(column, dir)| {
                        set_sort_view.send(ClonesCommand::SetSort(column, dir));
                    },
                    on_reset: move |_| {
                        reset_sort_view.send(ClonesCommand::ResetSort);
                    },
                }
            }
            DataTable {
                columns: table.columns.clone(),
                sort: table.sort.clone(),
                cells,
                on_sort: move |column| {
                    sort_view.send(ClonesCommand::SortColumn(column));
                },
            }
        }
    )
}
