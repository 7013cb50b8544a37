use dioxus::prelude::*;

use crate::{
    app::view::{
        assets::AssetsCommand,
        label::format_count,
        CharacterAssetsView,
    },
    client::{
        components::{LocationTree, Page, StatusText},
        hooks::use_view,
    },
};

#[component]
pub fn Assets() -> Element {
    let (view, snapshot) = use_view(|_| CharacterAssetsView::new());
    let snapshot = snapshot.read();

    let nodes: Vec<_> = snapshot
        .tree
        .all()
        .into_iter()
        .map(|(depth, node)| (depth, node.clone()))
        .collect();
    let path = snapshot
        .path
        .iter()
        .map(|n| n.name.as_str())
        .collect::<Vec<_>>()
        .join(" > ");
    let rows: Vec<(i64, String, String, String)> = snapshot
        .assets
        .iter()
        .map(|a| {
            (
                a.item_id.0,
                a.display_name_with_type(),
                format_count(i64::from(a.quantity)),
                a.eve_type
                    .as_ref()
                    .map(|t| t.group.name.clone())
                    .unwrap_or_default(),
            )
        })
        .collect();

    let select_view = view.clone();
    let clear_view = view.clone();

    rsx!(
        Title { "Assets | EveBuddy" }
        Page {
            StatusText { label: snapshot.top.clone() }
            div { class: "flex gap-4",
                div { class: "w-96 shrink-0 overflow-y-auto",
                    LocationTree {
                        nodes,
                        selected: snapshot.selected,
                        on_select: move |uid| {
                            select_view.send(AssetsCommand::SelectNode(uid));
                        },
                    }
                }
                div { class: "flex flex-col grow gap-2",
                    div { class: "flex items-center gap-2",
                        p { class: "text-sm", "{path}" }
                        if snapshot.selected.is_some() {
                            button {
                                class: "btn btn-ghost btn-xs",
                                onclick: move |_| {
                                    clear_view.send(AssetsCommand::ClearSelection);
                                },
                                "Clear"
                            }
                        }
                    }
                    table { class: "table table-sm",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Quantity" }
                                th { "Group" }
                            }
                        }
                        tbody {
                            for (item_id, name, quantity, group) in rows {
                                tr {
                                    key: "{item_id}",
                                    class: "hover cursor-pointer",
                                    ondoubleclick: {
                                        let view = view.clone();
                                        move |_| {
                                            view.send(AssetsCommand::SelectContainer(item_id));
                                        }
                                    },
                                    td { "{name}" }
                                    td { "{quantity}" }
                                    td { "{group}" }
                                }
                            }
                        }
                    }
                    p { class: "text-sm", "{snapshot.bottom}" }
                }
            }
        }
    )
}
