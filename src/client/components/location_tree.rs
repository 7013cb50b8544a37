use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::{
    app::asset::{LocationNode, LocationNodeUid, LocationNodeVariant},
    model::SolarSystemSecurityType,
};

/// Location tree rendered as an indented list.
///
/// `nodes` holds the depth and node of every tree node in depth-first order. Locations
/// start collapsed, all other nodes start expanded.
#[component]
pub fn LocationTree(
    nodes: Vec<(usize, LocationNode)>,
    selected: Option<LocationNodeUid>,
    on_select: EventHandler<LocationNodeUid>,
) -> Element {
    let mut expanded = use_signal(HashSet::<LocationNodeUid>::new);

    let mut visible = Vec::with_capacity(nodes.len());
    let mut hidden_below: Option<usize> = None;
    for (idx, (depth, node)) in nodes.iter().enumerate() {
        if hidden_below.is_some_and(|d| *depth > d) {
            continue;
        }
        hidden_below = None;
        let has_children = nodes.get(idx + 1).is_some_and(|(d, _)| d > depth);
        let is_open = node.variant != LocationNodeVariant::Location
            || expanded.read().contains(&node.uid());
        if has_children && !is_open {
            hidden_below = Some(*depth);
        }
        visible.push((*depth, node.uid(), node.clone(), has_children, is_open));
    }

    rsx!(
        ul { class: "menu menu-sm w-full",
            for (depth, uid, node, has_children, is_open) in visible {
                li {
                    key: "{uid}",
                    a {
                        class: if selected == Some(uid) { "menu-active" } else { "" },
                        style: format!("padding-left: {}rem", depth as f32 * 1.25 + 0.5),
                        onclick: move |_| on_select.call(uid),
                        if has_children && node.variant == LocationNodeVariant::Location {
                            span {
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    let mut set = expanded.write();
                                    if !set.remove(&uid) {
                                        set.insert(uid);
                                    }
                                },
                                if is_open {
                                    Icon { width: 10, height: 10, icon: FaChevronDown }
                                } else {
                                    Icon { width: 10, height: 10, icon: FaChevronRight }
                                }
                            }
                        }
                        NodeLabel { node }
                    }
                }
            }
        }
    )
}

#[component]
fn NodeLabel(node: LocationNode) -> Element {
    let security_class = node
        .security_type
        .map(SolarSystemSecurityType::importance)
        .unwrap_or_default()
        .text_class();
    let security = node.security_display();
    let count = if node.item_count > 0 {
        format!(" ({})", node.item_count)
    } else {
        String::new()
    };

    rsx!(
        if node.variant == LocationNodeVariant::Location {
            span { class: "{security_class}", "{security}" }
        }
        span { class: if node.is_unknown { "italic" } else { "" },
            "{node.name}{count}"
        }
    )
}
