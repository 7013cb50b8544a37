use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::{
    app::{
        tree::TreeNode,
        view::{
            jump_clones::{JumpCloneNode, JumpCloneNodeUid},
            CharacterJumpClonesView,
        },
    },
    client::{
        components::{Page, StatusText},
        hooks::use_view,
    },
};

/// A clone with its implants as key and name, and whether it is expanded.
type CloneEntry = (JumpCloneNodeUid, JumpCloneNode, Vec<(String, String)>, bool);

#[component]
pub fn JumpClones() -> Element {
    let (_view, snapshot) = use_view(|_| CharacterJumpClonesView::new());
    // Clones start collapsed.
    let mut expanded = use_signal(HashSet::<JumpCloneNodeUid>::new);
    let snapshot = snapshot.read();

    let open = expanded.read().clone();
    let clones: Vec<CloneEntry> = snapshot
        .tree
        .roots()
        .iter()
        .filter_map(|uid| {
            let node = snapshot.tree.node(uid)?.clone();
            let implants = snapshot
                .tree
                .children(Some(uid))
                .iter()
                .filter_map(|u| snapshot.tree.node(u))
                .map(|n| (n.uid().to_string(), n.name.clone()))
                .collect();
            Some((*uid, node, implants, open.contains(uid)))
        })
        .collect();
    let next_jump = snapshot.next_jump.clone();
    let last_jump = snapshot
        .last_jump
        .as_ref()
        .map(|l| format!("• Last jump: {}", l));

    rsx!(
        Title { "Jump Clones | EveBuddy" }
        Page {
            div { class: "flex items-center gap-1 text-sm",
                StatusText { label: snapshot.top.clone() }
                if let Some(next_jump) = next_jump {
                    span { "• Next available jump:" }
                    StatusText { label: next_jump }
                }
                if let Some(last_jump) = last_jump {
                    span { "{last_jump}" }
                }
            }
            ul { class: "menu menu-sm w-full",
                for (uid, clone, implants, is_open) in clones {
                    li {
                        key: "{uid}",
                        a {
                            onclick: move |_| {
                                let mut set = expanded.write();
                                if !set.remove(&uid) {
                                    set.insert(uid);
                                }
                            },
                            if !implants.is_empty() {
                                if is_open {
                                    Icon { width: 10, height: 10, icon: FaChevronDown }
                                } else {
                                    Icon { width: 10, height: 10, icon: FaChevronRight }
                                }
                            }
                            CloneLabel { node: clone }
                        }
                        if is_open {
                            ul {
                                for (key, name) in implants {
                                    li { key: "{key}",
                                        span { "{name}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn CloneLabel(node: JumpCloneNode) -> Element {
    let security_class = node.security_importance().text_class();
    let security = node.security_display();
    let implants = if node.implant_count > 0 {
        format!("{} implants", node.implant_count)
    } else {
        String::new()
    };

    rsx!(
        span { class: "{security_class}", "{security}" }
        span { class: if node.is_unknown() { "italic" } else { "" },
            "{node.name}"
        }
        span { class: "italic text-base-content/60", "{implants}" }
    )
}
