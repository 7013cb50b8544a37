use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    app::AppContext,
    client::router::Route,
    model::{CharacterId, CharacterShort},
};

#[component]
pub fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let mut current = use_signal(|| ctx.current_character());
    let mut summary = use_signal(|| ctx.status.summary());
    let mut characters = use_signal(|| ctx.status.list_characters());

    let watched = ctx.clone();
    use_future(move || {
        let mut receiver = watched.watch_character();
        async move {
            while receiver.changed().await.is_ok() {
                let next = receiver.borrow_and_update().clone();
                current.set(next);
            }
        }
    });

    // Section states age with time, so the badge is also refreshed on every tick.
    let observed = ctx.clone();
    use_future(move || {
        let ctx = observed.clone();
        async move {
            let mut events = ctx.events.subscribe();
            let mut ticker = tokio::time::interval(ctx.view_config.tick_interval());
            loop {
                tokio::select! {
                    event = events.recv() => {
                        if event.is_none() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {}
                }
                summary.set(ctx.status.summary());
                characters.set(ctx.status.list_characters());
            }
        }
    });

    let summary = *summary.read();
    let percent = format!("{:.0}%", summary.current_percent());
    let current_id = current.read().as_ref().map(|c| c.id);
    let status_class = if summary.errors > 0 {
        "badge badge-error"
    } else if summary.current < summary.total {
        "badge badge-warning"
    } else {
        "badge badge-success"
    };

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "EveBuddy"
                    }
                    p { class: "text-xs",
                        "v0.1.0.Alpha-1"
                    }
                }
                ul { class: "menu menu-horizontal",
                    li { Link { to: Route::Assets {}, "Assets" } }
                    li { Link { to: Route::Locations {}, "Locations" } }
                    li { Link { to: Route::JumpClones {}, "Jump Clones" } }
                    li { Link { to: Route::Clones {}, "Clone Search" } }
                }
            }
            div {
                class: "navbar-end gap-2",
                span { class: status_class,
                    "{percent}"
                }
                CharacterSwitcher { characters: characters(), current: current_id }
            }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn CharacterSwitcher(characters: Vec<CharacterShort>, current: Option<CharacterId>) -> Element {
    let ctx = use_context::<AppContext>();
    let is_empty = characters.is_empty();

    rsx!(
        select {
            class: "select select-sm w-48",
            disabled: is_empty,
            onchange: move |evt| {
                let ctx = ctx.clone();
                let Some(character_id) = evt
                    .value()
                    .parse::<i32>()
                    .ok()
                    .and_then(|id| CharacterId::new(id).ok())
                else {
                    return;
                };
                spawn(async move {
                    if let Err(err) = ctx.switch_character(character_id).await {
                        tracing::error!("Failed to switch character: {}", err);
                    }
                });
            },
            if is_empty {
                option { "No characters" }
            }
            for character in characters {
                option {
                    value: "{character.id}",
                    selected: Some(character.id) == current,
                    "{character.name}"
                }
            }
        }
    )
}
