use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{app::AppContext, client::router::Route};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    use_hook(move || {
        spawn(async move {
            if let Err(err) = ctx.init_current_character().await {
                tracing::error!("Failed to select initial character: {}", err);
            }
        })
    });

    rsx!(
        Title { "EveBuddy" }
        Router::<Route> {}
    )
}
