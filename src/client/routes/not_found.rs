use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | EveBuddy" }
        Page { class: "items-center justify-center",
            p { class: "text-lg", "Nothing found at /{path}" }
            Link { to: Route::Assets {}, class: "btn btn-outline", "Back to assets" }
        }
    )
}
