use dioxus::prelude::*;

use crate::app::view::StatusLabel;

#[component]
pub fn StatusText(label: StatusLabel) -> Element {
    let class = label.importance.text_class();

    rsx!(
        p { class: "text-sm {class}",
            "{label.text}"
        }
    )
}
