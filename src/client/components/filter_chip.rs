use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::app::table::FilterChip;

/// Drop down of a table filter. Shows a clear button while an option is selected.
#[component]
pub fn FilterChipSelect(chip: FilterChip, on_select: EventHandler<Option<String>>) -> Element {
    let selected = chip.selected().map(str::to_string);
    let class = if chip.is_active() {
        "select select-sm select-primary w-40"
    } else {
        "select select-sm w-40"
    };

    rsx!(
        div { class: "flex items-center gap-1",
            select {
                class: class,
                onchange: move |evt| {
                    let value = evt.value();
                    on_select.call(if value.is_empty() { None } else { Some(value) });
                },
                option {
                    value: "",
                    selected: selected.is_none(),
                    "{chip.label}"
                }
                for option in chip.options().iter().cloned() {
                    option {
                        value: "{option}",
                        selected: selected.as_deref() == Some(option.as_str()),
                        "{option}"
                    }
                }
            }
            if chip.is_active() {
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| on_select.call(None),
                    Icon { width: 12, height: 12, icon: FaXmark }
                }
            }
        }
    )
}
