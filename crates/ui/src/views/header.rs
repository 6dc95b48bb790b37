use dioxus::prelude::*;

#[component]
pub fn Header(title: String, on_menu: EventHandler<MouseEvent>) -> Element {
    rsx! {
        header { class: "header",
            button {
                class: "menu-button",
                aria_label: "Toggle menu",
                onclick: move |evt| on_menu.call(evt),
                "☰"
            }
            h1 { class: "header-title", "{title}" }
        }
    }
}
