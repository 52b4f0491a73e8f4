use bento_engine::variant::MapView;
use dioxus::prelude::*;

#[component]
pub fn MapTile(view: MapView) -> Element {
    rsx! {
        div {
            class: "map-tile",
            iframe {
                class: "map-frame",
                src: "{view.embed_url}",
                title: "Map",
                "loading": "lazy",
            }
            if !view.caption.is_empty() {
                div { class: "map-caption", "{view.caption}" }
            }
        }
    }
}
