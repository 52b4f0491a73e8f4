use bento_engine::intents::PointerPosition;
use dioxus::prelude::*;

#[component]
pub fn ResizeHandle(
    active: bool,
    on_press: EventHandler<PointerPosition>,
    on_release: EventHandler<()>,
) -> Element {
    let class = if active {
        "resize-handle active"
    } else {
        "resize-handle"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "aria-label": "Resize block",
            "data-resize-handle": "true",
            onpointerdown: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                let point = evt.client_coordinates();
                on_press.call(PointerPosition { x: point.x, y: point.y });
            },
            onpointerup: move |_| on_release.call(()),
            onclick: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
            },
            ondragstart: move |evt| evt.prevent_default(),
            div { class: "resize-grip" }
        }
    }
}
