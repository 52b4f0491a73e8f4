use bento_engine::variant::{MediaKind, MediaView};
use dioxus::prelude::*;

#[component]
pub fn MediaTile(view: MediaView) -> Element {
    let media = match view.kind {
        MediaKind::Image => rsx! {
            img {
                class: "media-fill",
                src: "{view.source}",
                alt: "{view.alt}",
                draggable: false,
            }
        },
        MediaKind::Video => rsx! {
            video {
                class: "media-fill",
                src: "{view.source}",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
            }
        },
    };

    rsx! {
        div {
            class: "media-tile",
            {media}
            if let Some(ref overlay) = view.overlay {
                div {
                    class: "overlay-text",
                    h3 { class: "overlay-title", "{overlay.title}" }
                    if let Some(ref subtext) = overlay.subtext {
                        p { class: "overlay-subtext", "{subtext}" }
                    }
                }
            }
        }
    }
}
