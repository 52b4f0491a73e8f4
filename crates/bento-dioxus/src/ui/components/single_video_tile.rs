use bento_engine::feed::watch_url;
use bento_engine::variant::SingleVideoView;
use dioxus::prelude::*;

/// One video as a full-bleed thumbnail with a play button
#[component]
pub fn SingleVideoTile(view: SingleVideoView) -> Element {
    rsx! {
        a {
            class: "single-video",
            href: "{watch_url(&view.video_id)}",
            target: "_blank",
            rel: "noopener noreferrer",
            "data-video-id": "{view.video_id}",
            onclick: move |evt| evt.stop_propagation(),
            div { class: "play-button", "▶" }
            div {
                class: "overlay-text",
                h3 { class: "overlay-title", "{view.heading}" }
                if let Some(ref subtext) = view.subtext {
                    p { class: "overlay-subtext", "{subtext}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_single_video_links_to_watch_page() {
        let mut dom = VirtualDom::new_with_props(
            SingleVideoTile,
            SingleVideoTileProps {
                view: SingleVideoView {
                    video_id: "abc123".to_string(),
                    background_url: "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
                        .to_string(),
                    heading: "Latest upload".to_string(),
                    subtext: None,
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("https://www.youtube.com/watch?v=abc123"));
        assert!(html.contains("Latest upload"));
        assert!(!html.contains("overlay-subtext"));
    }
}
