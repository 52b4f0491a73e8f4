use super::IconGlyph;
use bento_engine::feed::watch_url;
use bento_engine::variant::{FeedArrangement, FeedView};
use dioxus::prelude::*;

/// Channel feed: header plus a grid or list of recent uploads
#[component]
pub fn FeedTile(view: FeedView) -> Element {
    let arrangement = match view.layout.arrangement() {
        FeedArrangement::Grid => "feed-grid",
        FeedArrangement::List => "feed-list",
    };
    let compact = if view.layout.is_compact() { " compact" } else { "" };
    let layout = view.layout.as_str();
    let show_titles = view.layout.shows_titles();

    let content = if view.loading {
        rsx! {
            div { class: "feed-loading", span { class: "spinner" } }
        }
    } else if view.videos.is_empty() {
        rsx! {
            div { class: "feed-empty", "No videos" }
        }
    } else {
        rsx! {
            div {
                class: "{arrangement}",
                for video in view.videos.iter() {
                    a {
                        key: "{video.id}",
                        class: "feed-video",
                        href: "{watch_url(&video.id)}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: move |evt| evt.stop_propagation(),
                        img {
                            class: "feed-thumb",
                            src: "{video.thumbnail}",
                            alt: "{video.title}",
                            "loading": "lazy",
                        }
                        if show_titles {
                            span { class: "feed-video-title", "{video.title}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "feed-tile feed-{layout}{compact}",
            div {
                class: "feed-header",
                IconGlyph { name: "youtube".to_string(), color: Some("#FF0000".to_string()) }
                span { class: "feed-title", "{view.header}" }
            }
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_engine::models::{VideoDescriptor, YoutubeMode};
    use bento_engine::variant::FeedLayout;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn videos(n: usize) -> Vec<VideoDescriptor> {
        (0..n)
            .map(|i| VideoDescriptor {
                id: format!("v{i}"),
                title: format!("Episode {i}"),
                thumbnail: format!("https://cdn.test/thumbs/v{i}.jpg"),
            })
            .collect()
    }

    fn render_view(view: FeedView) -> String {
        let mut dom = VirtualDom::new_with_props(FeedTile, FeedTileProps { view });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_tall_feed_lists_titles() {
        let html = render_view(FeedView {
            mode: YoutubeMode::List,
            layout: FeedLayout::Tall,
            header: "Ada's Channel".to_string(),
            videos: videos(4),
            loading: false,
        });

        assert!(html.contains("feed-list"));
        assert!(html.contains("Episode 3"));
        assert!(html.contains("https://www.youtube.com/watch?v=v0"));
        assert!(!html.contains("feed-loading"));
    }

    #[test]
    fn test_thumbnails_come_from_descriptors() {
        let html = render_view(FeedView {
            mode: YoutubeMode::Grid,
            layout: FeedLayout::Wide,
            header: "YouTube".to_string(),
            videos: videos(2),
            loading: false,
        });

        assert!(html.contains("https://cdn.test/thumbs/v1.jpg"));
        assert!(!html.contains("img.youtube.com"));
        assert!(!html.contains("Episode 0"));
    }

    #[test]
    fn test_loading_replaces_stale_videos() {
        let html = render_view(FeedView {
            mode: YoutubeMode::Grid,
            layout: FeedLayout::Small,
            header: "YouTube".to_string(),
            videos: videos(2),
            loading: true,
        });

        assert!(html.contains("feed-loading"));
        assert!(html.contains("feed-small compact"));
        assert!(!html.contains("feed-thumb"));
        assert!(!html.contains("No videos"));
    }

    #[test]
    fn test_empty_feed_says_no_videos() {
        let html = render_view(FeedView {
            mode: YoutubeMode::List,
            layout: FeedLayout::Large,
            header: "YouTube".to_string(),
            videos: Vec::new(),
            loading: false,
        });

        assert!(html.contains("No videos"));
        assert!(!html.contains("feed-loading"));
        assert!(!html.contains("feed-grid"));
    }
}
