use dioxus::prelude::*;

/// Text stand-in for a named glyph
fn symbol(name: &str) -> &'static str {
    match name {
        "youtube" => "▶",
        "x" | "twitter" => "𝕏",
        "github" => "⌥",
        "linkedin" => "in",
        "instagram" => "◎",
        "tiktok" | "music" => "♪",
        "twitch" => "◧",
        "bluesky" | "cloud" => "☁",
        "globe" => "◍",
        "map-pin" => "⌖",
        "image" => "▣",
        "type" => "¶",
        "move-vertical" => "↕",
        _ => "↗",
    }
}

#[component]
pub fn IconGlyph(name: String, #[props(default)] color: Option<String>, #[props(default)] light: bool) -> Element {
    let style = color
        .map(|color| format!("color: {color};"))
        .unwrap_or_default();
    let chip = if light { "icon light" } else { "icon" };

    rsx! {
        span {
            class: "{chip} icon-{name}",
            style: "{style}",
            "data-icon": "{name}",
            "{symbol(&name)}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_icon_carries_name_and_color() {
        let mut dom = VirtualDom::new_with_props(
            IconGlyph,
            IconGlyphProps {
                name: "github".to_string(),
                color: Some("#181717".to_string()),
                light: false,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("icon-github"));
        assert!(html.contains("color: #181717;"));
    }

    #[test]
    fn test_unknown_glyph_falls_back_to_arrow() {
        assert_eq!(symbol("myspace"), "↗");
        assert_eq!(symbol("link"), "↗");
    }
}
