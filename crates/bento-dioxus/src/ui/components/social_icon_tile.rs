use super::IconGlyph;
use bento_engine::variant::SocialIconView;
use dioxus::prelude::*;

/// Square profile icon; links out only when the platform and handle are known
#[component]
pub fn SocialIconTile(view: SocialIconView) -> Element {
    let label = view.label.clone().unwrap_or_default();
    let glyph = view.glyph.clone();

    let icon = match glyph {
        Some(glyph) => rsx! {
            IconGlyph { name: glyph.name, color: glyph.color }
        },
        None => rsx! {
            span { class: "icon-placeholder" }
        },
    };

    match view.url {
        Some(url) => rsx! {
            a {
                class: "social-icon-tile",
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                title: "{label}",
                {icon}
            }
        },
        None => rsx! {
            div {
                class: "social-icon-tile",
                title: "{label}",
                {icon}
            }
        },
    }
}
