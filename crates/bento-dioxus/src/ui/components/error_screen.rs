use dioxus::prelude::*;

/// Full-window error shown instead of the page when it cannot be opened
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { "{detail_text}" }
            }
            p {
                class: "hint",
                "Pass a page file on the command line, e.g. bento-dioxus ~/pages/me.json"
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
    fn test_error_screen_renders_title_and_message() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Could not open page".to_string(),
                message: "expected value at line 1 column 1".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Could not open page"));
        assert!(html.contains("expected value at line 1 column 1"));
        assert!(!html.contains("<pre"));
    }

    #[test]
    fn test_error_screen_renders_with_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Configuration Error".to_string(),
                message: "No page path provided and no config file found".to_string(),
                details: Some("Config path: /home/ada/.config/bento/config.toml".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Configuration Error"));
        assert!(html.contains("/home/ada/.config/bento/config.toml"));
        assert!(html.contains("hint"));
    }
}
