use super::IconGlyph;
use bento_engine::variant::StandardView;
use bento_engine::{Block, EditKey, EditOutcome, EditableField, InlineEditor};
use dioxus::prelude::*;

fn edit_key(key: &Key) -> EditKey {
    match key {
        Key::Enter => EditKey::Enter,
        Key::Escape => EditKey::Escape,
        _ => EditKey::Other,
    }
}

/// Focus the freshly mounted input and select its text
async fn focus_and_select(evt: MountedEvent) {
    if evt.set_focus(true).await.is_ok() {
        let _ = document::eval(
            "document.activeElement && document.activeElement.select && document.activeElement.select();",
        );
    }
}

#[derive(Props, Clone, PartialEq)]
struct EditableLineProps {
    field: EditableField,
    /// Text shown while not editing; `None` shows the placeholder
    text: Option<String>,
    placeholder: String,
    class: String,
    /// Show the pencil hint on hover
    pencil: bool,
    block: Block,
    editor: Signal<InlineEditor>,
    can_update: bool,
    on_update: EventHandler<Block>,
}

#[component]
fn EditableLine(props: EditableLineProps) -> Element {
    let EditableLineProps {
        field,
        text,
        placeholder,
        class,
        pencil,
        block,
        mut editor,
        can_update,
        on_update,
    } = props;

    let editing_buffer = editor.read().buffer(field).map(str::to_string);

    if let Some(buffer) = editing_buffer {
        let blur_block = block.clone();
        let key_block = block;
        return rsx! {
            input {
                class: "{class} editing",
                r#type: "text",
                value: "{buffer}",
                onmounted: move |evt| focus_and_select(evt),
                oninput: move |evt| editor.write().input(field, evt.value()),
                onblur: move |_| {
                    if let Some(updated) = editor.write().commit(field, &blur_block) {
                        on_update.call(updated);
                    }
                },
                onkeydown: move |evt| {
                    let outcome = editor.write().key(field, edit_key(&evt.key()), &key_block);
                    match outcome {
                        EditOutcome::Ignored => {}
                        EditOutcome::Closed => evt.prevent_default(),
                        EditOutcome::Proposed(updated) => {
                            evt.prevent_default();
                            on_update.call(updated);
                        }
                    }
                },
                onclick: move |evt| evt.stop_propagation(),
            }
        };
    }

    let editable = if can_update { " editable" } else { "" };
    let shown = match text {
        Some(text) => rsx! { "{text}" },
        None => rsx! {
            span { class: "placeholder", "{placeholder}" }
        },
    };
    rsx! {
        div {
            class: "{class}{editable}",
            onclick: move |evt| {
                if editor.write().begin(field, &block, can_update) {
                    evt.stop_propagation();
                }
            },
            {shown}
            if can_update && pencil {
                span { class: "pencil", "✎" }
            }
        }
    }
}

/// Link, social and text tiles with inline title and subtitle editing
#[component]
pub fn StandardTile(
    view: StandardView,
    block: Block,
    editor: Signal<InlineEditor>,
    can_update: bool,
    on_update: EventHandler<Block>,
) -> Element {
    let layout = if view.text_layout {
        "standard-tile text-layout"
    } else {
        "standard-tile"
    };
    let on_image = if view.over_image { " on-image" } else { "" };
    let title_class = if view.text_layout {
        format!("tile-title title-text{on_image}")
    } else {
        format!("tile-title title-default{on_image}")
    };
    let subtext_class = format!("tile-subtext{on_image}");
    let show_subtext =
        view.subtext.is_some() || can_update || editor.read().is_editing(EditableField::Subtext);

    rsx! {
        div {
            class: "{layout}",
            if let Some(ref icon) = view.icon {
                div {
                    class: "icon-row",
                    IconGlyph { name: icon.glyph().to_string(), light: view.light_icon }
                }
            }
            div {
                class: "text-stack",
                EditableLine {
                    field: EditableField::Title,
                    text: view.heading.clone(),
                    placeholder: "Add title...".to_string(),
                    class: title_class,
                    pencil: !view.heading_from_channel,
                    block: block.clone(),
                    editor,
                    can_update,
                    on_update,
                }
                if show_subtext {
                    EditableLine {
                        field: EditableField::Subtext,
                        text: view.subtext.clone(),
                        placeholder: "Add subtitle...".to_string(),
                        class: subtext_class,
                        pencil: true,
                        block: block.clone(),
                        editor,
                        can_update,
                        on_update,
                    }
                }
                if let Some(ref body) = view.body {
                    p { class: "tile-body", "{body}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_engine::BlockType;
    use bento_engine::variant::BlockIcon;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn view(heading: Option<&str>, subtext: Option<&str>) -> StandardView {
        StandardView {
            icon: None,
            heading: heading.map(str::to_string),
            heading_from_channel: false,
            subtext: subtext.map(str::to_string),
            body: None,
            text_layout: false,
            over_image: false,
            light_icon: false,
        }
    }

    #[component]
    fn StandardHarness(view: StandardView, block: Block, can_update: bool, editing: bool) -> Element {
        let editor = use_signal(|| {
            let mut editor = InlineEditor::new(&block);
            if editing {
                editor.begin(EditableField::Title, &block, true);
            }
            editor
        });
        rsx! {
            StandardTile {
                view,
                block,
                editor,
                can_update,
                on_update: |_: Block| {},
            }
        }
    }

    fn render_tile(view: StandardView, block: Block, can_update: bool, editing: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            StandardHarness,
            StandardHarnessProps {
                view,
                block,
                can_update,
                editing,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_editable_tile_shows_placeholders() {
        let html = render_tile(
            view(None, None),
            Block::new("l", BlockType::Link),
            true,
            false,
        );

        assert!(html.contains("Add title..."));
        assert!(html.contains("Add subtitle..."));
        assert!(html.contains("pencil"));
    }

    #[test]
    fn test_read_only_tile_hides_empty_subtitle() {
        let html = render_tile(
            view(Some("Blog"), None),
            Block::new("l", BlockType::Link),
            false,
            false,
        );

        assert!(html.contains("Blog"));
        assert!(!html.contains("Add subtitle..."));
        assert!(!html.contains("editable"));
    }

    #[test]
    fn test_editing_title_renders_input_with_buffer() {
        let block = Block::new("l", BlockType::Link).with_title("Portfolio");
        let html = render_tile(view(Some("Portfolio"), None), block, true, true);

        assert!(html.contains("<input"));
        assert!(html.contains("Portfolio"));
        assert!(html.contains("editing"));
    }

    #[test]
    fn test_social_icon_chip_and_text_body() {
        let mut v = view(Some("Notes"), Some("Weekly"));
        v.icon = Some(BlockIcon::Github);
        v.light_icon = true;
        v.body = Some("Hello there".to_string());
        v.text_layout = true;

        let html = render_tile(v, Block::new("t", BlockType::Text), false, false);

        assert!(html.contains("icon light icon-github"));
        assert!(html.contains("text-layout"));
        assert!(html.contains("title-text"));
        assert!(html.contains("Hello there"));
        assert!(html.contains("Weekly"));
    }
}
