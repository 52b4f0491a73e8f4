use super::{
    FeedTile, IconGlyph, MapTile, MediaTile, ResizeHandle, SingleVideoTile, SocialIconTile, StandardTile,
};
use bento_engine::feed::{FeedState, FetchTicket, HttpFeedSource, fetch_videos};
use bento_engine::intents::{
    self, ClickModifiers, ClickOutcome, DRAG_OVER_PREVENTS_DEFAULT, DragOrigin, Intent,
    InteractionFlags, PointerPosition,
};
use bento_engine::layout::{TextScale, TextSize, TiltStyle, tilt_for_pointer};
use bento_engine::variant::{RenderVariant, describe};
use bento_engine::{Block, BuiltinPlatforms, InlineEditor};
use dioxus::prelude::*;
use std::rc::Rc;

/// Fetch the channel feed a ticket refers to and hand the result to `feed`
fn start_fetch(mut feed: Signal<FeedState>, relay: String, ticket: FetchTicket) {
    spawn(async move {
        let result = fetch_videos(&HttpFeedSource::default(), &relay, &ticket).await;
        feed.write().complete(&ticket, result);
    });
}

/// CSS custom properties for the tier's text sizes; the stylesheet picks the
/// compact or regular value with a media query
pub fn text_scale_css(scale: &TextScale) -> String {
    let var = |name: &str, size: TextSize| {
        format!(
            "--{name}: {}px; --{name}-wide: {}px; ",
            size.compact, size.regular
        )
    };
    [
        var("title-text", scale.title_text),
        var("title-default", scale.title_default),
        var("subtext", scale.subtext),
        var("body", scale.body),
        var("overlay-title", scale.overlay_title),
        var("overlay-subtext", scale.overlay_subtext),
    ]
    .concat()
}

fn tile_classes(flags: &InteractionFlags) -> String {
    let mut classes = vec!["bento-tile"];
    if flags.is_selected {
        classes.push("selected");
    }
    if flags.is_drag_target {
        classes.push("drag-target");
    }
    if flags.is_dragging {
        classes.push("dragging");
    }
    if flags.enable_tilt_effect {
        classes.push("tilt");
    }
    classes.join(" ")
}

#[component]
pub fn BlockTile(
    block: Block,
    flags: InteractionFlags,
    feed_relay: String,
    on_intent: Callback<Intent>,
    #[props(default)] can_update: bool,
    #[props(default)] resize_wired: bool,
    /// This tile's handle is the one being dragged
    #[props(default)]
    resize_active: bool,
) -> Element {
    let (initial_feed, initial_ticket) = use_hook(|| FeedState::for_block(&block));
    let mut feed = use_signal(|| initial_feed);
    let mut editor = use_signal(|| InlineEditor::new(&block));
    let mut tilt = use_signal(TiltStyle::rest);
    let mut tile_size = use_signal(|| (0.0, 0.0));
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    let mut handle_pressed = use_signal(|| false);

    {
        let relay = feed_relay.clone();
        use_hook(move || {
            if let Some(ticket) = initial_ticket {
                start_fetch(feed, relay, ticket);
            }
        });
    }

    // Follow block changes pushed by the host
    {
        let relay = feed_relay.clone();
        use_effect(use_reactive((&block,), move |(block,)| {
            if let Some(ticket) = feed.write().sync(&block) {
                start_fetch(feed, relay.clone(), ticket);
            }
            editor.write().sync(&block);
        }));
    }

    use_drop(move || {
        if let Ok(mut feed) = feed.try_write() {
            feed.cancel();
        }
    });

    let tile = describe(&block, &feed.read(), &BuiltinPlatforms);
    let tier_vars = text_scale_css(tile.tier.text_scale());
    let tilt_css = if flags.enable_tilt_effect {
        tilt.read().to_css()
    } else {
        String::new()
    };
    let surface_css = tile.surface.to_css();
    let placement_css = tile.placement.to_css();
    let classes = tile_classes(&flags);
    let color_class = tile.surface.color_class().to_string();
    let text_class = tile.surface.text_class.clone();
    let show_resize = intents::shows_resize_handle(&flags, resize_wired);
    let scrim = tile.surface.scrim;
    // Spacers only show their label when they are the focus of an action
    let spacer_label = if flags.is_selected || flags.is_drag_target {
        "spacer-label visible"
    } else {
        "spacer-label"
    };

    let body = match tile.variant {
        RenderVariant::Spacer => rsx! {
            div {
                class: "bento-spacer",
                div {
                    class: "{spacer_label}",
                    IconGlyph { name: "move-vertical".to_string() }
                    span { "Spacer" }
                }
            }
        },
        RenderVariant::SocialIcon(view) => rsx! {
            SocialIconTile { view }
        },
        RenderVariant::YoutubeFeed(view) => rsx! {
            FeedTile { view }
        },
        RenderVariant::YoutubeSingle(view) => rsx! {
            SingleVideoTile { view }
        },
        RenderVariant::Media(view) => rsx! {
            MediaTile { view }
        },
        RenderVariant::Map(view) => rsx! {
            MapTile { view }
        },
        RenderVariant::Standard(view) => rsx! {
            StandardTile {
                view,
                block: block.clone(),
                editor,
                can_update,
                on_update: move |updated: Block| on_intent.call(Intent::InlineUpdate(updated)),
            }
        },
    };

    let drag_block = block.clone();
    let enter_block = block.clone();
    let drop_block = block.clone();
    let click_block = block.clone();
    let resize_block = block.clone();

    rsx! {
        div {
            class: "{classes}",
            style: "{placement_css}{tier_vars}",
            draggable: intents::is_draggable(&flags),
            "data-block-id": "{block.id}",
            ondragstart: move |evt| {
                let origin = if *handle_pressed.read() {
                    DragOrigin::ResizeHandle
                } else {
                    DragOrigin::Body
                };
                match intents::drag_start(&drag_block, &flags, origin) {
                    Some(intent) => on_intent.call(intent),
                    None => evt.prevent_default(),
                }
            },
            ondragenter: move |_| on_intent.call(intents::drag_enter(&enter_block)),
            ondragover: move |evt| {
                if DRAG_OVER_PREVENTS_DEFAULT {
                    evt.prevent_default();
                }
            },
            ondragend: move |_| {
                handle_pressed.set(false);
                on_intent.call(intents::drag_end());
            },
            onpointerup: move |_| handle_pressed.set(false),
            ondrop: move |evt| {
                evt.prevent_default();
                on_intent.call(intents::drop(&drop_block));
            },
            onclick: move |evt| {
                let modifiers = evt.modifiers();
                let outcome = intents::click(
                    &click_block,
                    ClickModifiers {
                        ctrl: modifiers.ctrl(),
                        meta: modifiers.meta(),
                    },
                );
                if let ClickOutcome::Intent(intent) = outcome {
                    evt.prevent_default();
                    on_intent.call(intent);
                }
            },
            div {
                class: "bento-surface {color_class} {text_class}",
                style: "{surface_css} {tilt_css}",
                onmounted: move |evt| mounted.set(Some(evt.data())),
                onmouseenter: move |_| {
                    if !flags.enable_tilt_effect {
                        return;
                    }
                    let Some(element) = mounted.read().clone() else {
                        return;
                    };
                    spawn(async move {
                        if let Ok(rect) = element.get_client_rect().await {
                            tile_size.set((rect.width(), rect.height()));
                        }
                    });
                },
                onmousemove: move |evt| {
                    if !flags.enable_tilt_effect {
                        return;
                    }
                    let point = evt.element_coordinates();
                    let (width, height) = *tile_size.read();
                    tilt.set(tilt_for_pointer(point.x, point.y, width, height));
                },
                onmouseleave: move |_| tilt.set(TiltStyle::rest()),
                if flags.is_drag_target {
                    div { class: "drop-indicator" }
                }
                if flags.enable_tilt_effect {
                    div { class: "glare" }
                }
                if scrim {
                    div { class: "scrim" }
                }
                if show_resize {
                    ResizeHandle {
                        active: resize_active,
                        on_press: move |pointer: PointerPosition| {
                            handle_pressed.set(true);
                            if let Some(intent) = intents::resize_start(&resize_block, &flags, resize_wired, pointer) {
                                on_intent.call(intent);
                            }
                        },
                        on_release: move |_| handle_pressed.set(false),
                    }
                }
                div {
                    class: "bento-content",
                    {body}
                }
            }
        }
    }
}
