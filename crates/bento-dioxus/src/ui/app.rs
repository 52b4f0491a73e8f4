use super::components::{BlockTile, ErrorScreen};
use bento_config::Config;
use bento_engine::intents::{self, Intent};
use bento_engine::{Board, BoardChange, Page, PageIoError, io};
use dioxus::prelude::*;
use std::path::{Path, PathBuf};

const BENTO_CSS: &str = include_str!("../assets/bento.css");

pub const GRID_COLUMNS: u32 = 9;
pub const COLUMN_PX: f64 = 96.0;
pub const ROW_PX: f64 = 64.0;
pub const GAP_PX: f64 = 12.0;

/// Everything the UI needs from the command line and config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub page_path: PathBuf,
    pub feed_relay: String,
    pub enable_tilt_effect: bool,
    pub enable_resize: bool,
}

impl Settings {
    pub fn from_config(config: Config) -> Self {
        Self {
            page_path: config.page_path,
            feed_relay: config.feed_relay,
            enable_tilt_effect: config.enable_tilt_effect,
            enable_resize: config.enable_resize,
        }
    }
}

fn load_board(page_path: &Path) -> Result<Board, PageIoError> {
    match io::load_page(page_path) {
        Ok(page) => Ok(Board::new(page)),
        Err(PageIoError::NotFound(path)) => {
            log::info!("No page at {}, starting an empty one", path.display());
            Ok(Board::new(Page::default()))
        }
        Err(e) => Err(e),
    }
}

#[component]
pub fn App(settings: Settings) -> Element {
    let loaded = use_hook(|| load_board(&settings.page_path).map_err(|e| e.to_string()));

    let content = match loaded {
        Ok(board) => rsx! {
            PageView { initial: board, settings }
        },
        Err(message) => rsx! {
            ErrorScreen {
                title: "Could not open page".to_string(),
                message,
                details: Some(settings.page_path.display().to_string()),
            }
        },
    };

    rsx! {
        style { {BENTO_CSS} }
        {content}
    }
}

/// Spans after dragging the resize handle by `(dx, dy)` pixels
pub fn spans_after_drag(start: (u32, u32), dx: f64, dy: f64) -> (u32, u32) {
    let step = |delta: f64, cell: f64| (delta / (cell + GAP_PX)).round() as i64;
    let cols = (i64::from(start.0) + step(dx, COLUMN_PX)).clamp(1, i64::from(GRID_COLUMNS));
    let rows = (i64::from(start.1) + step(dy, ROW_PX)).max(1);
    (cols as u32, rows as u32)
}

#[component]
fn PageView(initial: Board, settings: Settings) -> Element {
    let mut board = use_signal(|| initial.clone());

    let on_intent = {
        let page_path = settings.page_path.clone();
        use_callback(move |intent: Intent| {
            log::debug!("Intent: {intent:?}");
            let change = board.write().apply(intent);
            if change == BoardChange::Content {
                persist(&page_path, &board.read());
            }
        })
    };

    let on_pointer_up = {
        let page_path = settings.page_path.clone();
        move |evt: Event<PointerData>| {
            let Some(session) = board.read().resize().cloned() else {
                return;
            };
            let point = evt.client_coordinates();
            let (cols, rows) = spans_after_drag(
                session.start_spans,
                point.x - session.origin.x,
                point.y - session.origin.y,
            );
            if board.write().finish_resize(cols, rows) == BoardChange::Content {
                persist(&page_path, &board.read());
            }
        }
    };

    let profile = board.read().page().profile.clone();
    let selected = board
        .read()
        .selected()
        .and_then(|id| board.read().block(id).cloned());

    rsx! {
        div {
            class: "page",
            header {
                class: "profile",
                if let Some(ref avatar) = profile.avatar_url {
                    img { class: "avatar", src: "{avatar}", alt: "{profile.name}" }
                }
                h1 { "{profile.name}" }
                if !profile.bio.is_empty() {
                    p { class: "bio", "{profile.bio}" }
                }
            }
            if let Some(block) = selected {
                div {
                    class: "selection-bar",
                    span { "Selected: {block.id}" }
                    button {
                        class: "danger",
                        onclick: move |_| on_intent.call(intents::delete(&block)),
                        "Delete"
                    }
                    button {
                        onclick: move |_| board.write().clear_selection(),
                        "Done"
                    }
                }
            }
            div {
                class: "bento-grid",
                style: "grid-template-columns: repeat({GRID_COLUMNS}, {COLUMN_PX}px); grid-auto-rows: {ROW_PX}px; gap: {GAP_PX}px;",
                onpointerup: on_pointer_up,
                onpointerleave: move |_| board.write().cancel_resize(),
                for block in board.read().blocks().iter().cloned() {
                    BlockTile {
                        key: "{block.id}",
                        flags: board.read().flags_for(&block.id, settings.enable_resize, settings.enable_tilt_effect),
                        block: block.clone(),
                        feed_relay: settings.feed_relay.clone(),
                        on_intent,
                        can_update: true,
                        resize_wired: true,
                        resize_active: board.read().is_resizing_block(&block.id),
                    }
                }
            }
        }
    }
}

fn persist(page_path: &Path, board: &Board) {
    match io::save_page(page_path, board.page()) {
        Ok(()) => log::info!("Page saved to {}", page_path.display()),
        Err(e) => log::error!("Error saving page {}: {e}", page_path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_engine::{Block, BlockType, Profile};
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_spans_after_drag() {
        assert_eq!(spans_after_drag((1, 1), 0.0, 0.0), (1, 1));
        assert_eq!(spans_after_drag((1, 1), 108.0, 76.0 * 2.0), (2, 3));
        assert_eq!(spans_after_drag((2, 2), -500.0, -500.0), (1, 1));
        assert_eq!(spans_after_drag((8, 1), 1000.0, 0.0), (9, 1));
    }

    #[test]
    fn test_page_view_renders_profile_and_tiles() {
        let mut text = Block::new("t1", BlockType::Text);
        text.title = "About me".to_string();
        let board = Board::new(Page {
            profile: Profile {
                name: "Ada".to_string(),
                bio: "Engines".to_string(),
                avatar_url: None,
            },
            blocks: vec![text, Block::new("gap", BlockType::Spacer)],
        });

        let mut dom = VirtualDom::new_with_props(
            PageView,
            PageViewProps {
                initial: board,
                settings: Settings::from_config(Config::new("/tmp/bento-test/page.json")),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Ada"));
        assert!(html.contains("Engines"));
        assert!(html.contains("About me"));
        assert!(html.contains("bento-spacer"));
        assert!(!html.contains("selection-bar"));
    }
}
