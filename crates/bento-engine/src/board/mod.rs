//! Host-side page board.
//!
//! Owns the page's blocks and consumes the [`Intent`]s tiles emit: inline
//! updates replace blocks by id, deletes remove them, and a completed drag
//! swaps the order of two blocks. Where blocks end up on the grid beyond
//! that is left to a placement engine.

use crate::intents::{Intent, InteractionFlags, PointerPosition};
use crate::models::{Block, BlockId, Page};

/// Progress of a drag gesture as seen by the host
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        source: BlockId,
    },
    Hovering {
        source: BlockId,
        target: BlockId,
    },
}

impl DragSession {
    pub fn source(&self) -> Option<&BlockId> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { source } | DragSession::Hovering { source, .. } => Some(source),
        }
    }

    pub fn target(&self) -> Option<&BlockId> {
        match self {
            DragSession::Hovering { target, .. } => Some(target),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub block: BlockId,
    pub origin: PointerPosition,
    pub start_spans: (u32, u32),
}

/// What an applied intent changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardChange {
    /// Only transient state moved; nothing to save
    Transient,
    /// Block content or order changed and should be persisted
    Content,
    /// The intent referred to a block that is not on the board
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    page: Page,
    selected: Option<BlockId>,
    drag: DragSession,
    resize: Option<ResizeSession>,
}

impl Board {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn blocks(&self) -> &[Block] {
        &self.page.blocks
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.page.blocks.iter().find(|block| &block.id == id)
    }

    fn position(&self, id: &BlockId) -> Option<usize> {
        self.page.blocks.iter().position(|block| &block.id == id)
    }

    pub fn selected(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn resize(&self) -> Option<&ResizeSession> {
        self.resize.as_ref()
    }

    /// Flags a tile should render with
    /// Whether `id` is the block whose handle is being dragged
    pub fn is_resizing_block(&self, id: &BlockId) -> bool {
        self.resize.as_ref().is_some_and(|r| &r.block == id)
    }

    pub fn flags_for(&self, id: &BlockId, enable_resize: bool, enable_tilt_effect: bool) -> InteractionFlags {
        InteractionFlags {
            is_selected: self.selected.as_ref() == Some(id),
            is_drag_target: self.drag.target() == Some(id),
            is_dragging: self.drag.source() == Some(id),
            // Any resize in progress blocks drags on every tile
            is_resizing: self.resize.is_some(),
            enable_resize,
            enable_tilt_effect,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> BoardChange {
        match intent {
            Intent::Edit(block) => {
                if self.position(&block.id).is_none() {
                    return BoardChange::Ignored;
                }
                self.selected = Some(block.id);
                BoardChange::Transient
            }
            Intent::InlineUpdate(block) => match self.position(&block.id) {
                Some(index) => {
                    log::info!("Updated block {}", block.id);
                    self.page.blocks[index] = block;
                    BoardChange::Content
                }
                None => {
                    log::warn!("Inline update for unknown block {}", block.id);
                    BoardChange::Ignored
                }
            },
            Intent::Delete(id) => match self.position(&id) {
                Some(index) => {
                    self.page.blocks.remove(index);
                    if self.selected.as_ref() == Some(&id) {
                        self.selected = None;
                    }
                    log::info!("Deleted block {id}");
                    BoardChange::Content
                }
                None => BoardChange::Ignored,
            },
            Intent::DragStart(id) => {
                if self.position(&id).is_none() {
                    return BoardChange::Ignored;
                }
                self.drag = DragSession::Dragging { source: id };
                BoardChange::Transient
            }
            Intent::DragEnter(target) => {
                let Some(source) = self.drag.source().cloned() else {
                    return BoardChange::Ignored;
                };
                self.drag = if source == target {
                    DragSession::Dragging { source }
                } else {
                    DragSession::Hovering { source, target }
                };
                BoardChange::Transient
            }
            Intent::DragEnd => {
                self.drag = DragSession::Idle;
                BoardChange::Transient
            }
            Intent::Drop(target) => {
                let session = std::mem::take(&mut self.drag);
                let Some(source) = session.source() else {
                    return BoardChange::Ignored;
                };
                self.swap(source, &target)
            }
            Intent::ResizeStart { block, pointer } => {
                if self.position(&block.id).is_none() {
                    return BoardChange::Ignored;
                }
                self.resize = Some(ResizeSession {
                    start_spans: (block.col_span, block.row_span),
                    block: block.id,
                    origin: pointer,
                });
                BoardChange::Transient
            }
        }
    }

    /// Finish the running resize with spans measured by the host
    pub fn finish_resize(&mut self, col_span: u32, row_span: u32) -> BoardChange {
        let Some(session) = self.resize.take() else {
            return BoardChange::Ignored;
        };
        let Some(index) = self.position(&session.block) else {
            return BoardChange::Ignored;
        };
        let spans = (col_span.max(1), row_span.max(1));
        if spans == session.start_spans {
            return BoardChange::Transient;
        }
        let block = &mut self.page.blocks[index];
        block.col_span = spans.0;
        block.row_span = spans.1;
        log::info!("Resized block {} to {}x{}", block.id, spans.0, spans.1);
        BoardChange::Content
    }

    pub fn cancel_resize(&mut self) {
        self.resize = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn swap(&mut self, source: &BlockId, target: &BlockId) -> BoardChange {
        if source == target {
            return BoardChange::Transient;
        }
        match (self.position(source), self.position(target)) {
            (Some(a), Some(b)) => {
                self.page.blocks.swap(a, b);
                log::debug!("Swapped blocks {source} and {target}");
                BoardChange::Content
            }
            _ => BoardChange::Ignored,
        }
    }
}
