//! Drag, drop, resize and click intents.
//!
//! Tiles never move themselves. They translate pointer gestures into
//! [`Intent`]s for the host, which owns placement and persistence.

use crate::models::{Block, BlockId, BlockType};

/// A request from a tile to its host
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Open the full editor for a block
    Edit(Block),
    Delete(BlockId),
    DragStart(BlockId),
    DragEnter(BlockId),
    DragEnd,
    /// The dragged block was released over this block
    Drop(BlockId),
    ResizeStart {
        block: Block,
        pointer: PointerPosition,
    },
    /// Modified copy from inline editing
    InlineUpdate(Block),
}

/// Client coordinates of the pointer that started a gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Host-observed state that changes how a tile reacts and looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionFlags {
    pub is_selected: bool,
    pub is_drag_target: bool,
    pub is_dragging: bool,
    pub is_resizing: bool,
    pub enable_resize: bool,
    pub enable_tilt_effect: bool,
}

/// Where a drag gesture began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    Body,
    ResizeHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickModifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl ClickModifiers {
    fn any(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Intent(Intent),
    /// Let the platform open the link instead of editing
    FollowLink,
}

/// Drag-over must always be accepted for the tile to be a drop target
pub const DRAG_OVER_PREVENTS_DEFAULT: bool = true;

/// Tiles are draggable except while a resize is running
pub fn is_draggable(flags: &InteractionFlags) -> bool {
    !flags.is_resizing
}

/// Suppressed while resizing and for drags that begin on the resize handle
pub fn drag_start(block: &Block, flags: &InteractionFlags, origin: DragOrigin) -> Option<Intent> {
    if !is_draggable(flags) || origin == DragOrigin::ResizeHandle {
        return None;
    }
    Some(Intent::DragStart(block.id.clone()))
}

pub fn drag_enter(block: &Block) -> Intent {
    Intent::DragEnter(block.id.clone())
}

pub fn drag_end() -> Intent {
    Intent::DragEnd
}

pub fn drop(block: &Block) -> Intent {
    Intent::Drop(block.id.clone())
}

/// Click on a tile: edit it, unless a modified click on a profile icon
/// should follow its link
pub fn click(block: &Block, modifiers: ClickModifiers) -> ClickOutcome {
    if block.kind == BlockType::SocialIcon && modifiers.any() {
        return ClickOutcome::FollowLink;
    }
    ClickOutcome::Intent(Intent::Edit(block.clone()))
}

pub fn shows_resize_handle(flags: &InteractionFlags, handler_wired: bool) -> bool {
    flags.enable_resize && handler_wired
}

/// Pointer went down on the resize handle
pub fn resize_start(
    block: &Block,
    flags: &InteractionFlags,
    handler_wired: bool,
    pointer: PointerPosition,
) -> Option<Intent> {
    shows_resize_handle(flags, handler_wired).then(|| Intent::ResizeStart {
        block: block.clone(),
        pointer,
    })
}

/// Delete request for a block
pub fn delete(block: &Block) -> Intent {
    Intent::Delete(block.id.clone())
}
