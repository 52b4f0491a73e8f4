use crate::models::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    Title,
    Subtext,
}

impl EditableField {
    fn value(self, block: &Block) -> &str {
        match self {
            EditableField::Title => &block.title,
            EditableField::Subtext => &block.subtext,
        }
    }

    fn propose(self, block: &Block, value: &str) -> Block {
        match self {
            EditableField::Title => block.with_title(value),
            EditableField::Subtext => block.with_subtext(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { buffer: String },
}

/// Keys the edit field reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Key was not handled; let it reach the input
    Ignored,
    /// Editing ended without a proposal
    Closed,
    /// Editing ended with a modified copy for the host
    Proposed(Block),
}

/// Title and subtext edit state for one tile
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineEditor {
    title: EditState,
    subtext: EditState,
    seen_title: String,
    seen_subtext: String,
}

impl InlineEditor {
    pub fn new(block: &Block) -> Self {
        Self {
            seen_title: block.title.clone(),
            seen_subtext: block.subtext.clone(),
            ..Self::default()
        }
    }

    pub fn state(&self, field: EditableField) -> &EditState {
        match field {
            EditableField::Title => &self.title,
            EditableField::Subtext => &self.subtext,
        }
    }

    fn state_mut(&mut self, field: EditableField) -> &mut EditState {
        match field {
            EditableField::Title => &mut self.title,
            EditableField::Subtext => &mut self.subtext,
        }
    }

    pub fn is_editing(&self, field: EditableField) -> bool {
        matches!(self.state(field), EditState::Editing { .. })
    }

    /// Current buffer of a field being edited
    pub fn buffer(&self, field: EditableField) -> Option<&str> {
        match self.state(field) {
            EditState::Editing { buffer } => Some(buffer),
            EditState::Idle => None,
        }
    }

    /// Start editing `field`.
    ///
    /// Returns `true` when the field switched to editing and the input should
    /// be focused with its text selected. Without an update callback the
    /// field is read-only and nothing happens.
    pub fn begin(&mut self, field: EditableField, block: &Block, can_update: bool) -> bool {
        if !can_update {
            return false;
        }
        if self.is_editing(field) {
            return false;
        }
        *self.state_mut(field) = EditState::Editing {
            buffer: field.value(block).to_string(),
        };
        true
    }

    pub fn input(&mut self, field: EditableField, text: impl Into<String>) {
        if let EditState::Editing { buffer } = self.state_mut(field) {
            *buffer = text.into();
        }
    }

    /// Leave editing, proposing a copy of `block` when the value changed
    pub fn commit(&mut self, field: EditableField, block: &Block) -> Option<Block> {
        match std::mem::take(self.state_mut(field)) {
            EditState::Editing { buffer } if buffer != field.value(block) => {
                Some(field.propose(block, &buffer))
            }
            _ => None,
        }
    }

    /// Leave editing and discard the buffer
    pub fn cancel(&mut self, field: EditableField) {
        *self.state_mut(field) = EditState::Idle;
    }

    pub fn key(&mut self, field: EditableField, key: EditKey, block: &Block) -> EditOutcome {
        if !self.is_editing(field) {
            return EditOutcome::Ignored;
        }
        match key {
            EditKey::Enter => match self.commit(field, block) {
                Some(proposed) => EditOutcome::Proposed(proposed),
                None => EditOutcome::Closed,
            },
            EditKey::Escape => {
                self.cancel(field);
                EditOutcome::Closed
            }
            EditKey::Other => EditOutcome::Ignored,
        }
    }

    /// Follow external changes to the block's text.
    ///
    /// When either the title or the subtext changed, both buffers are reset
    /// to the block's values, even mid-edit.
    pub fn sync(&mut self, block: &Block) {
        if self.seen_title == block.title && self.seen_subtext == block.subtext {
            return;
        }
        self.seen_title = block.title.clone();
        self.seen_subtext = block.subtext.clone();
        self.reset_buffer(EditableField::Title, block);
        self.reset_buffer(EditableField::Subtext, block);
    }

    fn reset_buffer(&mut self, field: EditableField, block: &Block) {
        if let EditState::Editing { buffer } = self.state_mut(field) {
            log::debug!("{field:?} draft of block {} reset by external change", block.id);
            *buffer = field.value(block).to_string();
        }
    }
}
