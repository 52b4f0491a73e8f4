/*!
 * # Inline Editing
 *
 * Tiles let the user retype a block's title and subtext in place. Each field
 * runs its own small state machine:
 *
 * ```text
 * Idle --begin (update callback wired)--> Editing { buffer }
 * Editing --input--> Editing { new buffer }
 * Editing --commit (blur / Enter)--> Idle, proposes a copy if the value changed
 * Editing --cancel (Escape)--> Idle, buffer restored
 * ```
 *
 * The editor never mutates a block. A commit hands back a modified copy and
 * the host decides whether to store it. When the host pushes a block whose
 * title or subtext changed, [`InlineEditor::sync`] resets the buffers to the
 * new values, even in the middle of an edit.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use bento_engine::editing::{EditableField, InlineEditor};
 * use bento_engine::models::{Block, BlockType};
 *
 * let block = Block::new("b1", BlockType::Link).with_title("Blog");
 * let mut editor = InlineEditor::new(&block);
 *
 * assert!(editor.begin(EditableField::Title, &block, true));
 * editor.input(EditableField::Title, "Writing");
 * let proposed = editor.commit(EditableField::Title, &block).unwrap();
 * assert_eq!(proposed.title, "Writing");
 * ```
 */

pub mod inline;

pub use inline::{EditKey, EditOutcome, EditState, EditableField, InlineEditor};
