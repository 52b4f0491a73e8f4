pub mod board;
pub mod editing;
pub mod feed;
pub mod intents;
pub mod io;
pub mod layout;
pub mod models;
pub mod platforms;
pub mod variant;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use board::{Board, BoardChange, DragSession};
pub use editing::{EditKey, EditOutcome, EditableField, InlineEditor};
pub use feed::{FeedError, FeedSource, FeedState, FetchTicket, HttpFeedSource};
pub use intents::{ClickModifiers, ClickOutcome, DragOrigin, Intent, InteractionFlags};
pub use io::*;
pub use layout::{SizeTier, classify};
pub use models::{Block, BlockId, BlockType, Page, Profile, VideoDescriptor, YoutubeMode};
pub use platforms::{BuiltinPlatforms, NoPlatforms, PlatformOption, PlatformResolver};
pub use variant::{RenderVariant, TileDescriptor, describe, resolve};
