pub mod block;
pub mod page;

pub use block::{Block, BlockId, BlockType, VideoDescriptor, YoutubeMode};
pub use page::{Page, Profile};
