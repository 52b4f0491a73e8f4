pub mod block_tile;
pub mod error_screen;
pub mod feed_tile;
pub mod icon_glyph;
pub mod map_tile;
pub mod media_tile;
pub mod resize_handle;
pub mod single_video_tile;
pub mod social_icon_tile;
pub mod standard_tile;

pub use block_tile::BlockTile;
pub use error_screen::ErrorScreen;
pub use feed_tile::FeedTile;
pub use icon_glyph::IconGlyph;
pub use map_tile::MapTile;
pub use media_tile::MediaTile;
pub use resize_handle::ResizeHandle;
pub use single_video_tile::SingleVideoTile;
pub use social_icon_tile::SocialIconTile;
pub use standard_tile::StandardTile;
