pub mod placement;
pub mod tier;
pub mod tilt;

pub use placement::{GridPlacement, corner_radius_px};
pub use tier::{SizeTier, TextScale, TextSize, classify};
pub use tilt::{TiltStyle, tilt_for_pointer};
