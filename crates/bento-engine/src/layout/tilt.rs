//! Hover tilt: a subtle 3D rotation that follows the pointer across a tile.

const MAX_ROTATION_DEG: f64 = 10.0;
const SHADOW_FACTOR: f64 = 1.5;

/// Transform and lighting for one pointer position over a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltStyle {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    /// Glare centre as a percentage of the tile's width and height
    pub glare: (f64, f64),
    pub shadow: (f64, f64),
}

impl TiltStyle {
    /// Untilted resting state
    pub fn rest() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            glare: (50.0, 50.0),
            shadow: (0.0, 0.0),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s}); \
             box-shadow: {:.2}px {:.2}px 25px rgba(0,0,0,0.15), 0 8px 30px rgba(0,0,0,0.1); \
             --glare-x: {:.1}%; --glare-y: {:.1}%; transform-style: preserve-3d;",
            self.rotate_x,
            self.rotate_y,
            self.shadow.0,
            self.shadow.1,
            self.glare.0,
            self.glare.1,
            s = self.scale,
        )
    }
}

/// Tilt for a pointer at `(x, y)` inside a `width` x `height` tile.
///
/// Coordinates are relative to the tile's top-left corner. A degenerate tile
/// yields the resting state.
pub fn tilt_for_pointer(x: f64, y: f64, width: f64, height: f64) -> TiltStyle {
    if width <= 0.0 || height <= 0.0 {
        return TiltStyle::rest();
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = ((y - center_y) / center_y) * -MAX_ROTATION_DEG;
    let rotate_y = ((x - center_x) / center_x) * MAX_ROTATION_DEG;

    TiltStyle {
        rotate_x,
        rotate_y,
        scale: 1.02,
        glare: ((x / width) * 100.0, (y / height) * 100.0),
        shadow: (rotate_y * SHADOW_FACTOR, rotate_x * -SHADOW_FACTOR),
    }
}
