use crate::layout::corner_radius_px;
use crate::models::Block;
use crate::variant::RenderVariant;

pub const DEFAULT_COLOR_CLASS: &str = "bg-white";
pub const DEFAULT_TEXT_CLASS: &str = "text-gray-900";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// Cover image: a LINK image or a single video's thumbnail
    Image(String),
    /// Raw CSS `background` value supplied by the user
    Custom(String),
    /// Palette class name
    Color(String),
}

/// Paintable box of a tile: background, text colour, corners and scrim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub background: Background,
    pub text_class: String,
    pub radius_px: u8,
    /// Bottom gradient that keeps overlaid text readable
    pub scrim: bool,
}

impl Surface {
    /// Image backgrounds win over `customBackground`, which wins over `color`.
    ///
    /// Channel feeds always sit on the default white surface.
    pub fn for_tile(block: &Block, variant: &RenderVariant) -> Self {
        let image = match variant {
            RenderVariant::YoutubeSingle(view) => Some(view.background_url.clone()),
            RenderVariant::Standard(view) if view.over_image => {
                block.image().map(str::to_string)
            }
            _ => None,
        };

        let has_text = !block.title.is_empty()
            || !block.subtext.is_empty()
            || block
                .channel_title
                .as_deref()
                .is_some_and(|title| !title.is_empty());
        let scrim = image.is_some() && has_text;

        let background = match (image, block.custom_background.as_deref()) {
            _ if matches!(variant, RenderVariant::YoutubeFeed(_)) => default_color(),
            (Some(url), _) => Background::Image(url),
            (None, Some(custom)) if !custom.is_empty() => Background::Custom(custom.to_string()),
            _ => block
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .map_or_else(default_color, Background::Color),
        };

        Self {
            background,
            text_class: block
                .text_color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_TEXT_CLASS.to_string()),
            radius_px: corner_radius_px(block.col_span, block.row_span),
            scrim,
        }
    }

    /// Inline CSS for the tile root
    pub fn to_css(&self) -> String {
        let background = match &self.background {
            Background::Image(url) => format!(
                "background-image: url({url}); background-size: cover; background-position: center; "
            ),
            Background::Custom(value) => format!("background: {value}; "),
            Background::Color(_) => String::new(),
        };
        format!("{background}border-radius: {}px;", self.radius_px)
    }

    /// Palette class for the tile root, empty when a background style applies
    pub fn color_class(&self) -> &str {
        match &self.background {
            Background::Color(class) => class,
            _ => "",
        }
    }
}

fn default_color() -> Background {
    Background::Color(DEFAULT_COLOR_CLASS.to_string())
}
