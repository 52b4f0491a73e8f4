/// Shape of a multi-video feed tile, chosen from its own spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedLayout {
    /// At least 2x2
    Large,
    /// At least two columns, one row
    Wide,
    /// One column, at least two rows
    Tall,
    /// 1x1
    Small,
}

/// How thumbnails are arranged inside the tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedArrangement {
    /// Horizontal rows of thumbnail plus caption
    List,
    /// Two-column thumbnail grid
    Grid,
}

impl FeedLayout {
    pub fn for_spans(col_span: u32, row_span: u32) -> Self {
        match (col_span >= 2, row_span >= 2) {
            (true, true) => FeedLayout::Large,
            (true, false) => FeedLayout::Wide,
            (false, true) => FeedLayout::Tall,
            (false, false) => FeedLayout::Small,
        }
    }

    pub fn thumbnail_count(self) -> usize {
        match self {
            FeedLayout::Small | FeedLayout::Wide => 2,
            FeedLayout::Large | FeedLayout::Tall => 4,
        }
    }

    pub fn shows_titles(self) -> bool {
        matches!(self, FeedLayout::Large | FeedLayout::Tall)
    }

    pub fn arrangement(self) -> FeedArrangement {
        match self {
            FeedLayout::Tall => FeedArrangement::List,
            _ => FeedArrangement::Grid,
        }
    }

    /// Small tiles get a condensed header and tighter spacing
    pub fn is_compact(self) -> bool {
        self == FeedLayout::Small
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeedLayout::Large => "large",
            FeedLayout::Wide => "wide",
            FeedLayout::Tall => "tall",
            FeedLayout::Small => "small",
        }
    }
}
