//! Size tiers: a coarse size class derived from a block's spans.
//!
//! The tier only selects text sizes. It never feeds back into layout
//! geometry.

/// Responsive size class of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeTier {
    Xs,
    Sm,
    Md,
    Lg,
}

/// Classify a `col_span` x `row_span` footprint.
///
/// Each tier checks the smallest dimension first and then the total area, and
/// the first tier whose condition holds wins. Small areas therefore read as
/// small text even when one span is long (`3x1` is `Xs`).
pub fn classify(col_span: u32, row_span: u32) -> SizeTier {
    let min_dim = col_span.min(row_span);
    let area = col_span.saturating_mul(row_span);

    if min_dim <= 1 || area <= 4 {
        SizeTier::Xs
    } else if min_dim <= 2 || area <= 8 {
        SizeTier::Sm
    } else if min_dim <= 3 || area <= 12 {
        SizeTier::Md
    } else {
        SizeTier::Lg
    }
}

/// Font size pair in pixels: narrow viewports, then wide viewports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize {
    pub compact: u16,
    pub regular: u16,
}

const fn size(compact: u16, regular: u16) -> TextSize {
    TextSize { compact, regular }
}

/// The six text roles a tile can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextScale {
    /// Title of a TEXT block
    pub title_text: TextSize,
    /// Title of every other standard block
    pub title_default: TextSize,
    pub subtext: TextSize,
    /// Body copy of a TEXT block
    pub body: TextSize,
    pub overlay_title: TextSize,
    pub overlay_subtext: TextSize,
}

const XS: TextScale = TextScale {
    title_text: size(14, 16),
    title_default: size(12, 14),
    subtext: size(8, 10),
    body: size(10, 12),
    overlay_title: size(10, 12),
    overlay_subtext: size(8, 10),
};

const SM: TextScale = TextScale {
    title_text: size(16, 18),
    title_default: size(14, 16),
    subtext: size(10, 12),
    body: size(12, 14),
    overlay_title: size(12, 14),
    overlay_subtext: size(10, 12),
};

const MD: TextScale = TextScale {
    title_text: size(18, 20),
    title_default: size(16, 18),
    subtext: size(12, 14),
    body: size(14, 16),
    overlay_title: size(14, 16),
    overlay_subtext: size(12, 14),
};

const LG: TextScale = TextScale {
    title_text: size(20, 24),
    title_default: size(18, 20),
    subtext: size(14, 16),
    body: size(16, 18),
    overlay_title: size(16, 18),
    overlay_subtext: size(14, 16),
};

impl SizeTier {
    pub fn text_scale(self) -> &'static TextScale {
        match self {
            SizeTier::Xs => &XS,
            SizeTier::Sm => &SM,
            SizeTier::Md => &MD,
            SizeTier::Lg => &LG,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeTier::Xs => "xs",
            SizeTier::Sm => "sm",
            SizeTier::Md => "md",
            SizeTier::Lg => "lg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, SizeTier::Xs)]
    #[case(2, 2, SizeTier::Xs)]
    #[case(3, 1, SizeTier::Xs)]
    #[case(1, 9, SizeTier::Xs)]
    #[case(3, 2, SizeTier::Sm)]
    #[case(2, 4, SizeTier::Sm)]
    #[case(2, 9, SizeTier::Sm)]
    #[case(3, 3, SizeTier::Md)]
    #[case(3, 4, SizeTier::Md)]
    #[case(3, 9, SizeTier::Md)]
    #[case(4, 4, SizeTier::Lg)]
    #[case(9, 5, SizeTier::Lg)]
    fn test_classify(#[case] cols: u32, #[case] rows: u32, #[case] expected: SizeTier) {
        assert_eq!(classify(cols, rows), expected);
    }

    #[test]
    fn test_classify_is_symmetric() {
        for cols in 1..=9 {
            for rows in 1..=9 {
                assert_eq!(classify(cols, rows), classify(rows, cols), "{cols}x{rows}");
            }
        }
    }

    #[test]
    fn test_tier_grows_with_footprint() {
        for span in 1..9 {
            assert!(classify(span, span) <= classify(span + 1, span + 1));
        }
    }

    #[test]
    fn test_text_scale_lookup() {
        let scale = SizeTier::Md.text_scale();
        assert_eq!(scale.title_text, TextSize { compact: 18, regular: 20 });
        assert_eq!(scale.subtext, TextSize { compact: 12, regular: 14 });
        insta::assert_debug_snapshot!(SizeTier::Xs.text_scale().overlay_subtext, @r"
        TextSize {
            compact: 8,
            regular: 10,
        }
        ");
    }
}
