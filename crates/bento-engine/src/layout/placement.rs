use crate::models::Block;

/// Corner radius in pixels; smaller tiles get tighter corners
pub fn corner_radius_px(col_span: u32, row_span: u32) -> u8 {
    match col_span.min(row_span) {
        0 | 1 => 8,
        2 => 10,
        3 => 12,
        _ => 14,
    }
}

/// Explicit grid coordinates for a block, if the host assigned any.
///
/// Axes without a start coordinate are left to auto-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPlacement {
    pub columns: Option<(u32, u32)>,
    pub rows: Option<(u32, u32)>,
    pub z_index: Option<i32>,
}

impl GridPlacement {
    pub fn for_block(block: &Block) -> Self {
        Self {
            columns: block
                .grid_column
                .map(|start| (start, start.saturating_add(block.col_span))),
            rows: block
                .grid_row
                .map(|start| (start, start.saturating_add(block.row_span))),
            z_index: block.z_index,
        }
    }

    pub fn is_auto_flow(&self) -> bool {
        self.columns.is_none() && self.rows.is_none()
    }

    /// Inline CSS declarations for this placement
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some((start, end)) = self.columns {
            css.push_str(&format!("grid-column: {start} / {end}; "));
        }
        if let Some((start, end)) = self.rows {
            css.push_str(&format!("grid-row: {start} / {end}; "));
        }
        if let Some(z) = self.z_index {
            css.push_str(&format!("z-index: {z}; "));
        }
        css
    }
}
