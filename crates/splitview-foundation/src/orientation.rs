use splitview_ui_graphics::Point;

/// Direction a divider moves in.
///
/// A horizontal divider sits between side-by-side panels and is dragged
/// left/right; a vertical divider sits between stacked panels and is dragged
/// up/down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Returns the component of `point` along this orientation's axis.
    #[inline]
    pub fn component(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// CSS cursor shown over a divider with this orientation.
    pub fn cursor(self) -> &'static str {
        match self {
            Orientation::Horizontal => "col-resize",
            Orientation::Vertical => "row-resize",
        }
    }
}
