use crate::foundation::core::{Canvas, Point, Size};

/// Horizontal anchor of an overlay on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignX {
    /// `margin` px from the left edge.
    Left,
    /// Centred horizontally, no margin.
    #[default]
    Center,
    /// `margin` px from the right edge.
    Right,
}

/// Vertical anchor of an overlay on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignY {
    /// `margin` px from the top edge.
    Top,
    /// Centred vertically, no margin.
    #[default]
    Center,
    /// `margin` px from the bottom edge.
    Bottom,
}

/// Where an overlay sits on the canvas, parsed from free text such as
/// `"Bottom right corner"`.
///
/// Parsing is keyword based and case-insensitive: "right"/"left" pick the
/// horizontal edge, "bottom"/"top" the vertical edge, and a missing axis keyword
/// centres that axis. When both keywords of an axis appear, "right" wins over
/// "left" and "bottom" wins over "top". Keywords match as plain substrings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// "top left"
    TopLeft,
    /// "top"
    TopCenter,
    /// "top right"
    TopRight,
    /// "left"
    CenterLeft,
    /// Neither axis keyword present.
    #[default]
    Center,
    /// "right"
    CenterRight,
    /// "bottom left"
    BottomLeft,
    /// "bottom"
    BottomCenter,
    /// "bottom right"
    BottomRight,
}

impl Placement {
    /// Parse free placement text. Never fails; unknown text centres the overlay.
    pub fn parse(text: &str) -> Self {
        let text = text.to_lowercase();

        let x = if text.contains("right") {
            AlignX::Right
        } else if text.contains("left") {
            AlignX::Left
        } else {
            AlignX::Center
        };

        let y = if text.contains("bottom") {
            AlignY::Bottom
        } else if text.contains("top") {
            AlignY::Top
        } else {
            AlignY::Center
        };

        Self::from_axes(x, y)
    }

    /// Combine a horizontal and a vertical anchor.
    pub fn from_axes(x: AlignX, y: AlignY) -> Self {
        match (y, x) {
            (AlignY::Top, AlignX::Left) => Self::TopLeft,
            (AlignY::Top, AlignX::Center) => Self::TopCenter,
            (AlignY::Top, AlignX::Right) => Self::TopRight,
            (AlignY::Center, AlignX::Left) => Self::CenterLeft,
            (AlignY::Center, AlignX::Center) => Self::Center,
            (AlignY::Center, AlignX::Right) => Self::CenterRight,
            (AlignY::Bottom, AlignX::Left) => Self::BottomLeft,
            (AlignY::Bottom, AlignX::Center) => Self::BottomCenter,
            (AlignY::Bottom, AlignX::Right) => Self::BottomRight,
        }
    }

    /// Split into `(horizontal, vertical)` anchors.
    pub fn axes(self) -> (AlignX, AlignY) {
        match self {
            Self::TopLeft => (AlignX::Left, AlignY::Top),
            Self::TopCenter => (AlignX::Center, AlignY::Top),
            Self::TopRight => (AlignX::Right, AlignY::Top),
            Self::CenterLeft => (AlignX::Left, AlignY::Center),
            Self::Center => (AlignX::Center, AlignY::Center),
            Self::CenterRight => (AlignX::Right, AlignY::Center),
            Self::BottomLeft => (AlignX::Left, AlignY::Bottom),
            Self::BottomCenter => (AlignX::Center, AlignY::Bottom),
            Self::BottomRight => (AlignX::Right, AlignY::Bottom),
        }
    }

    /// Top-left corner of an `overlay`-sized box on `canvas`, `margin` px from
    /// any anchored edge. May be negative when the overlay exceeds the canvas.
    pub fn anchor(self, canvas: Size, overlay: Size, margin: f64) -> Point {
        let (ax, ay) = self.axes();
        Point::new(
            edge_offset(canvas.width, overlay.width, margin, ax.into()),
            edge_offset(canvas.height, overlay.height, margin, ay.into()),
        )
    }
}

impl std::str::FromStr for Placement {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Resolve free-text `placement` for an already scaled `overlay` on `canvas`,
/// using the canvas margin (5% of width) on both axes.
pub fn resolve_anchor(placement: &str, canvas: Canvas, overlay: Size) -> Point {
    Placement::parse(placement).anchor(canvas.size(), overlay, canvas.margin())
}

fn edge_offset(container: f64, content: f64, margin: f64, edge: EdgeKind) -> f64 {
    match edge {
        EdgeKind::Start => margin,
        EdgeKind::Center => (container - content) / 2.0,
        EdgeKind::End => container - content - margin,
    }
}

enum EdgeKind {
    Start,
    Center,
    End,
}

impl From<AlignX> for EdgeKind {
    fn from(value: AlignX) -> Self {
        match value {
            AlignX::Left => EdgeKind::Start,
            AlignX::Center => EdgeKind::Center,
            AlignX::Right => EdgeKind::End,
        }
    }
}

impl From<AlignY> for EdgeKind {
    fn from(value: AlignY) -> Self {
        match value {
            AlignY::Top => EdgeKind::Start,
            AlignY::Center => EdgeKind::Center,
            AlignY::Bottom => EdgeKind::End,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
