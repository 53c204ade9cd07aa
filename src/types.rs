//! Resolved-style primitives shared by every shape.
//!
//! Everything here is a small `Copy` value with structural equality.

use std::fmt;

/// A resolved length: absolute pixels, a percentage of some reference
/// dimension, or `auto`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Length {
    /// Pixels, already multiplied by the effective zoom.
    Fixed(f64),
    /// Percentage in the 0-100 range (not a fraction).
    Percent(f64),
    #[default]
    Auto,
}

impl Length {
    pub const ZERO: Length = Length::Fixed(0.0);

    #[inline]
    pub const fn fixed(px: f64) -> Length {
        Length::Fixed(px)
    }

    #[inline]
    pub const fn percent(p: f64) -> Length {
        Length::Percent(p)
    }

    /// Resolve against a reference dimension.
    ///
    /// `Auto` has no meaning in a resolution context and resolves to zero;
    /// callers should check [`Length::is_auto`] first where auto is legal.
    pub fn resolve(self, dimension: f64) -> f64 {
        match self {
            Length::Fixed(px) => px,
            Length::Percent(p) => p / 100.0 * dimension,
            Length::Auto => 0.0,
        }
    }

    #[inline]
    pub fn is_auto(self) -> bool {
        matches!(self, Length::Auto)
    }

    #[inline]
    pub fn is_percent(self) -> bool {
        matches!(self, Length::Percent(_))
    }

    /// True for `0px` and `0%`
    pub fn is_zero(self) -> bool {
        match self {
            Length::Fixed(v) | Length::Percent(v) => v == 0.0,
            Length::Auto => false,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Fixed(px) => write!(f, "{}px", crate::serialize::format_number(*px)),
            Length::Percent(p) => write!(f, "{}%", crate::serialize::format_number(*p)),
            Length::Auto => f.write_str("auto"),
        }
    }
}

/// Width/height pair, used for one elliptical corner radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthSize {
    pub width: Length,
    pub height: Length,
}

impl LengthSize {
    pub const ZERO: LengthSize = LengthSize {
        width: Length::ZERO,
        height: Length::ZERO,
    };

    pub const fn new(width: Length, height: Length) -> Self {
        LengthSize { width, height }
    }

    /// Same length on both axes
    pub const fn uniform(length: Length) -> Self {
        LengthSize {
            width: length,
            height: length,
        }
    }
}

impl Default for LengthSize {
    fn default() -> Self {
        LengthSize::ZERO
    }
}

/// Edge a center coordinate is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Edge {
    /// `left` on the horizontal axis, `top` on the vertical one
    #[default]
    TopLeft,
    /// `right` on the horizontal axis, `bottom` on the vertical one
    BottomRight,
}

/// Position along one axis, measured from an edge of the reference box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterCoordinate {
    pub edge: Edge,
    pub offset: Length,
}

impl CenterCoordinate {
    /// `center`: 50% from the top/left edge
    pub const CENTER: CenterCoordinate = CenterCoordinate {
        edge: Edge::TopLeft,
        offset: Length::Percent(50.0),
    };

    pub const fn new(edge: Edge, offset: Length) -> Self {
        CenterCoordinate { edge, offset }
    }

    pub const fn from_top_left(offset: Length) -> Self {
        CenterCoordinate::new(Edge::TopLeft, offset)
    }

    pub const fn from_bottom_right(offset: Length) -> Self {
        CenterCoordinate::new(Edge::BottomRight, offset)
    }

    /// Physical offset from the top/left edge of a box of the given size.
    pub fn computed_length(&self, box_dimension: f64) -> f64 {
        let offset = self.offset.resolve(box_dimension);
        match self.edge {
            Edge::TopLeft => offset,
            Edge::BottomRight => box_dimension - offset,
        }
    }
}

impl Default for CenterCoordinate {
    fn default() -> Self {
        CenterCoordinate::CENTER
    }
}

/// Radius of a circle or one axis of an ellipse.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum RadiusSpec {
    Value(Length),
    #[default]
    ClosestSide,
    FarthestSide,
}

/// Corner rounding for inset(), rect() and xywh().
///
/// `None` means the corner was never set and behaves as `0px 0px`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: Option<LengthSize>,
    pub top_right: Option<LengthSize>,
    pub bottom_right: Option<LengthSize>,
    pub bottom_left: Option<LengthSize>,
}

impl CornerRadii {
    /// All four corners set to the same radius
    pub fn uniform(radius: LengthSize) -> Self {
        CornerRadii {
            top_left: Some(radius),
            top_right: Some(radius),
            bottom_right: Some(radius),
            bottom_left: Some(radius),
        }
    }

    /// Corners in top-left, top-right, bottom-right, bottom-left order
    pub fn from_corners(corners: [LengthSize; 4]) -> Self {
        let [top_left, top_right, bottom_right, bottom_left] = corners;
        CornerRadii {
            top_left: Some(top_left),
            top_right: Some(top_right),
            bottom_right: Some(bottom_right),
            bottom_left: Some(bottom_left),
        }
    }

    pub fn with_top_left(mut self, radius: LengthSize) -> Self {
        self.top_left = Some(radius);
        self
    }

    pub fn with_top_right(mut self, radius: LengthSize) -> Self {
        self.top_right = Some(radius);
        self
    }

    pub fn with_bottom_right(mut self, radius: LengthSize) -> Self {
        self.bottom_right = Some(radius);
        self
    }

    pub fn with_bottom_left(mut self, radius: LengthSize) -> Self {
        self.bottom_left = Some(radius);
        self
    }

    /// True when no corner has been set
    pub fn is_unset(&self) -> bool {
        self.top_left.is_none()
            && self.top_right.is_none()
            && self.bottom_right.is_none()
            && self.bottom_left.is_none()
    }

    /// The four corners with unset ones filled in as zero.
    pub fn resolved(&self) -> [LengthSize; 4] {
        [
            self.top_left.unwrap_or_default(),
            self.top_right.unwrap_or_default(),
            self.bottom_right.unwrap_or_default(),
            self.bottom_left.unwrap_or_default(),
        ]
    }
}

/// Fill rule of a polygon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WindRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// How far a ray() extends
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RaySize {
    #[default]
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
    Sides,
}
