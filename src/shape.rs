//! The resolved-style shape model.
//!
//! A [`Shape`] is one of the seven basic shapes with its lengths already
//! resolved to pixels or percentages. Shapes are immutable values; the only
//! incremental construction goes through [`PolygonBuilder`] and the
//! `CornerRadii::with_*` methods.

use enum_dispatch::enum_dispatch;

use crate::errors::ShapeError;
use crate::geometry::{ReferenceBox, ResolvedShape};
use crate::types::{CenterCoordinate, CornerRadii, Length, RadiusSpec, RaySize, WindRule};

/// Geometry of a shape laid out in a reference box
#[enum_dispatch]
pub trait ShapeGeometry {
    /// Resolve percentages and keywords against `reference`.
    fn resolve_in(&self, reference: &ReferenceBox) -> ResolvedShape;
}

/// A basic shape as held by a computed `clip-path`, `shape-outside` or
/// `offset-path` value.
#[enum_dispatch(ShapeGeometry)]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Inset(Inset),
    Rect(Rect),
    Xywh(Xywh),
    Ray(Ray),
}

impl Shape {
    /// CSS function name of the active variant
    pub fn function_name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Polygon(_) => "polygon",
            Shape::Inset(_) => "inset",
            Shape::Rect(_) => "rect",
            Shape::Xywh(_) => "xywh",
            Shape::Ray(_) => "ray",
        }
    }

    /// Corner radii of the rectangular shapes
    pub fn corners(&self) -> Option<&CornerRadii> {
        match self {
            Shape::Inset(inset) => Some(&inset.corners),
            Shape::Rect(rect) => Some(&rect.corners),
            Shape::Xywh(xywh) => Some(&xywh.corners),
            Shape::Circle(_) | Shape::Ellipse(_) | Shape::Polygon(_) | Shape::Ray(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Circle {
    pub center_x: CenterCoordinate,
    pub center_y: CenterCoordinate,
    pub radius: RadiusSpec,
}

impl Circle {
    pub fn new(center_x: CenterCoordinate, center_y: CenterCoordinate, radius: RadiusSpec) -> Self {
        Circle {
            center_x,
            center_y,
            radius,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Ellipse {
    pub center_x: CenterCoordinate,
    pub center_y: CenterCoordinate,
    pub radius_x: RadiusSpec,
    pub radius_y: RadiusSpec,
}

impl Ellipse {
    pub fn new(
        center_x: CenterCoordinate,
        center_y: CenterCoordinate,
        radius_x: RadiusSpec,
        radius_y: RadiusSpec,
    ) -> Self {
        Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
        }
    }
}

/// Polygon vertices in author order, at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    wind_rule: WindRule,
    points: Vec<(Length, Length)>,
}

impl Polygon {
    pub fn builder(wind_rule: WindRule) -> PolygonBuilder {
        PolygonBuilder {
            wind_rule,
            points: Vec::new(),
        }
    }

    pub fn wind_rule(&self) -> WindRule {
        self.wind_rule
    }

    pub fn points(&self) -> &[(Length, Length)] {
        &self.points
    }

    /// Coordinates flattened as x0, y0, x1, y1, ... (always an even count)
    pub fn coordinates(&self) -> impl Iterator<Item = Length> + '_ {
        self.points.iter().flat_map(|&(x, y)| [x, y])
    }
}

/// Appends vertices one complete pair at a time
#[derive(Clone, Debug)]
pub struct PolygonBuilder {
    wind_rule: WindRule,
    points: Vec<(Length, Length)>,
}

impl PolygonBuilder {
    pub fn point(mut self, x: Length, y: Length) -> Self {
        self.push_point(x, y);
        self
    }

    pub fn push_point(&mut self, x: Length, y: Length) {
        self.points.push((x, y));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fails when no point was added.
    pub fn build(self) -> Result<Polygon, ShapeError> {
        if self.points.is_empty() {
            return Err(ShapeError::Arity {
                slot: "polygon()",
                expected: "at least 1",
                got: 0,
            });
        }
        Ok(Polygon {
            wind_rule: self.wind_rule,
            points: self.points,
        })
    }
}

/// `inset()`: offsets inward from each edge of the reference box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inset {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
    pub corners: CornerRadii,
}

impl Inset {
    /// Rejects `auto` and non-finite edges, which only `rect()` can hold.
    pub fn new(
        top: Length,
        right: Length,
        bottom: Length,
        left: Length,
    ) -> Result<Self, ShapeError> {
        let edges = [("top", top), ("right", right), ("bottom", bottom), ("left", left)];
        for (edge, length) in edges {
            check_inset_edge(edge, length)?;
        }
        Ok(Inset {
            top,
            right,
            bottom,
            left,
            corners: CornerRadii::default(),
        })
    }

    pub fn uniform(length: Length) -> Result<Self, ShapeError> {
        Inset::new(length, length, length, length)
    }

    pub fn with_corners(mut self, corners: CornerRadii) -> Self {
        self.corners = corners;
        self
    }
}

fn check_inset_edge(edge: &'static str, length: Length) -> Result<(), ShapeError> {
    match length {
        Length::Fixed(v) | Length::Percent(v) if v.is_finite() => Ok(()),
        _ => Err(ShapeError::UnexpectedValue {
            slot: "inset()",
            found: format!("{edge} edge `{length}`"),
        }),
    }
}

/// `rect()`: edges measured from the top and left of the reference box.
/// Any edge may be `auto`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
    pub corners: CornerRadii,
}

impl Rect {
    pub fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Rect {
            top,
            right,
            bottom,
            left,
            corners: CornerRadii::default(),
        }
    }

    pub fn with_corners(mut self, corners: CornerRadii) -> Self {
        self.corners = corners;
        self
    }
}

/// `xywh()`: origin plus a strictly positive size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xywh {
    x: Length,
    y: Length,
    width: Length,
    height: Length,
    corners: CornerRadii,
}

impl Xywh {
    /// Rejects a width or height that is auto, non-finite, zero or negative.
    pub fn new(
        x: Length,
        y: Length,
        width: Length,
        height: Length,
        corners: CornerRadii,
    ) -> Result<Self, ShapeError> {
        check_positive("width", width)?;
        check_positive("height", height)?;
        Ok(Xywh {
            x,
            y,
            width,
            height,
            corners,
        })
    }

    pub fn x(&self) -> Length {
        self.x
    }

    pub fn y(&self) -> Length {
        self.y
    }

    pub fn width(&self) -> Length {
        self.width
    }

    pub fn height(&self) -> Length {
        self.height
    }

    pub fn corners(&self) -> &CornerRadii {
        &self.corners
    }
}

fn check_positive(dimension: &'static str, length: Length) -> Result<(), ShapeError> {
    let valid = match length {
        Length::Fixed(v) | Length::Percent(v) => v.is_finite() && v > 0.0,
        Length::Auto => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ShapeError::DegenerateGeometry {
            dimension,
            value: length.to_string(),
        })
    }
}

/// `ray()`: a straight path from the origin at a fixed angle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Ray {
    /// Clockwise from the top, in degrees
    pub angle_degrees: f64,
    pub size: RaySize,
    pub contain: bool,
}

impl Ray {
    pub fn new(angle_degrees: f64, size: RaySize, contain: bool) -> Self {
        Ray {
            angle_degrees,
            size,
            contain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, LengthSize};

    #[test]
    fn polygon_builder_preserves_order_and_duplicates() {
        let a = (Length::fixed(0.0), Length::fixed(0.0));
        let b = (Length::percent(100.0), Length::fixed(0.0));
        let polygon = Polygon::builder(WindRule::EvenOdd)
            .point(a.0, a.1)
            .point(b.0, b.1)
            .point(a.0, a.1)
            .build()
            .unwrap();

        assert_eq!(polygon.wind_rule(), WindRule::EvenOdd);
        assert_eq!(polygon.points(), &[a, b, a]);
        assert_eq!(polygon.coordinates().count(), 6);
    }

    #[test]
    fn polygon_needs_a_point() {
        let builder = Polygon::builder(WindRule::NonZero);
        assert!(builder.is_empty());
        assert_eq!(
            builder.build(),
            Err(ShapeError::Arity {
                slot: "polygon()",
                expected: "at least 1",
                got: 0
            })
        );
    }

    #[test]
    fn inset_rejects_edges_it_cannot_serialize() {
        assert!(Inset::uniform(Length::percent(5.0)).is_ok());
        assert!(matches!(
            Inset::uniform(Length::Auto),
            Err(ShapeError::UnexpectedValue { slot: "inset()", .. })
        ));
        let err = Inset::new(
            Length::ZERO,
            Length::ZERO,
            Length::fixed(f64::INFINITY),
            Length::ZERO,
        )
        .unwrap_err();
        assert!(err.to_string().contains("bottom edge"), "{err}");
    }

    #[test]
    fn xywh_accepts_positive_size() {
        let xywh = Xywh::new(
            Length::fixed(1.0),
            Length::fixed(2.0),
            Length::percent(50.0),
            Length::fixed(3.0),
            CornerRadii::default(),
        );
        assert!(xywh.is_ok());
    }

    #[test]
    fn xywh_rejects_non_positive_size() {
        let cases = [
            (Length::fixed(0.0), Length::fixed(10.0)),
            (Length::fixed(10.0), Length::fixed(-5.0)),
            (Length::percent(0.0), Length::fixed(10.0)),
            (Length::Auto, Length::fixed(10.0)),
            (Length::fixed(f64::INFINITY), Length::fixed(10.0)),
            (Length::fixed(10.0), Length::Percent(f64::NAN)),
        ];
        for (width, height) in cases {
            let result = Xywh::new(
                Length::ZERO,
                Length::ZERO,
                width,
                height,
                CornerRadii::default(),
            );
            assert!(
                matches!(result, Err(ShapeError::DegenerateGeometry { .. })),
                "{width:?} x {height:?} should be rejected"
            );
        }
    }

    #[test]
    fn xywh_error_names_dimension() {
        let err = Xywh::new(
            Length::ZERO,
            Length::ZERO,
            Length::fixed(4.0),
            Length::fixed(-5.0),
            CornerRadii::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ShapeError::DegenerateGeometry {
                dimension: "height",
                value: "-5px".to_string()
            }
        );
    }

    #[test]
    fn shapes_compare_structurally() {
        let a = Shape::Circle(Circle::new(
            CenterCoordinate::from_bottom_right(Length::fixed(20.0)),
            CenterCoordinate::CENTER,
            RadiusSpec::Value(Length::fixed(10.0)),
        ));
        let b = Shape::Circle(Circle::new(
            CenterCoordinate::new(Edge::BottomRight, Length::fixed(20.0)),
            CenterCoordinate::from_top_left(Length::percent(50.0)),
            RadiusSpec::Value(Length::fixed(10.0)),
        ));
        assert_eq!(a, b);

        let ellipse = Shape::Ellipse(Ellipse::default());
        assert_ne!(Shape::Circle(Circle::default()), ellipse);
    }

    #[test]
    fn inset_and_rect_are_distinct_variants() {
        let inset = Shape::Inset(Inset::uniform(Length::fixed(1.0)).unwrap());
        let rect = Shape::Rect(Rect::new(
            Length::fixed(1.0),
            Length::fixed(1.0),
            Length::fixed(1.0),
            Length::fixed(1.0),
        ));
        assert_ne!(inset, rect);
    }

    #[test]
    fn corners_accessor() {
        let radius = LengthSize::uniform(Length::fixed(2.0));
        let inset = Shape::Inset(
            Inset::uniform(Length::ZERO)
                .unwrap()
                .with_corners(CornerRadii::uniform(radius)),
        );
        assert_eq!(inset.corners().map(|c| c.top_left), Some(Some(radius)));
        assert!(Shape::Ray(Ray::default()).corners().is_none());
        assert_eq!(inset.function_name(), "inset");
    }

    #[test]
    fn shapes_are_thread_safe_values() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Shape>();
    }
}
