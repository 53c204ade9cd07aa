//! Geometry of shapes laid out in a reference box
//!
//! Coordinates are CSS pixels with y pointing down, the same space the
//! reference box is given in.

use glam::{DVec2, dvec2};

use crate::shape::{Circle, Ellipse, Inset, Polygon, Ray, Rect, Shape, ShapeGeometry, Xywh};
use crate::types::{CenterCoordinate, CornerRadii, Length, RadiusSpec, RaySize, WindRule};

/// The box percentages and keywords resolve against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBox {
    pub origin: DVec2,
    pub size: DVec2,
}

impl ReferenceBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        ReferenceBox {
            origin: dvec2(x, y),
            size: dvec2(width, height),
        }
    }

    /// A box anchored at the origin
    pub fn from_size(width: f64, height: f64) -> Self {
        ReferenceBox::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }

    /// Offset of a center position from the box origin
    fn position(&self, x: CenterCoordinate, y: CenterCoordinate) -> DVec2 {
        dvec2(x.computed_length(self.size.x), y.computed_length(self.size.y))
    }
}

/// A shape with every length resolved to pixels
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedShape {
    Ellipse {
        center: DVec2,
        radii: DVec2,
    },
    Polygon {
        wind_rule: WindRule,
        points: Vec<DVec2>,
    },
    /// Corner radii are ordered top-left, top-right, bottom-right,
    /// bottom-left and never overlap along an edge.
    RoundedRect {
        origin: DVec2,
        size: DVec2,
        radii: [DVec2; 4],
    },
    Ray {
        origin: DVec2,
        angle_degrees: f64,
        length: f64,
        contain: bool,
    },
}

/// Resolve `shape` inside `reference`
pub fn resolve(shape: &Shape, reference: &ReferenceBox) -> ResolvedShape {
    shape.resolve_in(reference)
}

impl ShapeGeometry for Circle {
    fn resolve_in(&self, reference: &ReferenceBox) -> ResolvedShape {
        let offset = reference.position(self.center_x, self.center_y);
        let size = reference.size;
        let radius = match self.radius {
            RadiusSpec::Value(length) => {
                let diagonal = size.length() / std::f64::consts::SQRT_2;
                length.resolve(diagonal)
            }
            RadiusSpec::ClosestSide => side_distances(offset.x, size.x)
                .0
                .min(side_distances(offset.y, size.y).0),
            RadiusSpec::FarthestSide => side_distances(offset.x, size.x)
                .1
                .max(side_distances(offset.y, size.y).1),
        };
        ResolvedShape::Ellipse {
            center: reference.origin + offset,
            radii: DVec2::splat(radius.max(0.0)),
        }
    }
}

impl ShapeGeometry for Ellipse {
    fn resolve_in(&self, reference: &ReferenceBox) -> ResolvedShape {
        let offset = reference.position(self.center_x, self.center_y);
        let size = reference.size;
        let radii = dvec2(
            ellipse_radius(self.radius_x, offset.x, size.x),
            ellipse_radius(self.radius_y, offset.y, size.y),
        );
        ResolvedShape::Ellipse {
            center: reference.origin + offset,
            radii: radii.max(DVec2::ZERO),
        }
    }
}

/// Distance from `center` to the nearer and farther edge of `0..dimension`
fn side_distances(center: f64, dimension: f64) -> (f64, f64) {
    let near = center.abs();
    let far = (dimension - center).abs();
    (near.min(far), near.max(far))
}

fn ellipse_radius(radius: RadiusSpec, center: f64, dimension: f64) -> f64 {
    match radius {
        RadiusSpec::Value(length) => length.resolve(dimension),
        RadiusSpec::ClosestSide => side_distances(center, dimension).0,
        RadiusSpec::FarthestSide => side_distances(center, dimension).1,
    }
}

impl ShapeGeometry for Polygon {
    fn resolve_in(&self, reference: &ReferenceBox) -> ResolvedShape {
        let points = self
            .points()
            .iter()
            .map(|&(x, y)| {
                reference.origin + dvec2(x.resolve(reference.size.x), y.resolve(reference.size.y))
            })
            .collect();
        ResolvedShape::Polygon {
            wind_rule: self.wind_rule(),
            points,
        }
    }
}

impl ShapeGeometry for Inset {
    fn resolve_in(&self, reference: &ReferenceBox) -> ResolvedShape {
        let size = reference.size;
        let top_left = dvec2(self.left.resolve(size.x), self.top.resolve(size.y));
        let bottom_right = dvec2(
            size.x - self.right.resolve(size.x),
            size.y - self.bottom.resolve(size.y),
        );
        rounded_rect(reference, top_left, bottom_right - top_left, &self.corners)
    }
}

impl ShapeGeometry for Rect {
    fn resolve_in(&self, reference: &ReferenceBox) -> ResolvedShape {
        let size = reference.size;
        let edge = |length: Length, auto: f64, dimension: f64| {
            if length.is_auto() {
                auto
            } else {
                length.resolve(dimension)
            }
        };
        let top_left = dvec2(edge(self.left, 0.0, size.x), edge(self.top, 0.0, size.y));
        let bottom_right = dvec2(
            edge(self.right, size.x, size.x),
            edge(self.bottom, size.y, size.y),
        );
        rounded_rect(reference, top_left, bottom_right - top_left, &self.corners)
    }
}

impl ShapeGeometry for Xywh {
    fn resolve_in(&self, reference: &ReferenceBox) -> ResolvedShape {
        let size = reference.size;
        let origin = dvec2(self.x().resolve(size.x), self.y().resolve(size.y));
        let extent = dvec2(self.width().resolve(size.x), self.height().resolve(size.y));
        rounded_rect(reference, origin, extent, self.corners())
    }
}

/// Build a rounded rectangle at `offset` from the box origin. Negative
/// extents clamp to zero.
fn rounded_rect(
    reference: &ReferenceBox,
    offset: DVec2,
    extent: DVec2,
    corners: &CornerRadii,
) -> ResolvedShape {
    let size = extent.max(DVec2::ZERO);
    let radii = corners.resolved().map(|radius| {
        dvec2(
            radius.width.resolve(reference.size.x),
            radius.height.resolve(reference.size.y),
        )
        .max(DVec2::ZERO)
    });
    ResolvedShape::RoundedRect {
        origin: reference.origin + offset,
        size,
        radii: constrain_radii(radii, size),
    }
}

/// Scale all radii by one factor so that adjacent radii fit along every edge
fn constrain_radii(radii: [DVec2; 4], size: DVec2) -> [DVec2; 4] {
    let [top_left, top_right, bottom_right, bottom_left] = radii;
    let edges = [
        (size.x, top_left.x + top_right.x),
        (size.x, bottom_left.x + bottom_right.x),
        (size.y, top_left.y + bottom_left.y),
        (size.y, top_right.y + bottom_right.y),
    ];
    let factor = edges
        .into_iter()
        .filter(|&(_, sum)| sum > 0.0)
        .map(|(edge, sum)| edge / sum)
        .fold(1.0_f64, f64::min);
    if factor < 1.0 {
        radii.map(|radius| radius * factor)
    } else {
        radii
    }
}

impl ShapeGeometry for Ray {
    /// The ray starts at the box center.
    fn resolve_in(&self, reference: &ReferenceBox) -> ResolvedShape {
        let half = reference.size * 0.5;
        let length = match self.size {
            RaySize::ClosestSide => half.x.min(half.y),
            RaySize::FarthestSide => half.x.max(half.y),
            RaySize::ClosestCorner | RaySize::FarthestCorner => half.length(),
            RaySize::Sides => {
                let direction = ray_direction(self.angle_degrees);
                [(direction.x, half.x), (direction.y, half.y)]
                    .into_iter()
                    .filter(|&(component, _)| component.abs() > f64::EPSILON)
                    .map(|(component, extent)| extent / component.abs())
                    .fold(f64::INFINITY, f64::min)
            }
        };
        ResolvedShape::Ray {
            origin: reference.center(),
            angle_degrees: self.angle_degrees,
            length: if length.is_finite() { length } else { 0.0 },
            contain: self.contain,
        }
    }
}

/// Unit vector for an angle measured clockwise from the top (y down)
pub fn ray_direction(angle_degrees: f64) -> DVec2 {
    let radians = angle_degrees.to_radians();
    dvec2(radians.sin(), -radians.cos())
}
