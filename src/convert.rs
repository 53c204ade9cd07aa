//! Conversion between parsed shape values and resolved shapes.
//!
//! [`basic_shape_for_value`] resolves units against a [`ResolutionContext`];
//! [`value_for_basic_shape`] maps a resolved shape back to its computed
//! value, undoing the zoom.

use crate::context::{ResolutionContext, degrees_per_unit};
use crate::errors::ShapeError;
use crate::log::{debug, warn};
use crate::shape::{Circle, Ellipse, Inset, Polygon, Ray, Rect, Shape, Xywh};
use crate::types::{
    CenterCoordinate, CornerRadii, Edge, Length, LengthSize, RadiusSpec, RaySize,
};
use crate::value::{
    BasicShapeValue, CircleValue, CssValue, EllipseValue, InsetValue, Keyword, PolygonValue,
    RayValue, RectValue, XywhValue,
};

/// Convert a parsed shape function into a resolved [`Shape`].
pub fn basic_shape_for_value(
    value: &BasicShapeValue,
    ctx: &ResolutionContext,
) -> Result<Shape, ShapeError> {
    let shape = match value {
        BasicShapeValue::Circle(circle) => Shape::Circle(Circle::new(
            convert_center_coordinate(
                circle.center_x.as_ref(),
                X_SIDES,
                ctx,
                "circle() center x",
            )?,
            convert_center_coordinate(
                circle.center_y.as_ref(),
                Y_SIDES,
                ctx,
                "circle() center y",
            )?,
            convert_radius(circle.radius.as_ref(), ctx, "circle() radius")?,
        )),
        BasicShapeValue::Ellipse(ellipse) => Shape::Ellipse(Ellipse::new(
            convert_center_coordinate(
                ellipse.center_x.as_ref(),
                X_SIDES,
                ctx,
                "ellipse() center x",
            )?,
            convert_center_coordinate(
                ellipse.center_y.as_ref(),
                Y_SIDES,
                ctx,
                "ellipse() center y",
            )?,
            convert_radius(ellipse.radius_x.as_ref(), ctx, "ellipse() radius x")?,
            convert_radius(ellipse.radius_y.as_ref(), ctx, "ellipse() radius y")?,
        )),
        BasicShapeValue::Polygon(polygon) => {
            let mut builder = Polygon::builder(polygon.wind_rule);
            for point in &polygon.points {
                let CssValue::Pair(x, y) = point else {
                    return Err(unexpected("polygon() point", point));
                };
                builder.push_point(
                    convert_length(x, ctx, "polygon() x")?,
                    convert_length(y, ctx, "polygon() y")?,
                );
            }
            Shape::Polygon(builder.build()?)
        }
        BasicShapeValue::Inset(inset) => {
            let edges = convert_edges(&inset.edges, ctx, "inset()", convert_length)?;
            let [top, right, bottom, left] = edges;
            let corners = convert_corner_radii(inset.radii.as_ref(), ctx)?;
            Shape::Inset(Inset::new(top, right, bottom, left)?.with_corners(corners))
        }
        BasicShapeValue::Rect(rect) => {
            let edges = convert_edges(&rect.edges, ctx, "rect()", convert_length_or_auto)?;
            let [top, right, bottom, left] = edges;
            let corners = convert_corner_radii(rect.radii.as_ref(), ctx)?;
            Shape::Rect(Rect::new(top, right, bottom, left).with_corners(corners))
        }
        BasicShapeValue::Xywh(xywh) => Shape::Xywh(Xywh::new(
            convert_length(&xywh.x, ctx, "xywh() x")?,
            convert_length(&xywh.y, ctx, "xywh() y")?,
            convert_length(&xywh.width, ctx, "xywh() width")?,
            convert_length(&xywh.height, ctx, "xywh() height")?,
            convert_corner_radii(xywh.radii.as_ref(), ctx)?,
        )?),
        BasicShapeValue::Ray(ray) => Shape::Ray(Ray::new(
            convert_angle(&ray.angle, "ray() angle")?,
            convert_ray_size(ray.size)?,
            ray.contain,
        )),
    };
    debug!(shape = ?shape, "converted {}()", shape.function_name());
    Ok(shape)
}

/// Map a resolved [`Shape`] to its computed value.
///
/// Lengths come back in `px` (unzoomed) or `%`. Default centers are left
/// out so that a centered circle or ellipse serializes without `at`.
pub fn value_for_basic_shape(shape: &Shape, ctx: &ResolutionContext) -> BasicShapeValue {
    match shape {
        Shape::Circle(circle) => {
            let (center_x, center_y) = value_for_center(circle.center_x, circle.center_y, ctx);
            BasicShapeValue::Circle(CircleValue {
                radius: Some(value_for_radius(circle.radius, ctx)),
                center_x,
                center_y,
            })
        }
        Shape::Ellipse(ellipse) => {
            let (center_x, center_y) = value_for_center(ellipse.center_x, ellipse.center_y, ctx);
            BasicShapeValue::Ellipse(EllipseValue {
                radius_x: Some(value_for_radius(ellipse.radius_x, ctx)),
                radius_y: Some(value_for_radius(ellipse.radius_y, ctx)),
                center_x,
                center_y,
            })
        }
        Shape::Polygon(polygon) => BasicShapeValue::Polygon(PolygonValue {
            wind_rule: polygon.wind_rule(),
            points: polygon
                .points()
                .iter()
                .map(|&(x, y)| CssValue::pair(value_for_length(x, ctx), value_for_length(y, ctx)))
                .collect(),
        }),
        Shape::Inset(inset) => BasicShapeValue::Inset(InsetValue {
            edges: [inset.top, inset.right, inset.bottom, inset.left]
                .into_iter()
                .map(|edge| value_for_length(edge, ctx))
                .collect(),
            radii: value_for_corner_radii(&inset.corners, ctx),
        }),
        Shape::Rect(rect) => BasicShapeValue::Rect(RectValue {
            edges: [rect.top, rect.right, rect.bottom, rect.left]
                .into_iter()
                .map(|edge| value_for_length(edge, ctx))
                .collect(),
            radii: value_for_corner_radii(&rect.corners, ctx),
        }),
        Shape::Xywh(xywh) => BasicShapeValue::Xywh(XywhValue {
            x: value_for_length(xywh.x(), ctx),
            y: value_for_length(xywh.y(), ctx),
            width: value_for_length(xywh.width(), ctx),
            height: value_for_length(xywh.height(), ctx),
            radii: value_for_corner_radii(xywh.corners(), ctx),
        }),
        Shape::Ray(ray) => BasicShapeValue::Ray(RayValue {
            angle: CssValue::deg(ray.angle_degrees),
            size: Some(keyword_for_ray_size(ray.size)),
            contain: ray.contain,
        }),
    }
}

/// Expand one to four values the way `margin` does:
/// `[a]`, `[a b]`, `[a b c]` and `[a b c d]` become top, right, bottom, left.
pub fn expand_four_sides<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    let expanded = match values {
        [a] => [a.clone(), a.clone(), a.clone(), a.clone()],
        [a, b] => [a.clone(), b.clone(), a.clone(), b.clone()],
        [a, b, c] => [a.clone(), b.clone(), c.clone(), b.clone()],
        [a, b, c, d] => [a.clone(), b.clone(), c.clone(), d.clone()],
        _ => return None,
    };
    Some(expanded)
}

/// Resolve a length-percentage node.
pub fn convert_length(
    value: &CssValue,
    ctx: &ResolutionContext,
    slot: &'static str,
) -> Result<Length, ShapeError> {
    match value {
        CssValue::Percentage(p) => Ok(Length::Percent(*p)),
        CssValue::Number(n) if *n == 0.0 => Ok(Length::ZERO),
        CssValue::Dimension { value: v, unit } => ctx
            .zoomed_px(*v, *unit)
            .ok_or_else(|| unexpected(slot, value))
            .and_then(|px| finite(px, slot, value))
            .map(Length::Fixed),
        _ => Err(unexpected(slot, value)),
    }
}

/// Unit and zoom factors can push a finite number past `f64::MAX`
fn finite(resolved: f64, slot: &'static str, value: &CssValue) -> Result<f64, ShapeError> {
    if resolved.is_finite() {
        Ok(resolved)
    } else {
        warn!(slot, value = %value, "resolved value overflows");
        Err(ShapeError::OutOfRange {
            slot,
            value: value.to_string(),
        })
    }
}

fn convert_length_or_auto(
    value: &CssValue,
    ctx: &ResolutionContext,
    slot: &'static str,
) -> Result<Length, ShapeError> {
    if value.is_keyword(Keyword::Auto) {
        Ok(Length::Auto)
    } else {
        convert_length(value, ctx, slot)
    }
}

type LengthConverter =
    fn(&CssValue, &ResolutionContext, &'static str) -> Result<Length, ShapeError>;

fn convert_edges(
    edges: &[CssValue],
    ctx: &ResolutionContext,
    slot: &'static str,
    convert: LengthConverter,
) -> Result<[Length; 4], ShapeError> {
    let lengths = edges
        .iter()
        .map(|edge| convert(edge, ctx, slot))
        .collect::<Result<Vec<_>, _>>()?;
    expand_four_sides(&lengths).ok_or(ShapeError::Arity {
        slot,
        expected: "1 to 4",
        got: edges.len(),
    })
}

/// Side keywords of one center axis, near side first
type Sides = [Keyword; 2];

const X_SIDES: Sides = [Keyword::Left, Keyword::Right];
const Y_SIDES: Sides = [Keyword::Top, Keyword::Bottom];

/// Decode one axis of a circle or ellipse center.
///
/// Edge and offset are stored as written; `right 20%` stays a bottom/right
/// offset here and is only normalized when serializing. Sides of the other
/// axis are rejected.
fn convert_center_coordinate(
    value: Option<&CssValue>,
    sides: Sides,
    ctx: &ResolutionContext,
    slot: &'static str,
) -> Result<CenterCoordinate, ShapeError> {
    let Some(value) = value else {
        return Ok(CenterCoordinate::CENTER);
    };
    match value {
        CssValue::Ident(Keyword::Center) => Ok(CenterCoordinate::CENTER),
        CssValue::Ident(keyword) => {
            let edge = edge_for_side(*keyword, sides).ok_or_else(|| unexpected(slot, value))?;
            Ok(CenterCoordinate::new(edge, Length::ZERO))
        }
        CssValue::Pair(side, offset) => {
            let edge = side
                .as_keyword()
                .and_then(|keyword| edge_for_side(keyword, sides))
                .ok_or_else(|| unexpected(slot, value))?;
            Ok(CenterCoordinate::new(edge, convert_length(offset, ctx, slot)?))
        }
        other => Ok(CenterCoordinate::from_top_left(convert_length(other, ctx, slot)?)),
    }
}

fn edge_for_side(keyword: Keyword, [near, far]: Sides) -> Option<Edge> {
    if keyword == near {
        Some(Edge::TopLeft)
    } else if keyword == far {
        Some(Edge::BottomRight)
    } else {
        None
    }
}

fn convert_radius(
    value: Option<&CssValue>,
    ctx: &ResolutionContext,
    slot: &'static str,
) -> Result<RadiusSpec, ShapeError> {
    match value {
        None | Some(CssValue::Ident(Keyword::ClosestSide)) => Ok(RadiusSpec::ClosestSide),
        Some(CssValue::Ident(Keyword::FarthestSide)) => Ok(RadiusSpec::FarthestSide),
        Some(length) => Ok(RadiusSpec::Value(convert_length(length, ctx, slot)?)),
    }
}

/// Decode a `round` clause: `List(h)` or `Pair(List(h), List(v))`.
/// With no vertical list the horizontal radii are used for both axes.
fn convert_corner_radii(
    radii: Option<&CssValue>,
    ctx: &ResolutionContext,
) -> Result<CornerRadii, ShapeError> {
    const SLOT: &str = "corner radius";
    let Some(radii) = radii else {
        return Ok(CornerRadii::default());
    };
    let (horizontal, vertical) = match radii {
        CssValue::List(horizontal) => (horizontal, horizontal),
        CssValue::Pair(first, second) => match (&**first, &**second) {
            (CssValue::List(horizontal), CssValue::List(vertical)) => (horizontal, vertical),
            _ => return Err(unexpected(SLOT, radii)),
        },
        other => return Err(unexpected(SLOT, other)),
    };
    let horizontal = convert_edges(horizontal, ctx, SLOT, convert_length)?;
    let vertical = convert_edges(vertical, ctx, SLOT, convert_length)?;
    Ok(CornerRadii::from_corners(std::array::from_fn(|corner| {
        LengthSize::new(horizontal[corner], vertical[corner])
    })))
}

fn convert_angle(value: &CssValue, slot: &'static str) -> Result<f64, ShapeError> {
    match value {
        CssValue::Dimension { value: v, unit } => degrees_per_unit(*unit)
            .map(|degrees| v * degrees)
            .ok_or_else(|| unexpected(slot, value))
            .and_then(|degrees| finite(degrees, slot, value)),
        CssValue::Number(n) if *n == 0.0 => Ok(0.0),
        _ => Err(unexpected(slot, value)),
    }
}

fn convert_ray_size(size: Option<Keyword>) -> Result<RaySize, ShapeError> {
    let size = match size {
        None | Some(Keyword::ClosestSide) => RaySize::ClosestSide,
        Some(Keyword::ClosestCorner) => RaySize::ClosestCorner,
        Some(Keyword::FarthestSide) => RaySize::FarthestSide,
        Some(Keyword::FarthestCorner) => RaySize::FarthestCorner,
        Some(Keyword::Sides) => RaySize::Sides,
        Some(other) => return Err(unexpected("ray() size", &CssValue::Ident(other))),
    };
    Ok(size)
}

fn unexpected(slot: &'static str, value: &CssValue) -> ShapeError {
    warn!(slot, value = %value, "rejected shape argument");
    ShapeError::UnexpectedValue {
        slot,
        found: format!("{} `{}`", value.kind(), value),
    }
}

fn value_for_length(length: Length, ctx: &ResolutionContext) -> CssValue {
    match length {
        Length::Fixed(px) => CssValue::px(ctx.unzoomed_px(px)),
        Length::Percent(p) => CssValue::Percentage(p),
        Length::Auto => CssValue::Ident(Keyword::Auto),
    }
}

fn value_for_center(
    center_x: CenterCoordinate,
    center_y: CenterCoordinate,
    ctx: &ResolutionContext,
) -> (Option<CssValue>, Option<CssValue>) {
    if center_x == CenterCoordinate::CENTER && center_y == CenterCoordinate::CENTER {
        return (None, None);
    }
    (
        Some(value_for_center_coordinate(center_x, Keyword::Right, ctx)),
        Some(value_for_center_coordinate(center_y, Keyword::Bottom, ctx)),
    )
}

/// Top/left offsets are bare lengths; bottom/right ones keep their side.
fn value_for_center_coordinate(
    center: CenterCoordinate,
    far_side: Keyword,
    ctx: &ResolutionContext,
) -> CssValue {
    let offset = value_for_length(center.offset, ctx);
    match center.edge {
        Edge::TopLeft => offset,
        Edge::BottomRight => CssValue::pair(CssValue::Ident(far_side), offset),
    }
}

fn value_for_radius(radius: RadiusSpec, ctx: &ResolutionContext) -> CssValue {
    match radius {
        RadiusSpec::Value(length) => value_for_length(length, ctx),
        RadiusSpec::ClosestSide => CssValue::Ident(Keyword::ClosestSide),
        RadiusSpec::FarthestSide => CssValue::Ident(Keyword::FarthestSide),
    }
}

fn value_for_corner_radii(corners: &CornerRadii, ctx: &ResolutionContext) -> Option<CssValue> {
    if corners.is_unset() {
        return None;
    }
    let resolved = corners.resolved();
    let horizontal = resolved
        .iter()
        .map(|radius| value_for_length(radius.width, ctx))
        .collect();
    let vertical = resolved
        .iter()
        .map(|radius| value_for_length(radius.height, ctx))
        .collect();
    Some(CssValue::pair(
        CssValue::List(horizontal),
        CssValue::List(vertical),
    ))
}

fn keyword_for_ray_size(size: RaySize) -> Keyword {
    match size {
        RaySize::ClosestSide => Keyword::ClosestSide,
        RaySize::ClosestCorner => Keyword::ClosestCorner,
        RaySize::FarthestSide => Keyword::FarthestSide,
        RaySize::FarthestCorner => Keyword::FarthestCorner,
        RaySize::Sides => Keyword::Sides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WindRule;
    use crate::value::Unit;

    fn ident(keyword: Keyword) -> CssValue {
        CssValue::Ident(keyword)
    }

    fn px(value: f64) -> CssValue {
        CssValue::px(value)
    }

    fn pct(value: f64) -> CssValue {
        CssValue::Percentage(value)
    }

    #[test]
    fn four_side_expansion() {
        assert_eq!(expand_four_sides(&[1]), Some([1, 1, 1, 1]));
        assert_eq!(expand_four_sides(&[1, 2]), Some([1, 2, 1, 2]));
        assert_eq!(expand_four_sides(&[1, 2, 3]), Some([1, 2, 3, 2]));
        assert_eq!(expand_four_sides(&[1, 2, 3, 4]), Some([1, 2, 3, 4]));
        assert_eq!(expand_four_sides::<i32>(&[]), None);
        assert_eq!(expand_four_sides(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn circle_at_right_bottom() {
        // circle(10px at right 20px bottom 30px)
        let value = BasicShapeValue::Circle(CircleValue {
            radius: Some(px(10.0)),
            center_x: Some(CssValue::pair(ident(Keyword::Right), px(20.0))),
            center_y: Some(CssValue::pair(ident(Keyword::Bottom), px(30.0))),
        });
        let shape = basic_shape_for_value(&value, &ResolutionContext::default()).unwrap();
        assert_eq!(
            shape,
            Shape::Circle(Circle::new(
                CenterCoordinate::from_bottom_right(Length::fixed(20.0)),
                CenterCoordinate::from_bottom_right(Length::fixed(30.0)),
                RadiusSpec::Value(Length::fixed(10.0)),
            ))
        );
    }

    #[test]
    fn circle_defaults() {
        let value = BasicShapeValue::Circle(CircleValue::default());
        let shape = basic_shape_for_value(&value, &ResolutionContext::default()).unwrap();
        assert_eq!(shape, Shape::Circle(Circle::default()));
    }

    #[test]
    fn center_keywords() {
        let ctx = ResolutionContext::default();
        let decode_x =
            |v: CssValue| convert_center_coordinate(Some(&v), X_SIDES, &ctx, "x").unwrap();
        let decode =
            |v: CssValue| convert_center_coordinate(Some(&v), Y_SIDES, &ctx, "y").unwrap();
        assert_eq!(decode(ident(Keyword::Center)), CenterCoordinate::CENTER);
        assert_eq!(
            decode_x(ident(Keyword::Left)),
            CenterCoordinate::from_top_left(Length::ZERO)
        );
        assert_eq!(
            decode(ident(Keyword::Bottom)),
            CenterCoordinate::from_bottom_right(Length::ZERO)
        );
        assert_eq!(
            decode(pct(30.0)),
            CenterCoordinate::from_top_left(Length::percent(30.0))
        );
        // Percentages on the far edge are kept as written
        assert_eq!(
            decode_x(CssValue::pair(ident(Keyword::Right), pct(25.0))),
            CenterCoordinate::from_bottom_right(Length::percent(25.0))
        );
    }

    #[test]
    fn center_pair_requires_side() {
        let ctx = ResolutionContext::default();
        let value = CssValue::pair(ident(Keyword::Center), px(4.0));
        assert!(matches!(
            convert_center_coordinate(Some(&value), X_SIDES, &ctx, "test"),
            Err(ShapeError::UnexpectedValue { slot: "test", .. })
        ));
    }

    #[test]
    fn center_sides_must_match_axis() {
        // circle(at bottom 5px left 5px) with the axes swapped into the wrong slots
        let value = BasicShapeValue::Circle(CircleValue {
            radius: None,
            center_x: Some(CssValue::pair(ident(Keyword::Bottom), px(5.0))),
            center_y: Some(CssValue::pair(ident(Keyword::Left), px(5.0))),
        });
        assert!(matches!(
            basic_shape_for_value(&value, &ResolutionContext::default()),
            Err(ShapeError::UnexpectedValue {
                slot: "circle() center x",
                ..
            })
        ));

        let ctx = ResolutionContext::default();
        for (keyword, sides) in [(Keyword::Top, X_SIDES), (Keyword::Right, Y_SIDES)] {
            assert!(
                convert_center_coordinate(Some(&ident(keyword)), sides, &ctx, "c").is_err(),
                "{keyword:?} accepted on the wrong axis"
            );
        }
    }

    #[test]
    fn resolved_lengths_must_stay_finite() {
        // inset(1e307in): finite as written, infinite in px
        let huge_inches = CssValue::Dimension {
            value: 1e307,
            unit: Unit::In,
        };
        let inset = BasicShapeValue::Inset(InsetValue {
            edges: vec![huge_inches],
            radii: None,
        });
        assert!(matches!(
            basic_shape_for_value(&inset, &ResolutionContext::default()),
            Err(ShapeError::OutOfRange { slot: "inset()", .. })
        ));

        // circle(1e308px) overflows only once zoomed
        let ctx = ResolutionContext::try_new(10.0).unwrap();
        let circle = BasicShapeValue::Circle(CircleValue {
            radius: Some(px(1e308)),
            ..CircleValue::default()
        });
        assert!(basic_shape_for_value(&circle, &ResolutionContext::default()).is_ok());
        assert!(matches!(
            basic_shape_for_value(&circle, &ctx),
            Err(ShapeError::OutOfRange { .. })
        ));

        let ray = BasicShapeValue::Ray(RayValue {
            angle: CssValue::Dimension {
                value: 1e308,
                unit: Unit::Turn,
            },
            size: None,
            contain: false,
        });
        assert!(matches!(
            basic_shape_for_value(&ray, &ResolutionContext::default()),
            Err(ShapeError::OutOfRange { slot: "ray() angle", .. })
        ));
    }

    #[test]
    fn empty_polygon_is_rejected() {
        let value = BasicShapeValue::Polygon(PolygonValue {
            wind_rule: WindRule::NonZero,
            points: vec![],
        });
        assert!(matches!(
            basic_shape_for_value(&value, &ResolutionContext::default()),
            Err(ShapeError::Arity {
                slot: "polygon()",
                got: 0,
                ..
            })
        ));
    }

    #[test]
    fn radius_keywords() {
        let ctx = ResolutionContext::default();
        let farthest = ident(Keyword::FarthestSide);
        assert_eq!(
            convert_radius(Some(&farthest), &ctx, "r"),
            Ok(RadiusSpec::FarthestSide)
        );
        assert_eq!(convert_radius(None, &ctx, "r"), Ok(RadiusSpec::ClosestSide));
        assert_eq!(
            convert_radius(Some(&pct(10.0)), &ctx, "r"),
            Ok(RadiusSpec::Value(Length::percent(10.0)))
        );
    }

    #[test]
    fn zoom_applies_to_fixed_lengths_only() {
        let ctx = ResolutionContext::try_new(2.0).unwrap();
        assert_eq!(convert_length(&px(5.0), &ctx, "l"), Ok(Length::fixed(10.0)));
        assert_eq!(
            convert_length(&pct(5.0), &ctx, "l"),
            Ok(Length::percent(5.0))
        );
        assert_eq!(
            convert_length(&CssValue::Number(0.0), &ctx, "l"),
            Ok(Length::ZERO)
        );
    }

    #[test]
    fn lengths_reject_other_nodes() {
        let ctx = ResolutionContext::default();
        for value in [
            CssValue::Number(3.0),
            CssValue::deg(3.0),
            ident(Keyword::Auto),
            CssValue::List(vec![]),
        ] {
            assert!(convert_length(&value, &ctx, "l").is_err(), "{value:?}");
        }
    }

    #[test]
    fn polygon_preserves_point_order() {
        let value = BasicShapeValue::Polygon(PolygonValue {
            wind_rule: WindRule::EvenOdd,
            points: vec![
                CssValue::pair(px(3.0), px(4.0)),
                CssValue::pair(pct(100.0), CssValue::Number(0.0)),
                CssValue::pair(px(3.0), px(4.0)),
            ],
        });
        let Shape::Polygon(polygon) =
            basic_shape_for_value(&value, &ResolutionContext::default()).unwrap()
        else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.wind_rule(), WindRule::EvenOdd);
        assert_eq!(
            polygon.points(),
            &[
                (Length::fixed(3.0), Length::fixed(4.0)),
                (Length::percent(100.0), Length::ZERO),
                (Length::fixed(3.0), Length::fixed(4.0)),
            ]
        );
    }

    #[test]
    fn polygon_point_must_be_pair() {
        let value = BasicShapeValue::Polygon(PolygonValue {
            wind_rule: WindRule::NonZero,
            points: vec![px(1.0)],
        });
        assert!(matches!(
            basic_shape_for_value(&value, &ResolutionContext::default()),
            Err(ShapeError::UnexpectedValue {
                slot: "polygon() point",
                ..
            })
        ));
    }

    #[test]
    fn inset_expands_edges_and_radii() {
        // inset(1px 2px 3px round 4px 5px / 6px)
        let value = BasicShapeValue::Inset(InsetValue {
            edges: vec![px(1.0), px(2.0), px(3.0)],
            radii: Some(CssValue::pair(
                CssValue::List(vec![px(4.0), px(5.0)]),
                CssValue::List(vec![px(6.0)]),
            )),
        });
        let Shape::Inset(inset) =
            basic_shape_for_value(&value, &ResolutionContext::default()).unwrap()
        else {
            panic!("expected an inset");
        };
        assert_eq!(
            (inset.top, inset.right, inset.bottom, inset.left),
            (
                Length::fixed(1.0),
                Length::fixed(2.0),
                Length::fixed(3.0),
                Length::fixed(2.0)
            )
        );
        let size = |w, h| Some(LengthSize::new(Length::fixed(w), Length::fixed(h)));
        assert_eq!(inset.corners.top_left, size(4.0, 6.0));
        assert_eq!(inset.corners.top_right, size(5.0, 6.0));
        assert_eq!(inset.corners.bottom_right, size(4.0, 6.0));
        assert_eq!(inset.corners.bottom_left, size(5.0, 6.0));
    }

    #[test]
    fn radii_without_vertical_list_reuse_horizontal() {
        let radii = CssValue::List(vec![px(1.0), px(2.0), px(3.0), px(4.0)]);
        let corners = convert_corner_radii(Some(&radii), &ResolutionContext::default()).unwrap();
        assert_eq!(
            corners.bottom_left,
            Some(LengthSize::uniform(Length::fixed(4.0)))
        );
        assert_eq!(
            corners.top_right,
            Some(LengthSize::uniform(Length::fixed(2.0)))
        );
    }

    #[test]
    fn inset_arity_is_checked() {
        let value = BasicShapeValue::Inset(InsetValue {
            edges: vec![px(1.0); 5],
            radii: None,
        });
        assert_eq!(
            basic_shape_for_value(&value, &ResolutionContext::default()),
            Err(ShapeError::Arity {
                slot: "inset()",
                expected: "1 to 4",
                got: 5
            })
        );
    }

    #[test]
    fn inset_rejects_auto_but_rect_accepts_it() {
        let edges = vec![ident(Keyword::Auto), px(1.0), px(2.0), ident(Keyword::Auto)];
        let inset = BasicShapeValue::Inset(InsetValue {
            edges: edges.clone(),
            radii: None,
        });
        assert!(basic_shape_for_value(&inset, &ResolutionContext::default()).is_err());

        let rect = BasicShapeValue::Rect(RectValue { edges, radii: None });
        assert_eq!(
            basic_shape_for_value(&rect, &ResolutionContext::default()),
            Ok(Shape::Rect(Rect::new(
                Length::Auto,
                Length::fixed(1.0),
                Length::fixed(2.0),
                Length::Auto
            )))
        );
    }

    #[test]
    fn xywh_rejects_zero_width() {
        let value = BasicShapeValue::Xywh(XywhValue {
            x: px(0.0),
            y: px(0.0),
            width: px(0.0),
            height: px(10.0),
            radii: None,
        });
        assert!(matches!(
            basic_shape_for_value(&value, &ResolutionContext::default()),
            Err(ShapeError::DegenerateGeometry {
                dimension: "width",
                ..
            })
        ));
    }

    #[test]
    fn ray_angles_and_defaults() {
        let value = BasicShapeValue::Ray(RayValue {
            angle: CssValue::Dimension {
                value: 0.25,
                unit: Unit::Turn,
            },
            size: None,
            contain: true,
        });
        assert_eq!(
            basic_shape_for_value(&value, &ResolutionContext::default()),
            Ok(Shape::Ray(Ray::new(90.0, RaySize::ClosestSide, true)))
        );
    }

    #[test]
    fn ray_rejects_length_angle_and_bad_size() {
        let ctx = ResolutionContext::default();
        let length_angle = BasicShapeValue::Ray(RayValue {
            angle: px(3.0),
            size: None,
            contain: false,
        });
        assert!(basic_shape_for_value(&length_angle, &ctx).is_err());

        let bad_size = BasicShapeValue::Ray(RayValue {
            angle: CssValue::deg(3.0),
            size: Some(Keyword::Left),
            contain: false,
        });
        assert!(basic_shape_for_value(&bad_size, &ctx).is_err());
    }

    #[test]
    fn computed_value_unzooms_and_keeps_far_edges() {
        let ctx = ResolutionContext::try_new(2.0).unwrap();
        let shape = Shape::Circle(Circle::new(
            CenterCoordinate::from_bottom_right(Length::fixed(40.0)),
            CenterCoordinate::from_top_left(Length::percent(10.0)),
            RadiusSpec::Value(Length::fixed(20.0)),
        ));
        assert_eq!(
            value_for_basic_shape(&shape, &ctx),
            BasicShapeValue::Circle(CircleValue {
                radius: Some(px(10.0)),
                center_x: Some(CssValue::pair(ident(Keyword::Right), px(20.0))),
                center_y: Some(pct(10.0)),
            })
        );
    }

    #[test]
    fn computed_value_omits_default_center() {
        let value = value_for_basic_shape(
            &Shape::Ellipse(Ellipse::default()),
            &ResolutionContext::default(),
        );
        assert_eq!(
            value,
            BasicShapeValue::Ellipse(EllipseValue {
                radius_x: Some(ident(Keyword::ClosestSide)),
                radius_y: Some(ident(Keyword::ClosestSide)),
                center_x: None,
                center_y: None,
            })
        );
    }

    #[test]
    fn computed_value_round_trips_through_converter() {
        let ctx = ResolutionContext::try_new(1.5).unwrap();
        let shapes = [
            Shape::Inset(Inset::new(
                Length::fixed(3.0),
                Length::percent(4.0),
                Length::fixed(3.0),
                Length::ZERO,
            )
            .unwrap()
            .with_corners(CornerRadii::default().with_top_left(LengthSize::uniform(
                Length::fixed(6.0),
            )))),
            Shape::Rect(Rect::new(
                Length::Auto,
                Length::fixed(9.0),
                Length::percent(50.0),
                Length::Auto,
            )),
            Shape::Ray(Ray::new(45.0, RaySize::Sides, true)),
        ];
        for shape in shapes {
            let value = value_for_basic_shape(&shape, &ctx);
            let back = basic_shape_for_value(&value, &ctx).unwrap();
            let expected = match shape {
                // Unset corners come back explicitly as zero
                Shape::Inset(inset) => Shape::Inset(inset.with_corners(CornerRadii::from_corners(
                    inset.corners.resolved(),
                ))),
                other => other,
            };
            assert_eq!(back, expected);
        }
    }
}
