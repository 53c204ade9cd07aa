//! Parse shape function text into [`BasicShapeValue`] slots

use pest::Parser;
use pest::iterators::{Pair, Pairs};

use crate::errors::{ParseError, SourceContext};
use crate::log::{debug, trace};
use crate::types::WindRule;
use crate::value::{
    BasicShapeValue, CircleValue, CssValue, EllipseValue, InsetValue, Keyword, PolygonValue,
    RayValue, RectValue, Unit, XywhValue,
};
use crate::{BasicShapeParser, Rule};

/// Name used in diagnostics when the source has no better name
const ANONYMOUS: &str = "<shape>";

/// Parse one basic shape function, e.g. `circle(10px at left top)`.
pub fn parse(source: &str) -> Result<BasicShapeValue, ParseError> {
    parse_named(ANONYMOUS, source)
}

/// Parse with a source name (a property or file name) for diagnostics.
pub fn parse_named(name: &str, source: &str) -> Result<BasicShapeValue, ParseError> {
    let decoder = Decoder {
        context: SourceContext::new(name, source),
    };
    let pairs = BasicShapeParser::parse(Rule::shape, source)
        .map_err(|error| decoder.pest_error(error))?;
    let value = decoder.shape(pairs)?;
    debug!(source_name = name, value = %value, "parsed {}", source.trim());
    Ok(value)
}

/// Turns pest pairs into values, carrying the source for error spans
struct Decoder {
    context: SourceContext,
}

impl Decoder {
    fn shape(&self, mut pairs: Pairs<'_, Rule>) -> Result<BasicShapeValue, ParseError> {
        let function = pairs
            .next()
            .and_then(|shape| shape.into_inner().next())
            .ok_or_else(|| self.syntax_at(0, "expected a basic shape function"))?;
        trace!(rule = ?function.as_rule(), "decoding shape function");

        let value = match function.as_rule() {
            Rule::circle => BasicShapeValue::from(self.circle(function)?),
            Rule::ellipse => BasicShapeValue::from(self.ellipse(function)?),
            Rule::polygon => BasicShapeValue::from(self.polygon(function)?),
            Rule::inset => BasicShapeValue::from(self.inset(function)?),
            Rule::rect => BasicShapeValue::from(self.rect(function)?),
            Rule::xywh => BasicShapeValue::from(self.xywh(function)?),
            Rule::ray => BasicShapeValue::from(self.ray(function)?),
            other => return Err(self.unexpected_rule(&function, other)),
        };
        Ok(value)
    }

    fn circle(&self, pair: Pair<'_, Rule>) -> Result<CircleValue, ParseError> {
        let mut circle = CircleValue::default();
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::at_kw => {}
                Rule::position => {
                    let (x, y) = self.position(inner)?;
                    circle.center_x = Some(x);
                    circle.center_y = Some(y);
                }
                _ => circle.radius = Some(self.radius(inner)?),
            }
        }
        Ok(circle)
    }

    fn ellipse(&self, pair: Pair<'_, Rule>) -> Result<EllipseValue, ParseError> {
        let mut ellipse = EllipseValue::default();
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::at_kw => {}
                Rule::position => {
                    let (x, y) = self.position(inner)?;
                    ellipse.center_x = Some(x);
                    ellipse.center_y = Some(y);
                }
                _ if ellipse.radius_x.is_none() => ellipse.radius_x = Some(self.radius(inner)?),
                _ => ellipse.radius_y = Some(self.radius(inner)?),
            }
        }
        Ok(ellipse)
    }

    fn radius(&self, pair: Pair<'_, Rule>) -> Result<CssValue, ParseError> {
        match pair.as_rule() {
            Rule::length_percentage => {
                let radius = self.length_percentage(pair.clone())?;
                self.non_negative(&pair, radius, "radius")
            }
            Rule::closest_side | Rule::farthest_side => self.keyword(&pair),
            other => Err(self.unexpected_rule(&pair, other)),
        }
    }

    fn polygon(&self, pair: Pair<'_, Rule>) -> Result<PolygonValue, ParseError> {
        let mut polygon = PolygonValue::default();
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::nonzero => polygon.wind_rule = WindRule::NonZero,
                Rule::evenodd => polygon.wind_rule = WindRule::EvenOdd,
                Rule::point => {
                    let span = inner.as_span();
                    let mut coordinates = inner.into_inner();
                    let (Some(x), Some(y)) = (coordinates.next(), coordinates.next()) else {
                        return Err(self.syntax_at(span.start(), "a point needs two coordinates"));
                    };
                    polygon.points.push(CssValue::pair(
                        self.length_percentage(x)?,
                        self.length_percentage(y)?,
                    ));
                }
                other => return Err(self.unexpected_rule(&inner, other)),
            }
        }
        Ok(polygon)
    }

    fn inset(&self, pair: Pair<'_, Rule>) -> Result<InsetValue, ParseError> {
        let (edges, radii) = self.edges_and_radii(pair)?;
        Ok(InsetValue { edges, radii })
    }

    fn rect(&self, pair: Pair<'_, Rule>) -> Result<RectValue, ParseError> {
        let (edges, radii) = self.edges_and_radii(pair)?;
        Ok(RectValue { edges, radii })
    }

    /// Edge values and the optional `round` clause shared by inset(),
    /// rect() and xywh()
    fn edges_and_radii(
        &self,
        pair: Pair<'_, Rule>,
    ) -> Result<(Vec<CssValue>, Option<CssValue>), ParseError> {
        let mut edges = Vec::new();
        let mut radii = None;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::length_percentage => edges.push(self.length_percentage(inner)?),
                Rule::auto => edges.push(self.keyword(&inner)?),
                Rule::round_radii => radii = Some(self.round_radii(inner)?),
                other => return Err(self.unexpected_rule(&inner, other)),
            }
        }
        Ok((edges, radii))
    }

    fn xywh(&self, pair: Pair<'_, Rule>) -> Result<XywhValue, ParseError> {
        let mut lengths = Vec::with_capacity(4);
        let mut radii = None;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::length_percentage => {
                    let is_size = lengths.len() >= 2;
                    let value = self.length_percentage(inner.clone())?;
                    if is_size && is_negative(&value) {
                        let span = inner.as_span();
                        return Err(ParseError::NegativeSize {
                            src: self.context.named_source(),
                            span: self.context.span(span.start(), span.end()),
                        });
                    }
                    lengths.push(value);
                }
                Rule::round_radii => radii = Some(self.round_radii(inner)?),
                other => return Err(self.unexpected_rule(&inner, other)),
            }
        }
        let Ok([x, y, width, height]) = <[CssValue; 4]>::try_from(lengths) else {
            return Err(self.syntax_at(0, "xywh() takes four lengths"));
        };
        Ok(XywhValue {
            x,
            y,
            width,
            height,
            radii,
        })
    }

    /// `round <h>{1,4} [/ <v>{1,4}]` as `List(h)` or `Pair(List(h), List(v))`
    fn round_radii(&self, pair: Pair<'_, Rule>) -> Result<CssValue, ParseError> {
        let mut lists = Vec::with_capacity(2);
        for inner in pair.into_inner() {
            if inner.as_rule() != Rule::radius_list {
                continue;
            }
            let mut radii = Vec::with_capacity(4);
            for radius in inner.into_inner() {
                let value = self.length_percentage(radius.clone())?;
                radii.push(self.non_negative(&radius, value, "corner radius")?);
            }
            lists.push(CssValue::List(radii));
        }
        let mut lists = lists.into_iter();
        match (lists.next(), lists.next()) {
            (Some(horizontal), None) => Ok(horizontal),
            (Some(horizontal), Some(vertical)) => Ok(CssValue::pair(horizontal, vertical)),
            _ => Err(self.syntax_at(0, "expected corner radii after `round`")),
        }
    }

    /// Components may come in any order; exactly one angle is required.
    fn ray(&self, pair: Pair<'_, Rule>) -> Result<RayValue, ParseError> {
        let span = pair.as_span();
        let invalid = |message: &str| ParseError::InvalidRay {
            message: message.to_string(),
            src: self.context.named_source(),
            span: self.context.span(span.start(), span.end()),
        };

        let mut angle = None;
        let mut size = None;
        let mut contain = false;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::angle => {
                    if angle.is_some() {
                        return Err(invalid("more than one angle"));
                    }
                    angle = Some(self.angle(inner).map_err(|_| invalid("expected an angle"))?);
                }
                Rule::contain => {
                    if contain {
                        return Err(invalid("`contain` given twice"));
                    }
                    contain = true;
                }
                _ => {
                    if size.is_some() {
                        return Err(invalid("more than one size"));
                    }
                    let keyword = self.keyword(&inner)?;
                    size = keyword.as_keyword();
                }
            }
        }
        let angle = angle.ok_or_else(|| invalid("missing angle"))?;
        Ok(RayValue {
            angle,
            size,
            contain,
        })
    }

    // ------------------------------------------------------------------------
    // <position>
    // ------------------------------------------------------------------------

    /// Returns the horizontal and vertical center slots. Keyword pairs given
    /// vertical-first are swapped into horizontal, vertical order.
    fn position(&self, pair: Pair<'_, Rule>) -> Result<(CssValue, CssValue), ParseError> {
        let span = pair.as_span();
        let mut components = Vec::with_capacity(4);
        for inner in pair.into_inner() {
            let value = match inner.as_rule() {
                Rule::length_percentage => self.length_percentage(inner)?,
                _ => self.keyword(&inner)?,
            };
            components.push(value);
        }

        let position = match components.as_slice() {
            [single] => one_value_position(single),
            [first, second] => two_value_position(first, second),
            [first_side, first_offset, second_side, second_offset] => {
                four_value_position(first_side, first_offset, second_side, second_offset)
            }
            _ => None,
        };
        position.ok_or_else(|| ParseError::InvalidPosition {
            src: self.context.named_source(),
            span: self.context.span(span.start(), span.end()),
        })
    }

    // ------------------------------------------------------------------------
    // Tokens
    // ------------------------------------------------------------------------

    /// A percentage, a length dimension or unitless zero (stored as `0px`)
    fn length_percentage(&self, pair: Pair<'_, Rule>) -> Result<CssValue, ParseError> {
        let token = self.only_child(pair)?;
        match token.as_rule() {
            Rule::percentage => {
                let number = self.only_child(token)?;
                Ok(CssValue::Percentage(self.number(&number)?))
            }
            Rule::dimension => {
                let (value, unit) = self.dimension(token.clone())?;
                if unit.is_angle() {
                    return Err(self.syntax_for(&token, "expected a length, found an angle"));
                }
                Ok(CssValue::Dimension { value, unit })
            }
            Rule::number => {
                if self.number(&token)? != 0.0 {
                    return Err(self.syntax_for(&token, "a length needs a unit unless it is 0"));
                }
                Ok(CssValue::px(0.0))
            }
            other => Err(self.unexpected_rule(&token, other)),
        }
    }

    /// An angle dimension or unitless zero
    fn angle(&self, pair: Pair<'_, Rule>) -> Result<CssValue, ParseError> {
        let token = self.only_child(pair)?;
        match token.as_rule() {
            Rule::dimension => {
                let (value, unit) = self.dimension(token.clone())?;
                if !unit.is_angle() {
                    return Err(self.syntax_for(&token, "expected an angle"));
                }
                Ok(CssValue::Dimension { value, unit })
            }
            Rule::number if self.number(&token)? == 0.0 => Ok(CssValue::Number(0.0)),
            _ => Err(self.syntax_for(&token, "expected an angle")),
        }
    }

    fn dimension(&self, pair: Pair<'_, Rule>) -> Result<(f64, Unit), ParseError> {
        let mut inner = pair.clone().into_inner();
        let (Some(number), Some(unit)) = (inner.next(), inner.next()) else {
            return Err(self.syntax_for(&pair, "malformed dimension"));
        };
        let value = self.number(&number)?;
        let unit = unit
            .as_str()
            .parse::<Unit>()
            .map_err(|()| self.syntax_for(&unit, &format!("unknown unit `{}`", unit.as_str())))?;
        Ok((value, unit))
    }

    fn number(&self, pair: &Pair<'_, Rule>) -> Result<f64, ParseError> {
        let text = pair.as_str();
        let invalid = |message: String| {
            let span = pair.as_span();
            ParseError::InvalidNumber {
                message,
                src: self.context.named_source(),
                span: self.context.span(span.start(), span.end()),
            }
        };
        let value = text
            .parse::<f64>()
            .map_err(|e| invalid(format!("`{text}`: {e}")))?;
        if !value.is_finite() {
            return Err(invalid(format!("`{text}` is out of range")));
        }
        Ok(value)
    }

    fn keyword(&self, pair: &Pair<'_, Rule>) -> Result<CssValue, ParseError> {
        pair.as_str()
            .parse::<Keyword>()
            .map(CssValue::Ident)
            .map_err(|()| self.syntax_for(pair, &format!("unknown keyword `{}`", pair.as_str())))
    }

    fn non_negative(
        &self,
        pair: &Pair<'_, Rule>,
        value: CssValue,
        what: &str,
    ) -> Result<CssValue, ParseError> {
        if is_negative(&value) {
            Err(self.syntax_for(pair, &format!("{what} must not be negative")))
        } else {
            Ok(value)
        }
    }

    fn only_child<'i>(&self, pair: Pair<'i, Rule>) -> Result<Pair<'i, Rule>, ParseError> {
        let span = pair.as_span();
        pair.into_inner()
            .next()
            .ok_or_else(|| self.syntax_at(span.start(), "expected a value"))
    }

    // ------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------

    fn pest_error(&self, error: pest::error::Error<Rule>) -> ParseError {
        let (start, end) = match error.location {
            pest::error::InputLocation::Pos(pos) => (pos, pos),
            pest::error::InputLocation::Span(span) => span,
        };
        ParseError::Syntax {
            message: error.variant.message().into_owned(),
            src: self.context.named_source(),
            span: self.context.span(start, end),
        }
    }

    fn syntax_for(&self, pair: &Pair<'_, Rule>, message: &str) -> ParseError {
        let span = pair.as_span();
        ParseError::Syntax {
            message: message.to_string(),
            src: self.context.named_source(),
            span: self.context.span(span.start(), span.end()),
        }
    }

    fn syntax_at(&self, offset: usize, message: &str) -> ParseError {
        ParseError::Syntax {
            message: message.to_string(),
            src: self.context.named_source(),
            span: self.context.span(offset, offset),
        }
    }

    fn unexpected_rule(&self, pair: &Pair<'_, Rule>, rule: Rule) -> ParseError {
        self.syntax_for(pair, &format!("unexpected {rule:?}"))
    }
}

fn is_negative(value: &CssValue) -> bool {
    match value {
        CssValue::Percentage(v) | CssValue::Number(v) | CssValue::Dimension { value: v, .. } => {
            *v < 0.0
        }
        _ => false,
    }
}

/// Can stand alone as the horizontal component of a two-value position
fn is_horizontal(value: &CssValue) -> bool {
    match value.as_keyword() {
        Some(keyword) => keyword.is_horizontal_side() || keyword == Keyword::Center,
        None => value.is_length_percentage(),
    }
}

fn is_vertical(value: &CssValue) -> bool {
    match value.as_keyword() {
        Some(keyword) => keyword.is_vertical_side() || keyword == Keyword::Center,
        None => value.is_length_percentage(),
    }
}

fn one_value_position(value: &CssValue) -> Option<(CssValue, CssValue)> {
    let center = CssValue::Ident(Keyword::Center);
    match value.as_keyword() {
        Some(keyword) if keyword.is_vertical_side() => Some((center, value.clone())),
        Some(keyword) if keyword.is_horizontal_side() || keyword == Keyword::Center => {
            Some((value.clone(), center))
        }
        Some(_) => None,
        None if value.is_length_percentage() => Some((value.clone(), center)),
        None => None,
    }
}

fn two_value_position(first: &CssValue, second: &CssValue) -> Option<(CssValue, CssValue)> {
    if is_horizontal(first) && is_vertical(second) {
        return Some((first.clone(), second.clone()));
    }
    // `top left`, `center right`: keywords only, vertical first
    match (first.as_keyword(), second.as_keyword()) {
        (Some(_), Some(_)) if is_vertical(first) && is_horizontal(second) => {
            Some((second.clone(), first.clone()))
        }
        _ => None,
    }
}

fn four_value_position(
    first_side: &CssValue,
    first_offset: &CssValue,
    second_side: &CssValue,
    second_offset: &CssValue,
) -> Option<(CssValue, CssValue)> {
    let first = first_side.as_keyword()?;
    let second = second_side.as_keyword()?;
    if !first_offset.is_length_percentage() || !second_offset.is_length_percentage() {
        return None;
    }
    let first_pair = CssValue::pair(first_side.clone(), first_offset.clone());
    let second_pair = CssValue::pair(second_side.clone(), second_offset.clone());
    if first.is_horizontal_side() && second.is_vertical_side() {
        Some((first_pair, second_pair))
    } else if first.is_vertical_side() && second.is_horizontal_side() {
        Some((second_pair, first_pair))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(value: f64) -> CssValue {
        CssValue::px(value)
    }

    fn ident(keyword: Keyword) -> CssValue {
        CssValue::Ident(keyword)
    }

    fn circle(source: &str) -> CircleValue {
        match parse(source) {
            Ok(BasicShapeValue::Circle(circle)) => circle,
            other => panic!("expected a circle from {source:?}, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_circle() {
        assert_eq!(circle("circle()"), CircleValue::default());
        assert_eq!(circle("  CIRCLE( )  "), CircleValue::default());
    }

    #[test]
    fn parse_circle_radius_and_position() {
        let value = circle("circle(10px at right 20px bottom 30px)");
        assert_eq!(value.radius, Some(px(10.0)));
        assert_eq!(
            value.center_x,
            Some(CssValue::pair(ident(Keyword::Right), px(20.0)))
        );
        assert_eq!(
            value.center_y,
            Some(CssValue::pair(ident(Keyword::Bottom), px(30.0)))
        );
    }

    #[test]
    fn parse_one_value_positions() {
        let value = circle("circle(at top)");
        assert_eq!(value.center_x, Some(ident(Keyword::Center)));
        assert_eq!(value.center_y, Some(ident(Keyword::Top)));

        let value = circle("circle(at 25%)");
        assert_eq!(value.center_x, Some(CssValue::Percentage(25.0)));
        assert_eq!(value.center_y, Some(ident(Keyword::Center)));
    }

    #[test]
    fn parse_two_value_positions_swap_vertical_first() {
        let value = circle("circle(at bottom right)");
        assert_eq!(value.center_x, Some(ident(Keyword::Right)));
        assert_eq!(value.center_y, Some(ident(Keyword::Bottom)));

        let value = circle("circle(at left 10px)");
        assert_eq!(value.center_x, Some(ident(Keyword::Left)));
        assert_eq!(value.center_y, Some(px(10.0)));
    }

    #[test]
    fn parse_four_value_position_vertical_first() {
        let value = circle("circle(at bottom 10% left 5px)");
        assert_eq!(
            value.center_x,
            Some(CssValue::pair(ident(Keyword::Left), px(5.0)))
        );
        assert_eq!(
            value.center_y,
            Some(CssValue::pair(ident(Keyword::Bottom), CssValue::Percentage(10.0)))
        );
    }

    #[test]
    fn reject_invalid_positions() {
        for source in [
            "circle(at left right)",
            "circle(at top 10px)",
            "circle(at left 10px top)",
            "circle(at left 10px right 5px)",
            "circle(at center 10px top 5px)",
        ] {
            let result = parse(source);
            assert!(
                matches!(result, Err(ParseError::InvalidPosition { .. })),
                "{source}: {result:?}"
            );
        }
    }

    #[test]
    fn unitless_zero_is_a_pixel_length() {
        let value = circle("circle(0)");
        assert_eq!(value.radius, Some(px(0.0)));
        assert!(matches!(
            parse("circle(5)"),
            Err(ParseError::Syntax { .. })
        ));
    }

    #[test]
    fn parse_ellipse_radii() {
        let Ok(BasicShapeValue::Ellipse(ellipse)) = parse("ellipse(farthest-side 20% at center)")
        else {
            panic!("expected an ellipse");
        };
        assert_eq!(ellipse.radius_x, Some(ident(Keyword::FarthestSide)));
        assert_eq!(ellipse.radius_y, Some(CssValue::Percentage(20.0)));
        assert!(parse("ellipse(10px)").is_err());
    }

    #[test]
    fn parse_polygon() {
        let Ok(BasicShapeValue::Polygon(polygon)) = parse("polygon(evenodd, 0 0, 100% 0, 50% 1em)")
        else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.wind_rule, WindRule::EvenOdd);
        assert_eq!(polygon.points.len(), 3);
        assert_eq!(
            polygon.points[2],
            CssValue::pair(
                CssValue::Percentage(50.0),
                CssValue::Dimension {
                    value: 1.0,
                    unit: Unit::Em
                }
            )
        );
        assert!(parse("polygon()").is_err());
        assert!(parse("polygon(evenodd)").is_err());
    }

    #[test]
    fn parse_inset_with_radii() {
        let Ok(BasicShapeValue::Inset(inset)) = parse("inset(1px 2px round 3px / 4px 5px)") else {
            panic!("expected an inset");
        };
        assert_eq!(inset.edges, vec![px(1.0), px(2.0)]);
        assert_eq!(
            inset.radii,
            Some(CssValue::pair(
                CssValue::List(vec![px(3.0)]),
                CssValue::List(vec![px(4.0), px(5.0)])
            ))
        );
        assert!(parse("inset(1px 2px 3px 4px 5px)").is_err());
    }

    #[test]
    fn glued_dimensions_are_one_token() {
        for source in ["inset(1px2px)", "circle(1px-2px)", "xywh(0 0 1px2px 3px4px)"] {
            let err = parse(source).unwrap_err();
            assert!(
                matches!(&err, ParseError::Syntax { message, .. } if message.starts_with("unknown unit")),
                "{source}: {err}"
            );
        }
        assert!(parse("polygon(1px2px, 3px4px)").is_err());
        assert!(parse("inset(1e3px 2em)").is_ok());
    }

    #[test]
    fn reject_negative_radii() {
        assert!(matches!(
            parse("inset(1px round -3px)"),
            Err(ParseError::Syntax { .. })
        ));
        assert!(matches!(
            parse("circle(-1px)"),
            Err(ParseError::Syntax { .. })
        ));
    }

    #[test]
    fn rect_needs_four_edges() {
        let Ok(BasicShapeValue::Rect(rect)) = parse("rect(auto 10px auto 0)") else {
            panic!("expected a rect");
        };
        assert_eq!(rect.edges[0], ident(Keyword::Auto));
        assert_eq!(rect.edges[3], px(0.0));
        assert!(parse("rect(1px 2px)").is_err());
    }

    #[test]
    fn xywh_rejects_negative_size() {
        assert!(parse("xywh(-1px -2px 3px 4px)").is_ok());
        assert!(matches!(
            parse("xywh(0 0 -3px 4px)"),
            Err(ParseError::NegativeSize { .. })
        ));
    }

    #[test]
    fn ray_components_in_any_order() {
        let Ok(BasicShapeValue::Ray(ray)) = parse("ray(contain sides 0.25turn)") else {
            panic!("expected a ray");
        };
        assert_eq!(
            ray.angle,
            CssValue::Dimension {
                value: 0.25,
                unit: Unit::Turn
            }
        );
        assert_eq!(ray.size, Some(Keyword::Sides));
        assert!(ray.contain);
    }

    #[test]
    fn reject_bad_rays() {
        for source in [
            "ray(closest-side)",
            "ray(10deg 20deg)",
            "ray(10deg sides closest-side)",
            "ray(10deg contain contain)",
            "ray(10px)",
        ] {
            let result = parse(source);
            assert!(
                matches!(result, Err(ParseError::InvalidRay { .. })),
                "{source}: {result:?}"
            );
        }
    }

    #[test]
    fn unknown_units_and_functions() {
        assert!(matches!(
            parse("circle(10zz)"),
            Err(ParseError::Syntax { .. })
        ));
        assert!(matches!(
            parse("square(10px)"),
            Err(ParseError::Syntax { .. })
        ));
        assert!(matches!(
            parse("circle(1e999px)"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn errors_carry_source_name() {
        let err = parse_named("clip-path", "circle(at nowhere)").unwrap_err();
        let ParseError::Syntax { src, .. } = &err else {
            panic!("expected a syntax error, got {err:?}");
        };
        assert_eq!(src.name(), "clip-path");
    }
}
