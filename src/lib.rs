//! CSS basic shapes: `circle()`, `ellipse()`, `polygon()`, `inset()`,
//! `rect()`, `xywh()` and `ray()`.
//!
//! Parsed values ([`BasicShapeValue`]) convert into resolved shapes
//! ([`Shape`]) under a [`ResolutionContext`], and back. Both serialize to
//! canonical CSS text, and shapes resolve to pixel geometry in a
//! [`ReferenceBox`].
//!
//! ```
//! use basic_shape::{ResolutionContext, shape_from_css};
//!
//! let shape = shape_from_css("circle(10px at right 20px bottom 30px)", &ResolutionContext::default())?;
//! assert_eq!(shape.to_string(), "circle(10px at right 20px bottom 30px)");
//! # Ok::<(), miette::Report>(())
//! ```

pub mod context;
pub mod convert;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod parse;
pub mod serialize;
pub mod shape;
pub mod types;
pub mod value;

use pest_derive::Parser;

pub use context::ResolutionContext;
pub use convert::{basic_shape_for_value, value_for_basic_shape};
pub use errors::{ContextError, ParseError, ShapeError};
pub use geometry::{ReferenceBox, ResolvedShape, resolve};
pub use parse::{parse, parse_named};
pub use shape::{Circle, Ellipse, Inset, Polygon, PolygonBuilder, Ray, Rect, Shape, ShapeGeometry, Xywh};
pub use types::{
    CenterCoordinate, CornerRadii, Edge, Length, LengthSize, RadiusSpec, RaySize, WindRule,
};
pub use value::{BasicShapeValue, CssValue, Keyword, ToCss, Unit};

#[derive(Parser)]
#[grammar = "basic_shape.pest"]
pub struct BasicShapeParser;

/// Parse shape text and convert it to a resolved [`Shape`].
pub fn shape_from_css(source: &str, ctx: &ResolutionContext) -> Result<Shape, miette::Report> {
    let value = parse(source)?;
    let shape = basic_shape_for_value(&value, ctx)?;
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_circle_tree() {
        let result = BasicShapeParser::parse(Rule::shape, "circle(50% at left top)");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_polygon_tree() {
        let input = "polygon(evenodd, 0 0, 100% 0, 100% 100%)";
        let result = BasicShapeParser::parse(Rule::shape, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_multiline_inset_tree() {
        let input = r#"
            inset(
                10px 5%
                round 4px / 2px
            )
        "#;
        let result = BasicShapeParser::parse(Rule::shape, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_ray_tree() {
        let result = BasicShapeParser::parse(Rule::shape, "ray(45deg closest-corner contain)");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn keywords_need_boundaries() {
        let result = BasicShapeParser::parse(Rule::shape, "circle(atleft)");
        assert!(result.is_err());
    }

    #[test]
    fn trailing_input_is_rejected() {
        let result = BasicShapeParser::parse(Rule::shape, "circle() circle()");
        assert!(result.is_err());
    }

    #[test]
    fn shape_from_css_chains_parse_and_convert() {
        let ctx = ResolutionContext::try_new(2.0).unwrap();
        let shape = shape_from_css("inset(5px round 1px)", &ctx).unwrap();
        let Shape::Inset(inset) = &shape else {
            panic!("expected inset, got {shape:?}");
        };
        assert_eq!(inset.top, Length::fixed(10.0));
        assert_eq!(shape.to_string(), "inset(10px round 2px)");
        assert_eq!(
            value_for_basic_shape(&shape, &ctx).to_string(),
            "inset(5px round 1px)"
        );
    }

    #[test]
    fn shape_from_css_reports_both_error_kinds() {
        let ctx = ResolutionContext::default();
        assert!(shape_from_css("circle(", &ctx).is_err());
        let err = shape_from_css("xywh(0 0 0 10px)", &ctx).unwrap_err();
        assert!(err.to_string().contains("width"), "{err}");
    }
}
