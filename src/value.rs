//! Parsed-value nodes for the basic shape functions.
//!
//! [`CssValue`] is the generic node a CSS parser hands over (identifier,
//! number, percentage, dimension, pair, list). [`BasicShapeValue`] groups
//! those nodes into the argument slots of one shape function.

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

use crate::types::WindRule;

/// Identifiers that appear inside shape functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Left,
    Right,
    Top,
    Bottom,
    Center,
    ClosestSide,
    FarthestSide,
    ClosestCorner,
    FarthestCorner,
    Sides,
    NonZero,
    EvenOdd,
    Auto,
    Contain,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Left => "left",
            Keyword::Right => "right",
            Keyword::Top => "top",
            Keyword::Bottom => "bottom",
            Keyword::Center => "center",
            Keyword::ClosestSide => "closest-side",
            Keyword::FarthestSide => "farthest-side",
            Keyword::ClosestCorner => "closest-corner",
            Keyword::FarthestCorner => "farthest-corner",
            Keyword::Sides => "sides",
            Keyword::NonZero => "nonzero",
            Keyword::EvenOdd => "evenodd",
            Keyword::Auto => "auto",
            Keyword::Contain => "contain",
        }
    }

    /// `left` or `right`
    pub fn is_horizontal_side(self) -> bool {
        matches!(self, Keyword::Left | Keyword::Right)
    }

    /// `top` or `bottom`
    pub fn is_vertical_side(self) -> bool {
        matches!(self, Keyword::Top | Keyword::Bottom)
    }
}

impl FromStr for Keyword {
    type Err = ();

    /// ASCII case-insensitive, as CSS identifiers are
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = match s.to_ascii_lowercase().as_str() {
            "left" => Keyword::Left,
            "right" => Keyword::Right,
            "top" => Keyword::Top,
            "bottom" => Keyword::Bottom,
            "center" => Keyword::Center,
            "closest-side" => Keyword::ClosestSide,
            "farthest-side" => Keyword::FarthestSide,
            "closest-corner" => Keyword::ClosestCorner,
            "farthest-corner" => Keyword::FarthestCorner,
            "sides" => Keyword::Sides,
            "nonzero" => Keyword::NonZero,
            "evenodd" => Keyword::EvenOdd,
            "auto" => Keyword::Auto,
            "contain" => Keyword::Contain,
            _ => return Err(()),
        };
        Ok(keyword)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Units a dimension can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    // Absolute lengths
    Px,
    Cm,
    Mm,
    Q,
    In,
    Pt,
    Pc,
    // Font-relative lengths
    Em,
    Rem,
    // Viewport lengths
    Vw,
    Vh,
    Vmin,
    Vmax,
    // Angles
    Deg,
    Rad,
    Grad,
    Turn,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Q => "q",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Deg => "deg",
            Unit::Rad => "rad",
            Unit::Grad => "grad",
            Unit::Turn => "turn",
        }
    }

    pub fn is_angle(self) -> bool {
        matches!(self, Unit::Deg | Unit::Rad | Unit::Grad | Unit::Turn)
    }

    pub fn is_length(self) -> bool {
        !self.is_angle()
    }
}

impl FromStr for Unit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.to_ascii_lowercase().as_str() {
            "px" => Unit::Px,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "q" => Unit::Q,
            "in" => Unit::In,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "vmin" => Unit::Vmin,
            "vmax" => Unit::Vmax,
            "deg" => Unit::Deg,
            "rad" => Unit::Rad,
            "grad" => Unit::Grad,
            "turn" => Unit::Turn,
            _ => return Err(()),
        };
        Ok(unit)
    }
}

/// A generic parsed component value
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    Ident(Keyword),
    /// Unitless number; only `0` is meaningful as a length
    Number(f64),
    /// Percentage in the 0-100 range
    Percentage(f64),
    Dimension { value: f64, unit: Unit },
    Pair(Box<CssValue>, Box<CssValue>),
    List(Vec<CssValue>),
}

impl CssValue {
    pub fn px(value: f64) -> CssValue {
        CssValue::Dimension {
            value,
            unit: Unit::Px,
        }
    }

    pub fn deg(value: f64) -> CssValue {
        CssValue::Dimension {
            value,
            unit: Unit::Deg,
        }
    }

    pub fn pair(first: CssValue, second: CssValue) -> CssValue {
        CssValue::Pair(Box::new(first), Box::new(second))
    }

    pub fn as_keyword(&self) -> Option<Keyword> {
        match self {
            CssValue::Ident(keyword) => Some(*keyword),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.as_keyword() == Some(keyword)
    }

    /// A length-percentage: percentage, length dimension, or unitless zero
    pub fn is_length_percentage(&self) -> bool {
        match self {
            CssValue::Percentage(_) => true,
            CssValue::Dimension { unit, .. } => unit.is_length(),
            CssValue::Number(n) => *n == 0.0,
            _ => false,
        }
    }

    /// Short description used in conversion errors
    pub fn kind(&self) -> &'static str {
        match self {
            CssValue::Ident(_) => "identifier",
            CssValue::Number(_) => "number",
            CssValue::Percentage(_) => "percentage",
            CssValue::Dimension { unit, .. } if unit.is_angle() => "angle",
            CssValue::Dimension { .. } => "length",
            CssValue::Pair(..) => "pair",
            CssValue::List(_) => "list",
        }
    }
}

/// Serialization to CSS text
#[enum_dispatch]
pub trait ToCss {
    fn to_css(&self, dest: &mut dyn fmt::Write) -> fmt::Result;

    fn to_css_string(&self) -> String {
        let mut css = String::new();
        // Writing into a String cannot fail
        let _ = self.to_css(&mut css);
        css
    }
}

/// One parsed basic shape function
#[enum_dispatch(ToCss)]
#[derive(Debug, Clone, PartialEq)]
pub enum BasicShapeValue {
    Circle(CircleValue),
    Ellipse(EllipseValue),
    Polygon(PolygonValue),
    Inset(InsetValue),
    Rect(RectValue),
    Xywh(XywhValue),
    Ray(RayValue),
}

/// Center slots hold an identifier, a bare length (from the top/left edge)
/// or `Pair(side, length)`. `None` means the slot was omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircleValue {
    pub radius: Option<CssValue>,
    pub center_x: Option<CssValue>,
    pub center_y: Option<CssValue>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EllipseValue {
    pub radius_x: Option<CssValue>,
    pub radius_y: Option<CssValue>,
    pub center_x: Option<CssValue>,
    pub center_y: Option<CssValue>,
}

/// Every point is `Pair(x, y)`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonValue {
    pub wind_rule: WindRule,
    pub points: Vec<CssValue>,
}

/// `edges` holds one to four values, expanded like the `margin` shorthand.
/// `radii` is `List(horizontal)` or `Pair(List(horizontal), List(vertical))`.
#[derive(Debug, Clone, PartialEq)]
pub struct InsetValue {
    pub edges: Vec<CssValue>,
    pub radii: Option<CssValue>,
}

/// Same slot layout as [`InsetValue`]; edges may also be `auto`.
#[derive(Debug, Clone, PartialEq)]
pub struct RectValue {
    pub edges: Vec<CssValue>,
    pub radii: Option<CssValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XywhValue {
    pub x: CssValue,
    pub y: CssValue,
    pub width: CssValue,
    pub height: CssValue,
    pub radii: Option<CssValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RayValue {
    pub angle: CssValue,
    pub size: Option<Keyword>,
    pub contain: bool,
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_css(f)
    }
}

impl fmt::Display for BasicShapeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_css(f)
    }
}
