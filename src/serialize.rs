//! CSS text for shape values.
//!
//! Specified values serialize as written (modulo shorthand collapse and
//! position normalization). A resolved [`Shape`] serializes through its
//! computed value, so `Shape` and `BasicShapeValue` share one code path.

use std::fmt::{self, Write};

use crate::context::ResolutionContext;
use crate::convert::{expand_four_sides, value_for_basic_shape};
use crate::shape::Shape;
use crate::types::WindRule;
use crate::value::{
    CircleValue, CssValue, EllipseValue, InsetValue, Keyword, PolygonValue, RayValue, RectValue,
    ToCss, Unit, XywhValue,
};

const SIGNIFICANT_DIGITS: i32 = 6;

/// Format a number with at most six significant digits and no trailing
/// zeros. Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

impl ToCss for CssValue {
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        match self {
            CssValue::Ident(keyword) => dest.write_str(keyword.as_str()),
            CssValue::Number(n) => dest.write_str(&format_number(*n)),
            CssValue::Percentage(p) => write!(dest, "{}%", format_number(*p)),
            CssValue::Dimension { value, unit } => {
                write!(dest, "{}{}", format_number(*value), unit.as_str())
            }
            CssValue::Pair(first, second) => {
                first.to_css(dest)?;
                dest.write_char(' ')?;
                second.to_css(dest)
            }
            CssValue::List(items) => write_separated(dest, items, " "),
        }
    }
}

impl ToCss for Shape {
    /// Serializes the computed value at zoom 1.
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        value_for_basic_shape(self, &ResolutionContext::default()).to_css(dest)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_css(f)
    }
}

fn write_separated(dest: &mut dyn Write, items: &[CssValue], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            dest.write_str(separator)?;
        }
        item.to_css(dest)?;
    }
    Ok(())
}

// ============================================================================
// circle() / ellipse()
// ============================================================================

impl ToCss for CircleValue {
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        dest.write_str("circle(")?;
        let radius = self
            .radius
            .as_ref()
            .filter(|radius| !radius.is_keyword(Keyword::ClosestSide));
        if let Some(radius) = radius {
            radius.to_css(dest)?;
        }
        write_at_position(
            dest,
            self.center_x.as_ref(),
            self.center_y.as_ref(),
            radius.is_some(),
        )?;
        dest.write_char(')')
    }
}

impl ToCss for EllipseValue {
    /// Radii are dropped only as a pair, when both are `closest-side`.
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        dest.write_str("ellipse(")?;
        let is_default =
            |radius: &Option<CssValue>| radius.as_ref().is_none_or(|r| r.is_keyword(Keyword::ClosestSide));
        let show_radii = !(is_default(&self.radius_x) && is_default(&self.radius_y));
        if show_radii {
            write_radius(dest, self.radius_x.as_ref())?;
            dest.write_char(' ')?;
            write_radius(dest, self.radius_y.as_ref())?;
        }
        write_at_position(
            dest,
            self.center_x.as_ref(),
            self.center_y.as_ref(),
            show_radii,
        )?;
        dest.write_char(')')
    }
}

fn write_radius(dest: &mut dyn Write, radius: Option<&CssValue>) -> fmt::Result {
    match radius {
        Some(radius) => radius.to_css(dest),
        None => dest.write_str(Keyword::ClosestSide.as_str()),
    }
}

/// ` at <x> <y>`, written only when a center was given
fn write_at_position(
    dest: &mut dyn Write,
    center_x: Option<&CssValue>,
    center_y: Option<&CssValue>,
    needs_separator: bool,
) -> fmt::Result {
    if center_x.is_none() && center_y.is_none() {
        return Ok(());
    }
    if needs_separator {
        dest.write_char(' ')?;
    }
    dest.write_str("at ")?;
    let x = serializable_position_offset(center_x, Keyword::Left);
    let y = serializable_position_offset(center_y, Keyword::Top);
    serialize_position_offset(dest, &x, &y)?;
    dest.write_char(' ')?;
    serialize_position_offset(dest, &y, &x)
}

/// One axis of a position reduced to an explicit side and amount
#[derive(Debug, Clone, PartialEq)]
struct PositionOffset {
    side: Keyword,
    amount: CssValue,
}

/// Normalize a center slot for output.
///
/// `center` becomes 50% from the default side. A percentage from the far
/// side is flipped to `100 - p` from the default side. A missing or zero
/// length amount becomes 0% (near side) or 100% (far side), measured from
/// the default side. Any other far-side length keeps its side.
fn serializable_position_offset(offset: Option<&CssValue>, default_side: Keyword) -> PositionOffset {
    let (mut side, mut amount) = match offset {
        None => (Keyword::Center, None),
        Some(CssValue::Ident(keyword)) => (*keyword, None),
        Some(CssValue::Pair(first, second)) => {
            let side = first.as_keyword().unwrap_or(default_side);
            match &**second {
                CssValue::Percentage(p) if is_far_side(side) => {
                    (default_side, Some(CssValue::Percentage(100.0 - p)))
                }
                other => (side, Some(other.clone())),
            }
        }
        Some(other) => (default_side, Some(other.clone())),
    };

    if side == Keyword::Center {
        side = default_side;
        amount = Some(CssValue::Percentage(50.0));
    } else if amount.as_ref().is_none_or(is_zero_length) {
        let percent = if is_far_side(side) { 100.0 } else { 0.0 };
        side = default_side;
        amount = Some(CssValue::Percentage(percent));
    }

    PositionOffset {
        side,
        amount: amount.unwrap_or(CssValue::Percentage(0.0)),
    }
}

/// Write just the amount when the sides are the default left/top pair,
/// `<side> <amount>` otherwise.
fn serialize_position_offset(
    dest: &mut dyn Write,
    offset: &PositionOffset,
    other: &PositionOffset,
) -> fmt::Result {
    let default_pair = matches!(
        (offset.side, other.side),
        (Keyword::Left, Keyword::Top) | (Keyword::Top, Keyword::Left)
    );
    if !default_pair {
        dest.write_str(offset.side.as_str())?;
        dest.write_char(' ')?;
    }
    offset.amount.to_css(dest)
}

fn is_far_side(side: Keyword) -> bool {
    matches!(side, Keyword::Right | Keyword::Bottom)
}

/// A length (not a percentage) equal to zero
fn is_zero_length(value: &CssValue) -> bool {
    match value {
        CssValue::Number(n) => *n == 0.0,
        CssValue::Dimension { value, unit } => unit.is_length() && *value == 0.0,
        _ => false,
    }
}

// ============================================================================
// polygon()
// ============================================================================

impl ToCss for PolygonValue {
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        dest.write_str(match self.wind_rule {
            WindRule::EvenOdd => "polygon(evenodd, ",
            WindRule::NonZero => "polygon(",
        })?;
        write_separated(dest, &self.points, ", ")?;
        dest.write_char(')')
    }
}

// ============================================================================
// inset() / rect() / xywh()
// ============================================================================

impl ToCss for InsetValue {
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        rect_string_common(dest, "inset(", &self.edges, self.radii.as_ref(), false)
    }
}

impl ToCss for RectValue {
    /// rect() always spells out all four edges
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        rect_string_common(dest, "rect(", &self.edges, self.radii.as_ref(), true)
    }
}

impl ToCss for XywhValue {
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        dest.write_str("xywh(")?;
        for (i, value) in [&self.x, &self.y, &self.width, &self.height]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                dest.write_char(' ')?;
            }
            value.to_css(dest)?;
        }
        write_round_clause(dest, self.radii.as_ref())?;
        dest.write_char(')')
    }
}

/// Shared body of inset() and rect(): four edges collapsed in reverse of
/// the four-side shorthand expansion, then the optional `round` clause.
fn rect_string_common(
    dest: &mut dyn Write,
    opening: &str,
    edges: &[CssValue],
    radii: Option<&CssValue>,
    force_show_left: bool,
) -> fmt::Result {
    dest.write_str(opening)?;
    let texts: Vec<String> = edges.iter().map(ToCss::to_css_string).collect();
    match expand_four_sides(&texts) {
        Some([top, right, bottom, left]) => {
            let show_left = force_show_left || left != right;
            let show_bottom = show_left || bottom != top;
            let show_right = show_bottom || right != top;

            dest.write_str(&top)?;
            for (shown, text) in [(show_right, right), (show_bottom, bottom), (show_left, left)] {
                if shown {
                    dest.write_char(' ')?;
                    dest.write_str(&text)?;
                }
            }
        }
        None => dest.write_str(&texts.join(" "))?,
    }
    write_round_clause(dest, radii)?;
    dest.write_char(')')
}

/// ` round <horizontal> [/ <vertical>]`, omitted when every corner is the
/// default `0px`.
fn write_round_clause(dest: &mut dyn Write, radii: Option<&CssValue>) -> fmt::Result {
    let Some(radii) = radii else {
        return Ok(());
    };
    let (horizontal, vertical) = match radii {
        CssValue::Pair(first, second) => match (&**first, &**second) {
            (CssValue::List(h), CssValue::List(v)) => (h.as_slice(), v.as_slice()),
            _ => (std::slice::from_ref(radii), std::slice::from_ref(radii)),
        },
        CssValue::List(h) => (h.as_slice(), h.as_slice()),
        other => (std::slice::from_ref(other), std::slice::from_ref(other)),
    };

    let (horizontal_default, horizontal) = inset_radii(horizontal);
    let (vertical_default, vertical) = inset_radii(vertical);
    if horizontal_default && vertical_default {
        return Ok(());
    }

    dest.write_str(" round ")?;
    dest.write_str(&horizontal.join(" "))?;
    if horizontal != vertical {
        dest.write_str(" / ")?;
        dest.write_str(&vertical.join(" "))?;
    }
    Ok(())
}

/// Collapse one axis of corner radii (top-left, top-right, bottom-right,
/// bottom-left) to its shortest four-side form. The flag reports whether the
/// result is the single default radius `0px`.
fn inset_radii(radii: &[CssValue]) -> (bool, Vec<String>) {
    let texts: Vec<String> = radii.iter().map(ToCss::to_css_string).collect();
    let Some([top_left, top_right, bottom_right, bottom_left]) = expand_four_sides(&texts) else {
        return (false, texts);
    };

    let show_bottom_left = top_right != bottom_left;
    let show_bottom_right = show_bottom_left || bottom_right != top_left;
    let show_top_right = show_bottom_right || top_right != top_left;

    let mut collapsed = vec![top_left];
    if show_top_right {
        collapsed.push(top_right);
    }
    if show_bottom_right {
        collapsed.push(bottom_right);
    }
    if show_bottom_left {
        collapsed.push(bottom_left);
    }

    let is_default = collapsed.len() == 1
        && radii.first().is_some_and(|radius| match radius {
            CssValue::Number(n) => *n == 0.0,
            CssValue::Dimension { value, unit } => *unit == Unit::Px && *value == 0.0,
            _ => false,
        });
    (is_default, collapsed)
}

// ============================================================================
// ray()
// ============================================================================

impl ToCss for RayValue {
    fn to_css(&self, dest: &mut dyn Write) -> fmt::Result {
        dest.write_str("ray(")?;
        self.angle.to_css(dest)?;
        if let Some(size) = self.size {
            dest.write_char(' ')?;
            dest.write_str(size.as_str())?;
        }
        if self.contain {
            dest.write_str(" contain")?;
        }
        dest.write_char(')')
    }
}
