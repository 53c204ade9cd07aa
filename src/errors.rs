//! Error types with rich diagnostics using miette
//!
//! Parse errors carry source spans. Conversion errors name the slot of the
//! shape function that held the offending value.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (property name, filename or "<shape>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Span covering `start..end` byte offsets of the source
    pub fn span(&self, start: usize, end: usize) -> SourceSpan {
        SourceSpan::from((start, end.saturating_sub(start)))
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing shape function text
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(basic_shape::parse::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number: {message}")]
    #[diagnostic(code(basic_shape::parse::invalid_number))]
    InvalidNumber {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid number")]
        span: SourceSpan,
    },

    #[error("invalid position")]
    #[diagnostic(
        code(basic_shape::parse::invalid_position),
        help("use `center`, one side keyword per axis, or `<side> <offset>` pairs for both axes")
    )]
    InvalidPosition {
        #[source_code]
        src: NamedSource<String>,
        #[label("cannot place a center here")]
        span: SourceSpan,
    },

    #[error("invalid ray(): {message}")]
    #[diagnostic(
        code(basic_shape::parse::invalid_ray),
        help("ray() takes one angle, at most one size keyword and an optional `contain`")
    )]
    InvalidRay {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("in this ray()")]
        span: SourceSpan,
    },

    #[error("negative size in xywh()")]
    #[diagnostic(code(basic_shape::parse::negative_size))]
    NegativeSize {
        #[source_code]
        src: NamedSource<String>,
        #[label("width and height must not be negative")]
        span: SourceSpan,
    },
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised while converting parsed values into shapes, or while
/// constructing shapes directly.
///
/// A well-behaved parser never produces the first two; they flag a broken
/// contract between the parser and the converter.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("unexpected {found} in {slot}")]
    #[diagnostic(code(basic_shape::convert::unexpected_value))]
    UnexpectedValue { slot: &'static str, found: String },

    #[error("{slot} takes {expected} values, got {got}")]
    #[diagnostic(code(basic_shape::convert::arity))]
    Arity {
        slot: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("{slot} overflows when resolved: {value}")]
    #[diagnostic(code(basic_shape::convert::out_of_range))]
    OutOfRange { slot: &'static str, value: String },

    #[error("{dimension} must be a finite positive length, got {value}")]
    #[diagnostic(code(basic_shape::shape::degenerate_geometry))]
    DegenerateGeometry {
        dimension: &'static str,
        value: String,
    },
}

// ============================================================================
// Context Errors
// ============================================================================

/// Invalid numeric settings for a resolution context
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum ContextError {
    #[error("{field} is NaN")]
    #[diagnostic(code(basic_shape::context::nan))]
    NaN { field: &'static str },

    #[error("{field} is infinite")]
    #[diagnostic(code(basic_shape::context::infinite))]
    Infinite { field: &'static str },

    #[error("{field} must be positive")]
    #[diagnostic(code(basic_shape::context::not_positive))]
    NotPositive { field: &'static str },

    #[error("{field} must not be negative")]
    #[diagnostic(code(basic_shape::context::negative))]
    Negative { field: &'static str },
}
