//! Error handling for the unfold engine
//!
//! Every failure happens at strip construction time. Queries are infallible,
//! so nothing in here is ever produced by the per-frame path.

use crate::geometry::Edge;

/// What went wrong while reading a grammar token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarErrorKind {
    /// Character is not an edge letter, a brace or whitespace
    UnknownToken,
    /// Edge letter not followed by `0`, `1` or `2`
    InvalidAngleCode,
    /// `{` nested deeper than the configured maximum
    BranchTooDeep { max_depth: usize },
}

impl std::fmt::Display for GrammarErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarErrorKind::UnknownToken => write!(f, "expected one of A-D, a-d, '{{' or '}}'"),
            GrammarErrorKind::InvalidAngleCode => write!(f, "expected angle code 0, 1 or 2"),
            GrammarErrorKind::BranchTooDeep { max_depth } => {
                write!(f, "branch nesting exceeds maximum depth of {}", max_depth)
            }
        }
    }
}

/// Malformed grammar input, with the byte offset of the offending character
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("grammar error at offset {offset} (found {found:?}): {kind}")]
pub struct GrammarError {
    pub offset: usize,
    /// `None` when the input ended where a character was required
    pub found: Option<char>,
    pub kind: GrammarErrorKind,
}

/// A hinge edge that cannot define a rotation frame
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("degenerate geometry on edge {edge:?}: {reason}")]
pub struct DegenerateGeometryError {
    pub edge: Edge,
    pub reason: String,
}

/// Main error type for strip construction and configuration
#[derive(Debug, thiserror::Error)]
pub enum UnfoldError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    DegenerateGeometry(#[from] DegenerateGeometryError),

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Strip label '{label}' is already in use")]
    DuplicateStrip { label: String },

    #[error("Failed to build strip '{strip}': {source}")]
    StripBuild {
        strip: String,
        #[source]
        source: Box<UnfoldError>,
    },
}

/// Type alias for Results in the unfold engine
pub type UnfoldResult<T> = Result<T, UnfoldError>;

/// Extension trait for tagging construction errors with the strip they came from
pub trait StripErrorContext<T> {
    fn strip_context(self, strip: &str) -> UnfoldResult<T>;
}

impl<T, E> StripErrorContext<T> for Result<T, E>
where
    E: Into<UnfoldError>,
{
    fn strip_context(self, strip: &str) -> UnfoldResult<T> {
        self.map_err(|e| UnfoldError::StripBuild {
            strip: strip.to_string(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_error_display() {
        let err = GrammarError {
            offset: 3,
            found: Some('x'),
            kind: GrammarErrorKind::UnknownToken,
        };
        assert_eq!(
            err.to_string(),
            "grammar error at offset 3 (found Some('x')): expected one of A-D, a-d, '{' or '}'"
        );
    }

    #[test]
    fn test_strip_context_wraps_source() {
        let result: Result<(), GrammarError> = Err(GrammarError {
            offset: 1,
            found: None,
            kind: GrammarErrorKind::InvalidAngleCode,
        });

        let err = result.strip_context("left-wing").expect_err("should carry the error");
        match &err {
            UnfoldError::StripBuild { strip, source } => {
                assert_eq!(strip, "left-wing");
                assert!(matches!(**source, UnfoldError::Grammar(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Failed to build strip 'left-wing'"));
    }
}
