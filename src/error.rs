use std::fmt;

/// Source location span for diagnostics
/// Represents a range of characters in the normalized formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            String::new()
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

/// Parse-quality findings.
///
/// Diagnostics never abort a plot: each one marks a place where the parser
/// substituted a placeholder value (or dropped a closed-form term) and
/// carried on. Only [`Diagnostic::MaxDepthExceeded`] and
/// [`Diagnostic::MaxNodesExceeded`] are fatal, and even those are turned
/// into a blank plot by the top-level entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A character that cannot start a primary expression
    UnexpectedToken { got: String, span: Span },

    /// A name that is neither the variable, `pi`, nor a registered function
    UnknownIdentifier { name: String, span: Span },

    /// A registered function name used without an argument list
    MissingArgument { name: String, span: Span },

    /// A `[0-9.]+` run that is not entirely a decimal number; without any
    /// leading digits it evaluates to NaN
    InvalidNumber { value: String, span: Span },

    /// A group or call that reached the end of input without `)`
    UnclosedParen { span: Span },

    /// Input left over after the top-level expression
    TrailingInput { rest: String, span: Span },

    /// Nesting deeper than the configured limit
    MaxDepthExceeded { limit: usize },

    /// More tree nodes than the configured limit
    MaxNodesExceeded { limit: usize },

    // Closed-form sublanguage
    /// A term outside the amplitude * rect/tri((f - c)/w) shape
    UnrecognizedTerm { term: String },

    /// A closed-form pulse with zero width
    DegeneratePulse { term: String },
}

impl Diagnostic {
    /// Whether the whole parse had to be abandoned
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Diagnostic::MaxDepthExceeded { .. } | Diagnostic::MaxNodesExceeded { .. }
        )
    }

    /// Location in the normalized input, if the diagnostic has one
    pub fn span(&self) -> Option<Span> {
        match self {
            Diagnostic::UnexpectedToken { span, .. }
            | Diagnostic::UnknownIdentifier { span, .. }
            | Diagnostic::MissingArgument { span, .. }
            | Diagnostic::InvalidNumber { span, .. }
            | Diagnostic::UnclosedParen { span }
            | Diagnostic::TrailingInput { span, .. } => Some(*span),
            Diagnostic::MaxDepthExceeded { .. }
            | Diagnostic::MaxNodesExceeded { .. }
            | Diagnostic::UnrecognizedTerm { .. }
            | Diagnostic::DegeneratePulse { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnexpectedToken { got, span } => {
                write!(f, "Unexpected '{}'{}, treated as 0", got, span.display())
            }
            Diagnostic::UnknownIdentifier { name, span } => {
                write!(
                    f,
                    "Unknown identifier '{}'{}, treated as 0",
                    name,
                    span.display()
                )
            }
            Diagnostic::MissingArgument { name, span } => {
                write!(
                    f,
                    "Function '{}' used without an argument{}, treated as 0",
                    name,
                    span.display()
                )
            }
            Diagnostic::InvalidNumber { value, span } => {
                write!(f, "Invalid number format: '{}'{}", value, span.display())
            }
            Diagnostic::UnclosedParen { span } => {
                write!(f, "Missing ')'{}", span.display())
            }
            Diagnostic::TrailingInput { rest, span } => {
                write!(f, "Ignored trailing input '{}'{}", rest, span.display())
            }
            Diagnostic::MaxDepthExceeded { limit } => {
                write!(f, "Expression nesting depth exceeds maximum limit of {}", limit)
            }
            Diagnostic::MaxNodesExceeded { limit } => {
                write!(f, "Expression node count exceeds maximum limit of {}", limit)
            }
            Diagnostic::UnrecognizedTerm { term } => {
                write!(f, "Unrecognized term: '{}'", term)
            }
            Diagnostic::DegeneratePulse { term } => {
                write!(f, "Pulse with zero width ignored: '{}'", term)
            }
        }
    }
}

impl std::error::Error for Diagnostic {}

/// Errors raised while building or loading a sampler configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Search range bounds that are not finite or not increasing
    InvalidRange { min: f64, max: f64 },

    /// A sampling grid with no steps
    ZeroSteps { field: &'static str },

    /// A sampling grid finer than `MAX_STEPS`
    TooManySteps { field: &'static str, limit: usize },

    /// A numeric setting outside its allowed range
    InvalidValue { field: &'static str, value: f64 },

    /// Malformed JSON configuration
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRange { min, max } => {
                write!(f, "Invalid range [{}, {}]: bounds must be finite and min < max", min, max)
            }
            ConfigError::ZeroSteps { field } => {
                write!(f, "'{}' must be at least 1", field)
            }
            ConfigError::TooManySteps { field, limit } => {
                write!(f, "'{}' must be at most {}", field, limit)
            }
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value {} for '{}'", value, field)
            }
            ConfigError::Json(e) => write!(f, "Invalid configuration JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_display_is_one_indexed() {
        assert_eq!(Span::at(0).display(), " at position 1");
        assert_eq!(Span::new(2, 5).display(), " at positions 3-5");
        assert_eq!(Span::new(3, 3).display(), "");
    }

    #[test]
    fn test_only_limits_are_fatal() {
        assert!(Diagnostic::MaxDepthExceeded { limit: 3 }.is_fatal());
        assert!(Diagnostic::MaxNodesExceeded { limit: 3 }.is_fatal());
        let d = Diagnostic::UnknownIdentifier {
            name: "foo".to_string(),
            span: Span::new(0, 3),
        };
        assert!(!d.is_fatal());
        assert_eq!(d.span(), Some(Span::new(0, 3)));
        assert_eq!(
            d.to_string(),
            "Unknown identifier 'foo' at positions 1-3, treated as 0"
        );
    }
}
