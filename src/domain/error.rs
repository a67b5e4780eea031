use std::fmt;

use thiserror::Error;

use crate::domain::value_type::ValueType;

/// First failing rule found while evaluating a constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// Value kind differs from the kind the constraint is bound to.
    #[error("expected type {expected} but found {actual}")]
    BasicType {
        expected: ValueType,
        actual: ValueType,
    },

    /// Number or length outside an inclusive or exclusive bound.
    #[error("{subject} {actual} is {} ({bound}={limit})", .bound.direction())]
    Range {
        subject: RangeSubject,
        bound: Bound,
        actual: f64,
        limit: f64,
    },

    #[error("{value} is not an integer")]
    Integer { value: f64 },

    #[error("{value} is not positive")]
    Positive { value: f64 },

    #[error("{value} is not negative")]
    Negative { value: f64 },

    #[error("zero is not allowed")]
    ZeroNotAllowed,

    /// A directive and its negated counterpart were both declared.
    #[error("conflicting directives `{directive}` and `{counterpart}`")]
    DirectiveConflict {
        directive: String,
        counterpart: String,
    },

    /// Any other string, object or array rule.
    #[error("{rule} failed: {message}")]
    Rule { rule: &'static str, message: String },
}

impl Violation {
    pub(crate) fn conflict(directive: impl Into<String>, counterpart: impl Into<String>) -> Self {
        Self::DirectiveConflict {
            directive: directive.into(),
            counterpart: counterpart.into(),
        }
    }

    pub(crate) fn rule(rule: &'static str, message: impl Into<String>) -> Self {
        Self::Rule {
            rule,
            message: message.into(),
        }
    }

    /// Stable tag used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BasicType { .. } => "basic_type",
            Self::Range { .. } => "range",
            Self::Integer { .. } => "integer",
            Self::Positive { .. } => "positive",
            Self::Negative { .. } => "negative",
            Self::ZeroNotAllowed => "zero_not_allowed",
            Self::DirectiveConflict { .. } => "directive_conflict",
            Self::Rule { .. } => "rule",
        }
    }
}

/// What a range bound was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSubject {
    Value,
    Length,
}

impl fmt::Display for RangeSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("value"),
            Self::Length => f.write_str("length"),
        }
    }
}

/// Bound directive that was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
    MaxExclusive,
    MinLength,
    MaxLength,
}

impl Bound {
    pub fn direction(self) -> &'static str {
        match self {
            Self::Min | Self::MinLength => "below the minimum",
            Self::Max | Self::MaxLength => "above the maximum",
            Self::MaxExclusive => "not below the exclusive maximum",
        }
    }

    pub fn directive(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::MaxExclusive => "maxx",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive())
    }
}
