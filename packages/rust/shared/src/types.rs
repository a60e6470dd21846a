//! Core domain types for feature-gated selectors.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FeatureGateError, Result};

/// A class name (or class-name fragment) usable after a `.` in a selector.
pub(crate) static CLASS_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").expect("class name regex")
});

// ---------------------------------------------------------------------------
// Polarity / Combination
// ---------------------------------------------------------------------------

/// Whether the gated rule targets browsers that have or lack the features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Class without prefix, e.g. `.flexbox`.
    Supported,
    /// Class with the negation prefix, e.g. `.no-flexbox`, plus the
    /// no-script class.
    Unsupported,
}

/// How the feature predicates are combined with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    /// All features at once: one compound selector (`.a.b`).
    Conjunctive,
    /// Any feature: one alternative per feature (`.a, .b`).
    Disjunctive,
}

// ---------------------------------------------------------------------------
// FeatureArg
// ---------------------------------------------------------------------------

/// A raw argument supplied at the call site, before validation.
///
/// Mirrors the value kinds a stylesheet preprocessor would pass through;
/// only [`FeatureArg::Text`] names a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureArg {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
    List(Vec<FeatureArg>),
}

impl fmt::Display for FeatureArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<&str> for FeatureArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FeatureArg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FeatureArg {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for FeatureArg {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for FeatureArg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// FeatureName
// ---------------------------------------------------------------------------

/// A validated feature name, e.g. `translate3d`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureName(String);

impl FeatureName {
    /// Validate a call-site argument as a feature name for `operation`.
    ///
    /// Non-text values fail with [`FeatureGateError::Type`]; text that
    /// cannot appear in a class name fails with
    /// [`FeatureGateError::Validation`].
    pub fn from_arg(operation: &str, arg: &FeatureArg) -> Result<Self> {
        let FeatureArg::Text(text) = arg else {
            return Err(FeatureGateError::type_error(operation, arg.to_string()));
        };

        if !CLASS_NAME_RE.is_match(text) {
            return Err(FeatureGateError::validation(format!(
                "`{text}` is not a valid feature name for `{operation}`"
            )));
        }

        Ok(Self(text.clone()))
    }

    /// The bare name, without any prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_argument_becomes_feature() {
        let name = FeatureName::from_arg("yep", &"translate3d".into()).expect("valid name");
        assert_eq!(name.as_str(), "translate3d");
    }

    #[test]
    fn number_argument_is_type_error() {
        let err = FeatureName::from_arg("yep", &42.into()).unwrap_err();
        assert!(matches!(err, FeatureGateError::Type { .. }));
        assert_eq!(err.to_string(), "`42` is not a string for `yep`");
    }

    #[test]
    fn nested_list_is_type_error() {
        let arg = FeatureArg::List(vec!["flexbox".into(), FeatureArg::Null]);
        let err = FeatureName::from_arg("any", &arg).unwrap_err();
        assert_eq!(err.to_string(), "`(flexbox, null)` is not a string for `any`");
    }

    #[test]
    fn bool_and_null_are_type_errors() {
        for arg in [FeatureArg::Bool(true), FeatureArg::Null] {
            let err = FeatureName::from_arg("nope", &arg).unwrap_err();
            assert!(matches!(err, FeatureGateError::Type { .. }));
        }
    }

    #[test]
    fn empty_or_spaced_text_is_rejected() {
        for text in ["", "two words", ".dotted", "3d"] {
            let err = FeatureName::from_arg("neither", &text.into()).unwrap_err();
            assert!(
                matches!(err, FeatureGateError::Validation { .. }),
                "{text:?} should fail validation"
            );
        }
    }

    #[test]
    fn dashed_names_are_accepted() {
        for text in ["input-formaction", "css_calc", "-webkit-box"] {
            assert!(FeatureName::from_arg("yep", &text.into()).is_ok(), "{text}");
        }
    }
}
