//! Selector construction.
//!
//! Feature predicates are gathered into an [`Accumulator`], which is then
//! nested under the caller's [`ContextSelector`] to produce the final
//! selector list.

use tracing::trace;

use featuregate_shared::{
    ClassesConfig, Combination, FeatureGateError, FeatureName, Polarity, Result,
};

// ---------------------------------------------------------------------------
// ContextSelector
// ---------------------------------------------------------------------------

/// The selector of the enclosing rule, split into its comma-separated parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSelector {
    parts: Vec<String>,
}

impl ContextSelector {
    /// Parse the enclosing selector for `operation`.
    ///
    /// An empty selector means the gate was used outside of any rule.
    pub fn parse(operation: &str, selector: &str) -> Result<Self> {
        let parts = split_selector_list(selector);
        if parts.is_empty() {
            return Err(FeatureGateError::usage(operation));
        }
        Ok(Self { parts })
    }

    /// The individual complex selectors, in source order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

/// Split a selector list at top-level commas.
///
/// Commas inside `()`, `[]` or quoted strings belong to the selector
/// (`:is(.a, .b)`, `[title="a,b"]`), and a backslash escapes the next
/// character (`.a\,b`). Whitespace runs outside quotes collapse to one
/// space; quoted text is kept byte for byte. Empty pieces are dropped.
fn split_selector_list(selector: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut pending_space = false;
    let mut chars = selector.chars();

    while let Some(c) = chars.next() {
        if quote.is_none() && c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if quote.is_none() && depth == 0 && c == ',' {
            pending_space = false;
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            continue;
        }
        if pending_space {
            if !current.is_empty() {
                current.push(' ');
            }
            pending_space = false;
        }

        match (quote, c) {
            (_, '\\') => {
                current.push(c);
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                continue;
            }
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            _ => {}
        }
        current.push(c);
    }
    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Feature predicates collected before nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accumulator {
    /// A single compound selector, e.g. `.a.b`. Empty when no predicates.
    Compound(String),
    /// Grouped alternatives, e.g. `.a`, `.b`.
    Alternatives(Vec<String>),
}

impl Accumulator {
    /// Collect the predicates for `features` under the given polarity and
    /// combination.
    ///
    /// Unsupported gates always start with the no-script alternative; with
    /// a conjunctive combination the negated predicates form one compound
    /// that becomes the second alternative.
    pub fn collect(
        features: &[FeatureName],
        polarity: Polarity,
        combination: Combination,
        classes: &ClassesConfig,
    ) -> Self {
        let prefix = match polarity {
            Polarity::Supported => "",
            Polarity::Unsupported => classes.negation_prefix.as_str(),
        };
        let predicates = features.iter().map(|name| {
            let predicate = format!(".{prefix}{name}");
            trace!(%predicate, "feature predicate");
            predicate
        });

        match (polarity, combination) {
            (Polarity::Supported, Combination::Conjunctive) => {
                Self::Compound(predicates.collect())
            }
            (Polarity::Supported, Combination::Disjunctive) => {
                Self::Alternatives(predicates.collect())
            }
            (Polarity::Unsupported, Combination::Disjunctive) => {
                let mut alternatives = vec![format!(".{}", classes.no_script_class)];
                alternatives.extend(predicates);
                Self::Alternatives(alternatives)
            }
            (Polarity::Unsupported, Combination::Conjunctive) => {
                let mut alternatives = vec![format!(".{}", classes.no_script_class)];
                let compound: String = predicates.collect();
                if !compound.is_empty() {
                    alternatives.push(compound);
                }
                Self::Alternatives(alternatives)
            }
        }
    }

    /// Nest the predicates under `context`, one selector per
    /// (alternative, context part) pair, alternative-major.
    ///
    /// With no predicates at all the context is returned unchanged.
    pub fn nest(&self, context: &ContextSelector) -> Vec<String> {
        let alternatives: &[String] = match self {
            Self::Compound(compound) if compound.is_empty() => &[],
            Self::Compound(compound) => std::slice::from_ref(compound),
            Self::Alternatives(alternatives) => alternatives,
        };

        let parts = context.parts();
        if alternatives.is_empty() {
            return parts.to_vec();
        }

        alternatives
            .iter()
            .flat_map(|alternative| {
                parts
                    .iter()
                    .map(move |part| format!("{alternative} {part}"))
            })
            .collect()
    }
}
