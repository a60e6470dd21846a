//! The four feature gates and the builder behind them.
//!
//! | gate      | polarity    | combination | matches                            |
//! |-----------|-------------|-------------|------------------------------------|
//! | `yep`     | supported   | conjunctive | all features supported             |
//! | `nope`    | unsupported | disjunctive | any feature unsupported, or no JS  |
//! | `any`     | supported   | disjunctive | any feature supported              |
//! | `neither` | unsupported | conjunctive | all features unsupported, or no JS |

use tracing::{debug, instrument};

use featuregate_shared::{Combination, FeatureArg, FeatureName, GateConfig, Polarity, Result};

use crate::rule::{Block, Rule};
use crate::selector::{Accumulator, ContextSelector};

/// One of the named entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Yep,
    Nope,
    Any,
    Neither,
}

impl Gate {
    /// Name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Yep => "yep",
            Self::Nope => "nope",
            Self::Any => "any",
            Self::Neither => "neither",
        }
    }

    /// Whether the gate targets present or missing features.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Yep | Self::Any => Polarity::Supported,
            Self::Nope | Self::Neither => Polarity::Unsupported,
        }
    }

    /// How the gate joins its feature predicates.
    pub fn combination(self) -> Combination {
        match self {
            Self::Yep | Self::Neither => Combination::Conjunctive,
            Self::Nope | Self::Any => Combination::Disjunctive,
        }
    }
}

/// Builds feature-gated rules using a fixed class-naming configuration.
#[derive(Debug, Clone, Default)]
pub struct FeatureGate {
    config: GateConfig,
}

impl FeatureGate {
    /// Create a gate builder, rejecting class names that cannot appear in
    /// a selector.
    pub fn new(config: GateConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build a rule for an arbitrary polarity / combination pair.
    ///
    /// `operation` names the caller in error messages. The context and
    /// every feature are validated before any selector is produced:
    ///
    /// - an empty context is a [`FeatureGateError::Usage`];
    /// - a non-text feature is a [`FeatureGateError::Type`];
    /// - text that cannot follow `.` as a class name (empty, containing
    ///   whitespace or selector punctuation, starting with a digit) is a
    ///   [`FeatureGateError::Validation`], since it would otherwise produce
    ///   a broken selector.
    ///
    /// [`FeatureGateError::Usage`]: featuregate_shared::FeatureGateError::Usage
    /// [`FeatureGateError::Type`]: featuregate_shared::FeatureGateError::Type
    /// [`FeatureGateError::Validation`]: featuregate_shared::FeatureGateError::Validation
    #[instrument(
        skip_all,
        fields(operation = %operation, context = %context, feature_count = features.len())
    )]
    pub fn build(
        &self,
        operation: &str,
        context: &str,
        polarity: Polarity,
        combination: Combination,
        features: &[FeatureArg],
        block: Block,
    ) -> Result<Rule> {
        let context = ContextSelector::parse(operation, context)?;
        let names = features
            .iter()
            .map(|arg| FeatureName::from_arg(operation, arg))
            .collect::<Result<Vec<_>>>()?;

        let accumulator =
            Accumulator::collect(&names, polarity, combination, &self.config.classes);
        let selectors = accumulator.nest(&context);
        debug!(selectors = selectors.len(), ?polarity, ?combination, "gate selectors built");

        Ok(Rule { selectors, block })
    }

    /// Build the rule for one of the named gates.
    pub fn apply(
        &self,
        gate: Gate,
        context: &str,
        features: &[FeatureArg],
        block: Block,
    ) -> Result<Rule> {
        self.build(
            gate.name(),
            context,
            gate.polarity(),
            gate.combination(),
            features,
            block,
        )
    }

    /// All features supported: `.a.b <context>`.
    pub fn yep(&self, context: &str, features: &[FeatureArg], block: Block) -> Result<Rule> {
        self.apply(Gate::Yep, context, features, block)
    }

    /// Any feature unsupported, or no script: `.no-js <context>, .no-a <context>, ...`.
    pub fn nope(&self, context: &str, features: &[FeatureArg], block: Block) -> Result<Rule> {
        self.apply(Gate::Nope, context, features, block)
    }

    /// Any feature supported: `.a <context>, .b <context>`.
    pub fn any(&self, context: &str, features: &[FeatureArg], block: Block) -> Result<Rule> {
        self.apply(Gate::Any, context, features, block)
    }

    /// All features unsupported, or no script: `.no-js <context>, .no-a.no-b <context>`.
    pub fn neither(&self, context: &str, features: &[FeatureArg], block: Block) -> Result<Rule> {
        self.apply(Gate::Neither, context, features, block)
    }
}
