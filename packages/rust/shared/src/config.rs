//! Class-naming configuration for featuregate.
//!
//! The class names must match whatever the runtime detection script writes
//! on the document root; the defaults follow the common `no-js` /
//! `no-<feature>` scheme. A build may load overrides from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FeatureGateError, Result};
use crate::types::CLASS_NAME_RE;

// ---------------------------------------------------------------------------
// Config structs (matching featuregate.toml schema)
// ---------------------------------------------------------------------------

/// Top-level config, deserialized from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Class naming.
    #[serde(default)]
    pub classes: ClassesConfig,
}

/// `[classes]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassesConfig {
    /// Prefix marking a feature as unsupported (`no-` → `.no-flexbox`).
    #[serde(default = "default_negation_prefix")]
    pub negation_prefix: String,

    /// Class present when scripting is unavailable.
    #[serde(default = "default_no_script_class")]
    pub no_script_class: String,
}

impl Default for ClassesConfig {
    fn default() -> Self {
        Self {
            negation_prefix: default_negation_prefix(),
            no_script_class: default_no_script_class(),
        }
    }
}

fn default_negation_prefix() -> String {
    "no-".into()
}
fn default_no_script_class() -> String {
    "no-js".into()
}

impl GateConfig {
    /// Check that the configured class names can appear in a selector.
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.classes.negation_prefix;
        if prefix.is_empty() {
            return Err(FeatureGateError::config("negation_prefix must not be empty"));
        }
        // The prefix is always followed by a feature name, so a trailing
        // letter is enough to make it a valid identifier start.
        if !CLASS_NAME_RE.is_match(&format!("{prefix}x")) {
            return Err(FeatureGateError::config(format!(
                "negation_prefix `{prefix}` is not a valid class name prefix"
            )));
        }

        let no_script = &self.classes.no_script_class;
        if !CLASS_NAME_RE.is_match(no_script) {
            return Err(FeatureGateError::config(format!(
                "no_script_class `{no_script}` is not a valid class name"
            )));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load and validate the config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<GateConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| FeatureGateError::io(path, e))?;

    let config: GateConfig = toml::from_str(&content).map_err(|e| {
        FeatureGateError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.validate()?;
    tracing::debug!(?path, classes = ?config.classes, "loaded gate config");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let toml_str = toml::to_string_pretty(&GateConfig::default()).expect("serialize");
        assert!(toml_str.contains("negation_prefix"));
        assert!(toml_str.contains("no-js"));
    }

    #[test]
    fn config_roundtrip() {
        let toml_str = toml::to_string_pretty(&GateConfig::default()).expect("serialize");
        let parsed: GateConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed, GateConfig::default());
    }

    #[test]
    fn missing_section_uses_defaults() {
        let parsed: GateConfig = toml::from_str("").expect("parse empty");
        assert_eq!(parsed.classes.negation_prefix, "no-");
        assert_eq!(parsed.classes.no_script_class, "no-js");
    }

    #[test]
    fn partial_section_keeps_other_default() {
        let parsed: GateConfig = toml::from_str(
            r#"
[classes]
negation_prefix = "lacks-"
"#,
        )
        .expect("parse");
        assert_eq!(parsed.classes.negation_prefix, "lacks-");
        assert_eq!(parsed.classes.no_script_class, "no-js");
    }

    #[test]
    fn validation_rejects_bad_classes() {
        let mut config = GateConfig::default();
        config.classes.negation_prefix = String::new();
        assert!(config.validate().is_err());

        let mut config = GateConfig::default();
        config.classes.negation_prefix = "not ".into();
        assert!(config.validate().is_err());

        let mut config = GateConfig::default();
        config.classes.no_script_class = ".no-js".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("no_script_class"));
    }

    #[test]
    fn fixture_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/toml/featuregate.fixture.toml");
        let config = load_config_from(&path).expect("load fixture");
        assert_eq!(config.classes.negation_prefix, "lacks-");
        assert_eq!(config.classes.no_script_class, "noscript");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/featuregate.toml")).unwrap_err();
        assert!(matches!(err, FeatureGateError::Io { .. }));
    }
}
