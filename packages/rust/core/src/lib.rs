//! Feature-gated CSS selector generation.
//!
//! Builds selectors that scope a block of declarations to documents whose
//! root carries (or lacks) feature-detection classes such as `.flexbox`,
//! `.no-flexbox` and `.no-js`. Selectors are nested under an explicit
//! context selector; nothing is detected at runtime.
//!
//! The free functions use the default class names (`no-` prefix, `no-js`).
//! Use [`FeatureGate`] for custom naming.

pub mod gate;
pub mod rule;
pub mod selector;

pub use gate::{FeatureGate, Gate};
pub use rule::{Block, Declaration, Rule, Stylesheet};
pub use selector::{Accumulator, ContextSelector};

use featuregate_shared::{FeatureArg, Result};

/// All `features` supported.
pub fn yep(context: &str, features: &[FeatureArg], block: Block) -> Result<Rule> {
    FeatureGate::default().yep(context, features, block)
}

/// Any of `features` unsupported, or scripting unavailable.
pub fn nope(context: &str, features: &[FeatureArg], block: Block) -> Result<Rule> {
    FeatureGate::default().nope(context, features, block)
}

/// Any of `features` supported.
pub fn any(context: &str, features: &[FeatureArg], block: Block) -> Result<Rule> {
    FeatureGate::default().any(context, features, block)
}

/// All `features` unsupported, or scripting unavailable.
pub fn neither(context: &str, features: &[FeatureArg], block: Block) -> Result<Rule> {
    FeatureGate::default().neither(context, features, block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_render_a_stylesheet() {
        let features = [FeatureArg::from("translate3d"), FeatureArg::from("opacity")];
        let block = || Block::new().declare("opacity", "1");

        let mut sheet = Stylesheet::new();
        sheet.push(yep(".my-selector", &features, block()).expect("yep"));
        sheet.push(nope(".my-selector", &features, block()).expect("nope"));
        sheet.push(any(".my-selector", &features, block()).expect("any"));
        sheet.push(neither(".my-selector", &features, block()).expect("neither"));

        let css = sheet.to_string();
        let headers: Vec<&str> = css.lines().filter(|l| l.ends_with('{')).collect();
        assert_eq!(
            headers,
            [
                ".translate3d.opacity .my-selector {",
                ".no-js .my-selector, .no-translate3d .my-selector, .no-opacity .my-selector {",
                ".translate3d .my-selector, .opacity .my-selector {",
                ".no-js .my-selector, .no-translate3d.no-opacity .my-selector {",
            ]
        );
    }
}
