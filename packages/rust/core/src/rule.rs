//! Emitted CSS: declarations, rules, and the stylesheet they land in.

use std::fmt;

/// A single `property: value` pair, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// The body of a gated rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    declarations: Vec<Declaration>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration (builder style).
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

/// A selector list paired with its block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub block: Block,
}

impl Rule {
    /// The selector list as it appears in CSS (`a, b`).
    pub fn selector_text(&self) -> String {
        self.selectors.join(", ")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector_text())?;
        for declaration in self.block.declarations() {
            writeln!(f, "  {declaration}")?;
        }
        f.write_str("}")
    }
}

/// Output sink for emitted rules, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_renders_selectors_and_block() {
        let rule = Rule {
            selectors: vec![".a .x".into(), ".b .x".into()],
            block: Block::new().declare("opacity", "1").declare("color", "red"),
        };
        assert_eq!(
            rule.to_string(),
            ".a .x, .b .x {\n  opacity: 1;\n  color: red;\n}"
        );
    }

    #[test]
    fn empty_block_renders_braces() {
        let rule = Rule {
            selectors: vec![".x".into()],
            block: Block::new(),
        };
        assert_eq!(rule.to_string(), ".x {\n}");
    }

    #[test]
    fn stylesheet_separates_rules() {
        let mut sheet = Stylesheet::new();
        assert_eq!(sheet.to_string(), "");

        for selector in [".a", ".b"] {
            sheet.push(Rule {
                selectors: vec![selector.into()],
                block: Block::new().declare("top", "0"),
            });
        }
        assert_eq!(sheet.to_string(), ".a {\n  top: 0;\n}\n\n.b {\n  top: 0;\n}\n");
    }
}
