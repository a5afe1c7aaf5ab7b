//! Compact CSS serialization.
//!
//! Only the handful of constructs the palette needs: plain rules, a
//! `prefers-color-scheme: dark` media block, and utility rules binding a
//! property to a token. Output has no whitespace between tokens:
//!
//! ```text
//! :root{--a-token:0.00 0.00% 0.00%;--a:hsl(var(--a-token))}
//! @media (prefers-color-scheme: dark){:root{...}}
//! .a{background-color:var(--a)}
//! [a]{background-color:var(--a)}
//! ```

use std::fmt;

use crate::token::Declaration;

/// Media query wrapping the dark scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    PseudoClass,
    Id,
    Class,
    Attribute,
}

/// A single simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub kind: SelectorKind,
    pub name: String,
}

impl Selector {
    /// Classify a target string by its first character and strip the
    /// marker: `:root`, `#app`, `.theme`, `[data-theme]`. Anything else is
    /// taken as a pseudo-class name.
    #[must_use]
    pub fn parse(target: &str) -> Self {
        let (kind, name) = match target.chars().next() {
            Some(':') => (SelectorKind::PseudoClass, &target[1..]),
            Some('#') => (SelectorKind::Id, &target[1..]),
            Some('.') => (SelectorKind::Class, &target[1..]),
            Some('[') => {
                let inner = &target[1..];
                (
                    SelectorKind::Attribute,
                    inner.strip_suffix(']').unwrap_or(inner),
                )
            }
            _ => (SelectorKind::PseudoClass, target),
        };
        Self {
            kind,
            name: name.to_owned(),
        }
    }

    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            kind: SelectorKind::Class,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn attribute(name: impl Into<String>) -> Self {
        Self {
            kind: SelectorKind::Attribute,
            name: name.into(),
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::parse(":root")
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SelectorKind::PseudoClass => write!(f, ":{}", self.name),
            SelectorKind::Id => write!(f, "#{}", self.name),
            SelectorKind::Class => write!(f, ".{}", self.name),
            SelectorKind::Attribute => write!(f, "[{}]", self.name),
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// One declaration inside a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `--name:value`
    Token(Declaration),
    /// `property:var(--token)`
    Binding { property: &'static str, token: String },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(decl) => write!(f, "{decl}"),
            Self::Binding { property, token } => write!(f, "{property}:var(--{token})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: Selector,
    pub statements: Vec<Statement>,
}

impl Rule {
    #[must_use]
    pub const fn new(selector: Selector, statements: Vec<Statement>) -> Self {
        Self {
            selector,
            statements,
        }
    }

    /// A utility rule setting `property` to the wrapper of `token`.
    #[must_use]
    pub fn binding(selector: Selector, property: &'static str, token: &str) -> Self {
        Self::new(
            selector,
            vec![Statement::Binding {
                property,
                token: token.to_owned(),
            }],
        )
    }

    /// A rule declaring every token on `selector`.
    #[must_use]
    pub fn tokens(selector: Selector, tokens: &[Declaration]) -> Self {
        Self::new(
            selector,
            tokens.iter().cloned().map(Statement::Token).collect(),
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.selector)?;
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{statement}")?;
        }
        f.write_str("}")
    }
}

/// A top-level stylesheet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Rule(Rule),
    Media { query: String, rules: Vec<Rule> },
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(rule) => write!(f, "{rule}"),
            Self::Media { query, rules } => {
                write!(f, "@media {query}{{")?;
                for rule in rules {
                    write!(f, "{rule}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Stylesheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    blocks: Vec<Block>,
}

impl Stylesheet {
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn extend_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.blocks.extend(rules.into_iter().map(Block::Rule));
    }

    /// Light-scheme tokens on `target`. Nothing is added for no tokens.
    pub fn push_light_scheme(&mut self, target: &Selector, tokens: &[Declaration]) {
        if tokens.is_empty() {
            return;
        }
        self.push(Block::Rule(Rule::tokens(target.clone(), tokens)));
    }

    /// Dark-scheme tokens on `target`, wrapped in [`DARK_SCHEME_QUERY`].
    /// Nothing is added for no tokens.
    pub fn push_dark_scheme(&mut self, target: &Selector, tokens: &[Declaration]) {
        if tokens.is_empty() {
            return;
        }
        self.push(Block::Media {
            query: DARK_SCHEME_QUERY.to_owned(),
            rules: vec![Rule::tokens(target.clone(), tokens)],
        });
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Selector ────────────────────────────────────────────────────

    #[test]
    fn parse_selector_kinds() {
        assert_eq!(Selector::parse(":root").kind, SelectorKind::PseudoClass);
        assert_eq!(Selector::parse("#app").kind, SelectorKind::Id);
        assert_eq!(Selector::parse(".theme").kind, SelectorKind::Class);
        assert_eq!(Selector::parse("[data-theme]").kind, SelectorKind::Attribute);
        assert_eq!(Selector::parse("host").kind, SelectorKind::PseudoClass);
    }

    #[test]
    fn parse_strips_markers() {
        assert_eq!(Selector::parse(":root").name, "root");
        assert_eq!(Selector::parse("#app").name, "app");
        assert_eq!(Selector::parse("[data-theme]").name, "data-theme");
        assert_eq!(Selector::parse("[open").name, "open");
    }

    #[test]
    fn selector_display_round_trips() {
        for target in [":root", "#app", ".theme", "[data-theme]"] {
            assert_eq!(Selector::parse(target).to_string(), target);
        }
        assert_eq!(Selector::parse("host").to_string(), ":host");
    }

    // ── Rules ───────────────────────────────────────────────────────

    #[test]
    fn binding_rule() {
        let rule = Rule::binding(Selector::class("primary-0"), "background-color", "primary-0");
        assert_eq!(rule.to_string(), ".primary-0{background-color:var(--primary-0)}");
        let rule = Rule::binding(Selector::attribute("primary-font-0"), "color", "primary-font-0");
        assert_eq!(rule.to_string(), "[primary-font-0]{color:var(--primary-font-0)}");
    }

    #[test]
    fn token_rule_joins_with_semicolons() {
        let tokens = [Declaration::new("a", "1"), Declaration::new("b", "2")];
        let rule = Rule::tokens(Selector::default(), &tokens);
        assert_eq!(rule.to_string(), ":root{--a:1;--b:2}");
    }

    // ── Stylesheet ──────────────────────────────────────────────────

    #[test]
    fn light_and_dark_schemes() {
        let mut sheet = Stylesheet::new();
        let target = Selector::default();
        sheet.push_light_scheme(&target, &[Declaration::new("a", "1")]);
        sheet.push_dark_scheme(&target, &[Declaration::new("a", "2")]);
        assert_eq!(
            sheet.to_string(),
            ":root{--a:1}@media (prefers-color-scheme: dark){:root{--a:2}}"
        );
    }

    #[test]
    fn empty_schemes_are_omitted() {
        let mut sheet = Stylesheet::new();
        let target = Selector::default();
        sheet.push_light_scheme(&target, &[]);
        sheet.push_dark_scheme(&target, &[]);
        assert!(sheet.is_empty());
        assert_eq!(sheet.to_string(), "");
    }

    #[test]
    fn rules_follow_schemes_in_order() {
        let mut sheet = Stylesheet::new();
        sheet.push_light_scheme(&Selector::parse(".app"), &[Declaration::new("a", "1")]);
        sheet.extend_rules([
            Rule::binding(Selector::class("a"), "background-color", "a"),
            Rule::binding(Selector::attribute("a"), "background-color", "a"),
        ]);
        assert_eq!(sheet.blocks().len(), 3);
        assert_eq!(
            sheet.to_string(),
            ".app{--a:1}.a{background-color:var(--a)}[a]{background-color:var(--a)}"
        );
    }
}
