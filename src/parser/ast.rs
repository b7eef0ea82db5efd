//! Document model for the orthogonal case-definition format

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Root AST node - a complete case-definition document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub sections: Vec<Section>,
}

/// Top-level section in a document
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Factor declarations: `factors { ANIMAL: ["cat", "dog"] }`
    Factors(FactorSection),
    /// Template case container: `cases { case "name" { ... } }`
    Cases(CaseSection),
}

/// Declarations section listing named factors
#[derive(Debug, Clone, PartialEq)]
pub struct FactorSection {
    pub entries: Vec<FactorDecl>,
}

/// One factor declaration
///
/// The bracketed value list is kept as raw text; it is only parsed once a
/// case actually references the factor.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorDecl {
    pub name: Spanned<String>,
    pub raw_values: Spanned<String>,
}

/// Container of template cases
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSection {
    pub cases: Vec<TestCase>,
}

/// A template case: a named unit whose body may reference placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: Spanned<String>,
    pub body: Vec<Node>,
}

/// Body tree node
///
/// An exhaustive `match` over this enum is the only way to traverse a case
/// body, so a walker that forgets a structural relation (a loop body, an
/// else branch, a block header) fails to compile rather than silently
/// under-reporting placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf step: `do "tok" "tok"`
    Step(Step),
    /// Headered loop block: `for "header" { ... }`
    For(ForBlock),
    /// Conditional with optional alternate branch: `if "cond" { } else { }`
    If(IfBlock),
}

/// A line of text tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub tokens: Vec<TextToken>,
}

/// A single text token with mutable content
///
/// The span points at the token's position in the original source; it is
/// retained unchanged when placeholder substitution rewrites the text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextToken {
    pub text: String,
    pub span: Span,
}

impl TextToken {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// Loop block with a header line and nested body
#[derive(Debug, Clone, PartialEq)]
pub struct ForBlock {
    pub header: Step,
    pub body: Vec<Node>,
}

/// Conditional block with a header line, body, and optional else branch
#[derive(Debug, Clone, PartialEq)]
pub struct IfBlock {
    pub header: Step,
    pub body: Vec<Node>,
    pub orelse: Option<Vec<Node>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanned_construction() {
        let s = Spanned::new("name".to_string(), 3..7);
        assert_eq!(s.node, "name");
        assert_eq!(s.span, 3..7);
    }

    #[test]
    fn test_text_token_from_str() {
        let tok = TextToken::new("open the door", 0..13);
        assert_eq!(tok.text, "open the door");
    }
}
