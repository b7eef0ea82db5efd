//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse case-definition source into an AST
pub fn parse(input: &str) -> Result<Document, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    document_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn document_parser<'a, I>() -> impl Parser<'a, I, Document, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // Basic token parsers
    let identifier = select! {
        Token::Ident(s) => s,
    }
    .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    let string_literal = select! {
        Token::String(s) => s,
    }
    .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    let value_list = select! {
        Token::ValueList(s) => s,
    }
    .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    // One or more quoted text tokens form a step or a block header
    let token_line = string_literal
        .clone()
        .map(|s| TextToken::new(s.node, s.span))
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .map(|tokens| Step { tokens });

    // Recursive body node parser
    let node = recursive(|node| {
        let block = node
            .clone()
            .repeated()
            .collect::<Vec<_>>()
            .delimited_by(just(Token::BraceOpen), just(Token::BraceClose));

        // Leaf step: `do "tok" "tok"`
        let step = just(Token::Do)
            .ignore_then(token_line.clone())
            .map(Node::Step);

        // Loop block: `for "header" { ... }`
        let for_block = just(Token::For)
            .ignore_then(token_line.clone())
            .then(block.clone())
            .map(|(header, body)| Node::For(ForBlock { header, body }));

        // Conditional: `if "cond" { ... } else { ... }`
        let if_block = just(Token::If)
            .ignore_then(token_line.clone())
            .then(block.clone())
            .then(just(Token::Else).ignore_then(block).or_not())
            .map(|((header, body), orelse)| Node::If(IfBlock { header, body, orelse }));

        choice((step, for_block, if_block)).boxed()
    });

    // Factor declaration: `NAME: ["v1", "v2"]`
    let factor_decl = identifier
        .then_ignore(just(Token::Colon))
        .then(value_list)
        .map(|(name, raw_values)| FactorDecl { name, raw_values });

    let factors_section = just(Token::Factors)
        .ignore_then(
            factor_decl
                .repeated()
                .collect::<Vec<_>>()
                .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
        )
        .map(|entries| Section::Factors(FactorSection { entries }));

    // Template case: `case "name" { ... }`
    let case_decl = just(Token::Case)
        .ignore_then(string_literal)
        .then(
            node.repeated()
                .collect::<Vec<_>>()
                .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
        )
        .map(|(name, body)| TestCase { name, body });

    let cases_section = just(Token::Cases)
        .ignore_then(
            case_decl
                .repeated()
                .collect::<Vec<_>>()
                .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
        )
        .map(|cases| Section::Cases(CaseSection { cases }));

    // Document is a list of sections
    choice((factors_section, cases_section))
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
        .map(|sections| Document { sections })
}
