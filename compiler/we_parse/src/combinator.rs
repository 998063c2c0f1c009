//! Composable predicates.
//!
//! A predicate is any `Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step`:
//! it reads from the source at a position, may write into the node under
//! construction, and returns the position after what it matched.
//!
//! Positions are byte offsets. Whitespace is skipped inside
//! [`Parser::lex`] before each token, never within one.
//!
//! Rollback rules:
//! - [`sequence`] does not roll back. Contributions from predicates that
//!   matched before the failing one stay on the node.
//! - [`first_match`], [`optional`], [`many`] and [`separated`] restore the
//!   node to its state before a failed attempt.
//! - Fatal failures are never caught.

use we_ir::{Node, Span, TokenKind, TokenSet};
use we_lexer_core::skip_whitespace;

use crate::stack::with_stack;
use crate::{Failure, NoMatch, NodeBuilder, ParseError, Parser, Step};

/// Anything that can run as a step of a production.
pub trait Predicate {
    fn apply(&self, node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step;
}

impl<F> Predicate for F
where
    F: Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step,
{
    #[inline]
    fn apply(&self, node: &mut NodeBuilder, parser: &mut Parser<'_>, start: usize) -> Step {
        self(node, parser, start)
    }
}

/// Pin a closure to the predicate signature.
///
/// Closures stored in a local before being passed anywhere don't get a
/// higher-ranked signature inferred; routing them through here does.
#[inline]
pub fn predicate<F>(f: F) -> F
where
    F: Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step,
{
    f
}

/// Match a token of `kind`. The node is not touched.
pub fn exists(kind: TokenKind) -> impl Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step {
    move |_node, parser, start| parser.lex(kind, start).map(|lexeme| lexeme.span.end)
}

/// Match a token of `kind` and hand its text to `handler`.
pub fn one<H>(kind: TokenKind, handler: H) -> impl Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step
where
    H: Fn(&mut NodeBuilder, &str),
{
    move |node, parser, start| {
        let lexeme = parser.lex(kind, start)?;
        handler(node, lexeme.text);
        Ok(lexeme.span.end)
    }
}

/// Like [`one`], for handlers that can reject the token.
///
/// The handler also receives the token's span; an error from it is fatal.
pub fn try_one<H>(
    kind: TokenKind,
    handler: H,
) -> impl Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step
where
    H: Fn(&mut NodeBuilder, &str, Span) -> Result<(), ParseError>,
{
    move |node, parser, start| {
        let lexeme = parser.lex(kind, start)?;
        handler(node, lexeme.text, lexeme.span)?;
        Ok(lexeme.span.end)
    }
}

/// Run `predicates` in order, threading the position.
///
/// The first failure aborts the sequence and is reported as starting at
/// `start`. Nothing is rolled back.
pub fn sequence(
    node: &mut NodeBuilder,
    parser: &mut Parser<'_>,
    start: usize,
    predicates: &[&dyn Predicate],
) -> Step {
    let mut pos = start;
    for predicate in predicates {
        pos = predicate
            .apply(node, parser, pos)
            .map_err(|failure| failure.rebase(start))?;
    }
    Ok(pos)
}

/// Try `alternatives` at `start` in order; the first to match wins.
///
/// A failed alternative's contributions are rolled back. When all fail, the
/// failure reports the furthest offset any of them reached and what was
/// expected there.
pub fn first_match(
    node: &mut NodeBuilder,
    parser: &mut Parser<'_>,
    start: usize,
    alternatives: &[&dyn Predicate],
) -> Step {
    let mut furthest = NoMatch {
        start,
        offset: start,
        expected: TokenSet::new(),
    };
    for alternative in alternatives {
        let checkpoint = node.checkpoint();
        match alternative.apply(node, parser, start) {
            Ok(end) => return Ok(end),
            Err(Failure::NoMatch(miss)) => {
                node.restore(checkpoint);
                furthest = furthest.merge(miss);
            }
            Err(fatal) => return Err(fatal),
        }
    }
    Err(Failure::NoMatch(furthest))
}

/// Zero or one match of `inner`.
pub fn optional<P>(inner: P) -> impl Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step
where
    P: Predicate,
{
    move |node, parser, start| {
        let checkpoint = node.checkpoint();
        match inner.apply(node, parser, start) {
            Err(Failure::NoMatch(_)) => {
                node.restore(checkpoint);
                Ok(start)
            }
            step => step,
        }
    }
}

/// Zero or more matches of `inner`. Stops on the first miss or on a match
/// that consumed nothing; the stopping attempt is rolled back.
pub fn many<P>(inner: P) -> impl Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step
where
    P: Predicate,
{
    move |node, parser, start| {
        let mut pos = start;
        loop {
            let checkpoint = node.checkpoint();
            match inner.apply(node, parser, pos) {
                Ok(next) if next > pos => pos = next,
                Ok(_) | Err(Failure::NoMatch(_)) => {
                    node.restore(checkpoint);
                    return Ok(pos);
                }
                Err(fatal) => return Err(fatal),
            }
        }
    }
}

/// `item (separator item)* separator?`, or nothing at all.
pub fn separated<P>(
    item: P,
    separator: TokenKind,
) -> impl Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step
where
    P: Predicate,
{
    move |node, parser, start| {
        let checkpoint = node.checkpoint();
        let mut pos = match item.apply(node, parser, start) {
            Ok(end) => end,
            Err(Failure::NoMatch(_)) => {
                node.restore(checkpoint);
                return Ok(start);
            }
            Err(fatal) => return Err(fatal),
        };

        loop {
            let after_separator = match parser.lex(separator, pos) {
                Ok(lexeme) => lexeme.span.end,
                Err(Failure::NoMatch(_)) => return Ok(pos),
                Err(fatal) => return Err(fatal),
            };
            let checkpoint = node.checkpoint();
            match item.apply(node, parser, after_separator) {
                Ok(end) => pos = end,
                Err(Failure::NoMatch(_)) => {
                    // Trailing separator.
                    node.restore(checkpoint);
                    return Ok(after_separator);
                }
                Err(fatal) => return Err(fatal),
            }
        }
    }
}

/// Run `production` on a fresh builder and return the finished node with
/// the position after it.
///
/// Counts one level of nesting. The node's span starts at the first
/// non-whitespace byte.
pub fn build<P>(parser: &mut Parser<'_>, start: usize, production: &P) -> Result<(Node, usize), Failure>
where
    P: Predicate + ?Sized,
{
    parser.enter(start)?;
    let mut builder = NodeBuilder::new();
    let result = with_stack(|| production.apply(&mut builder, parser, start));
    parser.exit();

    let end = result?;
    let span_start = skip_whitespace(parser.source(), start).min(end);
    Ok((builder.finish(Span::new(span_start, end)), end))
}

/// Build a child node with `production` and hand it to `attach`.
///
/// An error from `attach` is fatal.
pub fn child<P, A>(production: P, attach: A) -> impl Fn(&mut NodeBuilder, &mut Parser<'_>, usize) -> Step
where
    P: Predicate,
    A: Fn(&mut NodeBuilder, Node) -> Result<(), ParseError>,
{
    move |node, parser, start| {
        let (built, end) = build(parser, start, &production)?;
        attach(node, built)?;
        Ok(end)
    }
}

/// Attach a child as the next element of `children`.
#[allow(clippy::unnecessary_wraps, reason = "matches the `child` attach signature")]
pub fn push_child(node: &mut NodeBuilder, child: Node) -> Result<(), ParseError> {
    node.children.push(child);
    Ok(())
}
