//! Recursive-descent parser for selector strings.
//!
//! Selectors are single-line and short, so the parser builds the AST
//! directly from the token stream; spans are kept only long enough to point
//! a [`SyntaxError`] at the offending token.

use crate::ast::{Axis, NodeTest, Path, Predicate, Start, Step};
use crate::lexer::{Token, TokenKind, lex, token_text};
use crate::{Result, Selector, SyntaxError};

pub fn parse(input: &str) -> Result<Selector> {
    let tokens = lex(input);
    let mut parser = Parser {
        source: input,
        tokens,
        pos: 0,
    };

    if parser.at_end() {
        return Err(SyntaxError {
            message: "empty selector".to_string(),
            span: 0..input.len(),
        });
    }

    let mut alternatives = vec![parser.path()?];
    while parser.eat(TokenKind::Pipe) {
        alternatives.push(parser.path()?);
    }

    if !parser.at_end() {
        return Err(parser.error("unexpected trailing input"));
    }

    Ok(Selector { alternatives })
}

struct Parser<'s> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'s> Parser<'s> {
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn peek_kind_at(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| t.kind)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.peek_kind() == Some(kind) {
            Ok(self.bump().unwrap())
        } else {
            Err(self.error(&format!("expected {what}")))
        }
    }

    /// Error at the current token, or at end-of-input when exhausted.
    fn error(&self, message: &str) -> SyntaxError {
        let span = match self.peek() {
            Some(token) => token.span.clone(),
            None => self.source.len()..self.source.len(),
        };
        SyntaxError {
            message: message.to_string(),
            span,
        }
    }

    fn path(&mut self) -> Result<Path> {
        match self.peek_kind() {
            Some(TokenKind::SlashSlash) => {
                self.bump();
                self.steps(Start::Absolute, true)
            }
            Some(TokenKind::Slash) => {
                self.bump();
                if self.starts_step() {
                    self.steps(Start::Absolute, false)
                } else {
                    // bare "/": the document node
                    Ok(Path {
                        start: Start::Absolute,
                        steps: Vec::new(),
                    })
                }
            }
            Some(TokenKind::Dot) => {
                self.bump();
                if self.eat(TokenKind::SlashSlash) {
                    self.steps(Start::Relative, true)
                } else if self.eat(TokenKind::Slash) {
                    self.steps(Start::Relative, false)
                } else {
                    // bare ".": the context node itself
                    Ok(Path {
                        start: Start::Relative,
                        steps: Vec::new(),
                    })
                }
            }
            _ => self.steps(Start::Relative, false),
        }
    }

    /// True when the current token can begin a step.
    fn starts_step(&self) -> bool {
        matches!(
            self.peek_kind(),
            Some(TokenKind::Name | TokenKind::Star | TokenKind::At)
        )
    }

    fn steps(&mut self, start: Start, first_descendant: bool) -> Result<Path> {
        let mut steps = vec![self.step(first_descendant)?];

        loop {
            let descendant = if self.eat(TokenKind::SlashSlash) {
                true
            } else if self.eat(TokenKind::Slash) {
                false
            } else {
                break;
            };
            steps.push(self.step(descendant)?);
        }

        Ok(Path { start, steps })
    }

    fn step(&mut self, descendant: bool) -> Result<Step> {
        let axis = self.axis()?;
        let test = self.node_test()?;

        let mut predicates = Vec::new();
        while self.eat(TokenKind::BracketOpen) {
            predicates.push(self.predicate()?);
            self.expect(TokenKind::BracketClose, "`]`")?;
        }

        Ok(Step {
            descendant,
            axis,
            test,
            predicates,
        })
    }

    fn axis(&mut self) -> Result<Axis> {
        if self.peek_kind() == Some(TokenKind::Name)
            && self.peek_kind_at(1) == Some(TokenKind::ColonColon)
        {
            let token = self.bump().unwrap();
            let name = token_text(self.source, &token);
            let axis = match name {
                "following-sibling" => Axis::FollowingSibling,
                "ancestor" => Axis::Ancestor,
                _ => {
                    return Err(SyntaxError {
                        message: format!("unsupported axis `{name}`"),
                        span: token.span,
                    });
                }
            };
            self.bump(); // ::
            Ok(axis)
        } else {
            Ok(Axis::Child)
        }
    }

    fn node_test(&mut self) -> Result<NodeTest> {
        match self.peek_kind() {
            Some(TokenKind::Star) => {
                self.bump();
                Ok(NodeTest::Wildcard)
            }
            Some(TokenKind::At) => {
                self.bump();
                let token = self.expect(TokenKind::Name, "attribute name after `@`")?;
                Ok(NodeTest::Attr(token_text(self.source, &token).to_string()))
            }
            Some(TokenKind::Name) => {
                let token = self.bump().unwrap();
                let name = token_text(self.source, &token);
                if name == "text" && self.peek_kind() == Some(TokenKind::ParenOpen) {
                    self.bump();
                    self.expect(TokenKind::ParenClose, "`)` after `text(`")?;
                    Ok(NodeTest::Text)
                } else {
                    Ok(NodeTest::Name(name.to_string()))
                }
            }
            _ => Err(self.error("expected a step (tag name, `*`, `@attr` or `text()`)")),
        }
    }

    fn predicate(&mut self) -> Result<Predicate> {
        if self.peek_kind() == Some(TokenKind::Int) {
            let token = self.bump().unwrap();
            let text = token_text(self.source, &token);
            let index: usize = text.parse().map_err(|_| SyntaxError {
                message: format!("position `{text}` out of range"),
                span: token.span,
            })?;
            Ok(Predicate::Index(index))
        } else {
            Ok(Predicate::Exists(self.path()?))
        }
    }
}
