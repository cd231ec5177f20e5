//! Lexer for selector strings.
//!
//! Produces span-based tokens; text is sliced from the source only when a
//! token's payload is needed. Consecutive unrecognized characters coalesce
//! into single `Garbage` tokens so malformed input yields one diagnostic,
//! not one per character.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("//")]
    SlashSlash,
    #[token("/")]
    Slash,
    #[token("::")]
    ColonColon,
    #[token("@")]
    At,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,
    #[token("|")]
    Pipe,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[regex("[0-9]+")]
    Int,
    /// Tag, attribute and axis names; covers `aria-label` and `data-*`.
    #[regex("[A-Za-z_][A-Za-z0-9_-]*")]
    Name,
    /// Coalesced run of characters the grammar has no use for.
    Garbage,
}

/// Token: kind + byte span into the selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut garbage_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = garbage_start.take() {
                    tokens.push(Token {
                        kind: TokenKind::Garbage,
                        span: start..lexer.span().start,
                    });
                }
                tokens.push(Token {
                    kind,
                    span: lexer.span(),
                });
            }
            Some(Err(())) => {
                if garbage_start.is_none() {
                    garbage_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = garbage_start.take() {
                    tokens.push(Token {
                        kind: TokenKind::Garbage,
                        span: start..source.len(),
                    });
                }
                break;
            }
        }
    }

    tokens
}

/// Text slice for a token. O(1) slice into the source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.clone()]
}
