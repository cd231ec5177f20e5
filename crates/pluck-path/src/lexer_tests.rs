use crate::lexer::{TokenKind, lex, token_text};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn slashes_prefer_longest_match() {
    assert_eq!(
        kinds("//a/b"),
        [
            TokenKind::SlashSlash,
            TokenKind::Name,
            TokenKind::Slash,
            TokenKind::Name,
        ]
    );
}

#[test]
fn attribute_and_predicate_tokens() {
    assert_eq!(
        kinds("tr[2]/@data-id"),
        [
            TokenKind::Name,
            TokenKind::BracketOpen,
            TokenKind::Int,
            TokenKind::BracketClose,
            TokenKind::Slash,
            TokenKind::At,
            TokenKind::Name,
        ]
    );
}

#[test]
fn axis_tokens() {
    assert_eq!(
        kinds("following-sibling::dd"),
        [TokenKind::Name, TokenKind::ColonColon, TokenKind::Name]
    );
}

#[test]
fn names_allow_dashes_and_digits() {
    let tokens = lex("data-col-2");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(token_text("data-col-2", &tokens[0]), "data-col-2");
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(
        kinds("a | b"),
        [TokenKind::Name, TokenKind::Pipe, TokenKind::Name]
    );
}

#[test]
fn garbage_runs_coalesce() {
    let tokens = lex("a$$$b");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        [TokenKind::Name, TokenKind::Garbage, TokenKind::Name]
    );
    assert_eq!(tokens[1].span, 1..4);
}
