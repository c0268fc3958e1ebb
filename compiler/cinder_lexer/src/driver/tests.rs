use super::*;
use crate::alphabet::Bracket;
use crate::token::TokenKind;
use pretty_assertions::assert_eq;

fn kinds(input: &str) -> Vec<TokenKind> {
    Tokens::new(input).map(|s| s.token.kind).collect()
}

#[test]
fn empty_input_has_no_tokens() {
    let out = lex("");
    assert!(out.tokens.is_empty());
    assert!(!out.has_errors());
    assert_eq!(out.end, Cursor::START);
}

#[test]
fn small_program() {
    let src = "func main() {\r\n\tx := 1.5 // half\r\n}\r\n";
    assert_eq!(
        kinds(src),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Delimiter,
            TokenKind::Delimiter,
            TokenKind::Delimiter,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::FloatLiteral,
            TokenKind::Comment,
            TokenKind::Delimiter,
        ]
    );
    let out = lex(src);
    let lines: Vec<u32> = out.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 3]);
    assert_eq!(out.end, Cursor::new(src.len(), 4));
}

#[test]
fn errors_do_not_stop_the_loop() {
    let out = lex("a # b @ c");
    assert_eq!(out.tokens.len(), 5);
    assert_eq!(out.errors.len(), 2);
    assert_eq!(
        out.errors[0],
        LexError::InvalidCharacter {
            ch: '#',
            line: 1,
            position: 2,
        }
    );
    assert_eq!(out.tokens[4].value, "c");
}

#[test]
fn unterminated_bracket_ends_the_stream() {
    let out = lex("(a, b");
    assert_eq!(out.tokens.len(), 1);
    assert_eq!(out.tokens[0].kind, TokenKind::LexicalError);
    assert_eq!(out.tokens[0].value, "(a, b");
    assert_eq!(
        out.errors,
        vec![LexError::UnterminatedBracket {
            bracket: Bracket::Paren,
            line: 1,
            position: 0,
        }]
    );
}

#[test]
fn iterator_records_end_token() {
    let mut tokens = Tokens::new("x  ");
    assert!(tokens.end().is_none());
    assert_eq!(tokens.next().map(|s| s.token.value), Some("x"));
    assert!(tokens.next().is_none());
    let end = tokens.end().unwrap();
    assert!(end.is_end());
    assert_eq!(end.position, 3);
    assert!(tokens.next().is_none());
}

#[test]
fn resume_from_cursor() {
    let src = "one two three";
    let mut first = Tokens::new(src);
    first.next();
    let resumed: Vec<&str> = Tokens::starting_at(src, first.cursor())
        .map(|s| s.token.value)
        .collect();
    assert_eq!(resumed, vec!["two", "three"]);
}

#[test]
fn one_error_per_error_token() {
    let out = lex("\"open ( /* @");
    let error_tokens = out.tokens.iter().filter(|t| t.is_error()).count();
    assert_eq!(error_tokens, out.errors.len());
}
