use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_quantity() {
    assert_eq!(
        kinds("1.5 km"),
        vec![
            TokenKind::Number(1.5),
            TokenKind::Ident("km".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_lex_keywords_and_identifiers() {
    assert_eq!(
        kinds("unit units var variable"),
        vec![
            TokenKind::Unit,
            TokenKind::Ident("units".to_string()),
            TokenKind::Var,
            TokenKind::Ident("variable".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_lex_compound_punctuation() {
    assert_eq!(
        kinds("x := y == z != w <= v >= u && t || s"),
        vec![
            TokenKind::Ident("x".to_string()),
            TokenKind::ColonEq,
            TokenKind::Ident("y".to_string()),
            TokenKind::EqEq,
            TokenKind::Ident("z".to_string()),
            TokenKind::NotEq,
            TokenKind::Ident("w".to_string()),
            TokenKind::LtEq,
            TokenKind::Ident("v".to_string()),
            TokenKind::GtEq,
            TokenKind::Ident("u".to_string()),
            TokenKind::AmpAmp,
            TokenKind::Ident("t".to_string()),
            TokenKind::PipePipe,
            TokenKind::Ident("s".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_lex_exponent_forms() {
    assert_eq!(
        kinds("2e3 m^-1"),
        vec![
            TokenKind::Number(2000.0),
            TokenKind::Ident("m".to_string()),
            TokenKind::Caret,
            TokenKind::Minus,
            TokenKind::Number(1.0),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_lex_skips_comments() {
    assert_eq!(
        kinds("1 // one\n2"),
        vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]
    );
}

#[test]
fn test_lex_error_token_and_spans() {
    let tokens = lex("a # b");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].span, 2..3);
    assert_eq!(tokens[3].span, 5..5);
}

#[test]
fn test_describe() {
    assert_eq!(TokenKind::ColonEq.describe(), "`:=`");
    assert_eq!(TokenKind::Eof.describe(), "end of input");
}

#[test]
fn test_every_number_match_is_a_number() {
    assert_eq!(
        kinds("1e999 0.000 007"),
        vec![
            TokenKind::Number(f64::INFINITY),
            TokenKind::Number(0.0),
            TokenKind::Number(7.0),
            TokenKind::Eof
        ]
    );
}
