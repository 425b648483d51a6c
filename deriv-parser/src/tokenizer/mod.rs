pub mod token;

use crate::parser::error::{kind, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Fails with [`kind::UnrecognizedCharacter`] if the input contains a character that is not part
/// of any token.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(next) = lexer.next() {
        match next {
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => return Err(Error::new(vec![lexer.span()], kind::UnrecognizedCharacter)),
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "3.5      x - (2 ^ y) / 0.",
            [
                (TokenKind::Float, "3.5"),
                (TokenKind::Whitespace, "      "),
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::OpenParen, "("),
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Pow, "^"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "y"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Div, "/"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "0."),
            ],
        );
    }

    #[test]
    fn function_words() {
        compare_tokens(
            "sin cos ln exp",
            [
                (TokenKind::Sin, "sin"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Cos, "cos"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Ln, "ln"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Exp, "exp"),
            ],
        );
    }

    #[test]
    fn maximal_munch() {
        // a word that merely starts with a function name is a plain name
        compare_tokens(
            "sinister cost lnx",
            [
                (TokenKind::Name, "sinister"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "cost"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "lnx"),
            ],
        );
    }

    #[test]
    fn unrecognized_character() {
        let err = tokenize_complete("1 + $").unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
        assert!(err.kind.as_any().downcast_ref::<kind::UnrecognizedCharacter>().is_some());
    }

    #[test]
    fn complete_skips_nothing() {
        let tokens = tokenize_complete("x^2").unwrap();
        assert_eq!(
            tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
            vec![TokenKind::Name, TokenKind::Pow, TokenKind::Int],
        );
    }
}
