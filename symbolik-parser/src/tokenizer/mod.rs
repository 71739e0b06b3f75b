pub mod token;

use crate::error::{Error, IntegerOutOfRange, InvalidToken};
use crate::op::BinOpKind;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind, TokenValue};

/// Returns an iterator over the raw token kinds produced by the lexer, including whitespace.
pub fn lex(input: &str) -> Lexer<'_, TokenKind> {
    TokenKind::lexer(input)
}

/// Splits the input into tokens, resolving each `+` and `-` as a unary or binary operator.
///
/// Tokenization fails at the first position where no lexical class matches, such as an
/// unsupported symbol or a trailing `.` with no digits after it.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = lex(input);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let value = match kind {
            Ok(TokenKind::Whitespace) => continue,
            Ok(TokenKind::Symbol) | Err(_) => {
                return Err(Error::new(
                    vec![span.clone()],
                    InvalidToken { remaining: input[span.start..].to_string() },
                ));
            },
            Ok(TokenKind::Int) => {
                let literal = lexer.slice();
                let value = literal.parse::<i64>()
                    .map_err(|_| Error::new(
                        vec![span.clone()],
                        IntegerOutOfRange { literal: literal.to_string() },
                    ))?;
                TokenValue::Int(value)
            },
            Ok(TokenKind::Float) => {
                let value = lexer.slice().parse::<f64>()
                    .map_err(|_| Error::new(
                        vec![span.clone()],
                        InvalidToken { remaining: input[span.start..].to_string() },
                    ))?;
                TokenValue::Float(value)
            },
            Ok(TokenKind::Name) => TokenValue::Name(lexer.slice().to_string()),
            Ok(TokenKind::OpenParen) => TokenValue::OpenParen,
            Ok(TokenKind::CloseParen) => TokenValue::CloseParen,
            Ok(TokenKind::Add) => resolve_sign(tokens.last(), BinOpKind::Add),
            Ok(TokenKind::Sub) => resolve_sign(tokens.last(), BinOpKind::Sub),
            Ok(TokenKind::Mul) => TokenValue::BinOp(BinOpKind::Mul),
            Ok(TokenKind::Div) => TokenValue::BinOp(BinOpKind::Div),
        };

        tokens.push(Token::new(span, value));
    }

    Ok(tokens)
}

/// Decides whether an operator is unary or binary, based on the token before it.
///
/// `+` and `-` are unary when they start the input or follow anything that does not end an
/// operand, such as another operator or an opening parenthesis.
fn resolve_sign(previous: Option<&Token>, op: BinOpKind) -> TokenValue {
    let follows_operand = previous.map_or(false, |token| token.value.ends_operand());
    match op.to_unary() {
        Some(unary) if !follows_operand => TokenValue::UnaryOp(unary),
        _ => TokenValue::BinOp(op),
    }
}
