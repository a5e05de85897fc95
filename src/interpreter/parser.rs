use std::fmt::{Display, Formatter};
use lazy_static::lazy_static;
use crate::interpreter::ast::Expr;
use crate::interpreter::lexer::{Literal, Token, TokenPos, TokenType};
use crate::util;


lazy_static! {
    static ref ADDITIVE_OPERATORS: [TokenType; 2] = [
        TokenType::Plus, TokenType::Minus,
    ];

    // Multiplicative, relational and equality operators all bind equally tight
    static ref BINARY_TIER_OPERATORS: [TokenType; 8] = [
        TokenType::Star, TokenType::Slash,
        TokenType::Less, TokenType::LessEqual,
        TokenType::Greater, TokenType::GreaterEqual,
        TokenType::Equal, TokenType::NotEqual,
    ];

    static ref UNARY_OPERATORS: [TokenType; 2] = [
        TokenType::Minus, TokenType::Not,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    ExpectedExpression,
    UnmatchedParenthesis,
    UnexpectedToken,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: i32,
    /// Empty when the error was found at the end of input
    pub lexeme: String,
    pub message: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "[line {}] Error at end: {}", self.line, self.message)
        } else {
            write!(f, "[line {}] Error at '{}': {}", self.line, self.lexeme, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single expression.
pub fn parse(tokens: Vec<Token>) -> ParseResult<Expr> {
    Parser::new(tokens).parse()
}

pub struct Parser {
    tokens: std::vec::IntoIter<Token>,
    previous: Token, current: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        Parser {
            tokens: tokens.into_iter(),
            previous: Self::eof_token(TokenPos::begin()), current: Self::eof_token(TokenPos::begin()),
        }
    }

    pub fn parse(mut self) -> ParseResult<Expr> {
        self.consume();

        let expr = self.parse_expression()?;

        if !self.is_eof() {
            return Err(self.error_at_current(ParseErrorKind::UnexpectedToken, "Expect end of expression."));
        }

        Ok(expr)
    }

    // Expression parsing

    fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_binary_tier()?;

        while self.matches_any(&*ADDITIVE_OPERATORS) {
            let operator = self.previous.clone();
            let right = self.parse_binary_tier()?;

            expr = Expr::Binary { left: Box::new(expr), operator, right: Box::new(right) };
        }

        Ok(expr)
    }

    fn parse_binary_tier(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;

        while self.matches_any(&*BINARY_TIER_OPERATORS) {
            let operator = self.previous.clone();
            let right = self.parse_primary()?;

            expr = Expr::Binary { left: Box::new(expr), operator, right: Box::new(right) };
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        if self.matches(TokenType::Number) {
            return Ok(Expr::plain(util::canonical_number(self.previous.source())));
        } else if self.matches(TokenType::String) {
            return Ok(Expr::quoted(Self::string_payload(&self.previous)));
        } else if self.matches(TokenType::True) {
            return Ok(Expr::plain("true"));
        } else if self.matches(TokenType::False) {
            return Ok(Expr::plain("false"));
        } else if self.matches(TokenType::Nil) {
            return Ok(Expr::plain("nil"));
        } else if self.matches(TokenType::ParenthesisLeft) {
            let expr = self.parse_expression()?;
            self.expect(TokenType::ParenthesisRight, ParseErrorKind::UnmatchedParenthesis, "Expect ')' after expression.")?;

            return Ok(Expr::Grouping(Box::new(expr)));
        } else if self.matches_any(&*UNARY_OPERATORS) {
            let operator = self.previous.clone();
            let right = self.parse_primary()?;

            return Ok(Expr::Unary { operator, expr: Box::new(right) });
        }

        let kind = if self.is_eof() { ParseErrorKind::ExpectedExpression } else { ParseErrorKind::UnexpectedToken };
        Err(self.error_at_current(kind, "Expect expression."))
    }

    fn string_payload(token: &Token) -> String {
        match token.literal() {
            Some(Literal::String(value)) => value.clone(),
            _ => token.source().trim_matches('"').to_owned(),
        }
    }

    fn consume(&mut self) {
        let next = match self.tokens.next() {
            Some(token) => token,
            None => Self::eof_token(*self.current.start()),
        };

        self.previous = std::mem::replace(&mut self.current, next);
    }

    fn expect(&mut self, token_type: TokenType, kind: ParseErrorKind, message: &str) -> ParseResult<()> {
        if self.check(token_type) {
            self.consume();
            return Ok(());
        }

        Err(self.error_at_current(kind, message))
    }

    fn matches(&mut self, token_type: TokenType) -> bool { // Should be called "match", but that's a keyword
        if !self.check(token_type) {
            return false;
        }

        self.consume();
        true
    }

    fn matches_any(&mut self, token_types: &[TokenType]) -> bool {
        for token_type in token_types {
            if self.check(*token_type) {
                self.consume();
                return true;
            }
        }

        false
    }

    #[inline]
    fn check(&self, token_type: TokenType) -> bool {
        self.current.token_type() == token_type
    }

    fn is_eof(&self) -> bool {
        self.current.token_type() == TokenType::Eof
    }

    fn eof_token(pos: TokenPos) -> Token {
        Token::new(TokenType::Eof, String::new(), None, pos)
    }

    // Error handling

    fn error_at_current(&self, kind: ParseErrorKind, message: &str) -> ParseError {
        ParseError {
            kind,
            line: self.current.line(),
            lexeme: self.current.source().to_owned(),
            message: message.to_owned(),
        }
    }
}
