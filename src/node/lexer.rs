//! Splits normalized expression text into [Token]s.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::error::ParseError;

/// The largest decimal exponent worth trying; anything beyond this can't fit in a [Decimal].
const MAX_EXPONENT: u32 = 64;

/// A single meaningful piece of expression text.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    /// A numeric literal, such as `12`, `0.5` or `1e3`.
    Number(Decimal),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LeftParen,
    RightParen,
    Comma,

    /// A name, such as `x` or `sin`.
    Identifier(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Caret => write!(f, "'^'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
            Token::Identifier(name) => write!(f, "name '{}'", name),
        }
    }
}

/// A token, along with the character position where it started.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

/// Converts a string into a list of tokens, skipping whitespace.
pub struct Lexer {
    chars: Vec<char>,
    index: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), index: 0 }
    }

    /// Consumes the lexer, returning every token in the text.
    pub fn tokenize(mut self) -> Result<Vec<Lexeme>, ParseError> {
        let mut lexemes = vec![];

        while let Some(c) = self.current() {
            if c.is_whitespace() {
                self.advance();
                continue;
            }

            let position = self.index;
            let token = match c {
                '+' => self.single(Token::Plus),
                '-' => self.single(Token::Minus),
                '*' => self.single(Token::Star),
                '/' => self.single(Token::Slash),
                '^' => self.single(Token::Caret),
                '(' => self.single(Token::LeftParen),
                ')' => self.single(Token::RightParen),
                ',' => self.single(Token::Comma),

                _ if c.is_ascii_digit() => self.number()?,
                '.' if self.peek(1).map_or(false, |c| c.is_ascii_digit()) => self.number()?,

                _ if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

                _ => return Err(ParseError::UnexpectedCharacter { character: c, position }),
            };

            lexemes.push(Lexeme { token, position });
        }

        Ok(lexemes)
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Collects characters for as long as they satisfy `predicate`.
    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(c) = self.current() {
            if !predicate(c) { break }
            result.push(c);
            self.advance();
        }
        result
    }

    fn identifier(&mut self) -> Token {
        Token::Identifier(self.take_while(|c| c.is_ascii_alphanumeric() || c == '_'))
    }

    /// Lexes a number made of a whole part, an optional decimal part, and an optional exponent.
    /// Either the whole or decimal part may be empty, but not both - `3.` and `.5` are accepted.
    fn number(&mut self) -> Result<Token, ParseError> {
        let start = self.index;
        let whole = self.take_while(|c| c.is_ascii_digit());

        let mut fraction = String::new();
        if self.current() == Some('.') {
            self.advance();
            fraction = self.take_while(|c| c.is_ascii_digit());
        }

        // Only treat an `e` as an exponent if digits follow it, otherwise `2e` would be an error
        // rather than a number next to a name
        let mut exponent = None;
        if matches!(self.current(), Some('e' | 'E')) {
            let sign_length = if matches!(self.peek(1), Some('+' | '-')) { 1 } else { 0 };
            if self.peek(1 + sign_length).map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
                let negative = self.current() == Some('-');
                if sign_length == 1 { self.advance(); }
                exponent = Some((negative, self.take_while(|c| c.is_ascii_digit())));
            }
        }

        let text: String = self.chars[start..self.index].iter().collect();
        let out_of_range = || ParseError::NumberOutOfRange { text: text.clone() };

        let mantissa = if fraction.is_empty() {
            whole
        } else {
            format!("{}.{}", if whole.is_empty() { "0" } else { whole.as_str() }, fraction)
        };
        let mut number = Decimal::from_str(&mantissa).map_err(|_| out_of_range())?;

        if let Some((negative, digits)) = exponent {
            let power = digits.parse::<u32>().ok()
                .filter(|p| *p <= MAX_EXPONENT)
                .ok_or_else(out_of_range)?;

            if negative {
                // Shifting the point left is exactly a change of scale
                number.set_scale(number.scale() + power).map_err(|_| out_of_range())?;
            } else {
                for _ in 0..power {
                    number = number.checked_mul(Decimal::from(10u8)).ok_or_else(out_of_range)?;
                }
            }
        }

        Ok(Token::Number(number))
    }
}
