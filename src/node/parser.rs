//! Converts normalized expression text into a [GenericNode] graph.

use crate::{error::ParseError, settings::Settings};

use super::{generic::{GenericNode, Operator}, lexer::{Lexeme, Lexer, Token}};

/// Parses normalized text using the default [Settings].
pub fn parse(text: &str) -> Result<GenericNode, ParseError> {
    parse_with(text, &Settings::default())
}

/// Parses normalized text into a generic node graph.
///
/// Precedence follows the usual conventions (`^` binds tighter than `*` and `/`, which bind tighter
/// than `+` and `-`). Everything is left-associative except `^`.
pub fn parse_with(text: &str, settings: &Settings) -> Result<GenericNode, ParseError> {
    let lexemes = Lexer::new(text).tokenize()?;
    Parser {
        lexemes: &lexemes[..],
        index: 0,
        depth: 0,
        max_depth: settings.max_depth,
        max_height: settings.max_height,
        implicit_multiplication: settings.implicit_multiplication,
    }.parse()
}

/// A parsed node along with the height of the tree below it, so that the height can be limited
/// without walking the tree again.
struct Parsed {
    node: GenericNode,
    height: usize,
}

/// A recursive-descent parser with one method per precedence level, from `parse_level1` (loosest)
/// to `parse_level5` (tightest).
pub struct Parser<'a> {
    lexemes: &'a [Lexeme],
    index: usize,
    depth: usize,
    max_depth: usize,
    max_height: usize,
    implicit_multiplication: bool,
}

impl<'a> Parser<'a> {
    pub fn parse(&mut self) -> Result<GenericNode, ParseError> {
        if self.lexemes.is_empty() {
            return Err(ParseError::EmptyInput)
        }

        let result = self.parse_level1()?;

        // Leftover tokens is an error
        if let Some(lexeme) = self.current() {
            Err(self.unexpected(lexeme))
        } else {
            Ok(result.node)
        }
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn current(&self) -> Option<&'a Lexeme> {
        self.lexemes.get(self.index)
    }

    fn current_token(&self) -> Option<&'a Token> {
        self.current().map(|l| &l.token)
    }

    fn eoi(&self) -> bool {
        self.index >= self.lexemes.len()
    }

    fn unexpected(&self, lexeme: &Lexeme) -> ParseError {
        ParseError::UnexpectedToken { found: lexeme.token.clone(), position: lexeme.position }
    }

    /// Runs `f` one level deeper into the expression, failing if that goes past the depth limit.
    /// Only real nesting descends; operator chains are parsed in a loop and don't count.
    fn descend<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth })
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Builds a node sitting above `children`, checking that the tree doesn't get too tall.
    fn join(&self, node: impl FnOnce(Vec<GenericNode>) -> GenericNode, children: Vec<Parsed>) -> Result<Parsed, ParseError> {
        let height = children.iter().map(|c| c.height).max().unwrap_or(0) + 1;
        if height > self.max_height {
            return Err(ParseError::TreeTooTall { limit: self.max_height })
        }

        Ok(Parsed {
            node: node(children.into_iter().map(|c| c.node).collect()),
            height,
        })
    }

    fn binary(&self, operator: Operator, left: Parsed, right: Parsed) -> Result<Parsed, ParseError> {
        self.join(|operands| GenericNode::Operator { operator, operands }, vec![left, right])
    }

    /// Addition and subtraction.
    fn parse_level1(&mut self) -> Result<Parsed, ParseError> {
        let mut out = self.parse_level2()?;

        while let Some(op @ (Token::Plus | Token::Minus)) = self.current_token() {
            self.advance();

            let operator = if *op == Token::Plus { Operator::Add } else { Operator::Subtract };
            let right = self.parse_level2()?;
            out = self.binary(operator, out, right)?;
        }

        Ok(out)
    }

    /// Multiplication and division, including implicit multiplication of adjacent terms like
    /// `(1)(2)` if it is enabled.
    fn parse_level2(&mut self) -> Result<Parsed, ParseError> {
        let mut out = self.parse_level3()?;

        while !self.eoi() {
            match self.current_token() {
                Some(op @ (Token::Star | Token::Slash)) => {
                    self.advance();

                    let operator = if *op == Token::Star { Operator::Multiply } else { Operator::Divide };
                    let right = self.parse_level3()?;
                    out = self.binary(operator, out, right)?;
                }

                // A sign can't be implicitly multiplied, since `2 -3` is a subtraction
                Some(Token::LeftParen | Token::Identifier(_)) if self.implicit_multiplication => {
                    let right = self.parse_level4()?;
                    out = self.binary(Operator::Multiply, out, right)?;
                }

                _ => break,
            }
        }

        Ok(out)
    }

    /// Unary signs. These bind more loosely than powers, so `-2^2` is `-(2^2)`.
    fn parse_level3(&mut self) -> Result<Parsed, ParseError> {
        if let Some(op @ (Token::Plus | Token::Minus)) = self.current_token() {
            self.advance();

            let operator = if *op == Token::Plus { Operator::Add } else { Operator::Subtract };
            let operand = self.descend(|p| p.parse_level3())?;
            self.join(|operands| GenericNode::Operator { operator, operands }, vec![operand])
        } else {
            self.parse_level4()
        }
    }

    /// Powers. The exponent is parsed at the unary level, which recurses back here, making powers
    /// right-associative and allowing signed exponents like `2^-1`.
    fn parse_level4(&mut self) -> Result<Parsed, ParseError> {
        let base = self.parse_level5()?;

        if let Some(Token::Caret) = self.current_token() {
            self.advance();

            let exponent = self.descend(|p| p.parse_level3())?;
            self.binary(Operator::Power, base, exponent)
        } else {
            Ok(base)
        }
    }

    /// Single units: numbers, parenthesized expressions, names and function calls.
    fn parse_level5(&mut self) -> Result<Parsed, ParseError> {
        let lexeme = self.current().ok_or(ParseError::UnexpectedEnd)?;

        match &lexeme.token {
            Token::Number(n) => {
                self.advance();
                Ok(Parsed { node: GenericNode::Constant(*n), height: 1 })
            }

            Token::LeftParen => {
                self.advance();

                let inner = self.descend(|p| p.parse_level1())?;
                self.expect_closing(lexeme)?;
                self.join(|mut inner| GenericNode::Grouping(Box::new(inner.remove(0))), vec![inner])
            }

            Token::Identifier(name) => {
                self.advance();

                match self.current() {
                    Some(open) if open.token == Token::LeftParen => {
                        self.advance();
                        let arguments = self.descend(|p| p.parse_arguments(open))?;
                        let name = name.clone();
                        self.join(|arguments| GenericNode::FunctionCall { name, arguments }, arguments)
                    }
                    _ => Ok(Parsed { node: GenericNode::Symbol(name.clone()), height: 1 }),
                }
            }

            _ => Err(self.unexpected(lexeme)),
        }
    }

    /// Parses the comma-separated arguments of a function call, up to and including the closing
    /// parenthesis. The opening parenthesis must already have been consumed.
    fn parse_arguments(&mut self, open: &Lexeme) -> Result<Vec<Parsed>, ParseError> {
        let mut arguments = vec![];
        if let Some(Token::RightParen) = self.current_token() {
            self.advance();
            return Ok(arguments)
        }

        loop {
            arguments.push(self.parse_level1()?);

            if let Some(Token::Comma) = self.current_token() {
                self.advance();
            } else {
                self.expect_closing(open)?;
                return Ok(arguments)
            }
        }
    }

    /// Consumes a closing parenthesis matching `open`, or explains why there isn't one.
    fn expect_closing(&mut self, open: &Lexeme) -> Result<(), ParseError> {
        match self.current() {
            Some(Lexeme { token: Token::RightParen, .. }) => {
                self.advance();
                Ok(())
            }
            Some(other) => Err(self.unexpected(other)),
            None => Err(ParseError::UnclosedParenthesis { position: open.position }),
        }
    }
}
