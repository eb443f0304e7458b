//! Arithmetic expression evaluation.
//!
//! Input is sanitized against a whitelist of digits, `.`, and the four
//! operators, then tokenized and evaluated with a small precedence-climbing
//! parser (`*` and `/` bind tighter than `+` and `-`, all left-associative).
//! Results are rounded to 12 decimal digits to suppress binary float noise.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Error: Division by zero")]
    DivisionByZero,
    #[error("Error: Invalid expression")]
    InvalidExpression,
}

/// Remove every character outside the whitelist.
pub fn sanitize(expr: &str) -> String {
    expr.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/'))
        .collect()
}

/// Detect a division by a literal zero: a `/` followed by `0` that is not
/// followed by another digit, so `5/0`, `5/0.5`, and a trailing `/0` all
/// match while `5/08` does not.
fn divides_by_literal_zero(expr: &str) -> bool {
    let bytes = expr.as_bytes();
    bytes.windows(2).enumerate().any(|(i, pair)| {
        pair == b"/0" && !bytes.get(i + 2).is_some_and(|b| b.is_ascii_digit())
    })
}

pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let sanitized = sanitize(expr);
    if divides_by_literal_zero(&sanitized) {
        return Err(CalcError::DivisionByZero);
    }
    let tokens = tokenize(&sanitized)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression(0)?;
    if parser.pos != parser.tokens.len() {
        return Err(CalcError::InvalidExpression);
    }
    if !value.is_finite() {
        return Err(CalcError::DivisionByZero);
    }
    Ok(round_result(value))
}

fn round_result(value: f64) -> f64 {
    (value * 1e12).round() / 1e12
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(char),
}

fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if !c.is_ascii_digit() && c != '.' {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }
            let number: f64 = expr[start..end]
                .parse()
                .map_err(|_| CalcError::InvalidExpression)?;
            tokens.push(Token::Number(number));
        } else {
            tokens.push(Token::Op(c));
            chars.next();
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self, min_prec: u8) -> Result<f64, CalcError> {
        let mut lhs = self.primary()?;
        while let Some(Token::Op(op)) = self.peek() {
            let prec = precedence(op);
            if prec < min_prec {
                break;
            }
            self.pos += 1;
            // prec + 1 keeps same-precedence chains left-associative
            let rhs = self.expression(prec + 1)?;
            lhs = apply(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn primary(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            // Unary sign prefixes
            Some(Token::Op('-')) => Ok(-self.primary()?),
            Some(Token::Op('+')) => self.primary(),
            _ => Err(CalcError::InvalidExpression),
        }
    }
}

fn precedence(op: char) -> u8 {
    match op {
        '*' | '/' => 2,
        _ => 1,
    }
}

fn apply(op: char, lhs: f64, rhs: f64) -> f64 {
    match op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        '/' => lhs / rhs,
        _ => f64::NAN,
    }
}
