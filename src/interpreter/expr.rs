//! Hand-written lexer + recursive-descent evaluator for the arithmetic on
//! assignment right-hand sides and condition operands.
//
//  Grammar (informal):
//
//      expr   ::= term (('+' | '-') term)*
//      term   ::= factor (('*' | '/') factor)*
//      factor ::= NUMBER | VARIABLE | '(' expr ')'
//
//  Lexical items:
//
//      Number   ::= [0-9]+ ('.' [0-9]+)?
//      Variable ::= 'R' [0-9]+
//
//  Variables resolve by direct store lookup during evaluation; there is no
//  substitute-into-text-and-reparse step, so nothing is rounded on the way
//  through an expression. Unary minus, exponentiation and function calls
//  are not part of the language.

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use super::error::ErrorKind;

/// The single global variable scope of one run.
pub type Variables = HashMap<String, f64>;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Var(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
        }
    }

    fn consume_while<F: Fn(char) -> bool>(&mut self, pred: F, buf: &mut String) {
        while let Some(&c) = self.chars.peek() {
            if pred(c) {
                buf.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self, first: char) -> Result<f64, ErrorKind> {
        let mut num = String::new();
        num.push(first);
        self.consume_while(|c| c.is_ascii_digit(), &mut num);
        if self.chars.peek() == Some(&'.') {
            num.push('.');
            self.chars.next();
            let before = num.len();
            self.consume_while(|c| c.is_ascii_digit(), &mut num);
            if num.len() == before {
                return Err(ErrorKind::ExpressionSyntax(format!("bad number `{num}`")));
            }
        }
        num.parse()
            .map_err(|_| ErrorKind::ExpressionSyntax(format!("bad number `{num}`")))
    }

    fn read_variable(&mut self) -> Result<String, ErrorKind> {
        let mut name = String::from("R");
        self.consume_while(|c| c.is_ascii_digit(), &mut name);
        if name.len() == 1 {
            return Err(ErrorKind::ExpressionSyntax("`R` without digits".into()));
        }
        Ok(name)
    }

    fn tokenize(mut self) -> Result<Vec<Token>, ErrorKind> {
        let mut tokens = Vec::new();
        while let Some(c) = self.chars.next() {
            let tok = match c {
                ' ' | '\t' => continue,
                '+' => Token::Plus,
                '-' => Token::Minus,
                '*' => Token::Star,
                '/' => Token::Slash,
                '(' => Token::LParen,
                ')' => Token::RParen,
                'R' => Token::Var(self.read_variable()?),
                d if d.is_ascii_digit() => Token::Number(self.read_number(d)?),
                other => {
                    return Err(ErrorKind::ExpressionSyntax(format!(
                        "unexpected character `{other}`"
                    )));
                }
            };
            tokens.push(tok);
        }
        Ok(tokens)
    }
}

struct Parser<'a> {
    tokens: Peekable<std::vec::IntoIter<Token>>,
    vars: &'a Variables,
}

impl<'a> Parser<'a> {
    fn expr(&mut self) -> Result<f64, ErrorKind> {
        let mut acc = self.term()?;
        while let Some(op) = self
            .tokens
            .next_if(|t| matches!(t, Token::Plus | Token::Minus))
        {
            let rhs = self.term()?;
            match op {
                Token::Plus => acc += rhs,
                _ => acc -= rhs,
            }
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, ErrorKind> {
        let mut acc = self.factor()?;
        while let Some(op) = self
            .tokens
            .next_if(|t| matches!(t, Token::Star | Token::Slash))
        {
            let rhs = self.factor()?;
            match op {
                Token::Star => acc *= rhs,
                // division by zero keeps f64 semantics (inf / NaN)
                _ => acc /= rhs,
            }
        }
        Ok(acc)
    }

    fn factor(&mut self) -> Result<f64, ErrorKind> {
        match self.tokens.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::Var(name)) => self
                .vars
                .get(&name)
                .copied()
                .ok_or(ErrorKind::UndefinedVariable(name)),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.tokens.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(ErrorKind::ExpressionSyntax("missing `)`".into())),
                }
            }
            Some(other) => Err(ErrorKind::ExpressionSyntax(format!(
                "unexpected token {other:?}"
            ))),
            None => Err(ErrorKind::ExpressionSyntax("expression ended early".into())),
        }
    }
}

/// Evaluate `src` over the current variable store.
pub fn eval(src: &str, vars: &Variables) -> Result<f64, ErrorKind> {
    let tokens = Lexer::new(src).tokenize()?;
    if tokens.is_empty() {
        return Err(ErrorKind::ExpressionSyntax("empty expression".into()));
    }
    let mut p = Parser {
        tokens: tokens.into_iter().peekable(),
        vars,
    };
    let value = p.expr()?;
    if let Some(extra) = p.tokens.next() {
        return Err(ErrorKind::ExpressionSyntax(format!(
            "trailing token {extra:?}"
        )));
    }
    Ok(value)
}
