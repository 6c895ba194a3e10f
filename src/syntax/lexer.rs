use crate::error::{ErrorKind, PResult};

use super::token::{Operator, Token};

/// Classifies a single input term.
pub(crate) fn classify(term: &str) -> PResult<Token> {
    if let Some(op) = Operator::from_symbol(term) {
        return Ok(Token::Op(op));
    }

    term.parse::<f64>()
        .map(Token::Operand)
        .map_err(|reason| ErrorKind::MalformedOperand {
            term: term.to_string(),
            reason,
        })
}

/// Turns a sequence of terms into tokens, one term at a time.
pub(crate) struct Lexer<'src, I>
where
    I: Iterator<Item = &'src str>,
{
    terms: I,
}

impl<'src, I> Iterator for Lexer<'src, I>
where
    I: Iterator<Item = &'src str>,
{
    type Item = PResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.terms.next().map(classify)
    }
}

impl<'src, I> Lexer<'src, I>
where
    I: Iterator<Item = &'src str>,
{
    pub fn new(terms: I) -> Self {
        Self { terms }
    }
}
