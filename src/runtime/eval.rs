use crate::{
    error::{ErrorKind, PResult},
    syntax::{to_postfix, Token},
};

/// Stack machine over a postfix token sequence.
pub(crate) struct Evaluator {
    stack: Vec<f64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self { stack: vec![] }
    }

    pub fn eval(mut self, tokens: &[Token]) -> PResult<f64> {
        for token in tokens {
            match *token {
                Token::Operand(v) => self.stack.push(v),
                Token::Op(op) => {
                    let (lhs, rhs) = self.pop_pair()?;
                    let value = op.apply(lhs, rhs);
                    log::trace!("{lhs} {} {rhs} = {value}", op.symbol());
                    self.stack.push(value);
                }
            }
        }

        match self.stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(ErrorKind::InvalidResult),
        }
    }

    fn pop_pair(&mut self) -> PResult<(f64, f64)> {
        if self.stack.len() < 2 {
            return Err(ErrorKind::StackUnderflow);
        }
        let rhs = self.stack.pop().ok_or(ErrorKind::StackUnderflow)?;
        let lhs = self.stack.pop().ok_or(ErrorKind::StackUnderflow)?;
        Ok((lhs, rhs))
    }
}

/// Evaluates an infix expression given as separate terms.
pub(crate) fn run<S: AsRef<str>>(terms: &[S]) -> PResult<f64> {
    let tokens = to_postfix(terms.iter().map(|t| t.as_ref()))?;
    log::debug!("postfix: {}", render(&tokens));
    Evaluator::new().eval(&tokens)
}

pub(crate) fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
