use crate::error::{ErrorKind, PResult};

use super::{
    lexer::Lexer,
    token::{Operator, Token},
};

/// Shunting-yard conversion from infix term order to postfix token order.
pub(crate) struct Converter<'src, I>
where
    I: Iterator<Item = &'src str>,
{
    lexer: Lexer<'src, I>,
    output: Vec<Token>,
    ops: Vec<Operator>,
}

impl<'src, I> Converter<'src, I>
where
    I: Iterator<Item = &'src str>,
{
    pub fn new(terms: I) -> Self {
        Self {
            lexer: Lexer::new(terms),
            output: vec![],
            ops: vec![],
        }
    }

    pub fn convert(mut self) -> PResult<Vec<Token>> {
        let mut consumed = 0;

        while let Some(token) = self.lexer.next() {
            consumed += 1;
            match token? {
                operand @ Token::Operand(_) => self.output.push(operand),
                Token::Op(op) => self.push_op(op),
            }
        }

        while let Some(op) = self.ops.pop() {
            self.output.push(Token::Op(op));
        }

        if self.output.len() != consumed {
            return Err(ErrorKind::Internal(format!(
                "postfix holds {} tokens for {consumed} terms",
                self.output.len()
            )));
        }

        Ok(self.output)
    }

    fn push_op(&mut self, op: Operator) {
        while let Some(&top) = self.ops.last() {
            if op.precedence() > top.precedence() {
                break;
            }
            self.ops.pop();
            self.output.push(Token::Op(top));
        }
        self.ops.push(op);
    }
}

pub(crate) fn to_postfix<'src, T>(terms: T) -> PResult<Vec<Token>>
where
    T: IntoIterator<Item = &'src str>,
{
    Converter::new(terms.into_iter()).convert()
}
