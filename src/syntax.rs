mod lexer;
mod postfix;
mod token;

pub(crate) use postfix::to_postfix;
pub(crate) use token::Token;
