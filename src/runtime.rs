pub(crate) mod eval;

pub(crate) use eval::{render, run};
