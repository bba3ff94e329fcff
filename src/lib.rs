#![no_std]
#![forbid(unsafe_code)]
#![doc = "Picore: a tiny, bounded, allocation-free backtracking regex engine for byte strings."]

mod compile;
mod matcher;
mod node;

pub use compile::{CompileError, Regex, compile};
pub use node::{MAX_CLASS_BYTES, MAX_NODES, MAX_QUANT, MAX_REPEAT, Node};

pub mod prelude {
    pub use crate::compile::{CompileError, Regex, compile};
    pub use crate::node::{MAX_CLASS_BYTES, MAX_NODES, MAX_QUANT, MAX_REPEAT, Node};
}
