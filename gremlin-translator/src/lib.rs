//! Turns traversal bytecode back into Gremlin query text.
//!
//! A [`Bytecode`] value is produced by a traversal builder and handed to a
//! [`Translator`], which walks it once and returns the equivalent
//! `g.V().hasLabel('airport').limit(5)` style string.

pub mod bytecode;
pub mod error;
pub mod translator;

pub use bytecode::{
    Binding, Bytecode, Instruction, Predicate, Traversal,
    tokens::{
        Barrier, Cardinality, Column, Direction, Merge, Operator, Order, Pick, Pop, Scope, T,
        Token,
    },
    value::Value,
};
pub use error::{TranslationError, TranslationResult};
pub use translator::{
    DEFAULT_MAX_DEPTH, DEFAULT_SOURCE_NAME, StringQuoting, Translator, TranslatorConfig,
};
