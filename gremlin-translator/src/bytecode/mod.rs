//! The structured form of a traversal as produced by a traversal builder.
//!
//! Everything in here is plain data: the translator only ever reads it.

pub mod predicate;
pub mod tokens;
pub mod value;

pub use predicate::Predicate;

use serde::{Deserialize, Serialize};
use value::Value;

/// One named operation with its ordered arguments, e.g. `hasLabel('airport')`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub operator: String,
    #[serde(default)]
    pub arguments: Vec<Value>,
}

impl Instruction {
    pub fn new(operator: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            operator: operator.into(),
            arguments,
        }
    }
}

/// Ordered source (`withSack`, `withSideEffect`, ...) and step instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bytecode {
    #[serde(default)]
    source_instructions: Vec<Instruction>,
    #[serde(default)]
    step_instructions: Vec<Instruction>,
}

impl Bytecode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(&mut self, operator: impl Into<String>, arguments: Vec<Value>) {
        self.source_instructions
            .push(Instruction::new(operator, arguments));
    }

    pub fn add_step(&mut self, operator: impl Into<String>, arguments: Vec<Value>) {
        self.step_instructions
            .push(Instruction::new(operator, arguments));
    }

    /// Chaining form of [`Bytecode::add_source`].
    pub fn source(mut self, operator: impl Into<String>, arguments: Vec<Value>) -> Self {
        self.add_source(operator, arguments);
        self
    }

    /// Chaining form of [`Bytecode::add_step`].
    pub fn step(mut self, operator: impl Into<String>, arguments: Vec<Value>) -> Self {
        self.add_step(operator, arguments);
        self
    }

    pub fn source_instructions(&self) -> &[Instruction] {
        &self.source_instructions
    }

    pub fn step_instructions(&self) -> &[Instruction] {
        &self.step_instructions
    }

    pub fn is_empty(&self) -> bool {
        self.source_instructions.is_empty() && self.step_instructions.is_empty()
    }
}

/// A named placeholder for a literal. Only the key is ever rendered so the
/// server can cache the script and receive the value as a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    pub key: String,
    pub value: Box<Value>,
}

impl Binding {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: Box::new(value.into()),
        }
    }
}

/// A traversal passed as an argument to a step, e.g. the `out().simplePath()`
/// in `repeat(out().simplePath())`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Traversal {
    pub bytecode: Bytecode,
    /// `true` for `__`-spawned traversals that are not bound to a source.
    #[serde(default)]
    pub anonymous: bool,
}

impl Traversal {
    pub fn anonymous(bytecode: Bytecode) -> Self {
        Self {
            bytecode,
            anonymous: true,
        }
    }

    /// A traversal spawned from a traversal source.
    pub fn spawned(bytecode: Bytecode) -> Self {
        Self {
            bytecode,
            anonymous: false,
        }
    }
}
