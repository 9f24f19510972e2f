//! Bytecode to Gremlin text.
//!
//! Rendering is mutually recursive: a chain renders its instructions, an
//! instruction renders its arguments, and an argument that is itself a
//! traversal renders another (unprefixed) chain.

mod collections;
mod config;
mod predicate;
mod value;


pub use config::{DEFAULT_MAX_DEPTH, DEFAULT_SOURCE_NAME, StringQuoting, TranslatorConfig};

use crate::{
    bytecode::{Bytecode, Instruction},
    error::{TranslationError, TranslationResult},
};
use tracing::trace;

const STEP_SEPARATOR: char = '.';
const ARGUMENT_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self::with_config(TranslatorConfig::new(source_name))
    }

    pub fn with_config(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn source_name(&self) -> &str {
        &self.config.source_name
    }

    /// Renders `bytecode` as `<source>.<step>.<step>...`.
    pub fn translate(&self, bytecode: &Bytecode) -> TranslationResult<String> {
        let translated = self.translate_chain(bytecode, true, 0)?;
        trace!(
            source = %self.config.source_name,
            steps = bytecode.step_instructions().len(),
            len = translated.len(),
            "translated bytecode"
        );
        Ok(translated)
    }

    /// Only the top-level chain is prefixed with the source name, and only
    /// there may source instructions be emitted.
    fn translate_chain(
        &self,
        bytecode: &Bytecode,
        initial: bool,
        depth: usize,
    ) -> TranslationResult<String> {
        let mut translated = String::new();

        if initial {
            translated.push_str(&self.config.source_name);
            translated.push(STEP_SEPARATOR);
        }

        let sources: &[Instruction] = if initial && self.config.include_source_instructions {
            bytecode.source_instructions()
        } else {
            &[]
        };

        let instructions = sources.iter().chain(bytecode.step_instructions());
        for (index, instruction) in instructions.enumerate() {
            if index > 0 {
                translated.push(STEP_SEPARATOR);
            }
            translated.push_str(&self.translate_instruction(instruction, depth)?);
        }

        Ok(translated)
    }

    fn translate_instruction(
        &self,
        instruction: &Instruction,
        depth: usize,
    ) -> TranslationResult<String> {
        let arguments = instruction
            .arguments
            .iter()
            .map(|arg| self.render_value(arg, depth))
            .collect::<TranslationResult<Vec<String>>>()?
            .join(ARGUMENT_SEPARATOR);

        Ok(format!("{}({arguments})", instruction.operator))
    }

    /// Depth for the contents of a nested structure.
    fn descend(&self, depth: usize) -> TranslationResult<usize> {
        let next = depth + 1;
        match self.config.max_depth {
            Some(limit) if next > limit => Err(TranslationError::DepthLimitExceeded { limit }),
            _ => Ok(next),
        }
    }
}

/// Degenerate but harmless input (empty collections, predicates without
/// operands) renders to this instead of failing the whole translation.
fn absent() -> String {
    String::new()
}
