use super::{ARGUMENT_SEPARATOR, Translator, absent};
use crate::{bytecode::Predicate, error::TranslationResult};

impl Translator {
    /// `op(value)` for a single operand, `op([v1,v2,...])` otherwise.
    pub(super) fn render_predicate(
        &self,
        predicate: &Predicate,
        depth: usize,
    ) -> TranslationResult<String> {
        if predicate.is_absent() {
            return Ok(absent());
        }

        let depth = self.descend(depth)?;
        let operands = match predicate.values.as_slice() {
            [single] => self.render_value(single, depth)?,
            values => {
                let mut operands = String::from("[");
                let last = values.len() - 1;
                for (index, value) in values.iter().enumerate() {
                    let rendered = self.render_value(value, depth)?;
                    // an operand that rendered to nothing takes no separator
                    let separate = index < last && !rendered.is_empty();
                    operands.push_str(&rendered);
                    if separate {
                        operands.push_str(ARGUMENT_SEPARATOR);
                    }
                }
                operands.push(']');
                operands
            }
        };

        Ok(format!("{}({operands})", predicate.operator))
    }
}
