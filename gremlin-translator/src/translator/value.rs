use super::{StringQuoting, Translator};
use crate::{bytecode::value::Value, error::TranslationResult};

impl Translator {
    /// Renders a single argument. Structural kinds are matched before
    /// literals so a collection or traversal is never printed as a scalar.
    pub(super) fn render_value(&self, value: &Value, depth: usize) -> TranslationResult<String> {
        match value {
            Value::Map(map) => self.render_map(map, depth),
            Value::List(list) => self.render_list(list, depth),
            // the bound value stays on the client, only the name goes out
            Value::Binding(binding) => Ok(binding.key.clone()),
            Value::Traversal(traversal) => {
                self.translate_chain(&traversal.bytecode, false, self.descend(depth)?)
            }
            Value::Bytecode(bytecode) => self.translate_chain(bytecode, false, self.descend(depth)?),
            Value::Predicate(predicate) => self.render_predicate(predicate, depth),
            Value::String(s) => Ok(self.quote(s)),
            Value::Null => Ok("null".to_string()),
            Value::Boolean(b) => Ok(b.to_string()),
            Value::I8(i) => Ok(i.to_string()),
            Value::I16(i) => Ok(i.to_string()),
            Value::I32(i) => Ok(i.to_string()),
            Value::I64(i) => Ok(i.to_string()),
            Value::U8(u) => Ok(u.to_string()),
            Value::U16(u) => Ok(u.to_string()),
            Value::U32(u) => Ok(u.to_string()),
            Value::U64(u) => Ok(u.to_string()),
            Value::F32(f) => Ok(render_float(f64::from(*f), f.to_string())),
            Value::F64(f) => Ok(render_float(*f, f.to_string())),
            Value::Token(token) => Ok(token.as_str().to_string()),
        }
    }

    fn quote(&self, s: &str) -> String {
        match self.config.string_quoting {
            StringQuoting::Verbatim => format!("'{s}'"),
            StringQuoting::Escaped => {
                let mut quoted = String::with_capacity(s.len() + 2);
                quoted.push('\'');
                for c in s.chars() {
                    if matches!(c, '\'' | '\\') {
                        quoted.push('\\');
                    }
                    quoted.push(c);
                }
                quoted.push('\'');
                quoted
            }
        }
    }
}

/// `display` is the native formatting of the original width, so `f32`
/// values do not pick up widening noise.
fn render_float(value: f64, display: String) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Binding, Bytecode, Order, Predicate, Scope, T, Traversal, TranslatorConfig};

    fn render(value: impl Into<Value>) -> String {
        Translator::new("g").render_value(&value.into(), 0).unwrap()
    }

    #[test]
    fn test_scalars_render_unquoted() {
        assert_eq!(render(5), "5");
        assert_eq!(render(-12i64), "-12");
        assert_eq!(render(7u8), "7");
        assert_eq!(render(1.5), "1.5");
        assert_eq!(render(1.5f32), "1.5");
        assert_eq!(render(2.0), "2");
        assert_eq!(render(true), "true");
        assert_eq!(render(Value::Null), "null");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(render(f64::NAN), "NaN");
        assert_eq!(render(f64::INFINITY), "Infinity");
        assert_eq!(render(f32::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_strings_are_single_quoted() {
        assert_eq!(render("airport"), "'airport'");
        assert_eq!(render(""), "''");
    }

    #[test]
    fn test_verbatim_quoting_does_not_escape() {
        assert_eq!(render("O'Hare"), "'O'Hare'");
    }

    #[test]
    fn test_escaped_quoting() {
        let translator = Translator::with_config(
            TranslatorConfig::default().with_string_quoting(StringQuoting::Escaped),
        );
        let rendered = translator
            .render_value(&Value::from(r"O'Hare \ T1"), 0)
            .unwrap();
        assert_eq!(rendered, r"'O\'Hare \\ T1'");
    }

    #[test]
    fn test_tokens_render_bare() {
        assert_eq!(render(T::Id), "id");
        assert_eq!(render(Order::Desc), "desc");
        assert_eq!(render(Scope::Local), "local");
    }

    #[test]
    fn test_binding_renders_name_only() {
        assert_eq!(render(Binding::new("x", "secret")), "x");
    }

    #[test]
    fn test_traversals_render_unprefixed() {
        let bc = Bytecode::new()
            .step("out", vec![])
            .step("simplePath", vec![]);
        assert_eq!(render(Traversal::anonymous(bc.clone())), "out().simplePath()");
        assert_eq!(render(Traversal::spawned(bc.clone())), "out().simplePath()");
        assert_eq!(render(bc), "out().simplePath()");
    }

    #[test]
    fn test_predicate_dispatch() {
        assert_eq!(render(Predicate::eq("a")), "eq('a')");
    }
}
