use super::{ARGUMENT_SEPARATOR, Translator, absent};
use crate::{bytecode::value::Value, error::TranslationResult};
use indexmap::IndexMap;

impl Translator {
    /// `{k:v,k:v}` in insertion order; an empty map renders as nothing.
    pub(super) fn render_map(
        &self,
        map: &IndexMap<Value, Value>,
        depth: usize,
    ) -> TranslationResult<String> {
        if map.is_empty() {
            return Ok(absent());
        }

        let depth = self.descend(depth)?;
        let entries = map
            .iter()
            .map(|(k, v)| -> TranslationResult<String> {
                Ok(format!(
                    "{}:{}",
                    self.render_value(k, depth)?,
                    self.render_value(v, depth)?
                ))
            })
            .collect::<TranslationResult<Vec<String>>>()?
            .join(ARGUMENT_SEPARATOR);

        Ok(format!("{{{entries}}}"))
    }

    /// `[a,b,c]` in declaration order; an empty list renders as nothing.
    pub(super) fn render_list(&self, list: &[Value], depth: usize) -> TranslationResult<String> {
        if list.is_empty() {
            return Ok(absent());
        }

        let depth = self.descend(depth)?;
        let items = list
            .iter()
            .map(|item| self.render_value(item, depth))
            .collect::<TranslationResult<Vec<String>>>()?
            .join(ARGUMENT_SEPARATOR);

        Ok(format!("[{items}]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bytecode, T, Traversal};

    fn render(value: Value) -> String {
        Translator::new("g").render_value(&value, 0).unwrap()
    }

    #[test]
    fn test_list_preserves_order() {
        assert_eq!(render(Value::list([3, 4, 5])), "[3,4,5]");
        assert_eq!(render(Value::list(["b", "a"])), "['b','a']");
    }

    #[test]
    fn test_empty_collections_render_as_nothing() {
        assert_eq!(render(Value::List(vec![])), "");
        assert_eq!(render(Value::Map(IndexMap::new())), "");
    }

    #[test]
    fn test_map_renders_in_insertion_order() {
        let map = Value::map([
            (Value::from("name"), Value::from("marko")),
            (Value::from(T::Label), Value::from("person")),
            (Value::from("age"), Value::from(29)),
        ]);
        assert_eq!(render(map), "{'name':'marko',label:'person','age':29}");
    }

    #[test]
    fn test_nested_collections() {
        let nested = Value::list([
            Value::list([1, 2]),
            Value::map([("k", Value::list(["v"]))]),
            Value::List(vec![]),
        ]);
        assert_eq!(render(nested), "[[1,2],{'k':['v']},]");
    }

    #[test]
    fn test_traversal_inside_list() {
        let traversal = Traversal::anonymous(Bytecode::new().step("values", vec!["city".into()]));
        assert_eq!(
            render(Value::list([Value::from(traversal), Value::from(1)])),
            "[values('city'),1]"
        );
    }
}
