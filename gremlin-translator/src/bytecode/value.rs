use super::{
    Binding, Bytecode, Predicate, Traversal,
    tokens::{
        Barrier, Cardinality, Column, Direction, Merge, Operator, Order, Pick, Pop, Scope, T,
        Token,
    },
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Every kind of argument an instruction can carry.
///
/// Floats compare and hash by bit pattern so that any value, including
/// `NaN`, can key a [`Value::Map`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Token(Token),
    List(Vec<Value>),
    Map(#[serde(with = "map_entries")] IndexMap<Value, Value>),
    Binding(Binding),
    Traversal(Box<Traversal>),
    Bytecode(Box<Bytecode>),
    Predicate(Predicate),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Token(_) => "Token",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Binding(_) => "Binding",
            Self::Traversal(_) => "Traversal",
            Self::Bytecode(_) => "Bytecode",
            Self::Predicate(_) => "Predicate",
        }
    }

    pub fn list<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn map<K: Into<Value>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(s), Self::Boolean(o)) => s == o,
            (Self::I8(s), Self::I8(o)) => s == o,
            (Self::I16(s), Self::I16(o)) => s == o,
            (Self::I32(s), Self::I32(o)) => s == o,
            (Self::I64(s), Self::I64(o)) => s == o,
            (Self::U8(s), Self::U8(o)) => s == o,
            (Self::U16(s), Self::U16(o)) => s == o,
            (Self::U32(s), Self::U32(o)) => s == o,
            (Self::U64(s), Self::U64(o)) => s == o,
            (Self::F32(s), Self::F32(o)) => s.to_bits() == o.to_bits(),
            (Self::F64(s), Self::F64(o)) => s.to_bits() == o.to_bits(),
            (Self::String(s), Self::String(o)) => s == o,
            (Self::Token(s), Self::Token(o)) => s == o,
            (Self::List(s), Self::List(o)) => s == o,
            (Self::Map(s), Self::Map(o)) => s == o,
            (Self::Binding(s), Self::Binding(o)) => s == o,
            (Self::Traversal(s), Self::Traversal(o)) => s == o,
            (Self::Bytecode(s), Self::Bytecode(o)) => s == o,
            (Self::Predicate(s), Self::Predicate(o)) => s == o,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Boolean(v) => v.hash(state),
            Self::I8(v) => v.hash(state),
            Self::I16(v) => v.hash(state),
            Self::I32(v) => v.hash(state),
            Self::I64(v) => v.hash(state),
            Self::U8(v) => v.hash(state),
            Self::U16(v) => v.hash(state),
            Self::U32(v) => v.hash(state),
            Self::U64(v) => v.hash(state),
            Self::F32(v) => v.to_bits().hash(state),
            Self::F64(v) => v.to_bits().hash(state),
            Self::String(v) => v.hash(state),
            Self::Token(v) => v.hash(state),
            Self::List(v) => v.hash(state),
            // IndexMap equality ignores order, so the hash must too
            Self::Map(v) => {
                v.len().hash(state);
                let mut entries: u64 = 0;
                for entry in v {
                    let mut hasher = std::collections::hash_map::DefaultHasher::new();
                    entry.hash(&mut hasher);
                    entries = entries.wrapping_add(hasher.finish());
                }
                entries.hash(state);
            }
            Self::Binding(v) => v.hash(state),
            Self::Traversal(v) => v.hash(state),
            Self::Bytecode(v) => v.hash(state),
            Self::Predicate(v) => v.hash(state),
        }
    }
}

/// Keyed collections travel as `[[key, value], ...]` so that non-string
/// keys survive formats like JSON.
mod map_entries {
    use super::Value;
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(map: &IndexMap<Value, Value>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<IndexMap<Value, Value>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<(Value, Value)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_primitive!(
    bool => Boolean,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Token => Token,
    Binding => Binding,
    Predicate => Predicate,
);

macro_rules! impl_from_token {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Token(Token::from(value))
                }
            }
        )+
    };
}

impl_from_token!(
    T,
    Order,
    Scope,
    Column,
    Direction,
    Cardinality,
    Pop,
    Barrier,
    Operator,
    Pick,
    Merge
);

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<usize> for Value {
    #[inline]
    fn from(value: usize) -> Self {
        Self::U64(value as u64)
    }
}

impl From<Traversal> for Value {
    #[inline]
    fn from(value: Traversal) -> Self {
        Self::Traversal(Box::new(value))
    }
}

impl From<Bytecode> for Value {
    #[inline]
    fn from(value: Bytecode) -> Self {
        Self::Bytecode(Box::new(value))
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(value: Vec<V>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<IndexMap<K, V>> for Value {
    fn from(value: IndexMap<K, V>) -> Self {
        Self::map(value)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}
