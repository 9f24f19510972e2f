use super::value::Value;
use serde::{Deserialize, Serialize};

/// A named comparison such as `eq('a')` or `within(['a','b'])`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub operator: String,
    #[serde(default)]
    pub values: Vec<Value>,
}

macro_rules! unary_predicates {
    ($($(#[$meta:meta])* $fn_name:ident => $operator:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $fn_name(value: impl Into<Value>) -> Self {
                Self::new($operator, vec![value.into()])
            }
        )+
    };
}

macro_rules! binary_predicates {
    ($($fn_name:ident => $operator:literal),+ $(,)?) => {
        $(
            pub fn $fn_name(first: impl Into<Value>, second: impl Into<Value>) -> Self {
                Self::new($operator, vec![first.into(), second.into()])
            }
        )+
    };
}

impl Predicate {
    pub fn new(operator: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            operator: operator.into(),
            values,
        }
    }

    unary_predicates!(
        eq => "eq",
        neq => "neq",
        lt => "lt",
        lte => "lte",
        gt => "gt",
        gte => "gte",
        containing => "containing",
        not_containing => "notContaining",
        starting_with => "startingWith",
        not_starting_with => "notStartingWith",
        ending_with => "endingWith",
        not_ending_with => "notEndingWith",
        regex => "regex",
        not_regex => "notRegex",
    );

    binary_predicates!(
        inside => "inside",
        outside => "outside",
        between => "between",
    );

    /// Membership test; every value becomes its own operand.
    pub fn within<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::new("within", values.into_iter().map(Into::into).collect())
    }

    pub fn without<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::new("without", values.into_iter().map(Into::into).collect())
    }

    pub fn and(self, other: Predicate) -> Self {
        Self::new("and", vec![Value::Predicate(self), Value::Predicate(other)])
    }

    pub fn or(self, other: Predicate) -> Self {
        Self::new("or", vec![Value::Predicate(self), Value::Predicate(other)])
    }

    pub fn negate(self) -> Self {
        Self::new("not", vec![Value::Predicate(self)])
    }

    /// A predicate without an operator or without operands carries no
    /// filter and renders as nothing.
    pub fn is_absent(&self) -> bool {
        self.operator.is_empty() || self.values.is_empty()
    }
}
