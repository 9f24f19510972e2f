//! Enum-like constants that steps accept as arguments (`T.id`, `Order.desc`, ...).
//!
//! They render as their bare name, so `by(T.id)` becomes `by(id)`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! token_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for Token {
            fn from(value: $name) -> Self {
                Token::$name(value)
            }
        }
    };
}

token_enum!(
    /// Element accessors.
    T {
        Id => "id",
        Label => "label",
        Key => "key",
        Value => "value",
    }
);

token_enum!(Order {
    Asc => "asc",
    Desc => "desc",
    Shuffle => "shuffle",
});

token_enum!(Scope {
    Global => "global",
    Local => "local",
});

token_enum!(Column {
    Keys => "keys",
    Values => "values",
});

token_enum!(Direction {
    Out => "OUT",
    In => "IN",
    Both => "BOTH",
});

token_enum!(Cardinality {
    Single => "single",
    List => "list",
    Set => "set",
});

token_enum!(Pop {
    First => "first",
    Last => "last",
    All => "all",
    Mixed => "mixed",
});

token_enum!(Barrier {
    NormSack => "normSack",
});

token_enum!(
    /// Sack and reducing operators.
    Operator {
        Sum => "sum",
        Minus => "minus",
        Mult => "mult",
        Div => "div",
        Min => "min",
        Max => "max",
        Assign => "assign",
        And => "and",
        Or => "or",
        AddAll => "addAll",
        SumLong => "sumLong",
    }
);

token_enum!(Pick {
    Any => "any",
    None => "none",
});

token_enum!(Merge {
    OnCreate => "onCreate",
    OnMatch => "onMatch",
    OutV => "outV",
    InV => "inV",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    T(T),
    Order(Order),
    Scope(Scope),
    Column(Column),
    Direction(Direction),
    Cardinality(Cardinality),
    Pop(Pop),
    Barrier(Barrier),
    Operator(Operator),
    Pick(Pick),
    Merge(Merge),
}

impl Token {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::T(t) => t.as_str(),
            Self::Order(t) => t.as_str(),
            Self::Scope(t) => t.as_str(),
            Self::Column(t) => t.as_str(),
            Self::Direction(t) => t.as_str(),
            Self::Cardinality(t) => t.as_str(),
            Self::Pop(t) => t.as_str(),
            Self::Barrier(t) => t.as_str(),
            Self::Operator(t) => t.as_str(),
            Self::Pick(t) => t.as_str(),
            Self::Merge(t) => t.as_str(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
